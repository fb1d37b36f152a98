use crate::{
    Category, ChecksumMode, Error, Registry, Shape, Value, coerce, fields, parse, sentences,
};

#[test]
fn test_unknown_talker_type() {
    let err = parse("$GPABC,1,2,3").unwrap_err();
    assert_eq!(
        err,
        Error::UnknownSentenceType {
            sentence_type: "ABC".to_owned(),
            line: "$GPABC,1,2,3".to_owned(),
        }
    );
    assert!(err.is_sentence_type_error());
}

#[test]
fn test_unknown_query_type() {
    let err = parse("$CCGPQ,ABC").unwrap_err();
    assert!(err.is_sentence_type_error());

    let err = Registry::standard().query("CC", "GP", "ABC").unwrap_err();
    assert_eq!(
        err,
        Error::UnknownSentenceType {
            sentence_type: "ABC".to_owned(),
            line: "$CCGPQ,ABC".to_owned(),
        }
    );
}

#[test]
fn test_checksum_checked_before_type() {
    let err = parse("$GPABC,1,2,3*00").unwrap_err();
    assert!(err.is_checksum_error());
}

#[test]
fn test_standard_talker_types() {
    let registry = Registry::standard();

    for key in ["GGA", "RMC", "GSV", "VTG", "MWV", "RTE", "R00", "ZDA", "DBT", "HDG"] {
        let shape = registry.resolve(Category::Talker, key);
        assert_eq!(shape.map(|s| s.name()), Some(key), "Failed: {key}");
    }

    assert!(registry.resolve(Category::Talker, "ABC").is_none());
}

#[test]
fn test_every_talker_shape_round_trips() {
    let registry = Registry::standard();

    // a sentence without fields renders as `$GPR00,` and reads back with one empty field
    for shape in sentences::talker::shapes().into_iter().filter(|s| !s.is_empty()) {
        let mut msg = registry.talker("GP", shape.name()).unwrap();
        for (i, field) in shape.fields().iter().enumerate() {
            if field.coercion().is_none() {
                msg.set(field.key(), format!("x{i}")).unwrap();
            }
        }

        let line = msg.to_string();
        let parsed = registry.parse(&line, ChecksumMode::Required).unwrap();
        assert_eq!(parsed, msg, "Failed: {line}");
        assert_eq!(parsed.to_string(), line);
    }
}

#[test]
fn test_every_manufacturer_is_registered() {
    let registry = Registry::standard();

    for manufacturer in sentences::proprietary::manufacturers() {
        let code = manufacturer.code();
        assert_eq!(code.len(), 3, "Failed: {code}");
        assert!(registry.manufacturer(code).is_some(), "Failed: {code}");
        assert!(registry.resolve(Category::Proprietary, code).is_some(), "Failed: {code}");
    }
}

#[test]
fn test_custom_registry() {
    let mut registry = Registry::new();
    registry.register(
        Category::Talker,
        "DBT",
        Shape::new(
            "DBT",
            "Depth Below Transducer",
            fields![
                ("Water depth, feet", "depth_feet", coerce::float),
                ("Feet", "unit_feet"),
                ("Water depth, Meters", "depth_meters", coerce::float),
                ("Meters", "unit_meters"),
            ],
        ),
    );

    let msg = registry.parse("$IIDBT,12.5,f,,*2C", ChecksumMode::Required).unwrap();
    assert_eq!(msg.get("depth_feet"), Ok(Value::Float(12.5)));
    assert_eq!(msg.get("depth_meters"), Ok(Value::Null));

    // nothing else is known to this registry
    assert!(registry.parse("$IIMWV,271.0,R,000.2,N,A*3B", ChecksumMode::Optional).is_err());
    assert!(registry.parse("$CCIIQ,DBT", ChecksumMode::Optional).is_err());

    let msg = registry.parse("$PASHR,LTN,3*3D", ChecksumMode::Optional).unwrap();
    assert_eq!(msg.subtype(), None);
    assert!(msg.shape().is_empty());
}
