use crate::{ChecksumMode, Error, ErrorPolicy, Registry, StreamReader, parse};

const DATA: &str = "$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,100.00,M,-33.9,M,,0000*6D\r\n\
$IIMWV,271.0,R,000.2,N,A*3B\r\n\
$PASHR,LTN,3*3D\r\n\
$GPABC,1,2,3\r\n\
$GPRTE,2,1,c,0,PBRCPK,PBRTO,PTELGR,PPLAND*58\r\n";

#[test]
fn test_chunk_sizes() {
    let expected: Vec<_> = DATA.lines().map(parse).collect();

    for size in [1, 2, 3, 7, 16, 64, DATA.len()] {
        let mut reader = StreamReader::new(ErrorPolicy::Yield);
        let mut parsed = Vec::new();

        for chunk in DATA.as_bytes().chunks(size) {
            parsed.extend(reader.feed_bytes(chunk));
        }

        assert_eq!(parsed, expected, "Failed with chunks of {size}");
        assert_eq!(reader.pending(), "");
    }
}

#[test]
fn test_policies() {
    let mut reader = StreamReader::new(ErrorPolicy::Yield);
    let results: Vec<_> = reader.feed(DATA).collect();
    assert_eq!(results.len(), 5);
    assert!(results[3].as_ref().unwrap_err().is_sentence_type_error());

    let mut reader = StreamReader::new(ErrorPolicy::Ignore);
    let results: Vec<_> = reader.feed(DATA).collect();
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(Result::is_ok));

    let mut reader = StreamReader::new(ErrorPolicy::Raise);
    let results: Vec<_> = reader.feed(DATA).collect();
    assert_eq!(results.len(), 4);
    assert!(results[3].is_err());
}

#[test]
fn test_batch_is_lazy_and_fused() {
    let mut reader = StreamReader::new(ErrorPolicy::Raise);
    let mut batch = reader.feed(DATA);

    assert!(batch.next().unwrap().is_ok());
    assert!(batch.by_ref().nth(2).unwrap().is_err());
    assert!(batch.next().is_none());
    assert!(batch.next().is_none());
}

#[test]
fn test_policy_from_config_string() {
    let policy: ErrorPolicy = "ignore".parse().unwrap();
    let mut reader = StreamReader::new(policy);
    assert_eq!(reader.policy(), ErrorPolicy::Ignore);
    assert_eq!(reader.feed("junk\n").count(), 0);

    assert_eq!(
        "warn".parse::<ErrorPolicy>(),
        Err(Error::InvalidErrorPolicy("warn".to_owned()))
    );
}

#[test]
fn test_custom_registry_and_strict_checksum() {
    let registry = Registry::nmea0183();
    let mut reader = StreamReader::with_registry(&registry, ErrorPolicy::Ignore)
        .checksum_mode(ChecksumMode::Required);

    let results: Vec<_> = reader.feed(DATA).collect();
    let types: Vec<_> = results
        .iter()
        .map(|r| r.as_ref().unwrap().shape().name())
        .collect();
    assert_eq!(types, ["GGA", "MWV", "LTN", "RTE"]);
}
