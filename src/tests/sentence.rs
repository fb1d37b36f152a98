use crate::{Category, Error, LineEnding, Registry, RenderOptions, Value, parse};

const GGA: &str = "$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,100.00,M,-33.9,M,,0000*6D";

#[test]
fn test_gga() {
    let mut msg = parse(&format!("{GGA}\n")).unwrap();

    assert_eq!(msg.category(), Category::Talker);
    assert_eq!(msg.talker(), Some("GP"));
    assert_eq!(msg.sentence_type(), Some("GGA"));
    assert_eq!(msg.shape().name(), "GGA");

    let t = time::Time::from_hms_milli(18, 43, 53, 70).unwrap();
    assert_eq!(msg.get("timestamp"), Ok(Value::Time(t)));
    assert_eq!(msg.get("lat"), Ok(Value::from("1929.045")));
    assert_eq!(msg.get("lat_dir"), Ok(Value::from("S")));
    assert_eq!(msg.get("gps_qual"), Ok(Value::Int(1)));
    assert_eq!(msg.get("num_sats"), Ok(Value::from("04")));
    assert_eq!(msg.get("altitude"), Ok(Value::Float(100.0)));
    assert_eq!(msg.get("age_gps_data"), Ok(Value::from("")));
    assert_eq!(msg.get("ref_station_id"), Ok(Value::from("0000")));
    assert_eq!(msg.to_string(), GGA);

    msg.set("altitude", 200.0).unwrap();
    assert_eq!(msg.get("altitude"), Ok(Value::Float(200.0)));
    assert_eq!(
        msg.to_string(),
        "$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,200.0,M,-33.9,M,,0000*5E"
    );
}

#[test]
fn test_round_trip() {
    let cases = [
        GGA,
        "$IIMWV,271.0,R,000.2,N,A*3B",
        "$GPRTE,2,1,c,0,PBRCPK,PBRTO,PTELGR,PPLAND*58",
        "$GPR00,A,B,C*29",
        "$GPVTG,108.53,T,,M,0.04,N,0.07,K,A*31",
        "$GPZDA,010203.05,04,07,2021,-5,30*7A",
        "$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68",
        "$CCGPQ,GGA*2B",
    ];

    for line in cases {
        let msg = parse(line).unwrap();
        assert_eq!(msg.to_string(), line, "Failed: {line:?}");
    }
}

#[test]
fn test_round_trip_normalizes_case_and_whitespace() {
    let msg = parse("  $gpr00,A,B,C*09\r\n").unwrap();
    assert_eq!(msg.talker(), Some("GP"));
    assert_eq!(msg.render(&RenderOptions::default().checksum(false)), "$GPR00,A,B,C");
    assert_eq!(msg.to_string(), "$GPR00,A,B,C*29");
}

#[test]
fn test_route_waypoints() {
    let msg = parse("$GPRTE,2,1,c,0,PBRCPK,PBRTO,PTELGR,PPLAND*58").unwrap();
    assert_eq!(msg.get("active_route_id"), Ok(Value::from("0")));
    assert_eq!(msg.extra_fields(), ["PBRCPK", "PBRTO", "PTELGR", "PPLAND"]);

    let msg = parse("$GPR00,A,B,C*29").unwrap();
    assert!(msg.shape().is_empty());
    assert_eq!(msg.fields(), ["A", "B", "C"]);
    assert_eq!(msg.extra_fields(), ["A", "B", "C"]);
}

#[test]
fn test_vtg_empty_coerced_field() {
    let msg = parse("$GPVTG,108.53,T,,M,0.04,N,0.07,K,A*31").unwrap();
    assert_eq!(msg.get("true_track"), Ok(Value::Float(108.53)));
    assert_eq!(msg.get("mag_track"), Ok(Value::Null));
    assert_eq!(msg.get("mag_track_sym"), Ok(Value::from("M")));
    assert_eq!(msg.get("faa_mode"), Ok(Value::from("A")));
}

#[test]
fn test_malformed_field_reads_raw() {
    let msg = parse("$GPVTG,1O8.53,T,,M").unwrap();
    assert_eq!(msg.get("true_track"), Ok(Value::from("1O8.53")));

    // the named fields past the end read as empty
    assert_eq!(msg.get("spd_over_grnd_kts"), Ok(Value::Null));
    assert_eq!(msg.get("faa_mode"), Ok(Value::from("")));
}

#[test]
fn test_set_does_not_grow_parsed_record() {
    let mut msg = parse("$GPVTG,108.53").unwrap();
    let err = msg.set("faa_mode", "A").unwrap_err();

    assert!(matches!(err, Error::FieldOutOfRange { index: 8, len: 1, .. }));
    assert_eq!(msg.fields(), ["108.53"]);
    assert_eq!(msg.render(&RenderOptions::default().checksum(false)), "$GPVTG,108.53");

    msg.set("true_track", 99.5).unwrap();
    assert_eq!(msg.fields(), ["99.5"]);
}

#[test]
fn test_unknown_field() {
    let mut msg = parse(GGA).unwrap();
    assert_eq!(msg.get("speed"), Err(Error::UnknownField("speed".to_owned())));
    assert_eq!(msg.set("speed", 1.0), Err(Error::UnknownField("speed".to_owned())));
    assert_eq!(msg.to_string(), GGA);
}

#[test]
fn test_set_get() {
    let mut msg = parse("$GPZDA,010203.05,04,07,2021,-5,30*7A").unwrap();

    let t = time::Time::from_hms(23, 59, 1).unwrap();
    msg.set("timestamp", t).unwrap();
    assert_eq!(msg.get("timestamp"), Ok(Value::Time(t)));

    msg.set("year", 2022).unwrap();
    assert_eq!(msg.get("year"), Ok(Value::Int(2022)));

    msg.set("local_zone", Value::Null).unwrap();
    assert_eq!(msg.get("local_zone"), Ok(Value::Null));

    assert_eq!(
        msg.render(&RenderOptions::default().checksum(false)),
        "$GPZDA,235901,04,07,2022,,30"
    );

    let mut msg =
        parse("$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68").unwrap();
    let d = time::Date::from_calendar_date(2024, time::Month::February, 29).unwrap();
    msg.set("datestamp", d).unwrap();
    assert_eq!(msg.get("datestamp"), Ok(Value::Date(d)));
    assert_eq!(msg.get_raw("datestamp"), Ok("290224"));
}

#[test]
fn test_position() {
    let msg = parse("$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68").unwrap();
    let lat = msg.latitude().unwrap();
    let lon = msg.longitude().unwrap();

    assert!((lat - 49.274166666666666).abs() < 1e-12);
    assert!((lon + 123.18533333333333).abs() < 1e-12);

    let d = time::Date::from_calendar_date(1994, time::Month::November, 19).unwrap();
    assert_eq!(msg.get("datestamp"), Ok(Value::Date(d)));
}

#[test]
fn test_position_minutes_and_seconds() {
    let msg =
        parse("$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68").unwrap();

    let close = |a: Option<f64>, b: f64| (a.unwrap() - b).abs() < 1e-6;
    assert!(close(msg.latitude_minutes(), 16.45));
    assert!(close(msg.latitude_seconds(), 27.0));
    assert!(close(msg.longitude_minutes(), 11.12));
    assert!(close(msg.longitude_seconds(), 7.2));

    // southern latitudes still give positive parts
    let msg = parse(GGA).unwrap();
    assert!(close(msg.latitude_minutes(), 29.045));
    assert!(close(msg.latitude_seconds(), 2.7));
}

#[test]
fn test_is_valid() {
    let cases = [
        (GGA, Some(true)),
        ("$GPGGA,184353.07,1929.045,S,02410.506,E,0,04,2.6,100.00,M,-33.9,M,,0000", Some(false)),
        ("$GPGGA,184353.07,1929.045,S,02410.506,E,,04", Some(false)),
        ("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39", Some(true)),
        ("$GPGSA,A,1,,,,,,,,,,,,,,,*1E", Some(false)),
        ("$IIVBW,1.2,0.1,A,1.3,0.2,A*41", Some(true)),
        ("$IIVBW,1.2,0.1,A,1.3,0.2,V*56", Some(false)),
        ("$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68", Some(true)),
        ("$IIMWV,271.0,R,000.2,N,V", Some(false)),
        ("$IIDBT,12.5,f,3.8,M", None),
    ];

    for (line, expected) in cases {
        let msg = parse(line).unwrap();
        assert_eq!(msg.is_valid(), expected, "Failed: {line}");
    }
}

#[test]
fn test_datetime() {
    let msg =
        parse("$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68").unwrap();

    let d = time::Date::from_calendar_date(1994, time::Month::November, 19).unwrap();
    let t = time::Time::from_hms(22, 54, 46).unwrap();
    assert_eq!(msg.datestamp(), Some(d));
    assert_eq!(msg.timestamp(), Some(t));
    assert_eq!(msg.datetime(), Some(time::PrimitiveDateTime::new(d, t)));

    // GGA has a time but no date
    let msg = parse(GGA).unwrap();
    assert!(msg.timestamp().is_some());
    assert_eq!(msg.datestamp(), None);
    assert_eq!(msg.datetime(), None);
}

#[test]
fn test_zda_local_time() {
    let msg = parse("$GPZDA,010203.05,04,07,2021,-5,30*7A").unwrap();

    let d = time::Date::from_calendar_date(2021, time::Month::July, 4).unwrap();
    let t = time::Time::from_hms_milli(1, 2, 3, 50).unwrap();
    assert_eq!(msg.datestamp(), Some(d));
    assert_eq!(msg.datetime(), Some(time::PrimitiveDateTime::new(d, t)));

    // hours and minutes are added with their own signs
    let offset = time::UtcOffset::from_hms(-4, -30, 0).unwrap();
    assert_eq!(msg.utc_offset(), Some(offset));

    let local = msg.local_datetime().unwrap();
    assert_eq!(local.offset(), offset);
    assert_eq!(local, time::PrimitiveDateTime::new(d, t).assume_utc());
    assert_eq!((local.day(), local.hour(), local.minute()), (3, 20, 32));

    let msg = parse("$GPZDA,010203.05,04,07,2021,,").unwrap();
    assert_eq!(msg.utc_offset(), None);
    assert_eq!(msg.local_datetime(), None);
}

#[test]
fn test_seatalk_command_name() {
    let msg = parse("$STALK,84,86,26,97,02,00,00,00,08*6F").unwrap();
    assert_eq!(msg.sentence_type(), Some("ALK"));
    assert_eq!(
        msg.command_name(),
        Some("Compass heading  Autopilot course and Rudder position")
    );

    let msg = parse("$STALK,FF,01*40").unwrap();
    assert_eq!(msg.command_name(), Some("Unknown Command"));

    assert_eq!(parse(GGA).unwrap().command_name(), None);
    assert_eq!(parse("$PMTK220,200*2C").unwrap().command_name(), None);
}

#[test]
fn test_render_options() {
    let msg = parse("$IIMWV,271.0,R,000.2,N,A*3B").unwrap();

    let opts = RenderOptions::default().line_ending(LineEnding::CrLf);
    assert_eq!(msg.render(&opts), "$IIMWV,271.0,R,000.2,N,A*3B\r\n");

    let opts = RenderOptions::default()
        .checksum(false)
        .dollar(false)
        .line_ending(LineEnding::Custom("\n".to_owned()));
    assert_eq!(msg.render(&opts), "IIMWV,271.0,R,000.2,N,A\n");
}

#[test]
fn test_build_talker() {
    let registry = Registry::standard();

    let mut msg = registry.talker("II", "MWV").unwrap();
    assert_eq!(msg.fields().len(), msg.shape().len());

    msg.set("wind_angle", 271.0).unwrap();
    msg.set("reference", "R").unwrap();
    msg.set("wind_speed", 0.2).unwrap();
    msg.set("wind_speed_units", "N").unwrap();
    msg.set("status", "A").unwrap();
    assert_eq!(msg.to_string(), "$IIMWV,271.0,R,0.2,N,A*3B");

    assert_eq!(parse(&msg.to_string()), Ok(msg));
}

#[test]
fn test_build_query() {
    let msg = Registry::standard().query("cc", "gp", "gga").unwrap();
    assert_eq!(msg.category(), Category::Query);
    assert_eq!(msg.listener(), Some("GP"));
    assert_eq!(msg.to_string(), "$CCGPQ,GGA*2B");
    assert_eq!(parse("$CCGPQ,GGA*2B"), Ok(msg));
}
