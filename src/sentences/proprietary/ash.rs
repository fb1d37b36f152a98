//! Ashtech proprietary sentences.

use nom::{
    IResult, Parser,
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::all_consuming,
};

use crate::{Dispatch, Manufacturer, Shape, coerce, fields};

/// PASH - Ashtech
///
/// Messages are tagged by the second token, except the attitude message
/// `ATT` which carries no tag and is recognized by a timestamp in that
/// position instead.
///
/// ```text
/// $PASHR,LTN,3*3D
/// $PASHR,130533.620,0.311,T,-80.467,-1.395,,0.066,0.067,0.215,2,3*0B
/// ```
pub fn manufacturer() -> Manufacturer {
    Manufacturer::new(
        "ASH",
        Shape::new(
            "ASH",
            "Ashtech message",
            fields![
                ("R", "_r"),
                ("Subtype", "subtype"),
            ],
        ),
    )
    .dispatch(Dispatch::Custom(subtype))
    .subtype(
        "ATT",
        Shape::new(
            "ATT",
            "Attitude",
            fields![
                ("R", "_r"),
                ("Timestamp", "timestamp", coerce::timestamp),
                ("Heading Angle", "true_heading", coerce::float),
                ("Is True Heading", "is_true_heading"),
                ("Roll Angle", "roll", coerce::float),
                ("Pitch Angle", "pitch", coerce::float),
                ("Heave", "heave", coerce::float),
                ("Roll Accuracy Estimate", "roll_accuracy", coerce::float),
                ("Pitch Accuracy Estimate", "pitch_accuracy", coerce::float),
                ("Heading Accuracy Estimate", "heading_accuracy", coerce::float),
                ("Aiding Status", "aiding_status", coerce::integer),
                ("IMU Status", "imu_status", coerce::integer),
            ],
        ),
    )
    .subtype(
        "HPR",
        Shape::new(
            "HPR",
            "Heading, pitch and roll",
            fields![
                ("R", "_r"),
                ("Subtype", "subtype"),
                ("Timestamp", "timestamp", coerce::timestamp),
                ("Heading Angle", "heading", coerce::float),
                ("Pitch Angle", "pitch", coerce::float),
                ("Roll Angle", "roll", coerce::float),
                ("Carrier measurement RMS", "carrier_rms", coerce::float),
                ("Baseline measurement RMS", "baseline_rms", coerce::float),
                ("Integer Ambiguity", "integer_ambiguity"),
                ("Mode", "mode"),
                ("Status", "status"),
                ("PDOP", "pdop", coerce::float),
            ],
        ),
    )
    .subtype(
        "LTN",
        Shape::new(
            "LTN",
            "Latency",
            fields![
                ("R", "_r"),
                ("Subtype", "subtype"),
                ("Latency (ms)", "latency", coerce::integer),
            ],
        ),
    )
    .subtype(
        "POS",
        Shape::new(
            "POS",
            "Position",
            fields![
                ("R", "_r"),
                ("Subtype", "subtype"),
                ("Solution Type", "mode", coerce::integer),
                ("Satellites used in Solution", "sat_count", coerce::integer),
                ("Timestamp", "timestamp", coerce::timestamp),
                ("Latitude", "lat"),
                ("Latitude Direction", "lat_dir"),
                ("Longitude", "lon"),
                ("Longitude Direction", "lon_dir"),
                ("Altitude above WGS84 ellipsoid, meters", "altitude"),
                ("Empty", "__"),
                ("True Track/Course Over Ground", "course", coerce::float),
                ("Speed over ground", "spd_over_grnd", coerce::float),
                ("Vertical velocity", "vertical_velocity", coerce::float),
                ("PDOP", "pdop", coerce::float),
                ("HDOP", "hdop", coerce::float),
                ("VDOP", "vdop", coerce::float),
                ("TDOP", "tdop", coerce::float),
                ("Base station ID", "station_id", coerce::integer),
            ],
        ),
    )
    .subtype(
        "VEL",
        Shape::new(
            "VEL",
            "Velocity",
            fields![
                ("R", "_r"),
                ("Subtype", "subtype"),
                ("ENU", "enu", coerce::integer),
                ("Timestamp", "timestamp", coerce::timestamp),
                ("Easting", "easting", coerce::float),
                ("Northing", "northing", coerce::float),
                ("Vertical", "vertical", coerce::float),
                ("Easting RMS", "easting_rms", coerce::float),
                ("Northing RMS", "northing_rms", coerce::float),
                ("Vertical RMS", "vertical_rms", coerce::float),
                ("Applied effective velocity smoothing time (ms)", "smoothing", coerce::float),
            ],
        ),
    )
}

/// Picks the Ashtech subtype: `ATT` when the second token looks like a
/// `hhmmss.sss` timestamp, the second token itself otherwise.
fn subtype(fields: &[String]) -> Option<String> {
    let token = fields.get(1)?;
    if is_attitude_timestamp(token) {
        return Some("ATT".to_owned());
    }
    Some(token.clone())
}

fn is_attitude_timestamp(token: &str) -> bool {
    let parsed: IResult<&str, _> =
        all_consuming((digits(6, 6), char('.'), digits(2, 3))).parse(token);
    parsed.is_ok()
}

fn digits<'a>(
    min: usize,
    max: usize,
) -> impl Parser<&'a str, Output = &'a str, Error = nom::error::Error<&'a str>> {
    take_while_m_n(min, max, |c: char| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &str) -> Vec<String> {
        raw.split(',').map(str::to_owned).collect()
    }

    #[test]
    fn test_attitude_detection() {
        assert_eq!(subtype(&tokens("R,130533.620,0.311")), Some("ATT".to_owned()));
        assert_eq!(subtype(&tokens("R,130533.62,0.311")), Some("ATT".to_owned()));
        assert_eq!(subtype(&tokens("R,LTN,3")), Some("LTN".to_owned()));
        assert_eq!(subtype(&tokens("R,130533,0.311")), Some("130533".to_owned()));
        assert_eq!(subtype(&tokens("R")), None);
    }
}
