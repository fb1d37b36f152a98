//! # Field Coercions
//!
//! Stock coercion functions for [`Field`](crate::Field) descriptors. A coercion is
//! a total function from a non-empty raw field to a [`Value`]; it may fail, in
//! which case the field read falls back to the raw text.
//!
//! ```rust
//! use nmea0183_records::{Value, coerce};
//!
//! assert_eq!(coerce::integer("04"), Ok(Value::Int(4)));
//! assert_eq!(coerce::float("-33.9"), Ok(Value::Float(-33.9)));
//! assert!(coerce::float("GHT+25.478").is_err());
//! ```

use nom::{
    Parser,
    character::complete::digit1,
    combinator::{all_consuming, opt},
};

use crate::{
    CoerceError, Value,
    parsing::{fixed_digits, fraction, fraction_nanos},
};

/// Parses a signed integer.
pub fn integer(s: &str) -> Result<Value, CoerceError> {
    s.trim()
        .parse::<i64>()
        .map(Value::Int)
        .map_err(|_| CoerceError::new(s, "integer"))
}

/// Parses a floating point number.
pub fn float(s: &str) -> Result<Value, CoerceError> {
    s.trim()
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|_| CoerceError::new(s, "float"))
}

/// Parses a UTC time of day given as `hhmmss[.f...]`.
///
/// ```rust
/// use nmea0183_records::{Value, coerce};
///
/// let t = time::Time::from_hms_milli(18, 43, 53, 70).unwrap();
/// assert_eq!(coerce::timestamp("184353.07"), Ok(Value::Time(t)));
/// ```
pub fn timestamp(s: &str) -> Result<Value, CoerceError> {
    let err = || CoerceError::new(s, "time");

    let (_, (hour, minute, second, frac)) = all_consuming((
        fixed_digits::<u8>(2),
        fixed_digits::<u8>(2),
        fixed_digits::<u8>(2),
        opt(fraction),
    ))
    .parse(s)
    .map_err(|_| err())?;

    let nanos = frac.map_or(0, fraction_nanos);
    time::Time::from_hms_nano(hour, minute, second, nanos)
        .map(Value::Time)
        .map_err(|_| err())
}

/// Parses a date given as `ddmmyy`.
///
/// Two digit years from 69 to 99 are placed in the 1900s, the others in the 2000s.
///
/// ```rust
/// use nmea0183_records::{Value, coerce};
///
/// let d = time::Date::from_calendar_date(2012, time::Month::November, 1).unwrap();
/// assert_eq!(coerce::datestamp("011112"), Ok(Value::Date(d)));
/// ```
pub fn datestamp(s: &str) -> Result<Value, CoerceError> {
    let err = || CoerceError::new(s, "date");

    let (_, (day, month, year)) = all_consuming((
        fixed_digits::<u8>(2),
        fixed_digits::<u8>(2),
        fixed_digits::<i32>(2),
    ))
    .parse(s)
    .map_err(|_| err())?;

    let year = if year < 69 { 2000 + year } else { 1900 + year };
    let month = time::Month::try_from(month).map_err(|_| err())?;

    time::Date::from_calendar_date(year, month, day)
        .map(Value::Date)
        .map_err(|_| err())
}

/// Parses seconds since the Unix epoch, with an optional fraction, into a UTC date and time.
pub fn unix_time(s: &str) -> Result<Value, CoerceError> {
    let err = || CoerceError::new(s, "datetime");

    let secs = s.trim().parse::<f64>().map_err(|_| err())?;
    if !secs.is_finite() {
        return Err(err());
    }

    time::OffsetDateTime::from_unix_timestamp_nanos((secs * 1e9).round() as i128)
        .map(Value::DateTime)
        .map_err(|_| err())
}

/// Converts a coordinate given as degrees and minutes (`dddmm.mmmm`) to signed
/// decimal degrees, without the hemisphere sign.
///
/// An empty string or `"0"` converts to `0.0`.
///
/// ```rust
/// use nmea0183_records::coerce::dm_to_sd;
///
/// assert_eq!(dm_to_sd("02410.506"), Ok(24.1751));
/// assert_eq!(dm_to_sd(""), Ok(0.0));
/// assert!(dm_to_sd("37.352387").is_err());
/// ```
pub fn dm_to_sd(dm: &str) -> Result<f64, CoerceError> {
    if dm.is_empty() || dm == "0" {
        return Ok(0.0);
    }

    let err = || CoerceError::new(dm, "degrees");

    let (_, (whole, _)) = all_consuming((digit1, fraction))
        .parse(dm)
        .map_err(|_| err())?;

    // at least one degree digit in front of the two minute digits
    if whole.len() < 3 {
        return Err(err());
    }

    let (degrees, minutes) = dm.split_at(whole.len() - 2);
    let degrees: f64 = degrees.parse().map_err(|_| err())?;
    let minutes: f64 = minutes.parse().map_err(|_| err())?;

    Ok(degrees + minutes / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp() {
        let cases = [
            ("184353.07", time::Time::from_hms_milli(18, 43, 53, 70)),
            ("131335.3341", time::Time::from_hms_micro(13, 13, 35, 334100)),
            ("130533.620", time::Time::from_hms_milli(13, 5, 33, 620)),
            ("010717", time::Time::from_hms(1, 7, 17)),
        ];

        for (input, expected) in cases {
            let expected = Value::Time(expected.unwrap());
            assert_eq!(timestamp(input), Ok(expected), "Failed: {input:?}");
        }

        let cases = ["", "1843", "184353.", "256000", "18:43:53", "184353.07x"];

        for input in cases {
            assert!(timestamp(input).is_err(), "Failed: {input:?}");
        }
    }

    #[test]
    fn test_datestamp() {
        let d = time::Date::from_calendar_date(1996, time::Month::August, 17).unwrap();
        assert_eq!(datestamp("170896"), Ok(Value::Date(d)));

        let d = time::Date::from_calendar_date(2068, time::Month::January, 31).unwrap();
        assert_eq!(datestamp("310168"), Ok(Value::Date(d)));

        for input in ["", "3102", "310224", "001324", "01a324"] {
            assert!(datestamp(input).is_err(), "Failed: {input:?}");
        }
    }

    #[test]
    fn test_unix_time() {
        let value = unix_time("1452244916.7508").unwrap();
        let dt = value.as_datetime().unwrap();
        assert_eq!(dt.unix_timestamp(), 1452244916);
        assert_eq!(dt.date().year(), 2016);
        assert_eq!(dt.hour(), 9);
        assert_eq!(dt.minute(), 21);

        assert!(unix_time("nan").is_err());
        assert!(unix_time("yesterday").is_err());
    }

    #[test]
    fn test_dm_to_sd() {
        assert_eq!(dm_to_sd("1929.045"), Ok(19.484083333333334));
        assert_eq!(dm_to_sd("0"), Ok(0.0));
        assert!(dm_to_sd("121.953086").is_ok());
        assert!(dm_to_sd("29.045").is_err());
        assert!(dm_to_sd("1929").is_err());
    }

    #[test]
    fn test_integer_and_float() {
        assert_eq!(integer("+3"), Ok(Value::Int(3)));
        assert!(integer("1.0").is_err());
        assert_eq!(float("+00.4"), Ok(Value::Float(0.4)));
        assert!(float("").is_err());
    }
}
