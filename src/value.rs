//! # Field Values
//!
//! [`Value`] is what a named field read returns and what a named field write
//! accepts. Its [`Display`](std::fmt::Display) form is the NMEA wire text written
//! into the sentence.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A decoded field value.
///
/// Fields without a coercion always read as [`Value::Str`]. Fields with a
/// coercion read as [`Value::Null`] when empty, as the coerced value when the
/// coercion succeeds, and fall back to [`Value::Str`] holding the raw text when
/// it fails.
///
/// ```rust
/// use nmea0183_records::Value;
///
/// assert_eq!(Value::from(200.0).to_string(), "200.0");
/// assert_eq!(Value::from(-33.9).to_string(), "-33.9");
/// assert_eq!(Value::from(4).to_string(), "4");
/// assert_eq!(Value::Null.to_string(), "");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An empty field that has a coercion
    Null,
    /// Raw field text
    Str(String),
    /// Integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Time of day, rendered as `hhmmss[.ss]`
    Time(time::Time),
    /// Calendar date, rendered as `ddmmyy`
    Date(time::Date),
    /// Point in time, rendered as seconds since the Unix epoch
    DateTime(time::OffsetDateTime),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The raw text of a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The value of a [`Value::Int`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The value of a [`Value::Float`], or of a [`Value::Int`] widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// The value of a [`Value::Time`].
    pub fn as_time(&self) -> Option<time::Time> {
        match self {
            Value::Time(t) => Some(*t),
            _ => None,
        }
    }

    /// The value of a [`Value::Date`].
    pub fn as_date(&self) -> Option<time::Date> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// The value of a [`Value::DateTime`].
    pub fn as_datetime(&self) -> Option<time::OffsetDateTime> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write_float(f, *v),
            Value::Time(t) => write_time(f, *t),
            Value::Date(d) => write!(
                f,
                "{:02}{:02}{:02}",
                d.day(),
                u8::from(d.month()),
                d.year().rem_euclid(100)
            ),
            Value::DateTime(dt) => {
                let nanos = dt.unix_timestamp_nanos();
                write_float(f, nanos as f64 / 1e9)
            }
        }
    }
}

// Integral floats keep a trailing `.0` so that `200.0` is not written as `200`.
fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
        write!(f, "{v:.1}")
    } else {
        write!(f, "{v}")
    }
}

fn write_time(f: &mut fmt::Formatter<'_>, t: time::Time) -> fmt::Result {
    write!(f, "{:02}{:02}{:02}", t.hour(), t.minute(), t.second())?;

    let nanos = t.nanosecond();
    if nanos == 0 {
        return Ok(());
    }

    if nanos % 10_000_000 == 0 {
        write!(f, ".{:02}", nanos / 10_000_000)
    } else {
        let digits = format!("{nanos:09}");
        write!(f, ".{}", digits.trim_end_matches('0'))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => ($(
        impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Value::Int(i64::from(value))
            }
        }
    )*)
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<time::Time> for Value {
    fn from(value: time::Time) -> Self {
        Value::Time(value)
    }
}

impl From<time::Date> for Value {
    fn from(value: time::Date) -> Self {
        Value::Date(value)
    }
}

impl From<time::OffsetDateTime> for Value {
    fn from(value: time::OffsetDateTime) -> Self {
        Value::DateTime(value)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_display() {
        assert_eq!(Value::Float(200.0).to_string(), "200.0");
        assert_eq!(Value::Float(0.5).to_string(), "0.5");
        assert_eq!(Value::Float(-0.0).to_string(), "-0.0");
        assert_eq!(Value::Float(1234.5678).to_string(), "1234.5678");
    }

    #[test]
    fn test_time_display() {
        let t = time::Time::from_hms_milli(18, 43, 53, 70).unwrap();
        assert_eq!(Value::Time(t).to_string(), "184353.07");

        let t = time::Time::from_hms(1, 2, 3).unwrap();
        assert_eq!(Value::Time(t).to_string(), "010203");

        let t = time::Time::from_hms_micro(13, 13, 35, 334100).unwrap();
        assert_eq!(Value::Time(t).to_string(), "131335.3341");

        let t = time::Time::from_hms_milli(13, 5, 33, 620).unwrap();
        assert_eq!(Value::Time(t).to_string(), "130533.62");
    }

    #[test]
    fn test_date_display() {
        let d = time::Date::from_calendar_date(2021, time::Month::July, 4).unwrap();
        assert_eq!(Value::Date(d).to_string(), "040721");

        let d = time::Date::from_calendar_date(1996, time::Month::August, 17).unwrap();
        assert_eq!(Value::Date(d).to_string(), "170896");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<f64>), Value::Null);
        assert_eq!(Value::from(Some(3u8)), Value::Int(3));
    }
}
