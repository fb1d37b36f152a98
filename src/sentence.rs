//! # Sentence Records
//!
//! A [`Sentence`] is one parsed or programmatically built NMEA 0183 sentence:
//! its [`Identity`], the ordered raw data fields, and the [`Shape`] that names
//! them. The raw fields are the single source of truth; named reads and
//! writes go through the shape's key index.

use std::{fmt, sync::Arc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result, Shape, Value, checksum, coerce, format_checksum,
    sentences::talker::seatalk_command,
};

/// The three kinds of NMEA 0183 sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `$TTSSS,...`, a standard sentence from a talker
    Talker,
    /// `$TTLLQ,SSS`, a request for a sentence type
    Query,
    /// `$PMMM...`, a manufacturer specific sentence
    Proprietary,
}

/// The identity codes of a sentence, always upper-case.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identity {
    /// A talker sentence.
    Talker {
        /// 2 character talker code, e.g. `GP`
        talker: String,
        /// 3 character sentence type code, e.g. `GGA`
        sentence_type: String,
    },
    /// A query sentence.
    Query {
        /// 2 character code of the requesting talker
        talker: String,
        /// 2 character code of the queried listener
        listener: String,
        /// 3 character code of the requested sentence type
        sentence_type: String,
    },
    /// A proprietary sentence.
    Proprietary {
        /// 3 character manufacturer code, e.g. `GRM`
        manufacturer: String,
        /// The subtype key the sentence was dispatched on, if it resolved to a
        /// registered subtype
        subtype: Option<String>,
    },
}

impl Identity {
    /// The category of this identity.
    pub fn category(&self) -> Category {
        match self {
            Identity::Talker { .. } => Category::Talker,
            Identity::Query { .. } => Category::Query,
            Identity::Proprietary { .. } => Category::Proprietary,
        }
    }

    /// The wire prefix written in front of the data fields.
    fn prefix(&self) -> String {
        match self {
            Identity::Talker {
                talker,
                sentence_type,
            } => format!("{talker}{sentence_type},"),
            Identity::Query {
                talker,
                listener,
                sentence_type,
            } => format!("{talker}{listener}Q,{sentence_type}"),
            Identity::Proprietary { manufacturer, .. } => format!("P{manufacturer}"),
        }
    }
}

/// Line terminator appended by [`Sentence::render`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LineEnding {
    /// No terminator
    #[default]
    None,
    /// `\r\n`
    CrLf,
    /// Any other terminator
    Custom(String),
}

impl LineEnding {
    /// The terminator text.
    pub fn as_str(&self) -> &str {
        match self {
            LineEnding::None => "",
            LineEnding::CrLf => "\r\n",
            LineEnding::Custom(s) => s,
        }
    }
}

/// Controls how [`Sentence::render`] frames a sentence.
///
/// The default writes the `$` prefix and the `*HH` checksum, with no line ending.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append `*HH` computed over the rendered content
    pub checksum: bool,
    /// Prefix the sentence with `$`
    pub dollar: bool,
    /// Terminator appended last
    pub line_ending: LineEnding,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            checksum: true,
            dollar: true,
            line_ending: LineEnding::None,
        }
    }
}

impl RenderOptions {
    /// Sets whether the checksum is written.
    pub fn checksum(mut self, checksum: bool) -> Self {
        self.checksum = checksum;
        self
    }

    /// Sets whether the `$` prefix is written.
    pub fn dollar(mut self, dollar: bool) -> Self {
        self.dollar = dollar;
        self
    }

    /// Sets the line ending.
    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}

/// A parsed or constructed NMEA 0183 sentence.
///
/// ```rust
/// use nmea0183_records::{Value, parse};
///
/// let mut msg = parse(
///     "$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,100.00,M,-33.9,M,,0000*6D",
/// )?;
///
/// assert_eq!(msg.talker(), Some("GP"));
/// assert_eq!(msg.sentence_type(), Some("GGA"));
/// assert_eq!(msg.get("lat")?, Value::from("1929.045"));
/// assert_eq!(msg.get("gps_qual")?, Value::Int(1));
///
/// msg.set("altitude", 200.0)?;
/// assert_eq!(
///     msg.to_string(),
///     "$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,200.0,M,-33.9,M,,0000*5E"
/// );
/// # Ok::<(), nmea0183_records::Error>(())
/// ```
#[derive(Clone)]
pub struct Sentence {
    identity: Identity,
    fields: Vec<String>,
    shape: Arc<Shape>,
}

impl Sentence {
    /// Creates a record bound to `shape` with one empty field per named field.
    ///
    /// Identity codes are upper-cased.
    pub fn new(identity: Identity, shape: Arc<Shape>) -> Self {
        let fields = vec![String::new(); shape.len()];
        Sentence::from_parts(normalize(identity), fields, shape)
    }

    /// Creates a record with exactly the given raw fields.
    pub(crate) fn from_parts(identity: Identity, fields: Vec<String>, shape: Arc<Shape>) -> Self {
        Sentence {
            identity,
            fields,
            shape,
        }
    }

    /// The sentence category.
    pub fn category(&self) -> Category {
        self.identity.category()
    }

    /// The identity codes.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Talker code of a talker or query sentence.
    pub fn talker(&self) -> Option<&str> {
        match &self.identity {
            Identity::Talker { talker, .. } | Identity::Query { talker, .. } => Some(talker),
            Identity::Proprietary { .. } => None,
        }
    }

    /// Sentence type code of a talker sentence, or the requested type of a query.
    pub fn sentence_type(&self) -> Option<&str> {
        match &self.identity {
            Identity::Talker { sentence_type, .. } | Identity::Query { sentence_type, .. } => {
                Some(sentence_type)
            }
            Identity::Proprietary { .. } => None,
        }
    }

    /// Listener code of a query sentence.
    pub fn listener(&self) -> Option<&str> {
        match &self.identity {
            Identity::Query { listener, .. } => Some(listener),
            _ => None,
        }
    }

    /// Manufacturer code of a proprietary sentence.
    pub fn manufacturer(&self) -> Option<&str> {
        match &self.identity {
            Identity::Proprietary { manufacturer, .. } => Some(manufacturer),
            _ => None,
        }
    }

    /// Resolved subtype key of a proprietary sentence.
    pub fn subtype(&self) -> Option<&str> {
        match &self.identity {
            Identity::Proprietary { subtype, .. } => subtype.as_deref(),
            _ => None,
        }
    }

    /// The shape naming the fields of this record.
    pub fn shape(&self) -> &Arc<Shape> {
        &self.shape
    }

    /// All raw fields in positional order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Mutable access to the raw fields, e.g. to edit variadic waypoint lists.
    pub fn fields_mut(&mut self) -> &mut Vec<String> {
        &mut self.fields
    }

    /// Raw field at position `i`.
    pub fn field(&self, i: usize) -> Option<&str> {
        self.fields.get(i).map(String::as_str)
    }

    /// Raw fields past the last named field.
    ///
    /// ```rust
    /// let msg = nmea0183_records::parse("$GPRTE,2,1,c,0,PBRCPK,PBRTO,PTELGR,PPLAND*58")?;
    /// assert_eq!(msg.extra_fields(), ["PBRCPK", "PBRTO", "PTELGR", "PPLAND"]);
    /// # Ok::<(), nmea0183_records::Error>(())
    /// ```
    pub fn extra_fields(&self) -> &[String] {
        self.fields.get(self.shape.len()..).unwrap_or_default()
    }

    /// Reads a named field through its coercion.
    ///
    /// A field past the end of the data reads as empty.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownField`] if the shape has no field with this key.
    pub fn get(&self, key: &str) -> Result<Value> {
        let i = self.index_of(key)?;
        let raw = self.field(i).unwrap_or_default();
        Ok(self.shape.fields()[i].decode(raw))
    }

    /// Reads a named field as raw text.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownField`] if the shape has no field with this key.
    pub fn get_raw(&self, key: &str) -> Result<&str> {
        let i = self.index_of(key)?;
        Ok(self.field(i).unwrap_or_default())
    }

    /// Writes a named field, stringified with the [`Display`](fmt::Display) form of [`Value`].
    ///
    /// Only the field's own slot is written. Records built with [`Sentence::new`]
    /// hold a slot for every named field; a parsed record holds only the fields
    /// it was sent with, and can be grown through [`fields_mut`](Self::fields_mut).
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownField`] if the shape has no field with this key
    /// - [`Error::FieldOutOfRange`] if the slot lies past the end of the record
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        let i = self.index_of(key)?;
        let len = self.fields.len();
        let slot = self.fields.get_mut(i).ok_or_else(|| Error::FieldOutOfRange {
            key: key.to_owned(),
            index: i,
            len,
        })?;

        *slot = value.into().to_string();
        Ok(())
    }

    /// Latitude in signed decimal degrees, from the `lat` and `lat_dir` fields.
    ///
    /// North is positive, south negative, any other direction gives `0.0`.
    /// Returns `None` if the shape has no such fields or `lat` is malformed.
    ///
    /// ```rust
    /// let msg = nmea0183_records::parse(
    ///     "$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,100.00,M,-33.9,M,,0000*6D",
    /// )?;
    /// assert_eq!(msg.latitude(), Some(-19.484083333333334));
    /// assert_eq!(msg.longitude(), Some(24.1751));
    /// # Ok::<(), nmea0183_records::Error>(())
    /// ```
    pub fn latitude(&self) -> Option<f64> {
        self.signed_degrees("lat", "lat_dir", "N", "S")
    }

    /// Longitude in signed decimal degrees, from the `lon` and `lon_dir` fields.
    ///
    /// East is positive, west negative, any other direction gives `0.0`.
    pub fn longitude(&self) -> Option<f64> {
        self.signed_degrees("lon", "lon_dir", "E", "W")
    }

    fn signed_degrees(&self, key: &str, dir_key: &str, pos: &str, neg: &str) -> Option<f64> {
        let degrees = coerce::dm_to_sd(self.get_raw(key).ok()?).ok()?;
        let dir = self.get_raw(dir_key).ok()?;

        Some(if dir == pos {
            degrees
        } else if dir == neg {
            -degrees
        } else {
            0.0
        })
    }

    /// Minutes part of [`latitude`](Self::latitude), always positive.
    pub fn latitude_minutes(&self) -> Option<f64> {
        self.latitude().map(minutes)
    }

    /// Seconds part of [`latitude`](Self::latitude), always positive.
    pub fn latitude_seconds(&self) -> Option<f64> {
        self.latitude().map(seconds)
    }

    /// Minutes part of [`longitude`](Self::longitude), always positive.
    pub fn longitude_minutes(&self) -> Option<f64> {
        self.longitude().map(minutes)
    }

    /// Seconds part of [`longitude`](Self::longitude), always positive.
    pub fn longitude_seconds(&self) -> Option<f64> {
        self.longitude().map(seconds)
    }

    /// Whether the sentence reports a usable fix or reading.
    ///
    /// The rule depends on the fields of the shape, first match wins:
    /// - `mode_fix_type` (GSA): a 2D or 3D fix
    /// - `gps_qual` (GGA): a quality indicator from 1 to 5
    /// - `data_validity_water_spd` and `data_validity_grnd_spd` (VBW): both `A`
    /// - `status` (RMC, GLL, MWV, ...): `A`
    ///
    /// Returns `None` for shapes with none of these fields.
    ///
    /// ```rust
    /// let msg = nmea0183_records::parse("$IIMWV,271.0,R,000.2,N,A*3B")?;
    /// assert_eq!(msg.is_valid(), Some(true));
    /// # Ok::<(), nmea0183_records::Error>(())
    /// ```
    pub fn is_valid(&self) -> Option<bool> {
        if let Ok(mode) = self.get_raw("mode_fix_type") {
            return Some(matches!(mode.trim().parse::<i64>(), Ok(2 | 3)));
        }
        if self.shape.index_of("gps_qual").is_some() {
            let quality = self.get("gps_qual").ok()?.as_i64();
            return Some(matches!(quality, Some(1..=5)));
        }
        if let (Ok(water), Ok(ground)) = (
            self.get_raw("data_validity_water_spd"),
            self.get_raw("data_validity_grnd_spd"),
        ) {
            return Some(water == "A" && ground == "A");
        }

        self.get_raw("status").ok().map(|status| status == "A")
    }

    /// The `timestamp` field as a time of day.
    pub fn timestamp(&self) -> Option<time::Time> {
        self.get("timestamp").ok()?.as_time()
    }

    /// The date of the sentence, from a `datestamp` field or from the
    /// `day`, `month` and `year` fields of a ZDA sentence.
    pub fn datestamp(&self) -> Option<time::Date> {
        if self.shape.index_of("datestamp").is_some() {
            return self.get("datestamp").ok()?.as_date();
        }

        let int = |key: &str| self.get(key).ok()?.as_i64();
        let year = i32::try_from(int("year")?).ok()?;
        let month = time::Month::try_from(u8::try_from(int("month")?).ok()?).ok()?;
        let day = u8::try_from(int("day")?).ok()?;
        time::Date::from_calendar_date(year, month, day).ok()
    }

    /// [`datestamp`](Self::datestamp) combined with [`timestamp`](Self::timestamp).
    ///
    /// ```rust
    /// let msg = nmea0183_records::parse(
    ///     "$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68",
    /// )?;
    /// let dt = msg.datetime().unwrap();
    /// assert_eq!((dt.year(), dt.hour(), dt.minute()), (1994, 22, 54));
    /// # Ok::<(), nmea0183_records::Error>(())
    /// ```
    pub fn datetime(&self) -> Option<time::PrimitiveDateTime> {
        Some(time::PrimitiveDateTime::new(self.datestamp()?, self.timestamp()?))
    }

    /// The local time zone of a ZDA sentence, from `local_zone` hours plus
    /// `local_zone_minutes`.
    pub fn utc_offset(&self) -> Option<time::UtcOffset> {
        let hours = self.get("local_zone").ok()?.as_i64()?;
        let minutes = self.get("local_zone_minutes").ok()?.as_i64()?;
        let seconds = hours.checked_mul(3600)?.checked_add(minutes.checked_mul(60)?)?;
        let seconds = i32::try_from(seconds).ok()?;
        time::UtcOffset::from_whole_seconds(seconds).ok()
    }

    /// [`datetime`](Self::datetime) read as UTC and shifted to
    /// [`utc_offset`](Self::utc_offset).
    pub fn local_datetime(&self) -> Option<time::OffsetDateTime> {
        self.datetime()?.assume_utc().checked_to_offset(self.utc_offset()?)
    }

    /// Meaning of the SeaTalk command byte of an `ALK` sentence.
    ///
    /// Unknown command bytes read as `"Unknown Command"`. Returns `None` for
    /// sentences without a `cmd` field.
    pub fn command_name(&self) -> Option<&'static str> {
        if self.category() != Category::Talker {
            return None;
        }

        let cmd = self.get_raw("cmd").ok()?;
        Some(seatalk_command(cmd).unwrap_or("Unknown Command"))
    }

    /// Renders the sentence to wire text.
    ///
    /// The checksum is computed over the identity prefix and the fields, and
    /// written as two upper-case hex digits.
    ///
    /// ```rust
    /// use nmea0183_records::{LineEnding, RenderOptions, parse};
    ///
    /// let msg = parse("$IIMWV,271.0,R,000.2,N,A*3B")?;
    /// let opts = RenderOptions::default().dollar(false).line_ending(LineEnding::CrLf);
    /// assert_eq!(msg.render(&opts), "IIMWV,271.0,R,000.2,N,A*3B\r\n");
    ///
    /// let opts = RenderOptions::default().checksum(false);
    /// assert_eq!(msg.render(&opts), "$IIMWV,271.0,R,000.2,N,A");
    /// # Ok::<(), nmea0183_records::Error>(())
    /// ```
    pub fn render(&self, opts: &RenderOptions) -> String {
        let mut res = self.identity.prefix();
        if self.category() != Category::Query {
            res.push_str(&self.fields.join(","));
        }

        if opts.checksum {
            let cc = checksum(res.as_str());
            res.push('*');
            res.push_str(&format_checksum(cc));
        }

        if opts.dollar {
            res.insert(0, '$');
        }

        res.push_str(opts.line_ending.as_str());
        res
    }

    fn index_of(&self, key: &str) -> Result<usize> {
        self.shape
            .index_of(key)
            .ok_or_else(|| Error::UnknownField(key.to_owned()))
    }
}

fn minutes(degrees: f64) -> f64 {
    (degrees * 60.0).abs() % 60.0
}

fn seconds(degrees: f64) -> f64 {
    (degrees * 3600.0).abs() % 60.0
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}

impl fmt::Debug for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let named = self.shape.fields().iter().enumerate().map(|(i, field)| {
            let raw = self.field(i).unwrap_or_default();
            (field.key(), field.decode(raw))
        });

        f.debug_struct("Sentence")
            .field("identity", &self.identity)
            .field("shape", &self.shape.name())
            .field("fields", &named.collect::<Vec<_>>())
            .field("extra", &self.extra_fields())
            .finish()
    }
}

impl PartialEq for Sentence {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
            && self.fields == other.fields
            && self.shape.name() == other.shape.name()
    }
}

fn normalize(identity: Identity) -> Identity {
    match identity {
        Identity::Talker {
            talker,
            sentence_type,
        } => Identity::Talker {
            talker: talker.to_ascii_uppercase(),
            sentence_type: sentence_type.to_ascii_uppercase(),
        },
        Identity::Query {
            talker,
            listener,
            sentence_type,
        } => Identity::Query {
            talker: talker.to_ascii_uppercase(),
            listener: listener.to_ascii_uppercase(),
            sentence_type: sentence_type.to_ascii_uppercase(),
        },
        Identity::Proprietary {
            manufacturer,
            subtype,
        } => Identity::Proprietary {
            manufacturer: manufacturer.to_ascii_uppercase(),
            subtype,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{coerce, fields};

    fn dbt() -> Arc<Shape> {
        Arc::new(Shape::new(
            "DBT",
            "Depth Below Transducer",
            fields![
                ("Water depth, feet", "depth_feet", coerce::float),
                ("Feet", "unit_feet"),
                ("Water depth, Meters", "depth_meters", coerce::float),
                ("Meters", "unit_meters"),
            ],
        ))
    }

    fn talker(talker: &str, sentence_type: &str) -> Identity {
        Identity::Talker {
            talker: talker.to_owned(),
            sentence_type: sentence_type.to_owned(),
        }
    }

    #[test]
    fn test_new_pads_to_shape() {
        let mut msg = Sentence::new(talker("ii", "dbt"), dbt());
        assert_eq!(msg.talker(), Some("II"));
        assert_eq!(msg.fields(), ["", "", "", ""]);
        assert_eq!(msg.get("depth_feet"), Ok(Value::Null));

        msg.set("depth_feet", 12.5).unwrap();
        msg.set("unit_feet", "f").unwrap();
        assert_eq!(msg.render(&RenderOptions::default().checksum(false)), "$IIDBT,12.5,f,,");
    }

    #[test]
    fn test_get_past_end() {
        let msg = Sentence::from_parts(talker("II", "DBT"), vec!["7.2".to_owned()], dbt());
        assert_eq!(msg.get("depth_feet"), Ok(Value::Float(7.2)));
        assert_eq!(msg.get("unit_feet"), Ok(Value::from("")));
        assert_eq!(msg.get("depth_meters"), Ok(Value::Null));
        assert_eq!(msg.get("depth"), Err(Error::UnknownField("depth".to_owned())));
    }

    #[test]
    fn test_set_past_end() {
        let mut msg = Sentence::from_parts(talker("II", "DBT"), vec!["7.2".to_owned()], dbt());
        assert_eq!(
            msg.set("depth_meters", 2.2),
            Err(Error::FieldOutOfRange {
                key: "depth_meters".to_owned(),
                index: 2,
                len: 1,
            })
        );
        assert_eq!(msg.fields(), ["7.2"]);

        msg.fields_mut().resize(3, String::new());
        msg.set("depth_meters", 2.2).unwrap();
        assert_eq!(msg.fields(), ["7.2", "", "2.2"]);
        assert_eq!(msg.get("depth_meters"), Ok(Value::Float(2.2)));
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut msg = Sentence::new(talker("II", "DBT"), dbt());
        msg.set("depth_feet", 3).unwrap();
        assert_eq!(msg.get("depth_feet"), Ok(Value::Float(3.0)));

        msg.set("unit_feet", Value::Null).unwrap();
        assert_eq!(msg.get("unit_feet"), Ok(Value::from("")));
    }

    #[test]
    fn test_render_query_and_proprietary() {
        let query = Sentence::new(
            Identity::Query {
                talker: "cc".to_owned(),
                listener: "gp".to_owned(),
                sentence_type: "gga".to_owned(),
            },
            Arc::new(Shape::empty("GGA", "Query")),
        );
        assert_eq!(query.to_string(), "$CCGPQ,GGA*2B");

        let msg = Sentence::from_parts(
            Identity::Proprietary {
                manufacturer: "ZZZ".to_owned(),
                subtype: None,
            },
            vec!["ABC".to_owned(), "1".to_owned()],
            Arc::new(Shape::empty("P", "Unknown proprietary sentence")),
        );
        assert_eq!(msg.render(&RenderOptions::default().checksum(false)), "$PZZZABC,1");
    }

    #[test]
    fn test_latitude_without_fields() {
        let msg = Sentence::new(talker("II", "DBT"), dbt());
        assert_eq!(msg.latitude(), None);
        assert_eq!(msg.longitude(), None);
        assert_eq!(msg.latitude_minutes(), None);
        assert_eq!(msg.longitude_seconds(), None);
        assert_eq!(msg.is_valid(), None);
        assert_eq!(msg.datetime(), None);
        assert_eq!(msg.utc_offset(), None);
        assert_eq!(msg.command_name(), None);
    }
}
