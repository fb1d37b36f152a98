//! # NMEA 0183 Records
//!
//! This library turns NMEA 0183 sentences of the form
//! `[noise]$TTSSS,D1,D2,...,Dn*CC[\r\n]` into mutable, round-trippable
//! records, and renders them back to wire text.
//!
//! The pipeline has four steps:
//! - [`classify`] frames the line and splits it into an [`Identity`] and a raw payload
//! - [`Classified::verify`] checks the `*CC` checksum under a [`ChecksumMode`]
//! - a [`Registry`] resolves the [`Shape`] naming the fields, strictly for
//!   talker and query sentences and with a generic fallback for proprietary ones
//! - the resulting [`Sentence`] offers named reads and writes through the
//!   shape and renders itself with a recomputed checksum
//!
//! [`StreamReader`] runs the same pipeline over chunked input.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_records::{Value, parse};
//!
//! let mut msg = parse("$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,100.00,M,-33.9,M,,0000*6D\r\n")?;
//! assert_eq!(msg.get("lat")?, Value::from("1929.045"));
//! assert_eq!(msg.get("altitude")?, Value::Float(100.0));
//!
//! msg.set("altitude", 200.0)?;
//! assert_eq!(
//!     msg.to_string(),
//!     "$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,200.0,M,-33.9,M,,0000*5E"
//! );
//! # Ok::<(), nmea0183_records::Error>(())
//! ```

pub mod coerce;
pub mod error;
mod nmea0183;
mod parsing;
mod registry;
mod sentence;
pub mod sentences;
mod shape;
mod stream;
mod value;

pub use error::{CoerceError, Error, Result};
pub use nmea0183::*;
pub use registry::{Dispatch, Manufacturer, Registry};
pub use sentence::{Category, Identity, LineEnding, RenderOptions, Sentence};
pub use shape::{Coercion, Field, Shape};
pub use stream::{Batch, ErrorPolicy, StreamReader};
pub use value::Value;

/// Parses one line with the standard registry. A checksum is validated if present.
///
/// # Errors
///
/// See [`Registry::parse`].
pub fn parse(line: &str) -> Result<Sentence> {
    parse_with(line, ChecksumMode::Optional)
}

/// Parses one line with the standard registry and the given checksum mode.
///
/// ```rust
/// use nmea0183_records::{ChecksumMode, Error, parse_with};
///
/// let err = parse_with("$IIMWV,271.0,R,000.2,N,A", ChecksumMode::Required).unwrap_err();
/// assert!(matches!(err, Error::ChecksumMissing { .. }));
/// ```
///
/// # Errors
///
/// See [`Registry::parse`].
pub fn parse_with(line: &str, mode: ChecksumMode) -> Result<Sentence> {
    Registry::standard().parse(line, mode)
}

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

#[cfg(test)]
mod tests {
    mod classify;
    mod proprietary;
    mod registry;
    mod sentence;
    mod stream;
}
