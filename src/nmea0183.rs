//! # NMEA 0183 Framing
//!
//! This module holds the checksum unit and the sentence classifier.
//!
//! A sentence on the wire has the form `[noise]$TTSSS,D1,D2,...,Dn*CC[\r\n]`.
//! [`classify`] locates the content between the `$` and the `*`, reads the
//! optional two digit checksum and splits the content into an [`Identity`] and
//! a raw payload. Checksum validation is a separate step, see
//! [`Classified::verify`], so that the caller decides whether a missing
//! checksum is an error.
//!
//! Three sentence layouts are recognized, tried in this order:
//! - Proprietary: `P` + 3 character manufacturer code + arbitrary remainder
//! - Query: `TTLLQ,SSS` with no data
//! - Talker: `TTSSS,` + data

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag_no_case, take_till, take_until, take_while_m_n},
    character::complete::char,
    combinator::{all_consuming, map_res, opt, rest},
    sequence::preceded,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Category, Error, Identity, Result, parsing::code};

/// Defines how the parser should handle NMEA message checksums.
///
/// NMEA 0183 messages can include an optional checksum in the format `*CC` where
/// CC is a two-digit hexadecimal value representing the XOR of all bytes in the
/// message content (excluding the '$' prefix and '*' delimiter).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumMode {
    /// Checksum is required and must be present.
    ///
    /// A sentence without a `*CC` checksum fails with [`Error::ChecksumMissing`].
    /// If a checksum is present, it is validated against the calculated checksum.
    Required,

    /// Checksum is optional but will be validated if present.
    ///
    /// - If no checksum is present, parsing continues normally
    /// - If a checksum is present, it must be valid or parsing will fail
    #[default]
    Optional,
}

/// Calculates the NMEA 0183 checksum for the given message content.
///
/// The checksum is the XOR of all bytes between the '$' prefix and the '*'
/// checksum delimiter, excluding both.
///
/// # Examples
///
/// ```rust
/// use nmea0183_records::checksum;
///
/// assert_eq!(checksum("GPGGA,123456,data"), 0x41);
/// assert_eq!(checksum(""), 0);
/// ```
pub fn checksum<I>(input: I) -> u8
where
    I: nom::AsBytes,
{
    input
        .as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_records::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Validates `content` against a transmitted checksum given as two hex digits.
///
/// `content` is exactly the text between the `$` and the `*`; this function does
/// no framing of its own.
///
/// # Errors
///
/// - [`Error::InvalidChecksum`] if `expected_hex` is not two hexadecimal digits
/// - [`Error::ChecksumMismatch`] if the computed checksum differs, carrying `content`
///
/// # Examples
///
/// ```rust
/// use nmea0183_records::{Error, validate_checksum};
///
/// assert!(validate_checksum("GPGGA,123456,data", "41").is_ok());
/// assert!(validate_checksum("GPGGA,123456,data", "4a").is_err());
/// assert_eq!(
///     validate_checksum("GPGGA,123456,data", "4G"),
///     Err(Error::InvalidChecksum("4G".to_owned()))
/// );
/// ```
pub fn validate_checksum(content: &str, expected_hex: &str) -> Result<()> {
    let (_, expected) = all_consuming(hex_byte)
        .parse(expected_hex)
        .map_err(|_| Error::InvalidChecksum(expected_hex.to_owned()))?;

    let actual = checksum(content);
    if expected != actual {
        return Err(Error::ChecksumMismatch {
            expected,
            actual,
            line: content.to_owned(),
        });
    }

    Ok(())
}

/// A line split into its identity, payload and checksum, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified<'a> {
    /// The trimmed input line
    pub line: &'a str,
    /// Category and identity codes, upper-cased
    pub identity: Identity,
    /// Text between the `$` (or the first recognizable offset) and the `*`,
    /// the checksummed substring
    pub content: &'a str,
    /// Data after the identity prefix
    pub payload: &'a str,
    /// Transmitted checksum, if any
    pub checksum: Option<u8>,
}

impl Classified<'_> {
    /// The sentence category.
    pub fn category(&self) -> Category {
        self.identity.category()
    }

    /// The payload split on `,`. Queries carry no fields.
    ///
    /// ```rust
    /// use nmea0183_records::classify;
    ///
    /// let c = classify("$PTNL,PJT,NAD83(Conus),California Zone 4 0404,*5D").unwrap();
    /// assert_eq!(c.fields(), ["", "PJT", "NAD83(Conus)", "California Zone 4 0404", ""]);
    ///
    /// let c = classify("$CCGPQ,GGA").unwrap();
    /// assert!(c.fields().is_empty());
    /// ```
    pub fn fields(&self) -> Vec<String> {
        match self.identity {
            Identity::Query { .. } => Vec::new(),
            _ => self.payload.split(',').map(str::to_owned).collect(),
        }
    }

    /// Validates the transmitted checksum, if any.
    ///
    /// # Errors
    ///
    /// - [`Error::ChecksumMismatch`] carrying the whole line if the checksum is wrong
    /// - [`Error::ChecksumMissing`] if `mode` is [`ChecksumMode::Required`] and
    ///   the line has no checksum
    pub fn verify(&self, mode: ChecksumMode) -> Result<()> {
        match (self.checksum, mode) {
            (Some(expected), _) => {
                let actual = checksum(self.content);
                if expected != actual {
                    return Err(Error::ChecksumMismatch {
                        expected,
                        actual,
                        line: self.line.to_owned(),
                    });
                }
                Ok(())
            }
            (None, ChecksumMode::Required) => Err(Error::ChecksumMissing {
                line: self.line.to_owned(),
            }),
            (None, ChecksumMode::Optional) => Ok(()),
        }
    }
}

/// Classifies a raw line as a talker, query or proprietary sentence.
///
/// Leading and trailing whitespace (including `\r\n`) is ignored, as is any
/// noise in front of the `$`. A line without `$` is accepted too; it is
/// classified from the first offset at which a sentence layout matches, so
/// noise in front of it is skipped as well. Anything after a valid `*CC`
/// checksum is discarded.
///
/// Identity codes are upper-cased. The checksum is read but not validated.
///
/// # Errors
///
/// - [`Error::UnrecognizedMessage`] if the line matches none of the three layouts,
///   or has a `*` that is not followed by two hex digits
/// - [`Error::NonAscii`] if the sentence content contains non-ASCII characters
///
/// # Examples
///
/// ```rust
/// use nmea0183_records::{Category, classify};
///
/// let c = classify("garbage$GPGGA,184353.07,1929.045,S*14\r\n").unwrap();
/// assert_eq!(c.category(), Category::Talker);
/// assert_eq!(c.content, "GPGGA,184353.07,1929.045,S");
/// assert_eq!(c.payload, "184353.07,1929.045,S");
/// assert_eq!(c.checksum, Some(0x14));
///
/// let c = classify("$pgrme,15.0,M").unwrap();
/// assert_eq!(c.category(), Category::Proprietary);
/// assert_eq!(c.payload, "e,15.0,M");
///
/// assert!(classify("$GP,1,2").is_err());
/// ```
pub fn classify(line: &str) -> Result<Classified<'_>> {
    let line = line.trim();
    let unrecognized = || Error::UnrecognizedMessage {
        line: line.to_owned(),
    };

    let (_, (content, checksum, anchored)) = frame(line).map_err(|_| unrecognized())?;

    // without a `$` the sentence starts at the first offset that reads as one
    let start = if anchored {
        Some(0)
    } else {
        content
            .char_indices()
            .map(|(k, _)| k)
            .find(|&k| head(&content[k..]).is_ok())
    };
    let content = match start {
        Some(k) => &content[k..],
        None if content.is_ascii() => return Err(unrecognized()),
        None => content,
    };

    if !content.is_ascii() {
        return Err(Error::NonAscii {
            line: line.to_owned(),
        });
    }

    let (_, (identity, payload)) = head(content).map_err(|_| unrecognized())?;

    Ok(Classified {
        line,
        identity,
        content,
        payload,
        checksum,
    })
}

/// Splits a trimmed line into the checksummed content and the checksum, and
/// reports whether the content was anchored by a `$`.
fn frame(i: &str) -> IResult<&str, (&str, Option<u8>, bool)> {
    let (i, dollar) = opt((take_until("$"), char('$'))).parse(i)?;
    let (i, content) = take_till(|c: char| c == '*').parse(i)?;
    let (rem, checksum) = opt(preceded(char('*'), hex_byte)).parse(i)?;

    // a '*' without two hex digits behind it
    if checksum.is_none() && !rem.is_empty() {
        return Err(nom::Err::Error(nom::error::Error::new(
            rem,
            nom::error::ErrorKind::HexDigit,
        )));
    }

    Ok((rem, (content, checksum, dollar.is_some())))
}

/// Reads the identity prefix of the sentence content.
fn head(i: &str) -> IResult<&str, (Identity, &str)> {
    alt((proprietary, query, talker)).parse(i)
}

fn proprietary(i: &str) -> IResult<&str, (Identity, &str)> {
    preceded(tag_no_case("P"), (code(3), rest))
        .map(|(manufacturer, payload): (&str, &str)| {
            let identity = Identity::Proprietary {
                manufacturer: manufacturer.to_ascii_uppercase(),
                subtype: None,
            };
            (identity, payload)
        })
        .parse(i)
}

fn query(i: &str) -> IResult<&str, (Identity, &str)> {
    all_consuming((code(2), code(2), tag_no_case("Q,"), code(3)))
        .map(|(talker, listener, _, sentence_type): (&str, &str, _, &str)| {
            let identity = Identity::Query {
                talker: talker.to_ascii_uppercase(),
                listener: listener.to_ascii_uppercase(),
                sentence_type: sentence_type.to_ascii_uppercase(),
            };
            (identity, "")
        })
        .parse(i)
}

fn talker(i: &str) -> IResult<&str, (Identity, &str)> {
    (code(2), code(3), char(','), rest)
        .map(|(talker, sentence_type, _, payload): (&str, &str, _, &str)| {
            let identity = Identity::Talker {
                talker: talker.to_ascii_uppercase(),
                sentence_type: sentence_type.to_ascii_uppercase(),
            };
            (identity, payload)
        })
        .parse(i)
}

/// Two hexadecimal digits, either case.
fn hex_byte(i: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()), |s: &str| {
        u8::from_str_radix(s, 16)
    })
    .parse(i)
}
