//! # Error Types
//!
//! This module defines the error types used throughout the library.
//!
//! Every failure to turn a line into a [`Sentence`](crate::Sentence) is one of the
//! parse-family variants of [`Error`]; they all carry the offending line. Field
//! coercion failures are reported as [`CoerceError`] and never escape a field read.

use thiserror::Error;

/// Result type alias using the crate [`enum@Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Represents all possible errors that can occur while parsing, resolving or
/// accessing NMEA 0183 sentences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The line could not be classified as a talker, query or proprietary sentence.
    #[error("could not parse data: {line:?}")]
    UnrecognizedMessage {
        /// The raw input line
        line: String,
    },

    /// The line was classified, but its talker or query sentence type is not registered.
    #[error("unknown sentence type {sentence_type:?}: {line:?}")]
    UnknownSentenceType {
        /// The three character sentence type code
        sentence_type: String,
        /// The raw input line
        line: String,
    },

    /// The checksum of the sentence was corrupt or incorrect.
    #[error("checksum does not match: {expected:02X} != {actual:02X}: {line:?}")]
    ChecksumMismatch {
        /// The checksum transmitted with the sentence
        expected: u8,
        /// The checksum calculated from the sentence content
        actual: u8,
        /// The raw input line, or the checksummed substring for [`validate_checksum`](crate::validate_checksum)
        line: String,
    },

    /// Strict checking was requested and the sentence carries no checksum.
    #[error("strict checking requested and checksum missing: {line:?}")]
    ChecksumMissing {
        /// The raw input line
        line: String,
    },

    /// The checksum digits are not a two digit hexadecimal number.
    #[error("invalid checksum digits {0:?}")]
    InvalidChecksum(String),

    /// The sentence content contains non-ASCII characters.
    ///
    /// NMEA messages must be ASCII-only for proper parsing and checksum calculation.
    #[error("sentence contains non-ASCII characters: {line:?}")]
    NonAscii {
        /// The raw input line
        line: String,
    },

    /// The sentence shape declares no field with this key.
    #[error("no field named {0:?}")]
    UnknownField(String),

    /// A write to a named field whose slot lies past the end of the record.
    #[error("field {key:?} is slot {index}, but the sentence has {len} fields")]
    FieldOutOfRange {
        /// The field key
        key: String,
        /// Position of the field in the shape
        index: usize,
        /// Number of raw fields in the record
        len: usize,
    },

    /// The error policy name is not one of `raise`, `yield` or `ignore`.
    #[error("errors must be one of \"raise\", \"yield\", \"ignore\" (was: {0:?})")]
    InvalidErrorPolicy(String),
}

impl Error {
    /// The raw line that failed to parse, for every parse-family error.
    ///
    /// ```rust
    /// let err = nmea0183_records::parse("$GPABC,1,2,3").unwrap_err();
    /// assert_eq!(err.line(), Some("$GPABC,1,2,3"));
    /// ```
    pub fn line(&self) -> Option<&str> {
        match self {
            Error::UnrecognizedMessage { line }
            | Error::UnknownSentenceType { line, .. }
            | Error::ChecksumMismatch { line, .. }
            | Error::ChecksumMissing { line }
            | Error::NonAscii { line } => Some(line),
            Error::InvalidChecksum(_)
            | Error::UnknownField(_)
            | Error::FieldOutOfRange { .. }
            | Error::InvalidErrorPolicy(_) => None,
        }
    }

    /// Returns `true` for a checksum mismatch or a missing checksum under strict checking.
    pub fn is_checksum_error(&self) -> bool {
        matches!(
            self,
            Error::ChecksumMismatch { .. } | Error::ChecksumMissing { .. }
        )
    }

    /// Returns `true` when the line was classified but its sentence type is unknown.
    pub fn is_sentence_type_error(&self) -> bool {
        matches!(self, Error::UnknownSentenceType { .. })
    }
}

/// A coercion function could not convert a raw field.
///
/// Field reads swallow this error and hand back the raw string instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert {input:?} to {target}")]
pub struct CoerceError {
    /// The raw field text
    pub input: String,
    /// Name of the target type
    pub target: &'static str,
}

impl CoerceError {
    pub(crate) fn new(input: &str, target: &'static str) -> Self {
        CoerceError {
            input: input.to_owned(),
            target,
        }
    }
}
