//! # Stream Reassembly
//!
//! [`StreamReader`] turns arbitrarily chunked input, as read from a file, a
//! serial port or a socket, into parsed sentences. It buffers the text after
//! the last `\n` until a later chunk completes the line, so a chunk boundary
//! never splits an identity code or a checksum.
//!
//! ```rust
//! use nmea0183_records::{ErrorPolicy, StreamReader};
//!
//! let mut reader = StreamReader::new(ErrorPolicy::Yield);
//!
//! assert_eq!(reader.feed("$GPGGA,184353.07,1929.045,S,0241").count(), 0);
//!
//! let batch: Vec<_> = reader
//!     .feed("0.506,E,1,04,2.6,100.00,M,-33.9,M,,0000*6D\r\n$GPGGA,1*00\r\n")
//!     .collect();
//! assert_eq!(batch.len(), 2);
//! assert_eq!(batch[0].as_ref().unwrap().sentence_type(), Some("GGA"));
//! assert!(batch[1].as_ref().unwrap_err().is_checksum_error());
//! ```

use std::{borrow::Cow, fmt, iter::FusedIterator, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ChecksumMode, Error, Registry, Result, Sentence};

/// What a [`Batch`] does with a line that fails to parse.
///
/// ```rust
/// use nmea0183_records::ErrorPolicy;
///
/// assert_eq!("yield".parse(), Ok(ErrorPolicy::Yield));
/// assert!("skip".parse::<ErrorPolicy>().is_err());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Yield the first error and end the batch. The remaining lines of the
    /// batch are dropped.
    #[default]
    Raise,
    /// Yield every error in place of a sentence and continue.
    Yield,
    /// Drop failing lines silently and continue.
    Ignore,
}

impl FromStr for ErrorPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "raise" => Ok(ErrorPolicy::Raise),
            "yield" => Ok(ErrorPolicy::Yield),
            "ignore" => Ok(ErrorPolicy::Ignore),
            _ => Err(Error::InvalidErrorPolicy(s.to_owned())),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorPolicy::Raise => "raise",
            ErrorPolicy::Yield => "yield",
            ErrorPolicy::Ignore => "ignore",
        })
    }
}

/// Reassembles sentences from chunked input.
///
/// The reader owns the only state of the pipeline, the unterminated tail of
/// the input. It does no locking; share it between threads behind a mutex.
#[derive(Debug, Clone)]
pub struct StreamReader<'r> {
    registry: &'r Registry,
    mode: ChecksumMode,
    policy: ErrorPolicy,
    buffer: String,
}

impl StreamReader<'static> {
    /// A reader over the standard registry with optional checksums.
    pub fn new(policy: ErrorPolicy) -> Self {
        StreamReader::with_registry(Registry::standard(), policy)
    }
}

impl<'r> StreamReader<'r> {
    /// A reader over a custom registry with optional checksums.
    pub fn with_registry(registry: &'r Registry, policy: ErrorPolicy) -> Self {
        StreamReader {
            registry,
            mode: ChecksumMode::Optional,
            policy,
            buffer: String::new(),
        }
    }

    /// Sets the checksum mode applied to every line.
    pub fn checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.mode = mode;
        self
    }

    /// The error policy fixed at construction.
    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Text received after the last line terminator.
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    /// Appends a chunk and parses every line it completes.
    ///
    /// Lines are split on `\n`; a trailing `\r` is stripped with the other
    /// surrounding whitespace.
    ///
    /// Blank and whitespace-only lines are skipped under every policy. They
    /// never reach the parser, so even [`ErrorPolicy::Raise`] does not end a
    /// batch on an empty line.
    pub fn feed(&mut self, chunk: &str) -> Batch<'r> {
        self.buffer.push_str(chunk);

        let lines = match self.buffer.rfind('\n') {
            Some(end) => {
                let tail = self.buffer.split_off(end + 1);
                let complete = std::mem::replace(&mut self.buffer, tail);
                complete.lines().map(str::to_owned).collect()
            }
            None => Vec::new(),
        };

        Batch {
            registry: self.registry,
            mode: self.mode,
            policy: self.policy,
            lines: lines.into_iter(),
            done: false,
        }
    }

    /// Like [`feed`](Self::feed), for raw bytes. Invalid UTF-8 is replaced and
    /// fails the line it belongs to as non-ASCII.
    pub fn feed_bytes(&mut self, chunk: &[u8]) -> Batch<'r> {
        match String::from_utf8_lossy(chunk) {
            Cow::Borrowed(s) => self.feed(s),
            Cow::Owned(s) => self.feed(&s),
        }
    }
}

/// The sentences completed by one [`StreamReader::feed`] call.
///
/// Lines are parsed lazily, in order, as the batch is iterated. A batch is
/// not restartable; dropping it discards the lines it has not parsed yet.
#[derive(Debug)]
pub struct Batch<'r> {
    registry: &'r Registry,
    mode: ChecksumMode,
    policy: ErrorPolicy,
    lines: std::vec::IntoIter<String>,
    done: bool,
}

impl Iterator for Batch<'_> {
    type Item = Result<Sentence>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for line in self.lines.by_ref() {
            if line.trim().is_empty() {
                continue;
            }

            let err = match self.registry.parse(&line, self.mode) {
                Ok(sentence) => return Some(Ok(sentence)),
                Err(err) => err,
            };

            match self.policy {
                ErrorPolicy::Raise => {
                    self.done = true;
                    tracing::debug!(
                        %err,
                        dropped = self.lines.len(),
                        "stopping batch on error"
                    );
                    return Some(Err(err));
                }
                ErrorPolicy::Yield => return Some(Err(err)),
                ErrorPolicy::Ignore => {
                    tracing::debug!(%err, "ignoring line");
                }
            }
        }

        self.done = true;
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, Some(self.lines.len()))
        }
    }
}

impl FusedIterator for Batch<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    const GGA: &str = "$GPGGA,184353.07,1929.045,S,02410.506,E,1,04,2.6,100.00,M,-33.9,M,,0000*6D";

    #[test]
    fn test_error_policy_from_str() {
        for policy in [ErrorPolicy::Raise, ErrorPolicy::Yield, ErrorPolicy::Ignore] {
            assert_eq!(policy.to_string().parse(), Ok(policy));
        }
        assert_eq!(
            "RAISE".parse::<ErrorPolicy>(),
            Err(Error::InvalidErrorPolicy("RAISE".to_owned()))
        );
    }

    #[test]
    fn test_pending_tail() {
        let mut reader = StreamReader::new(ErrorPolicy::Raise);
        assert_eq!(reader.feed("$GPGGA,18").count(), 0);
        assert_eq!(reader.pending(), "$GPGGA,18");

        assert_eq!(reader.feed("4353\n$GP").count(), 1);
        assert_eq!(reader.pending(), "$GP");
    }

    #[test]
    fn test_every_split_point() {
        let whole = format!("{GGA}\r\n");
        let expected = crate::parse(GGA).unwrap();

        for at in 0..whole.len() {
            let mut reader = StreamReader::new(ErrorPolicy::Raise);
            let (a, b) = whole.split_at(at);

            let mut parsed: Vec<_> = reader.feed(a).collect();
            parsed.extend(reader.feed(b));

            assert_eq!(parsed, [Ok(expected.clone())], "Failed at offset {at}");
        }
    }

    #[test]
    fn test_raise_stops_batch() {
        let mut reader = StreamReader::new(ErrorPolicy::Raise);
        let batch: Vec<_> = reader
            .feed(&format!("{GGA}\n$GPABC,1,2,3\n{GGA}\n"))
            .collect();

        assert_eq!(batch.len(), 2);
        assert!(batch[0].is_ok());
        assert!(batch[1].as_ref().unwrap_err().is_sentence_type_error());

        // the next batch starts clean
        assert_eq!(reader.feed(&format!("{GGA}\n")).count(), 1);
    }

    #[test]
    fn test_blank_lines_do_not_raise() {
        let mut reader = StreamReader::new(ErrorPolicy::Raise);
        let batch: Vec<_> = reader.feed(&format!("\r\n{GGA}\n  \t\r\n\n{GGA}\n")).collect();

        assert_eq!(batch.len(), 2);
        assert!(batch.iter().all(Result::is_ok));
    }

    #[test]
    fn test_ignore_skips_errors() {
        let mut reader = StreamReader::new(ErrorPolicy::Ignore);
        let batch: Vec<_> = reader
            .feed(&format!("noise\n{GGA}\n\n$GPGGA,1*00\n{GGA}\n"))
            .collect();

        assert_eq!(batch.len(), 2);
        assert!(batch.iter().all(Result::is_ok));
    }

    #[test]
    fn test_required_checksum() {
        let mut reader =
            StreamReader::new(ErrorPolicy::Yield).checksum_mode(ChecksumMode::Required);
        let batch: Vec<_> = reader.feed("$GPGGA,184353.07\n").collect();

        assert_eq!(
            batch,
            [Err(Error::ChecksumMissing {
                line: "$GPGGA,184353.07".to_owned()
            })]
        );
    }

    #[test]
    fn test_feed_bytes() {
        let mut reader = StreamReader::new(ErrorPolicy::Yield);
        let batch: Vec<_> = reader.feed_bytes(b"$GPGGA,\xff\n").collect();

        assert!(matches!(batch[..], [Err(Error::NonAscii { .. })]));
    }
}
