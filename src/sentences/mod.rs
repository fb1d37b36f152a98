//! # Sentence Catalogue
//!
//! The field tables of the standard talker sentences and of the known
//! manufacturer sentences. [`Registry::nmea0183`](crate::Registry::nmea0183)
//! installs all of them.

pub mod proprietary;
pub mod talker;
