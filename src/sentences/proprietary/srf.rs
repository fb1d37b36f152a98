//! SiRF proprietary sentences.

use crate::{Dispatch, Manufacturer, Shape, fields};

/// PSRF - SiRF
pub fn manufacturer() -> Manufacturer {
    Manufacturer::new("SRF", Shape::new("SRF", "SiRF message", fields![("Subtype", "subtype")]))
        .dispatch(Dispatch::Token(0))
        .subtype(
            "103",
            Shape::new(
                "103",
                "Query/rate control",
                fields![
                    ("Subtype", "subtype"),
                    ("Sentence type", "sentence"),
                    ("Command", "command"),
                    ("Rate", "rate"),
                    ("Checksum", "checksum"),
                ],
            ),
        )
        .subtype(
            "100",
            Shape::new(
                "100",
                "Set serial port",
                fields![
                    ("Subtype", "subtype"),
                    ("Protocol", "protocol"),
                    ("Baud Rate", "baud"),
                    ("Data bits", "databits"),
                    ("Stop bits", "stopbits"),
                    ("Parity", "parity"),
                ],
            ),
        )
}
