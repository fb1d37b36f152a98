//! RD Instruments proprietary sentences.

use crate::{Dispatch, Manufacturer, Shape, coerce, fields};

/// PRDI - RD Instruments
///
/// Only the `D` sentence is known, so every sentence is read as one.
///
/// ```text
/// $PRDID,-1.31,7.81,47.31*68
/// ```
pub fn manufacturer() -> Manufacturer {
    Manufacturer::new("RDI", Shape::empty("RDI", "RD Instruments message"))
        .dispatch(Dispatch::Fixed("D"))
        .subtype(
            "D",
            Shape::new(
                "D",
                "RD Instruments heading, pitch and roll data",
                fields![
                    ("Subtype", "subtype"),
                    ("Pitch", "pitch", coerce::float),
                    ("Roll", "roll", coerce::float),
                    ("Heading", "heading", coerce::float),
                ],
            ),
        )
}
