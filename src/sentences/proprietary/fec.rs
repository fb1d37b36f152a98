//! Furuno proprietary sentences.

use crate::{Dispatch, Manufacturer, Shape, coerce, fields};

/// PFEC - Furuno
///
/// The datagram identifier is the second token; the first is always empty.
///
/// ```text
/// $PFEC,GPatt,aaa.a,bb.b,cc.c*hh<CR><LF>
/// $PFEC,GPhve,xx.xxx,A*hh<CR><LF>
/// ```
pub fn manufacturer() -> Manufacturer {
    Manufacturer::new(
        "FEC",
        Shape::new(
            "FEC",
            "Furuno message",
            fields![
                ("Empty", "_"),
                ("Datagram", "subtype"),
            ],
        ),
    )
    .dispatch(Dispatch::Token(1))
    .subtype(
        "GPatt",
        Shape::new(
            "GPatt",
            "Global positioning attitude",
            fields![
                ("Empty", "_"),
                ("Datagram", "subtype"),
                ("Yaw", "yaw", coerce::float),
                ("Pitch", "pitch", coerce::float),
                ("Roll", "roll", coerce::float),
            ],
        ),
    )
    .subtype(
        "GPhve",
        Shape::new(
            "GPhve",
            "Heave",
            fields![
                ("Empty", "_"),
                ("Datagram", "subtype"),
                ("Heave", "heave", coerce::float),
            ],
        ),
    )
}
