//! Garmin proprietary sentences.

use crate::{Dispatch, Manufacturer, Shape, fields};

/// PGRM - Garmin
///
/// The subtype is the single letter glued to the manufacturer code.
///
/// ```text
/// $PGRME,15.0,M,45.0,M,25.0,M*hh<CR><LF>
/// ```
pub fn manufacturer() -> Manufacturer {
    Manufacturer::new("GRM", Shape::new("GRM", "Garmin message", fields![("Subtype", "subtype")]))
        .dispatch(Dispatch::Token(0))
        .subtype(
            "E",
            Shape::new(
                "E",
                "Estimated position error",
                fields![
                    ("Subtype", "subtype"),
                    ("Estimated Horiz. Position Error", "hpe"),
                    ("Estimated Horiz. Position Error Unit (M)", "hpe_unit"),
                    ("Estimated Vert. Position Error", "vpe"),
                    ("Estimated Vert. Position Error Unit (M)", "vpe_unit"),
                    ("Estimated Horiz. Position Error", "osepe"),
                    ("Overall Spherical Equiv. Position Error", "osepe_unit"),
                ],
            ),
        )
        .subtype(
            "M",
            Shape::new(
                "M",
                "Map datum",
                fields![
                    ("Subtype", "subtype"),
                    ("Currently Active Datum", "datum"),
                ],
            ),
        )
        .subtype(
            "Z",
            Shape::new(
                "Z",
                "Altitude information",
                fields![
                    ("Subtype", "subtype"),
                    ("Altitude", "altitude"),
                    ("Altitude Units (Feet)", "altitude_unit"),
                    ("Positional Fix Dimension (2=user, 3=GPS)", "pos_fix_dim"),
                ],
            ),
        )
}
