//! Magellan proprietary sentences.

use crate::{Dispatch, Manufacturer, Shape, coerce, fields};

/// PMGN - Magellan
///
/// ```text
/// $PMGNWPL,ddmm.mmmm,ns,dddmm.mmmm,ew,alt,unit,wname,comment,icon,xx*hh<CR><LF>
/// ```
pub fn manufacturer() -> Manufacturer {
    Manufacturer::new("MGN", Shape::new("MGN", "Magellan message", fields![("Subtype", "subtype")]))
        .dispatch(Dispatch::Token(0))
        .subtype(
            "WPL",
            Shape::new(
                "WPL",
                "Waypoint location",
                fields![
                    ("Subtype", "subtype"),
                    ("Latitude", "lat"),
                    ("Latitude Direction", "lat_dir"),
                    ("Longitude", "lon"),
                    ("Longitude Direction", "lon_dir"),
                    ("Altitude", "altitude", coerce::float),
                    ("Altitude Units (Feet/Meters)", "altitude_unit"),
                    ("Waypoint Name", "wname"),
                    ("Comment", "comment"),
                    ("Icon", "icon"),
                    ("Waypoint Type", "type"),
                ],
            ),
        )
}
