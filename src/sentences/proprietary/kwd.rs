//! Kenwood proprietary sentences.

use crate::{Dispatch, Manufacturer, Shape, coerce, fields};

/// PKWD - Kenwood
///
/// ```text
/// $PKWDWPL,hhmmss,v,ddmm.mm,ns,dddmm.mm,ew,speed,course,ddmmyy,alt,wname,ts*hh<CR><LF>
/// ```
pub fn manufacturer() -> Manufacturer {
    Manufacturer::new("KWD", Shape::new("KWD", "Kenwood message", fields![("Subtype", "subtype")]))
        .dispatch(Dispatch::Token(0))
        .subtype(
            "WPL",
            Shape::new(
                "WPL",
                "Waypoint location",
                fields![
                    ("Subtype", "subtype"),
                    ("Time of Receipt", "timestamp", coerce::timestamp),
                    ("GPS Status (Void)", "status"),
                    ("Latitude", "lat"),
                    ("Latitude Direction", "lat_dir"),
                    ("Longitude", "lon"),
                    ("Longitude Direction", "lon_dir"),
                    ("Speed over Ground", "sog", coerce::float),
                    ("Course over Ground", "cog", coerce::float),
                    ("Date", "datestamp", coerce::datestamp),
                    ("Altitude", "altitude", coerce::float),
                    ("Waypoint Name", "wname"),
                    ("Table and Symbol", "ts"),
                ],
            ),
        )
}
