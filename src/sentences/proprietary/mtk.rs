//! MediaTek proprietary sentences.

use crate::{Dispatch, Manufacturer, Shape, coerce, fields};

/// PMTK - MediaTek
///
/// The packet type is usually glued to the manufacturer code, but some
/// senders put a comma in front of it.
///
/// ```text
/// $PMTK001,604,3*32
/// $PMTK220,200*2C
/// ```
pub fn manufacturer() -> Manufacturer {
    Manufacturer::new("MTK", Shape::empty("MTK", "MediaTek message"))
        .dispatch(Dispatch::FirstNonEmpty(&[0, 1]))
        .subtype(
            "001",
            Shape::new(
                "001",
                "MTK_ACK",
                fields![
                    ("Packet Type", "packet_type"),
                    ("Cmd", "cmd", coerce::integer),
                    ("Flag", "flag", coerce::integer),
                ],
            ),
        )
        .subtype(
            "010",
            Shape::new(
                "010",
                "MTK_SYS_MSG",
                fields![
                    ("Packet Type", "packet_type"),
                    ("Data", "data", coerce::integer),
                ],
            ),
        )
        .subtype(
            "011",
            Shape::new(
                "011",
                "MTK_TXT_MSG",
                fields![
                    ("Packet Type", "packet_type"),
                    ("Text", "text"),
                ],
            ),
        )
        .subtype(
            "101",
            Shape::new("101", "MTK_CMD_HOT_START", fields![("Packet Type", "packet_type")]),
        )
        .subtype(
            "102",
            Shape::new("102", "MTK_CMD_WARM_START", fields![("Packet Type", "packet_type")]),
        )
        .subtype(
            "103",
            Shape::new("103", "MTK_CMD_COLD_START", fields![("Packet Type", "packet_type")]),
        )
        .subtype(
            "104",
            Shape::new("104", "MTK_CMD_FULL_COLD_START", fields![("Packet Type", "packet_type")]),
        )
        .subtype(
            "220",
            Shape::new(
                "220",
                "MTK_SET_NMEA_UPDATERATE",
                fields![
                    ("Packet Type", "packet_type"),
                    ("FixInterval", "fix_interval", coerce::integer),
                ],
            ),
        )
}
