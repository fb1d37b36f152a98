//! Trimble proprietary sentences.

use crate::{Dispatch, Manufacturer, Shape, coerce, fields};

/// PTNL - Trimble
///
/// Most Trimble sentences put a comma between the manufacturer code and the
/// message type, `DG` does not.
///
/// ```text
/// $PTNL,PJT,NAD83(Conus),California Zone 4 0404,*5D
/// $PTNLDG,44.0,33.0,287.0,100,0,4,1,0,,,*3E
/// ```
pub fn manufacturer() -> Manufacturer {
    Manufacturer::new("TNL", Shape::empty("TNL", "Trimble message"))
        .dispatch(Dispatch::FirstNonEmpty(&[0, 1]))
        .subtype(
            "AVR",
            Shape::new(
                "AVR",
                "Time, yaw, tilt, range for moving baseline RTK",
                fields![
                    ("Empty", "_"),
                    ("Sentence Type", "type"),
                    ("Timestamp", "timestamp", coerce::timestamp),
                    ("Yaw Angle", "yaw_angle"),
                    ("Yaw", "yaw"),
                    ("Tilt Angle", "tilt_angle"),
                    ("Tilt", "tilt"),
                    ("Roll Angle", "roll_angle"),
                    ("Roll", "roll"),
                    ("Baseline Range", "baseline"),
                    ("GPS Quality", "gps_quality"),
                    ("PDOP", "pdop", coerce::float),
                    ("Total number of satellites in use", "num_sats", coerce::integer),
                ],
            ),
        )
        .subtype(
            "BPQ",
            Shape::new(
                "BPQ",
                "Base station position and quality",
                fields![
                    ("Empty", "_"),
                    ("Sentence Type", "type"),
                    ("Timestamp", "timestamp", coerce::timestamp),
                    ("Datestamp", "datestamp", coerce::datestamp),
                    ("Latitude", "lat"),
                    ("Latitude Direction", "lat_dir"),
                    ("Longitude", "lon"),
                    ("Longitude Direction", "lon_dir"),
                    ("Height Ellipsoid", "height"),
                    ("Meters", "meters"),
                    ("Mode fix type", "mode_fix_type"),
                    ("Total number of satellites in use", "num_sats", coerce::integer),
                ],
            ),
        )
        .subtype(
            "GGK",
            Shape::new(
                "GGK",
                "Time, position, position type and DOP",
                fields![
                    ("Empty", "_"),
                    ("Sentence Type", "type"),
                    ("Timestamp", "timestamp", coerce::timestamp),
                    ("Datestamp", "datestamp", coerce::datestamp),
                    ("Latitude", "lat"),
                    ("Latitude Direction", "lat_dir"),
                    ("Longitude", "lon"),
                    ("Longitude Direction", "lon_dir"),
                    ("GPS Quality", "quality"),
                    ("Total number of satellites in use", "num_sats", coerce::integer),
                    ("DOP", "dop"),
                    ("Height Ellipsoid", "height"),
                    ("Meters", "meters"),
                    ("Mode fix type", "mode_fix_type"),
                ],
            ),
        )
        .subtype(
            "VHD",
            Shape::new(
                "VHD",
                "Heading information",
                fields![
                    ("Empty", "_"),
                    ("Sentence Type", "type"),
                    ("Timestamp", "timestamp", coerce::timestamp),
                    ("Datestamp", "datestamp", coerce::datestamp),
                    ("Azimuth Angle", "azimuth", coerce::float),
                    ("AzimuthTime", "azdt", coerce::float),
                    ("Vertical Angle", "vertical", coerce::float),
                    ("VerticalTime", "vertdt", coerce::float),
                    ("Range", "range", coerce::float),
                    ("RangeTime", "rdt", coerce::float),
                    ("GPS Quality", "gps_quality"),
                    ("Total number of satellites in use", "num_sats", coerce::integer),
                    ("PDOP", "pdop", coerce::float),
                ],
            ),
        )
        .subtype(
            "PJT",
            Shape::new(
                "PJT",
                "Projection type",
                fields![
                    ("Empty", "_"),
                    ("Sentence Type", "type"),
                    ("Coordinate System", "coord_name"),
                    ("Project Name", "project_name"),
                ],
            ),
        )
        .subtype(
            "PJK",
            Shape::new(
                "PJK",
                "Local coordinate position output",
                fields![
                    ("Empty", "_"),
                    ("Sentence Type", "type"),
                    ("Timestamp", "timestamp", coerce::timestamp),
                    ("Datestamp", "datestamp", coerce::datestamp),
                    ("Northing", "northing", coerce::float),
                    ("North", "north"),
                    ("Easting", "easting", coerce::float),
                    ("East", "east"),
                    ("GPS Quality", "gps_quality"),
                    ("Total number of satellites in use", "num_sats", coerce::integer),
                    ("DOP", "dop", coerce::float),
                    ("Height", "height"),
                    ("Meters", "meters"),
                ],
            ),
        )
        .subtype(
            "VGK",
            Shape::new(
                "VGK",
                "Vector information",
                fields![
                    ("Empty", "_"),
                    ("Sentence Type", "type"),
                    ("Timestamp", "timestamp", coerce::timestamp),
                    ("Datestamp", "datestamp", coerce::datestamp),
                    ("East component", "east", coerce::float),
                    ("North component", "north", coerce::float),
                    ("Up component", "up", coerce::float),
                    ("GPS Quality", "gps_quality"),
                    ("Total number of satellites in use", "num_sats", coerce::integer),
                    ("DOP", "dop", coerce::float),
                    ("Meters", "meters"),
                ],
            ),
        )
        .subtype(
            "EVT",
            Shape::new(
                "EVT",
                "Event marker",
                fields![
                    ("Empty", "_"),
                    ("Sentence Type", "type"),
                    ("Timestamp", "timestamp", coerce::timestamp),
                    ("Port number", "port_num", coerce::integer),
                    ("Event number", "event_num", coerce::integer),
                    ("GPS week number", "gps_week_num", coerce::integer),
                    ("GPS day number", "gps_day_num", coerce::integer),
                    ("Leap seconds", "leap_secs", coerce::integer),
                ],
            ),
        )
        .subtype(
            "DG",
            Shape::new(
                "DG",
                "L-band beacon and satellite receiver status",
                fields![
                    ("Sentence Type", "type"),
                    ("Signal strength", "strength", coerce::float),
                    ("Signal to noise ratio", "snr", coerce::float),
                    ("Frequency", "frequency", coerce::float),
                    ("Bit rate", "bitrate", coerce::integer),
                    ("Channel number", "channel_no", coerce::integer),
                    ("Tracking status", "status"),
                    ("Channel used", "channel_used"),
                    ("Performance", "performance", coerce::integer),
                ],
            ),
        )
}
