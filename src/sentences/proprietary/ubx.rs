//! u-blox proprietary sentences.

use crate::{Dispatch, Manufacturer, Shape, coerce, fields};

/// PUBX - u-blox
///
/// The message identifier is the second token; the first is always empty.
///
/// ```text
/// $PUBX,00,hhmmss.ss,Latitude,N,Longitude,E,AltRef,NavStat,Hacc,Vacc,SOG,COG,Vvel,ageC,HDOP,VDOP,TDOP,GU,RU,DR,*hh<CR><LF>
/// ```
pub fn manufacturer() -> Manufacturer {
    Manufacturer::new(
        "UBX",
        Shape::new(
            "UBX",
            "u-blox message",
            fields![
                ("Blank", "_blank"),
                ("UBX Type", "ubx_type"),
            ],
        ),
    )
    .dispatch(Dispatch::Token(1))
    .subtype(
        "00",
        Shape::new(
            "00",
            "Lat/Long Position Data",
            fields![
                ("Blank", "_blank"),
                ("UBX Type", "ubx_type"),
                ("Timestamp (UTC)", "timestamp", coerce::timestamp),
                ("Latitude", "lat"),
                ("Latitude Direction", "lat_dir"),
                ("Longitude", "lon"),
                ("Longitude Direction", "lon_dir"),
                ("Altitude above user datum ellipsoid", "alt_ref"),
                ("Navigation Status", "nav_stat"),
                ("Horizontal Accuracy Estimate", "h_acc"),
                ("Vertical Accuracy Estimate", "v_acc"),
                ("Speed over Ground", "sog"),
                ("Course over Ground", "cog"),
                ("Vertical Velocity", "v_vel"),
                ("Age of Differential Corrections", "diff_age"),
                ("Horizontal Dilution of Precision", "hdop"),
                ("Vertical Dilution of Precision", "vdop"),
                ("Time Dilution of Precision", "tdop"),
                ("Number of Satellites Used", "num_svs"),
                ("Reserved", "reserved"),
            ],
        ),
    )
    .subtype(
        "03",
        Shape::new(
            "03",
            "Satellite Status",
            fields![
                ("Blank", "_blank"),
                ("UBX Type", "ubx_type"),
                ("Number of GNSS Satellites Tracked", "num_sv", coerce::integer),
            ],
        ),
    )
    .subtype(
        "04",
        Shape::new(
            "04",
            "Time and Day Clock Information",
            fields![
                ("Blank", "_blank"),
                ("UBX Type", "ubx_type"),
                ("UTC Time", "time", coerce::timestamp),
                ("UTC Date", "date", coerce::datestamp),
                ("UTC Time of Week", "utc_tow"),
                ("UTC Week Number", "utc_wk"),
                ("Leap Seconds", "leap_sec"),
                ("Receiver Clock Bias", "clk_bias", coerce::integer),
                ("Receiver Clock Drift", "clk_drift", coerce::float),
                ("Time Pulse Granularity", "tp_gran", coerce::integer),
            ],
        ),
    )
}
