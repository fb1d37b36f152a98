//! Seapath proprietary sentences.

use crate::{Dispatch, Manufacturer, Shape, coerce, fields};

/// PSXN - Seapath
///
/// ```text
/// $PSXN,20,horiz-qual,hgt-qual,head-qual,rp-qual*hh<CR><LF>
/// $PSXN,21,event*hh<CR><LF>
/// $PSXN,22,gyro-calib,gyro-offs*hh<CR><LF>
/// $PSXN,23,roll,pitch,head,heave*hh<CR><LF>
/// $PSXN,24,roll-rate,pitch-rate,yaw-rate,vertical-vel*hh<CR><LF>
/// ```
pub fn manufacturer() -> Manufacturer {
    Manufacturer::new(
        "SXN",
        Shape::new(
            "SXN",
            "Seapath message",
            fields![
                ("Blank", "_blank"),
                ("Message Type", "message_type", coerce::integer),
            ],
        ),
    )
    .dispatch(Dispatch::Token(1))
    .subtype(
        "20",
        Shape::new(
            "20",
            "Quality",
            fields![
                ("Blank", "_blank"),
                ("Message Type", "message_type", coerce::integer),
                ("Horizontal position and velocity quality", "horiz_qual", coerce::integer),
                ("Height and vertical velocity quality", "hgt_qual", coerce::integer),
                ("Heading quality", "head_qual", coerce::integer),
                ("Roll and pitch quality", "rp_qual", coerce::integer),
            ],
        ),
    )
    .subtype(
        "21",
        Shape::new(
            "21",
            "Event",
            fields![
                ("Blank", "_blank"),
                ("Message Type", "message_type", coerce::integer),
                ("Event code: 1 = system restart.", "event", coerce::integer),
            ],
        ),
    )
    .subtype(
        "22",
        Shape::new(
            "22",
            "Gyro calibration",
            fields![
                ("Blank", "_blank"),
                ("Message Type", "message_type", coerce::integer),
                (
                    "Gyro calibration value since system start-up in degrees",
                    "gyro_calib",
                    coerce::float
                ),
                ("Short-term gyro offset in degrees", "gyro_ffs", coerce::float),
            ],
        ),
    )
    .subtype(
        "23",
        Shape::new(
            "23",
            "Roll, pitch, heading and heave",
            fields![
                ("Blank", "_blank"),
                ("Message Type", "message_type", coerce::integer),
                ("Roll in degrees. Positive with port side up.", "roll", coerce::float),
                ("Pitch in degrees. Positive with bow up.", "pitch", coerce::float),
                ("Heading, degrees true (0.00 - 359.99).", "head", coerce::float),
                ("Heave in metres. Positive down.", "heave", coerce::float),
            ],
        ),
    )
    .subtype(
        "24",
        Shape::new(
            "24",
            "Rates and vertical velocity",
            fields![
                ("Blank", "_blank"),
                ("Message Type", "message_type", coerce::integer),
                (
                    "Roll rate in degrees/second. Positive when port side is moving upwards.",
                    "roll_rate",
                    coerce::float
                ),
                (
                    "Pitch rate in degrees/second. Positive when bow is moving upwards.",
                    "pitch_rate",
                    coerce::float
                ),
                (
                    "Yaw rate in degrees/second. Positive when bow is moving towards starboard.",
                    "yaw_rate",
                    coerce::float
                ),
                (
                    "Vertical velocity in metres/second. Positive when moving downwards.",
                    "vertical_vel",
                    coerce::float
                ),
            ],
        ),
    )
}
