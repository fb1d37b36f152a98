//! Nortek Doppler Velocity Log sentences.

use crate::{Dispatch, Manufacturer, Shape, coerce, fields};

/// PNOR - Nortek DVL
///
/// The data format is glued to the manufacturer code.
///
/// ```text
/// $PNORBT0,1,040721,131335.3341,23.961,-48.122,-32.76800,10.00000,0.00,0x00000000*48
/// $PNORBT4,1.234,-1.234,1.234,23.4,12.34567,12.3*3D
/// ```
pub fn manufacturer() -> Manufacturer {
    Manufacturer::new(
        "NOR",
        Shape::new("NOR", "Nortek message", fields![("Data Format", "data_format")]),
    )
    .dispatch(Dispatch::Token(0))
    .subtype(
        "BT0",
        Shape::new(
            "BT0",
            "Bottom track, beam",
            fields![
                ("Data Format", "data_format"),
                ("Beam number", "beam", coerce::integer),
                ("Date", "datestamp", coerce::datestamp),
                ("Time", "timestamp", coerce::timestamp),
                ("Time (Trigger)", "dt1", coerce::float),
                ("Time (NMEA)", "dt2", coerce::float),
                ("Beam Velocity", "bv", coerce::float),
                ("Figure of Merit", "fom", coerce::float),
                ("Vertical Distance", "dist", coerce::float),
                ("Status", "stat"),
            ],
        ),
    )
    .subtype(
        "BT4",
        Shape::new(
            "BT4",
            "Bottom track, speed and direction",
            fields![
                ("Data Format", "data_format"),
                ("Time (Trigger)", "dt1", coerce::float),
                ("Time (NMEA)", "dt2", coerce::float),
                ("Speed of Sound", "sound_speed", coerce::float),
                ("Direction", "dir", coerce::float),
                ("Figure of Merit", "fom", coerce::float),
                ("Vertical Distance", "dist", coerce::float),
            ],
        ),
    )
    .subtype(
        "BT7",
        Shape::new(
            "BT7",
            "Bottom track, velocity",
            fields![
                ("Data Format", "data_format"),
                ("Ping Time", "timestamp", coerce::unix_time),
                ("Time (Trigger)", "dt1", coerce::float),
                ("Time (NMEA)", "dt2", coerce::float),
                ("Velocity X", "vx", coerce::float),
                ("Velocity Y", "vy", coerce::float),
                ("Velocity Z", "vz", coerce::float),
                ("Figure of Merit", "fom", coerce::float),
                ("Vertical Distance Beam 1", "d1", coerce::float),
                ("Vertical Distance Beam 2", "d2", coerce::float),
                ("Vertical Distance Beam 3", "d3", coerce::float),
                ("Vertical Distance Beam 4", "d4", coerce::float),
            ],
        ),
    )
    .subtype(
        "BT9",
        Shape::new(
            "BT9",
            "Bottom track, velocity and sensors",
            fields![
                ("Data Format", "data_format"),
                ("Ping Time", "timestamp", coerce::unix_time),
                ("Time (Trigger)", "dt1", coerce::float),
                ("Time (NMEA)", "dt2", coerce::float),
                ("Velocity X", "vx", coerce::float),
                ("Velocity Y", "vy", coerce::float),
                ("Velocity Z", "vz", coerce::float),
                ("Figure of Merit", "fom", coerce::float),
                ("Vertical Distance Beam 1", "d1", coerce::float),
                ("Vertical Distance Beam 2", "d2", coerce::float),
                ("Vertical Distance Beam 3", "d3", coerce::float),
                ("Vertical Distance Beam 4", "d4", coerce::float),
                ("Battery Voltage", "battery_voltage", coerce::float),
                ("Speed of Sound", "sound_speed", coerce::float),
                ("Pressure", "pressure", coerce::float),
                ("Temperature", "temp", coerce::float),
                ("Status", "stat"),
            ],
        ),
    )
    .subtype(
        "WT4",
        Shape::new(
            "WT4",
            "Water track, speed and direction",
            fields![
                ("Data Format", "data_format"),
                ("Time Trigger", "dt1", coerce::float),
                ("Time NMEA", "dt2", coerce::float),
                ("Speed of sound", "sound_speed", coerce::float),
                ("Direction", "dir", coerce::float),
                ("Figure of Merit", "fom", coerce::float),
                ("Vertical Distance", "dist", coerce::float),
            ],
        ),
    )
    .subtype(
        "WT7",
        Shape::new(
            "WT7",
            "Water track, velocity",
            fields![
                ("Data Format", "data_format"),
                ("Ping Time", "timestamp", coerce::unix_time),
                ("Time (Trigger)", "dt1", coerce::float),
                ("Time (NMEA)", "dt2", coerce::float),
                ("Velocity X", "vx", coerce::float),
                ("Velocity Y", "vy", coerce::float),
                ("Velocity Z", "vz", coerce::float),
                ("Figure of Merit", "fom", coerce::float),
                ("Vertical Distance Beam 1", "d1", coerce::float),
                ("Vertical Distance Beam 2", "d2", coerce::float),
                ("Vertical Distance Beam 3", "d3", coerce::float),
                ("Vertical Distance Beam 4", "d4", coerce::float),
            ],
        ),
    )
    .subtype(
        "WT9",
        Shape::new(
            "WT9",
            "Water track, velocity and sensors",
            fields![
                ("Data Format", "data_format"),
                ("Ping Time", "timestamp", coerce::unix_time),
                ("Time (Trigger)", "dt1", coerce::float),
                ("Time (NMEA)", "dt2", coerce::float),
                ("Velocity X", "vx", coerce::float),
                ("Velocity Y", "vy", coerce::float),
                ("Velocity Z", "vz", coerce::float),
                ("Figure of Merit", "fom", coerce::float),
                ("Vertical Distance Beam 1", "d1", coerce::float),
                ("Vertical Distance Beam 2", "d2", coerce::float),
                ("Vertical Distance Beam 3", "d3", coerce::float),
                ("Vertical Distance Beam 4", "d4", coerce::float),
                ("Battery Voltage", "battery_voltage", coerce::float),
                ("Speed of Sound", "sound_speed", coerce::float),
                ("Pressure", "pressure", coerce::float),
                ("Temperature", "temp", coerce::float),
                ("Status", "stat"),
            ],
        ),
    )
    .subtype(
        "I1",
        Shape::new(
            "I1",
            "Instrument information",
            fields![
                ("Data Format", "data_format"),
                ("Instrument type", "it", coerce::integer),
                ("Head ID", "sn", coerce::integer),
                ("Number of Beams", "nb", coerce::integer),
                ("Number of Cells", "nc", coerce::integer),
                ("Blanking Distance", "bd", coerce::float),
                ("Cell Size", "cs", coerce::float),
                ("Coordinate System", "cy"),
            ],
        ),
    )
    .subtype(
        "S1",
        Shape::new(
            "S1",
            "Sensor data",
            fields![
                ("Data Format", "data_format"),
                ("Date", "datestamp", coerce::datestamp),
                ("Time", "timestamp", coerce::timestamp),
                ("Error Code", "ec", coerce::integer),
                ("Status Code", "sc"),
                ("Battery Voltage", "battery_voltage", coerce::float),
                ("Speed of Sound", "sound_speed", coerce::float),
                ("Heading", "heading", coerce::float),
                ("Heading Std. Dev.", "heading_std", coerce::float),
                ("Pitch", "pitch", coerce::float),
                ("Pitch Std. Dev.", "pitch_std", coerce::float),
                ("Roll", "roll", coerce::float),
                ("Roll Std. Dev.", "roll_std", coerce::float),
                ("Pressure", "pressure", coerce::float),
                ("Pressure Std. Dev.", "pressure_std", coerce::float),
                ("Temperature", "temp", coerce::float),
            ],
        ),
    )
    .subtype(
        "S4",
        Shape::new(
            "S4",
            "Sensor data, short",
            fields![
                ("Data Format", "data_format"),
                ("Battery Voltage", "battery_voltage", coerce::float),
                ("Speed of Sound", "sound_speed", coerce::float),
                ("Heading", "heading", coerce::float),
                ("Pitch", "pitch", coerce::float),
                ("Roll", "roll", coerce::float),
                ("Pressure", "pressure", coerce::float),
                ("Temperature", "temp", coerce::float),
            ],
        ),
    )
    .subtype(
        "C1",
        Shape::new(
            "C1",
            "Current velocity, cell",
            fields![
                ("Data Format", "data_format"),
                ("Date", "datestamp", coerce::datestamp),
                ("Time", "timestamp", coerce::timestamp),
                ("Cell Number", "cn", coerce::integer),
                ("Cell Position", "cp", coerce::float),
                ("Velocity X", "vx", coerce::float),
                ("Velocity Y", "vy", coerce::float),
                ("Velocity Z", "vz", coerce::float),
                ("Velocity Z2", "vz2", coerce::float),
                ("Amplitude Beam 1", "amp1", coerce::float),
                ("Amplitude Beam 2", "amp2", coerce::float),
                ("Amplitude Beam 3", "amp3", coerce::float),
                ("Amplitude Beam 4", "amp4", coerce::float),
                ("Correlation Beam 1", "r1", coerce::integer),
                ("Correlation Beam 2", "r2", coerce::integer),
                ("Correlation Beam 3", "r3", coerce::integer),
                ("Correlation Beam 4", "r4", coerce::integer),
                ("Correlation Beam 4", "r5", coerce::integer),
            ],
        ),
    )
    .subtype(
        "C4",
        Shape::new(
            "C4",
            "Current velocity, speed and direction",
            fields![
                ("Data Format", "data_format"),
                ("Cell Position", "cp", coerce::float),
                ("Speed", "sp", coerce::float),
                ("Direction", "dir", coerce::float),
                ("Correlation", "r", coerce::integer),
                ("Amplitude", "amp", coerce::integer),
            ],
        ),
    )
    .subtype(
        "H4",
        Shape::new(
            "H4",
            "Header data",
            fields![
                ("Data Format", "data_format"),
                ("Date", "datestamp", coerce::datestamp),
                ("Time", "timestamp", coerce::timestamp),
                ("Error Code", "ec", coerce::integer),
                ("Status Code", "sc"),
            ],
        ),
    )
}
