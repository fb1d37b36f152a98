//! Vectronix proprietary sentences.

use crate::{Dispatch, Manufacturer, Shape, coerce, fields};

/// PVTX - Vectronix Moskito TI laser range finder
///
/// The measurement type is the second token; the first is always empty.
pub fn manufacturer() -> Manufacturer {
    Manufacturer::new(
        "VTX",
        Shape::new(
            "VTX",
            "Vectronix message",
            fields![
                ("Message Placeholder", "mplaceholder"),
                ("Subtype", "subtype"),
            ],
        ),
    )
    .dispatch(Dispatch::Token(1))
    .subtype(
        "0002",
        Shape::new(
            "0002",
            "Vectronix measurement: laser distance and angles (degrees) with declination",
            fields![
                ("Message Placeholder", "mplaceholder"),
                ("Subtype", "subtype"),
                ("Measurement ID", "measurement_id", coerce::integer),
                ("Distance (meters)", "dist", coerce::float),
                ("Distance unit", "dist_unit"),
                ("Direction (degrees)", "direction", coerce::float),
                ("Direction unit", "direction_unit"),
                ("Vertical angle (degrees)", "va", coerce::float),
                ("Magnetic declination (degrees)", "decl", coerce::float),
                ("Magnetic declination ref (E/W)", "decl_ref"),
            ],
        ),
    )
    .subtype(
        "0000",
        Shape::new(
            "0000",
            "Vectronix raw measurement: laser distance and angles (radians) without declination",
            fields![
                ("Message Placeholder", "mplaceholder"),
                ("Subtype", "subtype"),
                ("Distance (meters)", "dist", coerce::float),
                ("Distance unit", "dist_unit"),
                ("Direction (radians)", "direction", coerce::float),
                ("Roll angle (radians)", "roll", coerce::float),
                ("Vertical angle (radians)", "va", coerce::float),
                ("Angular units type", "angle_units"),
            ],
        ),
    )
    .subtype(
        "0020",
        Shape::new(
            "0020",
            "Vectronix self location: lat, long, altitude",
            fields![
                ("Message Placeholder", "mplaceholder"),
                ("Subtype", "subtype"),
                ("Measurement ID", "measurement_id", coerce::integer),
                ("Latitude", "lat"),
                ("Latitude Direction", "lat_dir"),
                ("Longitude", "lon"),
                ("Longitude Direction", "lon_dir"),
                ("Altitude above WGS84 ellipsoid, meters", "altitude", coerce::float),
                ("Altitude units", "altitude_units"),
            ],
        ),
    )
    .subtype(
        "0012",
        Shape::new(
            "0012",
            "Vectronix target location: lat, long, altitude, gain",
            fields![
                ("Message Placeholder", "mplaceholder"),
                ("Subtype", "subtype"),
                ("Measurement ID", "measurement_id", coerce::integer),
                ("Latitude", "lat"),
                ("Latitude Direction", "lat_dir"),
                ("Longitude", "lon"),
                ("Longitude Direction", "lon_dir"),
                ("Altitude above WGS84 ellipsoid, meters", "altitude", coerce::float),
                ("Altitude units", "altitude_units"),
                ("Gain (meters)", "gain", coerce::float),
                ("Gain units", "gain_units"),
            ],
        ),
    )
}
