//! Field tables of the standard talker sentences.

use crate::{Shape, coerce, fields};

/// All standard talker sentence shapes, keyed by their sentence type code.
pub fn shapes() -> Vec<Shape> {
    vec![
        Shape::new(
            "AAM",
            "Waypoint Arrival Alarm",
            fields![
                ("Arrival Circle Entered", "arrival_circ_entered"),
                ("Perpendicular Passed", "perp_passed"),
                ("Circle Radius", "circle_rad"),
                ("Nautical Miles", "circle_rad_unit"),
                ("Waypoint ID", "waypoint_id"),
            ],
        ),
        Shape::new(
            "ALM",
            "GPS Almanac data",
            fields![
                ("Total number of messages", "total_num_msgs"),
                ("Message number", "msg_num"),
                ("Satellite PRN number", "sat_prn_num"),
                ("GPS week number", "gps_week_num"),
                ("SV Health, bits 17-24 of each almanac page", "sv_health"),
                ("Eccentricity", "eccentricity"),
                ("Almanac Reference Time", "alamanac_ref_time"),
                ("Inclination Angle", "inc_angle"),
                ("Rate of right ascension", "rate_right_asc"),
                ("Root of semi-major axis", "root_semi_major_axis"),
                ("Argument of perigee", "arg_perigee"),
                ("Longitude of ascension node", "lat_asc_node"),
                ("Mean anomaly", "mean_anom"),
                ("F0 Clock parameter", "f0_clock_param"),
                ("F1 Clock parameter", "f1_clock_param"),
            ],
        ),
        Shape::new(
            "APA",
            "Autopilot Sentence \"A\"",
            fields![
                ("General Status", "status_gen"),
                ("Cycle lock Status", "status_cycle_lock"),
                ("Cross Track Error Magnitude", "cross_track_err_mag"),
                ("Direction to Steer (L or R)", "dir_steer"),
                ("Cross Track Units (Nautical Miles or KM)", "cross_track_unit"),
                ("Arrival Circle Entered", "arr_circle_entered"),
                ("Perpendicular passed at waypoint", "perp_passed"),
                ("Bearing origin to destination", "bearing_to_dest"),
                ("Bearing type", "bearing_type"),
                ("Destination waypoint ID", "dest_waypoint_id"),
            ],
        ),
        Shape::new(
            "APB",
            "Autopilot Sentence \"B\"",
            fields![
                ("General Status", "status_gen"),
                ("Cycle lock Status", "status_cycle_lock"),
                ("Cross Track Error Magnitude", "cross_track_err_mag"),
                ("Direction to Steer (L or R)", "dir_steer"),
                ("Cross Track Units (Nautical Miles or KM)", "cross_track_unit"),
                ("Arrival Circle Entered", "arr_circle_entered"),
                ("Perpendicular passed at waypoint", "perp_passed"),
                ("Bearing origin to destination", "bearing_to_dest"),
                ("Bearing type", "bearing_type"),
                ("Destination waypoint ID", "dest_waypoint_id"),
                ("Bearing, present position to dest", "bearing_pres_dest"),
                ("Bearing to destination, type", "bearing_pres_dest_type"),
                ("Heading to steer to destination", "heading_to_dest"),
                ("Heading to steer to destination type", "heading_to_dest_type"),
            ],
        ),
        Shape::new(
            "BEC",
            "Bearing & Distance to Waypoint, Dead Reckoning",
            fields![
                ("Timestamp", "timestamp", coerce::timestamp),
                ("Waypoint Latitude", "waypoint_lat"),
                ("Waypoint Latitude direction", "waypoint_lat_dir"),
                ("Waypoint Longitude", "waypoint_lon"),
                ("Waypoint Longitude direction", "waypoint_lon_dir"),
                ("Bearing, true", "bearing_true"),
                ("Bearing True symbol", "bearing_true_sym"),
                ("Bearing Magnetic", "bearing_mag"),
                ("Bearing Magnetic symbol", "bearing_mag_sym"),
                ("Nautical Miles", "nautical_miles"),
                ("Nautical Miles symbol", "nautical_miles_sym"),
                ("Waypoint ID", "waypoint_id"),
                ("FAA mode indicator", "faa_mode"),
            ],
        ),
        Shape::new(
            "BOD",
            "Bearing, Origin to Destination",
            fields![
                ("Bearing True", "bearing_t", coerce::float),
                ("Bearing True Type", "bearing_t_type"),
                ("Bearing Magnetic", "bearing_mag", coerce::float),
                ("Bearing Magnetic Type", "bearing_mag_type"),
                ("Destination", "dest"),
                ("Start", "start"),
            ],
        ),
        Shape::new(
            "BWC",
            "Bearing and Distance to Waypoint, Great Circle",
            fields![
                ("Timestamp", "timestamp", coerce::timestamp),
                ("Latitude of next Waypoint", "lat_next"),
                ("Latitude of next Waypoint Direction", "lat_next_direction"),
                ("Longitude of next Waypoint", "lon_next"),
                ("Longitude of next Waypoint Direction", "lon_next_direction"),
                ("True track to waypoint", "true_track"),
                ("True Track Symbol", "true_track_sym"),
                ("Magnetic track to waypoint", "mag_track"),
                ("Magnetic Symbol", "mag_sym"),
                ("Range to waypoint", "range_next"),
                ("Unit of range", "range_unit"),
                ("Waypoint Name", "waypoint_name"),
            ],
        ),
        Shape::new(
            "BWR",
            "Bearing and Distance to Waypoint, Rhumb Line",
            fields![
                ("Timestamp", "timestamp", coerce::timestamp),
                ("Latitude of next Waypoint", "lat_next"),
                ("Latitude of next Waypoint Direction", "lat_next_direction"),
                ("Longitude of next Waypoint", "lon_next"),
                ("Longitude of next Waypoint Direction", "lon_next_direction"),
                ("True track to waypoint", "true_track"),
                ("True Track Symbol", "true_track_sym"),
                ("Magnetic track to waypoint", "mag_track"),
                ("Magnetic Symbol", "mag_sym"),
                ("Range to waypoint", "range_next"),
                ("Unit of range", "range_unit"),
                ("Waypoint Name", "waypoint_name"),
            ],
        ),
        Shape::new(
            "GGA",
            "Global Positioning System Fix Data",
            fields![
                ("Timestamp", "timestamp", coerce::timestamp),
                ("Latitude", "lat"),
                ("Latitude Direction", "lat_dir"),
                ("Longitude", "lon"),
                ("Longitude Direction", "lon_dir"),
                ("GPS Quality Indicator", "gps_qual", coerce::integer),
                ("Number of Satellites in use", "num_sats"),
                ("Horizontal Dilution of Precision", "horizontal_dil"),
                ("Antenna Alt above sea level (mean)", "altitude", coerce::float),
                ("Units of altitude (meters)", "altitude_units"),
                ("Geoidal Separation", "geo_sep"),
                ("Units of Geoidal Separation (meters)", "geo_sep_units"),
                ("Age of Differential GPS Data (secs)", "age_gps_data"),
                ("Differential Reference Station ID", "ref_station_id"),
            ],
        ),
        Shape::new(
            "GNS",
            "GNSS Fix Data",
            fields![
                ("Timestamp", "timestamp", coerce::timestamp),
                ("Latitude", "lat"),
                ("Latitude Direction", "lat_dir"),
                ("Longitude", "lon"),
                ("Longitude Direction", "lon_dir"),
                ("Mode indicator", "mode_indicator"),
                ("Total number of satelites in use", "num_sats"),
                ("HDROP", "hdop"),
                ("Antenna altitude, meters", "altitude"),
                ("Goeidal separation meters", "geo_sep"),
                ("Age of diferential data", "age_gps_data"),
                ("Differential reference station ID", "diferential"),
            ],
        ),
        Shape::new(
            "GRS",
            "GNSS Range Residuals",
            fields![
                ("Timestamp", "timestamp", coerce::timestamp),
                ("Residuals mode", "residuals_mode", coerce::integer),
                ("SV 01 Residual (m)", "sv_res_01", coerce::float),
                ("SV 02 Residual (m)", "sv_res_02", coerce::float),
                ("SV 03 Residual (m)", "sv_res_03", coerce::float),
                ("SV 04 Residual (m)", "sv_res_04", coerce::float),
                ("SV 05 Residual (m)", "sv_res_05", coerce::float),
                ("SV 06 Residual (m)", "sv_res_06", coerce::float),
                ("SV 07 Residual (m)", "sv_res_07", coerce::float),
                ("SV 08 Residual (m)", "sv_res_08", coerce::float),
                ("SV 09 Residual (m)", "sv_res_09", coerce::float),
                ("SV 10 Residual (m)", "sv_res_10", coerce::float),
                ("SV 11 Residual (m)", "sv_res_11", coerce::float),
                ("SV 12 Residual (m)", "sv_res_12", coerce::float),
            ],
        ),
        Shape::new(
            "BWW",
            "Bearing, Waypoint to Waypoint",
            fields![
                ("Bearing degrees True", "bearing_deg_true"),
                ("Bearing degrees True Symbol", "bearing_deg_true_sym"),
                ("Bearing degrees Magnitude", "bearing_deg_mag"),
                ("Bearing degrees Magnitude Symbol", "bearing_deg_mag_sym"),
                ("Destination Waypoint ID", "waypoint_id_dest"),
                ("Origin Waypoint ID", "waypoint_id_orig"),
            ],
        ),
        Shape::new(
            "GLL",
            "Geographic Position, Latitude/Longitude",
            fields![
                ("Latitude", "lat"),
                ("Latitude Direction", "lat_dir"),
                ("Longitude", "lon"),
                ("Longitude Direction", "lon_dir"),
                ("Timestamp", "timestamp", coerce::timestamp),
                ("Status", "status"),
                ("FAA mode indicator", "faa_mode"),
            ],
        ),
        Shape::new(
            "GSA",
            "GNSS DOP and Active Satellites",
            fields![
                ("Mode", "mode"),
                ("Mode fix type", "mode_fix_type"),
                ("SV ID01", "sv_id01"),
                ("SV ID02", "sv_id02"),
                ("SV ID03", "sv_id03"),
                ("SV ID04", "sv_id04"),
                ("SV ID05", "sv_id05"),
                ("SV ID06", "sv_id06"),
                ("SV ID07", "sv_id07"),
                ("SV ID08", "sv_id08"),
                ("SV ID09", "sv_id09"),
                ("SV ID10", "sv_id10"),
                ("SV ID11", "sv_id11"),
                ("SV ID12", "sv_id12"),
                ("PDOP (Dilution of precision)", "pdop"),
                ("HDOP (Horizontal DOP)", "hdop"),
                ("VDOP (Vertical DOP)", "vdop"),
            ],
        ),
        Shape::new(
            "GST",
            "GNSS Pseudorange Error Statistics",
            fields![
                (
                    "UTC time of the GGA or GNS fix associated with this sentence.",
                    "timestamp",
                    coerce::timestamp
                ),
                (
                    "RMS value of the standard deviation of the range inputs to the navigation process. Range inputs include preudoranges & DGNSS corrections.",
                    "rms",
                    coerce::float
                ),
                (
                    "Standard deviation of semi-major axis of error ellipse (meters)",
                    "std_dev_major",
                    coerce::float
                ),
                (
                    "Standard deviation of semi-minor axis of error ellipse (meters)",
                    "std_dev_minor",
                    coerce::float
                ),
                (
                    "Orientation of semi-major axis of error ellipse (degrees from true north)",
                    "orientation",
                    coerce::float
                ),
                (
                    "Standard deviation of latitude error (meters)",
                    "std_dev_latitude",
                    coerce::float
                ),
                (
                    "Standard deviation of longitude error (meters)",
                    "std_dev_longitude",
                    coerce::float
                ),
                (
                    "Standard deviation of altitude error (meters)",
                    "std_dev_altitude",
                    coerce::float
                ),
            ],
        ),
        Shape::new(
            "GSV",
            "GNSS Satellites in View",
            fields![
                ("Number of messages of type in cycle", "num_messages"),
                ("Message Number", "msg_num"),
                ("Total number of SVs in view", "num_sv_in_view"),
                ("SV PRN number 1", "sv_prn_num_1"),
                ("Elevation in degrees 1", "elevation_deg_1"),
                ("Azimuth, deg from true north 1", "azimuth_1"),
                ("SNR 1", "snr_1"),
                ("SV PRN number 2", "sv_prn_num_2"),
                ("Elevation in degrees 2", "elevation_deg_2"),
                ("Azimuth, deg from true north 2", "azimuth_2"),
                ("SNR 2", "snr_2"),
                ("SV PRN number 3", "sv_prn_num_3"),
                ("Elevation in degrees 3", "elevation_deg_3"),
                ("Azimuth, deg from true north 3", "azimuth_3"),
                ("SNR 3", "snr_3"),
                ("SV PRN number 4", "sv_prn_num_4"),
                ("Elevation in degrees 4", "elevation_deg_4"),
                ("Azimuth, deg from true north 4", "azimuth_4"),
                ("SNR 4", "snr_4"),
            ],
        ),
        Shape::new(
            "HDG",
            "Heading, Deviation and Variation",
            fields![
                ("Heading", "heading", coerce::float),
                ("Deviation", "deviation", coerce::float),
                ("Deviation Direction", "dev_dir"),
                ("Variation", "variation", coerce::float),
                ("Variation Direction", "var_dir"),
            ],
        ),
        Shape::new(
            "HDT",
            "Heading, True",
            fields![
                ("Heading", "heading", coerce::float),
                ("True", "hdg_true"),
            ],
        ),
        Shape::new(
            "RMA",
            "Recommended Minimum Specific Loran-C Data",
            fields![
                ("Data status", "data_status"),
                ("Latitude", "lat"),
                ("Latitude Direction", "lat_dir"),
                ("Longitude", "lon"),
                ("Longitude Direction", "lon_dir"),
                ("Not Used 1", "not_used_1"),
                ("Not Used 2", "not_used_2"),
                ("Speed over ground", "spd_over_grnd"),
                ("Course over ground", "crse_over_grnd"),
                ("Variation", "variation"),
                ("Variation Direction", "var_dir"),
            ],
        ),
        Shape::new(
            "RMB",
            "Recommended Minimum Navigation Information",
            fields![
                ("Status", "status"),
                ("Cross Track Error", "cross_track_error"),
                ("Cross Track Error, direction to corrent", "cte_correction_dir"),
                ("Origin Waypoint ID", "origin_waypoint_id"),
                ("Destination Waypoint ID", "dest_waypoint_id"),
                ("Destination Waypoint Latitude", "dest_lat"),
                ("Destination Waypoint Lat Direction", "dest_lat_dir"),
                ("Destination Waypoint Longitude", "dest_lon"),
                ("Destination Waypoint Lon Direction", "dest_lon_dir"),
                ("Range to Destination", "dest_range"),
                ("True Bearing to Destination", "dest_true_bearing"),
                ("Velocity Towards Destination", "dest_velocity"),
                ("Arrival Alarm", "arrival_alarm"),
            ],
        ),
        Shape::new(
            "RMC",
            "Recommended Minimum Specific GPS/TRANSIT Data",
            fields![
                ("Timestamp", "timestamp", coerce::timestamp),
                ("Status", "status"),
                ("Latitude", "lat"),
                ("Latitude Direction", "lat_dir"),
                ("Longitude", "lon"),
                ("Longitude Direction", "lon_dir"),
                ("Speed Over Ground", "spd_over_grnd", coerce::float),
                ("True Course", "true_course", coerce::float),
                ("Datestamp", "datestamp", coerce::datestamp),
                ("Magnetic Variation", "mag_variation"),
                ("Magnetic Variation Direction", "mag_var_dir"),
                ("Mode Indicator", "mode_indicator"),
                ("Navigational Status", "nav_status"),
            ],
        ),
        Shape::new(
            "RTE",
            "Routes",
            fields![
                ("Number of sentences in sequence", "num_in_seq"),
                ("Sentence Number", "sen_num"),
                ("Start Type", "start_type"),
                ("Name or Number of Active Route", "active_route_id"),
            ],
        ),
        Shape::empty("R00", "Waypoints in Active Route"),
        Shape::new("STN", "Multiple Data ID", fields![("Talker ID Number", "talker_id_num")]),
        Shape::new(
            "TRF",
            "Transit Fix Data",
            fields![
                ("Timestamp (UTC)", "timestamp", coerce::timestamp),
                ("Date (DD/MM/YY", "date"),
                ("Latitude", "lat"),
                ("Latitude Direction", "lat_dir"),
                ("Longitude", "lon"),
                ("Longitude Direction", "lon_dir"),
                ("Elevation Angle", "ele_angle"),
                ("Number of Iterations", "num_iterations"),
                ("Number of Doppler Intervals", "num_doppler_intervals"),
                ("Update Distance", "update_dist"),
                ("Satellite ID", "sat_id"),
            ],
        ),
        Shape::new(
            "TXT",
            "Text Transmission",
            fields![
                ("Number of Messages", "num_msg"),
                ("Message Number", "msg_num"),
                ("Type of Message", "msg_type"),
                ("Text", "text"),
            ],
        ),
        Shape::new(
            "VBW",
            "Dual Ground/Water Speed",
            fields![
                ("Longitudinal Water Speed", "lon_water_spd", coerce::float),
                ("Transverse Water Speed", "trans_water_spd", coerce::float),
                ("Water Speed Data Validity", "data_validity_water_spd"),
                ("Longitudinal Ground Speed", "lon_grnd_spd", coerce::float),
                ("Transverse Ground Speed", "trans_grnd_spd", coerce::float),
                ("Ground Speed Data Validity", "data_validity_grnd_spd"),
            ],
        ),
        Shape::new(
            "VTG",
            "Track Made Good and Ground Speed",
            fields![
                ("True Track made good", "true_track", coerce::float),
                ("True Track made good symbol", "true_track_sym"),
                ("Magnetic Track made good", "mag_track", coerce::float),
                ("Magnetic Track symbol", "mag_track_sym"),
                ("Speed over ground knots", "spd_over_grnd_kts", coerce::float),
                ("Speed over ground symbol", "spd_over_grnd_kts_sym"),
                ("Speed over ground kmph", "spd_over_grnd_kmph", coerce::float),
                ("Speed over ground kmph symbol", "spd_over_grnd_kmph_sym"),
                ("FAA mode indicator", "faa_mode"),
            ],
        ),
        Shape::new(
            "WCV",
            "Waypoint Closure Velocity",
            fields![
                ("Velocity", "velocity"),
                ("Velocity Units", "vel_units"),
                ("Waypoint ID", "waypoint_id"),
            ],
        ),
        Shape::new(
            "WNC",
            "Distance, Waypoint to Waypoint",
            fields![
                ("Distance, Nautical Miles", "dist_nautical_miles"),
                ("Distance Nautical Miles Unit", "dist_naut_unit"),
                ("Distance, Kilometers", "dist_km"),
                ("Distance, Kilometers Unit", "dist_km_unit"),
                ("Origin Waypoint ID", "waypoint_origin_id"),
                ("Destination Waypoint ID", "waypoint_dest_id"),
            ],
        ),
        Shape::new(
            "WPL",
            "Waypoint Location",
            fields![
                ("Latitude", "lat"),
                ("Latitude Direction", "lat_dir"),
                ("Longitude", "lon"),
                ("Longitude Direction", "lon_dir"),
                ("Waypoint ID", "waypoint_id"),
            ],
        ),
        Shape::new(
            "XTE",
            "Cross-Track Error, Measured",
            fields![
                ("General Warning Flag", "warning_flag"),
                ("Lock flag (Not Used)", "lock_flag"),
                ("Cross Track Error Distance", "cross_track_err_dist"),
                ("Correction Direction (L or R)", "correction_dir"),
                ("Distance Units", "dist_units"),
            ],
        ),
        Shape::new(
            "ZDA",
            "Time and Date",
            fields![
                ("Timestamp", "timestamp", coerce::timestamp),
                ("Day", "day", coerce::integer),
                ("Month", "month", coerce::integer),
                ("Year", "year", coerce::integer),
                ("Local Zone Description", "local_zone", coerce::integer),
                ("Local Zone Minutes Description", "local_zone_minutes", coerce::integer),
            ],
        ),
        Shape::new(
            "RSA",
            "Rudder Sensor Angle",
            fields![
                ("Starboard rudder sensor", "rsa_starboard", coerce::float),
                ("Starboard rudder sensor status", "rsa_starboard_status"),
                ("Port rudder sensor", "rsa_port", coerce::float),
                ("Port rudder sensor status", "rsa_port_status"),
            ],
        ),
        Shape::new(
            "HSC",
            "Heading Steering Command",
            fields![
                ("Heading", "heading_true", coerce::float),
                ("True", "true"),
                ("Heading Magnetic", "heading_magnetic", coerce::float),
                ("Magnetic", "magnetic"),
            ],
        ),
        Shape::new(
            "MWD",
            "Wind Direction",
            fields![
                ("Wind direction true", "direction_true", coerce::float),
                ("True", "true"),
                ("Wind direction magnetic", "direction_magnetic", coerce::float),
                ("Magnetic", "magnetic"),
                ("Wind speed knots", "wind_speed_knots", coerce::float),
                ("Knots", "knots"),
                ("Wind speed meters/second", "wind_speed_meters", coerce::float),
                ("Wind speed", "meters"),
            ],
        ),
        Shape::new(
            "MWV",
            "Wind Speed and Angle",
            fields![
                ("Wind angle", "wind_angle", coerce::float),
                ("Reference", "reference"),
                ("Wind speed", "wind_speed", coerce::float),
                ("Wind speed units", "wind_speed_units"),
                ("Status", "status"),
            ],
        ),
        Shape::new(
            "DBT",
            "Depth Below Transducer",
            fields![
                ("Depth below surface, feet", "depth_feet", coerce::float),
                ("Feet", "unit_feet"),
                ("Depth below surface, meters", "depth_meters", coerce::float),
                ("Meters", "unit_meters"),
                ("Depth below surface, fathoms", "depth_fathoms", coerce::float),
                ("fathoms", "unit_fathoms"),
            ],
        ),
        Shape::new(
            "HDM",
            "Heading, Magnetic",
            fields![
                ("Heading degrees", "heading", coerce::float),
                ("Magnetic", "magnetic"),
            ],
        ),
        Shape::new(
            "MTW",
            "Water Temperature",
            fields![
                ("Water temperature", "temperature", coerce::float),
                ("Unit of measurement", "units"),
            ],
        ),
        Shape::new(
            "VHW",
            "Water Speed and Heading",
            fields![
                ("Heading true degrees", "heading_true", coerce::float),
                ("heading true", "true"),
                ("Heading Magnetic degrees", "heading_magnetic", coerce::float),
                ("Magnetic", "magnetic"),
                ("Water speed knots", "water_speed_knots", coerce::float),
                ("Knots", "knots"),
                ("Water speed kilometers", "water_speed_km", coerce::float),
                ("Kilometers", "kilometers"),
            ],
        ),
        Shape::new(
            "VLW",
            "Distance Traveled through the Water",
            fields![
                ("Water trip distance", "trip_distance", coerce::float),
                ("Trip distance nautical miles", "trip_distance_miles"),
                ("Water trip distance since reset", "trip_distance_reset", coerce::float),
                ("Trip distance nautical miles since reset", "trip_distance_reset_miles"),
            ],
        ),
        Shape::new(
            "ROT",
            "Rate of Turn",
            fields![
                ("Rate of turn", "rate_of_turn"),
                ("Status", "status"),
            ],
        ),
        Shape::new(
            "RPM",
            "Revolutions",
            fields![
                ("Source", "source"),
                ("Engine or shaft number", "engine_no", coerce::integer),
                ("Speed", "speed", coerce::float),
                ("Propeller pitch", "pitch"),
                ("Status", "status"),
            ],
        ),
        Shape::new(
            "VPW",
            "Speed, Measured Parallel to Wind",
            fields![
                ("Speed knots", "speed_kn", coerce::float),
                ("Unit knots", "unit_knots"),
                ("Speed m/s", "speed_ms", coerce::float),
                ("Unit m/s", "unit_ms"),
            ],
        ),
        Shape::new(
            "VDR",
            "Set and Drift",
            fields![
                ("Degrees True", "deg_t", coerce::float),
                ("TRUE", "true"),
                ("Degrees Magnetic", "deg_m", coerce::float),
                ("Magnetic", "magnetic"),
                ("Speed of Current", "current", coerce::float),
                ("Unit", "unit_kn"),
            ],
        ),
        Shape::new(
            "VWR",
            "Relative Wind Speed and Angle",
            fields![
                ("Degrees Rel", "deg_r", coerce::float),
                ("Left/Right", "l_r"),
                ("Wind speed kn", "wind_speed_kn", coerce::float),
                ("Knots", "unit_knots"),
                ("Wind Speed m/s", "wind_speed_ms", coerce::float),
                ("m/s", "unit_ms"),
                ("Wind Speed Km/h", "wind_speed_km", coerce::float),
                ("Knots", "unit_km"),
            ],
        ),
        Shape::new(
            "XDR",
            "Transducer Measurements",
            fields![
                ("Transducer type", "type"),
                ("Transducer data value", "value"),
                ("Transducer data units", "units"),
                ("Transducer ID", "id"),
            ],
        ),
        Shape::new(
            "OSD",
            "Own Ship Data",
            fields![
                ("True Heading", "heading", coerce::float),
                ("Status", "status"),
                ("Vessel Course true degrees", "course", coerce::float),
                ("Course True", "course_true"),
                ("Vessel Speed", "speed", coerce::float),
                ("Speed Reference", "speed_ref"),
                ("Vessel Set true degrees", "set", coerce::float),
                ("Vessel Drift(speed)", "drift", coerce::float),
                ("Speed Units", "speed_unit"),
            ],
        ),
        Shape::new(
            "TLL",
            "Target Latitude & Longitude",
            fields![
                ("Target Number", "target_number", coerce::integer),
                ("Target Latitude", "lat"),
                ("Latitude Direction", "lat_dir"),
                ("Target Longitude", "lon"),
                ("Longitude Direction", "lon_dir"),
                ("Target Name", "target_name"),
                ("Timestamp (UTC)", "timestamp", coerce::timestamp),
                ("Target Status", "target_status"),
                ("Reference Target", "reference"),
            ],
        ),
        Shape::new(
            "TTM",
            "Tracked Target Message",
            fields![
                ("Target Number", "target_number", coerce::integer),
                ("Target Distance", "distance", coerce::float),
                ("Bearing from Own Ship", "bearing", coerce::float),
                ("Bearing Reference", "brg_ref"),
                ("Target Speed", "speed", coerce::float),
                ("Target Course over Ground", "cog", coerce::float),
                ("Course Units", "cog_unit"),
                ("Distance of CPA", "dist_cpa", coerce::float),
                ("Time until CPA", "time_cpa", coerce::float),
                ("Distance Units", "dist_unit"),
                ("Target Name", "name"),
                ("Target Status", "status"),
                ("Target Reference", "reference"),
                ("Timestamp (UTC)", "timestamp", coerce::timestamp),
                ("Acquisition Type", "acquisition"),
            ],
        ),
        Shape::new(
            "DTM",
            "Datum Reference",
            fields![
                ("Local datum", "datum"),
                ("Subdivision datum", "subd_datum"),
                ("Latitude", "lat"),
                ("Latitude Direction", "lat_dir"),
                ("Longitude", "lon"),
                ("Longitude Direction", "lon_dir"),
                ("Signed altitude", "altitude"),
                ("Datum code", "datum_code"),
            ],
        ),
        Shape::new(
            "MDA",
            "Meteorological Composite",
            fields![
                ("Barometric pressure, inches of mercury", "b_pressure_inch", coerce::float),
                ("Inches", "inches"),
                ("Barometric pressure, bars", "b_pressure_bar", coerce::float),
                ("Bars", "bars"),
                ("Air temperature, degrees C", "air_temp", coerce::float),
                ("Celsius", "a_celsius"),
                ("Water temperature, degrees C", "water_temp", coerce::float),
                ("Celsius", "w_celsius"),
                ("Relative humidity, percent", "rel_humidity", coerce::float),
                ("Absolute humidity, percent", "abs_humidity", coerce::float),
                ("Dew point, degrees C", "dew_point", coerce::float),
                ("Celsius", "d_celsius"),
                ("Wind direction true", "direction_true", coerce::float),
                ("True", "true"),
                ("Wind direction magnetic", "direction_magnetic", coerce::float),
                ("Magnetic", "magnetic"),
                ("Wind speed knots", "wind_speed_knots", coerce::float),
                ("Knots", "knots"),
                ("Wind speed meters/second", "wind_speed_meters", coerce::float),
                ("Meters", "meters"),
            ],
        ),
        Shape::new(
            "VWT",
            "True Wind Speed and Angle",
            fields![
                ("Wind angle relative to the vessel", "wind_angle_vessel", coerce::float),
                ("Direction, L=Left, R=Right, relative to the vessel head", "direction"),
                ("Wind speed knots", "wind_speed_knots", coerce::float),
                ("Knots", "knots"),
                ("Wind speed meters/second", "wind_speed_meters", coerce::float),
                ("Meters", "meters"),
                ("Wind speed km/h", "wind_speed_km", coerce::float),
                ("Km", "km"),
            ],
        ),
        Shape::new(
            "DBS",
            "Depth Below Surface",
            fields![
                ("Depth below surface, feet", "depth_feet", coerce::float),
                ("Feets", "feets"),
                ("Depth below surface, meters", "depth_meter", coerce::float),
                ("Meters", "meters"),
                ("Depth below surface, fathoms", "depth_fathoms", coerce::float),
                ("Fathoms", "fathoms"),
            ],
        ),
        Shape::new(
            "DPT",
            "Depth of Water",
            fields![
                ("Water depth, in meters", "depth", coerce::float),
                ("Offset from the trasducer, in meters", "offset", coerce::float),
                ("Maximum range scale in use", "range", coerce::float),
            ],
        ),
        Shape::new(
            "GBS",
            "GNSS Satellite Fault Detection",
            fields![
                ("Timestamp", "timestamp", coerce::timestamp),
                ("Expected error in latitude", "lat_err"),
                ("Expected error in longitude", "lon_err"),
                ("Expected error in altitude", "alt_err"),
                ("PRN of most likely failed satellite", "sat_prn_num_f"),
                (
                    "Probability of missed detection for most likely failed satellite",
                    "pro_miss",
                    coerce::float
                ),
                ("Estimate of bias in meters on most likely failed satellite", "est_bias"),
                ("Standard deviation of bias estimate", "est_bias_dev"),
            ],
        ),
        Shape::new(
            "ALK",
            "SeaTalk Datagram",
            fields![
                ("Command", "cmd"),
                ("Data Byte 1", "data_byte1"),
                ("Data Byte 2", "data_byte2"),
                ("Data Byte 3", "data_byte3"),
                ("Data Byte 4", "data_byte4"),
                ("Data Byte 5", "data_byte5"),
                ("Data Byte 6", "data_byte6"),
                ("Data Byte 7", "data_byte7"),
                ("Data Byte 8", "data_byte8"),
                ("Data Byte 9", "data_byte9"),
            ],
        ),
    ]
}

/// Meaning of a SeaTalk command byte relayed in an `ALK` sentence.
///
/// ```rust
/// use nmea0183_records::sentences::talker::seatalk_command;
///
/// assert_eq!(seatalk_command("00"), Some("Depth below transducer"));
/// assert_eq!(seatalk_command("FF"), None);
/// ```
pub fn seatalk_command(code: &str) -> Option<&'static str> {
    let name = match code {
        "00" => "Depth below transducer",
        "01" => "Equipment ID",
        "05" => "Engine RPM and PITCH",
        "10" => "Apparent Wind Angle",
        "11" => "Apparent Wind Speed",
        "20" => "Speed through water",
        "50" => "LAT position",
        "51" => "LON position",
        "52" => "Speed over Ground",
        "53" => "Course over Ground",
        "82" => "Target waypoint name",
        "84" => "Compass heading  Autopilot course and Rudder position",
        "9C" => "Compass heading and Rudder position",
        _ => return None,
    };
    Some(name)
}
