//! Quectel proprietary sentences.

use crate::{Dispatch, Manufacturer, Shape, fields};

/// PQTM - Quectel
///
/// ```text
/// $PQTMVERNO,LC29HAANR01A04S,2022/11/04,16:39:48*34
/// $PQTMSAVEPAR,OK*72
/// ```
pub fn manufacturer() -> Manufacturer {
    Manufacturer::new(
        "QTM",
        Shape::new("QTM", "Quectel message", fields![("Sentence type", "sentence_type")]),
    )
    .dispatch(Dispatch::Token(0))
    .subtype(
        "VERNO",
        Shape::new(
            "VERNO",
            "PQTMVERNO Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Version", "version"),
                ("Build date", "build_date"),
                ("Build time", "build_time"),
            ],
        ),
    )
    .subtype(
        "SAVEPAR",
        Shape::new(
            "SAVEPAR",
            "PQTM SAVEPAR Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Status", "status"),
            ],
        ),
    )
    .subtype(
        "RESTOREPAR",
        Shape::new(
            "RESTOREPAR",
            "PQTM RESTOREPAR Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Status", "status"),
            ],
        ),
    )
    .subtype(
        "EPE",
        Shape::new(
            "EPE",
            "PQTMEPE Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Msg ver", "msg_ver"),
                ("Epe north", "epe_north"),
                ("Epe east", "epe_east"),
                ("Epe down", "epe_down"),
                ("Epe 2d", "epe_2d"),
                ("Epe 3d", "epe_3d"),
            ],
        ),
    )
    .subtype(
        "CFGGEOFENCE",
        Shape::new(
            "CFGGEOFENCE",
            "PQTMCFGGEOFENCE Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Status", "status"),
                ("Index", "index"),
                ("Enabled", "enabled"),
                ("Reserved", "reserved"),
                ("Shape", "shape"),
                ("Lat0", "lat0"),
                ("Lon0", "lon0"),
                ("Lat1_or_Radius", "lat1_or_radius"),
                ("Lon1", "lon1"),
                ("Lat2", "lat2"),
                ("Lon2", "lon2"),
                ("Lat3", "lat3"),
                ("Lon3", "lon3"),
            ],
        ),
    )
    .subtype(
        "GEOFENCESTATUS",
        Shape::new(
            "GEOFENCESTATUS",
            "PQTMGEOFENCESTATUS Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("MsgVer", "msg_ver"),
                ("Time", "time"),
                ("State0", "state0"),
                ("State1", "state1"),
                ("State2", "state2"),
                ("State3", "state3"),
            ],
        ),
    )
    .subtype(
        "JAMMINGSTATUS",
        Shape::new(
            "JAMMINGSTATUS",
            "PQTMJAMMINGSTATUS Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("MsgVer", "msg_ver"),
                ("Status", "status"),
            ],
        ),
    )
    .subtype(
        "UNIQID",
        Shape::new(
            "UNIQID",
            "PQTMUNIQID Command Response",
            fields![
                ("Sentence type", "sentence_type"),
                ("Response", "response"),
                ("Length", "length"),
                ("ID", "chip_id"),
            ],
        ),
    )
    .subtype(
        "ANTENNASTATUS",
        Shape::new(
            "ANTENNASTATUS",
            "PQTMTANTENNASTATUS Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("MsgVer", "msg_ver"),
                ("AntStatus", "ant_status"),
                ("AntPowerInd", "ant_power_ind"),
                ("ModeInd", "mode_ind"),
            ],
        ),
    )
    .subtype(
        "CFGSVIN",
        Shape::new(
            "CFGSVIN",
            "PQTMCFGSVIN Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Status", "status"),
                ("Mode", "mode"),
                ("Min dur", "min_dur"),
                ("Acc limit", "acc_limit"),
                ("Ecef x", "ecef_x"),
                ("Ecef y", "ecef_y"),
                ("Ecef z", "ecef_z"),
            ],
        ),
    )
    .subtype(
        "SVINSTATUS",
        Shape::new(
            "SVINSTATUS",
            "PQTMSVINSTATUS Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Msg ver", "msg_ver"),
                ("Tow", "tow"),
                ("Valid", "valid"),
                ("Res0", "res0"),
                ("Res1", "res1"),
                ("Obs", "obs"),
                ("Cfg dur", "cfg_dur"),
                ("Mean x", "mean_x"),
                ("Mean y", "mean_y"),
                ("Mean z", "mean_z"),
                ("Mean acc", "mean_acc"),
            ],
        ),
    )
    .subtype(
        "GNSSSTART",
        Shape::new(
            "GNSSSTART",
            "PQTMGNSSSTART Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Status", "status"),
            ],
        ),
    )
    .subtype(
        "GNSSSTOP",
        Shape::new(
            "GNSSSTOP",
            "PQTMGNSSSTOP Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Status", "status"),
            ],
        ),
    )
    .subtype(
        "PVT",
        Shape::new(
            "PVT",
            "PQTMPVT Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Msg ver", "msg_ver"),
                ("Tow", "tow"),
                ("Date", "date"),
                ("Time", "time"),
                ("Res", "res"),
                ("Fix mode", "fix_mode"),
                ("Num sat used", "num_sat_used"),
                ("Leap seconds", "leap_seconds"),
                ("latitude", "lat"),
                ("longitude", "lon"),
                ("altitude", "alt"),
                ("geoid_sep", "sep"),
                ("Vel n", "vel_n"),
                ("Vel e", "vel_e"),
                ("Vel d", "vel_d"),
                ("speed", "spd"),
                ("Heading", "heading"),
                ("Hdop", "hdop"),
                ("Pdop", "pdop"),
            ],
        ),
    )
    .subtype(
        "CFGNMEADP",
        Shape::new(
            "CFGNMEADP",
            "PQTMCFGNMEADP Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Status", "status"),
                ("UTC_DP", "utc_dp"),
                ("POS_DP", "pos_dp"),
                ("ALT_DP", "alt_dp"),
                ("DOP_DP", "dop_dp"),
                ("SPD_DP", "spd_dp"),
                ("COG_DP", "cog_dp"),
            ],
        ),
    )
    .subtype(
        "CFGRCVRMODE",
        Shape::new(
            "CFGRCVRMODE",
            "PQTMCFGRCVRMODE Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Status", "status"),
                ("Mode", "mode"),
            ],
        ),
    )
    .subtype(
        "PL",
        Shape::new(
            "PL",
            "PQTMPL Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Msg ver", "msg_ver"),
                ("Tow", "tow"),
                ("Pul", "pul"),
                ("Res1", "res1"),
                ("Res2", "res2"),
                ("Pl posn", "pl_posn"),
                ("Pl pose", "pl_pose"),
                ("Pl posd", "pl_posd"),
                ("Pl veln", "pl_veln"),
                ("Pl vele", "pl_vele"),
                ("Pl veld", "pl_veld"),
                ("Res3", "res3"),
                ("Res4", "res4"),
                ("Pl time", "pl_time"),
            ],
        ),
    )
    .subtype(
        "CFGSBAS",
        Shape::new(
            "CFGSBAS",
            "PQTMCFGSBAS Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Status", "status"),
                ("Value", "value"),
            ],
        ),
    )
    .subtype(
        "CFGCNST",
        Shape::new(
            "CFGCNST",
            "PQTMCFGCNST Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Status", "status"),
                ("Gps", "gps"),
                ("Glonass", "glonass"),
                ("Galileo", "galileo"),
                ("Bds", "bds"),
                ("Qzss", "qzss"),
                ("Reserved", "reserved"),
            ],
        ),
    )
    .subtype(
        "DOP",
        Shape::new(
            "DOP",
            "PQTMDOP Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Msg ver", "msg_ver"),
                ("Tow", "tow"),
                ("Gdop", "gdop"),
                ("Pdop", "pdop"),
                ("Tdop", "tdop"),
                ("Vdop", "vdop"),
                ("Hdop", "hdop"),
                ("Ndop", "ndop"),
                ("Edop", "edop"),
            ],
        ),
    )
    .subtype(
        "CFGFIXRATE",
        Shape::new(
            "CFGFIXRATE",
            "PQTMCFGFIXRATE Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Status", "status"),
            ],
        ),
    )
    .subtype(
        "VEL",
        Shape::new(
            "VEL",
            "PQTMVEL Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Msg ver", "msg_ver"),
                ("Time", "time"),
                ("Vel n", "vel_n"),
                ("Vel e", "vel_e"),
                ("Vel d", "vel_d"),
                ("Grd spd", "grd_spd"),
                ("Spd", "spd"),
                ("Heading", "heading"),
                ("Grd spd acc", "grd_spd_acc"),
                ("Spd acc", "spd_acc"),
                ("Heading acc", "heading_acc"),
            ],
        ),
    )
    .subtype(
        "CFGODO",
        Shape::new(
            "CFGODO",
            "PQTMCFGODO Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Status", "status"),
                ("State", "state"),
                ("Init dist", "init_dist"),
            ],
        ),
    )
    .subtype(
        "ODO",
        Shape::new(
            "ODO",
            "PQTMODO Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("Msg ver", "msg_ver"),
                ("Time", "time"),
                ("State", "state"),
                ("Dist", "dist"),
            ],
        ),
    )
    .subtype(
        "LS",
        Shape::new(
            "LS",
            "PQTMLS Message",
            fields![
                ("Sentence type", "sentence_type"),
                ("MsgVer", "msg_ver"),
                ("TOW", "tow"),
                ("LS_Ref", "ls_ref"),
                ("WN", "wn"),
                ("LS", "ls"),
                ("Flag", "flag"),
                ("LSF_Ref", "lsf_ref"),
                ("Reserved", "reserved"),
                ("WNLSF", "wnlsf"),
                ("DN", "dn"),
                ("LSF", "lsf"),
            ],
        ),
    )
}
