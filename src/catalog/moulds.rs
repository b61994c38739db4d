//! Bundled mould catalog. Read-only; schedule requests reference entries by
//! `mould_id_no`.

use crate::models::Mould;

pub static MOULDS: &[Mould] = &[
    Mould {
        model: "YRA",
        mould_no: Some("301"),
        mould_id_no: "MS-03390-YRA-01-003-L-F",
        part_name: Some("Blower Case LH"),
    },
    Mould {
        model: "YRA",
        mould_no: Some("300"),
        mould_id_no: "MS-03290-YRA-01-006-R-F",
        part_name: Some("Blower Case RH"),
    },
    Mould {
        model: "YRA D",
        mould_no: Some("DNRP"),
        mould_id_no: "MS-02150-YRA-01-007-R-F",
        part_name: Some("P-Tank"),
    },
    Mould {
        model: "YP8",
        mould_no: Some("DNRP"),
        mould_id_no: "MS-00810-YP8-01-008-R-F",
        part_name: Some("P-Tank"),
    },
    Mould {
        model: "YL1",
        mould_no: Some("DNRP"),
        mould_id_no: "MS-01340-YL1-01-009-R-F",
        part_name: Some("Heater Case"),
    },
    Mould {
        model: "YRA",
        mould_no: Some("486"),
        mould_id_no: "MS-02700-YBA-01-012-R-F",
        part_name: Some("P-Tank"),
    },
    Mould {
        model: "YC5",
        mould_no: Some("DNRP"),
        mould_id_no: "MS-09781-YC5-01-014-R-F",
        part_name: Some("Heater Case"),
    },
    Mould {
        model: "YRA C",
        mould_no: Some("DNRP"),
        mould_id_no: "MS-02161-YRA-02-015-R-F",
        part_name: Some("P-Tank 2nd set"),
    },
    Mould {
        model: "YHB",
        mould_no: Some("502"),
        mould_id_no: "MS-07990-YHB-01-016-R-S",
        part_name: Some("COOLING CASE UPPER"),
    },
    Mould {
        model: "YHB",
        mould_no: Some("501"),
        mould_id_no: "MS-07980-YHB-01-017-R-S",
        part_name: Some("COOLING CASE LOWER"),
    },
    Mould {
        model: "YHB",
        mould_no: Some("520"),
        mould_id_no: "MS-06732-YHB-01-019-R-F",
        part_name: Some("Blower Case"),
    },
    Mould {
        model: "YL7 G",
        mould_no: Some("239"),
        mould_id_no: "MS-00320-YL7-01-022-R-F",
        part_name: Some("P-TANK-G"),
    },
    Mould {
        model: "YL1",
        mould_no: Some("DNRP"),
        mould_id_no: "MS-00781-YL1-01-023-R-F",
        part_name: Some("P-TANK"),
    },
    Mould {
        model: "YL7 B",
        mould_no: Some("DNRP"),
        mould_id_no: "MS-001130-YL7-01-024-R-F",
        part_name: Some("P-TANK"),
    },
    Mould {
        model: "YP8",
        mould_no: Some("187"),
        mould_id_no: "MS-06530-YP8-01-025-R-F",
        part_name: Some("HEATER CASE"),
    },
    Mould {
        model: "YBA Minor",
        mould_no: Some("635"),
        mould_id_no: "MS-05600-YBA-01-027-R-F",
        part_name: Some("P-Tank"),
    },
    Mould {
        model: "YAD",
        mould_no: Some("301"),
        mould_id_no: "MS-08290-YAD-01-028-R-S",
        part_name: Some("Clamp"),
    },
    Mould {
        model: "YE-3",
        mould_no: Some("STEC"),
        mould_id_no: "MS-08560-YE3-01-029-R-F",
        part_name: Some("Bracket"),
    },
    Mould {
        model: "YP8/YHA",
        mould_no: Some("411"),
        mould_id_no: "MS-07530-YP8-01-031-R-F",
        part_name: Some("HEATER CASE"),
    },
    Mould {
        model: "YRA",
        mould_no: Some("407"),
        mould_id_no: "MS-04510-YRA-01-032-R-F",
        part_name: Some("HEATER CASE"),
    },
    Mould {
        model: "YWD",
        mould_no: Some("763"),
        mould_id_no: "MS-09180-YWD-01-37-R-S",
        part_name: Some("HEATER CASE RH"),
    },
    Mould {
        model: "YWD",
        mould_no: Some("764"),
        mould_id_no: "MS-05500-YWD-01-38-R-F",
        part_name: Some("BLOWER CASE RH"),
    },
    Mould {
        model: "YG8",
        mould_no: Some("706"),
        mould_id_no: "MS-06780-YG8-01-40-L-F",
        part_name: Some("Blower Case LH"),
    },
    Mould {
        model: "YG8",
        mould_no: Some("783"),
        mould_id_no: "MS-06760-YG8-01-39-R-F",
        part_name: Some("Heater Case RH"),
    },
    Mould {
        model: "YG8",
        mould_no: Some("724"),
        mould_id_no: "MS-01810-YG8-01-41-L-F",
        part_name: Some("HEATER CASE LH"),
    },
    Mould {
        model: "YOM",
        mould_no: Some("707"),
        mould_id_no: "MS-01070-YOM-01-042-R-S",
        part_name: Some("Cooling Case RH"),
    },
    Mould {
        model: "YOM",
        mould_no: Some("708"),
        mould_id_no: "MS-01080-YOM-01-043-R-S",
        part_name: Some("Case Dust Air"),
    },
    Mould {
        model: "YOM",
        mould_no: Some("710"),
        mould_id_no: "MS-06240-YOM-01-044-R-S",
        part_name: Some("Case Dust Air"),
    },
    Mould {
        model: "YFGTHS",
        mould_no: Some("777"),
        mould_id_no: "MS-07450-YFGTHS-01-045-R-F",
        part_name: Some("Plate Non AC"),
    },
    Mould {
        model: "YFGNM",
        mould_no: Some("779"),
        mould_id_no: "MS-07710-YFGNM-01-046-R-F",
        part_name: Some("P Tank"),
    },
    Mould {
        model: "Ace Edge",
        mould_no: Some("570"),
        mould_id_no: "TA-0260-AceEdge-01-48-R-S",
        part_name: Some("P Tank"),
    },
    Mould {
        model: "Ace Edge",
        mould_no: Some("572"),
        mould_id_no: "TA-05960-AceEdge-01-49-R-S",
        part_name: Some("EVV Cover"),
    },
    Mould {
        model: "Ace Edge",
        mould_no: None,
        mould_id_no: "TA-0860-AceEdge-01-50-R-S",
        part_name: Some("Mounting Bracket"),
    },
    Mould {
        model: "C110",
        mould_no: Some("674"),
        mould_id_no: "TA-03340-C110-01-52-R-S",
        part_name: Some("Foot Duct"),
    },
    Mould {
        model: "C110",
        mould_no: Some("675"),
        mould_id_no: "TA-06460-C110-01-53-R-S",
        part_name: Some("Mounting Bracket"),
    },
    Mould {
        model: "YG8",
        mould_no: Some("763"),
        mould_id_no: "MS-01230-YG8-01-55-R-S",
        part_name: Some("EVV Cover"),
    },
    Mould {
        model: "YSDM",
        mould_no: Some("670"),
        mould_id_no: "MS-02900-YSDM-01-56-R-F",
        part_name: Some("Return duct"),
    },
    Mould {
        model: "YG8",
        mould_no: Some("772"),
        mould_id_no: "MS-07360-YG8-01-57-R-S",
        part_name: Some("Flange Case"),
    },
    Mould {
        model: "YWD",
        mould_no: Some("709"),
        mould_id_no: "MS-09070-YWD-01-58-L-S",
        part_name: Some("Door Lever"),
    },
    Mould {
        model: "YE-3",
        mould_no: Some("397"),
        mould_id_no: "MS-01390-YE3-01-59-L-F",
        part_name: Some("Heater Case LH"),
    },
    Mould {
        model: "YWD",
        mould_no: Some("711"),
        mould_id_no: "MS-03720-YWD-01-60-L-F",
        part_name: Some("BLOWER CASE"),
    },
    Mould {
        model: "YWD",
        mould_no: Some("781"),
        mould_id_no: "MS-03784-YWD-01-61-R-S",
        part_name: Some("BLOWER CASE LH"),
    },
    Mould {
        model: "YRA C",
        mould_no: Some("830"),
        mould_id_no: "MS-02161-YRA-03-63-R-F",
        part_name: Some("Drum"),
    },
    Mould {
        model: "YED",
        mould_no: Some("960"),
        mould_id_no: "MS-06732-YED-01-65-R-F",
        part_name: Some("P-tank 3rd set"),
    },
    Mould {
        model: "YHB",
        mould_no: Some("973"),
        mould_id_no: "MS-07990-YHB-01-067-R-S",
        part_name: Some("Blower case"),
    },
    Mould {
        model: "YED",
        mould_no: Some("Japa"),
        mould_id_no: "MS-03022-YED-01-64-R-F",
        part_name: Some("COOLING CASE UPPER"),
    },
    Mould {
        model: "YXA",
        mould_no: Some("MOL-714"),
        mould_id_no: "MS-08530-YXA-01-034-R-F",
        part_name: Some("Sliding door"),
    },
    Mould {
        model: "YJC",
        mould_no: Some("MOL-400"),
        mould_id_no: "MS-05420-YJC-01-004-R-F",
        part_name: Some("P Tank"),
    },
    Mould {
        model: "YOM",
        mould_no: Some("MOL-704"),
        mould_id_no: "MS-06600-YOM-01-036-R-S",
        part_name: Some("Blower case"),
    },
    Mould {
        model: "YG8",
        mould_no: Some("MOL-706"),
        mould_id_no: "MS-01770-YG8-01-47-R-F",
        part_name: Some("Heater Case"),
    },
    Mould {
        model: "YL8",
        mould_no: Some("MOL--"),
        mould_id_no: "MS-01510-YL8-01-68-R-S",
        part_name: Some("Cooling Case RH"),
    },
    Mould {
        model: "YL8",
        mould_no: Some("MOL-153"),
        mould_id_no: "MS-01520-YL8-01-69-R-S",
        part_name: Some("Cooling case"),
    },
    Mould {
        model: "YL1/YRA",
        mould_no: Some("MOL--"),
        mould_id_no: "MS-01981-YL1-01-70-R-F",
        part_name: Some("Cooling case"),
    },
    Mould {
        model: "YOM",
        mould_no: Some("MOL-703"),
        mould_id_no: "MS-03710-YOM-01-035-R-F",
        part_name: Some("Blower Case"),
    },
    Mould {
        model: "Y17",
        mould_no: Some("MOL-971"),
        mould_id_no: "MS-09410-Y17-01-71-R-F",
        part_name: Some("Blower case"),
    },
    Mould {
        model: "Y17",
        mould_no: Some("MOL-964"),
        mould_id_no: "MS-07720-Y17-01-72-R-F",
        part_name: Some("Blower Case"),
    },
    Mould {
        model: "YHB",
        mould_no: Some("MOL-721"),
        mould_id_no: "MS-00960-YHB-01-018-R-F",
        part_name: Some("Blower Case LH"),
    },
    Mould {
        model: "YCA",
        mould_no: Some("MOL-586"),
        mould_id_no: "MS-09910-YCA-01-021-R-F",
        part_name: Some("Heater Case"),
    },
];
