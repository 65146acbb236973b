//! Seeded catalogue data: the known outline ids per registry, then the
//! renderable subset with families, parameters and aliases.

use super::{OutlineDb, ParamMap, ParamValue};
use crate::draw::{
    AxialRoundBody, LedThtRound, Melf, Smd2Pad, Smd3Lead, To92Moulded, To204Diamond, To205Can,
    To206Can, To218Tab, To220Tab, To225Tab, To243Tab, To247Tab, To264Body,
};

pub(super) fn populate(db: &mut OutlineDb) {
    seed_full_outline_registry(db);
    seed_current_renderables(db);
}

/// Register every known outline id as a bare record.
///
/// Renderable outlines are overwritten afterwards with family and params.
fn seed_full_outline_registry(db: &mut OutlineDb) {
    const DO_GROUPS: &[(&str, &[&str])] = &[
        ("Button Rectifier", &["DO-217"]),
        ("Disc Type", &["DO-200"]),
        ("Flanged Mount Family", &["DO-211"]),
        ("Leadless Family", &["DO-213"]),
        ("Lead Mounted Family", &["DO-204"]),
        (
            "Plastic Surface-Mount Family",
            &[
                "DO-214", "DO-215", "DO-216", "DO-218", "DO-219", "DO-220", "DO-221", "DO-222",
            ],
        ),
        (
            "Round Body Axial Lead",
            &[
                "DO-201-AA",
                "DO-202-AA",
                "DO-204-AA",
                "DO-204-AC",
                "DO-204-AF",
                "DO-204-AG",
                "DO-204-AH",
                "DO-204-AL",
            ],
        ),
        ("Round Body Axial Type", &["DO-201"]),
        ("Single-End Press-Fit", &["DO-208", "DO-209"]),
        ("Stud-Hex Base", &["DO-203", "DO-205"]),
        ("Terminal Stud Axial Lead", &["DO-203-AB"]),
    ];

    for &(group, ids) in DO_GROUPS {
        for &id in ids {
            db.add_outline(id, "DO", group);
        }
    }

    const TO_GROUPS: &[(&str, &[&str])] = &[
        (
            "Axial Leads",
            &[
                "TO-9",
                "TO-42",
                "TO-72",
                "TO-73",
                "TO-74",
                "TO-75",
                "TO-76",
                "TO-77",
                "TO-78",
                "TO-79",
                "TO-80",
                "TO-96",
                "TO-97",
                "TO-99",
                "TO-100",
                "TO-101",
                "TO-205-AA",
                "TO-205-AB",
                "TO-206-AA",
                "TO-205-AC",
                "TO-205-AD",
                "TO-206-AB",
                "TO-233-AA",
            ],
        ),
        ("Ceramic No Lead", &["TO-276"]),
        ("Coaxial Type", &["TO-215"]),
        ("Disc Type Family", &["TO-200"]),
        (
            "Diamond Base",
            &["TO-37", "TO-66", "TO-204-AA", "TO-204-AB", "TO-213-AB", "TO-213-AC"],
        ),
        (
            "Double-Ended Flatpack",
            &["TO-87", "TO-88", "TO-89", "TO-90", "TO-91", "TO-95"],
        ),
        ("Dual-in-Package", &["TO-250"]),
        (
            "Flange-Mounted Header Family",
            &[
                "TO-204", "TO-213", "TO-218", "TO-219", "TO-220", "TO-238", "TO-257", "TO-258",
                "TO-259", "TO-262", "TO-264", "TO-267", "TO-280", "TO-281",
            ],
        ),
        ("Flange-Mounted Package", &["TO-273"]),
        ("Flange-Mounted Peripheral Terminal", &["TO-247", "TO-254"]),
        ("Flange-Mounted Rectangular Base", &["TO-244"]),
        ("Flat Index Axial Leaded", &["TO-92"]),
        ("Flat Leads", &["TO-225-AA", "TO-232-AA"]),
        ("Flat Mounted Transistor", &["TO-256", "TO-282"]),
        ("Flexible Terminals", &["TO-209"]),
        (
            "Header Family",
            &[
                "TO-205", "TO-206", "TO-236", "TO-237", "TO-243", "TO-251", "TO-252", "TO-260",
                "TO-263", "TO-268", "TO-279",
            ],
        ),
        ("Multiple-Ended Flatpack", &["TO-84", "TO-85", "TO-86"]),
        ("Opto Family Insertion Mount", &["TO-266"]),
        ("Plastic Clip Mounted Package", &["TO-274"]),
        ("Power Package", &["TO-265", "TO-270", "TO-272", "TO-275"]),
        ("Quad Flack Pack Surface Mount", &["TO-271"]),
        ("Small Outline", &["TO-269"]),
        ("Small Outline Transistor (SOT)", &["TO-253", "TO-261"]),
        ("Solid Terminals", &["TO-208"]),
        ("Stud-Mount Flex Lead", &["TO-94"]),
        ("Stud-Mounted Stripline", &["TO-216"]),
        ("Tab-Mounted Peripheral Leads", &["TO-202"]),
        ("Terminal Strip Power Module", &["TO-240"]),
    ];

    for &(group, ids) in TO_GROUPS {
        for &id in ids {
            db.add_outline(id, "TO", group);
        }
    }

    const GEN_GROUPS: &[(&str, &[&str])] = &[
        ("Axial Diode", &["R-6"]),
        ("Axial Diode", &["T-18"]),
    ];

    for &(group, ids) in GEN_GROUPS {
        for &id in ids {
            db.add_outline(id, "GEN", group);
        }
    }
}

/// Overlay the renderable outlines: family, mechanical params, aliases.
fn seed_current_renderables(db: &mut OutlineDb) {
    db.add_renderable(
        "DO-201-AA",
        "DO",
        "Round Body Axial Lead",
        AxialRoundBody,
        params([("len", n(8.35)), ("dia", n(5.3)), ("material", s("epoxy"))]),
        &["DO-27"],
    );
    db.add_renderable(
        "DO-204-AH",
        "DO",
        "Round Body Axial Lead",
        AxialRoundBody,
        params([("len", n(3.9)), ("dia", n(1.7)), ("material", s("glass"))]),
        &["DO-35"],
    );
    db.add_renderable(
        "DO-204-AL",
        "DO",
        "Round Body Axial Lead",
        AxialRoundBody,
        params([("len", n(4.7)), ("dia", n(2.7)), ("material", s("epoxy"))]),
        &["DO-41"],
    );
    db.add_renderable(
        "DO-204-AC",
        "DO",
        "Round Body Axial Lead",
        AxialRoundBody,
        params([("len", n(7.0)), ("dia", n(3.6)), ("material", s("epoxy"))]),
        &["DO-15"],
    );
    db.add_renderable(
        "DO-204-AF",
        "DO",
        "Round Body Axial Lead",
        AxialRoundBody,
        params([("len", n(9.5)), ("dia", n(5.3)), ("material", s("epoxy"))]),
        &["DO-29"],
    );
    db.add_renderable(
        "DO-201-AD",
        "DO",
        "Round Body Axial Type",
        AxialRoundBody,
        params([("len", n(9.0)), ("dia", n(5.1)), ("material", s("epoxy"))]),
        &["DO-201"],
    );

    db.add_renderable(
        "TO-92",
        "TO",
        "Flat Index Axial Leaded",
        To92Moulded,
        params([
            ("pin_count", n(3.0)),
            ("body_w", n(4.8)),
            ("body_h", n(4.8)),
            ("lead_len", n(11.0)),
            ("lead_pitch", n(1.27)),
        ]),
        &["TO92"],
    );

    db.add_renderable(
        "TO-204-AA",
        "TO",
        "Diamond Base",
        To204Diamond,
        params([
            ("pin_count", n(2.0)),
            ("pin_arc_start_deg", n(65.0)),
            ("pin_arc_stop_deg", n(-65.0)),
            ("pin_diameter_mm", n(1.0)),
            ("is_body_pin", b(true)),
        ]),
        &["TO-3", "TO3"],
    );

    db.add_renderable(
        "TO-205-AD",
        "TO",
        "Axial Leads",
        To205Can,
        params([
            ("pin_count", n(3.0)),
            ("pin_diameter_mm", n(1.0)),
            ("pin_connected_to_body", n(3.0)),
        ]),
        &["TO-205", "TO205", "TO-39", "TO39"],
    );

    db.add_renderable(
        "TO-206-AA",
        "TO",
        "Axial Leads",
        To206Can,
        params([
            ("pin_count", n(3.0)),
            ("pin_diameter_mm", n(1.0)),
            ("pin_connected_to_body", n(3.0)),
        ]),
        &["TO-206", "TO206", "TO-18", "TO18"],
    );

    db.add_renderable(
        "TO-218-AA",
        "TO",
        "Flat Leads",
        To218Tab,
        params([("pin_count", n(3.0)), ("tab_is_pin", b(true))]),
        &["TO-218"],
    );
    db.add_variant(
        "TO-218-5",
        "TO-218-AA",
        params([("pin_count", n(5.0)), ("tab_is_pin", b(true))]),
        &[],
    );

    db.add_renderable(
        "TO-225-AA",
        "TO",
        "Flat Leads",
        To225Tab,
        params([("pin_count", n(3.0)), ("tab_is_pin", b(true))]),
        &["TO-126", "TO126"],
    );

    db.add_renderable(
        "TO-220-AB",
        "TO",
        "Flange-Mounted Header Family",
        To220Tab,
        params([
            ("pin_count", n(3.0)),
            ("tab_is_pin", b(true)),
            ("tab_finish", s("metallic")),
        ]),
        &["TO-220", "TO220"],
    );
    db.add_variant(
        "TO-220-AA",
        "TO-220-AB",
        params([
            ("pin_count", n(3.0)),
            ("tab_is_pin", b(false)),
            ("tab_finish", s("metallic")),
        ]),
        &[],
    );
    db.add_variant(
        "TO-220-AC",
        "TO-220-AB",
        params([
            ("pin_count", n(2.0)),
            ("tab_is_pin", b(true)),
            ("tab_finish", s("metallic")),
        ]),
        &[],
    );
    db.add_variant(
        "TO-220-AB-5L",
        "TO-220-AB",
        params([("pin_count", n(5.0))]),
        &["TO-220-5", "TO220-5", "TO-220-5L"],
    );
    db.add_variant(
        "TO-220-AB-6L",
        "TO-220-AB",
        params([("pin_count", n(6.0))]),
        &["TO-220-6", "TO220-6", "TO-220-6L"],
    );
    db.add_variant(
        "TO-220-AB-7L",
        "TO-220-AB",
        params([("pin_count", n(7.0))]),
        &["TO-220-7", "TO220-7", "TO-220-7L"],
    );
    db.add_variant(
        "TO-220-F",
        "TO-220-AB",
        params([
            ("pin_count", n(3.0)),
            ("tab_is_pin", b(true)),
            ("tab_finish", s("insulated")),
        ]),
        &["TO220F", "TO-220F"],
    );

    db.add_renderable(
        "TO-243-AA",
        "TO",
        "Header Family",
        To243Tab,
        params([("body_w", n(4.5)), ("body_h", n(2.76))]),
        &["TO243", "SOT-89", "SOT89"],
    );
    db.add_variant(
        "TO-243-AB",
        "TO-243-AA",
        params([("pin_count", n(3.0))]),
        &["TO243AB", "SOT-89-2", "SOT89-2"],
    );
    db.add_variant(
        "TO-243-6",
        "TO-243-AA",
        params([("pin_count", n(6.0))]),
        &["TO243-6", "SOT-89-6", "SOT89-6"],
    );

    db.add_renderable(
        "TO-247",
        "TO",
        "Flange-Mounted Peripheral Terminal",
        To247Tab,
        params([
            ("pin_count", n(3.0)),
            ("body_w", n(20.0)),
            ("body_h", n(15.6)),
            ("lead_len", n(20.0)),
        ]),
        &["TO247"],
    );
    db.add_variant("TO-247-4", "TO-247", params([("pin_count", n(4.0))]), &[]);

    db.add_renderable(
        "TO-264",
        "TO",
        "Flange-Mounted Header Family",
        To264Body,
        params([
            ("body_mm", n(20.0)),
            ("height_mm", n(26.0)),
            ("lead_mm", n(20.0)),
            ("hole_d_mm", n(3.81)),
            ("scallop_d_mm", n(6.35)),
            ("scallop_y_mm", n(6.0)),
            ("pin_count", n(3.0)),
            ("pin_pitch_mm", n(5.75)),
        ]),
        &["TO264", "TO-264AA", "TO-3P"],
    );
    db.add_variant(
        "TO-264-2",
        "TO-264",
        params([("pin_count", n(2.0))]),
        &["TO264-2", "TO-264-2L"],
    );
    db.add_variant(
        "TO-264-5",
        "TO-264",
        params([("pin_count", n(5.0)), ("pin_pitch_mm", n(3.81))]),
        &["TO264-5", "TO-264-5L"],
    );

    db.add_renderable(
        "DO-213-AB",
        "DO",
        "Leadless Family",
        Melf,
        params([
            ("body_length", n(5.0)),
            ("body_diameter", n(2.4)),
            ("pad_width", n(0.55)),
            ("material", s("glass")),
        ]),
        &["MELF", "MMB", "SOD-106"],
    );

    db.add_renderable(
        "DO-214-AC",
        "DO",
        "Plastic Surface-Mount Family",
        Smd2Pad,
        params([
            ("body_w", n(4.3)),
            ("body_h", n(2.6)),
            ("pad_w", n(1.2)),
            ("pad_h", n(1.45)),
        ]),
        &["SMA"],
    );
    db.add_renderable(
        "DO-214-AA",
        "DO",
        "Plastic Surface-Mount Family",
        Smd2Pad,
        params([
            ("body_w", n(4.32)),
            ("body_h", n(3.62)),
            ("pad_w", n(1.2)),
            ("pad_h", n(2.1)),
        ]),
        &["SMB"],
    );
    db.add_renderable(
        "DO-214-AB",
        "DO",
        "Plastic Surface-Mount Family",
        Smd2Pad,
        params([
            ("body_w", n(6.86)),
            ("body_h", n(5.9)),
            ("pad_w", n(1.2)),
            ("pad_h", n(2.97)),
        ]),
        &["SMC"],
    );

    db.add_renderable(
        "SOT-23",
        "TO",
        "Small Outline Transistor (SOT)",
        Smd3Lead,
        params([
            ("body_w", n(2.9)),
            ("body_h", n(1.3)),
            ("pad2_w", n(0.4)),
            ("pad2_h", n(0.6)),
            ("pad2_pitch", n(1.9)),
            ("pad1_w", n(0.4)),
            ("pad1_h", n(0.6)),
            ("pin_count", n(3.0)),
        ]),
        &["SOT23", "SOT-23-3", "SOT23-3", "TO-236", "TO-236AA", "SOT-23F"],
    );
    db.add_variant(
        "SOT-23-4",
        "SOT-23",
        params([("pin_count", n(4.0))]),
        &["SOT23-4", "SOT-23-4L", "SOT23-4L"],
    );
    db.add_variant(
        "SOT-23-5",
        "SOT-23",
        params([("pin_count", n(5.0))]),
        &["SOT23-5", "SOT-23-5L", "SOT23-5L"],
    );
    db.add_variant(
        "SOT-23-6",
        "SOT-23",
        params([("pin_count", n(6.0))]),
        &["SOT23-6", "SOT-23-6L", "SOT23-6L"],
    );
    db.add_variant(
        "SOT-23-8",
        "SOT-23",
        params([("pin_count", n(8.0))]),
        &["SOT23-8", "SOT-23-8L", "SOT23-8L"],
    );

    db.add_renderable(
        "SOT-323",
        "EIAJ",
        "Small Outline Transistor (SOT)",
        Smd3Lead,
        params([
            ("body_w", n(2.2)),
            ("body_h", n(1.35)),
            ("pad2_w", n(0.4)),
            ("pad2_h", n(0.425)),
            ("pad2_pitch", n(1.3)),
            ("pad1_w", n(0.4)),
            ("pad1_h", n(0.525)),
            ("pin_count", n(3.0)),
        ]),
        &["SOT323", "SOT-323-3", "SOT323-3", "SC-70"],
    );

    db.add_renderable(
        "R-6",
        "GEN",
        "Axial Diode",
        AxialRoundBody,
        params([("len", n(8.8)), ("dia", n(8.8)), ("material", s("epoxy"))]),
        &["R6"],
    );
    db.add_renderable(
        "T-18",
        "GEN",
        "Axial Diode",
        AxialRoundBody,
        params([("len", n(8.8)), ("dia", n(3.5)), ("material", s("epoxy"))]),
        &["T18"],
    );

    db.add_renderable(
        "5MM ROUND T/H",
        "IEC",
        "Leaded LED",
        LedThtRound,
        params([
            ("body_d", n(5.0)),
            ("body_h", n(8.6)),
            ("lead_len", n(17.0)),
            ("lead_pitch", n(2.54)),
            ("lead_w", n(0.6)),
        ]),
        &["LED5MM", "5MMLED"],
    );
}

fn params<const N: usize>(entries: [(&'static str, ParamValue); N]) -> ParamMap {
    entries.into_iter().collect()
}

fn n(v: f64) -> ParamValue {
    ParamValue::Num(v)
}

fn s(v: &str) -> ParamValue {
    ParamValue::Text(v.to_owned())
}

fn b(v: bool) -> ParamValue {
    ParamValue::Flag(v)
}
