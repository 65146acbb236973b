//! End-to-end package resolution against the shared catalogue.

use pkgdraw::{format_package_for_text, resolve, Family, OutlineDb, ParamValue};

// ==================== catalogue health tests ====================

#[test]
fn catalogue_builds_clean() {
    let db = OutlineDb::build();
    assert!(db.consistency_issues().is_empty());
    assert!(db.outline_count() > 50);
}

#[test]
fn every_renderable_family_id_round_trips() {
    for outline in OutlineDb::shared().outlines() {
        if let Some(family) = outline.family {
            assert_eq!(
                Family::from_id(family.id()),
                Some(family),
                "{} has a family id that does not round-trip",
                outline.id
            );
        }
    }
}

#[test]
fn every_alias_lands_on_its_canonical_outline() {
    let db = OutlineDb::shared();
    for (key, canonical_id) in db.aliases() {
        let p = resolve(key).unwrap_or_else(|| panic!("alias {key:?} should resolve"));
        assert_eq!(p.canonical_id, canonical_id, "alias {key:?}");
        assert_eq!(p.print_id, canonical_id, "alias {key:?}");
        if let Some(direct) = resolve(canonical_id) {
            assert_eq!(p.print_id, direct.print_id, "alias {key:?}");
        }
    }
}

#[test]
fn every_variant_overrides_and_inherits_base_parameters() {
    let db = OutlineDb::shared();
    for (key, variant) in db.variants() {
        let p = resolve(key).unwrap_or_else(|| panic!("variant {key:?} should resolve"));
        assert_eq!(p.canonical_id, variant.base_id, "variant {key:?}");
        assert_eq!(p.print_id, variant.print_id, "variant {key:?}");

        let base = db.outline(variant.base_id).expect("base outline exists");
        for (param, value) in &variant.overrides {
            assert_eq!(p.params.get(param), Some(value), "override {param} on {key:?}");
        }
        for (param, value) in &base.params {
            if !variant.overrides.contains_key(param) {
                assert_eq!(p.params.get(param), Some(value), "inherited {param} on {key:?}");
            }
        }
    }
}

#[test]
fn resolution_is_pure() {
    for raw in ["DO-35", "TO-220-5", "MELF@blue@x1", "TO-66", "UNKNOWNPKG123"] {
        assert_eq!(resolve(raw), resolve(raw), "for input {raw:?}");
    }
}

// ==================== canonical lookup tests ====================

#[test]
fn do35_resolves_to_glass_axial() {
    let p = resolve("DO-35").expect("DO-35 is a known alias");
    assert_eq!(p.canonical_id, "DO-204-AH");
    assert_eq!(p.print_id, "DO-204-AH");
    assert_eq!(p.family.map(Family::id), Some("axial_round_body"));
    assert_eq!(p.num("len"), Some(3.9));
    assert_eq!(p.num("dia"), Some(1.7));
    assert_eq!(p.text("material"), Some("glass"));
}

#[test]
fn to220_5_resolves_to_the_five_lead_variant() {
    let p = resolve("TO-220-5").expect("TO-220-5 is a known variant alias");
    assert_eq!(p.canonical_id, "TO-220-AB");
    assert_eq!(p.print_id, "TO-220-AB-5L");
    assert_eq!(p.int_or("pin_count", 0), 5);
    assert_eq!(p.family.map(Family::id), Some("to220_tab"));
}

#[test]
fn sot23_5_keeps_its_own_print_id() {
    let p = resolve("SOT-23-5").expect("SOT-23-5 is a known variant");
    assert_eq!(p.canonical_id, "SOT-23");
    assert_eq!(p.print_id, "SOT-23-5");
    assert_eq!(p.int_or("pin_count", 0), 5);
    assert_eq!(p.family.map(Family::id), Some("smd_3lead"));
}

#[test]
fn melf_alias_resolves_to_the_melf_family() {
    let p = resolve("MELF").expect("MELF is a known alias");
    assert_eq!(p.canonical_id, "DO-213-AB");
    assert_eq!(p.family.map(Family::id), Some("melf"));
    assert_eq!(p.num("body_length"), Some(5.0));
}

#[test]
fn unknown_keys_resolve_to_none() {
    assert!(resolve("UNKNOWNPKG123").is_none());
    assert!(resolve("").is_none());
    assert!(resolve("@glass").is_none());
}

// ==================== normalisation tests ====================

#[test]
fn keys_are_case_and_spacing_insensitive() {
    for raw in ["TO-220", "to-220", " TO-220 ", "TO220", "to 220"] {
        let p = resolve(raw).unwrap_or_else(|| panic!("{raw:?} should resolve"));
        assert_eq!(p.canonical_id, "TO-220-AB", "for input {raw:?}");
    }
}

#[test]
fn raw_key_is_preserved_verbatim() {
    let p = resolve(" to-220 ").expect("spacing variant resolves");
    assert_eq!(p.raw_key, " to-220 ");
}

// ==================== qualifier tests ====================

#[test]
fn material_qualifier_overrides_the_param() {
    let p = resolve("DO-204-AL@glass").expect("known outline with qualifier");
    assert_eq!(p.text("material"), Some("glass"));
    assert_eq!(p.qualifiers, ["glass"]);
}

#[test]
fn finish_qualifier_marks_the_tab_insulated() {
    let p = resolve("TO-220@fullpack").expect("known outline with qualifier");
    assert_eq!(p.text("tab_finish"), Some("insulated"));
}

#[test]
fn unrecognised_qualifiers_accumulate_as_a_list_param() {
    let p = resolve("TO-220@p5@d10").expect("known outline with qualifiers");
    assert_eq!(p.qualifiers, ["p5", "d10"]);
    match p.params.get("qualifiers") {
        Some(ParamValue::List(list)) => assert_eq!(list, &["p5", "d10"]),
        other => panic!("expected a qualifier list, got {other:?}"),
    }
}

// ==================== print formatting tests ====================

#[test]
fn print_ids_for_labels() {
    insta::assert_snapshot!(format_package_for_text("DO-35"), @"DO-204-AH");
    insta::assert_snapshot!(format_package_for_text("TO-220-5"), @"TO-220-AB-5L");
    insta::assert_snapshot!(format_package_for_text("SOT23-5L"), @"SOT-23-5");
    insta::assert_snapshot!(format_package_for_text("NOT-A-PACKAGE"), @"NOT-A-PACKAGE");
}

#[test]
fn formatter_echoes_the_resolved_print_id() {
    for raw in ["DO-35", "TO-220-5", "SOT23-5L", "TO-66", "MELF@blue"] {
        let p = resolve(raw).unwrap_or_else(|| panic!("{raw:?} should resolve"));
        assert_eq!(format_package_for_text(raw), p.print_id, "for input {raw:?}");
    }
}
