//! Package string resolution.
//!
//! A raw key from inventory data ("DO-35", "to220-5L", "DO-204-AL@glass")
//! is split into a base key and `@` qualifiers, the base key is looked up
//! as variant, then alias, then canonical id, and the winning outline's
//! parameters are merged with variant overrides and qualifier effects.
//! Unknown keys resolve to `None`; nothing here panics on bad input.

use crate::draw::Family;
use crate::log::{debug, warn};
use crate::outline::{normalise_key, OutlineDb, ParamMap, ParamValue};

/// Qualifier tokens that set the `material` parameter.
const MATERIAL_QUALIFIERS: &[&str] = &["glass", "epoxy", "blue", "metallic", "yellow"];

/// Qualifier tokens that mark the tab finish as insulated.
const FINISH_QUALIFIERS: &[&str] = &["fullpack", "insulated", "f"];

/// A resolved package, ready for printing and drawing.
///
/// Fields are public so hosts and tests can assemble one directly for
/// families that have no catalogue entry yet (disc capacitors get their
/// geometry from qualifiers alone, for example).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPackage {
    /// The raw key as passed in, untouched.
    pub raw_key: String,
    /// Canonical outline id, e.g. `"TO-220-AB"`.
    pub canonical_id: String,
    /// Id to print on the label: the variant id if one matched, else the
    /// canonical id.
    pub print_id: String,
    /// Drawing family, `None` when the outline is catalogue-only.
    pub family: Option<Family>,
    /// Merged mechanical parameters: outline params, then variant
    /// overrides, then qualifier effects.
    pub params: ParamMap,
    /// Qualifier tokens in input order, lowercased.
    pub qualifiers: Vec<String>,
}

impl ResolvedPackage {
    pub fn is_renderable(&self) -> bool {
        self.family.is_some()
    }

    pub fn num(&self, key: &str) -> Option<f64> {
        self.params.get(key).and_then(ParamValue::as_num)
    }

    pub fn num_or(&self, key: &str, default: f64) -> f64 {
        self.num(key).unwrap_or(default)
    }

    pub fn int_or(&self, key: &str, default: i64) -> i64 {
        self.num(key).map(|v| v as i64).unwrap_or(default)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(ParamValue::as_text)
    }

    pub fn text_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.text(key).unwrap_or(default)
    }

    pub fn flag_or(&self, key: &str, default: bool) -> bool {
        self.params.get(key).and_then(ParamValue::as_flag).unwrap_or(default)
    }

    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.params.get(key).and_then(ParamValue::as_list)
    }
}

/// Split a raw key into base key and lowercased qualifier tokens.
///
/// Qualifiers ride behind `@` and never take part in outline lookup, so
/// `"DO-204-AL@glass"` looks up `"DO-204-AL"` and keeps `["glass"]`.
fn split_qualifiers(raw: &str) -> (String, Vec<String>) {
    let mut parts = raw.split('@');
    let base = parts.next().unwrap_or("").trim().to_owned();
    let qualifiers = parts
        .filter_map(|q| {
            let qt = q.trim().to_lowercase();
            (!qt.is_empty()).then_some(qt)
        })
        .collect();
    (base, qualifiers)
}

/// Fold qualifier tokens into the parameter map.
///
/// Material and finish tokens set their parameter directly, later tokens
/// of the same class winning. Anything else accumulates under the
/// `"qualifiers"` list parameter for family drawers to interpret.
fn apply_qualifiers(params: &mut ParamMap, qualifiers: &[String]) {
    for q in qualifiers {
        if MATERIAL_QUALIFIERS.contains(&q.as_str()) {
            params.insert("material", ParamValue::Text(q.clone()));
        } else if FINISH_QUALIFIERS.contains(&q.as_str()) {
            params.insert("tab_finish", ParamValue::Text("insulated".to_owned()));
        } else {
            match params.get_mut("qualifiers") {
                Some(ParamValue::List(list)) => list.push(q.clone()),
                Some(_) => {}
                None => {
                    params.insert("qualifiers", ParamValue::List(vec![q.clone()]));
                }
            }
        }
    }
}

/// Resolve the base key to (canonical id, print id, overrides).
///
/// Lookup order is variant, alias, canonical. Variants answer with their
/// base outline plus overrides and their own print id.
fn resolve_ids(db: &OutlineDb, base_key: &str) -> Option<(&'static str, &'static str, ParamMap)> {
    let key = normalise_key(base_key);

    if let Some(variant) = db.variant(&key) {
        return Some((variant.base_id, variant.print_id, variant.overrides.clone()));
    }
    if let Some(target) = db.alias_target(&key) {
        return Some((target, target, ParamMap::new()));
    }
    if let Some(outline) = db.outline(&key) {
        return Some((outline.id, outline.id, ParamMap::new()));
    }
    None
}

/// Resolve a raw package key against the shared catalogue.
pub fn resolve(raw_package: &str) -> Option<ResolvedPackage> {
    resolve_with(OutlineDb::shared(), raw_package)
}

/// Resolve a raw package key against a specific catalogue.
pub fn resolve_with(db: &OutlineDb, raw_package: &str) -> Option<ResolvedPackage> {
    let (base_key, qualifiers) = split_qualifiers(raw_package);

    let Some((canonical_id, print_id, overrides)) = resolve_ids(db, &base_key) else {
        debug!("no outline, alias or variant matches {raw_package:?}");
        return None;
    };
    let Some(outline) = db.outline(canonical_id) else {
        // Only reachable through a dangling variant or alias; the debug
        // build assert in OutlineDb::build catches those at seed time.
        warn!("key {raw_package:?} points at missing outline {canonical_id:?}");
        return None;
    };

    let mut params = outline.params.clone();
    params.extend(overrides);
    apply_qualifiers(&mut params, &qualifiers);

    Some(ResolvedPackage {
        raw_key: raw_package.to_owned(),
        canonical_id: canonical_id.to_owned(),
        print_id: print_id.to_owned(),
        family: outline.family,
        params,
        qualifiers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== lookup precedence tests ====================

    #[test]
    fn alias_resolves_to_canonical() {
        let p = resolve("DO-35").unwrap();
        assert_eq!(p.canonical_id, "DO-204-AH");
        assert_eq!(p.print_id, "DO-204-AH");
        assert!(p.is_renderable());
        assert_eq!(p.num("len"), Some(3.9));
        assert_eq!(p.num("dia"), Some(1.7));
        assert_eq!(p.text("material"), Some("glass"));
    }

    #[test]
    fn variant_wins_over_alias_and_sets_print_id() {
        let p = resolve("TO-220-5").unwrap();
        assert_eq!(p.canonical_id, "TO-220-AB");
        assert_eq!(p.print_id, "TO-220-AB-5L");
        assert_eq!(p.int_or("pin_count", 0), 5);
        // Inherited from the base outline.
        assert!(p.flag_or("tab_is_pin", false));
        assert_eq!(p.text("tab_finish"), Some("metallic"));
    }

    #[test]
    fn variant_without_aliases_prints_its_own_id() {
        let p = resolve("TO-218-5").unwrap();
        assert_eq!(p.canonical_id, "TO-218-AA");
        assert_eq!(p.print_id, "TO-218-5");
        assert_eq!(p.int_or("pin_count", 0), 5);
    }

    #[test]
    fn canonical_id_resolves_directly() {
        let p = resolve("TO-66").unwrap();
        assert_eq!(p.canonical_id, "TO-66");
        assert_eq!(p.print_id, "TO-66");
        assert!(!p.is_renderable());
        assert!(p.params.is_empty());
    }

    #[test]
    fn unknown_key_is_a_miss() {
        assert!(resolve("UNKNOWNPKG123").is_none());
        assert!(resolve("").is_none());
        assert!(resolve("@glass").is_none());
    }

    #[test]
    fn lookup_ignores_case_spacing_and_underscores() {
        let p = resolve("  to 220 ").unwrap();
        assert_eq!(p.canonical_id, "TO-220-AB");
        let p = resolve("sot_23").unwrap();
        assert_eq!(p.canonical_id, "SOT-23");
        let p = resolve("do35").unwrap();
        assert_eq!(p.canonical_id, "DO-204-AH");
    }

    // ==================== qualifier tests ====================

    #[test]
    fn material_qualifier_overrides_param_but_not_print_id() {
        let p = resolve("DO-204-AL@glass").unwrap();
        assert_eq!(p.print_id, "DO-204-AL");
        assert_eq!(p.text("material"), Some("glass"));
        assert_eq!(p.qualifiers, vec!["glass"]);
    }

    #[test]
    fn later_material_qualifier_wins() {
        let p = resolve("DO-41@glass@epoxy").unwrap();
        assert_eq!(p.text("material"), Some("epoxy"));
        assert_eq!(p.qualifiers, vec!["glass", "epoxy"]);
    }

    #[test]
    fn finish_qualifiers_insulate_the_tab() {
        for raw in ["TO-220@fullpack", "TO-220@insulated", "TO-220@F"] {
            let p = resolve(raw).unwrap();
            assert_eq!(p.canonical_id, "TO-220-AB");
            assert_eq!(p.print_id, "TO-220-AB");
            assert_eq!(p.text("tab_finish"), Some("insulated"), "raw {raw:?}");
        }
    }

    #[test]
    fn unrecognised_qualifiers_accumulate_in_order() {
        let p = resolve("MELF@matte@x1").unwrap();
        assert_eq!(p.canonical_id, "DO-213-AB");
        assert_eq!(
            p.list("qualifiers"),
            Some(&["matte".to_owned(), "x1".to_owned()][..])
        );
        assert_eq!(p.qualifiers, vec!["matte", "x1"]);
    }

    #[test]
    fn qualifiers_are_lowercased_and_blank_ones_dropped() {
        let p = resolve("TO-220@ FULLPACK @@").unwrap();
        assert_eq!(p.qualifiers, vec!["fullpack"]);
        assert_eq!(p.text("tab_finish"), Some("insulated"));
    }
}
