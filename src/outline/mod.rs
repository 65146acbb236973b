//! Package outline catalogue.
//!
//! The catalogue holds every outline id the system recognises, keyed by the
//! registry that issued it (JEDEC `DO`/`TO`, `EIAJ`, `IEC`, plus `GEN` for
//! de-facto names with no registry). Most entries are bare records carrying
//! only their domain and group: they resolve, pretty-print, and nothing
//! more. A smaller set is *renderable*: those entries also name a drawing
//! [`Family`] and the mechanical parameters its drawer consumes.
//!
//! Three maps cooperate at lookup time:
//!
//! * `outlines`, keyed by the canonical id verbatim,
//! * `aliases`, keyed by [`normalise_key`] form, pointing at a canonical id,
//! * `variants`, keyed by [`normalise_key`] form, carrying parameter
//!   overrides on top of a base outline plus the id to print.
//!
//! Seeding is last-write-wins: the full id list is registered first as bare
//! records, then renderable entries overwrite their ids wholesale. An alias
//! may shadow a bare outline of the same name ("TO-220" is an alias of
//! "TO-220-AB" and wins over the bare "TO-220" record).

mod seed;

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use crate::draw::Family;
use crate::errors::RegistryIssue;
use crate::log::warn;

/// A single mechanical parameter attached to an outline.
///
/// Dimensions are millimetres, counts are whole numbers stored as `Num`,
/// `Text` covers material and finish names, `List` holds free-form
/// qualifier tokens accumulated during resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Num(f64),
    Text(String),
    Flag(bool),
    List(Vec<String>),
}

impl ParamValue {
    pub fn as_num(&self) -> Option<f64> {
        match self {
            ParamValue::Num(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            ParamValue::Flag(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ParamValue::List(v) => Some(v.as_slice()),
            _ => None,
        }
    }
}

/// Parameter map for one outline. Keys are the fixed parameter names the
/// family drawers look up; ordered so debug output stays stable.
pub type ParamMap = BTreeMap<&'static str, ParamValue>;

/// One catalogue record.
#[derive(Debug, Clone)]
pub struct Outline {
    /// Canonical id, verbatim, e.g. `"TO-220-AB"` or `"5MM ROUND T/H"`.
    pub id: &'static str,
    /// Issuing registry: `"DO"`, `"TO"`, `"EIAJ"`, `"IEC"` or `"GEN"`.
    pub domain: &'static str,
    /// Registry group name, e.g. `"Flange-Mounted Header Family"`.
    pub group: &'static str,
    /// Drawing family, present only on renderable entries.
    pub family: Option<Family>,
    /// Mechanical parameters for the family drawer. Empty on bare records.
    pub params: ParamMap,
}

impl Outline {
    pub fn is_renderable(&self) -> bool {
        self.family.is_some()
    }
}

/// A named pin-count or finish variant of a base outline.
#[derive(Debug, Clone)]
pub struct Variant {
    /// Canonical id of the outline this variant builds on.
    pub base_id: &'static str,
    /// Id printed on labels instead of the base id, e.g. `"TO-220-AB-5L"`.
    pub print_id: &'static str,
    /// Parameters that replace the base outline's values.
    pub overrides: ParamMap,
}

/// Normalise a raw package string for alias and variant lookups.
///
/// Trims, uppercases, and removes spaces and underscores. Hyphens are kept,
/// so `"to-220"` and `"TO220"` stay distinct keys and both get registered
/// where the catalogue wants them interchangeable.
pub fn normalise_key(raw: &str) -> String {
    raw.trim().to_uppercase().replace([' ', '_'], "")
}

/// The seeded outline catalogue.
///
/// Build one with [`OutlineDb::build`] or borrow the process-wide instance
/// from [`OutlineDb::shared`]. The catalogue is immutable after seeding.
pub struct OutlineDb {
    outlines: HashMap<&'static str, Outline>,
    aliases: HashMap<String, &'static str>,
    variants: HashMap<String, Variant>,
}

impl OutlineDb {
    /// Build and seed a fresh catalogue.
    pub fn build() -> OutlineDb {
        let mut db = OutlineDb {
            outlines: HashMap::new(),
            aliases: HashMap::new(),
            variants: HashMap::new(),
        };
        seed::populate(&mut db);

        let issues = db.consistency_issues();
        if !issues.is_empty() {
            warn!("outline catalogue has {} dangling entries", issues.len());
            debug_assert!(false, "outline catalogue has dangling entries: {issues:?}");
        }
        db
    }

    /// The process-wide catalogue, seeded on first use.
    pub fn shared() -> &'static OutlineDb {
        static DB: LazyLock<OutlineDb> = LazyLock::new(OutlineDb::build);
        &DB
    }

    /// Look up an outline by canonical id (verbatim, not normalised).
    pub fn outline(&self, canonical_id: &str) -> Option<&Outline> {
        self.outlines.get(canonical_id)
    }

    /// Look up an alias by normalised key, yielding the canonical id.
    pub fn alias_target(&self, normalised: &str) -> Option<&'static str> {
        self.aliases.get(normalised).copied()
    }

    /// Look up a variant by normalised key.
    pub fn variant(&self, normalised: &str) -> Option<&Variant> {
        self.variants.get(normalised)
    }

    /// All outlines, in no particular order.
    pub fn outlines(&self) -> impl Iterator<Item = &Outline> {
        self.outlines.values()
    }

    /// All alias entries, as (normalised key, canonical id).
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.aliases.iter().map(|(key, target)| (key.as_str(), *target))
    }

    /// All variant entries by normalised key.
    pub fn variants(&self) -> impl Iterator<Item = (&str, &Variant)> {
        self.variants.iter().map(|(key, variant)| (key.as_str(), variant))
    }

    pub fn outline_count(&self) -> usize {
        self.outlines.len()
    }

    /// Cross-check variants and aliases against the outline table.
    ///
    /// A dangling entry is not fatal at runtime (the key just misses), but
    /// [`OutlineDb::build`] asserts on these in debug builds so catalogue
    /// edits cannot silently unplug a key.
    pub fn consistency_issues(&self) -> Vec<RegistryIssue> {
        let mut issues = Vec::new();

        for (key, variant) in &self.variants {
            if !self.outlines.contains_key(variant.base_id) {
                issues.push(RegistryIssue::DanglingVariant {
                    key: key.clone(),
                    base_id: variant.base_id.to_owned(),
                });
            }
        }
        for (key, target) in &self.aliases {
            if !self.outlines.contains_key(target) {
                issues.push(RegistryIssue::DanglingAlias {
                    key: key.clone(),
                    canonical_id: (*target).to_owned(),
                });
            }
        }

        issues.sort_by(|a, b| {
            let key = |i: &RegistryIssue| match i {
                RegistryIssue::DanglingVariant { key, .. } => key.clone(),
                RegistryIssue::DanglingAlias { key, .. } => key.clone(),
            };
            key(a).cmp(&key(b))
        });
        issues
    }

    fn add_outline(&mut self, id: &'static str, domain: &'static str, group: &'static str) {
        self.outlines.insert(
            id,
            Outline {
                id,
                domain,
                group,
                family: None,
                params: ParamMap::new(),
            },
        );
    }

    fn add_renderable(
        &mut self,
        id: &'static str,
        domain: &'static str,
        group: &'static str,
        family: impl Into<Family>,
        params: ParamMap,
        aliases: &[&'static str],
    ) {
        self.outlines.insert(
            id,
            Outline {
                id,
                domain,
                group,
                family: Some(family.into()),
                params,
            },
        );
        for alias in aliases {
            self.add_alias(alias, id);
        }
    }

    fn add_alias(&mut self, alias: &str, canonical_id: &'static str) {
        let key = normalise_key(alias);
        if !key.is_empty() {
            self.aliases.insert(key, canonical_id);
        }
    }

    fn add_variant(
        &mut self,
        variant_id: &'static str,
        base_id: &'static str,
        overrides: ParamMap,
        aliases: &[&'static str],
    ) {
        let record = Variant {
            base_id,
            print_id: variant_id,
            overrides,
        };
        let key = normalise_key(variant_id);
        if !key.is_empty() {
            self.variants.insert(key, record.clone());
        }
        for alias in aliases {
            let alias_key = normalise_key(alias);
            if !alias_key.is_empty() {
                self.variants.insert(alias_key, record.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== key normalisation tests ====================

    #[test]
    fn normalise_trims_uppercases_and_strips_separators() {
        assert_eq!(normalise_key("  to-220 "), "TO-220");
        assert_eq!(normalise_key("sot_23"), "SOT23");
        assert_eq!(normalise_key("5mm round t/h"), "5MMROUNDT/H");
        assert_eq!(normalise_key(""), "");
    }

    #[test]
    fn normalise_is_idempotent() {
        for raw in ["DO 204 AH", "to_92", "  MELF  ", "TO-220-AB-5L"] {
            let once = normalise_key(raw);
            assert_eq!(normalise_key(&once), once);
        }
    }

    // ==================== catalogue tests ====================

    #[test]
    fn seeded_catalogue_is_consistent() {
        let db = OutlineDb::build();
        assert_eq!(db.consistency_issues(), Vec::new());
        assert!(db.outline_count() > 100);
    }

    #[test]
    fn renderable_overlay_replaces_bare_record() {
        let db = OutlineDb::shared();
        let outline = db.outline("DO-204-AH").unwrap();
        // Seeded first under "Lead Mounted Family", then overwritten by the
        // renderable entry with its own group and parameters.
        assert_eq!(outline.group, "Round Body Axial Lead");
        assert!(outline.is_renderable());
        assert_eq!(outline.params.get("len").and_then(ParamValue::as_num), Some(3.9));
        assert_eq!(
            outline.params.get("material").and_then(ParamValue::as_text),
            Some("glass")
        );
    }

    #[test]
    fn bare_records_have_no_family() {
        let db = OutlineDb::shared();
        let outline = db.outline("TO-66").unwrap();
        assert_eq!(outline.domain, "TO");
        assert_eq!(outline.group, "Diamond Base");
        assert!(!outline.is_renderable());
        assert!(outline.params.is_empty());
    }

    #[test]
    fn aliases_point_at_canonical_ids() {
        let db = OutlineDb::shared();
        assert_eq!(db.alias_target("DO-35"), Some("DO-204-AH"));
        assert_eq!(db.alias_target(&normalise_key("sod-106")), Some("DO-213-AB"));
        assert_eq!(db.alias_target("TO-126"), Some("TO-225-AA"));
        assert_eq!(db.alias_target("NOPE"), None);
    }

    #[test]
    fn alias_shadows_bare_outline_of_same_name() {
        let db = OutlineDb::shared();
        // "TO-220" exists as a bare record and as an alias of TO-220-AB.
        assert!(db.outline("TO-220").is_some());
        assert_eq!(db.alias_target("TO-220"), Some("TO-220-AB"));
    }

    #[test]
    fn variants_carry_print_id_and_overrides() {
        let db = OutlineDb::shared();
        let v = db.variant("TO-220-5").unwrap();
        assert_eq!(v.base_id, "TO-220-AB");
        assert_eq!(v.print_id, "TO-220-AB-5L");
        assert_eq!(v.overrides.get("pin_count").and_then(ParamValue::as_num), Some(5.0));

        // Registered without aliases, keyed by its own id only.
        let v = db.variant("TO-218-5").unwrap();
        assert_eq!(v.base_id, "TO-218-AA");
        assert_eq!(v.print_id, "TO-218-5");
    }

    #[test]
    fn spaced_id_is_reachable_through_aliases_only() {
        let db = OutlineDb::shared();
        // The verbatim id contains spaces, so its normalised form misses the
        // outline table and lookups go through the aliases.
        assert!(db.outline("5MM ROUND T/H").is_some());
        assert!(db.outline("5MMROUNDT/H").is_none());
        assert_eq!(db.alias_target("LED5MM"), Some("5MM ROUND T/H"));
        assert_eq!(db.alias_target("5MMLED"), Some("5MM ROUND T/H"));
    }

    #[test]
    fn dangling_entries_are_reported() {
        let mut db = OutlineDb {
            outlines: HashMap::new(),
            aliases: HashMap::new(),
            variants: HashMap::new(),
        };
        db.add_outline("TO-220-AB", "TO", "Flange-Mounted Header Family");
        db.add_alias("GOOD", "TO-220-AB");
        db.add_alias("BAD", "TO-999");
        db.add_variant("TO-999-5", "TO-999", ParamMap::new(), &[]);

        let issues = db.consistency_issues();
        assert_eq!(issues.len(), 2);
        assert!(issues.contains(&RegistryIssue::DanglingAlias {
            key: "BAD".to_owned(),
            canonical_id: "TO-999".to_owned(),
        }));
        assert!(issues.contains(&RegistryIssue::DanglingVariant {
            key: "TO-999-5".to_owned(),
            base_id: "TO-999".to_owned(),
        }));
    }
}
