//! Error and diagnostic types.
//!
//! Almost nothing in this crate fails: resolution misses are `Option`,
//! drawers no-op on degenerate geometry. What remains is invalid numeric
//! input at the host boundary ([`crate::types::NumericError`]) and
//! catalogue self-consistency findings reported by
//! [`crate::outline::OutlineDb::consistency_issues`].

use thiserror::Error;

/// A problem found while checking the seeded catalogue against itself.
///
/// These are not runtime errors: a dangling variant simply resolves as a
/// miss for that key. The check exists so catalogue edits get caught in
/// debug builds instead of silently unplugging entries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryIssue {
    /// A variant's base id does not name a registered outline.
    #[error("variant {key:?} references missing base outline {base_id:?}")]
    DanglingVariant { key: String, base_id: String },

    /// An alias points at a canonical id with no outline record.
    #[error("alias {key:?} references missing outline {canonical_id:?}")]
    DanglingAlias { key: String, canonical_id: String },
}
