//! Package-name resolution and parametric 2D outline drawing for
//! electronic component labels.
//!
//! A raw package string from inventory data ("DO-35", "TO-220-5",
//! "C-DISC@p5@blue") resolves against a built-in outline catalogue to a
//! canonical id, a printable id and a merged parameter map. Renderable
//! outlines carry a [`Family`] whose drawer turns the parameters into
//! scaled 2D drawing operations on a [`Canvas`].
//!
//! ```
//! use pkgdraw::{draw_package, format_package_for_text, DisplayList, Rect};
//!
//! assert_eq!(format_package_for_text("DO-35"), "DO-204-AH");
//!
//! let mut list = DisplayList::new();
//! let drawn = draw_package(&mut list, Rect::new(0.0, 0.0, 120.0, 48.0), "TO-220", None);
//! assert!(drawn && !list.is_empty());
//! ```

pub mod canvas;
pub mod colour;
pub mod device;
pub mod draw;
pub mod errors;
mod log;
pub mod marking;
pub mod markup;
pub mod outline;
pub mod resolve;
pub mod types;

pub use canvas::{Canvas, DisplayList, DrawOp, Font, PaintMode, Path, PathEl, TextAlign};
pub use device::DeviceSpec;
pub use draw::{DrawOutline, Family};
pub use errors::RegistryIssue;
pub use outline::{OutlineDb, ParamMap, ParamValue};
pub use resolve::{resolve, resolve_with, ResolvedPackage};
pub use types::{Color, Rect};

use crate::log::debug;

/// Format a package string for printing on a label.
///
/// Known keys print their canonical (variant-aware) id, unknown keys
/// pass through verbatim so labels never lose information.
pub fn format_package_for_text(raw: &str) -> String {
    match resolve(raw) {
        Some(pkg) => pkg.print_id,
        None => raw.to_owned(),
    }
}

/// Resolve a raw package string and draw its outline into `rect`.
///
/// Returns `true` when something was drawn. Unknown keys,
/// catalogue-only outlines and empty target rects draw nothing and
/// return `false`.
pub fn draw_package(
    canvas: &mut dyn Canvas,
    rect: Rect,
    raw_package: &str,
    device: Option<&DeviceSpec>,
) -> bool {
    if raw_package.is_empty() || rect.is_empty() {
        return false;
    }

    let Some(resolved) = resolve(raw_package) else {
        return false;
    };
    let Some(family) = resolved.family else {
        debug!("{raw_package:?} resolved to catalogue-only outline {:?}", resolved.canonical_id);
        return false;
    };

    debug!("drawing {raw_package:?} as {family} ({:?})", resolved.print_id);
    family.draw(canvas, rect, &resolved, device);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== api tests ====================

    #[test]
    fn format_known_key() {
        assert_eq!(format_package_for_text("DO-35"), "DO-204-AH");
        assert_eq!(format_package_for_text("TO-220-5"), "TO-220-AB-5L");
    }

    #[test]
    fn format_unknown_key_passes_through() {
        assert_eq!(format_package_for_text("UNKNOWNPKG123"), "UNKNOWNPKG123");
        assert_eq!(format_package_for_text(""), "");
    }

    #[test]
    fn draw_known_package_records_ops() {
        let mut list = DisplayList::new();
        let drawn = draw_package(&mut list, Rect::new(0.0, 0.0, 120.0, 48.0), "TO-220", None);
        assert!(drawn);
        assert!(!list.is_empty());
        assert!(list.state_balanced());
    }

    #[test]
    fn draw_unknown_package_is_a_quiet_no_op() {
        let mut list = DisplayList::new();
        let drawn = draw_package(&mut list, Rect::new(0.0, 0.0, 120.0, 48.0), "UNKNOWNPKG123", None);
        assert!(!drawn);
        assert!(list.is_empty());
    }

    #[test]
    fn draw_empty_key_is_a_quiet_no_op() {
        let mut list = DisplayList::new();
        assert!(!draw_package(&mut list, Rect::new(0.0, 0.0, 120.0, 48.0), "", None));
        assert!(list.is_empty());
    }

    #[test]
    fn draw_catalogue_only_outline_returns_false() {
        // Catalogue knows the id but no drawer claims it.
        let mut list = DisplayList::new();
        let drawn = draw_package(&mut list, Rect::new(0.0, 0.0, 120.0, 48.0), "DO-205", None);
        assert!(!drawn);
        assert!(list.is_empty());
    }
}
