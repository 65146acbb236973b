//! Package outline drawers.
//!
//! Every mechanical family the catalogue can render is a unit struct
//! implementing [`DrawOutline`]; [`Family`] is the dispatch enum over
//! all of them. Drawers read their geometry from the resolved package's
//! parameter map and scale it into the target cell, so one drawer
//! covers a whole family of related outlines.

use enum_dispatch::enum_dispatch;

use crate::canvas::Canvas;
use crate::device::DeviceSpec;
use crate::resolve::ResolvedPackage;
use crate::types::Rect;

mod axial;
mod can;
mod diamond;
mod disc;
mod helpers;
mod led;
mod smd;
mod to218;
mod to220;
mod to225;
mod to243;
mod to247;
mod to264;
mod to92;

pub use axial::{AxialRoundBody, Melf};
pub use can::{To205Can, To206Can};
pub use diamond::To204Diamond;
pub use disc::CapacitorDisc;
pub use led::LedThtRound;
pub use smd::{Smd2Pad, Smd3Lead, Smd4Lead};
pub use to218::To218Tab;
pub use to220::To220Tab;
pub use to225::To225Tab;
pub use to243::To243Tab;
pub use to247::To247Tab;
pub use to264::To264Body;
pub use to92::To92Moulded;

/// Renders one package outline into a target cell.
///
/// Implementations only record drawing operations; they never error.
/// Degenerate inputs (zero-sized bodies, unusable parameters) draw
/// nothing rather than panic.
#[enum_dispatch]
pub trait DrawOutline {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        pkg: &ResolvedPackage,
        device: Option<&DeviceSpec>,
    );
}

/// Every drawable mechanical family.
#[enum_dispatch(DrawOutline)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    AxialRoundBody,
    Melf,
    CapacitorDisc,
    To92Moulded,
    To204Diamond,
    To205Can,
    To206Can,
    To218Tab,
    To220Tab,
    To225Tab,
    To243Tab,
    To247Tab,
    To264Body,
    Smd2Pad,
    Smd3Lead,
    Smd4Lead,
    LedThtRound,
}

impl Family {
    /// Stable identifier, as used by the outline catalogue.
    pub fn id(self) -> &'static str {
        match self {
            Family::AxialRoundBody(_) => "axial_round_body",
            Family::Melf(_) => "melf",
            Family::CapacitorDisc(_) => "capacitor_disc",
            Family::To92Moulded(_) => "to92_moulded",
            Family::To204Diamond(_) => "to204_diamond",
            Family::To205Can(_) => "to205_package",
            Family::To206Can(_) => "to206_package",
            Family::To218Tab(_) => "to218_tab",
            Family::To220Tab(_) => "to220_tab",
            Family::To225Tab(_) => "to225_tab",
            Family::To243Tab(_) => "to243_tab",
            Family::To247Tab(_) => "to247_tab",
            Family::To264Body(_) => "to264_body",
            Family::Smd2Pad(_) => "smd_2pad",
            Family::Smd3Lead(_) => "smd_3lead",
            Family::Smd4Lead(_) => "smd_4lead",
            Family::LedThtRound(_) => "led_tht_round",
        }
    }

    /// Inverse of [`Family::id`].
    pub fn from_id(id: &str) -> Option<Family> {
        Some(match id {
            "axial_round_body" => AxialRoundBody.into(),
            "melf" => Melf.into(),
            "capacitor_disc" => CapacitorDisc.into(),
            "to92_moulded" => To92Moulded.into(),
            "to204_diamond" => To204Diamond.into(),
            "to205_package" => To205Can.into(),
            "to206_package" => To206Can.into(),
            "to218_tab" => To218Tab.into(),
            "to220_tab" => To220Tab.into(),
            "to225_tab" => To225Tab.into(),
            "to243_tab" => To243Tab.into(),
            "to247_tab" => To247Tab.into(),
            "to264_body" => To264Body.into(),
            "smd_2pad" => Smd2Pad.into(),
            "smd_3lead" => Smd3Lead.into(),
            "smd_4lead" => Smd4Lead.into(),
            "led_tht_round" => LedThtRound.into(),
            _ => return None,
        })
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== family tests ====================

    #[test]
    fn ids_round_trip() {
        let all = [
            Family::from(AxialRoundBody),
            Family::from(Melf),
            Family::from(CapacitorDisc),
            Family::from(To92Moulded),
            Family::from(To204Diamond),
            Family::from(To205Can),
            Family::from(To206Can),
            Family::from(To218Tab),
            Family::from(To220Tab),
            Family::from(To225Tab),
            Family::from(To243Tab),
            Family::from(To247Tab),
            Family::from(To264Body),
            Family::from(Smd2Pad),
            Family::from(Smd3Lead),
            Family::from(Smd4Lead),
            Family::from(LedThtRound),
        ];
        for family in all {
            assert_eq!(Family::from_id(family.id()), Some(family));
        }
    }

    #[test]
    fn unknown_ids_resolve_to_none() {
        assert_eq!(Family::from_id("bga_grid"), None);
        assert_eq!(Family::from_id(""), None);
    }
}
