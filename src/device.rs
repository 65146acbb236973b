//! Per-device metadata that rides alongside a resolved package.
//!
//! The outline catalogue describes a package shape; the device inside it
//! decides pinout labels, polarity display and printed markings. Hosts
//! fill in whatever they know and hand the record to the drawers, which
//! treat every field as optional.

/// Optional device-side hints for the package drawers.
///
/// All fields default to `None`, so `DeviceSpec::default()` plus struct
/// update syntax builds a partial record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceSpec {
    /// Device subtype, free-form ("zener", "tvs bidirectional", "mosfet").
    pub subtype: Option<String>,
    /// Pin configuration string, e.g. `"g d s"` or `"B,C,E"`.
    pub pin_config: Option<String>,
    /// Explicit per-pin labels, consulted when no pin config is set.
    pub pin_labels: Option<Vec<String>>,
    /// Capacitance value text for disc capacitor markings, e.g. `"22pF"`.
    pub capacitance: Option<String>,
    /// Tolerance text for disc capacitor markings, e.g. `"5%"`.
    pub tolerance: Option<String>,
    /// LED dominant wavelength text, e.g. `"565nm"`.
    pub wavelength: Option<String>,
    /// LED lens finish, e.g. `"diffused"` or `"water clear"`.
    pub lens: Option<String>,
}

impl DeviceSpec {
    /// Whether the subtype describes a bidirectional TVS diode.
    ///
    /// Those have no cathode, so axial drawers suppress the polarity band.
    pub fn is_bidirectional_tvs(&self) -> bool {
        let Some(subtype) = self.subtype.as_deref() else {
            return false;
        };
        let subtype = subtype.trim().to_lowercase();
        if subtype.is_empty() || !subtype.contains("tvs") {
            return false;
        }
        subtype.contains("bi") || subtype.contains("bidirectional")
    }
}
