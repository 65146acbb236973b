//! LED tint colours derived from the emission wavelength.

use crate::types::Color;

/// Parse a wavelength in nanometres from catalogue-style inputs such
/// as `"630"`, `"630nm"` or `" 630 nm "`.
///
/// Multi-emitter values like `"470/525"` have no single wavelength and
/// parse to `None`.
pub fn parse_wavelength(text: &str) -> Option<f64> {
    if text.contains('/') {
        return None;
    }
    let s = text.trim().to_lowercase().replace("nm", "");
    s.trim().parse::<f64>().ok()
}

/// Approximate body colour for a wavelength, clamped to the visible
/// 380..700 nm range. Missing or unparsable input gives the faint
/// blue-white used for unknown emitters.
pub fn wavelength_to_rgb(wavelength: Option<&str>) -> Color {
    let Some(nm) = wavelength.and_then(parse_wavelength) else {
        return Color::rgb(0.95, 0.95, 1.00);
    };
    let nm = nm.clamp(380.0, 700.0);

    let (r, g, b) = if nm < 440.0 {
        (-(nm - 440.0) / 60.0, 0.0, 1.0)
    } else if nm < 490.0 {
        (0.0, (nm - 440.0) / 50.0, 1.0)
    } else if nm < 510.0 {
        (0.0, 1.0, -(nm - 510.0) / 20.0)
    } else if nm < 580.0 {
        ((nm - 510.0) / 70.0, 1.0, 0.0)
    } else if nm < 645.0 {
        (1.0, -(nm - 645.0) / 65.0, 0.0)
    } else {
        (1.0, 0.0, 0.0)
    };

    // Intensity falls off towards the edges of the visible band.
    let f = if nm < 420.0 {
        0.3 + 0.7 * (nm - 380.0) / 40.0
    } else if (645.0..700.0).contains(&nm) {
        0.3 + 0.7 * (700.0 - nm) / 55.0
    } else {
        1.0
    };

    Color::rgb(r * f, g * f, b * f)
}
