//! Shared geometry and lead helpers for the through-hole drawers.

use glam::DVec2;

use crate::canvas::{Canvas, PaintMode, TextAlign};
use crate::device::DeviceSpec;
use crate::resolve::ResolvedPackage;
use crate::types::Color;

/// Stroke colour for pin rings on top-view packages.
pub(crate) const RING_BLUE: Color = Color::rgb(0.1, 0.35, 0.9);

/// Fill colour for pin cores on top-view packages.
pub(crate) const PIN_CORE_GRAY: Color = Color::rgb(0.92, 0.92, 0.92);

/// Clamp with the Python-style rule that the lower bound wins when the
/// range is inverted. `f64::clamp` asserts on that case, and some ring
/// stroke ranges do invert for very small pins.
pub(crate) fn clamp(value: f64, minimum: f64, maximum: f64) -> f64 {
    if value < minimum {
        return minimum;
    }
    if value > maximum {
        return maximum;
    }
    value
}

/// Split `"g d s"` or `"B,C,E"` into individual labels.
pub(crate) fn parse_pin_config(pc: &str) -> Vec<String> {
    pc.replace(',', " ")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Default numeric labels `["1", "2", ...]`.
pub(crate) fn default_numeric_labels(n: usize) -> Vec<String> {
    (1..=n).map(|i| i.to_string()).collect()
}

/// Pin labels for a drawer: a pin-config string wins (device first, then
/// package parameter), then explicit device pin labels, then a label
/// list carried on the package itself.
pub(crate) fn device_pin_labels(
    pkg: &ResolvedPackage,
    device: Option<&DeviceSpec>,
) -> Option<Vec<String>> {
    let config = device
        .and_then(|d| d.pin_config.as_deref())
        .or_else(|| pkg.text("pin_config"));
    if let Some(config) = config {
        let labels = parse_pin_config(config);
        if !labels.is_empty() {
            return Some(labels);
        }
    }
    if let Some(labels) = device.and_then(|d| d.pin_labels.clone()) {
        return Some(labels);
    }
    pkg.list("pin_labels").map(<[String]>::to_vec)
}

/// Symmetric lead offsets around the package centre line.
///
/// Two pins spread a full pitch each side; larger counts space evenly at
/// one pitch.
pub(crate) fn compute_offsets(pin_count: usize, pitch: f64) -> Vec<f64> {
    match pin_count {
        1 => vec![0.0],
        2 => vec![-pitch, pitch],
        n => (0..n)
            .map(|i| (i as f64 - (n as f64 - 1.0) / 2.0) * pitch)
            .collect(),
    }
}

/// Evenly spaced angles in degrees, endpoints inclusive. A single angle
/// sits at the midpoint of the span.
pub(crate) fn linspace_angles_deg(count: i64, start_deg: f64, stop_deg: f64) -> Vec<f64> {
    let count = count.max(1).min(32);
    if count == 1 {
        return vec![(start_deg + stop_deg) * 0.5];
    }
    let step = (stop_deg - start_deg) / (count - 1) as f64;
    (0..count).map(|i| start_deg + step * i as f64).collect()
}

/// Uniform angles around a full ring, starting at `start_deg`.
pub(crate) fn ring_angles_deg(count: i64, start_deg: f64) -> Vec<f64> {
    let count = count.max(1).min(32);
    let step = 360.0 / count as f64;
    (0..count).map(|i| start_deg + step * i as f64).collect()
}

/// A pin drawn as a filled core with a stroked ring around it.
pub(crate) fn draw_pin_with_ring(
    canvas: &mut dyn Canvas,
    center: DVec2,
    pin_r: f64,
    ring_total_diameter_scale: f64,
    ring_color: Color,
    core_color: Color,
) {
    let core_r = clamp(pin_r, 0.1, 1.0e9);

    let scale = clamp(ring_total_diameter_scale, 1.05, 10.0);
    let ring_outer_r = core_r * scale;

    let ring_stroke = clamp(ring_outer_r - core_r, 0.4, core_r * 6.0);
    let ring_draw_r = clamp(ring_outer_r - ring_stroke * 0.5, core_r + 0.05, ring_outer_r);

    canvas.save_state();

    canvas.set_stroke_color(ring_color);
    canvas.set_line_width(ring_stroke);
    canvas.circle(center, ring_draw_r, PaintMode::Stroke);

    canvas.set_fill_color(core_color);
    canvas.set_line_width((core_r * 0.15).max(0.6));
    canvas.circle(center, core_r, PaintMode::Fill);

    canvas.restore_state();
}

/// A pin label pushed radially outward from the package centre. The
/// caller sets font and fill colour first.
pub(crate) fn draw_radial_pin_label(
    canvas: &mut dyn Canvas,
    center: DVec2,
    pin: DVec2,
    label: &str,
    font_size: f64,
    pad: f64,
) {
    let v = pin - center;
    let d = v.length();
    if d <= 1.0e-6 {
        return;
    }
    let t = pin + v / d * pad;
    canvas.text(DVec2::new(t.x, t.y - font_size * 0.35), label, TextAlign::Center);
}
