//! TO-225 / TO-126 package in side view, body lying on its long edge:
//! epoxy slab, mounting hole with reinforcement bosses, three leads.

use glam::DVec2;

use crate::canvas::{Canvas, Font, PaintMode, TextAlign};
use crate::device::DeviceSpec;
use crate::resolve::ResolvedPackage;
use crate::types::{scale_to_fit, Color, Rect};

use super::helpers::{default_numeric_labels, device_pin_labels};
use super::DrawOutline;

/// TO-225 flat epoxy package (TO-126 class).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct To225Tab;

impl DrawOutline for To225Tab {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        pkg: &ResolvedPackage,
        device: Option<&DeviceSpec>,
    ) {
        draw_to225(canvas, rect, pkg, device);
    }
}

fn draw_to225(
    canvas: &mut dyn Canvas,
    rect: Rect,
    pkg: &ResolvedPackage,
    device: Option<&DeviceSpec>,
) {
    let pin_count = pkg.int_or("pin_count", 3).max(1) as usize;

    let labels =
        device_pin_labels(pkg, device).unwrap_or_else(|| default_numeric_labels(pin_count));

    let body_w_mm = pkg.num_or("body_w", 8.0);
    let body_h_mm = pkg.num_or("body_h", 11.0);
    let lead_len_mm = pkg.num_or("lead_len", 16.0);
    let lead_pitch_mm = pkg.num_or("lead_pitch", 2.54);
    let hole_d_mm = pkg.num_or("hole_d", 3.20);

    let phys_w = body_w_mm + lead_len_mm;
    let phys_h = body_h_mm;
    if phys_w <= 0.0 || phys_h <= 0.0 {
        return;
    }

    let (draw_w, draw_h) = scale_to_fit(phys_w, phys_h, 2.0, &rect);

    // Centre slightly left so the leads fit on the right.
    let cx = rect.left + rect.width * 0.40;
    let cy = rect.bottom + rect.height * 0.50;

    let x0 = cx - draw_w * 0.5;
    let y0 = cy - draw_h * 0.5;

    // The part lies on its long edge: swap the body extents around its
    // centre so the 11 mm dimension runs horizontally.
    let body_w_vert = draw_w * (body_w_mm / phys_w);
    let body_h_vert = draw_h;

    let body_cx = x0 + body_w_vert * 0.5;
    let body_cy = y0 + body_h_vert * 0.5;

    let body_w = body_h_vert;
    let body_h = body_w_vert;

    let x0 = body_cx - body_w * 0.5;
    let y0 = body_cy - body_h * 0.5;

    canvas.set_fill_color(Color::rgb(0.12, 0.12, 0.12));
    canvas.rect(Rect::new(x0, y0, body_w, body_h), PaintMode::Fill);

    let hole_r = draw_w * (hole_d_mm / phys_w) * 0.5;
    let hole = DVec2::new(x0 + body_h * 0.5, cy);

    canvas.set_fill_color(Color::rgb(0.25, 0.25, 0.25));
    let back_r = hole_r * 1.50;
    for angle in [0.0_f64, 120.0, 240.0] {
        let a = angle.to_radians();
        let boss = hole + DVec2::new(a.cos(), a.sin()) * (back_r * 0.70);
        canvas.circle(boss, hole_r * 0.65, PaintMode::Fill);
    }

    canvas.set_fill_color(Color::WHITE);
    canvas.circle(hole, hole_r, PaintMode::Fill);

    canvas.set_fill_color(Color::rgb(0.75, 0.75, 0.75));

    let lead_len = draw_w * (lead_len_mm / phys_w);
    let lead_th = body_h * 0.12;

    // Pitch referenced to the physical body height so spacing stays
    // consistent after the rotation.
    let draw_pitch = (lead_pitch_mm / body_h_mm) * body_h;

    let rows = [cy - draw_pitch, cy, cy + draw_pitch];
    let lead_start_x = x0 + body_w;

    for &y in &rows {
        canvas.rect(
            Rect::new(lead_start_x, y - lead_th * 0.5, lead_len, lead_th),
            PaintMode::Fill,
        );
    }

    let fs = rect.height * 0.18;
    canvas.set_font(Font::Sans, fs);
    canvas.set_fill_color(Color::BLACK);

    let label_pad = fs * 0.40;
    let label_offset = [-label_pad, 0.0, label_pad];

    for (i, &y) in rows.iter().enumerate() {
        let Some(label) = labels.get(i) else {
            break;
        };
        canvas.text(
            DVec2::new(lead_start_x + lead_len + fs * 0.4, y + label_offset[i] - fs * 0.4),
            &label.to_uppercase(),
            TextAlign::Left,
        );
    }

    canvas.set_fill_color(Color::BLACK);
    canvas.set_stroke_color(Color::BLACK);
}
