//! TO-92 moulded transistor package, side view with the flat face up and
//! leads pointing right.

use glam::DVec2;

use crate::canvas::{Canvas, Font, PaintMode, TextAlign};
use crate::device::DeviceSpec;
use crate::resolve::ResolvedPackage;
use crate::types::{scale_to_fit, Color, Rect};

use super::helpers::{default_numeric_labels, device_pin_labels};
use super::DrawOutline;

/// TO-92 epoxy body with three formed leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct To92Moulded;

impl DrawOutline for To92Moulded {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        pkg: &ResolvedPackage,
        device: Option<&DeviceSpec>,
    ) {
        let pin_count = pkg.int_or("pin_count", 3).max(0) as usize;
        let labels = device_pin_labels(pkg, device)
            .unwrap_or_else(|| default_numeric_labels(pin_count));

        let body_h_mm = pkg.num_or("body_h", 4.8);
        // Width equals height; the body is a square epoxy block from the side.
        let body_w_mm = pkg.num_or("body_w", 4.8);
        let lead_len_mm = pkg.num_or("lead_len", 14.0);
        let lead_pitch_mm = pkg.num_or("lead_pitch", 1.27);

        // Physical bounding box: body at the left, leads extending right.
        let phys_w = body_w_mm + lead_len_mm;
        let phys_h = body_h_mm;
        let (draw_w, draw_h) = scale_to_fit(phys_w, phys_h, 2.0, &rect);

        // Slight left bias leaves room for pin labels on the right.
        let cx = rect.left + rect.width * 0.45;
        let cy = rect.bottom + rect.height * 0.50;
        let x0 = cx - draw_w * 0.5;
        let y0 = cy - draw_h * 0.5;

        let body_w = draw_w * (body_w_mm / phys_w);
        let body_h = draw_h;

        canvas.set_fill_color(Color::rgb(0.12, 0.12, 0.12));
        canvas.rect(Rect::new(x0, y0, body_w, body_h), PaintMode::Fill);

        canvas.set_fill_color(Color::gray(0.75));

        let lead_len = draw_w * (lead_len_mm / phys_w);
        let lead_th = body_h * 0.12;
        let draw_pitch = (lead_pitch_mm / body_h_mm) * body_h;

        let y_offsets = [cy - draw_pitch, cy, cy + draw_pitch];
        let lead_start_x = x0 + body_w;

        for y in y_offsets {
            canvas.rect(
                Rect::new(lead_start_x, y - lead_th * 0.5, lead_len, lead_th),
                PaintMode::Fill,
            );
        }

        let fs = rect.height * 0.18;
        canvas.set_font(Font::Sans, fs);
        canvas.set_fill_color(Color::BLACK);

        let label_pad = fs * 0.50;
        let label_y_adjust = [-label_pad, 0.0, label_pad];

        for (i, y) in y_offsets.into_iter().enumerate() {
            let Some(label) = labels.get(i) else {
                break;
            };
            canvas.text(
                DVec2::new(
                    lead_start_x + lead_len + fs * 0.5,
                    (y + label_y_adjust[i]) - fs * 0.4,
                ),
                &label.to_uppercase(),
                TextAlign::Left,
            );
        }

        canvas.set_fill_color(Color::BLACK);
        canvas.set_stroke_color(Color::BLACK);
    }
}
