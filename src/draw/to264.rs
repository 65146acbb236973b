//! TO-264 (TO-3P) plastic power package in side view: large body with a
//! mounting hole, paired edge scallops, stepped leads.

use glam::DVec2;

use crate::canvas::{Canvas, Font, PaintMode, Path, TextAlign};
use crate::device::DeviceSpec;
use crate::resolve::ResolvedPackage;
use crate::types::{scale_to_fit, Color, Rect};

use super::helpers::{compute_offsets, default_numeric_labels, device_pin_labels};
use super::DrawOutline;

/// TO-264 moulded power package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct To264Body;

impl DrawOutline for To264Body {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        pkg: &ResolvedPackage,
        device: Option<&DeviceSpec>,
    ) {
        draw_to264(canvas, rect, pkg, device);
    }
}

fn draw_internal_scallop(canvas: &mut dyn Canvas, cx: f64, edge_y: f64, r: f64, body_x: f64, body_w: f64, cy: f64) {
    canvas.save_state();

    let mut circle = Path::new();
    circle.arc(DVec2::new(cx, edge_y), r, 0.0, 360.0).close();
    canvas.clip(&circle);

    let clip_y = if edge_y >= cy { edge_y - r } else { edge_y };
    canvas.rect(Rect::new(body_x, clip_y, body_w, r), PaintMode::Fill);

    canvas.restore_state();
}

fn draw_to264(
    canvas: &mut dyn Canvas,
    rect: Rect,
    pkg: &ResolvedPackage,
    device: Option<&DeviceSpec>,
) {
    let pin_count = match pkg.int_or("pin_count", 3) {
        2 => 2_usize,
        5 => 5,
        _ => 3,
    };

    let labels =
        device_pin_labels(pkg, device).unwrap_or_else(|| default_numeric_labels(pin_count));

    let body_mm = pkg.num_or("body_mm", 20.0);
    let lead_mm = pkg.num_or("lead_mm", 20.5);
    let height_mm = pkg.num_or("height_mm", 26.0);

    let hole_d_mm = pkg.num_or("hole_d_mm", 3.4);
    let scallop_d_mm = pkg.num_or("scallop_d_mm", 4.5);
    // Offset along the body measured from the mounting-flange end.
    let scallop_x_mm = pkg.num_or("scallop_y_mm", 6.2);

    let total_x_mm = height_mm + lead_mm;
    if total_x_mm <= 0.0 || body_mm <= 0.0 || height_mm <= 0.0 {
        return;
    }

    let (draw_w, draw_h) = scale_to_fit(total_x_mm, body_mm, 2.0, &rect);

    let label_margin_fraction = 0.15;
    let cx = rect.left + (rect.width * (1.0 - label_margin_fraction)) * 0.5;
    let cy = rect.bottom + rect.height * 0.50;

    let x0 = cx - draw_w * 0.5;
    let y0 = cy - draw_h * 0.5;

    let body_w = draw_w * (height_mm / total_x_mm);
    let lead_w = draw_w * (lead_mm / total_x_mm);

    let body_x = x0;

    canvas.set_fill_color(Color::rgb(0.12, 0.12, 0.12));
    canvas.rect(Rect::new(body_x, y0, body_w, draw_h), PaintMode::Fill);

    let hole_r = (hole_d_mm / body_mm) * draw_h * 0.5;
    let scallop_r = (scallop_d_mm / body_mm) * draw_h * 0.5;
    let scallop_dx = (scallop_x_mm / height_mm) * body_w;

    canvas.set_fill_color(Color::WHITE);
    canvas.circle(DVec2::new(body_x + scallop_dx, cy), hole_r, PaintMode::Fill);

    canvas.set_fill_color(Color::rgb(0.25, 0.25, 0.25));
    for edge_y in [y0 + draw_h, y0] {
        draw_internal_scallop(canvas, body_x + scallop_dx, edge_y, scallop_r, body_x, body_w, cy);
        // A smaller second scallop further along the body.
        draw_internal_scallop(
            canvas,
            body_x + scallop_dx * 3.0,
            edge_y,
            scallop_r * 0.5,
            body_x,
            body_w,
            cy,
        );
    }

    canvas.set_fill_color(Color::rgb(0.75, 0.75, 0.75));

    let pitch_mm = match pkg.num("pin_pitch_mm") {
        Some(p) => p,
        None => {
            if pin_count <= 3 {
                5.75
            } else {
                3.81
            }
        }
    };

    let mut pitch = (pitch_mm / body_mm) * draw_h;
    if pitch <= 0.0 {
        pitch = draw_h * 0.18;
    }

    let lead_th = draw_h * 0.07;

    let lead_step_len = lead_w * 0.15;
    let mut lead_step_th = lead_th * 2.00;
    let lead_step_th_max = pitch * 0.75;
    if lead_step_th > lead_step_th_max {
        lead_step_th = lead_step_th_max;
    }

    let offsets = compute_offsets(pin_count, pitch);
    let first_pin_x = body_x + body_w;

    for &off in &offsets {
        let regular_y = cy + off - lead_th * 0.5;
        let step_y = cy + off - lead_step_th * 0.5;

        canvas.rect(
            Rect::new(first_pin_x, step_y, lead_step_len, lead_step_th),
            PaintMode::Fill,
        );

        let remaining_len = (lead_w - lead_step_len).max(0.0);
        canvas.rect(
            Rect::new(first_pin_x + lead_step_len, regular_y, remaining_len, lead_th),
            PaintMode::Fill,
        );
    }

    let fs = if pin_count <= 3 {
        rect.height * 0.20
    } else {
        rect.height * 0.14
    }
    .max(rect.height * 0.10);

    canvas.set_font(Font::Sans, fs);
    canvas.set_fill_color(Color::BLACK);

    let label_pad = fs * 0.35;
    let mid = (pin_count as f64 - 1.0) / 2.0;

    let label_y_adjust: Vec<f64> = (0..pin_count)
        .map(|i| {
            let rel = i as f64 - mid;
            if rel < 0.0 {
                -label_pad
            } else if rel > 0.0 {
                label_pad
            } else {
                0.0
            }
        })
        .collect();

    let label_x = first_pin_x + lead_w + draw_h * 0.15;

    for (i, &off) in offsets.iter().enumerate() {
        let Some(label) = labels.get(i) else {
            break;
        };

        let py = cy + off + label_y_adjust[i];
        canvas.text(
            DVec2::new(label_x, py - fs * 0.40),
            &label.to_uppercase(),
            TextAlign::Left,
        );
    }

    canvas.set_fill_color(Color::BLACK);
    canvas.set_stroke_color(Color::BLACK);
}
