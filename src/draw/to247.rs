//! TO-247 power package in side view: large epoxy body with a through
//! hole and edge scallops instead of a metal tab, stepped leads.

use glam::DVec2;

use crate::canvas::{Canvas, Font, PaintMode, TextAlign};
use crate::device::DeviceSpec;
use crate::resolve::ResolvedPackage;
use crate::types::{scale_to_fit, Color, Rect};

use super::helpers::{compute_offsets, default_numeric_labels, device_pin_labels};
use super::DrawOutline;

/// TO-247 isolated-mount power package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct To247Tab;

impl DrawOutline for To247Tab {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        pkg: &ResolvedPackage,
        device: Option<&DeviceSpec>,
    ) {
        draw_to247(canvas, rect, pkg, device);
    }
}

fn draw_to247(
    canvas: &mut dyn Canvas,
    rect: Rect,
    pkg: &ResolvedPackage,
    device: Option<&DeviceSpec>,
) {
    let pin_count = match pkg.int_or("pin_count", 3) {
        4 => 4_usize,
        _ => 3,
    };

    let labels =
        device_pin_labels(pkg, device).unwrap_or_else(|| default_numeric_labels(pin_count));

    let body_w_mm = pkg.num_or("body_w", 20.1);
    let body_h_mm = pkg.num_or("body_h", 15.9);
    let lead_len_mm = pkg.num_or("lead_len", 20.0);

    let hole_d_mm = pkg.num_or("hole_d_mm", 3.6);
    let scallop_w_mm = pkg.num_or("scallop_w_mm", 4.0);
    let scallop_h_mm = pkg.num_or("scallop_h_mm", 2.0);
    let scallop_x_mm = pkg.num_or("scallop_x_mm", 6.2);

    let pitch_3lead_mm = pkg.num_or("lead_pitch_3_mm", 5.44);
    let pitch_group_mm = pkg.num_or("lead_pitch_group_mm", 2.54);
    let group_gap_mm = pkg.num_or("group_gap_mm", 5.08);

    let phys_w = body_w_mm + lead_len_mm;
    let phys_h = body_h_mm;
    if phys_w <= 0.0 || phys_h <= 0.0 || body_w_mm <= 0.0 {
        return;
    }

    let (draw_w, draw_h) = scale_to_fit(phys_w, phys_h, 2.0, &rect);

    let label_margin_fraction = 0.15;
    let cx = rect.left + (rect.width * (1.0 - label_margin_fraction)) * 0.5;
    let cy = rect.bottom + rect.height * 0.50;

    let x0 = cx - draw_w * 0.5;
    let y0 = cy - draw_h * 0.5;

    let body_w = draw_w * (body_w_mm / phys_w);
    let lead_len = draw_w * (lead_len_mm / phys_w);

    let body_x = x0;
    let body_y = y0;
    let body_h = draw_h;
    let lead_x = body_x + body_w;

    canvas.set_fill_color(Color::rgb(0.12, 0.12, 0.12));
    canvas.rect(Rect::new(body_x, body_y, body_w, body_h), PaintMode::Fill);

    let hole_r = (hole_d_mm / body_h_mm) * draw_h * 0.5;
    let scallop_w = (scallop_w_mm / body_w_mm) * body_w;
    let scallop_h = (scallop_h_mm / body_h_mm) * body_h;
    let scallop_dx = (scallop_x_mm / body_w_mm) * body_w;

    canvas.set_fill_color(Color::WHITE);
    canvas.circle(DVec2::new(body_x + scallop_dx, cy), hole_r, PaintMode::Fill);

    canvas.set_fill_color(Color::rgb(0.25, 0.25, 0.25));
    for edge_y in [body_y + body_h - scallop_h, body_y] {
        canvas.rect(
            Rect::new(body_x + scallop_dx - scallop_w * 0.5, edge_y, scallop_w, scallop_h),
            PaintMode::Fill,
        );
    }

    canvas.set_fill_color(Color::rgb(0.75, 0.75, 0.75));

    let lead_th = body_h * 0.07;

    let lead_step_len = lead_len * 0.15;
    let mut lead_step_th = lead_th * 2.00;
    let lead_step_th_max = body_h * 0.30;
    if lead_step_th > lead_step_th_max {
        lead_step_th = lead_step_th_max;
    }

    let offsets: Vec<f64> = if pin_count == 3 {
        let mut pitch = (pitch_3lead_mm / body_h_mm) * body_h;
        if pitch <= 0.0 {
            pitch = body_h * 0.18;
        }
        compute_offsets(3, pitch)
    } else {
        // Four leads sit as an isolated pin 1 below a tight group of
        // three, with the group's lowest lead on the centre line.
        let mut pitch_group = (pitch_group_mm / body_h_mm) * body_h;
        if pitch_group <= 0.0 {
            pitch_group = body_h * 0.10;
        }

        let mut group_gap = (group_gap_mm / body_h_mm) * body_h;
        if group_gap < pitch_group * 0.5 {
            group_gap = pitch_group * 0.5;
        }

        vec![
            -group_gap,
            0.0,
            pitch_group,
            pitch_group * 2.0,
        ]
    };

    for &off in &offsets {
        let regular_y = cy + off - lead_th * 0.5;
        let step_y = cy + off - lead_step_th * 0.5;

        canvas.rect(
            Rect::new(lead_x, step_y, lead_step_len, lead_step_th),
            PaintMode::Fill,
        );

        let remaining_len = (lead_len - lead_step_len).max(0.0);
        canvas.rect(
            Rect::new(lead_x + lead_step_len, regular_y, remaining_len, lead_th),
            PaintMode::Fill,
        );
    }

    let fs = (rect.height * 0.20).max(rect.height * 0.10);

    canvas.set_font(Font::Sans, fs);
    canvas.set_fill_color(Color::BLACK);

    let label_pad = fs * 0.35;
    let label_x = lead_x + lead_len + draw_h * 0.15;

    let label_y_adjust: Vec<f64> = if pin_count == 4 {
        vec![-label_pad, -label_pad, 0.0, label_pad]
    } else {
        let label_mid = (offsets.len() as f64 - 1.0) / 2.0;
        (0..offsets.len())
            .map(|j| {
                let rel = j as f64 - label_mid;
                if rel < 0.0 {
                    -label_pad
                } else if rel > 0.0 {
                    label_pad
                } else {
                    0.0
                }
            })
            .collect()
    };

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
