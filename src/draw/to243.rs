//! TO-243 (SOT-89) surface-mount package seen from above: moulded body
//! with bottom pads and a wide collector tab on the top edge.
//!
//! Layouts: 3-pin is tab plus two bottom pads, 4-pin adds the middle
//! bottom pad, 6-pin puts pad-tab-pad on the top row.

use glam::DVec2;

use crate::canvas::{Canvas, Font, PaintMode, TextAlign};
use crate::device::DeviceSpec;
use crate::resolve::ResolvedPackage;
use crate::types::{scale_to_fit, Color, Rect};

use super::helpers::device_pin_labels;
use super::DrawOutline;

/// TO-243 (SOT-89) tabbed surface-mount package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct To243Tab;

impl DrawOutline for To243Tab {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        pkg: &ResolvedPackage,
        device: Option<&DeviceSpec>,
    ) {
        draw_to243(canvas, rect, pkg, device);
    }
}

struct Pad {
    center: DVec2,
    w: f64,
    h: f64,
}

fn draw_to243(
    canvas: &mut dyn Canvas,
    rect: Rect,
    pkg: &ResolvedPackage,
    device: Option<&DeviceSpec>,
) {
    let final_labels = device_pin_labels(pkg, device).unwrap_or_else(|| {
        ["1", "2", "3", "TAB"].map(str::to_owned).to_vec()
    });

    let pin_count = match pkg.int_or("pin_count", 4) {
        3 => 3_usize,
        6 => 6,
        _ => 4,
    };

    let cx = rect.left + rect.width * 0.5;
    let cy = rect.bottom + rect.height * 0.5;

    let body_width_mm = pkg.num_or("body_w", 4.5);
    let body_height_mm = pkg.num_or("body_h", 2.76);

    let bottom_pad_width_mm = pkg.num_or("padb_w", 0.4);
    let bottom_pad_height_mm = pkg.num_or("padb_h", 0.8);
    let bottom_pitch_mm = pkg.num_or("padb_pitch", 1.5);

    let top_tab_width_mm = pkg.num_or("tab_w", 1.6);
    let top_tab_height_mm = pkg.num_or("tab_h", 0.8);

    let top_side_pad_width_mm = pkg.num_or("padt_w", bottom_pad_width_mm);
    let top_side_pad_height_mm = pkg.num_or("padt_h", bottom_pad_height_mm);
    let top_pitch_mm = pkg.num_or("padt_pitch", bottom_pitch_mm);

    if body_width_mm <= 0.0 || body_height_mm <= 0.0 {
        return;
    }
    if bottom_pad_width_mm <= 0.0 || bottom_pad_height_mm <= 0.0 || bottom_pitch_mm <= 0.0 {
        return;
    }
    if top_tab_width_mm <= 0.0 || top_tab_height_mm <= 0.0 {
        return;
    }
    if pin_count == 6 && top_pitch_mm <= 0.0 {
        return;
    }

    let (body_w, body_h) = scale_to_fit(body_width_mm, body_height_mm, 2.0, &rect);

    let scale_x = body_w / body_width_mm;
    let scale_y = body_h / body_height_mm;

    let bottom_pad_w = bottom_pad_width_mm * scale_x;
    let bottom_pad_h = bottom_pad_height_mm * scale_y;
    let bottom_pitch = bottom_pitch_mm * scale_x;

    let top_tab_w = top_tab_width_mm * scale_x;
    let top_tab_h = top_tab_height_mm * scale_y;

    let top_side_pad_w = top_side_pad_width_mm * scale_x;
    let top_side_pad_h = top_side_pad_height_mm * scale_y;
    let top_pitch = top_pitch_mm * scale_x;

    let body_y = cy - body_h * 0.5;

    let bottom_row_y = body_y - bottom_pad_h;
    let top_row_y = body_y + body_h;

    let mut pads: Vec<Pad> = Vec::new();

    let bottom_centres_x: Vec<f64> = if pin_count == 3 {
        vec![cx - bottom_pitch, cx + bottom_pitch]
    } else {
        vec![cx - bottom_pitch, cx, cx + bottom_pitch]
    };

    for &x in &bottom_centres_x {
        pads.push(Pad {
            center: DVec2::new(x, bottom_row_y + bottom_pad_h * 0.5),
            w: bottom_pad_w,
            h: bottom_pad_h,
        });
    }

    if pin_count == 6 {
        pads.push(Pad {
            center: DVec2::new(cx - top_pitch, top_row_y + top_side_pad_h * 0.5),
            w: top_side_pad_w,
            h: top_side_pad_h,
        });
        pads.push(Pad {
            center: DVec2::new(cx, top_row_y + top_tab_h * 0.5),
            w: top_tab_w,
            h: top_tab_h,
        });
        pads.push(Pad {
            center: DVec2::new(cx + top_pitch, top_row_y + top_side_pad_h * 0.5),
            w: top_side_pad_w,
            h: top_side_pad_h,
        });
    } else {
        pads.push(Pad {
            center: DVec2::new(cx, top_row_y + top_tab_h * 0.5),
            w: top_tab_w,
            h: top_tab_h,
        });
    }

    canvas.set_fill_color(Color::rgb(0.75, 0.75, 0.75));
    for pad in &pads {
        canvas.rect(
            Rect::new(pad.center.x - pad.w * 0.5, pad.center.y - pad.h * 0.5, pad.w, pad.h),
            PaintMode::Fill,
        );
    }

    // Body drawn inset by the stroke so its outline stays inside the
    // physical footprint.
    let stroke_width = 1.0;
    let body_inner_w = (body_w - stroke_width).max(0.0);
    let body_inner_h = (body_h - stroke_width).max(0.0);

    let body_inner_x = cx - body_inner_w * 0.5;
    let body_inner_y = cy - body_inner_h * 0.5;

    canvas.set_line_width(stroke_width);
    canvas.set_fill_color(Color::rgb(0.12, 0.12, 0.12));
    canvas.set_stroke_color(Color::rgb(0.2, 0.2, 0.2));
    canvas.rect(
        Rect::new(body_inner_x, body_inner_y, body_inner_w, body_inner_h),
        PaintMode::FillStroke,
    );

    let dot_r = body_inner_w.min(body_inner_h) * 0.07;
    let dot = DVec2::new(
        body_inner_x + dot_r * 1.8,
        body_inner_y + body_inner_h - dot_r * 1.8,
    );
    canvas.set_fill_color(Color::rgb(0.60, 0.60, 0.60));
    canvas.circle(dot, dot_r, PaintMode::Fill);

    let fs = rect.height * 0.25;
    canvas.set_font(Font::Sans, fs);
    canvas.set_fill_color(Color::BLACK);

    let label_gap = fs * 0.75;
    let outward_nudge = fs * 0.55;
    let label_baseline_offset = fs * 0.35;

    for (i, pad) in pads.iter().enumerate() {
        let label = match final_labels.get(i) {
            Some(l) => l.to_uppercase(),
            None => (i + 1).to_string(),
        };

        let delta_x = if pad.center.x < cx {
            -outward_nudge.min(pad.w * 0.9)
        } else if pad.center.x > cx {
            outward_nudge.min(pad.w * 0.9)
        } else {
            0.0
        };

        let is_top = pad.center.y > cy;
        let label_y = if is_top {
            pad.center.y + pad.h * 0.5 + label_gap
        } else {
            pad.center.y - pad.h * 0.5 - label_gap
        };

        canvas.text(
            DVec2::new(pad.center.x + delta_x, label_y - label_baseline_offset),
            &label,
            TextAlign::Center,
        );
    }

    canvas.set_fill_color(Color::BLACK);
    canvas.set_stroke_color(Color::BLACK);
}
