//! Surface-mount packages seen from above: gull-wing or flat pads
//! around a moulded body, pin 1 marked with a dot.

use glam::DVec2;

use crate::canvas::{Canvas, Font, PaintMode, TextAlign};
use crate::device::DeviceSpec;
use crate::resolve::ResolvedPackage;
use crate::types::{scale_to_fit, Color, Rect};

use super::helpers::device_pin_labels;
use super::DrawOutline;

/// Two-pad SMD diode outline (DO-214, SOD-123 class).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Smd2Pad;

/// Three-lead SMD outline (SOT-23, SOT-323 class).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Smd3Lead;

/// Four-pad SMD outline with a configurable row split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Smd4Lead;

impl DrawOutline for Smd2Pad {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        pkg: &ResolvedPackage,
        device: Option<&DeviceSpec>,
    ) {
        draw_smd2(canvas, rect, pkg, device);
    }
}

impl DrawOutline for Smd3Lead {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        pkg: &ResolvedPackage,
        device: Option<&DeviceSpec>,
    ) {
        draw_smd3(canvas, rect, pkg, device);
    }
}

impl DrawOutline for Smd4Lead {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        pkg: &ResolvedPackage,
        device: Option<&DeviceSpec>,
    ) {
        draw_smd4(canvas, rect, pkg, device);
    }
}

fn labels_or<const N: usize>(
    pkg: &ResolvedPackage,
    device: Option<&DeviceSpec>,
    fallback: [&str; N],
) -> Vec<String> {
    device_pin_labels(pkg, device)
        .unwrap_or_else(|| fallback.map(str::to_owned).to_vec())
}

/// Body rectangle inset by its own stroke, plus the pin-1 dot in the
/// upper left corner.
fn draw_smd_body(canvas: &mut dyn Canvas, cx: f64, cy: f64, body_w: f64, body_h: f64) {
    let stroke_width = 1.0;
    let inner_w = (body_w - stroke_width).max(0.0);
    let inner_h = (body_h - stroke_width).max(0.0);

    let inner_x = cx - inner_w * 0.5;
    let inner_y = cy - inner_h * 0.5;

    canvas.set_line_width(stroke_width);
    canvas.set_fill_color(Color::rgb(0.12, 0.12, 0.12));
    canvas.set_stroke_color(Color::rgb(0.2, 0.2, 0.2));
    canvas.rect(Rect::new(inner_x, inner_y, inner_w, inner_h), PaintMode::FillStroke);

    let dot_r = inner_w.min(inner_h) * 0.07;
    let dot = DVec2::new(inner_x + dot_r * 1.8, inner_y + inner_h - dot_r * 1.8);
    canvas.set_fill_color(Color::rgb(0.60, 0.60, 0.60));
    canvas.circle(dot, dot_r, PaintMode::Fill);
}

fn draw_smd2(
    canvas: &mut dyn Canvas,
    rect: Rect,
    pkg: &ResolvedPackage,
    device: Option<&DeviceSpec>,
) {
    let final_labels = labels_or(pkg, device, ["A", "K"]);

    let cx = rect.left + rect.width * 0.5;
    let cy = rect.bottom + rect.height * 0.5;

    let body_width_mm = pkg.num_or("body_w", 0.0);
    let body_height_mm = pkg.num_or("body_h", 0.0);
    let pad_width_mm = pkg.num_or("pad_w", 0.0);
    let pad_height_mm = pkg.num_or("pad_h", 0.0);

    if body_width_mm <= 0.0 || body_height_mm <= 0.0 {
        return;
    }
    if pad_width_mm <= 0.0 || pad_height_mm <= 0.0 {
        return;
    }

    let (body_w, body_h) = scale_to_fit(body_width_mm, body_height_mm, 2.0, &rect);

    let scale_x = body_w / body_width_mm;
    let scale_y = body_h / body_height_mm;

    let pad_w = pad_width_mm * scale_x;
    let pad_h = pad_height_mm * scale_y;

    let body_x = cx - body_w * 0.5;
    let body_y = cy - body_h * 0.5;

    let left_pad_x = body_x - pad_w;
    let right_pad_x = body_x + body_w;
    let pad_y = cy - pad_h * 0.5;

    canvas.set_fill_color(Color::rgb(0.75, 0.75, 0.75));
    canvas.rect(Rect::new(left_pad_x, pad_y, pad_w, pad_h), PaintMode::Fill);
    canvas.rect(Rect::new(right_pad_x, pad_y, pad_w, pad_h), PaintMode::Fill);

    canvas.set_fill_color(Color::rgb(0.12, 0.12, 0.12));
    canvas.set_stroke_color(Color::rgb(0.2, 0.2, 0.2));
    canvas.rect(Rect::new(body_x, body_y, body_w, body_h), PaintMode::FillStroke);

    // Cathode stripe at the banded end.
    let stripe_w = body_w * 0.15;
    canvas.set_fill_color(Color::rgb(0.60, 0.60, 0.60));
    canvas.rect(
        Rect::new(body_x + body_w - stripe_w, body_y, stripe_w, body_h),
        PaintMode::Fill,
    );

    let fs = rect.height * 0.25;
    canvas.set_font(Font::Sans, fs);
    canvas.set_fill_color(Color::BLACK);

    let a_label = final_labels.first().map(|l| l.to_uppercase()).unwrap_or_else(|| "A".into());
    let k_label = final_labels.get(1).map(|l| l.to_uppercase()).unwrap_or_else(|| "K".into());

    let text_y = pad_y + pad_h * 0.5 - fs * 0.35;
    let gap = pad_w * 0.60;

    canvas.text(DVec2::new(left_pad_x - gap, text_y), &a_label, TextAlign::Right);
    canvas.text(DVec2::new(right_pad_x + pad_w + gap, text_y), &k_label, TextAlign::Left);

    canvas.set_fill_color(Color::BLACK);
    canvas.set_stroke_color(Color::BLACK);
}

fn draw_smd3(
    canvas: &mut dyn Canvas,
    rect: Rect,
    pkg: &ResolvedPackage,
    device: Option<&DeviceSpec>,
) {
    let final_labels = labels_or(pkg, device, ["1", "2", "3"]);

    let cx = rect.left + rect.width * 0.5;
    let cy = rect.bottom + rect.height * 0.5;

    let body_width_mm = pkg.num_or("body_w", 2.9);
    let body_height_mm = pkg.num_or("body_h", 1.3);

    let bottom_pad_width_mm = pkg.num_or("pad2_w", 0.41);
    let bottom_pad_height_mm = pkg.num_or("pad2_h", 0.6);
    let bottom_pitch_mm = pkg.num_or("pad2_pitch", 1.9);

    let top_pad_width_mm = pkg.num_or("pad1_w", 0.41);
    let top_pad_height_mm = pkg.num_or("pad1_h", 0.6);

    if body_width_mm <= 0.0 || body_height_mm <= 0.0 {
        return;
    }
    if bottom_pad_width_mm <= 0.0 || bottom_pad_height_mm <= 0.0 {
        return;
    }
    if top_pad_width_mm <= 0.0 || top_pad_height_mm <= 0.0 {
        return;
    }
    if bottom_pitch_mm <= 0.0 {
        return;
    }

    // Small bodies get a bit more magnification than the power parts.
    let (body_w, body_h) = scale_to_fit(body_width_mm, body_height_mm, 3.0, &rect);

    let scale_x = body_w / body_width_mm;
    let scale_y = body_h / body_height_mm;

    let bottom_pad_w = bottom_pad_width_mm * scale_x;
    let bottom_pad_h = bottom_pad_height_mm * scale_y;
    let bottom_pitch = bottom_pitch_mm * scale_x;

    let top_pad_w = top_pad_width_mm * scale_x;
    let top_pad_h = top_pad_height_mm * scale_y;

    let body_y = cy - body_h * 0.5;

    let bottom_row_y = body_y - bottom_pad_h;
    let top_row_y = body_y + body_h;

    let pad_1_cx = cx - bottom_pitch * 0.5;
    let pad_2_cx = cx + bottom_pitch * 0.5;
    let pad_3_cx = cx;

    canvas.set_fill_color(Color::rgb(0.75, 0.75, 0.75));
    canvas.rect(
        Rect::new(pad_1_cx - bottom_pad_w * 0.5, bottom_row_y, bottom_pad_w, bottom_pad_h),
        PaintMode::Fill,
    );
    canvas.rect(
        Rect::new(pad_2_cx - bottom_pad_w * 0.5, bottom_row_y, bottom_pad_w, bottom_pad_h),
        PaintMode::Fill,
    );
    canvas.rect(
        Rect::new(pad_3_cx - top_pad_w * 0.5, top_row_y, top_pad_w, top_pad_h),
        PaintMode::Fill,
    );

    draw_smd_body(canvas, cx, cy, body_w, body_h);

    let fs = rect.height * 0.25;
    canvas.set_font(Font::Sans, fs);
    canvas.set_fill_color(Color::BLACK);

    let label = |i: usize, fallback: &str| {
        final_labels
            .get(i)
            .map(|l| l.to_uppercase())
            .unwrap_or_else(|| fallback.to_owned())
    };

    let bottom_label_y = bottom_row_y - fs * 0.90;
    let top_label_y = top_row_y + top_pad_h + fs * 0.10;

    canvas.text(DVec2::new(pad_1_cx, bottom_label_y), &label(0, "1"), TextAlign::Center);
    canvas.text(DVec2::new(pad_2_cx, bottom_label_y), &label(1, "2"), TextAlign::Center);
    canvas.text(DVec2::new(pad_3_cx, top_label_y), &label(2, "3"), TextAlign::Center);

    canvas.set_fill_color(Color::BLACK);
    canvas.set_stroke_color(Color::BLACK);
}

fn draw_smd4(
    canvas: &mut dyn Canvas,
    rect: Rect,
    pkg: &ResolvedPackage,
    device: Option<&DeviceSpec>,
) {
    let final_labels = labels_or(pkg, device, ["1", "2", "3", "4"]);

    let row_split = match pkg.text_or("row_split", "1_3").trim().to_lowercase().as_str() {
        "2_2" => "2_2",
        _ => "1_3",
    };

    let body_width_mm = pkg.num_or("body_w", 0.0);
    let body_height_mm = pkg.num_or("body_h", 0.0);

    let bottom_pad_width_mm = pkg.num_or("padb_w", 0.0);
    let bottom_pad_height_mm = pkg.num_or("padb_h", 0.0);
    let bottom_pitch_mm = pkg.num_or("padb_pitch", 0.0);

    let top_pad_width_mm = pkg.num_or("padt_w", 0.0);
    let top_pad_height_mm = pkg.num_or("padt_h", 0.0);
    let top_pitch_mm = pkg.num_or("padt_pitch", bottom_pitch_mm);

    if body_width_mm <= 0.0 || body_height_mm <= 0.0 {
        return;
    }
    if bottom_pad_width_mm <= 0.0 || bottom_pad_height_mm <= 0.0 || bottom_pitch_mm <= 0.0 {
        return;
    }
    if top_pad_width_mm <= 0.0 || top_pad_height_mm <= 0.0 {
        return;
    }
    if row_split == "2_2" && top_pitch_mm <= 0.0 {
        return;
    }

    let cx = rect.left + rect.width * 0.5;
    let cy = rect.bottom + rect.height * 0.5;

    let (body_w, body_h) = scale_to_fit(body_width_mm, body_height_mm, 2.0, &rect);

    let scale_x = body_w / body_width_mm;
    let scale_y = body_h / body_height_mm;

    let bottom_pad_w = bottom_pad_width_mm * scale_x;
    let bottom_pad_h = bottom_pad_height_mm * scale_y;
    let bottom_pitch = bottom_pitch_mm * scale_x;

    let top_pad_w = top_pad_width_mm * scale_x;
    let top_pad_h = top_pad_height_mm * scale_y;
    let top_pitch = top_pitch_mm * scale_x;

    let body_y = cy - body_h * 0.5;

    let bottom_row_y = body_y - bottom_pad_h;
    let top_row_y = body_y + body_h;

    let mut pad_centres: Vec<DVec2> = Vec::with_capacity(4);
    let mut pad_sizes: Vec<(f64, f64)> = Vec::with_capacity(4);

    if row_split == "1_3" {
        for x in [cx - bottom_pitch, cx, cx + bottom_pitch] {
            pad_centres.push(DVec2::new(x, bottom_row_y + bottom_pad_h * 0.5));
            pad_sizes.push((bottom_pad_w, bottom_pad_h));
        }
        pad_centres.push(DVec2::new(cx, top_row_y + top_pad_h * 0.5));
        pad_sizes.push((top_pad_w, top_pad_h));
    } else {
        for x in [cx - bottom_pitch * 0.5, cx + bottom_pitch * 0.5] {
            pad_centres.push(DVec2::new(x, bottom_row_y + bottom_pad_h * 0.5));
            pad_sizes.push((bottom_pad_w, bottom_pad_h));
        }
        for x in [cx - top_pitch * 0.5, cx + top_pitch * 0.5] {
            pad_centres.push(DVec2::new(x, top_row_y + top_pad_h * 0.5));
            pad_sizes.push((top_pad_w, top_pad_h));
        }
    }

    canvas.set_fill_color(Color::rgb(0.75, 0.75, 0.75));
    for (center, &(w, h)) in pad_centres.iter().zip(&pad_sizes) {
        canvas.rect(
            Rect::new(center.x - w * 0.5, center.y - h * 0.5, w, h),
            PaintMode::Fill,
        );
    }

    draw_smd_body(canvas, cx, cy, body_w, body_h);

    let fs = rect.height * 0.25;
    canvas.set_font(Font::Sans, fs);
    canvas.set_fill_color(Color::BLACK);

    let label_gap = fs * 0.75;

    for (i, (center, &(_, h))) in pad_centres.iter().zip(&pad_sizes).enumerate() {
        let label = match final_labels.get(i) {
            Some(l) => l.to_uppercase(),
            None => (i + 1).to_string(),
        };

        let is_top = if row_split == "1_3" { i == 3 } else { i >= 2 };
        let label_y = if is_top {
            center.y + h * 0.5 + label_gap
        } else {
            center.y - h * 0.5 - label_gap
        };

        canvas.text(DVec2::new(center.x, label_y), &label, TextAlign::Center);
    }

    canvas.set_fill_color(Color::BLACK);
    canvas.set_stroke_color(Color::BLACK);
}
