//! TO-220 power package in side view: bright (or insulated) mounting
//! tab with hole, moulded body, stepped leads out to the right.

use glam::DVec2;

use crate::canvas::{Canvas, Font, PaintMode, TextAlign};
use crate::device::DeviceSpec;
use crate::resolve::ResolvedPackage;
use crate::types::{scale_to_fit, Color, Rect};

use super::helpers::{compute_offsets, default_numeric_labels, device_pin_labels};
use super::DrawOutline;

/// TO-220 tab package and its lead-count variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct To220Tab;

impl DrawOutline for To220Tab {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        pkg: &ResolvedPackage,
        device: Option<&DeviceSpec>,
    ) {
        draw_to220(canvas, rect, pkg, device);
    }
}

fn draw_to220(
    canvas: &mut dyn Canvas,
    rect: Rect,
    pkg: &ResolvedPackage,
    device: Option<&DeviceSpec>,
) {
    let pin_count = pkg.int_or("pin_count", 3).max(1) as usize;

    let labels =
        device_pin_labels(pkg, device).unwrap_or_else(|| default_numeric_labels(pin_count));

    let tab_mm = pkg.num_or("tab_mm", 6.5);
    let body_mm = pkg.num_or("body_mm", 9.5);
    let lead_mm = pkg.num_or("lead_mm", 11.0);
    let width_mm = pkg.num_or("width_mm", 10.0);

    let tab_finish = pkg.text_or("tab_finish", "metallic").to_lowercase();

    let total_mm = tab_mm + body_mm + lead_mm;
    if total_mm <= 0.0 || width_mm <= 0.0 {
        return;
    }

    let (draw_w, draw_h) = scale_to_fit(total_mm, width_mm, 2.0, &rect);

    let label_margin_fraction = 0.15;
    let cx = rect.left + (rect.width * (1.0 - label_margin_fraction)) * 0.5;
    let cy = rect.bottom + rect.height * 0.50;

    let x0 = cx - draw_w * 0.5;
    let y0 = cy - draw_h * 0.5;

    let tab_w = draw_w * (tab_mm / total_mm);
    let body_w = draw_w * (body_mm / total_mm);
    let lead_w = draw_w * (lead_mm / total_mm);

    let tab_x = x0;
    if tab_finish == "insulated" {
        canvas.set_fill_color(Color::rgb(0.12, 0.12, 0.12));
    } else {
        canvas.set_fill_color(Color::rgb(0.82, 0.82, 0.82));
    }
    canvas.rect(Rect::new(tab_x, y0, tab_w, draw_h), PaintMode::Fill);

    let hole_r = draw_h * 0.22;
    canvas.set_fill_color(Color::WHITE);
    canvas.circle(DVec2::new(tab_x + tab_w * 0.5, cy), hole_r, PaintMode::Fill);

    let body_x = tab_x + tab_w;
    canvas.set_fill_color(Color::rgb(0.12, 0.12, 0.12));
    canvas.rect(Rect::new(body_x, y0, body_w, draw_h), PaintMode::Fill);

    canvas.set_fill_color(Color::rgb(0.75, 0.75, 0.75));

    let pitch = draw_h * 0.30;
    let lead_th = draw_h * 0.08;

    let lead_step_len = lead_w * 0.20;
    let mut lead_step_th = lead_th * 1.50;
    let lead_step_th_max = pitch * 0.75;
    if lead_step_th > lead_step_th_max {
        lead_step_th = lead_step_th_max;
    }

    // Two-lead parts keep the three-lead footprint with the centre lead
    // cropped to a stub.
    let draw_pin_count = if pin_count == 2 { 3 } else { pin_count };

    let offsets = compute_offsets(draw_pin_count, pitch);
    let first_pin_x = body_x + body_w;

    for (i, &off) in offsets.iter().enumerate() {
        let regular_y = cy + off - lead_th * 0.5;
        let step_y = cy + off - lead_step_th * 0.5;

        let is_stub_pin = pin_count == 2 && i == 1;

        canvas.rect(
            Rect::new(first_pin_x, step_y, lead_step_len, lead_step_th),
            PaintMode::Fill,
        );

        if !is_stub_pin {
            let remaining_len = (lead_w - lead_step_len).max(0.0);
            canvas.rect(
                Rect::new(first_pin_x + lead_step_len, regular_y, remaining_len, lead_th),
                PaintMode::Fill,
            );
        }
    }

    let mut fs = if pin_count <= 4 {
        rect.height * 0.20
    } else {
        rect.height * (0.20 - 0.03 * (pin_count as f64 - 4.0))
    };
    fs = fs.max(rect.height * 0.10);

    canvas.set_font(Font::Sans, fs);
    canvas.set_fill_color(Color::BLACK);

    let label_pad = fs * 0.35;
    let label_mid = (draw_pin_count as f64 - 1.0) / 2.0;

    let label_y_adjust: Vec<f64> = (0..draw_pin_count)
        .map(|i| {
            let rel = i as f64 - label_mid;
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

    let label_indices: Vec<usize> = if pin_count == 2 {
        vec![0, 2]
    } else {
        (0..draw_pin_count).collect()
    };

    for (i, &idx) in label_indices.iter().enumerate() {
        let Some(label) = labels.get(i) else {
            break;
        };

        let py = cy + offsets[idx] + label_y_adjust[idx];
        canvas.text(
            DVec2::new(label_x, py - fs * 0.40),
            &label.to_uppercase(),
            TextAlign::Left,
        );
    }

    canvas.set_fill_color(Color::BLACK);
    canvas.set_stroke_color(Color::BLACK);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayList, DrawOp};
    use crate::resolve::resolve;

    fn rects(list: &DisplayList) -> usize {
        list.ops().iter().filter(|op| matches!(op, DrawOp::Rect { .. })).count()
    }

    fn texts(list: &DisplayList) -> Vec<String> {
        list.ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    // ==================== TO-220 drawing tests ====================

    #[test]
    fn standard_part_draws_tab_body_and_three_leads() {
        let pkg = resolve("TO-220").unwrap();
        assert_eq!(pkg.canonical_id, "TO-220-AB");

        let mut list = DisplayList::new();
        To220Tab.draw(&mut list, Rect::new(0.0, 0.0, 60.0, 30.0), &pkg, None);

        // Tab, body, step and tail per lead.
        assert_eq!(rects(&list), 2 + 3 * 2);
        assert_eq!(texts(&list), vec!["1", "2", "3"]);
    }

    #[test]
    fn two_lead_variant_draws_a_cropped_centre_stub() {
        let pkg = resolve("TO-220-AC").unwrap();
        assert_eq!(pkg.int_or("pin_count", 0), 2);

        let mut list = DisplayList::new();
        To220Tab.draw(&mut list, Rect::new(0.0, 0.0, 60.0, 30.0), &pkg, None);

        // Three steps but only two tails.
        assert_eq!(rects(&list), 2 + 3 + 2);
        // Outer positions get the two labels.
        assert_eq!(texts(&list), vec!["1", "2"]);
    }

    #[test]
    fn five_lead_variant_prints_its_long_id() {
        let pkg = resolve("TO-220-5").unwrap();
        assert_eq!(pkg.print_id, "TO-220-AB-5L");
        assert_eq!(pkg.int_or("pin_count", 0), 5);

        let mut list = DisplayList::new();
        To220Tab.draw(&mut list, Rect::new(0.0, 0.0, 60.0, 30.0), &pkg, None);
        assert_eq!(rects(&list), 2 + 5 * 2);
        assert_eq!(texts(&list), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn fullpack_qualifier_switches_the_tab_to_insulated() {
        let pkg = resolve("TO-220@fullpack").unwrap();
        assert_eq!(pkg.text("tab_finish"), Some("insulated"));

        let mut list = DisplayList::new();
        To220Tab.draw(&mut list, Rect::new(0.0, 0.0, 60.0, 30.0), &pkg, None);

        let bright = Color::rgb(0.82, 0.82, 0.82);
        assert!(!list
            .ops()
            .iter()
            .any(|op| matches!(op, DrawOp::FillColor(c) if *c == bright)));
    }

    #[test]
    fn device_labels_override_numbers() {
        let pkg = resolve("TO-220").unwrap();
        let device = DeviceSpec {
            pin_config: Some("G D S".to_owned()),
            ..Default::default()
        };
        let mut list = DisplayList::new();
        To220Tab.draw(&mut list, Rect::new(0.0, 0.0, 60.0, 30.0), &pkg, Some(&device));
        assert_eq!(texts(&list), vec!["G", "D", "S"]);
    }
}
