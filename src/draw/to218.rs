//! TO-218 power package (3 or 5 leads), drawn in side view: chamfered
//! mounting tab, moulded body with edge scallops, stepped leads.

use glam::DVec2;

use crate::canvas::{Canvas, Font, PaintMode, Path, TextAlign};
use crate::device::DeviceSpec;
use crate::resolve::ResolvedPackage;
use crate::types::{scale_to_fit, Color, Rect};

use super::helpers::{compute_offsets, default_numeric_labels, device_pin_labels};
use super::DrawOutline;

/// TO-218 flat-lead power tab package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct To218Tab;

impl DrawOutline for To218Tab {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        pkg: &ResolvedPackage,
        device: Option<&DeviceSpec>,
    ) {
        draw_to218(canvas, rect, pkg, device);
    }
}

/// Tab outline with both left corners cut at 45 degrees.
fn chamfered_tab_path(x: f64, y: f64, w: f64, h: f64, chamfer: f64) -> Path {
    let c = chamfer.max(0.0).min(w * 0.45).min(h * 0.45);

    let mut path = Path::new();
    path.move_to(DVec2::new(x + c, y))
        .line_to(DVec2::new(x + w, y))
        .line_to(DVec2::new(x + w, y + h))
        .line_to(DVec2::new(x + c, y + h))
        .line_to(DVec2::new(x, y + h - c))
        .line_to(DVec2::new(x, y + c))
        .close();
    path
}

/// Fill the part of a circle that falls inside the body, leaving an
/// internal semicircle notch on one edge.
fn draw_internal_scallop(canvas: &mut dyn Canvas, cx: f64, edge_y: f64, r: f64, body: Rect) {
    canvas.save_state();

    let mut circle = Path::new();
    circle.arc(DVec2::new(cx, edge_y), r, 0.0, 360.0).close();
    canvas.clip(&circle);

    let clip_y = if edge_y > body.bottom + body.height * 0.5 {
        edge_y - r
    } else {
        edge_y
    };
    canvas.rect(Rect::new(body.left, clip_y, body.width, r), PaintMode::Fill);

    canvas.restore_state();
}

fn draw_to218(
    canvas: &mut dyn Canvas,
    rect: Rect,
    pkg: &ResolvedPackage,
    device: Option<&DeviceSpec>,
) {
    let pin_count = match pkg.int_or("pin_count", 3) {
        5 => 5_usize,
        _ => 3,
    };

    let labels =
        device_pin_labels(pkg, device).unwrap_or_else(|| default_numeric_labels(pin_count));

    let tab_mm = pkg.num_or("tab_mm", 8.0);
    let body_mm = pkg.num_or("body_mm", 12.5);
    let lead_mm = pkg.num_or("lead_mm", 11.9);
    let width_mm = pkg.num_or("width_mm", 15.0);
    let hole_d_mm = pkg.num_or("hole_d", 4.0);

    let tab_finish = pkg.text_or("tab_finish", "metallic").to_lowercase();

    let scallop_d_mm = pkg.num_or("scallop_d_mm", 4.5);
    let scallop_x_mm = pkg.num_or("scallop_x_mm", 8.0);

    let total_mm = tab_mm + body_mm + lead_mm;
    if total_mm <= 0.0 || width_mm <= 0.0 {
        return;
    }

    let (draw_w, draw_h) = scale_to_fit(total_mm, width_mm, 2.0, &rect);

    // Body sits slightly left of centre so lead labels get a margin.
    let label_margin_fraction = 0.15;
    let cx = rect.left + (rect.width * (1.0 - label_margin_fraction)) * 0.5;
    let cy = rect.bottom + rect.height * 0.50;

    let x0 = cx - draw_w * 0.5;
    let y0 = cy - draw_h * 0.5;

    let tab_w = draw_w * (tab_mm / total_mm);
    let body_w = draw_w * (body_mm / total_mm);
    let lead_w = draw_w * (lead_mm / total_mm);

    let tab_x = x0;
    let body_x = tab_x + tab_w;
    let first_pin_x = body_x + body_w;

    let chamfer = draw_h * 0.12;

    if tab_finish == "insulated" {
        canvas.set_fill_color(Color::rgb(0.12, 0.12, 0.12));
    } else {
        canvas.set_fill_color(Color::rgb(0.82, 0.82, 0.82));
    }
    let tab = chamfered_tab_path(tab_x, y0, tab_w, draw_h, chamfer);
    canvas.path(&tab, PaintMode::Fill);

    let hole_r = (hole_d_mm / width_mm) * draw_h * 0.5;
    canvas.set_fill_color(Color::WHITE);
    canvas.circle(DVec2::new(tab_x + tab_w * 0.5, cy), hole_r, PaintMode::Fill);

    canvas.set_fill_color(Color::rgb(0.12, 0.12, 0.12));
    canvas.rect(Rect::new(body_x, y0, body_w, draw_h), PaintMode::Fill);

    let scallop_r = (scallop_d_mm / width_mm) * draw_h * 0.5;
    let denom = if body_mm > 0.0 { body_mm } else { 1.0 };
    let scallop_dx = ((scallop_x_mm / denom) * body_w)
        .max(body_w * 0.10)
        .min(body_w * 0.90);

    let body = Rect::new(body_x, y0, body_w, draw_h);
    canvas.set_fill_color(Color::rgb(0.25, 0.25, 0.25));
    for edge_y in [y0 + draw_h, y0] {
        draw_internal_scallop(canvas, body_x + scallop_dx, edge_y, scallop_r, body);
    }

    canvas.set_fill_color(Color::rgb(0.75, 0.75, 0.75));

    let lead_th = draw_h * 0.07;

    // A short wider step where the lead leaves the moulding, then the
    // regular lead out to the tip.
    let lead_step_len = lead_w * 0.20;
    let mut lead_step_th = lead_th * 1.50;

    let pitch_mm = if pin_count == 3 {
        pkg.num_or("pin_pitch_3_mm", 5.75)
    } else {
        pkg.num_or("pin_pitch_5_mm", 3.0)
    };

    let mut pitch = (pitch_mm / width_mm) * draw_h;
    if pitch <= 0.0 {
        pitch = draw_h * if pin_count == 3 { 0.18 } else { 0.10 };
    }

    let lead_step_th_max = pitch * 0.75;
    if lead_step_th > lead_step_th_max {
        lead_step_th = lead_step_th_max;
    }

    let offsets = compute_offsets(pin_count, pitch);

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

    let mut fs = if pin_count <= 4 {
        rect.height * 0.20
    } else {
        rect.height * (0.20 - 0.03 * (pin_count as f64 - 4.0))
    };
    fs = fs.max(rect.height * 0.10);

    canvas.set_font(Font::Sans, fs);
    canvas.set_fill_color(Color::BLACK);

    // Nudge outer labels away from the centre line so they track their
    // leads visually.
    let label_pad = fs * 0.35;
    let label_mid = (pin_count as f64 - 1.0) / 2.0;

    let label_x = first_pin_x + lead_w + draw_h * 0.15;

    for (i, &off) in offsets.iter().enumerate() {
        let Some(label) = labels.get(i) else {
            break;
        };

        let rel = i as f64 - label_mid;
        let adj = if rel < 0.0 {
            -label_pad
        } else if rel > 0.0 {
            label_pad
        } else {
            0.0
        };

        let py = cy + off + adj;
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

    fn rect_count(list: &DisplayList) -> usize {
        list.ops().iter().filter(|op| matches!(op, DrawOp::Rect { .. })).count()
    }

    // ==================== TO-218 drawing tests ====================

    #[test]
    fn three_lead_package_draws_body_scallops_and_leads() {
        let pkg = resolve("TO-218").unwrap();
        let mut list = DisplayList::new();
        To218Tab.draw(&mut list, Rect::new(0.0, 0.0, 60.0, 30.0), &pkg, None);

        assert!(list.state_balanced());

        // Body, two scallop fills, step and regular rect per lead.
        assert_eq!(rect_count(&list), 1 + 2 + 3 * 2);

        let texts: Vec<_> = list
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["1", "2", "3"]);
    }

    #[test]
    fn five_lead_variant_widens_the_lead_fan() {
        let pkg = resolve("TO-218-5").unwrap();
        assert_eq!(pkg.print_id, "TO-218-5");

        let mut list = DisplayList::new();
        To218Tab.draw(&mut list, Rect::new(0.0, 0.0, 60.0, 30.0), &pkg, None);
        assert_eq!(rect_count(&list), 1 + 2 + 5 * 2);
    }

    #[test]
    fn insulated_qualifier_darkens_the_tab() {
        let metallic = resolve("TO-218").unwrap();
        let insulated = resolve("TO-218@F").unwrap();
        assert_eq!(insulated.text("tab_finish"), Some("insulated"));

        let bright = Color::rgb(0.82, 0.82, 0.82);
        let has_bright_tab = |pkg: &ResolvedPackage| {
            let mut list = DisplayList::new();
            To218Tab.draw(&mut list, Rect::new(0.0, 0.0, 60.0, 30.0), pkg, None);
            list.ops()
                .iter()
                .any(|op| matches!(op, DrawOp::FillColor(c) if *c == bright))
        };

        assert!(has_bright_tab(&metallic));
        assert!(!has_bright_tab(&insulated));
    }

    #[test]
    fn chamfer_is_limited_on_small_tabs() {
        let path = chamfered_tab_path(0.0, 0.0, 10.0, 2.0, 5.0);
        // Chamfer capped at 45% of the short side.
        let Some(crate::canvas::PathEl::MoveTo(p)) = path.elements().first() else {
            panic!("expected MoveTo");
        };
        assert!((p.x - 0.9).abs() < 1.0e-9);
    }
}
