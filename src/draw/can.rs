//! TO-205 and TO-206 metal can packages (TO-39, TO-18 and relatives),
//! drawn as the underside view: round header, index tab at the lower
//! left, and leads on a pin circle.

use glam::DVec2;

use crate::canvas::{Canvas, Font, PaintMode};
use crate::device::DeviceSpec;
use crate::resolve::ResolvedPackage;
use crate::types::{scale_to_fit, Color, Rect};

use super::helpers::{
    clamp, default_numeric_labels, device_pin_labels, draw_pin_with_ring,
    draw_radial_pin_label, ring_angles_deg, PIN_CORE_GRAY,
};
use super::DrawOutline;

/// Header dimensions a can drawer falls back to when the catalogue does
/// not override them.
struct CanDims {
    body_d_mm: f64,
    tab_w_mm: f64,
    tab_h_mm: f64,
    pin_ring_radius_mm: f64,
}

/// TO-39 class header: 9.4 mm flange, leads on a 2.54 mm radius circle.
const TO205_DIMS: CanDims = CanDims {
    body_d_mm: 9.4,
    tab_w_mm: 1.8,
    tab_h_mm: 1.0,
    pin_ring_radius_mm: 2.54,
};

/// TO-18 class header: 5.8 mm flange, leads on a 1.27 mm radius circle.
const TO206_DIMS: CanDims = CanDims {
    body_d_mm: 5.8,
    tab_w_mm: 1.1,
    tab_h_mm: 0.75,
    pin_ring_radius_mm: 1.27,
};

/// TO-205 round metal can (TO-39 class).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct To205Can;

/// TO-206 round metal can (TO-18 class).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct To206Can;

impl DrawOutline for To205Can {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        pkg: &ResolvedPackage,
        device: Option<&DeviceSpec>,
    ) {
        draw_can(canvas, rect, pkg, device, &TO205_DIMS);
    }
}

impl DrawOutline for To206Can {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        pkg: &ResolvedPackage,
        device: Option<&DeviceSpec>,
    ) {
        draw_can(canvas, rect, pkg, device, &TO206_DIMS);
    }
}

/// 3-pin cans sit as a 4-pin layout with the bottom position empty:
/// pin 1 left, pin 2 top, pin 3 right.
fn can_pin_angles_deg(pin_count: i64) -> Vec<f64> {
    if pin_count == 3 {
        return vec![180.0, 90.0, 0.0];
    }
    ring_angles_deg(pin_count, -90.0)
}

fn draw_can(
    canvas: &mut dyn Canvas,
    rect: Rect,
    pkg: &ResolvedPackage,
    device: Option<&DeviceSpec>,
    dims: &CanDims,
) {
    let pin_count = pkg.int_or("pin_count", 3).max(3).min(8);

    let labels = device_pin_labels(pkg, device)
        .unwrap_or_else(|| default_numeric_labels(pin_count as usize));

    let body_d_mm = pkg.num_or("body_d_mm", dims.body_d_mm);
    if body_d_mm <= 0.0 {
        return;
    }
    let tab_w_mm = pkg.num_or("tab_w_mm", dims.tab_w_mm);
    let tab_h_mm = pkg.num_or("tab_h_mm", dims.tab_h_mm);

    let pin_diameter_mm = pkg.num_or("pin_diameter_mm", 0.74);
    let pin_ring_scale = pkg.num_or("pin_ring_scale", 2.0);
    let pin_ring_radius_mm = pkg.num_or("pin_ring_radius_mm", dims.pin_ring_radius_mm);

    let body_pin_index = clamp(
        pkg.int_or("pin_connected_to_body", pin_count) as f64,
        1.0,
        pin_count as f64,
    ) as i64;

    let (draw_w, draw_h) = scale_to_fit(body_d_mm, body_d_mm, 2.0, &rect);

    let centre = rect.center();
    let body_r = draw_w.min(draw_h) * 0.5;

    let tab_w = (tab_w_mm / body_d_mm) * (body_r * 2.0);
    let tab_h = (tab_h_mm / body_d_mm) * (body_r * 2.0);

    let body_fill = Color::rgb(0.78, 0.77, 0.76);
    let body_stroke = Color::rgb(0.68, 0.67, 0.66);

    // Index tab goes down first; the body circle then masks its inner
    // half so only the protruding part stays visible.
    canvas.save_state();
    canvas.translate(centre - DVec2::splat(body_r * 0.70));
    canvas.rotate(45.0);
    canvas.set_fill_color(body_stroke);
    canvas.rect(
        Rect::new(-tab_w * 0.5, -tab_h * 0.5, tab_w, tab_h),
        PaintMode::Fill,
    );
    canvas.restore_state();

    canvas.set_fill_color(body_fill);
    canvas.set_stroke_color(body_stroke);
    canvas.set_line_width(1.0);
    canvas.circle(centre, body_r, PaintMode::FillStroke);

    let pin_r = (pin_diameter_mm / body_d_mm) * (body_r * 2.0) * 0.5;
    let pin_r = clamp(pin_r, body_r * 0.035, body_r * 0.11);

    let pin_ring_r = (pin_ring_radius_mm / body_d_mm) * (body_r * 2.0);
    let pin_ring_r = clamp(pin_ring_r, body_r * 0.35, body_r * 0.70);

    let angles = can_pin_angles_deg(pin_count);

    let font_size = clamp(rect.height * 0.20, rect.height * 0.08, rect.height * 0.16);
    canvas.set_font(Font::Sans, font_size);
    canvas.set_fill_color(Color::BLACK);

    let radial_pad = (pin_r * 4.0).max(font_size * 1.1);

    for (i, &a_deg) in angles.iter().enumerate() {
        let a = a_deg.to_radians();
        let pin = centre + DVec2::new(a.cos(), a.sin()) * pin_ring_r;

        // The lead bonded to the can gets a lighter ring than the
        // glass-insulated ones.
        let ring_color = if i as i64 + 1 == body_pin_index {
            Color::rgb(0.55, 0.54, 0.53)
        } else {
            Color::rgb(0.28, 0.24, 0.21)
        };

        draw_pin_with_ring(canvas, pin, pin_r, pin_ring_scale, ring_color, PIN_CORE_GRAY);

        if let Some(label) = labels.get(i) {
            draw_radial_pin_label(
                canvas,
                centre,
                pin,
                &label.to_uppercase(),
                font_size,
                radial_pad,
            );
        }
    }

    canvas.set_fill_color(Color::BLACK);
    canvas.set_stroke_color(Color::BLACK);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayList, DrawOp};
    use crate::resolve::resolve;

    fn texts(list: &DisplayList) -> Vec<String> {
        list.ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    // ==================== can drawing tests ====================

    #[test]
    fn to39_draws_tab_body_and_three_pins() {
        let pkg = resolve("TO-39").unwrap();
        let mut list = DisplayList::new();
        To205Can.draw(&mut list, Rect::new(0.0, 0.0, 50.0, 40.0), &pkg, None);

        assert!(list.state_balanced());

        let rects = list.ops().iter().filter(|op| matches!(op, DrawOp::Rect { .. })).count();
        assert_eq!(rects, 1);

        // Body plus ring and core for each of three pins.
        let circles = list
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count();
        assert_eq!(circles, 7);

        assert_eq!(texts(&list), vec!["1", "2", "3"]);
    }

    #[test]
    fn body_pin_ring_uses_the_light_colour() {
        // TO-39 marks pin 3 as bonded to the can.
        let pkg = resolve("TO-39").unwrap();
        assert_eq!(pkg.int_or("pin_connected_to_body", 0), 3);

        let mut list = DisplayList::new();
        To205Can.draw(&mut list, Rect::new(0.0, 0.0, 50.0, 40.0), &pkg, None);

        let light = Color::rgb(0.55, 0.54, 0.53);
        let dark = Color::rgb(0.28, 0.24, 0.21);
        let ring_colors: Vec<Color> = list
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::StrokeColor(c) if *c == light || *c == dark => Some(*c),
                _ => None,
            })
            .collect();
        assert_eq!(ring_colors, vec![dark, dark, light]);
    }

    #[test]
    fn to18_resolves_to_the_smaller_can() {
        let pkg = resolve("TO-18").unwrap();
        assert_eq!(pkg.canonical_id, "TO-206-AA");

        let mut list = DisplayList::new();
        To206Can.draw(&mut list, Rect::new(0.0, 0.0, 50.0, 40.0), &pkg, None);
        assert!(list.paint_count() > 0);
        assert!(list.state_balanced());
    }

    #[test]
    fn device_pin_config_labels_the_leads() {
        let pkg = resolve("TO-205").unwrap();
        let device = DeviceSpec {
            pin_config: Some("e,b,c".to_owned()),
            ..Default::default()
        };
        let mut list = DisplayList::new();
        To205Can.draw(&mut list, Rect::new(0.0, 0.0, 50.0, 40.0), &pkg, Some(&device));

        assert_eq!(texts(&list), vec!["E", "B", "C"]);
    }

    #[test]
    fn three_pin_layout_leaves_the_bottom_empty() {
        assert_eq!(can_pin_angles_deg(3), vec![180.0, 90.0, 0.0]);
        // Larger counts start at the bottom and go around.
        assert_eq!(can_pin_angles_deg(4), vec![-90.0, 0.0, 90.0, 180.0]);
    }
}
