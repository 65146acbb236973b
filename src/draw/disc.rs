//! Disc ceramic capacitors: a round body on two kinked leads, with the
//! EIA capacitance code printed across the middle.
//!
//! Qualifiers steer the geometry: `@p5`/`@p7.5` set the lead pitch in
//! mm, `@d7`/`@d10` override the disc diameter, and `@yellow`/`@blue`
//! pick the body colour (yellow is the default).

use glam::DVec2;

use crate::canvas::{Canvas, Font, PaintMode, Path};
use crate::device::DeviceSpec;
use crate::marking::disc_marking;
use crate::markup::{draw_markup, markup_width};
use crate::resolve::ResolvedPackage;
use crate::types::{scale_to_fit, Color, Rect};

use super::DrawOutline;

const DEFAULT_PITCH_MM: f64 = 5.0;
const DEFAULT_BODY_DIAMETER_MM: f64 = 7.0;
const DEFAULT_LEAD_DIAMETER_MM: f64 = 0.6;

const YELLOW_BODY: Color = Color::rgb(226.0 / 255.0, 173.0 / 255.0, 88.0 / 255.0);
const YELLOW_INK: Color = Color::rgb(194.0 / 255.0, 127.0 / 255.0, 73.0 / 255.0);
const BLUE_BODY: Color = Color::rgb(0.0, 175.0 / 255.0, 213.0 / 255.0);
const BLUE_INK: Color = Color::rgb(40.0 / 255.0, 99.0 / 255.0, 140.0 / 255.0);

/// Radial disc ceramic capacitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacitorDisc;

impl DrawOutline for CapacitorDisc {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        pkg: &ResolvedPackage,
        device: Option<&DeviceSpec>,
    ) {
        draw_disc(canvas, rect, pkg, device);
    }
}

fn body_colours(name: &str) -> (Color, Color) {
    match name {
        "blue" => (BLUE_BODY, BLUE_INK),
        _ => (YELLOW_BODY, YELLOW_INK),
    }
}

fn draw_disc(
    canvas: &mut dyn Canvas,
    rect: Rect,
    pkg: &ResolvedPackage,
    device: Option<&DeviceSpec>,
) {
    let mut pitch_mm = DEFAULT_PITCH_MM;
    let mut colour_name = "yellow";
    let mut override_d_mm = None;

    for q in &pkg.qualifiers {
        if let Some(v) = q.strip_prefix('p') {
            if let Ok(v) = v.parse::<f64>() {
                pitch_mm = v;
                continue;
            }
        }
        if let Some(v) = q.strip_prefix('d') {
            if let Ok(v) = v.parse::<f64>() {
                override_d_mm = Some(v);
                continue;
            }
        }
        if q == "yellow" || q == "blue" {
            colour_name = q;
        }
    }

    let body_d_mm = override_d_mm
        .unwrap_or_else(|| pkg.num_or("body_diameter_mm", DEFAULT_BODY_DIAMETER_MM));
    let lead_d_mm = pkg.num_or("lead_diameter_mm", DEFAULT_LEAD_DIAMETER_MM);
    let (body_col, ink_col) = body_colours(colour_name);

    let (disc_w, _) = scale_to_fit(body_d_mm, body_d_mm, 2.0, &rect);
    if disc_w <= 0.0 || body_d_mm <= 0.0 {
        return;
    }
    let scale_x = disc_w / body_d_mm;

    let pitch = pitch_mm * scale_x;
    let body_r = disc_w * 0.5;
    let lead_w = (lead_d_mm * scale_x).max(0.8);

    let cx = rect.left + rect.width * 0.50;
    let mut cy = rect.bottom + rect.height * 0.66;

    let lead_bottom = rect.bottom + rect.height * 0.08;
    let lead_end = (lead_bottom - rect.height * 0.04).max(rect.bottom);

    let lx = cx - pitch / 2.0;
    let rx = cx + pitch / 2.0;

    // The leads exit near the centre of the disc underside and kink
    // outwards at 45 degrees to reach the pitch.
    let exit_dx = body_r * 0.28;
    let l_exit_x = cx - exit_dx;
    let r_exit_x = cx + exit_dx;

    let required_kink_drop = (lx - l_exit_x).abs().max((rx - r_exit_x).abs());
    let min_cy_for_kink =
        lead_bottom + rect.height * 0.10 + required_kink_drop + body_r;
    let max_cy = rect.bottom + rect.height - body_r * 0.10;
    if cy < min_cy_for_kink {
        cy = min_cy_for_kink.min(max_cy);
    }

    let exit_y = cy - body_r;
    let l_dx = (lx - l_exit_x).abs();
    let r_dx = (rx - r_exit_x).abs();

    canvas.save_state();

    canvas.set_stroke_color(Color::gray(0.80));
    canvas.set_line_width(lead_w);

    draw_kinked_lead(
        canvas,
        DVec2::new(l_exit_x, exit_y),
        DVec2::new(lx, exit_y - l_dx),
        DVec2::new(lx, lead_end),
    );
    draw_kinked_lead(
        canvas,
        DVec2::new(r_exit_x, exit_y),
        DVec2::new(rx, exit_y - r_dx),
        DVec2::new(rx, lead_end),
    );

    draw_kink_sleeve(
        canvas,
        DVec2::new(l_exit_x, exit_y),
        DVec2::new(lx, exit_y - l_dx),
        ink_col,
        body_r,
        lead_w,
    );
    draw_kink_sleeve(
        canvas,
        DVec2::new(r_exit_x, exit_y),
        DVec2::new(rx, exit_y - r_dx),
        ink_col,
        body_r,
        lead_w,
    );

    canvas.set_fill_color(body_col);
    canvas.set_stroke_color(ink_col);
    canvas.set_line_width(1.0);
    canvas.circle(DVec2::new(cx, cy), body_r, PaintMode::FillStroke);

    let mark = device.and_then(|d| {
        disc_marking(d.capacitance.as_deref(), d.tolerance.as_deref())
    });
    if let Some(mark) = mark {
        let font = Font::SansBold;
        let fs = (body_r * 0.75).min(rect.height * 0.22);

        let ascent = canvas.ascent(font, fs);
        let descent = canvas.descent(font, fs);
        let text_w = markup_width(canvas, &mark, font, fs);

        let origin = DVec2::new(cx - text_w / 2.0, cy - (ascent - descent) / 2.0);
        canvas.set_fill_color(Color::gray(0.3));
        draw_markup(canvas, origin, &mark, font, fs);
    }

    canvas.restore_state();
}

fn draw_kinked_lead(canvas: &mut dyn Canvas, exit: DVec2, kink: DVec2, end: DVec2) {
    let mut p = Path::new();
    p.move_to(exit).line_to(kink).line_to(end);
    canvas.path(&p, PaintMode::Stroke);
}

/// Insulating sleeve over the first half of the kink segment, drawn as
/// a rotated rounded rect that tucks slightly under the disc.
fn draw_kink_sleeve(
    canvas: &mut dyn Canvas,
    exit: DVec2,
    kink: DVec2,
    colour: Color,
    body_r: f64,
    lead_w: f64,
) {
    let d = kink - exit;
    let seg_len = d.length();
    if seg_len <= 0.0 {
        return;
    }
    let u = d / seg_len;

    let overlap = body_r * 0.10;
    let start = exit - u * overlap;
    let cover_len = seg_len * 0.50 + overlap;
    let centre = start + u * (cover_len * 0.50);

    let w = (body_r * 0.80).min(cover_len);
    let h = lead_w * 1.25;

    canvas.save_state();
    canvas.translate(centre);
    canvas.rotate(d.y.atan2(d.x).to_degrees());
    canvas.set_fill_color(colour);
    canvas.set_stroke_color(colour);
    canvas.set_line_width(0.6);
    canvas.round_rect(
        Rect::new(-w * 0.5, -h * 0.5, w, h),
        h * 0.35,
        PaintMode::FillStroke,
    );
    canvas.restore_state();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayList, DrawOp};
    use crate::outline::{ParamMap, ParamValue};
    use crate::draw::Family;

    fn disc_package(qualifiers: &[&str]) -> ResolvedPackage {
        ResolvedPackage {
            raw_key: "DISC-CERAMIC".to_owned(),
            canonical_id: "DISC-CERAMIC".to_owned(),
            print_id: "DISC-CERAMIC".to_owned(),
            family: Some(Family::from(CapacitorDisc)),
            params: ParamMap::from([("body_diameter_mm", ParamValue::Num(7.0))]),
            qualifiers: qualifiers.iter().map(|q| (*q).to_owned()).collect(),
        }
    }

    fn cell() -> Rect {
        Rect::new(0.0, 0.0, 90.0, 60.0)
    }

    // ==================== disc tests ====================

    #[test]
    fn body_leads_and_sleeves() {
        let mut list = DisplayList::new();
        draw_disc(&mut list, cell(), &disc_package(&[]), None);

        let circles = list
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count();
        let paths = list
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::Path { .. }))
            .count();
        let sleeves = list
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::RoundRect { .. }))
            .count();
        assert_eq!(circles, 1);
        assert_eq!(paths, 2);
        assert_eq!(sleeves, 2);
        assert!(list.state_balanced());
    }

    #[test]
    fn no_marking_without_device_data() {
        let mut list = DisplayList::new();
        draw_disc(&mut list, cell(), &disc_package(&[]), None);
        assert!(!list.ops().iter().any(|op| matches!(op, DrawOp::Text { .. })));
    }

    #[test]
    fn marking_combines_eia_code_and_tolerance() {
        let device = DeviceSpec {
            capacitance: Some("47nF".to_owned()),
            tolerance: Some("±10%".to_owned()),
            ..DeviceSpec::default()
        };
        let mut list = DisplayList::new();
        draw_disc(&mut list, cell(), &disc_package(&[]), Some(&device));

        let glyphs: String = list
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(glyphs, "473K");
    }

    #[test]
    fn pitch_qualifier_widens_the_lead_span() {
        let mut narrow = DisplayList::new();
        draw_disc(&mut narrow, cell(), &disc_package(&["p5"]), None);
        let mut wide = DisplayList::new();
        draw_disc(&mut wide, cell(), &disc_package(&["p10"]), None);

        let span = |list: &DisplayList| {
            let xs: Vec<f64> = list
                .ops()
                .iter()
                .filter_map(|op| match op {
                    DrawOp::Path { path, .. } => {
                        path.elements().iter().find_map(|el| match el {
                            crate::canvas::PathEl::LineTo(p) => Some(p.x),
                            _ => None,
                        })
                    }
                    _ => None,
                })
                .collect();
            xs.last().copied().unwrap() - xs.first().copied().unwrap()
        };
        assert!(span(&wide) > span(&narrow));
    }

    #[test]
    fn blue_qualifier_changes_the_body_fill() {
        let mut list = DisplayList::new();
        draw_disc(&mut list, cell(), &disc_package(&["blue"]), None);

        let has_blue = list.ops().iter().any(|op| match op {
            DrawOp::FillColor(c) => *c == BLUE_BODY,
            _ => false,
        });
        assert!(has_blue);
    }

    #[test]
    fn diameter_qualifier_overrides_the_param() {
        let mut small = DisplayList::new();
        draw_disc(&mut small, cell(), &disc_package(&[]), None);
        let mut large = DisplayList::new();
        draw_disc(&mut large, cell(), &disc_package(&["d10"]), None);

        let radius = |list: &DisplayList| {
            list.ops()
                .iter()
                .find_map(|op| match op {
                    DrawOp::Circle { radius, .. } => Some(*radius),
                    _ => None,
                })
                .unwrap()
        };
        assert!(radius(&large) > radius(&small));
    }
}
