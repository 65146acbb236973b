//! Axial cylindrical packages, drawn through-hole with wire leads or as
//! MELF-style SMD cylinders sitting on end-cap pads.

use glam::DVec2;

use crate::canvas::{Canvas, Font, PaintMode, TextAlign};
use crate::device::DeviceSpec;
use crate::resolve::ResolvedPackage;
use crate::types::{scale_to_fit, Color, Rect};

use super::DrawOutline;

/// Lead length each side, as a fraction of the target rect width.
pub(crate) const AXIAL_LEAD_FRACTION: f64 = 0.18;

/// End caps extend this fraction of the body width over the pads.
const SMD_CAP_OVERLAP_FRACTION: f64 = 0.02;

/// Through-hole axial diodes: DO-204 glass and epoxy bodies, R-6, T-18.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxialRoundBody;

/// Cylindrical SMD diodes on end-cap pads (DO-213, SOD-106).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Melf;

impl DrawOutline for AxialRoundBody {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        pkg: &ResolvedPackage,
        device: Option<&DeviceSpec>,
    ) {
        let mount = if pkg.text_or("mount", "tht").trim().eq_ignore_ascii_case("smd") {
            Mount::Smd
        } else {
            Mount::Tht
        };
        draw_axial(canvas, rect, pkg, mount, true, show_band(device));
    }
}

impl DrawOutline for Melf {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        pkg: &ResolvedPackage,
        device: Option<&DeviceSpec>,
    ) {
        draw_axial(canvas, rect, pkg, Mount::Smd, true, show_band(device));
    }
}

fn show_band(device: Option<&DeviceSpec>) -> bool {
    !device.is_some_and(DeviceSpec::is_bidirectional_tvs)
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mount {
    Tht,
    Smd,
}

struct BodyColors {
    top: Color,
    mid: Color,
    bot: Color,
    band: Color,
}

fn body_colors(material: &str) -> BodyColors {
    match material {
        "glass" => BodyColors {
            top: Color::rgb(0.90, 0.40, 0.10),
            mid: Color::rgb(0.78, 0.32, 0.06),
            bot: Color::rgb(0.40, 0.16, 0.03),
            band: Color::BLACK,
        },
        "metallic" => BodyColors {
            top: Color::rgb(0.90, 0.90, 0.92),
            mid: Color::rgb(0.70, 0.70, 0.72),
            bot: Color::rgb(0.35, 0.35, 0.38),
            band: Color::BLACK,
        },
        "blue" => BodyColors {
            top: Color::rgb(0.20, 0.65, 1.00),
            mid: Color::rgb(0.00, 0.50, 0.78),
            bot: Color::rgb(0.00, 0.25, 0.45),
            band: Color::BLACK,
        },
        // Moulded epoxy, the usual black body with a pale band.
        _ => BodyColors {
            top: Color::rgb(0.45, 0.45, 0.45),
            mid: Color::rgb(0.30, 0.30, 0.30),
            bot: Color::rgb(0.06, 0.06, 0.06),
            band: Color::gray(0.75),
        },
    }
}

/// Draw a cylindrical axial body centred in `rect`.
///
/// Dimensions come from `body_length`/`body_diameter` with `len`/`dia` as
/// fallback names. A non-positive length or diameter draws nothing.
pub(crate) fn draw_axial(
    canvas: &mut dyn Canvas,
    rect: Rect,
    pkg: &ResolvedPackage,
    mount: Mount,
    show_labels: bool,
    show_polarity_band: bool,
) {
    let body_length_mm = pkg.num("body_length").or_else(|| pkg.num("len")).unwrap_or(0.0);
    let body_diameter_mm = pkg.num("body_diameter").or_else(|| pkg.num("dia")).unwrap_or(0.0);
    if body_length_mm <= 0.0 || body_diameter_mm <= 0.0 {
        return;
    }

    let material = pkg.text_or("material", "").trim().to_lowercase();
    let colors = body_colors(&material);

    let cx = rect.cx();
    let cy = rect.cy();
    let (body_w, body_h) = scale_to_fit(body_length_mm, body_diameter_mm, 2.0, &rect);
    let body_x = cx - body_w * 0.5;
    let body_y = cy - body_h * 0.5;

    let smd = mount == Mount::Smd;

    let mut pad_w = 0.0;
    let mut pad_h = 0.0;
    let mut cap_overlap = 0.0;
    let mut pad_y = 0.0;
    let mut left_pad_outer_x = 0.0;
    let mut right_pad_outer_x = 0.0;

    if smd {
        let mut pad_end_length_mm = pkg
            .num("pad_end_length")
            .or_else(|| pkg.num("pad_width"))
            .unwrap_or(body_diameter_mm * 0.55);
        let pad_height_mm = pkg.num("pad_height").unwrap_or(body_diameter_mm * 1.30);
        if pad_end_length_mm < 0.0 {
            pad_end_length_mm = 0.0;
        }

        let scale_x = body_w / body_length_mm;
        let scale_y = body_h / body_diameter_mm;

        pad_w = (pad_end_length_mm * scale_x).min(body_w * 0.5);
        pad_h = (pad_height_mm * scale_y).max(body_h);
        cap_overlap = (body_w * SMD_CAP_OVERLAP_FRACTION).max(0.4);

        pad_y = cy - pad_h * 0.5;
        left_pad_outer_x = body_x - cap_overlap;
        right_pad_outer_x = body_x + body_w + cap_overlap;
    } else {
        let lead_len = rect.width * AXIAL_LEAD_FRACTION;
        canvas.set_stroke_color(Color::BLACK);
        canvas.set_line_width(1.0);
        canvas.line(DVec2::new(body_x - lead_len, cy), DVec2::new(body_x, cy));
        canvas.line(
            DVec2::new(body_x + body_w, cy),
            DVec2::new(body_x + body_w + lead_len, cy),
        );
    }

    // Cylinder shading in two clipped halves: highlight down to the centre
    // line, then centre line down into shadow.
    let mid_y = body_y + body_h * 0.5;

    canvas.save_state();
    canvas.clip_rect(Rect::new(body_x, mid_y, body_w, body_h * 0.5));
    canvas.linear_gradient(
        DVec2::new(body_x + body_w * 0.5, body_y + body_h),
        DVec2::new(body_x + body_w * 0.5, mid_y),
        &[(0.0, colors.top), (1.0, colors.mid)],
    );
    canvas.restore_state();

    canvas.save_state();
    canvas.clip_rect(Rect::new(body_x, body_y, body_w, body_h * 0.5));
    canvas.linear_gradient(
        DVec2::new(body_x + body_w * 0.5, mid_y),
        DVec2::new(body_x + body_w * 0.5, body_y),
        &[(0.0, colors.mid), (1.0, colors.bot)],
    );
    canvas.restore_state();

    if show_polarity_band {
        let band_w = body_w * 0.16;
        let mut band_x = body_x + body_w - band_w;
        if smd && pad_w > 0.0 {
            band_x = (body_x + body_w - pad_w - band_w).max(body_x);
        }
        canvas.set_fill_color(colors.band);
        canvas.rect(Rect::new(band_x, body_y, band_w, body_h), PaintMode::Fill);
    }

    if smd && pad_w > 0.0 {
        let left_pad = Rect::new(body_x - cap_overlap, pad_y, pad_w + cap_overlap, pad_h);
        let right_pad = Rect::new(body_x + body_w - pad_w, pad_y, pad_w + cap_overlap, pad_h);

        canvas.set_fill_color(Color::rgb(0.80, 0.80, 0.82));
        canvas.rect(left_pad, PaintMode::Fill);
        canvas.rect(right_pad, PaintMode::Fill);
    }

    if show_labels {
        if smd && pad_w > 0.0 {
            draw_labels_smd(
                canvas,
                rect,
                left_pad_outer_x,
                right_pad_outer_x,
                pad_y,
                pad_h,
                pad_w,
            );
        } else {
            draw_labels_tht(canvas, rect, body_x, body_w, cy);
        }
    }

    canvas.set_fill_color(Color::BLACK);
    canvas.set_stroke_color(Color::BLACK);
}

fn draw_labels_tht(canvas: &mut dyn Canvas, rect: Rect, body_x: f64, body_w: f64, cy: f64) {
    let fs = rect.height * 0.25;
    canvas.set_fill_color(Color::BLACK);
    canvas.set_font(Font::Sans, fs);

    let a_x = body_x - rect.width * AXIAL_LEAD_FRACTION * 0.5;
    let k_x = body_x + body_w + rect.width * AXIAL_LEAD_FRACTION * 0.5;
    let label_y = cy + fs * 0.35;

    canvas.text(DVec2::new(a_x, label_y), "A", TextAlign::Center);
    canvas.text(DVec2::new(k_x, label_y), "K", TextAlign::Center);
}

fn draw_labels_smd(
    canvas: &mut dyn Canvas,
    rect: Rect,
    left_pad_outer_x: f64,
    right_pad_outer_x: f64,
    pad_y: f64,
    pad_h: f64,
    pad_w: f64,
) {
    let fs = rect.height * 0.25;
    canvas.set_fill_color(Color::BLACK);
    canvas.set_font(Font::Sans, fs);

    let text_y = pad_y + pad_h * 0.5 - fs * 0.35;
    let gap = pad_w * 0.60;

    canvas.text(DVec2::new(left_pad_outer_x - gap, text_y), "A", TextAlign::Right);
    canvas.text(DVec2::new(right_pad_outer_x + gap, text_y), "K", TextAlign::Left);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DisplayList;
    use crate::resolve::resolve;

    fn cell() -> Rect {
        Rect::new(0.0, 0.0, 80.0, 30.0)
    }

    #[test]
    fn zero_length_body_draws_nothing() {
        let mut pkg = resolve("DO-35").unwrap();
        pkg.params.insert("len", crate::outline::ParamValue::Num(0.0));

        let mut list = DisplayList::new();
        AxialRoundBody.draw(&mut list, cell(), &pkg, None);
        assert!(list.is_empty());
    }

    #[test]
    fn tht_axial_draws_leads_band_and_labels() {
        let pkg = resolve("DO-41").unwrap();
        let mut list = DisplayList::new();
        AxialRoundBody.draw(&mut list, cell(), &pkg, None);

        assert!(list.state_balanced());
        let lines = list
            .ops()
            .iter()
            .filter(|op| matches!(op, crate::canvas::DrawOp::Line { .. }))
            .count();
        assert_eq!(lines, 2);
        let texts = list
            .ops()
            .iter()
            .filter(|op| matches!(op, crate::canvas::DrawOp::Text { .. }))
            .count();
        assert_eq!(texts, 2);
    }

    #[test]
    fn bidirectional_tvs_suppresses_the_band() {
        let pkg = resolve("DO-41").unwrap();
        let tvs = DeviceSpec {
            subtype: Some("tvs bidirectional".to_owned()),
            ..Default::default()
        };

        let mut with_band = DisplayList::new();
        AxialRoundBody.draw(&mut with_band, cell(), &pkg, None);
        let mut without_band = DisplayList::new();
        AxialRoundBody.draw(&mut without_band, cell(), &pkg, Some(&tvs));

        assert_eq!(with_band.paint_count(), without_band.paint_count() + 1);
    }

    #[test]
    fn melf_adds_pads_over_tht_form() {
        let pkg = resolve("MELF").unwrap();
        let mut list = DisplayList::new();
        Melf.draw(&mut list, cell(), &pkg, None);

        // No wire leads in SMD form, two pad rects instead.
        let lines = list
            .ops()
            .iter()
            .filter(|op| matches!(op, crate::canvas::DrawOp::Line { .. }))
            .count();
        assert_eq!(lines, 0);
        let rects = list
            .ops()
            .iter()
            .filter(|op| matches!(op, crate::canvas::DrawOp::Rect { .. }))
            .count();
        // Polarity band plus two pads.
        assert_eq!(rects, 3);
        assert!(list.state_balanced());
    }

    #[test]
    fn drawing_stays_inside_the_cell() {
        let rect = cell();
        let pkg = resolve("DO-27").unwrap();
        let mut list = DisplayList::new();
        AxialRoundBody.draw(&mut list, rect, &pkg, None);

        let bounds = list.bounds().unwrap();
        // Leads extend horizontally but stay well inside the padded cell.
        assert!(bounds.left >= rect.left - rect.width * AXIAL_LEAD_FRACTION);
        assert!(bounds.right() <= rect.right() + rect.width * AXIAL_LEAD_FRACTION);
    }
}
