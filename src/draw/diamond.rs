//! TO-204 (TO-3) diamond-base power package, drawn as the underside view:
//! a diamond header with arced long sides, two mounting holes, and leads
//! placed on an arc around the centre.

use glam::DVec2;

use crate::canvas::{Canvas, Font, PaintMode, Path, TextAlign};
use crate::device::DeviceSpec;
use crate::resolve::ResolvedPackage;
use crate::types::{Color, Rect};

use super::helpers::{
    clamp, default_numeric_labels, device_pin_labels, draw_pin_with_ring,
    draw_radial_pin_label, linspace_angles_deg, PIN_CORE_GRAY, RING_BLUE,
};
use super::DrawOutline;

// TO-204 header dimensions in millimetres.
const TIP_TO_TIP_MM: f64 = 38.80;
const FLAT_TO_FLAT_MM: f64 = 25.40;
const CORNER_RADIUS_MM: f64 = 4.40;
const CENTRE_ARC_RADIUS_MM: f64 = 11.4;
const MOUNT_HOLE_DIAMETER_MM: f64 = 4.10;
const MOUNT_HOLE_PITCH_MM: f64 = 25.40;

/// Diamond-base metal can packages (TO-3 and relatives).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct To204Diamond;

impl DrawOutline for To204Diamond {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        pkg: &ResolvedPackage,
        device: Option<&DeviceSpec>,
    ) {
        let pin_count = pkg.int_or("pin_count", 2).max(1).min(15);
        let start_deg = pkg.num_or("pin_arc_start_deg", -55.0);
        let stop_deg = pkg.num_or("pin_arc_stop_deg", 55.0);
        let pin_diameter_mm = pkg.num_or("pin_diameter_mm", 1.2);
        let is_body_pin = pkg.flag_or("is_body_pin", false);

        let total_labels = pin_count as usize + usize::from(is_body_pin);
        let labels = device_pin_labels(pkg, device)
            .unwrap_or_else(|| default_numeric_labels(total_labels));

        draw_to204(
            canvas,
            rect,
            pin_count,
            start_deg,
            stop_deg,
            pin_diameter_mm,
            is_body_pin,
            &labels,
        );
    }
}

/// Rotate `point` a quarter turn counterclockwise about `centre`.
fn rotate_quarter(centre: DVec2, point: DVec2) -> DVec2 {
    centre + (point - centre).perp()
}

fn angle_deg_from_centre(centre: DVec2, point: DVec2) -> f64 {
    let d = point - centre;
    d.y.atan2(d.x).to_degrees()
}

/// Arc start and signed sweep around a fixed centre, entry to exit along
/// the shorter direction.
fn arc_params_from_centre(arc_centre: DVec2, entry: DVec2, exit: DVec2) -> (f64, f64) {
    let u1 = entry - arc_centre;
    let u2 = exit - arc_centre;
    let start_deg = angle_deg_from_centre(arc_centre, entry);
    let sweep_deg = u1.perp_dot(u2).atan2(u1.dot(u2)).to_degrees();
    (start_deg, sweep_deg)
}

/// Clamp the corner fillet radius so it stays inside the diamond.
fn safe_corner_radius(tip_dx: f64, tip_dy: f64, requested_r: f64) -> f64 {
    if requested_r <= 0.0 {
        return 0.0;
    }

    let pts = [
        DVec2::new(0.0, tip_dy),
        DVec2::new(tip_dx, 0.0),
        DVec2::new(0.0, -tip_dy),
        DVec2::new(-tip_dx, 0.0),
    ];

    let mut max_r = requested_r;
    for i in 0..4 {
        let edge_len = (pts[(i + 1) % 4] - pts[i]).length();
        max_r = max_r.min(edge_len * 0.45);
    }

    clamp(max_r, 0.0, tip_dx.min(tip_dy) * 0.49)
}

struct Fillet {
    t1: DVec2,
    t2: DVec2,
    centre: DVec2,
    radius: f64,
    start_deg: f64,
    sweep_deg: f64,
}

/// Tangency points and arc of a corner fillet, or `None` when the corner
/// is too sharp, too flat or too short to fit one.
fn fillet_arc_for_corner(prev: DVec2, corner: DVec2, next: DVec2, radius: f64) -> Option<Fillet> {
    if radius <= 0.01 {
        return None;
    }

    let v_prev = prev - corner;
    let v_next = next - corner;
    let len_prev = v_prev.length();
    let len_next = v_next.length();
    if len_prev <= 1.0e-6 || len_next <= 1.0e-6 {
        return None;
    }

    let v1 = v_prev / len_prev;
    let v2 = v_next / len_next;

    let phi = clamp(v1.dot(v2), -1.0, 1.0).acos();
    if phi <= 2.0_f64.to_radians() || phi >= 178.0_f64.to_radians() {
        return None;
    }

    let tan_half = (phi * 0.5).tan();
    if tan_half.abs() <= 1.0e-6 {
        return None;
    }

    let max_t_dist = len_prev.min(len_next) * 0.49;
    let max_radius = max_t_dist * tan_half.abs();
    let radius = clamp(radius, 0.0, max_radius);
    if radius <= 0.01 {
        return None;
    }

    let t_dist = radius / tan_half.abs();
    if t_dist >= max_t_dist {
        return None;
    }

    let offset = radius / (phi * 0.5).sin().max(1.0e-6);
    let bis = (v1 + v2).normalize_or_zero();
    let centre = corner + bis * offset;

    let t1 = corner + v1 * t_dist;
    let t2 = corner + v2 * t_dist;

    let start_deg = angle_deg_from_centre(centre, t1);
    let u1 = t1 - centre;
    let u2 = t2 - centre;
    let sweep_deg = u1.perp_dot(u2).atan2(u1.dot(u2)).to_degrees();
    if sweep_deg.abs() <= 0.1 {
        return None;
    }

    Some(Fillet {
        t1,
        t2,
        centre,
        radius,
        start_deg,
        sweep_deg,
    })
}

/// The two tangency points from an external point to a circle, upper
/// first. `None` when the point lies on or inside the circle.
fn tangent_points_to_circle(
    point: DVec2,
    circle_centre: DVec2,
    circle_r: f64,
) -> Option<(DVec2, DVec2)> {
    let v = point - circle_centre;
    let d = v.length();
    if circle_r <= 1.0e-6 || d <= circle_r + 1.0e-6 {
        return None;
    }

    let u = v / d;
    let alpha = clamp(circle_r / d, -1.0, 1.0).acos();
    let (sa, ca) = alpha.sin_cos();
    let perp = u.perp();

    let p1 = circle_centre + (u * ca + perp * sa) * circle_r;
    let p2 = circle_centre + (u * ca - perp * sa) * circle_r;

    if p1.y >= p2.y { Some((p1, p2)) } else { Some((p2, p1)) }
}

/// Build the TO-3 outline: long sides are arcs of a centre circle, short
/// sides run tangent from the circle to filleted left/right corners.
fn build_outline_path(
    centre: DVec2,
    tip_dx: f64,
    tip_dy: f64,
    corner_r: f64,
    centre_arc_r: f64,
) -> Path {
    let pts0 = [
        DVec2::new(centre.x, centre.y + tip_dy),
        DVec2::new(centre.x + tip_dx, centre.y),
        DVec2::new(centre.x, centre.y - tip_dy),
        DVec2::new(centre.x - tip_dx, centre.y),
    ];
    // Rotate a quarter turn so the long axis runs horizontally.
    let pts: Vec<DVec2> = pts0.iter().map(|&p| rotate_quarter(centre, p)).collect();

    let left_corner = pts[0];
    let right_corner = pts[2];

    let corner_r = safe_corner_radius(tip_dx, tip_dy, corner_r);
    let centre_arc_r = clamp(centre_arc_r, 0.0, tip_dx.max(tip_dy) * 3.0);

    let left_tangents = tangent_points_to_circle(left_corner, centre, centre_arc_r);
    let right_tangents = tangent_points_to_circle(right_corner, centre, centre_arc_r);

    let mut path = Path::new();

    let (Some((left_upper, left_lower)), Some((right_upper, right_lower))) =
        (left_tangents, right_tangents)
    else {
        // Corners sit inside the arc circle; fall back to a plain diamond.
        path.move_to(left_corner)
            .line_to(pts[1])
            .line_to(right_corner)
            .line_to(pts[3])
            .close();
        return path;
    };

    let right_fillet = fillet_arc_for_corner(right_upper, right_corner, right_lower, corner_r);
    let left_fillet = fillet_arc_for_corner(left_lower, left_corner, left_upper, corner_r);

    path.move_to(left_upper);

    let (start, sweep) = arc_params_from_centre(centre, left_upper, right_upper);
    path.arc(centre, centre_arc_r, start, sweep);

    match right_fillet {
        None => {
            path.line_to(right_corner);
        }
        Some(f) => {
            path.line_to(f.t1);
            path.arc(f.centre, f.radius, f.start_deg, f.sweep_deg);
            path.line_to(f.t2);
        }
    }
    path.line_to(right_lower);

    let (start, sweep) = arc_params_from_centre(centre, right_lower, left_lower);
    path.arc(centre, centre_arc_r, start, sweep);

    match left_fillet {
        None => {
            path.line_to(left_corner);
        }
        Some(f) => {
            path.line_to(f.t1);
            path.arc(f.centre, f.radius, f.start_deg, f.sweep_deg);
            path.line_to(f.t2);
        }
    }
    path.line_to(left_upper);
    path.close();
    path
}

#[allow(clippy::too_many_arguments)]
fn draw_to204(
    canvas: &mut dyn Canvas,
    rect: Rect,
    pin_count: i64,
    pin_arc_start_deg: f64,
    pin_arc_stop_deg: f64,
    pin_diameter_mm: f64,
    is_body_pin: bool,
    labels: &[String],
) {
    let centre = rect.center();

    let ref_px = rect.width.min(rect.height) * 1.75;
    let ref_mm = TIP_TO_TIP_MM.max(1.0);
    let to_px = |mm: f64| (mm / ref_mm) * ref_px;

    let tip_dy = to_px(TIP_TO_TIP_MM) * 0.5;
    let tip_dx = to_px(FLAT_TO_FLAT_MM) * 0.5;

    let mount_hole_r = to_px(MOUNT_HOLE_DIAMETER_MM * 0.5);
    let mount_pitch = to_px(MOUNT_HOLE_PITCH_MM);

    let pin_diameter_mm = clamp(pin_diameter_mm, 0.6, 2.5);
    let pin_r = clamp(to_px(pin_diameter_mm * 0.5), ref_px * 0.012, ref_px * 0.06);

    canvas.save_state();

    let base_path = build_outline_path(
        centre,
        tip_dx,
        tip_dy,
        to_px(CORNER_RADIUS_MM),
        to_px(CENTRE_ARC_RADIUS_MM),
    );

    canvas.set_fill_color(Color::rgb(0.78, 0.77, 0.76));
    canvas.set_stroke_color(Color::rgb(0.68, 0.67, 0.66));
    canvas.set_line_width(1.0);
    canvas.path(&base_path, PaintMode::FillStroke);

    // Mounting holes land on the long axis after the quarter turn.
    let mount_left = rotate_quarter(centre, DVec2::new(centre.x, centre.y + mount_pitch * 0.5));
    let mount_right = rotate_quarter(centre, DVec2::new(centre.x, centre.y - mount_pitch * 0.5));

    canvas.set_fill_color(Color::WHITE);
    canvas.circle(mount_left, mount_hole_r, PaintMode::Fill);
    canvas.circle(mount_right, mount_hole_r, PaintMode::Fill);

    let angles = linspace_angles_deg(pin_count, pin_arc_start_deg, pin_arc_stop_deg);
    let pin_ring_r = tip_dx.min(tip_dy) * 0.50;

    let mut pin_points = Vec::with_capacity(angles.len());
    for a_deg in angles {
        let a = a_deg.to_radians();
        let pin = centre + DVec2::new(a.cos(), a.sin()) * pin_ring_r;
        pin_points.push(pin);
        draw_pin_with_ring(canvas, pin, pin_r, 4.0, RING_BLUE, PIN_CORE_GRAY);
    }

    let font_size = clamp(rect.height * 0.20, rect.height * 0.08, rect.height * 0.16);
    canvas.set_font(Font::Sans, font_size);
    canvas.set_fill_color(Color::BLACK);

    let radial_pad = (pin_r * 4.0).max(font_size * 1.1);

    if is_body_pin {
        if let Some(body_label) = labels.first() {
            let body_x = mount_right.x - mount_hole_r * 2.2;
            canvas.text(
                DVec2::new(body_x, mount_right.y - font_size * 0.35),
                &body_label.to_uppercase(),
                TextAlign::Right,
            );
        }
    }

    let label_index_offset = usize::from(is_body_pin);
    for (i, &pin) in pin_points.iter().enumerate() {
        let Some(label) = labels.get(i + label_index_offset) else {
            break;
        };
        draw_radial_pin_label(canvas, centre, pin, &label.to_uppercase(), font_size, radial_pad);
    }

    canvas.restore_state();
}
