//! Leaded round LEDs, drawn on their side with the dome pointing left.
//!
//! The body tint follows the device's emission wavelength when one is
//! known. Waterclear lenses get a grey body with a layered glow spot,
//! diffused lenses are tinted through.

use glam::DVec2;

use crate::canvas::{Canvas, Font, PaintMode, Path, TextAlign};
use crate::colour::wavelength_to_rgb;
use crate::device::DeviceSpec;
use crate::resolve::ResolvedPackage;
use crate::types::{scale_to_fit, Color, Rect};

use super::DrawOutline;

const LED_SCALE: f64 = 2.0;

/// 3mm/5mm/10mm radial LEDs with a domed epoxy body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedThtRound;

impl DrawOutline for LedThtRound {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        pkg: &ResolvedPackage,
        device: Option<&DeviceSpec>,
    ) {
        draw_led(canvas, rect, pkg, device);
    }
}

fn draw_led(
    canvas: &mut dyn Canvas,
    rect: Rect,
    pkg: &ResolvedPackage,
    device: Option<&DeviceSpec>,
) {
    let diam_mm = pkg.num_or("body_d", 5.0);
    let body_h_mm = pkg.num_or("body_h", 8.5);
    let lead_len_mm = pkg.num_or("lead_len", 20.0);
    let lead_pitch_mm = pkg.num_or("lead_pitch", 2.54);
    let lead_w_mm = pkg.num_or("lead_w", 0.6);

    let wavelength = device
        .and_then(|d| d.wavelength.as_deref())
        .filter(|w| !w.is_empty());
    let lens = device
        .and_then(|d| d.lens.as_deref())
        .filter(|l| !l.is_empty())
        .unwrap_or("diffused")
        .to_lowercase();

    let tint = match wavelength {
        Some(w) => wavelength_to_rgb(Some(w)),
        None => Color::gray(0.80),
    };

    let (bw, bh) = scale_to_fit(diam_mm, body_h_mm, LED_SCALE, &rect);
    if bw <= 0.0 || bh <= 0.0 {
        return;
    }

    let lead_pitch_scale = bh / diam_mm;
    let lead_pitch = lead_pitch_mm * lead_pitch_scale;
    let lead_w = lead_w_mm * lead_pitch_scale;
    let lead_len = lead_len_mm * (bw / body_h_mm);

    let cx = rect.left + rect.width * -0.1;
    let cy = rect.bottom + rect.height * 0.50;

    let body_x = cx;
    let body_y = cy - bh * 0.50;
    let dome_r = bh * 0.50;
    let dome_c = DVec2::new(body_x, cy);

    let anode_y = cy + lead_pitch * 0.50;
    let cathode_y = cy - lead_pitch * 0.50;

    let (body_fill, dome_fill) = if lens == "diffused" {
        (tint.with_alpha(0.90), tint.with_alpha(0.90))
    } else {
        (Color::gray(0.92), Color::gray(0.95))
    };

    // Leads first, the cathode is the short one.
    canvas.set_fill_color(Color::gray(0.75));
    canvas.rect(
        Rect::new(body_x + bw, anode_y - lead_w * 0.5, lead_len, lead_w),
        PaintMode::Fill,
    );
    canvas.rect(
        Rect::new(body_x + bw, cathode_y - lead_w * 0.5, lead_len * 0.75, lead_w),
        PaintMode::Fill,
    );

    canvas.set_fill_color(body_fill);
    canvas.rect(Rect::new(body_x, body_y, bw, bh), PaintMode::Fill);

    let mut dome = Path::new();
    dome.move_to(DVec2::new(dome_c.x, dome_c.y + dome_r))
        .arc(dome_c, dome_r, 90.0, 180.0)
        .line_to(DVec2::new(dome_c.x, dome_c.y - dome_r))
        .close();
    canvas.set_fill_color(dome_fill);
    canvas.path(&dome, PaintMode::Fill);

    // Internal anvil carrying the die, on the cathode side.
    let metal_right = body_x + bw;
    let metal_left = body_x + bw * 0.08;
    let metal_w = metal_right - metal_left;

    let anvil_h = lead_w * 2.0;
    let anvil_y0 = cathode_y - anvil_h * 0.25;
    let anvil_y1 = anvil_y0 + anvil_h;

    canvas.set_fill_color(Color::gray(0.45));
    canvas.rect(Rect::new(metal_left, anvil_y0, metal_w, anvil_h), PaintMode::Fill);

    let mut anvil = Path::new();
    anvil
        .move_to(DVec2::new(metal_left, anvil_y1))
        .line_to(DVec2::new(metal_left, anvil_y1 + anvil_h * 0.8))
        .line_to(DVec2::new(metal_right, anvil_y1))
        .close();
    canvas.path(&anvil, PaintMode::Fill);

    // Anode post with the bond-wire wedge.
    let post_h = lead_w * 1.2;
    let post_y0 = anode_y - post_h * 0.5;

    canvas.set_fill_color(Color::gray(0.60));
    canvas.rect(Rect::new(metal_left, post_y0, metal_w, post_h), PaintMode::Fill);

    let mut post = Path::new();
    post.move_to(DVec2::new(metal_right, post_y0))
        .line_to(DVec2::new(metal_right, post_y0 - post_h * 0.5))
        .line_to(DVec2::new(metal_left + metal_w * 0.5, post_y0))
        .close();
    canvas.path(&post, PaintMode::Fill);

    // Waterclear lenses show the emission as a soft glow spot.
    if lens == "waterclear" && wavelength.is_some() {
        let layers = 6;
        let glow_r = dome_r * 0.8;
        for i in 1..=layers {
            let f = f64::from(i) / f64::from(layers);
            canvas.set_fill_color(tint.with_alpha(0.50 * (1.0 - f * 0.65)));
            canvas.circle(dome_c, glow_r * f, PaintMode::Fill);
        }
    }

    let fs = rect.height * 0.25;
    canvas.set_font(Font::Sans, fs);
    canvas.set_fill_color(Color::BLACK);

    let label_x = body_x + bw + lead_len * 1.25;
    canvas.text(DVec2::new(label_x, anode_y - fs * 0.25), "A", TextAlign::Center);
    canvas.text(DVec2::new(label_x, cathode_y - fs * 0.25), "K", TextAlign::Center);
}
