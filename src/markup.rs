//! Tiny inline markup renderer for component markings.
//!
//! Supports subscripts (`I_pk`, `h_fe`), superscripts (`10^3`, `m^2`)
//! and spelled-out greek letters (`lambda`, `mu`, `omega`). Anything
//! else is drawn as-is. This is nowhere near a text shaper, it only
//! has to cover the strings that appear on package bodies.

use glam::DVec2;

use crate::canvas::{Canvas, Font, TextAlign};

const GREEK: [(&str, &str); 12] = [
    ("alpha", "α"),
    ("beta", "β"),
    ("gamma", "γ"),
    ("delta", "δ"),
    ("epsilon", "ε"),
    ("theta", "θ"),
    ("lambda", "λ"),
    ("mu", "µ"),
    ("omega", "ω"),
    ("sigma", "σ"),
    ("phi", "φ"),
    ("psi", "ψ"),
];

/// Draw `text` left-aligned at `pos` (baseline) and return the x
/// coordinate just past the last glyph.
pub fn draw_markup(canvas: &mut dyn Canvas, pos: DVec2, text: &str, font: Font, size: f64) -> f64 {
    let mut cx = pos.x;
    let y = pos.y;
    let mut rest = text;

    'outer: while let Some(ch) = rest.chars().next() {
        if ch.is_alphabetic() {
            for (name, symbol) in GREEK {
                let matched = rest
                    .get(..name.len())
                    .is_some_and(|p| p.eq_ignore_ascii_case(name));
                if matched {
                    canvas.set_font(font, size);
                    canvas.text(DVec2::new(cx, y), symbol, TextAlign::Left);
                    cx += canvas.string_width(symbol, font, size);
                    rest = &rest[name.len()..];
                    continue 'outer;
                }
            }

            let mut buf = [0u8; 4];
            let glyph: &str = ch.encode_utf8(&mut buf);
            canvas.set_font(font, size);
            canvas.text(DVec2::new(cx, y), glyph, TextAlign::Left);
            cx += canvas.string_width(glyph, font, size);
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        if (ch == '_' || ch == '^') && rest.len() > 1 {
            let tail = &rest[1..];
            let run_len = tail
                .char_indices()
                .find(|(_, c)| !c.is_alphanumeric())
                .map_or(tail.len(), |(i, _)| i);
            let run = &tail[..run_len];
            rest = &tail[run_len..];

            if !run.is_empty() {
                let small = size * 0.70;
                let dy = if ch == '_' { -small * 0.35 } else { small * 0.60 };
                canvas.set_font(font, small);
                canvas.text(DVec2::new(cx, y + dy), run, TextAlign::Left);
                cx += canvas.string_width(run, font, small);
            }
            continue;
        }

        let mut buf = [0u8; 4];
        let glyph: &str = ch.encode_utf8(&mut buf);
        canvas.set_font(font, size);
        canvas.text(DVec2::new(cx, y), glyph, TextAlign::Left);
        cx += canvas.string_width(glyph, font, size);
        rest = &rest[ch.len_utf8()..];
    }

    cx
}

/// Advance of `text` under [`draw_markup`] without drawing anything.
pub fn markup_width(canvas: &dyn Canvas, text: &str, font: Font, size: f64) -> f64 {
    let mut width = 0.0;
    let mut rest = text;

    'outer: while let Some(ch) = rest.chars().next() {
        if ch.is_alphabetic() {
            for (name, symbol) in GREEK {
                let matched = rest
                    .get(..name.len())
                    .is_some_and(|p| p.eq_ignore_ascii_case(name));
                if matched {
                    width += canvas.string_width(symbol, font, size);
                    rest = &rest[name.len()..];
                    continue 'outer;
                }
            }

            let mut buf = [0u8; 4];
            width += canvas.string_width(ch.encode_utf8(&mut buf), font, size);
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        if (ch == '_' || ch == '^') && rest.len() > 1 {
            let tail = &rest[1..];
            let run_len = tail
                .char_indices()
                .find(|(_, c)| !c.is_alphanumeric())
                .map_or(tail.len(), |(i, _)| i);
            width += canvas.string_width(&tail[..run_len], font, size * 0.70);
            rest = &tail[run_len..];
            continue;
        }

        let mut buf = [0u8; 4];
        width += canvas.string_width(ch.encode_utf8(&mut buf), font, size);
        rest = &rest[ch.len_utf8()..];
    }

    width
}
