//! Core value types shared by the registry, resolver and drawers.
//!
//! Design goals:
//! - No hidden unit conversions: physical inputs are millimetres, drawing
//!   coordinates are points, and the only bridge is [`scale_to_fit`].
//! - Validated construction for host-supplied values; `new` stays
//!   const-friendly for internal literals.

use std::fmt;

use glam::{DVec2, dvec2};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NumericError {
    /// Value is NaN
    #[error("value is NaN")]
    NaN,
    /// Value is infinite
    #[error("value is infinite")]
    Infinite,
    /// Value is negative when non-negative required
    #[error("value is negative")]
    Negative,
}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Target drawing rectangle in drawing units (points).
///
/// `left`/`bottom` anchor the rectangle in the host's coordinate space with
/// y growing upward. Drawers treat it as the cell a package must fit into;
/// only the documented lead/label allowance may poke past its edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle (const-friendly, unchecked).
    /// Use `try_new` for host-provided values.
    #[inline]
    pub const fn new(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Rect { left, bottom, width, height }
    }

    /// Create a rectangle with validation: all fields finite, non-negative
    /// width and height. A zero-area rectangle is valid; drawers no-op on it.
    pub fn try_new(left: f64, bottom: f64, width: f64, height: f64) -> Result<Self, NumericError> {
        let left = check_finite(left)?;
        let bottom = check_finite(bottom)?;
        let width = check_finite(width)?;
        let height = check_finite(height)?;
        if width < 0.0 || height < 0.0 {
            return Err(NumericError::Negative);
        }
        Ok(Rect { left, bottom, width, height })
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.bottom + self.height
    }

    /// Horizontal centre.
    #[inline]
    pub fn cx(&self) -> f64 {
        self.left + self.width * 0.5
    }

    /// Vertical centre.
    #[inline]
    pub fn cy(&self) -> f64 {
        self.bottom + self.height * 0.5
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        dvec2(self.cx(), self.cy())
    }

    /// True when the rectangle has no drawable area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Shrink by `dx` on the left/right and `dy` on the bottom/top.
    /// Collapses to a zero-size rectangle at the centre when over-inset.
    pub fn inset(&self, dx: f64, dy: f64) -> Rect {
        let width = (self.width - 2.0 * dx).max(0.0);
        let height = (self.height - 2.0 * dy).max(0.0);
        Rect {
            left: self.cx() - width * 0.5,
            bottom: self.cy() - height * 0.5,
            width,
            height,
        }
    }

    /// Grow uniformly by `margin` on every side.
    pub fn inflate(&self, margin: f64) -> Rect {
        Rect {
            left: self.left - margin,
            bottom: self.bottom - margin,
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }

    /// Whether `p` lies inside the rectangle (closed bounds).
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.bottom && p.y <= self.top()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} {}x{}]",
            self.left, self.bottom, self.width, self.height
        )
    }
}

/// RGBA colour with unit-interval channels. Hosts map this onto whatever
/// their surface natively takes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    #[inline]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Color {
        Color { r, g, b, a }
    }

    /// Neutral grey with the given level.
    #[inline]
    pub const fn gray(level: f64) -> Color {
        Color::rgb(level, level, level)
    }

    /// Same colour with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: f64) -> Color {
        Color { a, ..self }
    }
}

/// Scale a physical width/height (millimetres) into drawing units.
///
/// Applies the fixed factor `scale`, then if either scaled dimension exceeds
/// the rectangle, shrinks both by one common factor so the larger exactly
/// fits. Never upscales past `scale`; aspect ratio is preserved.
pub fn scale_to_fit(width_mm: f64, height_mm: f64, scale: f64, rect: &Rect) -> (f64, f64) {
    let w = width_mm * scale;
    let h = height_mm * scale;
    let mut f = 1.0;
    if w > rect.width || h > rect.height {
        f = (rect.width / w).min(rect.height / h);
    }
    (w * f, h * f)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Rect tests ====================

    #[test]
    fn rect_accessors() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.top(), 70.0);
        assert_eq!(r.cx(), 60.0);
        assert_eq!(r.cy(), 45.0);
        assert_eq!(r.center(), dvec2(60.0, 45.0));
        assert!(!r.is_empty());
    }

    #[test]
    fn rect_try_new_valid() {
        assert!(Rect::try_new(0.0, 0.0, 10.0, 5.0).is_ok());
        assert!(Rect::try_new(-3.0, -4.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn rect_try_new_rejects_nan() {
        assert_eq!(
            Rect::try_new(f64::NAN, 0.0, 1.0, 1.0),
            Err(NumericError::NaN)
        );
    }

    #[test]
    fn rect_try_new_rejects_infinite() {
        assert_eq!(
            Rect::try_new(0.0, 0.0, f64::INFINITY, 1.0),
            Err(NumericError::Infinite)
        );
    }

    #[test]
    fn rect_try_new_rejects_negative_size() {
        assert_eq!(
            Rect::try_new(0.0, 0.0, -1.0, 1.0),
            Err(NumericError::Negative)
        );
        assert_eq!(
            Rect::try_new(0.0, 0.0, 1.0, -0.5),
            Err(NumericError::Negative)
        );
    }

    #[test]
    fn rect_inset_and_inflate() {
        let r = Rect::new(0.0, 0.0, 100.0, 60.0);
        let inner = r.inset(10.0, 5.0);
        assert_eq!(inner, Rect::new(10.0, 5.0, 80.0, 50.0));

        let outer = r.inflate(2.0);
        assert_eq!(outer, Rect::new(-2.0, -2.0, 104.0, 64.0));
    }

    #[test]
    fn rect_over_inset_collapses() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inner = r.inset(20.0, 20.0);
        assert!(inner.is_empty());
        assert_eq!(inner.cx(), 5.0);
        assert_eq!(inner.cy(), 5.0);
    }

    #[test]
    fn rect_contains() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(dvec2(0.0, 0.0)));
        assert!(r.contains(dvec2(10.0, 10.0)));
        assert!(!r.contains(dvec2(10.1, 5.0)));
    }

    // ==================== Color tests ====================

    #[test]
    fn color_constructors() {
        assert_eq!(Color::gray(0.5), Color::rgb(0.5, 0.5, 0.5));
        assert_eq!(Color::rgb(1.0, 0.0, 0.0).with_alpha(0.25).a, 0.25);
    }

    // ==================== scale_to_fit tests ====================

    #[test]
    fn scale_to_fit_no_clamp_when_it_fits() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let (w, h) = scale_to_fit(10.0, 5.0, 2.0, &rect);
        assert_eq!((w, h), (20.0, 10.0));
    }

    #[test]
    fn scale_to_fit_clamps_to_rect() {
        let rect = Rect::new(0.0, 0.0, 40.0, 100.0);
        let (w, h) = scale_to_fit(30.0, 10.0, 2.0, &rect);
        // 60x20 requested; width limits, factor 40/60
        assert!((w - 40.0).abs() < 1e-9);
        assert!((h - 20.0 * (40.0 / 60.0)).abs() < 1e-9);
    }

    #[test]
    fn scale_to_fit_never_upscales() {
        let rect = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let (w, h) = scale_to_fit(3.0, 4.0, 1.5, &rect);
        assert_eq!((w, h), (4.5, 6.0));
    }

    #[test]
    fn scale_to_fit_preserves_aspect() {
        let rect = Rect::new(0.0, 0.0, 50.0, 30.0);
        let (w, h) = scale_to_fit(80.0, 20.0, 1.0, &rect);
        assert!((w / h - 80.0 / 20.0).abs() < 1e-9);
        assert!(w <= rect.width + 1e-9 && h <= rect.height + 1e-9);
    }

    #[test]
    fn scale_to_fit_height_limited() {
        let rect = Rect::new(0.0, 0.0, 100.0, 10.0);
        let (w, h) = scale_to_fit(10.0, 10.0, 2.0, &rect);
        assert!((h - 10.0).abs() < 1e-9);
        assert!((w - 10.0).abs() < 1e-9);
    }
}
