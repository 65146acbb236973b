//! Drawing surface abstraction.
//!
//! The crate never talks to a concrete output device. Family drawers paint
//! through the [`Canvas`] trait, which covers exactly the operations they
//! need: scoped state, colours, primitive shapes, paths with circular arcs,
//! clipping, an axis-aligned linear gradient that fills the current clip,
//! translate/rotate, and aligned text. Hosts implement it over their real
//! surface; [`DisplayList`] is the crate's own implementation that records
//! operations as values, which the tests inspect and hosts can replay.
//!
//! Text metrics default to proportional per-mille advance tables in the
//! style of the standard PDF base fonts, so label layout is deterministic
//! without any font files. Hosts with real font data can override
//! `string_width`/`ascent`/`descent`.

use glam::{DAffine2, DVec2, dvec2};

use crate::types::{Color, Rect};

/// Font selector understood by every canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Sans,
    SansBold,
}

impl Font {
    /// Conventional PostScript base-font name for hosts that index fonts
    /// by name.
    pub fn postscript_name(self) -> &'static str {
        match self {
            Font::Sans => "Helvetica",
            Font::SansBold => "Helvetica-Bold",
        }
    }
}

/// Horizontal anchoring of a text draw relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// How a shape or path is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    Fill,
    Stroke,
    FillStroke,
}

impl PaintMode {
    pub fn fills(self) -> bool {
        matches!(self, PaintMode::Fill | PaintMode::FillStroke)
    }

    pub fn strokes(self) -> bool {
        matches!(self, PaintMode::Stroke | PaintMode::FillStroke)
    }
}

/// One path segment. `Arc` sweeps counter-clockwise for positive
/// `sweep_deg`; if the pen is not at the arc's start point, the canvas
/// connects it with a straight line first.
#[derive(Debug, Clone, PartialEq)]
pub enum PathEl {
    MoveTo(DVec2),
    LineTo(DVec2),
    Arc {
        center: DVec2,
        radius: f64,
        start_deg: f64,
        sweep_deg: f64,
    },
    Close,
}

/// A polyline/arc path, built segment by segment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    els: Vec<PathEl>,
}

/// Point on a circle at `deg` degrees (counter-clockwise from +x).
pub fn arc_point(center: DVec2, radius: f64, deg: f64) -> DVec2 {
    let rad = deg.to_radians();
    center + dvec2(rad.cos(), rad.sin()) * radius
}

impl Path {
    pub fn new() -> Path {
        Path { els: Vec::new() }
    }

    pub fn move_to(&mut self, p: DVec2) -> &mut Self {
        self.els.push(PathEl::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: DVec2) -> &mut Self {
        self.els.push(PathEl::LineTo(p));
        self
    }

    pub fn arc(&mut self, center: DVec2, radius: f64, start_deg: f64, sweep_deg: f64) -> &mut Self {
        self.els.push(PathEl::Arc { center, radius, start_deg, sweep_deg });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.els.push(PathEl::Close);
        self
    }

    pub fn elements(&self) -> &[PathEl] {
        &self.els
    }

    pub fn is_empty(&self) -> bool {
        self.els.is_empty()
    }

    /// True when the path's last element is an explicit close.
    pub fn is_closed(&self) -> bool {
        matches!(self.els.last(), Some(PathEl::Close))
    }

    /// True when every coordinate in the path is finite.
    pub fn is_finite(&self) -> bool {
        self.els.iter().all(|el| match el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => p.is_finite(),
            PathEl::Arc { center, radius, start_deg, sweep_deg } => {
                center.is_finite()
                    && radius.is_finite()
                    && start_deg.is_finite()
                    && sweep_deg.is_finite()
            }
            PathEl::Close => true,
        })
    }

    /// Sampled outline points, arcs flattened coarsely. Used for bounds
    /// accumulation, not for rendering.
    pub fn sample_points(&self) -> Vec<DVec2> {
        let mut pts = Vec::new();
        for el in &self.els {
            match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => pts.push(*p),
                PathEl::Arc { center, radius, start_deg, sweep_deg } => {
                    let steps = ((sweep_deg.abs() / 10.0).ceil() as usize).max(1);
                    for i in 0..=steps {
                        let t = i as f64 / steps as f64;
                        pts.push(arc_point(*center, *radius, start_deg + sweep_deg * t));
                    }
                }
                PathEl::Close => {}
            }
        }
        pts
    }
}

/// Drawing surface the family drawers paint on.
///
/// State discipline: `save_state`/`restore_state` must nest; a drawer
/// restores everything it saves on every path out, so colour, line width,
/// font, clip and transform changes never leak between draw calls.
pub trait Canvas {
    fn save_state(&mut self);
    fn restore_state(&mut self);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);

    fn rect(&mut self, rect: Rect, mode: PaintMode);
    fn round_rect(&mut self, rect: Rect, radius: f64, mode: PaintMode);
    fn circle(&mut self, center: DVec2, radius: f64, mode: PaintMode);
    fn line(&mut self, from: DVec2, to: DVec2);
    fn path(&mut self, path: &Path, mode: PaintMode);

    /// Intersect the clip region with `path`. Scoped by save/restore.
    fn clip(&mut self, path: &Path);

    /// Intersect the clip region with an axis-aligned rectangle.
    fn clip_rect(&mut self, rect: Rect) {
        let mut path = Path::new();
        path.move_to(DVec2::new(rect.left, rect.bottom))
            .line_to(DVec2::new(rect.right(), rect.bottom))
            .line_to(DVec2::new(rect.right(), rect.top()))
            .line_to(DVec2::new(rect.left, rect.top()))
            .close();
        self.clip(&path);
    }

    /// Fill the current clip region with a linear gradient along
    /// `from -> to`. `stops` are (offset in [0,1], colour), ascending.
    fn linear_gradient(&mut self, from: DVec2, to: DVec2, stops: &[(f64, Color)]);

    fn translate(&mut self, offset: DVec2);
    fn rotate(&mut self, degrees: f64);

    fn set_font(&mut self, font: Font, size: f64);
    fn text(&mut self, pos: DVec2, text: &str, align: TextAlign);

    /// Advance width of `text` at `size`, in drawing units.
    fn string_width(&self, text: &str, font: Font, size: f64) -> f64 {
        metrics::string_width(text, font, size)
    }

    /// Distance from baseline to the top of the em box.
    fn ascent(&self, _font: Font, size: f64) -> f64 {
        metrics::ASCENT * size
    }

    /// Distance from baseline to the bottom of the em box (positive).
    fn descent(&self, _font: Font, size: f64) -> f64 {
        metrics::DESCENT * size
    }
}

/// Built-in proportional text metrics.
pub mod metrics {
    use super::Font;

    /// Ascent per unit of font size.
    pub const ASCENT: f64 = 0.718;
    /// Descent per unit of font size (magnitude).
    pub const DESCENT: f64 = 0.207;

    /// Per-mille advance widths for ASCII 0x20..=0x7e, regular weight.
    #[rustfmt::skip]
    const WIDTHS_SANS: [u16; 95] = [
        278, 278, 355, 556, 556, 889, 667, 191,
        333, 333, 389, 584, 278, 333, 278, 278,
        556, 556, 556, 556, 556, 556, 556, 556,
        556, 556, 278, 278, 584, 584, 584, 556,
       1015, 667, 667, 722, 722, 667, 611, 778,
        722, 278, 500, 667, 556, 833, 722, 778,
        667, 778, 722, 667, 611, 722, 667, 944,
        667, 667, 611, 278, 278, 278, 469, 556,
        333, 556, 556, 500, 556, 556, 278, 556,
        556, 222, 222, 500, 222, 833, 556, 556,
        556, 556, 333, 500, 278, 556, 500, 722,
        500, 500, 500, 334, 260, 334, 584,
    ];

    /// Per-mille advance widths for ASCII 0x20..=0x7e, bold weight.
    #[rustfmt::skip]
    const WIDTHS_SANS_BOLD: [u16; 95] = [
        278, 333, 474, 556, 556, 889, 722, 238,
        333, 333, 389, 584, 278, 333, 278, 278,
        556, 556, 556, 556, 556, 556, 556, 556,
        556, 556, 333, 333, 584, 584, 584, 611,
        975, 722, 722, 722, 722, 667, 611, 778,
        722, 278, 556, 722, 611, 833, 722, 778,
        667, 778, 722, 667, 611, 722, 667, 944,
        667, 667, 611, 333, 278, 333, 584, 556,
        333, 556, 611, 556, 611, 556, 333, 611,
        611, 278, 278, 556, 278, 889, 611, 611,
        611, 611, 389, 556, 333, 611, 556, 778,
        556, 556, 500, 389, 280, 389, 584,
    ];

    // Non-ASCII (greek glyphs mostly) falls back to the workhorse width.
    const FALLBACK: u16 = 556;

    fn advance(c: char, font: Font) -> u16 {
        let table = match font {
            Font::Sans => &WIDTHS_SANS,
            Font::SansBold => &WIDTHS_SANS_BOLD,
        };
        if (' '..='~').contains(&c) {
            table[(c as usize) - 0x20]
        } else {
            FALLBACK
        }
    }

    /// Sum of per-character advances scaled to `size`.
    pub fn string_width(text: &str, font: Font, size: f64) -> f64 {
        let mille: u32 = text.chars().map(|c| advance(c, font) as u32).sum();
        mille as f64 * size / 1000.0
    }
}

/// One recorded canvas operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    SaveState,
    RestoreState,
    FillColor(Color),
    StrokeColor(Color),
    LineWidth(f64),
    Rect { rect: Rect, mode: PaintMode },
    RoundRect { rect: Rect, radius: f64, mode: PaintMode },
    Circle { center: DVec2, radius: f64, mode: PaintMode },
    Line { from: DVec2, to: DVec2 },
    Path { path: Path, mode: PaintMode },
    Clip { path: Path },
    LinearGradient { from: DVec2, to: DVec2, stops: Vec<(f64, Color)> },
    Translate(DVec2),
    Rotate(f64),
    SetFont { font: Font, size: f64 },
    Text { pos: DVec2, text: String, align: TextAlign },
}

impl DrawOp {
    /// Whether this op puts ink on the page (as opposed to changing state).
    pub fn is_paint(&self) -> bool {
        matches!(
            self,
            DrawOp::Rect { .. }
                | DrawOp::RoundRect { .. }
                | DrawOp::Circle { .. }
                | DrawOp::Line { .. }
                | DrawOp::Path { .. }
                | DrawOp::LinearGradient { .. }
                | DrawOp::Text { .. }
        )
    }
}

/// Canvas implementation that records operations into a list.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new() -> DisplayList {
        DisplayList { ops: Vec::new() }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of ink-producing operations.
    pub fn paint_count(&self) -> usize {
        self.ops.iter().filter(|op| op.is_paint()).count()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// True when every save has a matching restore and the depth never
    /// goes negative.
    pub fn state_balanced(&self) -> bool {
        let mut depth: i64 = 0;
        for op in &self.ops {
            match op {
                DrawOp::SaveState => depth += 1,
                DrawOp::RestoreState => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }
        depth == 0
    }

    /// Axis-aligned bounds of everything painted, replaying the recorded
    /// translate/rotate state. Text contributes its anchor point only
    /// (alignment and glyph extents are host concerns). `None` when
    /// nothing was painted.
    pub fn bounds(&self) -> Option<Rect> {
        let mut ctm = DAffine2::IDENTITY;
        let mut stack: Vec<DAffine2> = Vec::new();
        let mut min = dvec2(f64::MAX, f64::MAX);
        let mut max = dvec2(f64::MIN, f64::MIN);
        let mut seen = false;

        let add = |ctm: &DAffine2, p: DVec2, min: &mut DVec2, max: &mut DVec2| {
            let p = ctm.transform_point2(p);
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        };

        for op in &self.ops {
            match op {
                DrawOp::SaveState => stack.push(ctm),
                DrawOp::RestoreState => {
                    if let Some(prev) = stack.pop() {
                        ctm = prev;
                    }
                }
                DrawOp::Translate(v) => {
                    ctm *= DAffine2::from_translation(*v);
                }
                DrawOp::Rotate(deg) => {
                    ctm *= DAffine2::from_angle(deg.to_radians());
                }
                DrawOp::Rect { rect, .. } | DrawOp::RoundRect { rect, .. } => {
                    seen = true;
                    for p in [
                        dvec2(rect.left, rect.bottom),
                        dvec2(rect.right(), rect.bottom),
                        dvec2(rect.right(), rect.top()),
                        dvec2(rect.left, rect.top()),
                    ] {
                        add(&ctm, p, &mut min, &mut max);
                    }
                }
                DrawOp::Circle { center, radius, .. } => {
                    seen = true;
                    add(&ctm, *center + dvec2(-radius, -radius), &mut min, &mut max);
                    add(&ctm, *center + dvec2(*radius, *radius), &mut min, &mut max);
                }
                DrawOp::Line { from, to } => {
                    seen = true;
                    add(&ctm, *from, &mut min, &mut max);
                    add(&ctm, *to, &mut min, &mut max);
                }
                DrawOp::Path { path, .. } => {
                    seen = true;
                    for p in path.sample_points() {
                        add(&ctm, p, &mut min, &mut max);
                    }
                }
                DrawOp::Text { pos, .. } => {
                    seen = true;
                    add(&ctm, *pos, &mut min, &mut max);
                }
                _ => {}
            }
        }

        if !seen {
            return None;
        }
        Some(Rect::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }
}

impl Canvas for DisplayList {
    fn save_state(&mut self) {
        self.ops.push(DrawOp::SaveState);
    }

    fn restore_state(&mut self) {
        self.ops.push(DrawOp::RestoreState);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(DrawOp::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(DrawOp::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::LineWidth(width));
    }

    fn rect(&mut self, rect: Rect, mode: PaintMode) {
        self.ops.push(DrawOp::Rect { rect, mode });
    }

    fn round_rect(&mut self, rect: Rect, radius: f64, mode: PaintMode) {
        self.ops.push(DrawOp::RoundRect { rect, radius, mode });
    }

    fn circle(&mut self, center: DVec2, radius: f64, mode: PaintMode) {
        self.ops.push(DrawOp::Circle { center, radius, mode });
    }

    fn line(&mut self, from: DVec2, to: DVec2) {
        self.ops.push(DrawOp::Line { from, to });
    }

    fn path(&mut self, path: &Path, mode: PaintMode) {
        self.ops.push(DrawOp::Path { path: path.clone(), mode });
    }

    fn clip(&mut self, path: &Path) {
        self.ops.push(DrawOp::Clip { path: path.clone() });
    }

    fn linear_gradient(&mut self, from: DVec2, to: DVec2, stops: &[(f64, Color)]) {
        self.ops.push(DrawOp::LinearGradient {
            from,
            to,
            stops: stops.to_vec(),
        });
    }

    fn translate(&mut self, offset: DVec2) {
        self.ops.push(DrawOp::Translate(offset));
    }

    fn rotate(&mut self, degrees: f64) {
        self.ops.push(DrawOp::Rotate(degrees));
    }

    fn set_font(&mut self, font: Font, size: f64) {
        self.ops.push(DrawOp::SetFont { font, size });
    }

    fn text(&mut self, pos: DVec2, text: &str, align: TextAlign) {
        self.ops.push(DrawOp::Text {
            pos,
            text: text.to_string(),
            align,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== metrics tests ====================

    #[test]
    fn string_width_scales_linearly() {
        let w10 = metrics::string_width("TO-220", Font::Sans, 10.0);
        let w20 = metrics::string_width("TO-220", Font::Sans, 20.0);
        assert!((w20 - 2.0 * w10).abs() < 1e-9);
    }

    #[test]
    fn string_width_is_proportional() {
        // narrow glyphs vs wide glyphs at the same count
        let narrow = metrics::string_width("iiii", Font::Sans, 12.0);
        let wide = metrics::string_width("MMMM", Font::Sans, 12.0);
        assert!(narrow < wide);
    }

    #[test]
    fn bold_is_at_least_as_wide() {
        let r = metrics::string_width("104K", Font::Sans, 9.0);
        let b = metrics::string_width("104K", Font::SansBold, 9.0);
        assert!(b >= r);
    }

    #[test]
    fn default_metrics_through_trait() {
        let dl = DisplayList::new();
        assert!((dl.ascent(Font::Sans, 10.0) - 7.18).abs() < 1e-9);
        assert!((dl.descent(Font::Sans, 10.0) - 2.07).abs() < 1e-9);
        assert!(dl.string_width("A", Font::Sans, 1000.0) > 0.0);
    }

    // ==================== Path tests ====================

    #[test]
    fn path_close_and_finiteness() {
        let mut p = Path::new();
        p.move_to(dvec2(0.0, 0.0))
            .line_to(dvec2(1.0, 0.0))
            .arc(dvec2(0.5, 0.0), 0.5, 0.0, 180.0)
            .close();
        assert!(p.is_closed());
        assert!(p.is_finite());
    }

    #[test]
    fn path_detects_nan() {
        let mut p = Path::new();
        p.move_to(dvec2(f64::NAN, 0.0));
        assert!(!p.is_finite());
    }

    #[test]
    fn arc_sampling_covers_extremes() {
        let mut p = Path::new();
        p.arc(dvec2(0.0, 0.0), 1.0, 0.0, 90.0);
        let pts = p.sample_points();
        let max_y = pts.iter().map(|p| p.y).fold(f64::MIN, f64::max);
        assert!((max_y - 1.0).abs() < 1e-9);
    }

    // ==================== DisplayList tests ====================

    #[test]
    fn records_and_reports_paint_ops() {
        let mut dl = DisplayList::new();
        dl.save_state();
        dl.set_fill_color(Color::BLACK);
        dl.circle(dvec2(5.0, 5.0), 2.0, PaintMode::Fill);
        dl.restore_state();
        assert_eq!(dl.len(), 4);
        assert_eq!(dl.paint_count(), 1);
        assert!(dl.state_balanced());
    }

    #[test]
    fn unbalanced_state_detected() {
        let mut dl = DisplayList::new();
        dl.save_state();
        assert!(!dl.state_balanced());
        dl.restore_state();
        dl.restore_state();
        assert!(!dl.state_balanced());
    }

    #[test]
    fn bounds_of_simple_shapes() {
        let mut dl = DisplayList::new();
        dl.rect(Rect::new(10.0, 20.0, 30.0, 5.0), PaintMode::Fill);
        dl.circle(dvec2(0.0, 0.0), 2.0, PaintMode::Stroke);
        let b = dl.bounds().unwrap();
        assert_eq!(b.left, -2.0);
        assert_eq!(b.bottom, -2.0);
        assert_eq!(b.right(), 40.0);
        assert_eq!(b.top(), 25.0);
    }

    #[test]
    fn bounds_follow_translation() {
        let mut dl = DisplayList::new();
        dl.save_state();
        dl.translate(dvec2(100.0, 50.0));
        dl.rect(Rect::new(0.0, 0.0, 10.0, 10.0), PaintMode::Fill);
        dl.restore_state();
        dl.rect(Rect::new(0.0, 0.0, 1.0, 1.0), PaintMode::Fill);
        let b = dl.bounds().unwrap();
        assert_eq!(b.left, 0.0);
        assert_eq!(b.right(), 110.0);
        assert_eq!(b.top(), 60.0);
    }

    #[test]
    fn bounds_follow_rotation() {
        let mut dl = DisplayList::new();
        dl.save_state();
        dl.rotate(90.0);
        // unit square rotates into x in [-1, 0], y in [0, 1]
        dl.rect(Rect::new(0.0, 0.0, 1.0, 1.0), PaintMode::Fill);
        dl.restore_state();
        let b = dl.bounds().unwrap();
        assert!((b.left - -1.0).abs() < 1e-9);
        assert!((b.top() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_list_has_no_bounds() {
        let mut dl = DisplayList::new();
        assert!(dl.bounds().is_none());
        dl.set_line_width(2.0);
        assert!(dl.bounds().is_none());
    }
}
