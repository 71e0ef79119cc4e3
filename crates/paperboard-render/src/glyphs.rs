//! Text outlines with `ab_glyph`.

use crate::renderer::{RenderResult, RendererError};
use ab_glyph::{Font, FontArc, GlyphId, OutlineCurve, PxScale, ScaleFont};
use kurbo::{BezPath, Point};
use std::path::Path;

/// Embedded DejaVu Sans, used when no font is configured.
static DEJAVU_SANS: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Turns single-line text runs into fillable outlines.
#[derive(Clone)]
pub struct GlyphRenderer {
    font: FontArc,
}

impl std::fmt::Debug for GlyphRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphRenderer")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl GlyphRenderer {
    /// The embedded default font.
    pub fn embedded() -> RenderResult<Self> {
        FontArc::try_from_slice(DEJAVU_SANS)
            .map(|font| Self { font })
            .map_err(|e| RendererError::Font(e.to_string()))
    }

    /// Load a TrueType/OpenType font from memory.
    pub fn from_bytes(bytes: Vec<u8>) -> RenderResult<Self> {
        FontArc::try_from_vec(bytes)
            .map(|font| Self { font })
            .map_err(|e| RendererError::Font(e.to_string()))
    }

    /// Load a font file.
    pub fn from_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| RendererError::Font(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded font {} ({} bytes)", path.display(), bytes.len());
        Self::from_bytes(bytes)
    }

    /// Outline of `text` starting at `baseline` (alphabetic baseline, left
    /// edge), ready to fill with the non-zero rule.
    pub fn text_path(&self, text: &str, baseline: Point, size: f64) -> BezPath {
        let scaled = self.font.as_scaled(PxScale::from(size as f32));
        let (h_factor, v_factor) = (
            f64::from(scaled.h_scale_factor()),
            f64::from(scaled.v_scale_factor()),
        );

        let mut path = BezPath::new();
        let mut caret = 0.0f32;
        let mut previous: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let origin = Point::new(baseline.x + f64::from(caret), baseline.y);
            caret += scaled.h_advance(id);
            previous = Some(id);

            if let Some(outline) = self.font.outline(id) {
                // Font units, y up.
                let to_px = |p: ab_glyph::Point| {
                    Point::new(
                        origin.x + f64::from(p.x) * h_factor,
                        origin.y - f64::from(p.y) * v_factor,
                    )
                };
                append_outline(&mut path, &outline.curves, to_px);
            }
        }
        path
    }
}

/// Append glyph curves, starting a new closed contour wherever a curve does
/// not continue from the previous one.
fn append_outline(
    path: &mut BezPath,
    curves: &[OutlineCurve],
    to_px: impl Fn(ab_glyph::Point) -> Point,
) {
    let mut current: Option<Point> = None;
    for curve in curves {
        let start = match curve {
            OutlineCurve::Line(p0, _) | OutlineCurve::Quad(p0, _, _) | OutlineCurve::Cubic(p0, _, _, _) => {
                to_px(*p0)
            }
        };
        if current != Some(start) {
            if current.is_some() {
                path.close_path();
            }
            path.move_to(start);
        }
        let end = match curve {
            OutlineCurve::Line(_, p1) => {
                let p1 = to_px(*p1);
                path.line_to(p1);
                p1
            }
            OutlineCurve::Quad(_, c, p2) => {
                let p2 = to_px(*p2);
                path.quad_to(to_px(*c), p2);
                p2
            }
            OutlineCurve::Cubic(_, c1, c2, p3) => {
                let p3 = to_px(*p3);
                path.curve_to(to_px(*c1), to_px(*c2), p3);
                p3
            }
        };
        current = Some(end);
    }
    if current.is_some() {
        path.close_path();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{PathEl, Shape as KurboShape};

    #[test]
    fn test_embedded_font_loads() {
        assert!(GlyphRenderer::embedded().is_ok());
    }

    #[test]
    fn test_invalid_font_bytes() {
        let err = GlyphRenderer::from_bytes(vec![0, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, RendererError::Font(_)));
    }

    #[test]
    fn test_missing_font_file() {
        let err = GlyphRenderer::from_file("/nonexistent/font.ttf").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/font.ttf"));
    }

    #[test]
    fn test_text_path_grows_with_text_and_size() {
        let glyphs = GlyphRenderer::embedded().unwrap();
        let width = |text: &str, size: f64| glyphs.text_path(text, Point::ZERO, size).bounding_box().width();

        let short = width("Hi", 24.0);
        assert!(short > 0.0);
        assert!(width("Hi there", 24.0) > short);
        assert!(width("Hi", 48.0) > short);
        assert!(glyphs.text_path("", Point::ZERO, 24.0).elements().is_empty());
        assert!(glyphs.text_path(" ", Point::ZERO, 24.0).elements().is_empty());
    }

    #[test]
    fn test_text_sits_above_baseline() {
        let glyphs = GlyphRenderer::embedded().unwrap();
        let bbox = glyphs
            .text_path("Hello", Point::new(10.0, 40.0), 24.0)
            .bounding_box();

        assert!(bbox.x0 >= 10.0 && bbox.x0 < 14.0);
        assert!(bbox.y0 > 15.0 && bbox.y0 < 25.0);
        // Round letters overshoot the baseline slightly.
        assert!(bbox.y1 <= 41.0);
    }

    #[test]
    fn test_contours_are_closed() {
        let glyphs = GlyphRenderer::embedded().unwrap();
        let path = glyphs.text_path("o", Point::new(0.0, 20.0), 20.0);
        let count = |pred: fn(&PathEl) -> bool| path.elements().iter().filter(|el| pred(el)).count();
        let moves = count(|el| matches!(el, PathEl::MoveTo(_)));
        let closes = count(|el| matches!(el, PathEl::ClosePath));
        // Outer ring and counter.
        assert_eq!(moves, 2);
        assert_eq!(closes, 2);
    }
}
