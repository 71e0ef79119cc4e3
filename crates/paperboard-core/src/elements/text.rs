//! Text element.

use super::{ElementId, ElementStyle, ElementTrait, new_element_id};
use kurbo::{BezPath, Point, Vec2};
use serde::{Deserialize, Serialize};

/// A single line of text drawn from its baseline start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: ElementId,
    /// Start of the alphabetic baseline.
    pub position: Point,
    /// Text content.
    pub content: String,
    /// Style properties. The font size derives from the stroke width.
    pub style: ElementStyle,
}

impl Text {
    /// Create a new text element.
    pub fn new(position: Point, content: String, style: ElementStyle) -> Self {
        Self {
            id: new_element_id(),
            position,
            content,
            style,
        }
    }

    /// Font size in pixels.
    pub fn font_size(&self) -> f64 {
        self.style.font_size()
    }
}

impl ElementTrait for Text {
    fn id(&self) -> ElementId {
        self.id
    }

    /// Text is never picked by pointer containment.
    fn hit_test(&self, _point: Point) -> bool {
        false
    }

    /// Glyphs are drawn by the renderer; the path is empty.
    fn to_path(&self) -> BezPath {
        BezPath::new()
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_from_stroke_width() {
        let style = ElementStyle::new(super::super::PALETTE[7], 2.0);
        let t = Text::new(Point::new(0.0, 0.0), "hello".to_string(), style);
        assert!((t.font_size() - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_never_hit_over_glyphs() {
        let t = Text::new(
            Point::new(10.0, 50.0),
            "hello".to_string(),
            ElementStyle::default(),
        );
        assert!(!t.hit_test(Point::new(12.0, 45.0)));
        assert!(!t.hit_test(t.position));
    }
}
