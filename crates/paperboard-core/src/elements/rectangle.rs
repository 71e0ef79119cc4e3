//! Rectangle element.

use super::{ElementId, ElementStyle, ElementTrait, new_element_id};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with a non-negative extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ElementId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    /// Style properties.
    pub style: ElementStyle,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64, style: ElementStyle) -> Self {
        Self {
            id: new_element_id(),
            position,
            width,
            height,
            style,
        }
    }

    /// Reshape from a drag anchor and the current pointer position.
    ///
    /// The origin becomes the per-axis minimum of both points, the extent the
    /// absolute delta, so dragging in any direction yields a normalized box.
    pub fn resize_from_drag(&mut self, anchor: Point, current: Point) {
        self.position = Point::new(anchor.x.min(current.x), anchor.y.min(current.y));
        self.width = (current.x - anchor.x).abs();
        self.height = (current.y - anchor.y).abs();
    }

    /// Whether both sides are non-zero.
    pub fn has_area(&self) -> bool {
        self.width != 0.0 && self.height != 0.0
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }
}

impl ElementTrait for Rectangle {
    fn id(&self) -> ElementId {
        self.id
    }

    fn hit_test(&self, point: Point) -> bool {
        // Closed interval on both axes; kurbo's Rect::contains is half-open.
        self.has_area()
            && point.x >= self.position.x
            && point.x <= self.position.x + self.width
            && point.y >= self.position.y
            && point.y <= self.position.y + self.height
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}
