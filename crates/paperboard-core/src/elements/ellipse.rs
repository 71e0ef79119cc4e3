//! Circle element, the output of the ellipse tool.

use super::{ElementId, ElementStyle, ElementTrait, new_element_id};
use kurbo::{BezPath, Circle, Point, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};

/// A circle anchored at the top-left corner of its bounding square.
///
/// The tool is called "ellipse" but dragging always produces a circle whose
/// diameter is the larger of the two drag deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub(crate) id: ElementId,
    /// Top-left corner of the bounding square.
    pub origin: Point,
    /// Diameter of the circle.
    pub diameter: f64,
    /// Style properties.
    pub style: ElementStyle,
}

impl Ellipse {
    /// Create a new circle from its bounding-square origin and diameter.
    pub fn new(origin: Point, diameter: f64, style: ElementStyle) -> Self {
        Self {
            id: new_element_id(),
            origin,
            diameter,
            style,
        }
    }

    /// Reshape from a drag anchor and the current pointer position.
    pub fn resize_from_drag(&mut self, anchor: Point, current: Point) {
        let dx = current.x - anchor.x;
        let dy = current.y - anchor.y;
        self.diameter = dx.abs().max(dy.abs());
        self.origin = Point::new(anchor.x.min(current.x), anchor.y.min(current.y));
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.origin.x + self.radius(), self.origin.y + self.radius())
    }

    /// Get as a kurbo Circle.
    pub fn as_circle(&self) -> Circle {
        Circle::new(self.center(), self.radius())
    }
}

impl ElementTrait for Ellipse {
    fn id(&self) -> ElementId {
        self.id
    }

    fn hit_test(&self, point: Point) -> bool {
        self.diameter != 0.0 && point.distance(self.center()) <= self.radius()
    }

    fn to_path(&self) -> BezPath {
        self.as_circle().to_path(0.1)
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn translate(&mut self, delta: Vec2) {
        self.origin += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle_at(anchor: Point) -> Ellipse {
        Ellipse::new(anchor, 0.0, ElementStyle::default())
    }

    #[test]
    fn test_diameter_uses_larger_delta() {
        let anchor = Point::new(100.0, 100.0);
        let mut c = circle_at(anchor);

        c.resize_from_drag(anchor, Point::new(130.0, 110.0));
        assert!((c.diameter - 30.0).abs() < f64::EPSILON);

        c.resize_from_drag(anchor, Point::new(105.0, 160.0));
        assert!((c.diameter - 60.0).abs() < f64::EPSILON);

        c.resize_from_drag(anchor, Point::new(60.0, 90.0));
        assert!((c.diameter - 40.0).abs() < f64::EPSILON);
        assert_eq!(c.origin, Point::new(60.0, 90.0));
    }

    #[test]
    fn test_hit_test_inside_radius() {
        let c = Ellipse::new(Point::new(0.0, 0.0), 20.0, ElementStyle::default());
        assert!(c.hit_test(Point::new(10.0, 10.0)));
        assert!(c.hit_test(Point::new(20.0, 10.0)));
        // Corner of the bounding square lies outside the circle.
        assert!(!c.hit_test(Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_zero_diameter_is_not_hit() {
        let c = circle_at(Point::new(5.0, 5.0));
        assert!(!c.hit_test(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_center_and_radius() {
        let c = Ellipse::new(Point::new(10.0, 20.0), 30.0, ElementStyle::default());
        assert_eq!(c.center(), Point::new(25.0, 35.0));
        assert!((c.radius() - 15.0).abs() < f64::EPSILON);
    }
}
