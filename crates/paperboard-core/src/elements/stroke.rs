//! Freehand stroke element.

use super::{ElementId, ElementStyle, ElementTrait, new_element_id};
use kurbo::{BezPath, Point, Vec2};
use serde::{Deserialize, Serialize};

/// A freehand stroke (polyline through the captured pointer positions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub(crate) id: ElementId,
    /// Points in capture order. Never empty.
    pub points: Vec<Point>,
    /// Style properties.
    pub style: ElementStyle,
}

impl Stroke {
    /// Start a stroke at `start`.
    pub fn new(start: Point, style: ElementStyle) -> Self {
        Self {
            id: new_element_id(),
            points: vec![start],
            style,
        }
    }

    /// Append a point to the path.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a stroke is created with its first point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl ElementTrait for Stroke {
    fn id(&self) -> ElementId {
        self.id
    }

    /// Strokes are never picked by pointer containment.
    fn hit_test(&self, _point: Point) -> bool {
        false
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut points = self.points.iter();
        if let Some(first) = points.next() {
            path.move_to(*first);
            for p in points {
                path.line_to(*p);
            }
        }
        path
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn translate(&mut self, delta: Vec2) {
        for p in &mut self.points {
            *p += delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn test_points_kept_in_order() {
        let mut s = Stroke::new(Point::new(0.0, 0.0), ElementStyle::default());
        s.add_point(Point::new(5.0, 5.0));
        s.add_point(Point::new(10.0, 0.0));
        assert_eq!(
            s.points,
            vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 0.0)]
        );
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_path_is_open_polyline() {
        let mut s = Stroke::new(Point::new(0.0, 0.0), ElementStyle::default());
        s.add_point(Point::new(10.0, 10.0));
        let path = s.to_path();
        let els: Vec<PathEl> = path.elements().to_vec();
        assert_eq!(els.len(), 2);
        assert!(matches!(els[0], PathEl::MoveTo(_)));
        assert!(matches!(els[1], PathEl::LineTo(_)));
    }

    #[test]
    fn test_never_hit() {
        let mut s = Stroke::new(Point::new(0.0, 0.0), ElementStyle::default());
        s.add_point(Point::new(10.0, 10.0));
        assert!(!s.hit_test(Point::new(5.0, 5.0)));
        assert!(!s.hit_test(Point::new(0.0, 0.0)));
    }
}
