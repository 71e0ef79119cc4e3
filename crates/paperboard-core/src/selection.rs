//! Single-element selection and its highlight geometry.

use crate::elements::{Element, ElementId};
use kurbo::{BezPath, Circle, Shape as KurboShape};

/// Gap between an element and its selection outline, in pixels.
pub const HIGHLIGHT_PADDING: f64 = 5.0;

/// Dash pattern of the selection outline.
pub const HIGHLIGHT_DASH: [f64; 2] = [5.0, 5.0];

/// Stroke width of the selection outline.
pub const HIGHLIGHT_WIDTH: f64 = 2.0;

/// At most one selected element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<ElementId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an element, replacing any previous selection.
    pub fn select(&mut self, id: ElementId) {
        self.selected = Some(id);
    }

    /// Clear the selection. Returns true if something was selected.
    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Clear the selection if it holds `id`. Returns true if cleared.
    pub fn forget(&mut self, id: ElementId) -> bool {
        if self.selected == Some(id) {
            self.selected = None;
            true
        } else {
            false
        }
    }

    pub fn get(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected == Some(id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }
}

/// Outline drawn around a selected element.
///
/// Rectangles get their bounds inflated by [`HIGHLIGHT_PADDING`], circles a
/// radius grown by the same amount. Strokes and text are never selectable
/// and have no highlight.
pub fn highlight_path(element: &Element) -> Option<BezPath> {
    match element {
        Element::Rectangle(rect) if rect.has_area() => Some(
            rect.as_rect()
                .inflate(HIGHLIGHT_PADDING, HIGHLIGHT_PADDING)
                .to_path(0.1),
        ),
        Element::Ellipse(circle) if circle.diameter != 0.0 => Some(
            Circle::new(circle.center(), circle.radius() + HIGHLIGHT_PADDING).to_path(0.1),
        ),
        _ => None,
    }
}
