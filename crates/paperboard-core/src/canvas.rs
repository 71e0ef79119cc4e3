//! Scene: the ordered collection of elements on the surface.

use crate::elements::{Element, ElementId};
use kurbo::Point;
use serde::Serialize;

/// Ordered elements, back to front.
///
/// Order is both paint order and reverse hit-test priority: the last element
/// is drawn on top and is the first candidate when picking.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element on top.
    pub fn add(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Replace an element by id and move it to the top, or append it.
    pub fn upsert_on_top(&mut self, element: Element) {
        let id = element.id();
        self.elements.retain(|e| e.id() != id);
        self.elements.push(element);
    }

    /// Remove an element.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id() == id)?;
        Some(self.elements.remove(index))
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Get an element by ID.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Get a mutable reference to an element by ID.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// Check whether an element is present.
    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    /// Elements in paint order (back to front).
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Find the topmost element containing `point`.
    pub fn hit_test(&self, point: Point) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|e| e.hit_test(point))
            .map(Element::id)
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Snapshot the scene as JSON for host-side thumbnails or inspection.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
