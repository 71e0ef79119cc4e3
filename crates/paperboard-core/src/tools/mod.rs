//! Tool system for the whiteboard.

use crate::elements::{
    Element, ElementId, ElementStyle, Ellipse, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH, Rectangle,
    SerializableColor,
};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Stroke,
    Rectangle,
    Ellipse,
    Text,
    Select,
    Eraser,
}

impl ToolKind {
    /// Get display name for this tool.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Stroke => "Pen",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Ellipse => "Circle",
            ToolKind::Text => "Text",
            ToolKind::Select => "Select",
            ToolKind::Eraser => "Eraser",
        }
    }
}

/// State of a tool interaction.
#[derive(Debug, Clone, Default)]
pub enum ToolState {
    /// Tool is idle, waiting for interaction.
    #[default]
    Idle,
    /// A stroke in the scene is receiving points.
    Stroking {
        /// Stroke being extended.
        element: ElementId,
    },
    /// A shape is being dragged out from `anchor`.
    Shaping {
        /// Pointer-down position; never moves during the gesture.
        anchor: Point,
        /// Provisional shape, upserted into the scene on every extend.
        preview: Element,
    },
    /// A selected element follows the pointer.
    Dragging {
        /// Element being moved.
        element: ElementId,
        /// Last pointer position seen.
        last: Point,
    },
}

/// Manages the current tool, its state and the style for new elements.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Current state of the tool.
    pub state: ToolState,
    /// Current style to apply to new elements.
    current_style: ElementStyle,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current tool, abandoning any interaction in progress.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.current_tool = tool;
        self.state = ToolState::Idle;
    }

    /// Style applied to newly created elements.
    pub fn current_style(&self) -> &ElementStyle {
        &self.current_style
    }

    pub fn set_color(&mut self, color: SerializableColor) {
        self.current_style.color = color;
    }

    /// Set the stroke width, clamped to the supported range.
    pub fn set_stroke_width(&mut self, width: f64) {
        let width = if width.is_finite() { width } else { MIN_STROKE_WIDTH };
        self.current_style.stroke_width = width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
    }

    /// Build the zero-extent provisional shape for the current tool.
    pub fn create_preview(&self, anchor: Point) -> Option<Element> {
        let style = self.current_style.clone();
        match self.current_tool {
            ToolKind::Rectangle => Some(Element::Rectangle(Rectangle::new(anchor, 0.0, 0.0, style))),
            ToolKind::Ellipse => Some(Element::Ellipse(Ellipse::new(anchor, 0.0, style))),
            _ => None,
        }
    }

    /// Leave any draw or drag mode.
    pub fn finish(&mut self) -> ToolState {
        std::mem::take(&mut self.state)
    }
}
