//! Paperboard Core Library
//!
//! Platform-agnostic data model and drawing state machine for the Paperboard
//! whiteboard. Hosts feed pointer events in and read the scene back out.

pub mod board;
pub mod canvas;
pub mod elements;
pub mod input;
pub mod selection;
pub mod surface;
pub mod tools;

pub use board::BoardInfo;
pub use canvas::Scene;
pub use elements::{
    Element, ElementId, ElementKind, ElementStyle, Ellipse, PALETTE, Rectangle, SerializableColor,
    Stroke, Text,
};
pub use input::PointerEvent;
pub use selection::Selection;
pub use surface::{DrawingSurface, TextRequest, TextRequestId};
pub use tools::{ToolKind, ToolManager, ToolState};
