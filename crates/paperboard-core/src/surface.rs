//! The drawing surface: scene, tools, selection and text placement.

use crate::canvas::Scene;
use crate::elements::{Element, ElementId, ElementStyle, SerializableColor, Stroke, Text};
use crate::input::PointerEvent;
use crate::selection::Selection;
use crate::tools::{ToolKind, ToolManager, ToolState};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a text placement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextRequestId(u64);

impl fmt::Display for TextRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "text-{}", self.0)
    }
}

/// A request for the host to collect a text string.
///
/// Answer it with [`DrawingSurface::commit_text`] or
/// [`DrawingSurface::cancel_text_placement`]. Only the most recent request is
/// live; opening a new one supersedes the previous.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRequest {
    pub id: TextRequestId,
    /// Where the text baseline will start.
    pub position: Point,
}

#[derive(Debug, Clone)]
struct PendingText {
    request: TextRequest,
    /// Style captured when the request was opened.
    style: ElementStyle,
}

/// Runtime state of one whiteboard drawing surface.
///
/// Every operation is synchronous and infallible. Each mutation of the scene
/// or the selection bumps [`revision`](Self::revision) so the host knows when
/// to repaint.
#[derive(Debug, Clone, Default)]
pub struct DrawingSurface {
    scene: Scene,
    tool_manager: ToolManager,
    selection: Selection,
    pending_text: Option<PendingText>,
    next_text_request: u64,
    revision: u64,
}

impl DrawingSurface {
    /// Create a surface with an empty scene and the pen tool active.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected element, if any.
    pub fn selected_element(&self) -> Option<&Element> {
        self.selection.get().and_then(|id| self.scene.get(id))
    }

    pub fn tool(&self) -> ToolKind {
        self.tool_manager.current_tool
    }

    /// Style applied to new elements.
    pub fn style(&self) -> &ElementStyle {
        self.tool_manager.current_style()
    }

    /// Counter bumped on every scene or selection mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether a stroke or shape is being drawn.
    pub fn is_drawing(&self) -> bool {
        matches!(
            self.tool_manager.state,
            ToolState::Stroking { .. } | ToolState::Shaping { .. }
        )
    }

    /// Whether a selected element is being dragged.
    pub fn is_dragging(&self) -> bool {
        matches!(self.tool_manager.state, ToolState::Dragging { .. })
    }

    /// The live text request, if any.
    pub fn pending_text(&self) -> Option<TextRequest> {
        self.pending_text.as_ref().map(|p| p.request)
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    /// Activate a tool.
    ///
    /// Ends any interaction in progress; a provisional shape already in the
    /// scene stays there. Switching away from select clears the selection.
    pub fn set_tool(&mut self, tool: ToolKind) {
        log::debug!(
            "Tool changed: {} -> {}",
            self.tool_manager.current_tool.name(),
            tool.name()
        );
        self.tool_manager.set_tool(tool);
        if tool != ToolKind::Select && self.selection.clear() {
            self.touch();
        }
    }

    /// Color for elements created from now on.
    pub fn set_color(&mut self, color: SerializableColor) {
        self.tool_manager.set_color(color);
    }

    /// Stroke width for elements created from now on, clamped to 1..=20.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.tool_manager.set_stroke_width(width);
    }

    /// Topmost hit-testable element under `point`.
    pub fn hit_test(&self, point: Point) -> Option<ElementId> {
        self.scene.hit_test(point)
    }

    /// Pointer-down with the active tool.
    ///
    /// Returns a text request when the text tool is active; the element is
    /// only created once the host commits the text.
    pub fn begin(&mut self, point: Point) -> Option<TextRequest> {
        // A new press always starts from idle, even without a prior release.
        self.tool_manager.finish();

        match self.tool_manager.current_tool {
            ToolKind::Select => {
                self.begin_select(point);
                None
            }
            ToolKind::Eraser => {
                self.erase_at(point);
                None
            }
            ToolKind::Stroke => {
                self.begin_stroke(point);
                None
            }
            ToolKind::Rectangle | ToolKind::Ellipse => {
                self.begin_shape(point);
                None
            }
            ToolKind::Text => Some(self.begin_text_placement(point)),
        }
    }

    /// Activate `tool` and press at `point`.
    pub fn begin_with(&mut self, tool: ToolKind, point: Point) -> Option<TextRequest> {
        if tool != self.tool_manager.current_tool {
            self.set_tool(tool);
        }
        self.begin(point)
    }

    fn begin_select(&mut self, point: Point) {
        match self.scene.hit_test(point) {
            Some(id) => {
                log::debug!("Selected {id}");
                self.selection.select(id);
                self.tool_manager.state = ToolState::Dragging {
                    element: id,
                    last: point,
                };
                self.touch();
            }
            None => {
                if self.selection.clear() {
                    self.touch();
                }
            }
        }
    }

    fn erase_at(&mut self, point: Point) {
        let Some(id) = self.scene.hit_test(point) else {
            return;
        };
        self.scene.remove(id);
        self.selection.forget(id);
        log::debug!("Erased {id}");
        self.touch();
    }

    fn begin_stroke(&mut self, point: Point) {
        self.selection.clear();
        let stroke = Stroke::new(point, self.tool_manager.current_style().clone());
        let id = stroke.id;
        self.scene.add(Element::Stroke(stroke));
        self.tool_manager.state = ToolState::Stroking { element: id };
        self.touch();
    }

    fn begin_shape(&mut self, point: Point) {
        if self.selection.clear() {
            self.touch();
        }
        // The preview joins the scene on the first extend, not before.
        if let Some(preview) = self.tool_manager.create_preview(point) {
            self.tool_manager.state = ToolState::Shaping {
                anchor: point,
                preview,
            };
        }
    }

    /// Pointer movement while a gesture is active. No-op when idle.
    pub fn extend(&mut self, point: Point) {
        let changed = match &mut self.tool_manager.state {
            ToolState::Idle => false,
            ToolState::Stroking { element } => {
                match self.scene.get_mut(*element).and_then(Element::as_stroke_mut) {
                    Some(stroke) => {
                        stroke.add_point(point);
                        true
                    }
                    None => false,
                }
            }
            ToolState::Shaping { anchor, preview } => {
                match preview {
                    Element::Rectangle(rect) => rect.resize_from_drag(*anchor, point),
                    Element::Ellipse(circle) => circle.resize_from_drag(*anchor, point),
                    Element::Stroke(_) | Element::Text(_) => {}
                }
                self.scene.upsert_on_top(preview.clone());
                true
            }
            ToolState::Dragging { element, last } => {
                let delta = point - *last;
                *last = point;
                match self.scene.get_mut(*element) {
                    Some(target) => {
                        target.translate(delta);
                        true
                    }
                    None => false,
                }
            }
        };

        if changed {
            self.touch();
        }
    }

    /// Pointer release or leave: finalize whatever was in progress.
    ///
    /// A dragged-out shape stays in the scene as is, even with zero size.
    pub fn end(&mut self) {
        match self.tool_manager.finish() {
            ToolState::Shaping { preview, .. } if self.scene.contains(preview.id()) => {
                log::debug!("Finalized {:?} {}", preview.kind(), preview.id());
            }
            ToolState::Stroking { element } => {
                log::debug!("Finalized stroke {element}");
            }
            _ => {}
        }
    }

    /// Empty the scene and clear the selection.
    pub fn clear(&mut self) {
        self.tool_manager.finish();
        self.scene.clear();
        self.selection.clear();
        log::debug!("Cleared surface");
        self.touch();
    }

    /// Open a text placement request at `point`.
    pub fn begin_text_placement(&mut self, point: Point) -> TextRequest {
        if self.selection.clear() {
            self.touch();
        }
        self.next_text_request += 1;
        let request = TextRequest {
            id: TextRequestId(self.next_text_request),
            position: point,
        };
        if let Some(previous) = self.pending_text.take() {
            log::debug!("Text request {} superseded", previous.request.id);
        }
        self.pending_text = Some(PendingText {
            request,
            style: self.tool_manager.current_style().clone(),
        });
        request
    }

    /// Answer a text request. Empty text or a stale id creates nothing.
    pub fn commit_text(
        &mut self,
        request_id: TextRequestId,
        text: impl Into<String>,
    ) -> Option<ElementId> {
        let pending = self
            .pending_text
            .take_if(|pending| pending.request.id == request_id)?;
        let content = text.into();
        if content.is_empty() {
            log::debug!("Text request {request_id} answered with empty text");
            return None;
        }

        let text = Text::new(pending.request.position, content, pending.style);
        let id = text.id;
        self.scene.add(Element::Text(text));
        self.touch();
        Some(id)
    }

    /// Withdraw a text request. Returns true if it was live.
    pub fn cancel_text_placement(&mut self, request_id: TextRequestId) -> bool {
        self.pending_text
            .take_if(|pending| pending.request.id == request_id)
            .is_some()
    }

    /// Route a pointer event to begin/extend/end.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<TextRequest> {
        match event {
            PointerEvent::Down { position } => self.begin(position),
            PointerEvent::Move { position } => {
                self.extend(position);
                None
            }
            PointerEvent::Up { .. } | PointerEvent::Leave => {
                self.end();
                None
            }
        }
    }
}
