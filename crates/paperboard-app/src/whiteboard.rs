//! The whiteboard view: a drawing surface bound to a raster target.

use kurbo::{Point, Size};
use paperboard_core::{
    BoardInfo, DrawingSurface, ElementId, PointerEvent, SerializableColor, TextRequest,
    TextRequestId, ToolKind,
};
use paperboard_render::{
    DEFAULT_GRID_SIZE, GlyphRenderer, GridStyle, Pixmap, RenderContext, Renderer,
    SoftwareRenderer, encode_png,
};
use peniko::Color;

use crate::config::AppConfig;
use crate::error::AppError;

/// Colors and grid settings applied on every repaint.
#[derive(Debug, Clone, Copy)]
pub struct RenderStyle {
    pub background: Color,
    pub grid_style: GridStyle,
    pub grid_size: f64,
    pub grid_color: Color,
    pub selection_color: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            grid_style: GridStyle::Lines,
            grid_size: DEFAULT_GRID_SIZE,
            grid_color: Color::from_rgba8(0xf0, 0xf0, 0xf0, 255),
            selection_color: Color::from_rgba8(59, 130, 246, 255),
        }
    }
}

/// A PNG snapshot of the rendered whiteboard.
#[derive(Debug, Clone)]
pub struct RasterExport {
    /// Suggested file name, derived from the whiteboard name.
    pub file_name: String,
    /// Encoded PNG bytes.
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// A drawing surface plus everything needed to show it.
///
/// The raster target only exists while mounted. Every operation that changes
/// the surface repaints the target before returning.
#[derive(Debug)]
pub struct Whiteboard {
    surface: DrawingSurface,
    renderer: SoftwareRenderer,
    style: RenderStyle,
    info: BoardInfo,
    target: Option<Pixmap>,
    container: Size,
    painted_revision: Option<u64>,
}

impl Whiteboard {
    pub fn new(info: BoardInfo, renderer: SoftwareRenderer, style: RenderStyle) -> Self {
        Self {
            surface: DrawingSurface::new(),
            renderer,
            style,
            info,
            target: None,
            container: Size::ZERO,
            painted_revision: None,
        }
    }

    /// Build an unmounted whiteboard from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let style = config.render_style()?;
        let glyphs = match &config.text.font {
            Some(path) => GlyphRenderer::from_file(path)?,
            None => GlyphRenderer::embedded()?,
        };

        let info = BoardInfo {
            whiteboard_name: config.board.name.clone(),
            team_name: config.board.team.clone(),
            member_count: config.board.members,
        };

        Ok(Self::new(info, SoftwareRenderer::with_glyphs(glyphs), style))
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn info(&self) -> &BoardInfo {
        &self.info
    }

    pub fn set_info(&mut self, info: BoardInfo) {
        self.info = info;
    }

    /// Header title.
    pub fn title(&self) -> &str {
        self.info.title()
    }

    /// The raster target, if mounted.
    pub fn target(&self) -> Option<&Pixmap> {
        self.target.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.target.is_some()
    }

    /// Attach a raster target sized to the container and paint it.
    pub fn mount(&mut self, width: u32, height: u32) {
        log::info!("Mounting whiteboard '{}' at {width}x{height}", self.title());
        let team = self.info.subtitle();
        if !team.is_empty() {
            log::info!("Team '{team}', {} members", self.info.member_count);
        }
        self.container = Size::new(f64::from(width), f64::from(height));
        self.target = Some(Pixmap::new(width, height));
        self.repaint();
    }

    /// The container changed size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.container = Size::new(f64::from(width), f64::from(height));
        self.repaint();
    }

    /// Drop the raster target. Painting and export become no-ops.
    pub fn unmount(&mut self) {
        self.target = None;
        self.painted_revision = None;
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<TextRequest> {
        let request = self.surface.handle_pointer(event);
        self.sync();
        request
    }

    pub fn pointer_down(&mut self, position: Point) -> Option<TextRequest> {
        self.handle_pointer(PointerEvent::Down { position })
    }

    pub fn pointer_move(&mut self, position: Point) {
        self.handle_pointer(PointerEvent::Move { position });
    }

    pub fn pointer_up(&mut self, position: Point) {
        self.handle_pointer(PointerEvent::Up { position });
    }

    pub fn pointer_leave(&mut self) {
        self.handle_pointer(PointerEvent::Leave);
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.surface.set_tool(tool);
        self.sync();
    }

    pub fn set_color(&mut self, color: SerializableColor) {
        self.surface.set_color(color);
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        self.surface.set_stroke_width(width);
    }

    /// The live text request, if any.
    pub fn pending_text(&self) -> Option<TextRequest> {
        self.surface.pending_text()
    }

    pub fn commit_text(&mut self, request: TextRequestId, text: impl Into<String>) -> Option<ElementId> {
        let id = self.surface.commit_text(request, text);
        self.sync();
        id
    }

    pub fn cancel_text(&mut self, request: TextRequestId) -> bool {
        self.surface.cancel_text_placement(request)
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.surface.clear();
        self.sync();
    }

    /// Repaint if the surface changed since the last paint.
    fn sync(&mut self) {
        if self.painted_revision != Some(self.surface.revision()) {
            self.repaint();
        }
    }

    /// Full repaint of the raster target. No-op when unmounted.
    pub fn repaint(&mut self) {
        let Some(target) = self.target.as_mut() else {
            log::trace!("Repaint skipped: no raster target");
            return;
        };

        let ctx = RenderContext::new(&self.surface, self.container)
            .with_background(self.style.background)
            .with_grid(self.style.grid_style)
            .with_grid_lines(self.style.grid_size, self.style.grid_color)
            .with_selection_color(self.style.selection_color);
        self.renderer.paint(&ctx, target);
        self.painted_revision = Some(self.surface.revision());
    }

    /// Encode the current raster as PNG.
    ///
    /// Returns `None` when there is nothing to export: unmounted, a zero-sized
    /// target, or an encoding failure (logged).
    pub fn export_raster(&self) -> Option<RasterExport> {
        let Some(target) = self.target.as_ref() else {
            log::warn!("Export skipped: whiteboard is not mounted");
            return None;
        };
        if target.is_empty() {
            log::warn!("Export skipped: raster target has no pixels");
            return None;
        }

        match encode_png(target) {
            Ok(png) => Some(RasterExport {
                file_name: self.info.export_file_name(),
                png,
                width: target.width(),
                height: target.height(),
            }),
            Err(e) => {
                log::error!("Failed to encode PNG: {}", e);
                None
            }
        }
    }
}
