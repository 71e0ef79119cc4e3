//! Renderer trait abstraction.

use crate::pixmap::Pixmap;
use kurbo::Size;
use paperboard_core::DrawingSurface;
use paperboard_core::elements::Element;
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Font loading failed: {0}")]
    Font(String),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Grid display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridStyle {
    /// No grid (plain background).
    None,
    /// Full grid lines.
    #[default]
    Lines,
}

impl GridStyle {
    /// Parse a style name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "none" => Some(GridStyle::None),
            "lines" => Some(GridStyle::Lines),
            _ => None,
        }
    }
}

/// Default spacing of grid lines in pixels.
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The surface to render.
    pub surface: &'a DrawingSurface,
    /// Size of the container; the target is resized to match.
    pub viewport_size: Size,
    /// Background color.
    pub background_color: Color,
    /// Grid display style.
    pub grid_style: GridStyle,
    /// Spacing between grid lines.
    pub grid_size: f64,
    /// Grid line color.
    pub grid_color: Color,
    /// Selection highlight color.
    pub selection_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(surface: &'a DrawingSurface, viewport_size: Size) -> Self {
        Self {
            surface,
            viewport_size,
            background_color: Color::WHITE,
            grid_style: GridStyle::Lines,
            grid_size: DEFAULT_GRID_SIZE,
            grid_color: Color::from_rgba8(0xf0, 0xf0, 0xf0, 255),
            selection_color: Color::from_rgba8(59, 130, 246, 255), // Blue
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the grid style.
    pub fn with_grid(mut self, style: GridStyle) -> Self {
        self.grid_style = style;
        self
    }

    /// Set the grid spacing and line color.
    pub fn with_grid_lines(mut self, size: f64, color: Color) -> Self {
        self.grid_size = size;
        self.grid_color = color;
        self
    }

    /// Set the selection highlight color.
    pub fn with_selection_color(mut self, color: Color) -> Self {
        self.selection_color = color;
        self
    }

    /// Target size in whole pixels, capped at the largest frame the
    /// rasterizer supports.
    pub fn pixel_size(&self) -> (u16, u16) {
        let to_px = |v: f64| {
            if v.is_finite() && v > 0.0 {
                v.round().min(f64::from(u16::MAX)) as u16
            } else {
                0
            }
        };
        (to_px(self.viewport_size.width), to_px(self.viewport_size.height))
    }
}

/// Trait for rendering backends.
pub trait Renderer: Send + Sync {
    /// Repaint `target` from scratch: resize, background, grid, elements and
    /// the selection overlay.
    fn paint(&mut self, ctx: &RenderContext, target: &mut Pixmap);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

/// Helper trait for element rendering (used internally by renderers).
///
/// Draw calls are recorded into a vello_cpu context and rasterized once the
/// frame is complete.
pub trait ElementRenderer {
    /// Render one element with its own style.
    fn render_element(&mut self, element: &Element, scene: &mut vello_cpu::RenderContext);

    /// Render the reference grid over the whole frame.
    fn render_grid(&mut self, ctx: &RenderContext, scene: &mut vello_cpu::RenderContext);

    /// Render the selection outline of an element.
    fn render_selection(&mut self, element: &Element, color: Color, scene: &mut vello_cpu::RenderContext);
}
