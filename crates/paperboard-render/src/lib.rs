//! Paperboard Render Library
//!
//! Renderer abstraction and a vello_cpu implementation for Paperboard
//! surfaces. Paints into an RGBA [`Pixmap`] which can be encoded as PNG.

mod export;
mod glyphs;
mod pixmap;
mod renderer;
mod software;

pub use export::encode_png;
pub use glyphs::GlyphRenderer;
pub use pixmap::Pixmap;
pub use renderer::{
    DEFAULT_GRID_SIZE, ElementRenderer, GridStyle, RenderContext, RenderResult, Renderer,
    RendererError,
};
pub use software::SoftwareRenderer;
