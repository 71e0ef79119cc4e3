//! CPU renderer painting a [`DrawingSurface`](paperboard_core::DrawingSurface)
//! into a [`Pixmap`] with vello_cpu.

use crate::glyphs::GlyphRenderer;
use crate::pixmap::Pixmap;
use crate::renderer::{ElementRenderer, GridStyle, RenderContext, Renderer};
use kurbo::{BezPath, Cap, Join, Rect, Shape as KurboShape, Stroke};
use paperboard_core::elements::{Element, ElementStyle};
use paperboard_core::selection::{HIGHLIGHT_DASH, HIGHLIGHT_WIDTH, highlight_path};
use peniko::{Color, Fill};
use vello_cpu::RenderContext as Scene;

/// Width of a grid line in pixels.
const GRID_LINE_WIDTH: f64 = 1.0;

/// Software renderer: full repaint on every call.
#[derive(Debug, Default)]
pub struct SoftwareRenderer {
    /// Text is skipped when no font is loaded.
    glyphs: Option<GlyphRenderer>,
}

impl SoftwareRenderer {
    /// Create a renderer without a font.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer that draws text with `glyphs`.
    pub fn with_glyphs(glyphs: GlyphRenderer) -> Self {
        Self {
            glyphs: Some(glyphs),
        }
    }

    fn outline_stroke(style: &ElementStyle) -> Stroke {
        Stroke::new(style.stroke_width)
            .with_caps(Cap::Round)
            .with_join(Join::Round)
    }

    fn fill(scene: &mut Scene, path: &BezPath, color: Color) {
        scene.set_paint(color);
        scene.set_fill_rule(Fill::NonZero);
        scene.fill_path(path);
    }

    fn stroke(scene: &mut Scene, path: &BezPath, stroke: Stroke, color: Color) {
        scene.set_paint(color);
        scene.set_stroke(stroke);
        scene.stroke_path(path);
    }

    /// Fill a closed shape with the translucent style fill, then outline it.
    fn render_filled(&mut self, path: &BezPath, style: &ElementStyle, scene: &mut Scene) {
        Self::fill(scene, path, style.fill());
        Self::stroke(scene, path, Self::outline_stroke(style), style.stroke());
    }
}

impl Renderer for SoftwareRenderer {
    fn paint(&mut self, ctx: &RenderContext, target: &mut Pixmap) {
        let (width, height) = ctx.pixel_size();
        if width == 0 || height == 0 {
            target.resize(u32::from(width), u32::from(height));
            return;
        }

        let mut scene = Scene::new(width, height);
        scene.set_paint(self.background_color(ctx));
        scene.fill_rect(&Rect::new(0.0, 0.0, f64::from(width), f64::from(height)));
        if ctx.grid_style == GridStyle::Lines {
            self.render_grid(ctx, &mut scene);
        }

        let elements = ctx.surface.scene().elements();
        for element in elements {
            self.render_element(element, &mut scene);
        }

        if let Some(selected) = ctx.surface.selected_element() {
            self.render_selection(selected, ctx.selection_color, &mut scene);
        }

        scene.flush();
        let mut frame = vello_cpu::Pixmap::new(width, height);
        scene.render_to_pixmap(&mut frame);
        target.load_premultiplied(&frame);
        log::trace!("Painted {} elements at {width}x{height}", elements.len());
    }
}

impl ElementRenderer for SoftwareRenderer {
    fn render_element(&mut self, element: &Element, scene: &mut Scene) {
        let style = element.style();
        match element {
            Element::Stroke(stroke) if stroke.len() > 1 => {
                Self::stroke(scene, &element.to_path(), Self::outline_stroke(style), style.stroke());
            }
            Element::Rectangle(rect) if rect.has_area() => {
                self.render_filled(&element.to_path(), style, scene);
            }
            Element::Ellipse(circle) if circle.diameter != 0.0 => {
                self.render_filled(&element.to_path(), style, scene);
            }
            Element::Text(text) if !text.content.is_empty() => match &self.glyphs {
                Some(glyphs) => {
                    let path = glyphs.text_path(&text.content, text.position, text.font_size());
                    Self::fill(scene, &path, style.stroke());
                }
                None => log::trace!("No font loaded, skipping text {}", element.id()),
            },
            _ => {}
        }
    }

    fn render_grid(&mut self, ctx: &RenderContext, scene: &mut Scene) {
        let size = ctx.grid_size;
        if !(size.is_finite() && size > 0.0) {
            return;
        }
        let width = ctx.viewport_size.width;
        let height = ctx.viewport_size.height;
        let half = GRID_LINE_WIDTH / 2.0;

        // Each line is a thin rectangle centered on the grid coordinate.
        let mut path = BezPath::new();
        let mut x = 0.0;
        while x <= width {
            path.extend(Rect::new(x - half, 0.0, x + half, height).path_elements(0.1));
            x += size;
        }
        let mut y = 0.0;
        while y <= height {
            path.extend(Rect::new(0.0, y - half, width, y + half).path_elements(0.1));
            y += size;
        }
        Self::fill(scene, &path, ctx.grid_color);
    }

    fn render_selection(&mut self, element: &Element, color: Color, scene: &mut Scene) {
        let Some(path) = highlight_path(element) else {
            return;
        };
        let stroke = Stroke::new(HIGHLIGHT_WIDTH).with_dashes(0.0, HIGHLIGHT_DASH);
        Self::stroke(scene, &path, stroke, color);
    }
}
