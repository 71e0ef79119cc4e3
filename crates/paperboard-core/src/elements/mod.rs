//! Drawable element definitions for the whiteboard scene.

mod ellipse;
mod rectangle;
mod stroke;
mod text;

pub use ellipse::Ellipse;
pub use rectangle::Rectangle;
pub use stroke::Stroke;
pub use text::Text;

use kurbo::{BezPath, Point, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Alpha applied to the stroke color when filling closed shapes.
pub const FILL_ALPHA: u8 = 0x40;

/// Text font size per unit of stroke width.
pub const TEXT_SIZE_PER_WIDTH: f64 = 8.0;

/// Smallest stroke width the surface accepts.
pub const MIN_STROKE_WIDTH: f64 = 1.0;

/// Largest stroke width the surface accepts.
pub const MAX_STROKE_WIDTH: f64 = 20.0;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(color: &str) -> Option<Self> {
        let hex = color.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                // #rgb -> #rrggbb
                let r = channel(&hex[0..1])? * 17;
                let g = channel(&hex[1..2])? * 17;
                let b = channel(&hex[2..3])? * 17;
                Some(Self::new(r, g, b, 255))
            }
            6 => Some(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                255,
            )),
            8 => Some(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])?,
            )),
            _ => None,
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Colors offered by the toolbar palette.
pub const PALETTE: [SerializableColor; 8] = [
    SerializableColor::new(0x3B, 0x82, 0xF6, 255),
    SerializableColor::new(0xEF, 0x44, 0x44, 255),
    SerializableColor::new(0x10, 0xB9, 0x81, 255),
    SerializableColor::new(0xF5, 0x9E, 0x0B, 255),
    SerializableColor::new(0x8B, 0x5C, 0xF6, 255),
    SerializableColor::new(0xEC, 0x48, 0x99, 255),
    SerializableColor::new(0x6B, 0x72, 0x80, 255),
    SerializableColor::new(0x00, 0x00, 0x00, 255),
];

/// Style shared by every element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    /// Stroke (and text) color.
    pub color: SerializableColor,
    /// Stroke width, also used to size text.
    pub stroke_width: f64,
}

impl ElementStyle {
    pub fn new(color: SerializableColor, stroke_width: f64) -> Self {
        Self {
            color,
            stroke_width,
        }
    }

    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.color.into()
    }

    /// Translucent fill used for rectangles and circles.
    pub fn fill(&self) -> Color {
        self.color.with_alpha(FILL_ALPHA).into()
    }

    /// Font size in pixels for text drawn with this style.
    pub fn font_size(&self) -> f64 {
        self.stroke_width * TEXT_SIZE_PER_WIDTH
    }
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            color: PALETTE[0],
            stroke_width: 3.0,
        }
    }
}

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Generate a new time-ordered element id.
pub(crate) fn new_element_id() -> ElementId {
    Uuid::now_v7()
}

/// Common behaviour of all drawable elements.
pub trait ElementTrait {
    /// Get the unique identifier.
    fn id(&self) -> ElementId;

    /// Check if a point lies inside this element.
    fn hit_test(&self, point: Point) -> bool;

    /// Get the path representation for rendering.
    fn to_path(&self) -> BezPath;

    /// Get the style.
    fn style(&self) -> &ElementStyle;

    /// Move the element's anchor by `delta`.
    fn translate(&mut self, delta: Vec2);
}

/// Kind discriminant of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Stroke,
    Rectangle,
    Ellipse,
    Text,
}

/// Enum wrapper for all element types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Stroke(Stroke),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Text(Text),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Stroke(e) => e.id(),
            Element::Rectangle(e) => e.id(),
            Element::Ellipse(e) => e.id(),
            Element::Text(e) => e.id(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Stroke(_) => ElementKind::Stroke,
            Element::Rectangle(_) => ElementKind::Rectangle,
            Element::Ellipse(_) => ElementKind::Ellipse,
            Element::Text(_) => ElementKind::Text,
        }
    }

    pub fn hit_test(&self, point: Point) -> bool {
        match self {
            Element::Stroke(e) => e.hit_test(point),
            Element::Rectangle(e) => e.hit_test(point),
            Element::Ellipse(e) => e.hit_test(point),
            Element::Text(e) => e.hit_test(point),
        }
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            Element::Stroke(e) => e.to_path(),
            Element::Rectangle(e) => e.to_path(),
            Element::Ellipse(e) => e.to_path(),
            Element::Text(e) => e.to_path(),
        }
    }

    pub fn style(&self) -> &ElementStyle {
        match self {
            Element::Stroke(e) => e.style(),
            Element::Rectangle(e) => e.style(),
            Element::Ellipse(e) => e.style(),
            Element::Text(e) => e.style(),
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Element::Stroke(e) => e.translate(delta),
            Element::Rectangle(e) => e.translate(delta),
            Element::Ellipse(e) => e.translate(delta),
            Element::Text(e) => e.translate(delta),
        }
    }

    /// Get the stroke if this element is one.
    pub fn as_stroke_mut(&mut self) -> Option<&mut Stroke> {
        match self {
            Element::Stroke(s) => Some(s),
            _ => None,
        }
    }
}
