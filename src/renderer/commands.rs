//! Draw command definitions recorded by widgets.

use crate::widgets::{Background, ButtonImage, Color, Rect};

/// Border definition for shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    /// Border width in logical pixels
    pub width: f32,
    /// Border color
    pub color: Color,
}

impl Border {
    /// Create a new border.
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Drop shadow cast by a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Shadow offset in logical pixels (x, y)
    pub offset: (f32, f32),
    /// Blur radius in logical pixels
    pub blur: f32,
    /// Shadow color, its alpha already multiplied by the opacity
    pub color: Color,
}

impl Shadow {
    pub fn new(offset: (f32, f32), blur: f32, color: Color) -> Self {
        Self {
            offset,
            blur,
            color,
        }
    }

    /// A shadow with nothing to draw.
    pub fn is_invisible(&self) -> bool {
        self.color.a <= 0.0
    }
}

/// A single draw operation in the coordinate space of the surface.
///
/// Commands are recorded back to front.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Shadow of a rounded rectangle.
    Shadow {
        rect: Rect,
        /// Corner radius in logical pixels
        radius: f32,
        shadow: Shadow,
    },

    /// Filled rounded rectangle.
    RoundedRect {
        rect: Rect,
        /// Solid color or gradient fill
        fill: Background,
        radius: f32,
    },

    /// Hollow rounded rectangle (just the border outline).
    Border {
        rect: Rect,
        radius: f32,
        border: Border,
    },

    /// Draw text.
    Text {
        /// The text string to render
        text: String,
        /// The bounding rectangle for the text
        rect: Rect,
        /// The text color
        color: Color,
        /// The font size in logical pixels
        font_size: f32,
    },

    /// Draw an image scaled into `rect`.
    Image { image: ButtonImage, rect: Rect },
}
