//! Gradient backgrounds.

use super::Color;

/// A point in the unit square of a box, `(0, 0)` being its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitPoint {
    pub x: f32,
    pub y: f32,
}

impl UnitPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Direction a gradient runs in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientDirection {
    /// Bottom to top
    Vertical,
    /// Left to right
    Horizontal,
    /// Between two caller-chosen unit points
    Custom { start: UnitPoint, end: UnitPoint },
}

impl GradientDirection {
    pub fn start_point(&self) -> UnitPoint {
        match self {
            GradientDirection::Vertical => UnitPoint::new(0.5, 1.0),
            GradientDirection::Horizontal => UnitPoint::new(0.0, 0.5),
            GradientDirection::Custom { start, .. } => *start,
        }
    }

    pub fn end_point(&self) -> UnitPoint {
        match self {
            GradientDirection::Vertical => UnitPoint::new(0.5, 0.0),
            GradientDirection::Horizontal => UnitPoint::new(1.0, 0.5),
            GradientDirection::Custom { end, .. } => *end,
        }
    }
}

/// Linear gradient with any number of evenly spaced color stops.
///
/// A gradient without colors is accepted but never painted.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    colors: Vec<Color>,
    direction: GradientDirection,
}

impl Gradient {
    pub fn new(colors: impl Into<Vec<Color>>, direction: GradientDirection) -> Self {
        Self {
            colors: colors.into(),
            direction,
        }
    }

    pub fn vertical(colors: impl Into<Vec<Color>>) -> Self {
        Self::new(colors, GradientDirection::Vertical)
    }

    pub fn horizontal(colors: impl Into<Vec<Color>>) -> Self {
        Self::new(colors, GradientDirection::Horizontal)
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn direction(&self) -> GradientDirection {
        self.direction
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// A new gradient with `f` applied to every stop, keeping order and direction.
    pub fn map_colors(&self, f: impl Fn(&Color) -> Color) -> Self {
        Self {
            colors: self.colors.iter().map(f).collect(),
            direction: self.direction,
        }
    }
}

/// What fills the button behind its content.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Solid(Color),
    Gradient(Gradient),
}

impl Background {
    /// Collapse degenerate gradients: no stops is no background, one stop is
    /// a solid color.
    pub fn normalized(self) -> Option<Background> {
        match self {
            Background::Gradient(gradient) => match gradient.colors().len() {
                0 => None,
                1 => Some(Background::Solid(gradient.colors()[0])),
                _ => Some(Background::Gradient(gradient)),
            },
            solid => Some(solid),
        }
    }
}

impl From<Color> for Background {
    fn from(color: Color) -> Self {
        Background::Solid(color)
    }
}

impl From<Gradient> for Background {
    fn from(gradient: Gradient) -> Self {
        Background::Gradient(gradient)
    }
}
