use crate::animation::Transition;
use crate::widgets::Color;

/// Values of a button that do not vary with its interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub border_width: f32,
    pub corner_radius: f32,
    /// Shadow offset in logical pixels (x, y)
    pub shadow_offset: (f32, f32),
    /// Color of the shadow at full opacity
    pub shadow_color: Color,
    /// Blur radius used when no state configures one
    pub shadow_radius: f32,
    pub font_size: f32,
    /// Title color used when no state configures one
    pub title_color: Color,
    /// Transition of animated state changes. Shadow opacity runs for half
    /// of its duration.
    pub transition: Transition,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            border_width: 1.0,
            corner_radius: 0.0,
            shadow_offset: (0.0, 2.0),
            shadow_color: Color::BLACK.with_alpha(0.6),
            shadow_radius: 3.0,
            font_size: 17.0,
            title_color: Color::BLACK,
            transition: Transition::default(),
        }
    }
}

impl ButtonStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn shadow_offset(mut self, x: f32, y: f32) -> Self {
        self.shadow_offset = (x, y);
        self
    }

    pub fn shadow_color(mut self, color: Color) -> Self {
        self.shadow_color = color;
        self
    }

    pub fn shadow_radius(mut self, radius: f32) -> Self {
        self.shadow_radius = radius;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }

    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }
}
