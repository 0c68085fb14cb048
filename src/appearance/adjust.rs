//! Automatic derivation of highlighted and disabled values from the normal one.

use crate::widgets::{Background, ButtonImage, Color, Gradient};

/// Brightness factor applied to colors of a highlighted control.
pub const HIGHLIGHTED_BRIGHTNESS: f32 = 1.2;
/// Brightness factor applied to colors of a disabled control.
pub const DISABLED_BRIGHTNESS: f32 = 0.8;
/// Alpha of the white tint laid over the image of a highlighted control.
pub const HIGHLIGHTED_TINT_ALPHA: f32 = 0.3;
/// Alpha of the white tint laid over the image of a disabled control.
pub const DISABLED_TINT_ALPHA: f32 = 0.5;

/// Which automatic derivation to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Highlighted,
    Disabled,
}

impl Adjustment {
    pub fn brightness_factor(self) -> f32 {
        match self {
            Adjustment::Highlighted => HIGHLIGHTED_BRIGHTNESS,
            Adjustment::Disabled => DISABLED_BRIGHTNESS,
        }
    }

    pub fn tint_alpha(self) -> f32 {
        match self {
            Adjustment::Highlighted => HIGHLIGHTED_TINT_ALPHA,
            Adjustment::Disabled => DISABLED_TINT_ALPHA,
        }
    }
}

/// Values that can be derived from a normal-state value.
///
/// `None` means the type has no derivation for that adjustment and the
/// resolver moves on to the next rule.
pub trait Adjust: Sized {
    fn adjusted(&self, adjustment: Adjustment) -> Option<Self>;
}

impl Adjust for Color {
    fn adjusted(&self, adjustment: Adjustment) -> Option<Self> {
        Some(self.with_brightness_factor(adjustment.brightness_factor()))
    }
}

impl Adjust for Gradient {
    fn adjusted(&self, adjustment: Adjustment) -> Option<Self> {
        let factor = adjustment.brightness_factor();
        Some(self.map_colors(|color| color.with_brightness_factor(factor)))
    }
}

impl Adjust for Background {
    fn adjusted(&self, adjustment: Adjustment) -> Option<Self> {
        match self {
            Background::Solid(color) => color.adjusted(adjustment).map(Background::Solid),
            Background::Gradient(gradient) => gradient.adjusted(adjustment).map(Background::Gradient),
        }
    }
}

impl Adjust for ButtonImage {
    fn adjusted(&self, adjustment: Adjustment) -> Option<Self> {
        Some(self.tinted(Color::WHITE, adjustment.tint_alpha()))
    }
}

/// Shadow opacity and radius: pressing flattens the shadow.
impl Adjust for f32 {
    fn adjusted(&self, adjustment: Adjustment) -> Option<Self> {
        match adjustment {
            Adjustment::Highlighted => Some(0.0),
            Adjustment::Disabled => None,
        }
    }
}

impl Adjust for String {
    fn adjusted(&self, _adjustment: Adjustment) -> Option<Self> {
        None
    }
}
