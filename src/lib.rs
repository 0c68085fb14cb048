//! A push button whose every visual property is configured per interaction
//! state.
//!
//! The crate is split the way a host toolkit consumes it:
//!
//! - [`appearance`] resolves the effective value of a property for the
//!   current [`InteractionState`](appearance::InteractionState).
//! - [`layout`] places the image and the title inside the button's box.
//! - [`widgets`] holds the [`DynamicButton`](widgets::DynamicButton) itself
//!   and the values it is configured with.
//! - [`renderer`] records what the button paints and measures titles.
//! - [`animation`] and [`jobs`] carry state changes from the setters to the
//!   presented values.

pub mod animation;
pub mod appearance;
pub mod error;
pub mod jobs;
pub mod layout;
pub mod renderer;
pub mod widgets;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::animation::{TimingFunction, Transition};
    pub use crate::appearance::{AutoAdjust, InteractionState};
    pub use crate::jobs::{ChangeFlags, Wakeup};
    pub use crate::layout::{
        Axis, Constraints, ContentFrames, HorizontalAlignment, ImageAlignment, LayoutConfig, Size,
        VerticalAlignment,
    };
    pub use crate::renderer::{CosmicTextMeasurer, DrawCommand, PaintContext, TextMeasure};
    pub use crate::widgets::{
        Background, ButtonImage, ButtonStyle, Color, DynamicButton, EdgeInsets, Event,
        EventResponse, Gradient, GradientDirection, ImageSource, MouseButton, Rect, Widget,
    };
}
