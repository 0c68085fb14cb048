//! Per-state appearance values and their resolution.
//!
//! Every visual property of a button (title, title color, image, background,
//! border color, shadow opacity and radius) lives in its own [`PerState`] map.
//! [`resolve`] picks the effective value for the current [`InteractionState`]
//! using one precedence table shared by all properties:
//!
//! disabled > highlighted > selected > normal
//!
//! where a missing highlighted or disabled value can be derived from the
//! normal one when [`AutoAdjust`] allows it.

mod adjust;
mod per_state;
mod resolver;
mod state;

pub use adjust::{
    Adjust, Adjustment, DISABLED_BRIGHTNESS, DISABLED_TINT_ALPHA, HIGHLIGHTED_BRIGHTNESS,
    HIGHLIGHTED_TINT_ALPHA,
};
pub use per_state::PerState;
pub use resolver::{resolve, AutoAdjust};
pub use state::InteractionState;
