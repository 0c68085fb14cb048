mod animatable;
mod state;
mod timing;

use std::time::Duration;

pub use animatable::Animatable;
pub use state::{AdvanceResult, AnimationState};
pub use timing::TimingFunction;

/// How long a property takes to reach a new value, and along which curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub timing: TimingFunction,
}

impl Transition {
    pub fn new(duration: Duration, timing: TimingFunction) -> Self {
        Self { duration, timing }
    }

    /// Ease-out transition lasting `millis` milliseconds
    pub fn ease_out(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis), TimingFunction::EaseOut)
    }

    /// A transition that applies values at once.
    pub fn none() -> Self {
        Self::new(Duration::ZERO, TimingFunction::Linear)
    }

    /// Same curve, scaled duration.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            duration: Duration::from_nanos(
                (self.duration.as_nanos() as f64 * f64::from(factor.max(0.0))).round() as u64,
            ),
            timing: self.timing,
        }
    }
}

impl Default for Transition {
    /// 150 ms ease-out, the duration of a button state change
    fn default() -> Self {
        Self::ease_out(150)
    }
}
