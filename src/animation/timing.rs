//! Easing curves for state transitions.

/// Maps linear progress to eased progress, both in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimingFunction {
    Linear,
    EaseIn,
    /// Decelerates into the target. Used for button state changes.
    #[default]
    EaseOut,
    EaseInOut,
}

impl TimingFunction {
    /// Eased progress at `t`. Input outside `0.0..=1.0` is clamped.
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => t * t,
            TimingFunction::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            TimingFunction::EaseInOut if t < 0.5 => 2.0 * t * t,
            TimingFunction::EaseInOut => 1.0 - 2.0 * (1.0 - t) * (1.0 - t),
        }
    }
}
