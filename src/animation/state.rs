use std::time::Instant;

use super::{Animatable, Transition};

/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (animation not running or same value)
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// A property that interpolates towards a target over a [`Transition`].
///
/// Starting a new transition while one is running restarts from the current
/// interpolated value, so the last target set always wins.
pub struct AnimationState<T: Animatable> {
    /// Current interpolated value
    current: T,
    /// Value being animated towards
    target: T,
    /// Value when the animation started
    start: T,
    /// Progress from 0.0 to 1.0
    progress: f32,
    /// Time when the animation started
    start_time: Instant,
    transition: Transition,
}

impl<T: Animatable> AnimationState<T> {
    pub fn new(initial_value: T, transition: Transition) -> Self {
        Self {
            current: initial_value.clone(),
            target: initial_value.clone(),
            start: initial_value,
            progress: 1.0, // Start completed
            start_time: Instant::now(),
            transition,
        }
    }

    /// Start animating to a new target value from wherever the value is now
    pub fn animate_to(&mut self, new_target: T, now: Instant) {
        // Don't restart if we're already animating to this target
        if new_target == self.target {
            return;
        }

        if self.transition.duration.is_zero() {
            self.set_immediate(new_target);
            return;
        }

        self.start = self.current.clone();
        self.target = new_target;
        self.progress = 0.0;
        self.start_time = now;
    }

    /// Advance the animation to `now` and return whether the value changed
    pub fn advance(&mut self, now: Instant) -> AdvanceResult<T> {
        if self.progress >= 1.0 {
            return AdvanceResult::NoChange;
        }

        let elapsed = now.saturating_duration_since(self.start_time);
        let t = (elapsed.as_secs_f32() / self.transition.duration.as_secs_f32()).min(1.0);
        self.progress = t;

        let new_value = if t >= 1.0 {
            self.target.clone()
        } else {
            T::lerp(&self.start, &self.target, self.transition.timing.evaluate(t))
        };

        if new_value == self.current {
            return AdvanceResult::NoChange;
        }
        self.current = new_value.clone();
        AdvanceResult::Changed(new_value)
    }

    /// Check if animation is still running
    pub fn is_animating(&self) -> bool {
        self.progress < 1.0
    }

    /// Get current value
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Get target value
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Set value immediately without animation, cancelling any running one
    pub fn set_immediate(&mut self, value: T) {
        self.current = value.clone();
        self.target = value.clone();
        self.start = value;
        self.progress = 1.0;
    }

    /// Use `transition` for the next target. A running animation keeps going
    /// on the new curve.
    pub fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }
}

impl<T: Animatable + std::fmt::Debug> std::fmt::Debug for AnimationState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationState")
            .field("current", &self.current)
            .field("target", &self.target)
            .field("progress", &self.progress)
            .finish()
    }
}
