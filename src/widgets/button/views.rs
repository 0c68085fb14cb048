//! What the button currently presents.
//!
//! Resolved appearances are pushed into [`ButtonViews`]. Title text, image and
//! gradient are swapped at once; colors and the shadow interpolate when the
//! change is animated.

use std::time::Instant;

use crate::animation::{Animatable, AnimationState, Transition};
use crate::jobs::ChangeFlags;
use crate::widgets::{Background, ButtonImage, Color, Gradient};

use super::properties::Appearance;
use super::style::ButtonStyle;

pub struct ButtonViews {
    title: Option<String>,
    image: Option<ButtonImage>,
    gradient: Option<Gradient>,
    background_color: AnimationState<Option<Color>>,
    border_color: AnimationState<Option<Color>>,
    title_color: AnimationState<Color>,
    shadow_opacity: AnimationState<f32>,
    shadow_radius: AnimationState<f32>,
}

impl ButtonViews {
    pub fn new(style: &ButtonStyle) -> Self {
        let transition = style.transition;
        Self {
            title: None,
            image: None,
            gradient: None,
            background_color: AnimationState::new(None, transition),
            border_color: AnimationState::new(None, transition),
            title_color: AnimationState::new(style.title_color, transition),
            // Opacity settles in half the time of the other properties
            shadow_opacity: AnimationState::new(0.0, transition.scaled(0.5)),
            shadow_radius: AnimationState::new(style.shadow_radius, transition),
        }
    }

    /// Use `transition` for later animated changes.
    pub fn set_transition(&mut self, transition: Transition) {
        self.background_color.set_transition(transition);
        self.border_color.set_transition(transition);
        self.title_color.set_transition(transition);
        self.shadow_opacity.set_transition(transition.scaled(0.5));
        self.shadow_radius.set_transition(transition);
    }

    /// Present `appearance`, falling back to `style` for unresolved values.
    pub fn apply(
        &mut self,
        appearance: Appearance,
        style: &ButtonStyle,
        animated: bool,
        now: Instant,
    ) -> ChangeFlags {
        let mut changes = ChangeFlags::empty();

        if self.title != appearance.title {
            self.title = appearance.title;
            changes |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
        }
        if self.image != appearance.image {
            self.image = appearance.image;
            changes |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
        }

        let (background_color, gradient) = match appearance.background {
            Some(Background::Solid(color)) => (Some(color), None),
            Some(Background::Gradient(gradient)) => (None, Some(gradient)),
            None => (None, None),
        };
        if self.gradient != gradient {
            self.gradient = gradient;
            changes |= ChangeFlags::NEEDS_PAINT;
        }
        // No cross-fade between a solid color and a gradient
        let background_animated = animated && self.gradient.is_none();

        changes |= transition_to(
            &mut self.background_color,
            background_color,
            background_animated,
            now,
        );
        changes |= transition_to(&mut self.border_color, appearance.border_color, animated, now);
        changes |= transition_to(
            &mut self.title_color,
            appearance.title_color.unwrap_or(style.title_color),
            animated,
            now,
        );
        changes |= transition_to(
            &mut self.shadow_opacity,
            appearance.shadow_opacity.unwrap_or(0.0),
            animated,
            now,
        );
        changes |= transition_to(
            &mut self.shadow_radius,
            appearance.shadow_radius.unwrap_or(style.shadow_radius),
            animated,
            now,
        );

        changes
    }

    /// Advance running transitions to `now`.
    /// Returns true if any presented value changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut changed = false;
        changed |= self.background_color.advance(now).is_changed();
        changed |= self.border_color.advance(now).is_changed();
        changed |= self.title_color.advance(now).is_changed();
        changed |= self.shadow_opacity.advance(now).is_changed();
        changed |= self.shadow_radius.advance(now).is_changed();
        changed
    }

    pub fn is_animating(&self) -> bool {
        self.background_color.is_animating()
            || self.border_color.is_animating()
            || self.title_color.is_animating()
            || self.shadow_opacity.is_animating()
            || self.shadow_radius.is_animating()
    }

    /// Title text, if there is one worth laying out.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.is_empty())
    }

    pub fn image(&self) -> Option<&ButtonImage> {
        self.image.as_ref()
    }

    pub fn gradient(&self) -> Option<&Gradient> {
        self.gradient.as_ref()
    }

    pub fn background_color(&self) -> Option<Color> {
        *self.background_color.current()
    }

    /// The background as painted right now.
    pub fn background(&self) -> Option<Background> {
        match (&self.gradient, self.background_color()) {
            (Some(gradient), _) => Some(Background::Gradient(gradient.clone())),
            (None, Some(color)) => Some(Background::Solid(color)),
            (None, None) => None,
        }
    }

    pub fn border_color(&self) -> Option<Color> {
        *self.border_color.current()
    }

    pub fn title_color(&self) -> Color {
        *self.title_color.current()
    }

    pub fn shadow_opacity(&self) -> f32 {
        *self.shadow_opacity.current()
    }

    pub fn shadow_radius(&self) -> f32 {
        *self.shadow_radius.current()
    }
}

fn transition_to<T: Animatable>(
    state: &mut AnimationState<T>,
    value: T,
    animated: bool,
    now: Instant,
) -> ChangeFlags {
    if animated {
        if *state.target() == value {
            return ChangeFlags::empty();
        }
        state.animate_to(value, now);
    } else {
        if *state.current() == value && !state.is_animating() {
            return ChangeFlags::empty();
        }
        state.set_immediate(value);
    }
    ChangeFlags::NEEDS_PAINT
}
