//! The per-state values a button is configured with, and their resolution.

use crate::appearance::{resolve, AutoAdjust, InteractionState, PerState};
use crate::widgets::{Background, ButtonImage, Color};

/// Effective appearance of a button for one interaction state.
///
/// A `None` field means nothing is configured for that property in any state
/// the resolver consulted; the button then shows its style default.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Appearance {
    pub title: Option<String>,
    pub title_color: Option<Color>,
    pub image: Option<ButtonImage>,
    pub background: Option<Background>,
    pub border_color: Option<Color>,
    pub shadow_opacity: Option<f32>,
    pub shadow_radius: Option<f32>,
}

/// One sparse map per visual property.
#[derive(Debug, Clone, Default)]
pub struct ButtonProperties {
    pub titles: PerState<String>,
    pub title_colors: PerState<Color>,
    pub images: PerState<ButtonImage>,
    /// Backs both solid background colors and gradients
    pub backgrounds: PerState<Background>,
    pub border_colors: PerState<Color>,
    pub shadow_opacities: PerState<f32>,
    pub shadow_radii: PerState<f32>,
}

impl ButtonProperties {
    /// Resolve every property independently for `state`.
    pub fn resolve(&self, state: InteractionState, auto_adjust: AutoAdjust) -> Appearance {
        Appearance {
            title: resolve(&self.titles, state, auto_adjust),
            title_color: resolve(&self.title_colors, state, auto_adjust),
            image: resolve(&self.images, state, auto_adjust),
            background: resolve(&self.backgrounds, state, auto_adjust)
                .and_then(Background::normalized),
            border_color: resolve(&self.border_colors, state, auto_adjust),
            shadow_opacity: resolve(&self.shadow_opacities, state, auto_adjust),
            shadow_radius: resolve(&self.shadow_radii, state, auto_adjust),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::HIGHLIGHTED_BRIGHTNESS;
    use crate::widgets::Gradient;

    #[test]
    fn test_empty_properties_resolve_to_nothing() {
        let properties = ButtonProperties::default();
        for state in [
            InteractionState::NORMAL,
            InteractionState::HIGHLIGHTED,
            InteractionState::DISABLED | InteractionState::SELECTED,
        ] {
            assert_eq!(
                properties.resolve(state, AutoAdjust::default()),
                Appearance::default()
            );
        }
    }

    #[test]
    fn test_properties_resolve_independently() {
        let mut properties = ButtonProperties::default();
        let blue = Color::rgb(0.0, 0.0, 0.5);
        properties.titles.set(InteractionState::NORMAL, Some("Play".to_string()));
        properties.titles.set(InteractionState::SELECTED, Some("Pause".to_string()));
        properties.backgrounds.set(InteractionState::NORMAL, Some(blue.into()));
        properties.shadow_opacities.set(InteractionState::NORMAL, Some(0.4));

        let appearance = properties.resolve(
            InteractionState::HIGHLIGHTED | InteractionState::SELECTED,
            AutoAdjust::default(),
        );
        // Title has no derivation, so the selected entry wins.
        assert_eq!(appearance.title.as_deref(), Some("Pause"));
        assert_eq!(
            appearance.background,
            Some(Background::Solid(blue.with_brightness_factor(HIGHLIGHTED_BRIGHTNESS)))
        );
        assert_eq!(appearance.shadow_opacity, Some(0.0));
        assert_eq!(appearance.shadow_radius, None);
    }

    #[test]
    fn test_degenerate_gradient_resolves_as_no_background() {
        let mut properties = ButtonProperties::default();
        properties
            .backgrounds
            .set(InteractionState::NORMAL, Some(Gradient::vertical(vec![]).into()));
        let appearance = properties.resolve(InteractionState::NORMAL, AutoAdjust::default());
        assert_eq!(appearance.background, None);
    }
}
