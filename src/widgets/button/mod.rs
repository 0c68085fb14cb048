//! The dynamic button control.
//!
//! A [`DynamicButton`] shows an optional image and an optional title over a
//! background, framed by a border and casting a shadow. Every one of those is
//! configured per [`InteractionState`]; whenever a value or the state changes
//! the button queues a single appearance job. The host drains it with
//! [`DynamicButton::process_pending`] on its next loop turn and then keeps
//! calling [`Widget::advance_animations`] while transitions run.
//!
//! ```ignore
//! let mut button = DynamicButton::new();
//! button.set_title("Play", InteractionState::NORMAL);
//! button.set_title("Pause", InteractionState::SELECTED);
//! button.set_background_color(Color::from_hex(0x3366CC), InteractionState::NORMAL);
//! button.set_selected(true, true);
//! button.process_pending();
//! ```

mod properties;
mod style;
mod views;

pub use properties::{Appearance, ButtonProperties};
pub use style::ButtonStyle;
pub use views::ButtonViews;

use std::rc::Rc;
use std::time::Instant;

use crate::appearance::{AutoAdjust, InteractionState, PerState};
use crate::jobs::{ChangeFlags, JobQueue, Wakeup};
use crate::layout::{self, Constraints, ContentFrames, LayoutConfig, Size};
use crate::renderer::{CosmicTextMeasurer, PaintContext, Shadow, TextMeasure};

use super::widget::{Color, Event, EventResponse, MouseButton, Rect, Widget};
use super::{Background, ButtonImage, Gradient};

/// Callback for click events
pub type ClickCallback = Rc<dyn Fn()>;

pub struct DynamicButton {
    properties: ButtonProperties,
    state: InteractionState,
    auto_adjust: AutoAdjust,
    style: ButtonStyle,
    layout_config: LayoutConfig,
    views: ButtonViews,
    jobs: JobQueue,
    measurer: Rc<dyn TextMeasure>,
    bounds: Rect,
    frames: ContentFrames,
    dirty_flags: ChangeFlags,
    is_pressed: bool,
    on_click: Option<ClickCallback>,
}

impl DynamicButton {
    /// A button measuring its title with the thread's shared cosmic-text measurer.
    pub fn new() -> Self {
        Self::with_measurer(CosmicTextMeasurer::shared())
    }

    pub fn with_measurer(measurer: Rc<dyn TextMeasure>) -> Self {
        let style = ButtonStyle::default();
        Self {
            properties: ButtonProperties::default(),
            state: InteractionState::NORMAL,
            auto_adjust: AutoAdjust::default(),
            views: ButtonViews::new(&style),
            style,
            layout_config: LayoutConfig::default(),
            jobs: JobQueue::new(),
            measurer,
            bounds: Rect::default(),
            frames: ContentFrames::default(),
            dirty_flags: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
            is_pressed: false,
            on_click: None,
        }
    }

    // -------------------------------------------------------------------------
    // Builders
    // -------------------------------------------------------------------------

    pub fn on_click<F: Fn() + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Rc::new(callback));
        self
    }

    /// Hook pinged whenever an appearance job is queued.
    pub fn wakeup(mut self, wakeup: impl Wakeup + 'static) -> Self {
        self.jobs.set_wakeup(Rc::new(wakeup));
        self
    }

    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.set_layout_config(config);
        self
    }

    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.set_style(style);
        self
    }

    // -------------------------------------------------------------------------
    // Per-state appearance
    // -------------------------------------------------------------------------

    pub fn set_title<'a>(&mut self, title: impl Into<Option<&'a str>>, state: InteractionState) {
        let title = title.into().map(str::to_string);
        self.set_property(|p| &mut p.titles, title, state);
    }

    pub fn set_title_color(&mut self, color: impl Into<Option<Color>>, state: InteractionState) {
        self.set_property(|p| &mut p.title_colors, color.into(), state);
    }

    pub fn set_image(&mut self, image: impl Into<Option<ButtonImage>>, state: InteractionState) {
        self.set_property(|p| &mut p.images, image.into(), state);
    }

    /// Solid background for `state`. Replaces a gradient set for the same state.
    pub fn set_background_color(
        &mut self,
        color: impl Into<Option<Color>>,
        state: InteractionState,
    ) {
        let background = color.into().map(Background::Solid);
        self.set_property(|p| &mut p.backgrounds, background, state);
    }

    /// Gradient background for `state`. Replaces a solid color set for the
    /// same state. A gradient with a single color paints as that color and
    /// one without colors paints nothing.
    pub fn set_gradient(&mut self, gradient: impl Into<Option<Gradient>>, state: InteractionState) {
        let background = gradient.into().map(Background::Gradient);
        self.set_property(|p| &mut p.backgrounds, background, state);
    }

    pub fn set_border_color(&mut self, color: impl Into<Option<Color>>, state: InteractionState) {
        self.set_property(|p| &mut p.border_colors, color.into(), state);
    }

    pub fn set_shadow_opacity(&mut self, opacity: impl Into<Option<f32>>, state: InteractionState) {
        let opacity = opacity.into().map(|o| o.clamp(0.0, 1.0));
        self.set_property(|p| &mut p.shadow_opacities, opacity, state);
    }

    pub fn set_shadow_radius(&mut self, radius: impl Into<Option<f32>>, state: InteractionState) {
        let radius = radius.into().map(|r| r.max(0.0));
        self.set_property(|p| &mut p.shadow_radii, radius, state);
    }

    fn set_property<T: PartialEq>(
        &mut self,
        map: impl FnOnce(&mut ButtonProperties) -> &mut PerState<T>,
        value: Option<T>,
        state: InteractionState,
    ) {
        let values = map(&mut self.properties);
        if values.get(state) == value.as_ref() {
            return;
        }
        values.set(state, value);
        self.jobs.refresh();
    }

    pub fn properties(&self) -> &ButtonProperties {
        &self.properties
    }

    pub fn set_auto_adjust(&mut self, auto_adjust: AutoAdjust) {
        if self.auto_adjust != auto_adjust {
            self.auto_adjust = auto_adjust;
            self.jobs.refresh();
        }
    }

    pub fn auto_adjust(&self) -> AutoAdjust {
        self.auto_adjust
    }

    pub fn set_style(&mut self, style: ButtonStyle) {
        if self.style != style {
            if self.style.transition != style.transition {
                self.views.set_transition(style.transition);
            }
            self.style = style;
            self.dirty_flags |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
            self.jobs.refresh();
        }
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    // -------------------------------------------------------------------------
    // Interaction state
    // -------------------------------------------------------------------------

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_highlighted(&self) -> bool {
        self.state.contains(InteractionState::HIGHLIGHTED)
    }

    pub fn is_selected(&self) -> bool {
        self.state.contains(InteractionState::SELECTED)
    }

    pub fn is_enabled(&self) -> bool {
        !self.state.contains(InteractionState::DISABLED)
    }

    pub fn set_highlighted(&mut self, highlighted: bool, animated: bool) {
        self.set_flag(InteractionState::HIGHLIGHTED, highlighted, animated);
    }

    pub fn set_selected(&mut self, selected: bool, animated: bool) {
        self.set_flag(InteractionState::SELECTED, selected, animated);
    }

    /// Enabling and disabling never animates. Disabling mid-press cancels
    /// the press and its highlight.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled && self.is_pressed {
            self.is_pressed = false;
            self.state.remove(InteractionState::HIGHLIGHTED);
        }
        self.set_flag(InteractionState::DISABLED, !enabled, false);
    }

    fn set_flag(&mut self, flag: InteractionState, value: bool, animated: bool) {
        if self.state.contains(flag) == value {
            return;
        }
        self.state.set(flag, value);
        log::debug!("button state -> {:?} (animated: {})", self.state, animated);
        self.jobs.push(animated);
    }

    // -------------------------------------------------------------------------
    // Deferred updates
    // -------------------------------------------------------------------------

    pub fn has_pending_update(&self) -> bool {
        self.jobs.has_pending()
    }

    /// Resolve and apply the queued appearance job, if any.
    pub fn process_pending(&mut self) -> ChangeFlags {
        self.process_pending_at(Instant::now())
    }

    /// Like [`process_pending`](Self::process_pending), with transitions
    /// starting at `now`.
    pub fn process_pending_at(&mut self, now: Instant) -> ChangeFlags {
        let Some(job) = self.jobs.take() else {
            return ChangeFlags::empty();
        };

        let appearance = self.resolved_appearance();
        let changes = self.views.apply(appearance, &self.style, job.animated, now);
        log::debug!(
            "applied appearance for {:?} (animated: {}, changes: {:?})",
            self.state,
            job.animated,
            changes
        );
        self.dirty_flags |= changes;
        changes
    }

    /// The appearance the current state resolves to, whether or not it has
    /// been applied yet.
    pub fn resolved_appearance(&self) -> Appearance {
        self.properties.resolve(self.state, self.auto_adjust)
    }

    /// What is presented right now.
    pub fn views(&self) -> &ButtonViews {
        &self.views
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    pub fn layout_config(&self) -> &LayoutConfig {
        &self.layout_config
    }

    pub fn layout_config_mut(&mut self) -> &mut LayoutConfig {
        self.dirty_flags |= ChangeFlags::NEEDS_LAYOUT;
        &mut self.layout_config
    }

    pub fn set_layout_config(&mut self, config: LayoutConfig) {
        if self.layout_config != config {
            self.layout_config = config;
            self.dirty_flags |= ChangeFlags::NEEDS_LAYOUT;
        }
    }

    fn image_size(&self) -> Option<Size> {
        self.views.image().map(ButtonImage::size)
    }

    fn title_size(&self, fitting: Size) -> Option<Size> {
        self.views
            .title()
            .map(|title| self.measurer.measure(title, self.style.font_size, fitting))
    }

    /// Frames of the presented image and title inside a box of `size`,
    /// relative to the box's top-left corner.
    pub fn content_frames(&self, size: Size) -> ContentFrames {
        let image = self.image_size();
        let fitting = layout::title_fitting_size(&self.layout_config, size, image);
        let title = self.title_size(fitting);
        layout::layout_content(&self.layout_config, size, image, title)
    }

    /// Lay the content out in a box of `size` and keep the frames for painting.
    pub fn layout_in(&mut self, size: Size) -> ContentFrames {
        self.frames = self.content_frames(size);
        self.bounds.width = size.width;
        self.bounds.height = size.height;
        self.dirty_flags.remove(ChangeFlags::NEEDS_LAYOUT);
        self.dirty_flags |= ChangeFlags::NEEDS_PAINT;
        log::trace!("button laid out in {:?}: {:?}", size, self.frames);
        self.frames
    }

    /// Frames from the last layout pass.
    pub fn frames(&self) -> ContentFrames {
        self.frames
    }

    /// Smallest box holding the insets and the content when offered `fitting`.
    pub fn preferred_size(&self, fitting: Size) -> Size {
        let image = self.image_size();
        let title_fitting = layout::title_fitting_size(&self.layout_config, fitting, image);
        let title = self.title_size(title_fitting);
        layout::preferred_size(&self.layout_config, image, title)
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn needs_layout(&self) -> bool {
        self.dirty_flags.contains(ChangeFlags::NEEDS_LAYOUT)
    }

    pub fn needs_paint(&self) -> bool {
        self.dirty_flags.contains(ChangeFlags::NEEDS_PAINT)
    }

    pub fn clear_dirty(&mut self) {
        self.dirty_flags = ChangeFlags::empty();
    }
}

impl Default for DynamicButton {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for DynamicButton {
    fn advance_animations(&mut self, now: Instant) -> bool {
        if self.views.advance(now) {
            self.dirty_flags |= ChangeFlags::NEEDS_PAINT;
        }
        let animating = self.views.is_animating();
        if !animating {
            log::trace!("button transitions settled");
        }
        animating
    }

    fn layout(&mut self, constraints: Constraints) -> Size {
        let size = constraints.constrain(self.preferred_size(constraints.max_size()));
        self.layout_in(size);
        size
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let rect = self.bounds;
        let radius = self.style.corner_radius;

        let opacity = self.views.shadow_opacity().clamp(0.0, 1.0);
        if opacity > 0.0 {
            let color = self.style.shadow_color;
            let shadow = Shadow::new(
                self.style.shadow_offset,
                self.views.shadow_radius(),
                color.with_alpha(color.a * opacity),
            );
            ctx.draw_shadow(rect, radius, shadow);
        }

        if let Some(color) = self.views.background_color() {
            ctx.draw_rounded_rect(rect, color, radius);
        }
        if let Some(gradient) = self.views.gradient() {
            ctx.draw_rounded_rect(rect, gradient.clone(), radius);
        }
        if let Some(color) = self.views.border_color() {
            ctx.draw_border_frame(rect, color, radius, self.style.border_width);
        }

        if let (Some(image), Some(frame)) = (self.views.image(), self.frames.image) {
            ctx.draw_image(image, frame.offset(rect.x, rect.y));
        }
        if let (Some(title), Some(frame)) = (self.views.title(), self.frames.title) {
            ctx.draw_text(
                title,
                frame.offset(rect.x, rect.y),
                self.views.title_color(),
                self.style.font_size,
            );
        }
    }

    fn event(&mut self, event: &Event) -> EventResponse {
        if !self.is_enabled() {
            return EventResponse::Ignored;
        }

        match event {
            Event::MouseDown { x, y, button } => {
                if *button == MouseButton::Left && self.bounds.contains(*x, *y) {
                    self.is_pressed = true;
                    self.set_highlighted(true, true);
                    return EventResponse::Handled;
                }
            }
            Event::MouseMove { x, y } => {
                if self.is_pressed {
                    let inside = self.bounds.contains(*x, *y);
                    self.set_highlighted(inside, true);
                    return EventResponse::Handled;
                }
            }
            Event::MouseUp { x, y, button } => {
                if *button == MouseButton::Left && self.is_pressed {
                    self.is_pressed = false;
                    self.set_highlighted(false, true);
                    if self.bounds.contains(*x, *y) {
                        if let Some(ref callback) = self.on_click {
                            callback();
                        }
                    }
                    return EventResponse::Handled;
                }
            }
            Event::MouseLeave => {
                if self.is_pressed {
                    self.is_pressed = false;
                    self.set_highlighted(false, true);
                    return EventResponse::Handled;
                }
            }
            Event::MouseEnter { .. } => {}
        }
        EventResponse::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{TimingFunction, Transition};
    use std::cell::Cell;
    use std::time::Duration;

    /// Eight pixels per character, one 20 pixel line.
    struct FixedMeasurer;

    impl TextMeasure for FixedMeasurer {
        fn measure(&self, text: &str, _font_size: f32, _fitting: Size) -> Size {
            Size::new(text.chars().count() as f32 * 8.0, 20.0)
        }
    }

    fn button() -> DynamicButton {
        DynamicButton::with_measurer(Rc::new(FixedMeasurer))
    }

    #[test]
    fn test_setters_queue_one_job() {
        let pings = Rc::new(Cell::new(0));
        let counter = pings.clone();
        let mut button = button().wakeup(move || counter.set(counter.get() + 1));

        button.set_title("OK", InteractionState::NORMAL);
        button.set_title_color(Color::WHITE, InteractionState::NORMAL);
        button.set_border_color(Color::BLACK, InteractionState::NORMAL);
        assert!(button.has_pending_update());
        assert_eq!(pings.get(), 1);

        button.process_pending();
        assert!(!button.has_pending_update());
        assert_eq!(button.views().title(), Some("OK"));
        assert_eq!(button.views().title_color(), Color::WHITE);
    }

    #[test]
    fn test_unchanged_flag_queues_nothing() {
        let mut button = button();
        button.set_highlighted(false, true);
        button.set_selected(false, true);
        button.set_enabled(true);
        assert!(!button.has_pending_update());

        button.set_selected(true, true);
        assert!(button.has_pending_update());
        button.process_pending();
        button.set_selected(true, false);
        assert!(!button.has_pending_update());
    }

    #[test]
    fn test_state_flags() {
        let mut button = button();
        button.set_highlighted(true, false);
        button.set_selected(true, false);
        button.set_enabled(false);
        assert_eq!(
            button.state(),
            InteractionState::HIGHLIGHTED | InteractionState::SELECTED | InteractionState::DISABLED
        );
        assert!(!button.is_enabled());

        button.set_enabled(true);
        assert!(button.is_enabled());
        assert!(button.is_highlighted());
        assert!(button.is_selected());
    }

    #[test]
    fn test_clearing_a_value_falls_back() {
        let mut button = button();
        button.set_title("Play", InteractionState::NORMAL);
        button.set_title("Pause", InteractionState::SELECTED);
        button.set_selected(true, false);
        button.process_pending();
        assert_eq!(button.views().title(), Some("Pause"));

        button.set_title(None, InteractionState::SELECTED);
        button.process_pending();
        assert_eq!(button.views().title(), Some("Play"));
    }

    #[test]
    fn test_background_color_and_gradient_share_a_slot() {
        let mut button = button();
        let gradient = Gradient::vertical([Color::WHITE, Color::BLACK]);
        button.set_background_color(Color::WHITE, InteractionState::NORMAL);
        button.set_gradient(gradient.clone(), InteractionState::NORMAL);
        button.process_pending();
        assert_eq!(button.views().background(), Some(Background::Gradient(gradient)));

        button.set_background_color(Color::BLACK, InteractionState::NORMAL);
        button.process_pending();
        assert_eq!(button.views().background(), Some(Background::Solid(Color::BLACK)));
    }

    #[test]
    fn test_animated_state_change_transitions() {
        let mut button = button();
        button.set_background_color(Color::rgb(0.0, 0.0, 0.5), InteractionState::NORMAL);
        button.process_pending();
        button.clear_dirty();

        let t0 = Instant::now();
        button.set_highlighted(true, true);
        button.process_pending_at(t0);
        assert!(button.views().is_animating());
        assert_eq!(button.views().background_color(), Some(Color::rgb(0.0, 0.0, 0.5)));

        assert!(button.advance_animations(t0 + Duration::from_millis(50)));
        assert!(button.needs_paint());

        assert!(!button.advance_animations(t0 + Duration::from_millis(200)));
        assert_eq!(
            button.views().background_color(),
            Some(Color::rgb(0.0, 0.0, 0.5).with_brightness_factor(1.2))
        );
    }

    #[test]
    fn test_setter_keeps_pending_state_transition() {
        let mut button = button();
        button.set_background_color(Color::rgb(0.0, 0.0, 0.5), InteractionState::NORMAL);
        button.process_pending();

        let t0 = Instant::now();
        button.set_highlighted(true, true);
        button.set_title("Go", InteractionState::NORMAL);
        button.process_pending_at(t0);
        assert!(button.views().is_animating());
        assert_eq!(button.views().title(), Some("Go"));
    }

    #[test]
    fn test_disabling_overrides_pending_animation() {
        let mut button = button();
        button.set_background_color(Color::rgb(0.0, 0.0, 0.5), InteractionState::NORMAL);
        button.process_pending();

        button.set_highlighted(true, true);
        button.set_enabled(false);
        button.process_pending_at(Instant::now());
        assert!(!button.views().is_animating());
    }

    #[test]
    fn test_rewriting_same_value_queues_nothing() {
        let pings = Rc::new(Cell::new(0));
        let counter = pings.clone();
        let mut button = button().wakeup(move || counter.set(counter.get() + 1));
        button.set_title("OK", InteractionState::NORMAL);
        button.set_shadow_radius(2.0, InteractionState::HIGHLIGHTED);
        button.process_pending();

        button.set_title("OK", InteractionState::NORMAL);
        button.set_shadow_radius(2.0, InteractionState::HIGHLIGHTED);
        button.set_image(None, InteractionState::SELECTED);
        assert!(!button.has_pending_update());
        assert_eq!(pings.get(), 1);
    }

    #[test]
    fn test_style_transition_drives_state_changes() {
        let mut button = button().with_style(
            ButtonStyle::default().transition(Transition::new(
                Duration::from_millis(40),
                TimingFunction::Linear,
            )),
        );
        button.set_background_color(Color::rgb(0.0, 0.0, 0.5), InteractionState::NORMAL);
        button.process_pending();

        let t0 = Instant::now();
        button.set_highlighted(true, true);
        button.process_pending_at(t0);
        assert!(button.views().is_animating());
        button.advance_animations(t0 + Duration::from_millis(40));
        assert!(!button.views().is_animating());

        let instant = button.style().transition(Transition::none());
        button.set_style(instant);
        button.set_highlighted(false, true);
        button.process_pending_at(t0);
        assert!(!button.views().is_animating());
        assert_eq!(button.views().background_color(), Some(Color::rgb(0.0, 0.0, 0.5)));
    }

    #[test]
    fn test_enabling_never_animates() {
        let mut button = button();
        button.set_auto_adjust(AutoAdjust::default().when_disabled(true));
        button.set_border_color(Color::rgb(0.5, 0.5, 0.5), InteractionState::NORMAL);
        button.process_pending();

        button.set_enabled(false);
        button.process_pending_at(Instant::now());
        assert!(!button.views().is_animating());
        assert_eq!(
            button.views().border_color(),
            Some(Color::rgb(0.5, 0.5, 0.5).with_brightness_factor(0.8))
        );
    }

    #[test]
    fn test_layout_uses_presented_content() {
        let mut button = button();
        button.set_image(ButtonImage::filled(20, 20, Color::BLACK), InteractionState::NORMAL);
        button.set_title("Go", InteractionState::NORMAL);

        // Nothing is presented until the job runs.
        let frames = button.layout_in(Size::new(100.0, 40.0));
        assert_eq!(frames, ContentFrames::default());

        button.process_pending();
        let frames = button.layout_in(Size::new(100.0, 40.0));
        // 20 + 16 + 16 = 52 wide, centered in 100.
        assert_eq!(frames.image, Some(Rect::new(24.0, 10.0, 20.0, 20.0)));
        assert_eq!(frames.title, Some(Rect::new(60.0, 10.0, 16.0, 20.0)));
        assert!(!button.needs_layout());
    }

    #[test]
    fn test_preferred_size() {
        let mut button = button();
        button.set_image(ButtonImage::filled(20, 30, Color::BLACK), InteractionState::NORMAL);
        button.set_title("Go", InteractionState::NORMAL);
        button.process_pending();
        let size = button.preferred_size(Size::new(f32::INFINITY, f32::INFINITY));
        assert_eq!(size, Size::new(8.0 + 20.0 + 16.0 + 16.0 + 8.0, 8.0 + 30.0 + 8.0));
    }

    #[test]
    fn test_widget_layout_and_paint() {
        let mut button = button().with_style(ButtonStyle::default().corner_radius(4.0));
        button.set_title("OK", InteractionState::NORMAL);
        button.set_background_color(Color::WHITE, InteractionState::NORMAL);
        button.set_border_color(Color::BLACK, InteractionState::NORMAL);
        button.set_shadow_opacity(0.5, InteractionState::NORMAL);
        button.process_pending();

        let size = button.layout(Constraints::loose(Size::new(200.0, 100.0)));
        assert_eq!(size, Size::new(32.0, 36.0));
        button.set_origin(10.0, 5.0);

        let mut ctx = PaintContext::new();
        button.paint(&mut ctx);
        let commands = ctx.commands();
        assert_eq!(commands.len(), 4);
        assert!(matches!(
            commands[0],
            crate::renderer::DrawCommand::Shadow { radius, .. } if radius == 4.0
        ));
        match &commands[3] {
            crate::renderer::DrawCommand::Text { text, rect, .. } => {
                assert_eq!(text, "OK");
                assert_eq!(*rect, Rect::new(18.0, 13.0, 16.0, 20.0));
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_press_and_release_inside_clicks() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let mut button = button().on_click(move || counter.set(counter.get() + 1));
        button.layout_in(Size::new(100.0, 40.0));

        let down = Event::MouseDown {
            x: 10.0,
            y: 10.0,
            button: MouseButton::Left,
        };
        assert_eq!(button.event(&down), EventResponse::Handled);
        assert!(button.is_highlighted());

        let up = Event::MouseUp {
            x: 12.0,
            y: 12.0,
            button: MouseButton::Left,
        };
        assert_eq!(button.event(&up), EventResponse::Handled);
        assert!(!button.is_highlighted());
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_dragging_out_cancels_click() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let mut button = button().on_click(move || counter.set(counter.get() + 1));
        button.layout_in(Size::new(100.0, 40.0));

        button.event(&Event::MouseDown {
            x: 10.0,
            y: 10.0,
            button: MouseButton::Left,
        });
        button.event(&Event::MouseMove { x: 150.0, y: 10.0 });
        assert!(!button.is_highlighted());

        button.event(&Event::MouseUp {
            x: 150.0,
            y: 10.0,
            button: MouseButton::Left,
        });
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn test_disabled_button_ignores_pointer() {
        let mut button = button();
        button.layout_in(Size::new(100.0, 40.0));
        button.set_enabled(false);

        let down = Event::MouseDown {
            x: 10.0,
            y: 10.0,
            button: MouseButton::Left,
        };
        assert_eq!(button.event(&down), EventResponse::Ignored);
        assert!(!button.is_highlighted());
    }

    #[test]
    fn test_disabling_mid_press_drops_highlight() {
        let mut button = button();
        button.layout_in(Size::new(100.0, 40.0));
        button.event(&Event::MouseDown {
            x: 10.0,
            y: 10.0,
            button: MouseButton::Left,
        });
        assert!(button.is_highlighted());

        button.set_enabled(false);
        assert_eq!(button.state(), InteractionState::DISABLED);
        button.set_enabled(true);
        button.event(&Event::MouseUp {
            x: 10.0,
            y: 10.0,
            button: MouseButton::Left,
        });
        button.event(&Event::MouseLeave);
        assert_eq!(button.state(), InteractionState::NORMAL);
    }

    #[test]
    fn test_layout_config_changes_need_layout() {
        let mut button = button();
        button.layout_in(Size::new(100.0, 40.0));
        assert!(!button.needs_layout());

        button.layout_config_mut().spacing = 4.0;
        assert!(button.needs_layout());
        assert_eq!(button.layout_config().spacing, 4.0);
    }
}
