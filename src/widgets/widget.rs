use std::time::Instant;

use crate::layout::{Constraints, Size};
use crate::renderer::PaintContext;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Build a color from hue, saturation and brightness, all in `0.0..=1.0`.
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Self {
        let h = hue.rem_euclid(1.0) * 6.0;
        let c = brightness * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = brightness - c;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let channel = |v: f32| (v + m).clamp(0.0, 1.0);
        Self::rgba(channel(r), channel(g), channel(b), alpha)
    }

    /// Decompose into `(hue, saturation, brightness)`.
    pub fn to_hsb(&self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let saturation = if max > 0.0 { delta / max } else { 0.0 };
        let hue = if delta <= 0.0 {
            0.0
        } else if max == self.r {
            ((self.g - self.b) / delta).rem_euclid(6.0) / 6.0
        } else if max == self.g {
            ((self.b - self.r) / delta + 2.0) / 6.0
        } else {
            ((self.r - self.g) / delta + 4.0) / 6.0
        };

        (hue, saturation, max)
    }

    /// Scale the brightness of this color by `factor`.
    ///
    /// Colors already at full brightness cannot get any brighter, so for them
    /// the factor is spent on saturation instead (`s - factor * s`). Both
    /// channels are clamped to `0.0..=1.0`; alpha is preserved.
    pub fn with_brightness_factor(&self, factor: f32) -> Self {
        let (hue, saturation, brightness) = self.to_hsb();
        if brightness < 1.0 {
            let brightness = (brightness * factor).clamp(0.0, 1.0);
            Self::from_hsb(hue, saturation, brightness, self.a)
        } else {
            let saturation = (saturation - factor * saturation).clamp(0.0, 1.0);
            Self::from_hsb(hue, saturation, brightness, self.a)
        }
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha, ..*self }
    }

    /// Convert to 8-bit RGBA channels.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Distances from each edge of a box to its content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Override the top inset.
    pub fn top(mut self, v: f32) -> Self {
        self.top = v;
        self
    }

    /// Override the bottom inset.
    pub fn bottom(mut self, v: f32) -> Self {
        self.bottom = v;
        self
    }

    /// Override the left inset.
    pub fn left(mut self, v: f32) -> Self {
        self.left = v;
        self
    }

    /// Override the right inset.
    pub fn right(mut self, v: f32) -> Self {
        self.right = v;
        self
    }
}

impl Default for EdgeInsets {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f32> for EdgeInsets {
    fn from(v: f32) -> Self {
        EdgeInsets::all(v)
    }
}

/// `[vertical, horizontal]` shorthand.
impl From<[f32; 2]> for EdgeInsets {
    fn from(v: [f32; 2]) -> Self {
        EdgeInsets::symmetric(v[1], v[0])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone)]
pub enum Event {
    /// Pointer moved
    MouseMove { x: f32, y: f32 },
    /// Pointer button pressed
    MouseDown { x: f32, y: f32, button: MouseButton },
    /// Pointer button released
    MouseUp { x: f32, y: f32, button: MouseButton },
    /// Pointer entered the surface
    MouseEnter { x: f32, y: f32 },
    /// Pointer left the surface
    MouseLeave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

/// The contract between a control and the host that lays it out, paints it
/// and feeds it input.
pub trait Widget {
    /// Advance running transitions to `now`.
    /// Returns true if any transition is still active and needs another frame.
    fn advance_animations(&mut self, now: Instant) -> bool {
        let _ = now;
        false
    }

    fn layout(&mut self, constraints: Constraints) -> Size;
    fn set_origin(&mut self, x: f32, y: f32);
    fn bounds(&self) -> Rect;
    fn paint(&self, ctx: &mut PaintContext);
    fn event(&mut self, event: &Event) -> EventResponse {
        let _ = event;
        EventResponse::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex(0xFF0000);
        assert_eq!(color, Color::rgb(1.0, 0.0, 0.0));

        let color = Color::from_hex(0x0000FF);
        assert_eq!(color.b, 1.0);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default(), Color::TRANSPARENT);
    }

    #[test]
    fn test_hsb_round_trip_primaries() {
        for color in [
            Color::rgb(1.0, 0.0, 0.0),
            Color::rgb(0.0, 0.5, 0.0),
            Color::rgb(0.2, 0.4, 0.8),
            Color::rgb(0.9, 0.9, 0.1),
        ] {
            let (h, s, b) = color.to_hsb();
            let back = Color::from_hsb(h, s, b, color.a);
            assert_close(back.r, color.r);
            assert_close(back.g, color.g);
            assert_close(back.b, color.b);
        }
    }

    #[test]
    fn test_hsb_of_gray_has_no_saturation() {
        let (_, s, b) = Color::rgb(0.5, 0.5, 0.5).to_hsb();
        assert_eq!(s, 0.0);
        assert_close(b, 0.5);
    }

    #[test]
    fn test_brightness_factor_scales_brightness_below_one() {
        let darkened = Color::rgb(0.5, 0.0, 0.0).with_brightness_factor(0.8);
        let (_, s, b) = darkened.to_hsb();
        assert_close(b, 0.4);
        assert_close(s, 1.0);

        let lightened = Color::rgb(0.5, 0.0, 0.0).with_brightness_factor(1.2);
        assert_close(lightened.to_hsb().2, 0.6);
    }

    #[test]
    fn test_brightness_factor_clamps_to_one() {
        let color = Color::rgb(0.9, 0.0, 0.0).with_brightness_factor(1.5);
        assert_close(color.to_hsb().2, 1.0);
    }

    #[test]
    fn test_brightness_factor_spends_on_saturation_at_full_brightness() {
        let (_, s, b) = Color::rgb(1.0, 0.5, 0.5)
            .with_brightness_factor(0.8)
            .to_hsb();
        assert_close(b, 1.0);
        assert_close(s, 0.1);

        // White has nothing left to lose.
        let white = Color::WHITE.with_brightness_factor(1.2);
        assert_eq!(white.to_rgba8(), [255, 255, 255, 255]);
    }

    #[test]
    fn test_brightness_factor_stays_in_range() {
        for factor in [0.0, 0.8, 1.2, 3.0] {
            for color in [
                Color::BLACK,
                Color::WHITE,
                Color::rgb(1.0, 0.0, 0.0),
                Color::rgba(0.3, 0.6, 0.9, 0.5),
            ] {
                let out = color.with_brightness_factor(factor);
                for channel in [out.r, out.g, out.b, out.a] {
                    assert!((0.0..=1.0).contains(&channel), "{out:?} for {factor}");
                }
                assert_eq!(out.a, color.a);
            }
        }
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.max_x(), 110.0);
        assert_eq!(rect.max_y(), 70.0);
        assert_eq!(rect.size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(50.0, 40.0));
        assert!(rect.contains(10.0, 20.0));
        assert!(!rect.contains(110.0, 70.0));
        assert!(!rect.contains(5.0, 40.0));
    }

    #[test]
    fn test_insets_shorthands() {
        assert_eq!(EdgeInsets::from(8.0), EdgeInsets::all(8.0));
        let insets = EdgeInsets::from([4.0, 12.0]);
        assert_eq!(insets.horizontal(), 24.0);
        assert_eq!(insets.vertical(), 8.0);
        let insets = EdgeInsets::all(8.0).top(20.0).left(0.0);
        assert_eq!(insets, EdgeInsets::new(20.0, 0.0, 8.0, 8.0));
    }
}
