//! Paint recording.
//!
//! Widgets paint into a [`PaintContext`], which records [`DrawCommand`]s for
//! the host to rasterize with whatever backend it uses.

mod commands;
mod text_measurer;

pub use commands::{Border, DrawCommand, Shadow};
pub use text_measurer::{CosmicTextMeasurer, TextMeasure};

use crate::widgets::{Background, ButtonImage, Color, Rect};

#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<DrawCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new PaintContext with pre-allocated capacity to avoid per-frame allocations
    pub fn with_capacity(commands: usize) -> Self {
        Self {
            commands: Vec::with_capacity(commands),
        }
    }

    /// Clear all buffers for reuse, preserving allocated capacity
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn draw_shadow(&mut self, rect: Rect, radius: f32, shadow: Shadow) {
        if shadow.is_invisible() {
            return;
        }
        self.commands.push(DrawCommand::Shadow {
            rect,
            radius,
            shadow,
        });
    }

    /// Fill a rounded rectangle. Gradients without stops draw nothing and a
    /// single stop draws a solid fill.
    pub fn draw_rounded_rect(&mut self, rect: Rect, fill: impl Into<Background>, radius: f32) {
        let Some(fill) = fill.into().normalized() else {
            return;
        };
        self.commands.push(DrawCommand::RoundedRect { rect, fill, radius });
    }

    /// Draw a border frame (hollow rounded rectangle - just the border outline)
    pub fn draw_border_frame(&mut self, rect: Rect, color: Color, radius: f32, width: f32) {
        if width <= 0.0 || color.a <= 0.0 {
            return;
        }
        self.commands.push(DrawCommand::Border {
            rect,
            radius,
            border: Border::new(width, color),
        });
    }

    pub fn draw_text(&mut self, text: &str, rect: Rect, color: Color, font_size: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            rect,
            color,
            font_size,
        });
    }

    pub fn draw_image(&mut self, image: &ButtonImage, rect: Rect) {
        self.commands.push(DrawCommand::Image {
            image: image.clone(),
            rect,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Gradient;

    #[test]
    fn test_records_in_order() {
        let mut ctx = PaintContext::new();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        ctx.draw_shadow(rect, 2.0, Shadow::new((0.0, 2.0), 3.0, Color::BLACK));
        ctx.draw_rounded_rect(rect, Color::WHITE, 2.0);
        ctx.draw_text("OK", rect, Color::BLACK, 17.0);

        let commands = ctx.commands();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], DrawCommand::Shadow { .. }));
        assert!(matches!(commands[1], DrawCommand::RoundedRect { .. }));
        assert!(matches!(commands[2], DrawCommand::Text { .. }));
    }

    #[test]
    fn test_degenerate_gradients() {
        let mut ctx = PaintContext::new();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        ctx.draw_rounded_rect(rect, Gradient::vertical(vec![]), 0.0);
        assert!(ctx.is_empty());

        ctx.draw_rounded_rect(rect, Gradient::vertical([Color::WHITE]), 0.0);
        assert_eq!(
            ctx.commands(),
            &[DrawCommand::RoundedRect {
                rect,
                fill: Background::Solid(Color::WHITE),
                radius: 0.0,
            }]
        );
    }

    #[test]
    fn test_invisible_shadow_and_border_are_skipped() {
        let mut ctx = PaintContext::new();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        ctx.draw_shadow(rect, 0.0, Shadow::new((0.0, 2.0), 3.0, Color::TRANSPARENT));
        ctx.draw_border_frame(rect, Color::BLACK, 0.0, 0.0);
        ctx.draw_border_frame(rect, Color::TRANSPARENT, 0.0, 1.0);
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_clear_and_take() {
        let mut ctx = PaintContext::with_capacity(4);
        ctx.draw_text("a", Rect::default(), Color::BLACK, 12.0);
        assert_eq!(ctx.take_commands().len(), 1);
        assert!(ctx.is_empty());

        ctx.draw_text("b", Rect::default(), Color::BLACK, 12.0);
        ctx.clear();
        assert!(ctx.is_empty());
    }
}
