pub mod content;
pub mod geometry;

pub use content::{layout_content, preferred_size, title_fitting_size, ContentFrames, ContentItem};
pub use geometry::{Constraints, Size};

use crate::widgets::EdgeInsets;

/// Direction along which the image and the title are sequenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Alignment along the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    Left,
    #[default]
    Center,
    Right,
    Justified,
}

/// Alignment along the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
    Justified,
}

/// Whether the image precedes or follows the title along the layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageAlignment {
    #[default]
    Beginning,
    End,
}

/// Axis-agnostic form of the two alignment enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Leading,
    Center,
    Trailing,
    Justified,
}

impl From<HorizontalAlignment> for Alignment {
    fn from(alignment: HorizontalAlignment) -> Self {
        match alignment {
            HorizontalAlignment::Left => Alignment::Leading,
            HorizontalAlignment::Center => Alignment::Center,
            HorizontalAlignment::Right => Alignment::Trailing,
            HorizontalAlignment::Justified => Alignment::Justified,
        }
    }
}

impl From<VerticalAlignment> for Alignment {
    fn from(alignment: VerticalAlignment) -> Self {
        match alignment {
            VerticalAlignment::Top => Alignment::Leading,
            VerticalAlignment::Center => Alignment::Center,
            VerticalAlignment::Bottom => Alignment::Trailing,
            VerticalAlignment::Justified => Alignment::Justified,
        }
    }
}

/// How the button arranges its image and title inside its box.
///
/// Read on every layout pass; changing it takes effect on the next one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub insets: EdgeInsets,
    pub axis: Axis,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    pub image_alignment: ImageAlignment,
    pub spacing: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            insets: EdgeInsets::all(8.0),
            axis: Axis::Horizontal,
            horizontal_alignment: HorizontalAlignment::Center,
            vertical_alignment: VerticalAlignment::Center,
            image_alignment: ImageAlignment::Beginning,
            spacing: 16.0,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insets(mut self, insets: impl Into<EdgeInsets>) -> Self {
        self.insets = insets.into();
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    pub fn vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    pub fn image_alignment(mut self, alignment: ImageAlignment) -> Self {
        self.image_alignment = alignment;
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Alignment that positions items along the layout axis.
    pub fn main_alignment(&self) -> Alignment {
        self.alignment_for(self.axis)
    }

    /// Alignment that positions each item across the layout axis.
    pub fn cross_alignment(&self) -> Alignment {
        self.alignment_for(self.axis.cross())
    }

    fn alignment_for(&self, axis: Axis) -> Alignment {
        match axis {
            Axis::Horizontal => self.horizontal_alignment.into(),
            Axis::Vertical => self.vertical_alignment.into(),
        }
    }

    /// Insets at the start and the end of `axis`.
    pub(crate) fn insets_along(&self, axis: Axis) -> (f32, f32) {
        match axis {
            Axis::Horizontal => (self.insets.left, self.insets.right),
            Axis::Vertical => (self.insets.top, self.insets.bottom),
        }
    }
}
