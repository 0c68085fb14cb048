use crate::widgets::EdgeInsets;

use super::Axis;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Extent along `axis`.
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Extent perpendicular to `axis`.
    pub fn across(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.height,
            Axis::Vertical => self.width,
        }
    }

    /// Build a size from its extents along and across `axis`.
    pub fn from_axis(axis: Axis, along: f32, across: f32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(along, across),
            Axis::Vertical => Self::new(across, along),
        }
    }

    pub fn minus_insets(&self, insets: EdgeInsets) -> Self {
        Self::new(
            self.width - insets.horizontal(),
            self.height - insets.vertical(),
        )
    }

    pub fn plus_insets(&self, insets: EdgeInsets) -> Self {
        Self::new(
            self.width + insets.horizontal(),
            self.height + insets.vertical(),
        )
    }

    /// Clamp both dimensions to be non-negative.
    pub fn non_negative(&self) -> Self {
        Self::new(self.width.max(0.0), self.height.max(0.0))
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::zero()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub min_height: f32,
    pub max_width: f32,
    pub max_height: f32,
}

impl Constraints {
    pub fn new(min_width: f32, min_height: f32, max_width: f32, max_height: f32) -> Self {
        Self {
            min_width,
            min_height,
            max_width,
            max_height,
        }
    }

    pub fn loose(size: Size) -> Self {
        Self {
            min_width: 0.0,
            min_height: 0.0,
            max_width: size.width,
            max_height: size.height,
        }
    }

    pub fn constrain(&self, size: Size) -> Size {
        Size {
            width: size.width.max(self.min_width).min(self.max_width),
            height: size.height.max(self.min_height).min(self.max_height),
        }
    }

    pub fn max_size(&self) -> Size {
        Size {
            width: self.max_width,
            height: self.max_height,
        }
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::new(0.0, 0.0, f32::INFINITY, f32::INFINITY)
    }
}
