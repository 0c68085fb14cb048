//! Placement of the button's image and title inside its box.
//!
//! The engine is a pure function of the [`LayoutConfig`], the box size and the
//! natural sizes of the two items. An item that is absent (no image, or a title
//! without text) is passed as `None`: it gets no frame, takes no spacing and is
//! never used as an anchor for the other item.
//!
//! Along the layout axis the items are sequenced (image first when
//! [`ImageAlignment::Beginning`]) and positioned by the axis' alignment. Across
//! it, each item is aligned on its own: against the leading inset, centered in
//! the full box, or against the trailing inset.

use crate::widgets::Rect;

use super::{Alignment, Axis, ImageAlignment, LayoutConfig, Size};

/// One of the two things a button can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentItem {
    Image,
    Title,
}

impl ContentItem {
    /// The items in the order they are sequenced along the layout axis.
    pub fn ordered(image_alignment: ImageAlignment) -> [ContentItem; 2] {
        match image_alignment {
            ImageAlignment::Beginning => [ContentItem::Image, ContentItem::Title],
            ImageAlignment::End => [ContentItem::Title, ContentItem::Image],
        }
    }
}

/// Frames assigned by a layout pass, in the box's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentFrames {
    pub image: Option<Rect>,
    pub title: Option<Rect>,
}

impl ContentFrames {
    pub fn get(&self, item: ContentItem) -> Option<Rect> {
        match item {
            ContentItem::Image => self.image,
            ContentItem::Title => self.title,
        }
    }

    fn set(&mut self, item: ContentItem, frame: Rect) {
        match item {
            ContentItem::Image => self.image = Some(frame),
            ContentItem::Title => self.title = Some(frame),
        }
    }
}

/// Size offered to the title when measuring it.
///
/// This is the box minus the insets, minus the image and the spacing along
/// the layout axis when an image is present. Never negative.
pub fn title_fitting_size(config: &LayoutConfig, bounds: Size, image: Option<Size>) -> Size {
    let available = bounds.minus_insets(config.insets);
    let Some(image) = image else {
        return available.non_negative();
    };

    let axis = config.axis;
    let along = available.along(axis) - image.along(axis) - config.spacing;
    Size::from_axis(axis, along, available.across(axis)).non_negative()
}

/// Size of a box that exactly holds the insets and the content.
pub fn preferred_size(config: &LayoutConfig, image: Option<Size>, title: Option<Size>) -> Size {
    let axis = config.axis;
    let spacing = if image.is_some() && title.is_some() {
        config.spacing
    } else {
        0.0
    };

    let along = image.map_or(0.0, |s| s.along(axis)) + title.map_or(0.0, |s| s.along(axis)) + spacing;
    let across = image
        .map_or(0.0, |s| s.across(axis))
        .max(title.map_or(0.0, |s| s.across(axis)));

    Size::from_axis(axis, along, across).plus_insets(config.insets)
}

/// Compute the frames of the present items inside a box of size `bounds`.
pub fn layout_content(
    config: &LayoutConfig,
    bounds: Size,
    image: Option<Size>,
    title: Option<Size>,
) -> ContentFrames {
    let mut frames = ContentFrames::default();
    let [first_item, second_item] = ContentItem::ordered(config.image_alignment);
    let natural = |item| match item {
        ContentItem::Image => image,
        ContentItem::Title => title,
    };
    let mut first = natural(first_item);
    let mut second = natural(second_item);

    if first.is_none() && second.is_none() {
        return frames;
    }

    if bounds.is_empty() {
        let origin = Rect::new(config.insets.left, config.insets.top, 0.0, 0.0);
        for item in [first_item, second_item] {
            if natural(item).is_some() {
                frames.set(item, origin);
            }
        }
        return frames;
    }

    let axis = config.axis;
    let alignment = config.main_alignment();
    let (leading, trailing) = config.insets_along(axis);
    let box_along = bounds.along(axis);
    let single = first.is_some() != second.is_some();

    if alignment == Alignment::Justified && single {
        let available = (box_along - leading - trailing).max(0.0);
        let stretch = |size: Size| Size::from_axis(axis, available, size.across(axis));
        first = first.map(stretch);
        second = second.map(stretch);
    }

    let first_along = first.map_or(0.0, |s| s.along(axis));
    let second_along = second.map_or(0.0, |s| s.along(axis));
    let first_occupies = first.is_some_and(|s| !s.is_zero());
    let spacing = config.spacing;

    let (first_pos, second_pos) = match alignment {
        Alignment::Leading => {
            let second_pos = if first_occupies {
                leading + first_along + spacing
            } else {
                leading
            };
            (leading, second_pos)
        }
        Alignment::Center => {
            let gap = if first_occupies && second.is_some() {
                spacing
            } else {
                0.0
            };
            let extent = first_along + second_along + gap;
            let first_pos = (box_along - extent) / 2.0;
            let second_pos = if first_occupies {
                first_pos + first_along + spacing
            } else {
                (box_along - second_along) / 2.0
            };
            (first_pos, second_pos)
        }
        Alignment::Trailing => {
            let second_pos = box_along - trailing - second_along;
            let first_pos = if second.is_some() {
                second_pos - spacing - first_along
            } else {
                box_along - trailing - first_along
            };
            (first_pos, second_pos)
        }
        Alignment::Justified if single => (leading, leading),
        Alignment::Justified => (leading, box_along - trailing - second_along),
    };

    for (item, size, along_pos) in [(first_item, first, first_pos), (second_item, second, second_pos)] {
        if let Some(size) = size {
            let across_pos = cross_position(config, bounds, size);
            frames.set(item, frame_on_axis(axis, along_pos, across_pos, size));
        }
    }

    log::trace!("content layout in {:?}: {:?}", bounds, frames);
    frames
}

fn cross_position(config: &LayoutConfig, bounds: Size, size: Size) -> f32 {
    let cross = config.axis.cross();
    let (leading, trailing) = config.insets_along(cross);
    let extent = size.along(cross);
    let box_extent = bounds.along(cross);

    match config.cross_alignment() {
        Alignment::Leading | Alignment::Justified => leading,
        Alignment::Center => (box_extent - extent) / 2.0,
        Alignment::Trailing => box_extent - trailing - extent,
    }
}

fn frame_on_axis(axis: Axis, along: f32, across: f32, size: Size) -> Rect {
    match axis {
        Axis::Horizontal => Rect::new(along, across, size.width, size.height),
        Axis::Vertical => Rect::new(across, along, size.width, size.height),
    }
}
