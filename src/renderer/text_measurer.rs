use std::cell::RefCell;
use std::rc::Rc;

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};

use crate::layout::Size;

/// Measures the natural size of a title.
///
/// `fitting` is the room the layout offers; implementations wrap to its
/// width when it is finite and may return a size larger than it.
pub trait TextMeasure {
    fn measure(&self, text: &str, font_size: f32, fitting: Size) -> Size;
}

/// Text measurer backed by `cosmic-text`.
///
/// The font system is loaded on first use, so constructing a measurer is cheap.
#[derive(Default)]
pub struct CosmicTextMeasurer {
    font_system: RefCell<Option<FontSystem>>,
}

impl CosmicTextMeasurer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measurer shared by every button on the current thread.
    pub fn shared() -> Rc<CosmicTextMeasurer> {
        TEXT_MEASURER.with(Rc::clone)
    }
}

impl TextMeasure for CosmicTextMeasurer {
    fn measure(&self, text: &str, font_size: f32, fitting: Size) -> Size {
        let mut font_system = self.font_system.borrow_mut();
        let font_system = font_system.get_or_insert_with(|| {
            log::debug!("loading system fonts for text measurement");
            FontSystem::new()
        });

        let metrics = Metrics::new(font_size, font_size * 1.2);
        let mut buffer = Buffer::new(font_system, metrics);

        let max_width = fitting.width.is_finite().then_some(fitting.width.max(0.0));
        buffer.set_size(font_system, max_width, None);
        buffer.set_text(
            font_system,
            text,
            &Attrs::new().family(Family::SansSerif),
            Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(font_system, true);

        let mut width = 0.0f32;
        let mut height = 0.0f32;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            height += run.line_height;
        }

        Size::new(width.ceil(), height.ceil())
    }
}

impl<T: TextMeasure + ?Sized> TextMeasure for Rc<T> {
    fn measure(&self, text: &str, font_size: f32, fitting: Size) -> Size {
        (**self).measure(text, font_size, fitting)
    }
}

thread_local! {
    static TEXT_MEASURER: Rc<CosmicTextMeasurer> = Rc::new(CosmicTextMeasurer::new());
}
