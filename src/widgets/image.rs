//! Images shown by the button.
//!
//! Raster formats (PNG, JPEG, GIF, WebP) are decoded with `image`, SVG
//! documents are rasterized at their intrinsic size with `resvg`. Once loaded,
//! a [`ButtonImage`] is immutable and cheap to clone.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{Rgba, RgbaImage};

use crate::error::{Error, Result};
use crate::layout::Size;

use super::Color;

/// Source for an image - can be a file path or in-memory bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// Raster image from a file path (PNG, JPEG, GIF, WebP)
    Path(PathBuf),
    /// Raster image from in-memory bytes
    Bytes(Arc<[u8]>),
    /// SVG from a file path
    SvgPath(PathBuf),
    /// SVG from in-memory bytes
    SvgBytes(Arc<[u8]>),
}

impl ImageSource {
    /// Check if this is an SVG source
    pub fn is_svg(&self) -> bool {
        matches!(self, ImageSource::SvgPath(_) | ImageSource::SvgBytes(_))
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
        {
            ImageSource::SvgPath(path)
        } else {
            ImageSource::Path(path)
        }
    }
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        ImageSource::from(PathBuf::from(path))
    }
}

impl From<String> for ImageSource {
    fn from(path: String) -> Self {
        ImageSource::from(PathBuf::from(path))
    }
}

/// Decoded RGBA image, shared between clones.
#[derive(Clone)]
pub struct ButtonImage {
    pixels: Arc<RgbaImage>,
}

impl ButtonImage {
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// A `width` x `height` image filled with one color.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self::from_rgba(RgbaImage::from_pixel(width, height, Rgba(color.to_rgba8())))
    }

    pub fn load(source: &ImageSource) -> Result<Self> {
        match source {
            ImageSource::Path(path) => Self::open(path),
            ImageSource::Bytes(bytes) => Self::from_bytes(bytes),
            ImageSource::SvgPath(path) => {
                let data = std::fs::read(path)?;
                rasterize_svg(&data, Some(path))
            }
            ImageSource::SvgBytes(bytes) => Self::from_svg_bytes(bytes),
        }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let decoded = image::open(path)?;
        Ok(Self::from_rgba(decoded.to_rgba8()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes)?;
        Ok(Self::from_rgba(decoded.to_rgba8()))
    }

    pub fn from_svg_bytes(bytes: &[u8]) -> Result<Self> {
        rasterize_svg(bytes, None)
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Intrinsic size in pixels.
    pub fn size(&self) -> Size {
        let (width, height) = self.pixels.dimensions();
        Size::new(width as f32, height as f32)
    }

    /// Composite `color` at `alpha` over this image with source-atop.
    ///
    /// Only covered pixels are tinted; every pixel keeps its own alpha, so the
    /// transparency mask and the size are unchanged.
    pub fn tinted(&self, color: Color, alpha: f32) -> Self {
        let strength = (color.a * alpha).clamp(0.0, 1.0);
        let tint = [color.r, color.g, color.b].map(|c| c.clamp(0.0, 1.0) * 255.0);

        let mut pixels = (*self.pixels).clone();
        for pixel in pixels.pixels_mut() {
            if pixel[3] == 0 {
                continue;
            }
            for (channel, tint) in pixel.0.iter_mut().take(3).zip(tint) {
                let blended = tint * strength + f32::from(*channel) * (1.0 - strength);
                *channel = blended.round().clamp(0.0, 255.0) as u8;
            }
        }

        Self::from_rgba(pixels)
    }
}

impl PartialEq for ButtonImage {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels) || self.pixels == other.pixels
    }
}

impl fmt::Debug for ButtonImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.pixels.dimensions();
        write!(f, "ButtonImage({}x{})", width, height)
    }
}

fn rasterize_svg(data: &[u8], path: Option<&Path>) -> Result<ButtonImage> {
    let tree = resvg::usvg::Tree::from_data(data, &resvg::usvg::Options::default())?;
    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;

    let empty = || Error::EmptySvg(path.map(Path::to_path_buf));
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).ok_or_else(empty)?;
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();
    let pixels = RgbaImage::from_raw(width, height, data).ok_or_else(empty)?;

    log::debug!("rasterized SVG at {}x{}", width, height);
    Ok(ButtonImage::from_rgba(pixels))
}
