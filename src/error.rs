use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Failed to parse SVG: {0}")]
    Svg(#[from] resvg::usvg::Error),
    #[error("SVG has an empty canvas: {0:?}")]
    EmptySvg(Option<PathBuf>),
}

pub type Result<T> = std::result::Result<T, Error>;
