use std::path::PathBuf;

use thiserror::Error;
use tile_glyph::GlyphError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("row width must be positive")]
    InvalidWidth,

    #[error("input holds no pixel rows at width {width}")]
    EmptyInput { width: usize },

    #[error("image is {actual_width}x{actual_height}, expected {expected_width}x{expected_height}")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    #[error("expected {expected} pixels, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Glyph(#[from] GlyphError),

    #[error("'{path}' is not a .bin file")]
    NotABinFile { path: PathBuf },

    #[error("no image loaded")]
    NoImage,

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
