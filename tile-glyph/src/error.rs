use thiserror::Error;

pub type Result<T> = std::result::Result<T, GlyphError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GlyphError {
    #[error("glyph code {code:#06X} is not above the bank base {bank_base:#06X}")]
    UnsupportedGlyphBank { code: u32, bank_base: u32 },

    #[error("tile at offset {offset} ({tile_bytes} bytes) is outside a {table_len} byte table")]
    OutOfRange {
        offset: usize,
        tile_bytes: usize,
        table_len: usize,
    },

    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidHexDigit { digit: char, position: usize },

    #[error("hex code must have 1 to 4 digits, got {len}")]
    InvalidHexLength { len: usize },

    #[error("invalid tile layout {width}x{height} (width must be 1..=64, height > 0)")]
    InvalidLayout { width: usize, height: usize },
}
