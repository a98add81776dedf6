use serde::{Deserialize, Serialize};

use super::error::{GlyphError, Result};

// Kanji table layout: codes above 0x8000, 16x16 tiles, one big endian u16 per row
const DEFAULT_BANK_BASE: u32 = 0x8000;
const DEFAULT_TILE_WIDTH: usize = 16;
const DEFAULT_TILE_HEIGHT: usize = 16;

// Rows are read as a single big endian word, so a row can be at most 8 bytes wide.
const MAX_TILE_WIDTH: usize = 64;

/// Describes how fixed size glyph records are laid out inside a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileLayout {
    /// Codes at or below this value belong to another bank.
    pub bank_base: u32,
    pub width: usize,
    pub height: usize,
}

impl Default for TileLayout {
    fn default() -> Self {
        Self {
            bank_base: DEFAULT_BANK_BASE,
            width: DEFAULT_TILE_WIDTH,
            height: DEFAULT_TILE_HEIGHT,
        }
    }
}

impl TileLayout {
    pub fn new(bank_base: u32, width: usize, height: usize) -> Result<Self> {
        let layout = Self {
            bank_base,
            width,
            height,
        };
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> Result<()> {
        let fits = self.bytes_per_row().checked_mul(self.height).is_some();
        if self.width == 0 || self.width > MAX_TILE_WIDTH || self.height == 0 || !fits {
            return Err(GlyphError::InvalidLayout {
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }

    pub fn bytes_per_row(&self) -> usize {
        (self.width + 7) / 8
    }

    pub fn tile_bytes(&self) -> usize {
        self.bytes_per_row() * self.height
    }

    /// In-bank index for `code`, or `UnsupportedGlyphBank` when the code is not above the base.
    pub fn index_of(&self, code: u32) -> Result<u32> {
        if code <= self.bank_base {
            return Err(GlyphError::UnsupportedGlyphBank {
                code,
                bank_base: self.bank_base,
            });
        }

        Ok(code - self.bank_base)
    }
}
