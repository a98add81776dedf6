use tile_glyph::GlyphTile;

use super::error::{Error, Result};

const DEFAULT_TABLE_COLUMNS: usize = 16;

/// The two intensities the editor paints with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelValue {
    Black = 0,
    White = 255,
}

impl From<PixelValue> for u8 {
    fn from(value: PixelValue) -> Self {
        value as u8
    }
}

/// Row-major single channel image, origin top left.
///
/// The dimensions are fixed once the grid exists; only individual pixels change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl PixelGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn from_raw(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self> {
        if pixels.len() != width * height {
            return Err(Error::PixelCountMismatch {
                expected: width * height,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Writes one pixel. Coordinates outside the grid are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, value: u8) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = value;
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks(0) panics, an empty grid simply has no rows
        self.pixels.chunks(self.width.max(1))
    }

    /// Lays the grid out as a fixed number of columns per row. Cells past the
    /// grid width are `None`.
    pub fn pixel_table(&self, columns: usize) -> Vec<Vec<Option<u8>>> {
        let columns = if columns == 0 {
            DEFAULT_TABLE_COLUMNS
        } else {
            columns
        };

        self.rows()
            .map(|row| (0..columns).map(|col| row.get(col).copied()).collect())
            .collect()
    }
}

impl From<&GlyphTile> for PixelGrid {
    fn from(tile: &GlyphTile) -> Self {
        let pixels = tile
            .bitmap
            .iter()
            .map(|&bit| {
                let value = if bit != 0 {
                    PixelValue::White
                } else {
                    PixelValue::Black
                };
                u8::from(value)
            })
            .collect();

        Self {
            width: tile.width,
            height: tile.height,
            pixels,
        }
    }
}
