/// A single decoded glyph. `bitmap` holds one 0/1 value per pixel, row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphTile {
    pub code: u32,
    pub index: u32,
    pub bitmap: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl GlyphTile {
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }

        self.bitmap[y * self.width + x] != 0
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.bitmap.chunks(self.width)
    }

    pub fn is_blank(&self) -> bool {
        self.bitmap.iter().all(|&b| b == 0)
    }
}
