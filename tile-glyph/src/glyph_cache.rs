use hashbrown::HashMap;

use super::error::Result;
use super::glyph::GlyphTile;
use super::table::GlyphTable;

#[derive(Debug, Default)]
pub struct GlyphCache {
    glyphs: HashMap<u32, GlyphTile>,
}

impl GlyphCache {
    pub fn new() -> Self {
        Self {
            glyphs: HashMap::new(),
        }
    }

    pub fn contains(&self, code: u32) -> bool {
        self.glyphs.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn clear(&mut self) {
        self.glyphs.clear();
    }

    /// Returns the cached glyph for `code`, decoding it from `table` on first use.
    /// Failed lookups are not remembered.
    pub fn get_or_decode(&mut self, table: &GlyphTable<'_>, code: u32) -> Result<&GlyphTile> {
        if !self.glyphs.contains_key(&code) {
            let glyph = table.glyph(code)?;
            self.glyphs.insert(code, glyph);
        }

        Ok(&self.glyphs[&code])
    }
}
