use byteorder::{BigEndian, ByteOrder};

use super::error::{GlyphError, Result};
use super::glyph::GlyphTile;
use super::layout::TileLayout;

/// A read-only view over a flat table of fixed size glyph records.
#[derive(Clone, Copy, Debug)]
pub struct GlyphTable<'a> {
    bytes: &'a [u8],
    layout: TileLayout,
}

impl<'a> GlyphTable<'a> {
    pub fn new(bytes: &'a [u8], layout: TileLayout) -> Result<Self> {
        layout.validate()?;
        Ok(Self { bytes, layout })
    }

    /// Number of whole records in the table.
    pub fn glyph_count(&self) -> usize {
        self.bytes.len() / self.layout.tile_bytes()
    }

    pub fn contains(&self, code: u32) -> bool {
        self.tile_offset(code).is_ok()
    }

    pub fn glyph(&self, code: u32) -> Result<GlyphTile> {
        let offset = self.tile_offset(code)?;
        let index = self.layout.index_of(code)?;
        let tile = &self.bytes[offset..offset + self.layout.tile_bytes()];

        let width = self.layout.width;
        let height = self.layout.height;
        let bytes_per_row = self.layout.bytes_per_row();
        let row_bits = bytes_per_row * 8;

        let mut bitmap = vec![0u8; width * height];
        for (y, row) in tile.chunks_exact(bytes_per_row).enumerate() {
            let word = BigEndian::read_uint(row, bytes_per_row);
            for x in 0..width {
                let mask = 1u64 << (row_bits - 1 - x);
                if word & mask != 0 {
                    bitmap[y * width + x] = 1;
                }
            }
        }

        Ok(GlyphTile {
            code,
            index,
            bitmap,
            width,
            height,
        })
    }

    fn tile_offset(&self, code: u32) -> Result<usize> {
        let index = self.layout.index_of(code)?;
        let tile_bytes = self.layout.tile_bytes();
        let table_len = self.bytes.len();

        let out_of_range = |offset| GlyphError::OutOfRange {
            offset,
            tile_bytes,
            table_len,
        };

        let offset = (index as usize)
            .checked_mul(tile_bytes)
            .ok_or_else(|| out_of_range(usize::MAX))?;
        match offset.checked_add(tile_bytes) {
            Some(end) if end <= table_len => Ok(offset),
            _ => Err(out_of_range(offset)),
        }
    }
}

/// Decodes the glyph for `code` out of `table`.
pub fn decode_glyph(table: &[u8], code: u32, layout: &TileLayout) -> Result<GlyphTile> {
    GlyphTable::new(table, *layout)?.glyph(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const KANJI: TileLayout = TileLayout {
        bank_base: 0x8000,
        width: 16,
        height: 16,
    };

    fn table_with(index: usize, tile: &[u8]) -> Vec<u8> {
        let mut table = vec![0u8; (index + 1) * 32];
        table[index * 32..index * 32 + tile.len()].copy_from_slice(tile);
        table
    }

    #[test]
    fn it_decodes_a_blank_tile() {
        let table = vec![0u8; 0x42 * 32];
        let glyph = decode_glyph(&table, 0x8041, &KANJI).unwrap();

        assert_eq!(0x8041, glyph.code);
        assert_eq!(0x41, glyph.index);
        assert_eq!((16, 16), (glyph.width, glyph.height));
        assert!(glyph.is_blank());
    }

    #[test]
    fn it_refuses_the_lower_bank() {
        let table = vec![0u8; 0x42 * 32];
        assert_eq!(
            Err(GlyphError::UnsupportedGlyphBank {
                code: 0x0041,
                bank_base: 0x8000
            }),
            decode_glyph(&table, 0x0041, &KANJI)
        );
        assert!(decode_glyph(&table, 0x8000, &KANJI).is_err());
    }

    #[test]
    fn it_reads_rows_as_big_endian_words() {
        let mut tile = [0u8; 32];
        // row 0: 0x8001 -> first and last column
        tile[0] = 0x80;
        tile[1] = 0x01;
        // row 15: 0x00FF -> right half
        tile[30] = 0x00;
        tile[31] = 0xFF;
        let table = table_with(3, &tile);

        let glyph = decode_glyph(&table, 0x8003, &KANJI).unwrap();

        let row0: Vec<u8> = glyph.rows().next().unwrap().to_vec();
        let mut expected = vec![0u8; 16];
        expected[0] = 1;
        expected[15] = 1;
        assert_eq!(expected, row0);

        let row15: Vec<u8> = glyph.rows().nth(15).unwrap().to_vec();
        assert_eq!(vec![0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1], row15);

        for y in 1..15 {
            for x in 0..16 {
                assert!(!glyph.pixel(x, y));
            }
        }
    }

    #[test]
    fn it_reports_tiles_past_the_end() {
        let table = vec![0xFFu8; 0x41 * 32 + 31];
        assert_eq!(
            Err(GlyphError::OutOfRange {
                offset: 0x41 * 32,
                tile_bytes: 32,
                table_len: 0x41 * 32 + 31,
            }),
            decode_glyph(&table, 0x8041, &KANJI)
        );
    }

    #[test]
    fn it_accepts_a_tile_ending_exactly_at_the_table_end() {
        let table = vec![0xFFu8; 0x42 * 32];
        let glyph = decode_glyph(&table, 0x8041, &KANJI).unwrap();
        assert!(glyph.bitmap.iter().all(|&b| b == 1));
    }

    #[test]
    fn it_does_not_overflow_on_huge_codes() {
        let layout = TileLayout::new(0, 64, 1).unwrap();
        let table = vec![0u8; 64];
        assert!(matches!(
            decode_glyph(&table, u32::MAX, &layout),
            Err(GlyphError::OutOfRange { .. })
        ));
    }

    #[test]
    fn it_is_deterministic() {
        let tile: Vec<u8> = (0..32u8).map(|b| b.wrapping_mul(37)).collect();
        let table = table_with(7, &tile);

        let first = decode_glyph(&table, 0x8007, &KANJI).unwrap();
        let second = decode_glyph(&table, 0x8007, &KANJI).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn it_decodes_narrow_layouts() {
        // 12 pixel rows use the top 12 bits of a two byte word
        let layout = TileLayout::new(0x100, 12, 2).unwrap();
        let table = [0, 0, 0, 0, 0xFF, 0xF0, 0x80, 0x10];
        let glyph = decode_glyph(&table, 0x101, &layout).unwrap();

        #[rustfmt::skip]
        let expected = vec![
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
        ];
        assert_eq!(expected, glyph.bitmap);
    }

    #[test]
    fn it_counts_whole_records() {
        let table = vec![0u8; 32 * 3 + 5];
        let glyphs = GlyphTable::new(&table, KANJI).unwrap();
        assert_eq!(3, glyphs.glyph_count());
        assert!(glyphs.contains(0x8002));
        assert!(!glyphs.contains(0x8003));
        assert!(!glyphs.contains(0x7FFF));
    }
}
