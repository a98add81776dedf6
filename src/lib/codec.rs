//! Conversion between packed 1 bit per pixel buffers and pixel grids.
//!
//! Bits are stored most significant first. The raw format has no header: the
//! row width travels out of band and trailing zero bytes count as padding.

use super::error::{Error, Result};
use super::pixel_grid::PixelGrid;

const WHITE: u8 = 255;
const BLACK: u8 = 0;
const THRESHOLD: u8 = 127;

/// Strips every trailing zero byte. An all zero buffer becomes empty.
pub fn trim_trailing_zeros(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &bytes[..end]
}

/// Expands each byte into eight 0/1 values, most significant bit first.
pub fn unpack_bits(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |shift| (byte >> shift) & 1))
        .collect()
}

/// Packs bits eight to a byte, most significant first. Any non-zero value is a
/// set bit and a trailing partial byte is padded with zeros.
pub fn pack_bits(bits: &[u8]) -> Vec<u8> {
    bits.chunks(8)
        .map(|bits| {
            bits.iter()
                .enumerate()
                .filter(|(_, b)| **b != 0)
                .map(|(i, _)| 0x80 >> i)
                .sum()
        })
        .collect()
}

/// Reads `bytes` as a `width` pixel wide bitmap.
///
/// Bits that do not fill a whole row at the end are dropped.
pub fn decode(bytes: &[u8], width: usize) -> Result<PixelGrid> {
    if width == 0 {
        return Err(Error::InvalidWidth);
    }

    let mut bits = unpack_bits(trim_trailing_zeros(bytes));
    let height = bits.len() / width;
    if height == 0 {
        return Err(Error::EmptyInput { width });
    }

    bits.truncate(height * width);
    let pixels = bits
        .into_iter()
        .map(|bit| if bit == 1 { WHITE } else { BLACK })
        .collect();

    PixelGrid::from_raw(width, height, pixels)
}

/// Writes a grid back to the packed format. Intensities above 127 become set bits.
pub fn encode(grid: &PixelGrid) -> Vec<u8> {
    let bits: Vec<u8> = grid
        .pixels()
        .iter()
        .map(|&p| u8::from(p > THRESHOLD))
        .collect();

    pack_bits(&bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rows(grid: &PixelGrid) -> Vec<Vec<u8>> {
        grid.rows().map(<[u8]>::to_vec).collect()
    }

    #[test]
    fn it_trims_trailing_zero_bytes() {
        assert_eq!(&[0xFF][..], trim_trailing_zeros(&[0xFF, 0x00, 0x00]));
        assert_eq!(&[0x00, 0x01][..], trim_trailing_zeros(&[0x00, 0x01, 0x00]));
        assert_eq!(&[] as &[u8], trim_trailing_zeros(&[0x00, 0x00]));
        assert_eq!(&[] as &[u8], trim_trailing_zeros(&[]));
    }

    #[test]
    fn it_unpacks_most_significant_bit_first() {
        assert_eq!(vec![1, 0, 1, 1, 0, 0, 0, 0], unpack_bits(&[0b1011_0000]));
        assert_eq!(
            vec![0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0],
            unpack_bits(&[0x01, 0x80])
        );
    }

    #[test]
    fn it_packs_bits() {
        assert_eq!(vec![0x00], pack_bits(&[0, 0, 0, 0, 0, 0, 0, 0]));
        assert_eq!(vec![0x80], pack_bits(&[1, 0, 0, 0, 0, 0, 0, 0]));
        assert_eq!(vec![0x81], pack_bits(&[1, 0, 0, 0, 0, 0, 0, 1]));
    }

    #[test]
    fn it_pads_an_incomplete_byte() {
        assert_eq!(vec![0x00, 0x80], pack_bits(&[0, 0, 0, 0, 0, 0, 0, 0, 1]));
        assert_eq!(vec![0xE0], pack_bits(&[1, 1, 1]));
    }

    #[test]
    fn it_decodes_a_single_byte_into_two_rows() {
        let grid = decode(&[0b1011_0000], 4).unwrap();
        assert_eq!(vec![vec![255, 0, 255, 255], vec![0, 0, 0, 0]], rows(&grid));
    }

    #[test]
    fn it_ignores_trailing_padding() {
        let grid = decode(&[0xFF, 0x00], 8).unwrap();
        assert_eq!(vec![vec![255; 8]], rows(&grid));
    }

    #[test]
    fn it_drops_an_incomplete_last_row() {
        // 16 bits at width 5: three rows, one bit dropped
        let grid = decode(&[0xFF, 0xFF], 5).unwrap();
        assert_eq!((5, 3), (grid.width(), grid.height()));
        assert!(grid.pixels().iter().all(|&p| p == 255));
    }

    #[test]
    fn it_keeps_fewer_bits_than_it_reads() {
        let bytes = [0x12, 0x34, 0x56, 0x78, 0x9A];
        for width in 1..=40 {
            let grid = decode(&bytes, width).unwrap();
            let kept = grid.width() * grid.height();
            assert!(kept <= bytes.len() * 8);
            assert!(bytes.len() * 8 - kept < width);
        }
    }

    #[test]
    fn it_rejects_a_zero_width() {
        assert!(matches!(decode(&[0xFF], 0), Err(Error::InvalidWidth)));
    }

    #[test]
    fn it_rejects_input_without_a_full_row() {
        assert!(matches!(
            decode(&[0x00, 0x00, 0x00], 8),
            Err(Error::EmptyInput { width: 8 })
        ));
        assert!(matches!(decode(&[], 8), Err(Error::EmptyInput { .. })));
        assert!(matches!(
            decode(&[0xFF], 9),
            Err(Error::EmptyInput { width: 9 })
        ));
    }

    #[test]
    fn it_round_trips_whole_rows() {
        let bytes = vec![0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x80];
        for width in [1, 2, 3, 4, 6, 8, 12, 16, 24, 48] {
            let grid = decode(&bytes, width).unwrap();
            assert_eq!(bytes, encode(&grid), "width {}", width);
        }
    }

    #[test]
    fn it_is_unaffected_by_appended_zero_bytes() {
        let bytes = [0x3C, 0x42, 0x81];
        let padded = [0x3C, 0x42, 0x81, 0x00, 0x00, 0x00, 0x00];
        for width in [3, 4, 8, 11] {
            assert_eq!(decode(&bytes, width).unwrap(), decode(&padded, width).unwrap());
        }
    }

    #[test]
    fn it_encodes_a_three_by_five_grid_into_two_bytes() {
        let grid = PixelGrid::from_raw(5, 3, vec![255; 15]).unwrap();
        assert_eq!(vec![0xFF, 0xFE], encode(&grid));
    }

    #[test]
    fn it_thresholds_gray_levels() {
        let grid = PixelGrid::from_raw(8, 1, vec![0, 127, 128, 255, 200, 100, 1, 254]).unwrap();
        assert_eq!(vec![0b0011_1001], encode(&grid));
    }
}
