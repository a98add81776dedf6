//! Edit raw binary data as a 1 bit per pixel bitmap.
//!
//! A byte buffer is read as rows of `width` bits (most significant bit first)
//! and turned into a [`PixelGrid`] of 0/255 intensities. The grid can be edited
//! pixel by pixel and written back with [`encode`], or exported to a standard
//! image format. Glyph tables of fixed size tiles are decoded by the
//! `tile_glyph` crate, re-exported here.

mod codec;
mod config;
mod error;
mod image_io;
mod pixel_grid;
mod preview;
mod session;

pub use codec::{decode, encode, pack_bits, trim_trailing_zeros, unpack_bits};
pub use config::{Config, PreviewConfig};
pub use error::{Error, Result};
pub use image_io::{export_image, from_gray_image, import_external, load_image, to_gray_image};
pub use pixel_grid::{PixelGrid, PixelValue};
pub use preview::{parse_color, render_glyph, render_preview, GridOverlay, Zoom};
pub use session::Session;

pub use tile_glyph::{
    decode_glyph, parse_hex_code, GlyphCache, GlyphError, GlyphTable, GlyphTile, TileLayout,
};
