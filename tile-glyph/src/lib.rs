mod error;
mod glyph;
mod glyph_cache;
mod hex;
mod layout;
mod table;

pub use error::{GlyphError, Result};
pub use glyph::GlyphTile;
pub use glyph_cache::GlyphCache;
pub use hex::parse_hex_code;
pub use layout::TileLayout;
pub use table::{decode_glyph, GlyphTable};
