//! Editing session state: the loaded file, the grid being edited, the zoom
//! level and the glyph table cache. Front ends own a `Session` and drive it.

use std::{
    fs,
    path::{Path, PathBuf},
};

use image::RgbImage;
use log::{debug, info};
use tile_glyph::{parse_hex_code, GlyphCache, GlyphTable, GlyphTile};

use super::codec;
use super::config::Config;
use super::error::{Error, Result};
use super::image_io;
use super::pixel_grid::{PixelGrid, PixelValue};
use super::preview::{self, GridOverlay, Zoom};

const BIN_EXTENSION: &str = "bin";

#[derive(Debug)]
struct LoadedTable {
    path: PathBuf,
    bytes: Vec<u8>,
}

#[derive(Debug)]
pub struct Session {
    config: Config,
    path: Option<PathBuf>,
    grid: Option<PixelGrid>,
    zoom: Zoom,
    glyph_table: Option<LoadedTable>,
    glyph_cache: GlyphCache,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let zoom = Zoom::new(config.preview.zoom);
        Self {
            config,
            path: None,
            grid: None,
            zoom,
            glyph_table: None,
            glyph_cache: GlyphCache::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    /// Changes the row width used by the next `open` or `reload`.
    pub fn set_width(&mut self, width: usize) -> Result<()> {
        if width == 0 {
            return Err(Error::InvalidWidth);
        }
        self.config.width = width;
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn grid(&self) -> Option<&PixelGrid> {
        self.grid.as_ref()
    }

    pub fn grid_mut(&mut self) -> Option<&mut PixelGrid> {
        self.grid.as_mut()
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: Zoom) {
        self.zoom = zoom;
    }

    /// Loads a raw `.bin` file at the current width. On failure the session is left as it was.
    pub fn open(&mut self, path: &Path) -> Result<&PixelGrid> {
        let is_bin = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(BIN_EXTENSION));
        if !is_bin {
            return Err(Error::NotABinFile {
                path: path.to_path_buf(),
            });
        }

        let grid = Self::read_grid(path, self.config.width)?;
        info!(
            "opened {} as {}x{}",
            path.display(),
            grid.width(),
            grid.height()
        );

        self.path = Some(path.to_path_buf());
        self.zoom = Zoom::new(self.config.preview.zoom);
        Ok(&*self.grid.insert(grid))
    }

    /// Decodes the open file again, picking up a changed width or on-disk edits.
    pub fn reload(&mut self) -> Result<&PixelGrid> {
        let path = self.path.as_deref().ok_or(Error::NoImage)?;
        let grid = Self::read_grid(path, self.config.width)?;
        info!(
            "reloaded {} as {}x{}",
            path.display(),
            grid.width(),
            grid.height()
        );

        Ok(&*self.grid.insert(grid))
    }

    fn read_grid(path: &Path, width: usize) -> Result<PixelGrid> {
        let bytes = fs::read(path)?;
        codec::decode(&bytes, width)
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, value: PixelValue) -> Result<()> {
        let grid = self.grid.as_mut().ok_or(Error::NoImage)?;
        debug!("set ({}, {}) to {:?}", x, y, value);
        grid.set_pixel(x, y, value.into());
        Ok(())
    }

    pub fn save_bin(&self, path: &Path) -> Result<()> {
        let grid = self.grid.as_ref().ok_or(Error::NoImage)?;
        let bytes = codec::encode(grid);
        fs::write(path, &bytes)?;
        info!("saved {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    pub fn export_image(&self, path: &Path) -> Result<()> {
        let grid = self.grid.as_ref().ok_or(Error::NoImage)?;
        image_io::export_image(grid, path)?;
        info!("exported image to {}", path.display());
        Ok(())
    }

    /// Replaces the grid with an image whose shape matches the current width.
    pub fn import_image(&mut self, path: &Path) -> Result<&PixelGrid> {
        let grid = image_io::load_image(path, self.config.width)?;
        info!(
            "imported {} as {}x{}",
            path.display(),
            grid.width(),
            grid.height()
        );
        Ok(&*self.grid.insert(grid))
    }

    pub fn pixel_table(&self, columns: usize) -> Result<Vec<Vec<Option<u8>>>> {
        let grid = self.grid.as_ref().ok_or(Error::NoImage)?;
        Ok(grid.pixel_table(columns))
    }

    /// Renders the grid at the session zoom, with grid lines every row width when enabled.
    pub fn preview(&self) -> Result<RgbImage> {
        let grid = self.grid.as_ref().ok_or(Error::NoImage)?;
        let overlay = if self.config.preview.grid {
            Some(GridOverlay {
                step: self.config.width,
                color: preview::parse_color(&self.config.preview.grid_color),
            })
        } else {
            None
        };

        Ok(preview::render_preview(grid, self.zoom, overlay.as_ref()))
    }

    /// Looks up the glyph for a hex code such as `"8041"` in the table at `table_path`.
    ///
    /// Tables are read once and glyphs cached until a different table is requested.
    pub fn glyph(&mut self, hex: &str, table_path: &Path) -> Result<&GlyphTile> {
        let code = parse_hex_code(hex)?;

        let reuse = matches!(&self.glyph_table, Some(t) if t.path.as_path() == table_path);
        if !reuse {
            let bytes = fs::read(table_path)?;
            info!(
                "loaded glyph table {} ({} bytes)",
                table_path.display(),
                bytes.len()
            );
            self.glyph_cache.clear();
            self.glyph_table = Some(LoadedTable {
                path: table_path.to_path_buf(),
                bytes,
            });
        }

        let bytes = self
            .glyph_table
            .as_ref()
            .map_or(&[][..], |loaded| loaded.bytes.as_slice());
        if self.glyph_cache.contains(code) {
            debug!("glyph {:04X} served from cache", code);
        }

        let table = GlyphTable::new(bytes, self.config.glyph)?;
        Ok(self.glyph_cache.get_or_decode(&table, code)?)
    }

    pub fn cached_glyphs(&self) -> usize {
        self.glyph_cache.len()
    }
}
