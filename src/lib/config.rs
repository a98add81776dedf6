use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tile_glyph::TileLayout;

use super::error::{Error, Result};

const DEFAULT_WIDTH: usize = 128;
const DEFAULT_GLYPH_SCALE: u32 = 5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub zoom: f32,
    pub grid: bool,
    pub grid_color: String,
    pub glyph_scale: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            grid: false,
            grid_color: "255,0,0".to_string(),
            glyph_scale: DEFAULT_GLYPH_SCALE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Row width in pixels used to interpret raw files.
    pub width: usize,
    pub glyph: TileLayout,
    pub preview: PreviewConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            glyph: TileLayout::default(),
            preview: PreviewConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::InvalidWidth);
        }
        self.glyph.validate()?;

        Ok(())
    }
}
