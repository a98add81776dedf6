//! Rendering of grids and glyphs for display: nearest neighbour zoom and an
//! optional grid overlay.

use image::{imageops, imageops::FilterType, DynamicImage, Rgb, RgbImage};
use tile_glyph::GlyphTile;

use super::image_io::to_gray_image;
use super::pixel_grid::PixelGrid;

const MIN_ZOOM: f32 = 0.1;
const MAX_ZOOM: f32 = 64.0;
const ZOOM_STEP: f32 = 1.1;
const FALLBACK_GRID_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zoom(f32);

impl Default for Zoom {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Zoom {
    pub fn new(factor: f32) -> Self {
        if factor.is_nan() {
            return Self::default();
        }
        Self(factor.clamp(MIN_ZOOM, MAX_ZOOM))
    }

    pub fn from_percent(percent: f32) -> Self {
        Self::new(percent / 100.0)
    }

    pub fn factor(self) -> f32 {
        self.0
    }

    pub fn step_in(self) -> Self {
        Self::new(self.0 * ZOOM_STEP)
    }

    pub fn step_out(self) -> Self {
        Self::new(self.0 / ZOOM_STEP)
    }

    pub fn scale(self, dim: usize) -> u32 {
        ((dim as f32 * self.0).floor() as u32).max(1)
    }

    /// Maps a point on the zoomed canvas back to a grid coordinate.
    pub fn to_grid(self, canvas: f32) -> Option<usize> {
        let pos = (canvas / self.0).floor();
        (pos >= 0.0).then_some(pos as usize)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridOverlay {
    /// Distance between lines, in grid pixels.
    pub step: usize,
    pub color: Rgb<u8>,
}

/// Reads an `R,G,B` grid colour. Anything else falls back to red.
pub fn parse_color(value: &str) -> Rgb<u8> {
    let channels: Vec<&str> = value.split(',').collect();
    if let [r, g, b] = channels[..] {
        let channel = |c: &str| c.trim().parse::<u8>();
        if let (Ok(r), Ok(g), Ok(b)) = (channel(r), channel(g), channel(b)) {
            return Rgb([r, g, b]);
        }
    }

    FALLBACK_GRID_COLOR
}

pub fn render_preview(grid: &PixelGrid, zoom: Zoom, overlay: Option<&GridOverlay>) -> RgbImage {
    if grid.is_empty() {
        return RgbImage::new(0, 0);
    }

    let source = DynamicImage::ImageLuma8(to_gray_image(grid)).to_rgb8();
    let width = zoom.scale(grid.width());
    let height = zoom.scale(grid.height());
    let mut canvas = imageops::resize(&source, width, height, FilterType::Nearest);

    if let Some(overlay) = overlay.filter(|o| o.step > 0) {
        for gx in (0..grid.width()).step_by(overlay.step) {
            let x = (gx as f32 * zoom.factor()).floor() as u32;
            if x < width {
                for y in 0..height {
                    canvas.put_pixel(x, y, overlay.color);
                }
            }
        }
        for gy in (0..grid.height()).step_by(overlay.step) {
            let y = (gy as f32 * zoom.factor()).floor() as u32;
            if y < height {
                for x in 0..width {
                    canvas.put_pixel(x, y, overlay.color);
                }
            }
        }
    }

    canvas
}

/// Enlarges a glyph by an integer factor, set pixels white.
pub fn render_glyph(tile: &GlyphTile, scale: u32) -> RgbImage {
    let grid = PixelGrid::from(tile);
    render_preview(&grid, Zoom::new(scale.max(1) as f32), None)
}
