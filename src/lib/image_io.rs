use std::path::Path;

use image::{GrayImage, ImageFormat, ImageReader, Luma};

use super::error::{Error, Result};
use super::pixel_grid::PixelGrid;

pub fn to_gray_image(grid: &PixelGrid) -> GrayImage {
    GrayImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        Luma([grid.get(x as usize, y as usize).unwrap_or(0)])
    })
}

pub fn from_gray_image(image: &GrayImage) -> Result<PixelGrid> {
    PixelGrid::from_raw(
        image.width() as usize,
        image.height() as usize,
        image.as_raw().clone(),
    )
}

/// Saves the grid as a single channel image. The format follows the file
/// extension; paths without one are written as TIFF.
pub fn export_image(grid: &PixelGrid, path: &Path) -> Result<()> {
    let image = to_gray_image(grid);
    if path.extension().is_some() {
        image.save(path)?;
    } else {
        image.save_with_format(path, ImageFormat::Tiff)?;
    }

    Ok(())
}

/// Accepts an image only when its shape fits rows of `expected_width` pixels.
///
/// The expected height is `height / (width / expected_width)` in integer
/// arithmetic, so in practice the image must already be `expected_width` wide.
pub fn import_external(image: &GrayImage, expected_width: usize) -> Result<PixelGrid> {
    if expected_width == 0 {
        return Err(Error::InvalidWidth);
    }

    let width = image.width() as usize;
    let height = image.height() as usize;
    let expected_height = height.checked_div(width / expected_width).unwrap_or(0);

    if (width, height) != (expected_width, expected_height) {
        return Err(Error::DimensionMismatch {
            expected_width,
            expected_height,
            actual_width: width,
            actual_height: height,
        });
    }

    from_gray_image(image)
}

/// Opens any image format the `image` crate can read and imports it as luma.
/// The format is sniffed from the content, so the extension does not matter.
pub fn load_image(path: &Path, expected_width: usize) -> Result<PixelGrid> {
    let image = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?
        .to_luma8();
    import_external(&image, expected_width)
}
