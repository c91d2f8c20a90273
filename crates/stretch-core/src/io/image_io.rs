use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat};
use tracing::debug;

use crate::error::{Result, StretchError};
use crate::raster::Raster;

/// Save a raster as 8-bit grayscale, choosing the format from the file
/// extension. Unknown extensions are written as PNG.
pub fn save_raster(raster: &Raster, path: &Path) -> Result<()> {
    let format = match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => ImageFormat::Tiff,
        Some("bmp") => ImageFormat::Bmp,
        Some("pgm" | "pnm") => ImageFormat::Pnm,
        _ => ImageFormat::Png,
    };

    let img = GrayImage::from_raw(
        raster.width() as u32,
        raster.height() as u32,
        raster.as_raw(),
    )
    .ok_or(StretchError::InvalidDimensions {
        width: raster.width(),
        height: raster.height(),
    })?;
    img.save_with_format(path, format)?;
    debug!(path = %path.display(), ?format, "Raster saved");
    Ok(())
}

/// Load an 8-bit grayscale image. Any other pixel format is rejected.
pub fn load_raster(path: &Path) -> Result<Raster> {
    match image::open(path)? {
        DynamicImage::ImageLuma8(gray) => gray_to_raster(gray),
        other => Err(StretchError::UnsupportedPixelFormat(format!(
            "{:?}",
            other.color()
        ))),
    }
}

/// Load any image, converting it to 8-bit luma.
pub fn load_raster_converted(path: &Path) -> Result<Raster> {
    let img = image::open(path)?;
    debug!(color = ?img.color(), "Converting to 8-bit grayscale");
    gray_to_raster(img.to_luma8())
}

fn gray_to_raster(gray: GrayImage) -> Result<Raster> {
    let (w, h) = gray.dimensions();
    Raster::from_raw(w as usize, h as usize, gray.into_raw())
}
