pub mod apply;
pub mod config;
pub mod info;
pub mod run;

use std::path::Path;

use anyhow::{Context, Result};
use stretch_core::io::image_io::{load_raster, load_raster_converted};
use stretch_core::raster::Raster;

/// Load the input image, converting to grayscale only when asked to.
pub(crate) fn load_input(path: &Path, to_gray: bool) -> Result<Raster> {
    let raster = if to_gray {
        load_raster_converted(path)
    } else {
        load_raster(path)
    };
    raster.with_context(|| format!("Failed to load {}", path.display()))
}
