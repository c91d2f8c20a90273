use tracing::info;

use crate::error::Result;
use crate::filters::bounds::{find_bounds, find_min_max, BoundPair};
use crate::filters::histogram::Histogram;
use crate::filters::remap::remap;
use crate::raster::Raster;

use super::types::{StretchOutcome, StretchRequest};

/// Resolve the input and output bounds for `request` without touching pixels.
///
/// Fails with `InvalidSaturation` or `DegenerateRange`.
pub fn plan(histogram: &Histogram, request: &StretchRequest) -> Result<(BoundPair, BoundPair)> {
    let input = match request {
        StretchRequest::Saturation { percent } => find_bounds(histogram, *percent)?,
        StretchRequest::ExplicitBounds { .. } => find_min_max(histogram),
    };
    let input = input.ensure_valid()?;
    Ok((input, request.output_bounds()))
}

/// Stretch `raster` in place as described by `request`.
///
/// On error the raster is left unmodified.
pub fn auto_contrast(raster: &mut Raster, request: &StretchRequest) -> Result<StretchOutcome> {
    let histogram = Histogram::from_raster(raster);
    info!(
        width = raster.width(),
        height = raster.height(),
        levels = histogram.occupied_levels(),
        "Histogram built"
    );

    let (input, output) = plan(&histogram, request)?;
    let factor = remap(raster, input, output)?;

    info!(
        request = %request,
        input = %input,
        output = %output,
        factor,
        "Contrast stretch applied"
    );

    Ok(StretchOutcome {
        input,
        output,
        factor,
        pixels: raster.pixel_count(),
    })
}
