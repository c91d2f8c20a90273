use crate::consts::{BLACK, LEVELS, PARALLEL_PIXEL_THRESHOLD, WHITE};
use crate::error::Result;
use crate::raster::Raster;

use super::bounds::BoundPair;

/// Linear stretch factor mapping the `input` span onto the `output` span.
///
/// Fails with `DegenerateRange` when `input.hi <= input.lo`.
pub fn stretch_factor(input: BoundPair, output: BoundPair) -> Result<f64> {
    let input = input.ensure_valid()?;
    Ok(output.span() as f64 / input.span() as f64)
}

/// Map one intensity: `output.lo + (v - input.lo) * factor`, truncated toward
/// zero and clamped to `[0, 255]`.
///
/// `factor` is the [`stretch_factor`] ratio, applied in `f64`, so results land
/// wherever the float product does (`input.hi` may come out one level short of
/// `output.hi`). `input` must not be degenerate.
#[inline]
pub fn remap_value(v: u8, input: BoundPair, output: BoundPair) -> u8 {
    let factor = output.span() as f64 / input.span() as f64;
    apply_factor(v, input, output, factor)
}

#[inline]
fn apply_factor(v: u8, input: BoundPair, output: BoundPair, factor: f64) -> u8 {
    let stretched = output.lo as f64 + (v as i32 - input.lo as i32) as f64 * factor;
    (stretched as i64).clamp(BLACK as i64, WHITE as i64) as u8
}

/// Tabulate [`remap_value`] for every 8-bit level.
pub fn build_lut(input: BoundPair, output: BoundPair) -> Result<[u8; LEVELS]> {
    let factor = stretch_factor(input, output)?;
    let mut lut = [0u8; LEVELS];
    for (v, slot) in lut.iter_mut().enumerate() {
        *slot = apply_factor(v as u8, input, output, factor);
    }
    Ok(lut)
}

/// Stretch `raster` in place from `input` onto `output`.
///
/// The input range is validated before any pixel is written, so a degenerate
/// range leaves the raster untouched. Returns the applied factor.
pub fn remap(raster: &mut Raster, input: BoundPair, output: BoundPair) -> Result<f64> {
    let factor = stretch_factor(input, output)?;
    let lut = build_lut(input, output)?;

    if raster.pixel_count() >= PARALLEL_PIXEL_THRESHOLD {
        raster.data.par_mapv_inplace(|v| lut[v as usize]);
    } else {
        raster.data.mapv_inplace(|v| lut[v as usize]);
    }
    Ok(factor)
}

/// Copying variant of [`remap`]; `raster` is left as it was.
pub fn remapped(raster: &Raster, input: BoundPair, output: BoundPair) -> Result<Raster> {
    let lut = build_lut(input, output)?;
    Ok(Raster::new(raster.data.mapv(|v| lut[v as usize])))
}
