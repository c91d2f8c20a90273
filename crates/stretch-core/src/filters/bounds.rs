use tracing::debug;

use crate::consts::{BLACK, LEVELS, MAX_SATURATION_PERCENT, WHITE};
use crate::error::{Result, StretchError};

use super::histogram::Histogram;

/// An intensity interval `[lo, hi]`, used both for bounds discovered from a
/// histogram and for the target range of a stretch.
///
/// Only `lo < hi` is meaningful for stretching. Construction does not enforce
/// it so that degenerate search results stay observable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundPair {
    pub lo: u8,
    pub hi: u8,
}

impl BoundPair {
    pub fn new(lo: u8, hi: u8) -> Self {
        Self { lo, hi }
    }

    /// The full 8-bit range `[0, 255]`.
    pub fn full_range() -> Self {
        Self { lo: BLACK, hi: WHITE }
    }

    /// Validate host-supplied bounds: both in `[0, 255]` and `min < max`.
    pub fn explicit(min: i64, max: i64) -> Result<Self> {
        let in_range = |v: i64| (BLACK as i64..=WHITE as i64).contains(&v);
        if !in_range(min) || !in_range(max) || min >= max {
            return Err(StretchError::InvalidExplicitBounds { min, max });
        }
        Ok(Self {
            lo: min as u8,
            hi: max as u8,
        })
    }

    /// Signed width `hi - lo`; zero or negative for degenerate pairs.
    pub fn span(&self) -> i32 {
        self.hi as i32 - self.lo as i32
    }

    pub fn is_degenerate(&self) -> bool {
        self.hi <= self.lo
    }

    pub fn ensure_valid(self) -> Result<Self> {
        if self.is_degenerate() {
            return Err(StretchError::DegenerateRange {
                lo: self.lo,
                hi: self.hi,
            });
        }
        Ok(self)
    }
}

impl Default for BoundPair {
    fn default() -> Self {
        Self::full_range()
    }
}

impl std::fmt::Display for BoundPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

/// Check that `percent` lies in `[0, 50)`. NaN is rejected.
pub fn validate_saturation(percent: f64) -> Result<f64> {
    if (0.0..MAX_SATURATION_PERCENT).contains(&percent) {
        Ok(percent)
    } else {
        Err(StretchError::InvalidSaturation { value: percent })
    }
}

/// Find input bounds that clip `saturation_percent` of the pixels at each tail.
///
/// At least one pixel is always counted, so 0% yields the first and last
/// occupied levels. The low and high scans run independently, which means the
/// result may be degenerate (`lo >= hi`) for concentrated histograms or large
/// saturations. Callers check that with [`BoundPair::ensure_valid`].
pub fn find_bounds(histogram: &Histogram, saturation_percent: f64) -> Result<BoundPair> {
    let saturation_percent = validate_saturation(saturation_percent)?;
    Ok(scan_bounds(histogram, saturation_percent))
}

/// Pure min/max mode: the first and last occupied levels.
pub fn find_min_max(histogram: &Histogram) -> BoundPair {
    scan_bounds(histogram, 0.0)
}

fn scan_bounds(histogram: &Histogram, saturation_percent: f64) -> BoundPair {
    let pixel_count = histogram.pixel_count();
    let target = ((pixel_count as f64 * (saturation_percent * 0.01)) as u64).max(1);
    let counts = histogram.counts();

    let mut acc = 0u64;
    let mut lo = 0usize;
    loop {
        acc += counts[lo];
        if acc >= target || lo == LEVELS - 1 {
            break;
        }
        lo += 1;
    }

    let mut acc = 0u64;
    let mut hi = LEVELS - 1;
    loop {
        acc += counts[hi];
        if acc >= target || hi == 0 {
            break;
        }
        hi -= 1;
    }

    debug!(
        clip_count = target,
        lo,
        hi,
        saturation = saturation_percent,
        "Bounds found"
    );
    BoundPair::new(lo as u8, hi as u8)
}
