use rayon::prelude::*;

use crate::consts::{LEVELS, PARALLEL_PIXEL_THRESHOLD};
use crate::raster::Raster;

/// Pixels per work item when counting in parallel.
const COUNT_CHUNK: usize = 16_384;

/// Pixel counts per intensity level of an 8-bit raster.
///
/// The sum of all counts always equals the pixel count of the raster it was
/// built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; LEVELS],
}

impl Histogram {
    /// Count every pixel of `raster` into its intensity bin.
    pub fn from_raster(raster: &Raster) -> Self {
        let counts = match raster.data.as_slice_memory_order() {
            Some(pixels) if pixels.len() >= PARALLEL_PIXEL_THRESHOLD => pixels
                .par_chunks(COUNT_CHUNK)
                .fold(|| [0u64; LEVELS], accumulate)
                .reduce(|| [0u64; LEVELS], merge),
            _ => {
                let mut counts = [0u64; LEVELS];
                for &v in raster.data.iter() {
                    counts[v as usize] += 1;
                }
                counts
            }
        };
        Self { counts }
    }

    pub fn from_counts(counts: [u64; LEVELS]) -> Self {
        Self { counts }
    }

    pub fn counts(&self) -> &[u64; LEVELS] {
        &self.counts
    }

    pub fn count(&self, level: u8) -> u64 {
        self.counts[level as usize]
    }

    pub fn pixel_count(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Lowest level holding at least one pixel.
    pub fn first_occupied(&self) -> Option<u8> {
        self.counts.iter().position(|&c| c > 0).map(|i| i as u8)
    }

    /// Highest level holding at least one pixel.
    pub fn last_occupied(&self) -> Option<u8> {
        self.counts.iter().rposition(|&c| c > 0).map(|i| i as u8)
    }

    /// Number of distinct levels present in the raster.
    pub fn occupied_levels(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }
}

fn accumulate(mut counts: [u64; LEVELS], pixels: &[u8]) -> [u64; LEVELS] {
    for &v in pixels {
        counts[v as usize] += 1;
    }
    counts
}

fn merge(mut a: [u64; LEVELS], b: [u64; LEVELS]) -> [u64; LEVELS] {
    for (x, y) in a.iter_mut().zip(b.iter()) {
        *x += y;
    }
    a
}
