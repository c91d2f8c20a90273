#![allow(dead_code)]

use stretch_core::consts::LEVELS;
use stretch_core::filters::histogram::Histogram;
use stretch_core::raster::Raster;

/// One pixel per level in `lo..=hi`, laid out as a single row.
pub fn level_run_raster(lo: u8, hi: u8) -> Raster {
    let pixels: Vec<u8> = (lo..=hi).collect();
    Raster::from_raw(pixels.len(), 1, pixels).unwrap()
}

/// Every level 0..=255 once, as a 16x16 raster.
pub fn full_range_raster() -> Raster {
    Raster::from_raw(16, 16, (0..=255u8).collect()).unwrap()
}

/// Histogram with `count` pixels at each level in `lo..=hi`.
pub fn uniform_histogram(lo: u8, hi: u8, count: u64) -> Histogram {
    let mut counts = [0u64; LEVELS];
    for level in lo..=hi {
        counts[level as usize] = count;
    }
    Histogram::from_counts(counts)
}

/// Histogram with the given (level, count) entries, zero elsewhere.
pub fn sparse_histogram(entries: &[(u8, u64)]) -> Histogram {
    let mut counts = [0u64; LEVELS];
    for &(level, count) in entries {
        counts[level as usize] = count;
    }
    Histogram::from_counts(counts)
}

/// Deterministic pseudo-random raster (xorshift), so tests need no RNG crate.
pub fn noise_raster(width: usize, height: usize, seed: u32) -> Raster {
    let mut state = seed.max(1);
    let pixels = (0..width * height)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect();
    Raster::from_raw(width, height, pixels).unwrap()
}
