/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of discrete intensity levels in an 8-bit raster.
pub const LEVELS: usize = 256;

/// Darkest representable intensity.
pub const BLACK: u8 = 0x00;

/// Brightest representable intensity.
pub const WHITE: u8 = 0xFF;

/// Exclusive upper limit for the saturation percentage.
pub const MAX_SATURATION_PERCENT: f64 = 50.0;

/// Saturation offered by the prompt and used by the default config.
pub const DEFAULT_SATURATION_PERCENT: f64 = 0.0;

/// Default lower output bound offered by the minimum prompt.
pub const DEFAULT_MIN_LIMIT: i64 = BLACK as i64;

/// Default upper output bound offered by the maximum prompt.
pub const DEFAULT_MAX_LIMIT: i64 = WHITE as i64;
