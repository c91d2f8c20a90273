use thiserror::Error;

#[derive(Error, Debug)]
pub enum StretchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Saturation {value}% is outside the interval [0, 50)")]
    InvalidSaturation { value: f64 },

    #[error("Cancelled by user")]
    Cancelled,

    #[error(
        "Invalid output bounds {min}..{max}: both must lie in [0, 255] and min must be below max"
    )]
    InvalidExplicitBounds { min: i64, max: i64 },

    #[error("Image is monochrome or bounds are degenerate: input range {lo}..{hi}")]
    DegenerateRange { lo: u8, hi: u8 },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Pixel ({col}, {row}) out of range")]
    PixelOutOfBounds { col: usize, row: usize },

    #[error("Unsupported pixel format: {0} (expected 8-bit grayscale)")]
    UnsupportedPixelFormat(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

impl StretchError {
    /// True for a user cancellation, which hosts should not surface as an error.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, StretchError>;
