use ndarray::Array2;

use crate::error::{Result, StretchError};

/// A single 8-bit grayscale raster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<u8>,
}

impl Raster {
    pub fn new(data: Array2<u8>) -> Self {
        Self { data }
    }

    /// Build a raster from a row-major pixel buffer.
    pub fn from_raw(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 || pixels.len() != width * height {
            return Err(StretchError::InvalidDimensions { width, height });
        }
        let data = Array2::from_shape_vec((height, width), pixels)
            .map_err(|_| StretchError::InvalidDimensions { width, height })?;
        Ok(Self { data })
    }

    /// A raster where every pixel has the same intensity.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            data: Array2::from_elem((height, width), value),
        }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    pub fn get(&self, col: usize, row: usize) -> Option<u8> {
        self.data.get([row, col]).copied()
    }

    pub fn put(&mut self, col: usize, row: usize, value: u8) -> Result<()> {
        let pixel = self
            .data
            .get_mut([row, col])
            .ok_or(StretchError::PixelOutOfBounds { col, row })?;
        *pixel = value;
        Ok(())
    }

    /// Row-major copy of the pixel buffer.
    pub fn as_raw(&self) -> Vec<u8> {
        self.data.iter().copied().collect()
    }
}
