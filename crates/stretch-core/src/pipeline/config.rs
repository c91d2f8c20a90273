use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SATURATION_PERCENT;
use crate::error::Result;
use crate::filters::bounds::{validate_saturation, BoundPair};

use super::types::StretchRequest;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StretchConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Convert non-grayscale input to 8-bit luma instead of rejecting it.
    #[serde(default)]
    pub to_gray: bool,
    #[serde(default)]
    pub mode: StretchMode,
}

impl Default for StretchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.png"),
            output: PathBuf::from("stretched.png"),
            to_gray: false,
            mode: StretchMode::default(),
        }
    }
}

impl StretchConfig {
    /// Validate the configured mode into a request.
    pub fn request(&self) -> Result<StretchRequest> {
        self.mode.request()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StretchMode {
    /// Percentage of pixels clipped at each tail, in [0, 50).
    Saturation { percent: f64 },
    /// Output bounds in [0, 255], min below max.
    Explicit { min: i64, max: i64 },
}

impl Default for StretchMode {
    fn default() -> Self {
        Self::Saturation {
            percent: DEFAULT_SATURATION_PERCENT,
        }
    }
}

impl StretchMode {
    pub fn request(&self) -> Result<StretchRequest> {
        match *self {
            Self::Saturation { percent } => Ok(StretchRequest::Saturation {
                percent: validate_saturation(percent)?,
            }),
            Self::Explicit { min, max } => Ok(StretchRequest::ExplicitBounds {
                output: BoundPair::explicit(min, max)?,
            }),
        }
    }
}

impl std::fmt::Display for StretchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Saturation { percent } => write!(f, "Saturation ({percent}%)"),
            Self::Explicit { min, max } => write!(f, "Explicit ({min}..{max})"),
        }
    }
}
