use crate::filters::bounds::BoundPair;

/// How the output of one stretch is determined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StretchRequest {
    /// Clip `percent` of the pixels at each tail, stretch onto `[0, 255]`.
    Saturation { percent: f64 },
    /// Stretch the pure min/max range onto host-supplied bounds.
    ExplicitBounds { output: BoundPair },
}

impl StretchRequest {
    /// Bounds the stretched raster is mapped onto.
    pub fn output_bounds(&self) -> BoundPair {
        match self {
            Self::Saturation { .. } => BoundPair::full_range(),
            Self::ExplicitBounds { output } => *output,
        }
    }
}

impl std::fmt::Display for StretchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Saturation { percent } => write!(f, "Saturation {percent}%"),
            Self::ExplicitBounds { output } => write!(f, "Explicit bounds {output}"),
        }
    }
}

/// Result of one applied stretch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StretchOutcome {
    /// Bounds found in the source histogram.
    pub input: BoundPair,
    /// Bounds the input range was mapped onto.
    pub output: BoundPair,
    pub factor: f64,
    pub pixels: usize,
}

/// Outcome of asking the host for a single value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Prompt<T> {
    Value(T),
    /// The user dismissed the prompt.
    Cancelled,
    /// No value was given; the prompt's default applies where there is one.
    Absent,
}

impl<T> Prompt<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl<T> From<Option<T>> for Prompt<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::Absent,
        }
    }
}
