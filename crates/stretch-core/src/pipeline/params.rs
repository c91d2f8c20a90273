use tracing::{debug, warn};

use crate::consts::{DEFAULT_MAX_LIMIT, DEFAULT_MIN_LIMIT};
use crate::error::{Result, StretchError};
use crate::filters::bounds::{validate_saturation, BoundPair};

use super::types::{Prompt, StretchRequest};

/// Host-side source of stretch parameters.
///
/// Implementors drive whatever user interaction the host has (terminal
/// prompts, dialogs, command-line flags). `report` surfaces a recoverable
/// error while acquisition continues; the default discards it.
pub trait ParameterSource {
    /// Saturation percentage, expected in `[0, 50)`.
    fn request_saturation(&self) -> Prompt<f64>;

    /// Lower output bound. `Absent` means the default of 0.
    fn request_min_limit(&self) -> Prompt<i64>;

    /// Upper output bound. `Absent` means the default of 255.
    fn request_max_limit(&self) -> Prompt<i64>;

    fn report(&self, _error: &StretchError) {}
}

/// Collect a [`StretchRequest`] from `source`.
///
/// A valid saturation selects saturation mode. An out-of-range saturation is
/// reported and, like a cancelled or missing one, falls back to asking for
/// explicit output bounds. Cancelling either bound prompt aborts with
/// `Cancelled`.
pub fn acquire_request(source: &dyn ParameterSource) -> Result<StretchRequest> {
    match source.request_saturation() {
        Prompt::Value(percent) => match validate_saturation(percent) {
            Ok(percent) => return Ok(StretchRequest::Saturation { percent }),
            Err(err) => {
                warn!(value = percent, "Saturation rejected, asking for explicit bounds");
                source.report(&err);
            }
        },
        Prompt::Cancelled | Prompt::Absent => {
            debug!("No saturation given, asking for explicit bounds");
        }
    }

    let min = resolve_limit(source.request_min_limit(), DEFAULT_MIN_LIMIT)?;
    let max = resolve_limit(source.request_max_limit(), DEFAULT_MAX_LIMIT)?;
    let output = BoundPair::explicit(min, max)?;
    Ok(StretchRequest::ExplicitBounds { output })
}

fn resolve_limit(prompt: Prompt<i64>, default: i64) -> Result<i64> {
    match prompt {
        Prompt::Value(v) => Ok(v),
        Prompt::Absent => Ok(default),
        Prompt::Cancelled => Err(StretchError::Cancelled),
    }
}

/// A fixed set of answers, for hosts that gather everything up front.
#[derive(Clone, Copy, Debug)]
pub struct FixedParameters {
    pub saturation: Prompt<f64>,
    pub min_limit: Prompt<i64>,
    pub max_limit: Prompt<i64>,
}

impl FixedParameters {
    pub fn saturation(percent: f64) -> Self {
        Self {
            saturation: Prompt::Value(percent),
            min_limit: Prompt::Absent,
            max_limit: Prompt::Absent,
        }
    }

    pub fn explicit(min: i64, max: i64) -> Self {
        Self {
            saturation: Prompt::Absent,
            min_limit: Prompt::Value(min),
            max_limit: Prompt::Value(max),
        }
    }
}

impl ParameterSource for FixedParameters {
    fn request_saturation(&self) -> Prompt<f64> {
        self.saturation
    }

    fn request_min_limit(&self) -> Prompt<i64> {
        self.min_limit
    }

    fn request_max_limit(&self) -> Prompt<i64> {
        self.max_limit
    }
}
