pub mod config;
mod orchestrator;
mod params;
mod types;

pub use orchestrator::{auto_contrast, plan};
pub use params::{acquire_request, FixedParameters, ParameterSource};
pub use types::{Prompt, StretchOutcome, StretchRequest};
