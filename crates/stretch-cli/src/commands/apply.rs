use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use stretch_core::io::image_io::save_raster;
use stretch_core::pipeline::{acquire_request, auto_contrast, ParameterSource};
use tracing::debug;

use crate::prompt::{FlagParameters, StdinPrompter};

#[derive(Args)]
pub struct ApplyArgs {
    /// Input image file (8-bit grayscale)
    pub file: PathBuf,

    /// Percentage of pixels clipped at each end of the histogram, in [0, 50)
    #[arg(long)]
    pub saturation: Option<f64>,

    /// Lower output bound (0-255), used when no valid saturation is given
    #[arg(long)]
    pub min: Option<i64>,

    /// Upper output bound (0-255), used when no valid saturation is given
    #[arg(long)]
    pub max: Option<i64>,

    /// Ask for parameters on the terminal
    #[arg(short, long)]
    pub interactive: bool,

    /// Convert color input to grayscale instead of rejecting it
    #[arg(long)]
    pub to_gray: bool,

    /// Output file path
    #[arg(short, long, default_value = "stretched.png")]
    pub output: PathBuf,
}

pub fn run(args: &ApplyArgs) -> Result<()> {
    let no_flags = args.saturation.is_none() && args.min.is_none() && args.max.is_none();
    let source: Box<dyn ParameterSource> = if args.interactive || no_flags {
        Box::new(StdinPrompter::default())
    } else {
        Box::new(FlagParameters::new(args.saturation, args.min, args.max))
    };
    stretch_file(args, source.as_ref())
}

/// Load the input, then ask `source` for parameters, so unusable input is
/// rejected before any prompt is shown.
fn stretch_file(args: &ApplyArgs, source: &dyn ParameterSource) -> Result<()> {
    let mut raster = super::load_input(&args.file, args.to_gray)?;
    println!("Loaded {}x{} image", raster.width(), raster.height());

    let request = match acquire_request(source) {
        Ok(request) => request,
        Err(err) if err.is_cancellation() => {
            println!("Cancelled, nothing written");
            return Ok(());
        }
        Err(err) => return Err(anyhow::Error::new(err).context("Invalid stretch parameters")),
    };
    debug!(request = %request, "Parameters acquired");

    let outcome = auto_contrast(&mut raster, &request)
        .with_context(|| format!("Cannot stretch {}", args.file.display()))?;

    crate::summary::print_stretch_summary(&args.file, &args.output, &request, &outcome);

    save_raster(&raster, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
