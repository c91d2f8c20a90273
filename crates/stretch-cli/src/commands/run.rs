use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use stretch_core::io::image_io::save_raster;
use stretch_core::pipeline::auto_contrast;
use stretch_core::pipeline::config::StretchConfig;

#[derive(Args)]
pub struct RunArgs {
    /// Stretch config file (TOML)
    pub config: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read config {}", args.config.display()))?;
    let config: StretchConfig = toml::from_str(&contents).context("Invalid stretch config")?;
    let request = config.request().context("Invalid stretch parameters")?;

    let mut raster = super::load_input(&config.input, config.to_gray)?;
    let outcome = auto_contrast(&mut raster, &request)
        .with_context(|| format!("Cannot stretch {}", config.input.display()))?;

    crate::summary::print_stretch_summary(&config.input, &config.output, &request, &outcome);

    save_raster(&raster, &config.output)
        .with_context(|| format!("Failed to save {}", config.output.display()))?;
    println!("Output saved to {}", config.output.display());

    Ok(())
}
