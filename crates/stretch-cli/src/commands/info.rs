use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use stretch_core::filters::bounds::{find_bounds, BoundPair};
use stretch_core::filters::histogram::Histogram;
use stretch_core::filters::remap::stretch_factor;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file (8-bit grayscale)
    pub file: PathBuf,

    /// Saturation percentage used to preview the input bounds
    #[arg(long, default_value = "0")]
    pub saturation: f64,

    /// Convert color input to grayscale instead of rejecting it
    #[arg(long)]
    pub to_gray: bool,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let raster = super::load_input(&args.file, args.to_gray)?;
    let histogram = Histogram::from_raster(&raster);
    let bounds = find_bounds(&histogram, args.saturation)
        .context("Cannot compute bounds for this saturation")?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", raster.width(), raster.height());
    println!("Pixels:      {}", histogram.pixel_count());
    println!("Levels used: {}", histogram.occupied_levels());

    if let (Some(lo), Some(hi)) = (histogram.first_occupied(), histogram.last_occupied()) {
        println!("Range:       {}..{}", lo, hi);
    }

    println!("Saturation:  {}%", args.saturation);
    println!("Bounds:      {}", bounds);
    match stretch_factor(bounds, BoundPair::full_range()) {
        Ok(factor) => println!("Factor:      {:.4}", factor),
        Err(err) => println!("Factor:      n/a ({})", err),
    }

    Ok(())
}
