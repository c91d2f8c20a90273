mod commands;
mod prompt;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stretch", about = "Automatic contrast stretching for 8-bit grayscale images")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stretch the contrast of an image
    Apply(commands::apply::ApplyArgs),
    /// Show histogram statistics and the bounds a saturation would select
    Info(commands::info::InfoArgs),
    /// Print or save a default stretch config as TOML
    Config(commands::config::ConfigArgs),
    /// Run a stretch described by a TOML config file
    Run(commands::run::RunArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Apply(args) => commands::apply::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Run(args) => commands::run::run(args),
    }
}
