//! water-quality CLI - color-heuristic water quality estimation

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;

/// Estimate water quality from a photo of the water surface.
#[derive(Parser)]
#[command(name = "water-quality")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output (debug logging unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an image file and print the result as JSON
    Analyze {
        /// Image file (PNG, JPEG, BMP, GIF, TIFF, WebP)
        input: PathBuf,

        /// Scoring table JSON (defaults to the built-in table)
        #[arg(short, long, env = "WATER_QUALITY_CONFIG")]
        config: Option<PathBuf>,

        /// Include band ratios, clarity and raw score
        #[arg(long)]
        details: bool,

        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the static health payload
    Health,

    /// Write the built-in scoring table as JSON
    Config {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Analyze {
            input,
            config,
            details,
            pretty,
        } => commands::analyze::run(input, config, details, pretty),
        Commands::Health => commands::health::run(),
        Commands::Config { output } => commands::config::run(output),
    }
}
