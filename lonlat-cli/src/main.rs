//! lonlat CLI - Command-line interface
//!
//! Normalizes, converts and projects geographic positions using the
//! `lonlat` library. Positions are given as JSON (`'{"lng": 12, "lat": 34}'`,
//! `'[12, 34]'`) or as plain `lon,lat` text.

mod commands;
mod config;
mod error;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::config::ConfigCommands;
use commands::convert::{ConvertArgs, EqualArgs, NormalizeArgs, PrintArgs};
use commands::project::{FromPixelArgs, TileArgs, ToPixelArgs};
use config::{config_file_path, ConfigFile};
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "lonlat", version, about = "Normalize, convert and project geographic positions")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize a position to {lon, lat}
    Normalize(NormalizeArgs),

    /// Convert a position to another shape
    Convert(ConvertArgs),

    /// Print a position as "lon, lat" with fixed decimals
    Print(PrintArgs),

    /// Compare two positions
    Equal(EqualArgs),

    /// Project a position to Web Mercator pixel coordinates
    ToPixel(ToPixelArgs),

    /// Convert Web Mercator pixel coordinates to a position
    FromPixel(FromPixelArgs),

    /// Find the slippy-map tile containing a position
    Tile(TileArgs),

    /// View or modify configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise verbosity picks the level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<String, CliError> {
    let config_path = cli.config.unwrap_or_else(config_file_path);
    let load = || ConfigFile::load_from(&config_path);

    match &cli.command {
        Commands::Normalize(args) => commands::convert::run_normalize(args, &load()?),
        Commands::Convert(args) => commands::convert::run_convert(args, &load()?),
        Commands::Print(args) => commands::convert::run_print(args, &load()?),
        Commands::Equal(args) => commands::convert::run_equal(args, &load()?),
        Commands::ToPixel(args) => commands::project::run_to_pixel(args, &load()?),
        Commands::FromPixel(args) => commands::project::run_from_pixel(args, &load()?),
        Commands::Tile(args) => commands::project::run_tile(args, &load()?),
        Commands::Config(command) => commands::config::run(command, &config_path),
    }
}

/// Write command output followed by a newline.
fn emit(out: &mut impl Write, output: &str) -> Result<(), CliError> {
    writeln!(out, "{}", output)?;
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).and_then(|output| emit(&mut io::stdout().lock(), &output)) {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
