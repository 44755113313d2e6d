//! Command-line interface for wslpath-norm
//!
//! Provides `convert` and `check` subcommands over the library's path conversion.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod check;
mod convert;

/// Convert WSL /mnt/<drive>/ paths into Windows drive-letter paths
#[derive(Parser)]
#[command(name = "wslpath-norm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert mount paths to drive-letter paths (other paths pass through)
    Convert(convert::ConvertArgs),

    /// Report the style of each path; fails if any is not a mount path
    Check(check::CheckArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG directives are applied first; the flag only sets the baseline level.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Convert(args) => convert::run(args),
        Commands::Check(args) => check::run(args),
    }
}
