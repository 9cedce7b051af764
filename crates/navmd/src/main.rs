//! navmd CLI - Navigation sample transformer.
//!
//! Provides commands for:
//! - `build`: Rewrite a documentation tree into an output directory
//! - `check`: Verify every flagged sample transforms cleanly
//! - `transform`: Rewrite a single document

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs, TransformArgs};
use output::Output;

/// navmd - Navigation sample transformer.
#[derive(Parser)]
#[command(name = "navmd", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a documentation tree into the output directory.
    Build(BuildArgs),
    /// Verify every flagged sample transforms cleanly, writing nothing.
    Check(CheckArgs),
    /// Rewrite a single document to stdout or a file.
    Transform(TransformArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = match &cli.command {
        Commands::Build(args) => args.verbose,
        Commands::Check(args) => args.verbose,
        Commands::Transform(args) => args.verbose,
    };
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Transform(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
