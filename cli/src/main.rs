//! # ward CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ward_cli::check::{run_check, CheckArgs};
use ward_cli::kinds::{run_kinds, KindsArgs};
use ward_cli::normalize::{run_normalize, NormalizeArgs};

/// Check typed values against bracketed constraint notation.
#[derive(Parser, Debug)]
#[command(name = "ward", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate values against a constraint list.
    Check(CheckArgs),

    /// Print the canonical notation (or exported states) of a constraint list.
    Normalize(NormalizeArgs),

    /// List the registered constraint kinds and, optionally, catalog types.
    Kinds(KindsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout().lock();
    let result = match cli.command {
        Commands::Check(args) => run_check(&args, &mut stdout),
        Commands::Normalize(args) => run_normalize(&args, &mut stdout),
        Commands::Kinds(args) => run_kinds(&args, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
