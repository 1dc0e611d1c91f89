//! notesctl - Command Line Valuation of Barrier-Structured Notes
//!
//! Operational entry point for the note valuation library.
//!
//! # Commands
//!
//! - `notesctl value --deal <file>` - Value a deal from a JSON file
//! - `notesctl check` - Verify the simulation kernel is deterministic
//!
//! The deal file holds either a single-underlying short-put record
//! (symbol/spot/strike/premium/vol/KI/KO) or a worst-of basket record
//! (names/maturity/coupon/barriers); the layout is detected from the
//! fields present.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Barrier note valuation CLI
#[derive(Parser)]
#[command(name = "notesctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Value a deal from a JSON file
    Value {
        /// Path to the deal file (JSON)
        #[arg(short, long)]
        deal: String,

        /// Number of Monte Carlo paths
        #[arg(short, long, default_value = "20000")]
        paths: usize,

        /// Number of time steps per path
        #[arg(short = 'n', long, default_value = "1")]
        steps: usize,

        /// Seed for reproducible runs (defaults to 0)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Success threshold as a fraction of the maximum payoff
        #[arg(long, default_value = "0.9")]
        success_fraction: f64,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Check the simulation kernel reproduces a reference valuation
    Check,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Value {
            deal,
            paths,
            steps,
            seed,
            success_fraction,
            format,
        } => commands::value::run(&deal, paths, steps, seed, success_fraction, &format),
        Commands::Check => commands::check::run(),
    }
}
