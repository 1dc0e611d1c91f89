//! CLI error type.

use thiserror::Error;

/// Errors surfaced to the command line.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failed to read an input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Deal file is not valid JSON or does not match any deal layout.
    #[error("Failed to parse deal file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Deal terms rejected by contract validation.
    #[error("Invalid contract: {0}")]
    Contract(#[from] pricer_contracts::ValidationError),

    /// Simulation configuration rejected.
    #[error("Invalid simulation parameters: {0}")]
    Simulation(#[from] pricer_valuation::SimulationError),

    /// Valuation run failed.
    #[error("Valuation failed: {0}")]
    Valuation(#[from] pricer_valuation::ValuationError),
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;
