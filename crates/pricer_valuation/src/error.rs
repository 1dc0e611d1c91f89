//! Error types for the valuation kernel.

use pricer_contracts::PayoffShape;
use thiserror::Error;

use crate::mc::{MAX_PATHS, MAX_STEPS};

/// Invalid simulation parameters.
///
/// Raised at configuration build time or by [`mc::simulate`](crate::mc::simulate)
/// before any path is generated. Never retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Path count outside [1, [`MAX_PATHS`]].
    #[error("Invalid path count {0}: must be in range [1, {MAX_PATHS}]")]
    InvalidPathCount(usize),

    /// Step count outside [1, [`MAX_STEPS`]].
    #[error("Invalid step count {0}: must be in range [1, {MAX_STEPS}]")]
    InvalidStepCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Payoff shape incompatible with the contract's underlying count.
///
/// The worst-of autocall shape accepts any N >= 1 (N = 1 degenerates
/// to the single-asset case); the short-barrier-put shape is defined
/// for exactly one underlying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractShapeError {
    /// The shape does not support this many underlyings.
    #[error("Payoff shape {shape:?} is not defined for {num_underlyings} underlyings")]
    UnsupportedUnderlyingCount {
        /// The requested payoff shape.
        shape: PayoffShape,
        /// The contract's underlying count.
        num_underlyings: usize,
    },
}

/// Umbrella error for a full valuation run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    /// Path simulation rejected its parameters.
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// Payoff evaluation rejected the contract shape.
    #[error(transparent)]
    Shape(#[from] ContractShapeError),
}
