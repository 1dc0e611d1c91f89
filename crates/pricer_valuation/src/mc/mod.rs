//! Monte Carlo path simulation.
//!
//! Risk-neutral geometric Brownian motion over one or more
//! underlyings, log-space increments cumulated per step, the initial
//! prices prepended as the time-zero observation:
//!
//! ```text
//! S(t+dt) = S(t) × exp((r - 0.5σ²)dt + σ√dt × Z)
//! ```
//!
//! For exactly two underlyings the independent draws are correlated
//! through the Cholesky factor `[[1, 0], [ρ, √(1-ρ²)]]` of the 2×2
//! correlation matrix. For N = 1 or N > 2 the draws stay independent:
//! correlation beyond the two-asset pairwise case is out of scope and
//! is deliberately not approximated.
//!
//! Random draws are taken sequentially from the invocation's seeded
//! generator; path evolution then runs as a parallel map over disjoint
//! per-path slices, so the output is bit-for-bit reproducible
//! regardless of thread scheduling.

mod config;
mod paths;
mod workspace;

pub use config::{ValuationConfig, ValuationConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use paths::simulate;
pub use workspace::SimWorkspace;

pub(crate) use paths::generate_paths;
