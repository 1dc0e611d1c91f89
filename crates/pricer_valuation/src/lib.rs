//! # Valuation kernel
//!
//! Monte Carlo valuation of barrier-structured notes: path simulation,
//! payoff evaluation and metric aggregation over a
//! [`Contract`](pricer_contracts::Contract).
//!
//! The kernel is pure and deterministic: given the same contract,
//! path/step counts and seed, every invocation reproduces the same
//! [`PathEnsemble`] bit for bit. Each invocation owns its random
//! stream (seeded [`SimRng`]), its path ensemble and its payoff
//! ensemble; nothing is shared or mutated after creation, so
//! valuations can run concurrently without interference.
//!
//! # Pipeline
//!
//! ```text
//! NoteValuer
//! ├── ValuationConfig   (paths, steps, seed, success threshold)
//! ├── SimWorkspace      (pre-allocated random buffer)
//! └── value()
//!     ├── mc::simulate      -> PathEnsemble
//!     ├── payoff::evaluate  -> PayoffEnsemble
//!     └── metrics::aggregate -> ValuationReport
//! ```
//!
//! # Example
//!
//! ```rust
//! use pricer_contracts::{Contract, PayoffShape};
//! use pricer_valuation::{NoteValuer, ValuationConfig};
//!
//! let contract = Contract::builder()
//!     .shape(PayoffShape::WorstOfAutocall)
//!     .underlyings(vec![100.0, 100.0])
//!     .maturity_years(1.0)
//!     .knock_out_level(98.0)
//!     .knock_in_level(98.0)
//!     .coupon_rate(0.08)
//!     .volatility(0.25)
//!     .correlation(0.7)
//!     .risk_free_rate(0.05)
//!     .build()
//!     .unwrap();
//!
//! let config = ValuationConfig::builder()
//!     .n_paths(10_000)
//!     .n_steps(1)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut valuer = NoteValuer::new(config).unwrap();
//! let report = valuer.value(&contract).unwrap();
//! assert!(report.prob_knock_out >= 0.0 && report.prob_knock_out <= 1.0);
//! ```

mod ensemble;
mod error;
pub mod mc;
pub mod metrics;
pub mod payoff;
pub mod rng;
mod valuer;

pub use ensemble::{PathEnsemble, PayoffEnsemble};
pub use error::{ContractShapeError, SimulationError, ValuationError};
pub use mc::{ValuationConfig, ValuationConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use metrics::ValuationReport;
pub use rng::SimRng;
pub use valuer::NoteValuer;
