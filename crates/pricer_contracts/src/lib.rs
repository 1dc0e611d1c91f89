//! # Contract layer
//!
//! Canonical, validated representation of barrier-structured note terms.
//!
//! This crate is the input boundary of the valuation core. External
//! ingestion collaborators (HTML table scrapers, spreadsheet parsers,
//! free-text extractors) produce a [`DealRecord`]; this crate converts
//! it into an immutable, unit-normalised [`Contract`] or rejects it
//! with a [`ValidationError`]. Nothing downstream of this crate ever
//! re-normalises units or substitutes defaults.
//!
//! ## Payoff shapes
//!
//! Two divergent barrier conventions exist in the wild for these
//! notes, and they are modelled as explicit variants rather than one
//! code path with silently different branch conditions:
//!
//! - [`PayoffShape::WorstOfAutocall`]: a worst-of basket note that
//!   knocks out when the worst performer touches the KO barrier.
//! - [`PayoffShape::ShortBarrierPut`]: a single-underlying income
//!   note where the KO barrier *disables* the buyer's downside
//!   protection.

mod contract;
mod deal;
mod error;

pub use contract::{Contract, ContractBuilder, PayoffShape};
pub use deal::{BasketRecord, DealRecord, SinglePutRecord};
pub use error::ValidationError;
