//! Check command implementation
//!
//! Runs a fixed reference valuation twice and verifies the kernel is
//! deterministic on this host before anyone trusts a seeded run.

use pricer_contracts::{Contract, PayoffShape};
use pricer_valuation::{NoteValuer, ValuationConfig, MAX_PATHS, MAX_STEPS};
use tracing::info;

use crate::{CliError, Result};

/// Run the check command
pub fn run() -> Result<()> {
    info!("Simulation limits: {} paths, {} steps", MAX_PATHS, MAX_STEPS);
    info!("Worker threads: {}", worker_threads());

    let contract = reference_contract()?;
    let config = ValuationConfig::builder()
        .n_paths(10_000)
        .n_steps(4)
        .seed(42)
        .build()?;

    let first = NoteValuer::new(config.clone())?.value(&contract)?;
    let second = NoteValuer::new(config)?.value(&contract)?;

    if first != second {
        return Err(CliError::InvalidArgument(
            "seeded valuation is not reproducible on this host".to_string(),
        ));
    }

    println!("Kernel check passed");
    println!("  reference fair value: {:.6}", first.fair_value);
    println!("  reference std error:  {:.6}", first.std_error);
    Ok(())
}

fn reference_contract() -> Result<Contract> {
    Ok(Contract::builder()
        .shape(PayoffShape::WorstOfAutocall)
        .underlyings(vec![100.0, 100.0])
        .maturity_years(1.0)
        .knock_out_level(95.0)
        .knock_in_level(95.0)
        .coupon_rate(0.08)
        .volatility(0.25)
        .correlation(0.7)
        .risk_free_rate(0.05)
        .build()?)
}

fn worker_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
