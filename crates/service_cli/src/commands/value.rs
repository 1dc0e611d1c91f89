//! Value command implementation
//!
//! Loads a deal record from JSON, builds the contract and runs the
//! valuation pipeline. Rounding happens here and nowhere else; the
//! kernel reports full-precision numbers.

use std::fs;

use pricer_contracts::{Contract, DealRecord, PayoffShape};
use pricer_valuation::{NoteValuer, ValuationConfig, ValuationReport};
use serde_json::json;
use tracing::info;

use crate::{CliError, Result};

/// Run the value command
pub fn run(
    deal_path: &str,
    paths: usize,
    steps: usize,
    seed: Option<u64>,
    success_fraction: f64,
    format: &str,
) -> Result<()> {
    if !std::path::Path::new(deal_path).exists() {
        return Err(CliError::FileNotFound(deal_path.to_string()));
    }

    let raw = fs::read_to_string(deal_path)?;
    let record: DealRecord = serde_json::from_str(&raw)?;
    let contract = Contract::from_deal(&record)?;

    info!("Valuing deal from {}", deal_path);
    info!("  Shape: {:?}", contract.shape());
    info!("  Paths: {}, steps: {}", paths, steps);

    let mut builder = ValuationConfig::builder()
        .n_paths(paths)
        .n_steps(steps)
        .success_fraction(success_fraction);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;

    let mut valuer = NoteValuer::new(config)?;
    let report = valuer.value(&contract)?;

    match format {
        "json" => print_json(&contract, &report),
        "table" => print_table(&contract, &report),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    Ok(())
}

/// Two-decimal display rounding.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Percentage with one decimal.
fn pct1(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}

fn print_json(contract: &Contract, report: &ValuationReport) {
    // The per-path payoff vector is deliberately left out of the
    // machine output; at 20k paths it would dwarf the summary.
    let out = json!({
        "shape": contract.shape(),
        "fair_value": round2(report.fair_value),
        "expected_value": round2(report.expected_value),
        "std_error": round2(report.std_error),
        "prob_success": report.prob_success,
        "prob_knock_in": report.prob_knock_in,
        "prob_knock_out": report.prob_knock_out,
        "prob_strike": report.prob_strike,
    });
    println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
}

fn print_table(contract: &Contract, report: &ValuationReport) {
    let strike_row = match report.prob_strike {
        Some(p) => format!("│ P(below strike)  │ {:>10} │", pct1(p)),
        None => String::new(),
    };

    println!("\n┌──────────────────┬────────────┐");
    println!("│ Metric           │ Value      │");
    println!("├──────────────────┼────────────┤");
    println!("│ Fair value       │ {:>10.2} │", report.fair_value);
    println!("│ Expected value   │ {:>10.2} │", report.expected_value);
    println!("│ Std error        │ {:>10.4} │", report.std_error);
    println!("│ P(success)       │ {:>10} │", pct1(report.prob_success));
    println!("│ P(knock-in)      │ {:>10} │", pct1(report.prob_knock_in));
    println!("│ P(knock-out)     │ {:>10} │", pct1(report.prob_knock_out));
    if !strike_row.is_empty() {
        println!("{}", strike_row);
    }
    println!("└──────────────────┴────────────┘");

    if contract.shape() == PayoffShape::ShortBarrierPut {
        println!(
            "Premium {:.2}, strike {:.2}, KI {:.2}, KO {:.2}",
            contract.premium(),
            contract.strike(),
            contract.knock_in_level(),
            contract.knock_out_level()
        );
    }
}
