//! Canonical deal records produced by ingestion collaborators.
//!
//! A [`DealRecord`] is the agreed hand-off format between the (out of
//! scope) text/HTML/spreadsheet extractors and the valuation core.
//! Percent-style fields (`vol`, `coupon`) arrive as whole numbers
//! (`32` means 32%) and are divided by 100 exactly once, here, during
//! [`Contract::from_deal`]. Optional terms are defaulted explicitly in
//! this module before validation; the contract builder itself never
//! substitutes values.

use crate::contract::{Contract, PayoffShape};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Par value used by the worst-of autocall shape, in percent-of-initial
/// space.
const PAR: f64 = 100.0;

fn default_rate() -> f64 {
    0.05
}

fn default_maturity_days() -> f64 {
    380.0
}

fn default_basket_vol_pct() -> f64 {
    25.0
}

/// Single-underlying income-note record.
///
/// Field names follow the ingestion side's table headers (`KI`, `KO`
/// uppercase). `vol` is a percent figure; barrier levels and strike
/// are absolute prices in the same units as `spot`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SinglePutRecord {
    /// Ticker or display name of the underlying.
    pub symbol: String,
    /// Current price of the underlying.
    pub spot: f64,
    /// Put strike, absolute.
    pub strike: f64,
    /// Premium received for selling the note's embedded put.
    pub premium: f64,
    /// Annualised volatility in percent (32 means 32%).
    pub vol: f64,
    /// Knock-in level, absolute.
    #[serde(rename = "KI")]
    pub ki: f64,
    /// Knock-out level, absolute.
    #[serde(rename = "KO")]
    pub ko: f64,
    /// Tenor in calendar days; 380 when the term sheet is silent.
    #[serde(default = "default_maturity_days")]
    pub maturity_days: f64,
    /// Annualised discount rate, decimal form.
    #[serde(default = "default_rate")]
    pub rate: f64,
}

/// Worst-of basket autocall record.
///
/// Barrier levels are quoted percent-of-initial (98 means 98% of each
/// underlying's starting price); `coupon` and `vol` are percent
/// figures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BasketRecord {
    /// Basket member names, in order.
    pub names: Vec<String>,
    /// Initial prices, one per name; all-par (100) when absent.
    #[serde(default)]
    pub initial_prices: Option<Vec<f64>>,
    /// Time to maturity in years.
    pub maturity_years: f64,
    /// Annualised coupon in percent (8 means 8%).
    pub coupon: f64,
    /// Knock-out level, percent-of-initial.
    pub ko: f64,
    /// Knock-in level, percent-of-initial; defaults to `ko`.
    #[serde(default)]
    pub ki: Option<f64>,
    /// Annualised volatility in percent; 25 when absent.
    #[serde(default = "default_basket_vol_pct")]
    pub vol: f64,
    /// Pairwise correlation for two-name baskets; 0.7 when absent.
    #[serde(default)]
    pub correlation: Option<f64>,
    /// Annualised discount rate, decimal form.
    #[serde(default = "default_rate")]
    pub rate: f64,
}

/// Canonical deal record, one variant per payoff shape.
///
/// Untagged: the two variants have disjoint required fields, so the
/// serde representation stays exactly the ingestion side's flat
/// mapping with no discriminator to invent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DealRecord {
    /// Short-barrier-put income note on one underlying.
    SinglePut(SinglePutRecord),
    /// Worst-of basket autocall note.
    Basket(BasketRecord),
}

impl Contract {
    /// Converts a canonical deal record into a validated contract.
    ///
    /// This is where unit normalisation happens, once: percent fields
    /// are divided by 100, day-count tenors become year fractions
    /// (ACT/365), and absent optional terms receive their documented
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the normalised terms fail
    /// contract validation.
    pub fn from_deal(record: &DealRecord) -> Result<Self, ValidationError> {
        match record {
            DealRecord::SinglePut(put) => Contract::builder()
                .shape(PayoffShape::ShortBarrierPut)
                .underlyings(vec![put.spot])
                .maturity_years(put.maturity_days / 365.0)
                .strike(put.strike)
                .knock_in_level(put.ki)
                .knock_out_level(put.ko)
                .premium(put.premium)
                .volatility(put.vol / 100.0)
                .risk_free_rate(put.rate)
                .build(),
            DealRecord::Basket(basket) => {
                let initial_prices = basket
                    .initial_prices
                    .clone()
                    .unwrap_or_else(|| vec![PAR; basket.names.len()]);
                // Two-name baskets default to the desk's 0.7 house
                // correlation; other sizes simulate independently.
                let correlation = match basket.correlation {
                    Some(rho) => rho,
                    None if basket.names.len() == 2 => 0.7,
                    None => 0.0,
                };
                Contract::builder()
                    .shape(PayoffShape::WorstOfAutocall)
                    .underlyings(initial_prices)
                    .maturity_years(basket.maturity_years)
                    .strike(PAR)
                    .knock_in_level(basket.ki.unwrap_or(basket.ko))
                    .knock_out_level(basket.ko)
                    .coupon_rate(basket.coupon / 100.0)
                    .volatility(basket.vol / 100.0)
                    .correlation(correlation)
                    .risk_free_rate(basket.rate)
                    .build()
            }
        }
    }
}
