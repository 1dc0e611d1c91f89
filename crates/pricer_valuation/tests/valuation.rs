//! End-to-end valuation tests: determinism, probability laws and
//! agreement with closed-form lognormal terminal distributions.

use approx::assert_relative_eq;
use pricer_contracts::{Contract, PayoffShape};
use pricer_valuation::{NoteValuer, ValuationConfig};
use proptest::prelude::*;
use statrs::distribution::{ContinuousCDF, Normal};

fn put_contract(spot: f64, vol: f64) -> Contract {
    Contract::builder()
        .shape(PayoffShape::ShortBarrierPut)
        .underlyings(vec![spot])
        .maturity_years(380.0 / 365.0)
        .strike(220.0)
        .knock_in_level(266.0)
        .knock_out_level(418.0)
        .premium(5.5)
        .volatility(vol)
        .risk_free_rate(0.05)
        .build()
        .unwrap()
}

fn autocall_contract(ko: f64, vol: f64, rho: f64) -> Contract {
    Contract::builder()
        .shape(PayoffShape::WorstOfAutocall)
        .underlyings(vec![100.0, 100.0])
        .maturity_years(1.0)
        .knock_out_level(ko)
        .knock_in_level(ko)
        .coupon_rate(0.08)
        .volatility(vol)
        .correlation(rho)
        .risk_free_rate(0.05)
        .build()
        .unwrap()
}

fn valuer(n_paths: usize, n_steps: usize, seed: u64) -> NoteValuer {
    let config = ValuationConfig::builder()
        .n_paths(n_paths)
        .n_steps(n_steps)
        .seed(seed)
        .build()
        .unwrap();
    NoteValuer::new(config).unwrap()
}

/// Risk-neutral lognormal terminal CDF: P(S_T <= x).
fn terminal_cdf(spot: f64, rate: f64, vol: f64, maturity: f64, x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    let d = ((x / spot).ln() - (rate - 0.5 * vol * vol) * maturity) / (vol * maturity.sqrt());
    normal.cdf(d)
}

#[test]
fn test_valuation_is_deterministic_end_to_end() {
    let contract = autocall_contract(95.0, 0.25, 0.7);
    let a = valuer(5_000, 12, 42).value(&contract).unwrap();
    let b = valuer(5_000, 12, 42).value(&contract).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_fair_value_is_discounted_expected_value() {
    let contract = put_contract(380.0, 0.32);
    let report = valuer(5_000, 1, 42).value(&contract).unwrap();
    assert_relative_eq!(
        report.fair_value,
        report.expected_value * contract.discount_factor(),
        epsilon = 1e-12
    );
}

#[test]
fn test_put_barrier_probabilities_match_lognormal_cdf() {
    // Single-step terminal sampling is exactly lognormal, so the
    // empirical barrier probabilities must match the closed form to
    // within Monte Carlo noise.
    let (spot, vol, rate, maturity) = (380.0, 0.32, 0.05, 380.0 / 365.0);
    let contract = put_contract(spot, vol);
    let report = valuer(20_000, 1, 42).value(&contract).unwrap();

    let p_ki = terminal_cdf(spot, rate, vol, maturity, 266.0);
    let p_ko = 1.0 - terminal_cdf(spot, rate, vol, maturity, 418.0);
    let p_strike = terminal_cdf(spot, rate, vol, maturity, 220.0);

    assert_relative_eq!(report.prob_knock_in, p_ki, epsilon = 0.015);
    assert_relative_eq!(report.prob_knock_out, p_ko, epsilon = 0.015);
    assert_relative_eq!(report.prob_strike.unwrap(), p_strike, epsilon = 0.015);
}

#[test]
fn test_zero_volatility_collapses_to_point_mass() {
    // With sigma = 0 the terminal price is the deterministic forward
    // 380 * exp(r T) ~ 400, above every put barrier except KO.
    let contract = put_contract(380.0, 0.0);
    let report = valuer(1_000, 1, 42).value(&contract).unwrap();

    assert_eq!(report.prob_knock_in, 0.0);
    assert_eq!(report.prob_knock_out, 0.0);
    assert_eq!(report.prob_strike, Some(0.0));
    assert_eq!(report.prob_success, 1.0);
    assert_eq!(report.std_error, 0.0);
    assert_relative_eq!(report.expected_value, 5.5, epsilon = 1e-12);
}

#[test]
fn test_autocall_survival_decreases_as_barrier_rises() {
    // A barrier closer to the initial level can only be easier to
    // touch; with a shared seed the path population is identical, so
    // monotonicity holds exactly, not just statistically.
    let mut survival = Vec::new();
    for ko in [80.0, 90.0, 97.0] {
        let contract = autocall_contract(ko, 0.25, 0.7);
        let report = valuer(5_000, 12, 42).value(&contract).unwrap();
        survival.push(1.0 - report.prob_knock_out);
    }
    assert!(survival[0] >= survival[1]);
    assert!(survival[1] >= survival[2]);
    assert!(survival[0] > survival[2], "barrier sweep is degenerate");
}

#[test]
fn test_worst_of_survival_bracketed_by_single_asset() {
    // For a positively correlated pair, P(both survive) sits strictly
    // between the independent product and the single-asset survival
    // probability.
    let (rate, vol, maturity, ko_ratio) = (0.05, 0.25, 1.0, 0.95);
    let p_single = 1.0 - terminal_cdf(100.0, rate, vol, maturity, 100.0 * ko_ratio);

    let contract = autocall_contract(95.0, vol, 0.7);
    let report = valuer(50_000, 1, 42).value(&contract).unwrap();
    let p_both = 1.0 - report.prob_knock_out;

    assert!(
        p_both < p_single - 0.01,
        "joint survival {} should be below single-asset {}",
        p_both,
        p_single
    );
    assert!(
        p_both > p_single * p_single + 0.01,
        "joint survival {} should exceed independent product {}",
        p_both,
        p_single * p_single
    );
}

#[test]
fn test_autocall_expected_value_within_payoff_range() {
    let contract = autocall_contract(95.0, 0.25, 0.7);
    let report = valuer(10_000, 12, 42).value(&contract).unwrap();
    let max_payoff = 100.0 + 0.08 * 1.0 * 100.0;
    assert!(report.expected_value > 0.0);
    assert!(report.expected_value <= max_payoff);
    for &p in &report.payoffs {
        assert!(p > 0.0 && p <= max_payoff, "payoff out of range: {}", p);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_put_report_respects_probability_laws(
        spot in 50.0..500.0f64,
        vol in 0.05..0.6f64,
        strike_frac in 0.4..0.9f64,
        ki_frac in 0.5..1.0f64,
        ko_frac in 1.0..1.5f64,
        seed in any::<u64>(),
    ) {
        let contract = Contract::builder()
            .shape(PayoffShape::ShortBarrierPut)
            .underlyings(vec![spot])
            .maturity_years(1.0)
            .strike(spot * strike_frac)
            .knock_in_level(spot * ki_frac)
            .knock_out_level(spot * ko_frac)
            .premium(spot * 0.02)
            .volatility(vol)
            .risk_free_rate(0.05)
            .build()
            .unwrap();

        let mut valuer = valuer(500, 1, seed);
        let report = valuer.value(&contract).unwrap();

        for p in [
            report.prob_success,
            report.prob_knock_in,
            report.prob_knock_out,
            report.prob_strike.unwrap(),
        ] {
            prop_assert!((0.0..=1.0).contains(&p));
        }
        prop_assert!(report.std_error >= 0.0);
        prop_assert!(report.fair_value.is_finite());
        prop_assert_eq!(report.payoffs.len(), 500);
        // A seller can never collect more than the premium.
        prop_assert!(report.expected_value <= contract.premium() + 1e-12);
        // S_T <= strike implies S_T <= KI level territory comparisons
        // stay ordered when strike <= KI.
        if contract.strike() <= contract.knock_in_level() {
            prop_assert!(report.prob_strike.unwrap() <= report.prob_knock_in + 1e-12);
        }
    }
}
