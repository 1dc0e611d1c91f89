//! Aggregation of per-path payoffs into a valuation report.

use pricer_contracts::{Contract, PayoffShape};
use serde::Serialize;

use crate::ensemble::PathEnsemble;
use crate::payoff::PAR;

/// Summary statistics of one valuation run.
///
/// All probabilities are empirical path fractions in [0, 1].
/// `expected_value` is the raw payoff mean; `fair_value` is the same
/// mean discounted by `exp(-r T)`. Both are reported so callers that
/// quote undiscounted premia (the short-put convention) and callers
/// that quote present values (the note convention) each have their
/// number without re-deriving it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValuationReport {
    /// Discounted mean payoff, `expected_value × exp(-r T)`.
    pub fair_value: f64,
    /// Undiscounted mean payoff.
    pub expected_value: f64,
    /// Standard error of the payoff mean, `s / √n`.
    pub std_error: f64,
    /// Fraction of paths whose payoff reached the success threshold
    /// (a configurable fraction of the shape's maximum payoff).
    pub prob_success: f64,
    /// Fraction of paths that finished at or below the knock-in level.
    pub prob_knock_in: f64,
    /// Fraction of paths that knocked out. For the autocall shape this
    /// is a path-wise touch; for the put it is a terminal comparison.
    pub prob_knock_out: f64,
    /// Fraction of paths that finished at or below the strike. Only
    /// meaningful for the single-underlying put shape; `None` for the
    /// autocall, whose strike is fixed at par.
    pub prob_strike: Option<f64>,
    /// The per-path payoffs the statistics were computed from, in path
    /// order.
    pub payoffs: Vec<f64>,
}

/// Reduces a payoff ensemble and its path ensemble to a report.
///
/// The path ensemble is needed alongside the payoffs because the
/// barrier probabilities are path statistics the scalar payoff no
/// longer carries (a knocked-out autocall path that recovered to par
/// is indistinguishable from par by payoff alone).
///
/// # Panics
///
/// Panics on an empty payoff ensemble (programming error upstream;
/// the simulator rejects `n_paths = 0` before any payoff exists).
pub fn aggregate(
    contract: &Contract,
    paths: &PathEnsemble,
    payoffs: Vec<f64>,
    success_fraction: f64,
) -> ValuationReport {
    let n = payoffs.len();
    assert!(n > 0, "cannot aggregate an empty payoff ensemble");
    let n_f = n as f64;

    let mean = payoffs.iter().sum::<f64>() / n_f;
    let variance = if n > 1 {
        payoffs.iter().map(|p| (p - mean) * (p - mean)).sum::<f64>() / (n_f - 1.0)
    } else {
        0.0
    };
    let std_error = (variance / n_f).sqrt();

    let success_level = success_fraction * max_payoff(contract);
    let successes = payoffs.iter().filter(|&&p| p >= success_level).count();

    let (knock_ins, knock_outs, strikes) = count_barrier_events(contract, paths);

    ValuationReport {
        fair_value: mean * contract.discount_factor(),
        expected_value: mean,
        std_error,
        prob_success: successes as f64 / n_f,
        prob_knock_in: knock_ins as f64 / n_f,
        prob_knock_out: knock_outs as f64 / n_f,
        prob_strike: strikes.map(|s| s as f64 / n_f),
        payoffs,
    }
}

/// Maximum achievable payoff for the contract's shape: the full
/// premium for the short put, par plus the full coupon for the
/// autocall.
fn max_payoff(contract: &Contract) -> f64 {
    match contract.shape() {
        PayoffShape::ShortBarrierPut => contract.premium(),
        PayoffShape::WorstOfAutocall => {
            PAR + contract.coupon_rate() * contract.maturity_years() * PAR
        }
    }
}

fn count_barrier_events(
    contract: &Contract,
    paths: &PathEnsemble,
) -> (usize, usize, Option<usize>) {
    let ki = contract.knock_in_level();
    let ko = contract.knock_out_level();

    match contract.shape() {
        PayoffShape::ShortBarrierPut => {
            let strike = contract.strike();
            let (mut n_ki, mut n_ko, mut n_strike) = (0usize, 0usize, 0usize);
            for p in 0..paths.n_paths() {
                let s_t = paths.terminal(p, 0);
                if s_t <= ki {
                    n_ki += 1;
                }
                if s_t >= ko {
                    n_ko += 1;
                }
                if s_t <= strike {
                    n_strike += 1;
                }
            }
            (n_ki, n_ko, Some(n_strike))
        }
        PayoffShape::WorstOfAutocall => {
            let (mut n_ki, mut n_ko) = (0usize, 0usize);
            for p in 0..paths.n_paths() {
                if PAR * paths.terminal_worst_of_ratio(p) <= ki {
                    n_ki += 1;
                }
                if PAR * paths.min_worst_of_ratio(p) <= ko {
                    n_ko += 1;
                }
            }
            (n_ki, n_ko, None)
        }
    }
}
