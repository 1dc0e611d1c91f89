//! Payoff evaluation for the two note shapes.
//!
//! The two barrier conventions in circulation are opposites and are
//! kept as explicitly dispatched code paths (see
//! [`PayoffShape`](pricer_contracts::PayoffShape)):
//!
//! - **Worst-of autocall**: the KO barrier sits below par; the note
//!   survives while the worst performer never touches it. A breach
//!   *removes* the coupon and can convert the redemption into the
//!   worst performer.
//! - **Short barrier put**: the KO barrier sits above the strike; the
//!   terminal price reaching it (or staying above the KI level)
//!   *removes the buyer's protection*, leaving the seller with the
//!   full premium.
//!
//! Crossed barriers (KI >= KO) and zero volatility are evaluated by
//! the boolean conditions exactly as written below; they never raise.

use pricer_contracts::{Contract, PayoffShape};
use rayon::prelude::*;

use crate::ensemble::{PathEnsemble, PayoffEnsemble};
use crate::error::ContractShapeError;

/// Par value of the autocall shape, in percent-of-initial space.
pub const PAR: f64 = 100.0;

/// Maps the path ensemble to one cash flow per path.
///
/// # Errors
///
/// Returns [`ContractShapeError`] when the contract's shape is not
/// defined for its underlying count: the short-barrier-put shape needs
/// exactly one underlying. The autocall shape accepts any N >= 1
/// (N = 1 is the degenerate single-asset worst-of).
pub fn evaluate(
    contract: &Contract,
    paths: &PathEnsemble,
) -> Result<PayoffEnsemble, ContractShapeError> {
    match contract.shape() {
        PayoffShape::WorstOfAutocall => Ok(evaluate_autocall(contract, paths)),
        PayoffShape::ShortBarrierPut => {
            if paths.n_assets() != 1 {
                return Err(ContractShapeError::UnsupportedUnderlyingCount {
                    shape: contract.shape(),
                    num_underlyings: paths.n_assets(),
                });
            }
            Ok(evaluate_short_put(contract, paths))
        }
    }
}

/// Worst-of autocall payoff, per path:
///
/// - knocked out iff the worst-of value (percent-of-initial) touches
///   or falls through `knock_out_level` at any observation;
/// - survival pays `100 + coupon_rate × T × 100`;
/// - on knock-out, pays the final worst-of value when it finishes
///   strictly below `knock_in_level`, else par.
fn evaluate_autocall(contract: &Contract, paths: &PathEnsemble) -> PayoffEnsemble {
    let survival_payoff = PAR + contract.coupon_rate() * contract.maturity_years() * PAR;
    let ko = contract.knock_out_level();
    let ki = contract.knock_in_level();

    (0..paths.n_paths())
        .into_par_iter()
        .map(|path| {
            let touched = PAR * paths.min_worst_of_ratio(path) <= ko;
            if !touched {
                survival_payoff
            } else {
                let final_worst = PAR * paths.terminal_worst_of_ratio(path);
                if final_worst < ki {
                    final_worst
                } else {
                    PAR
                }
            }
        })
        .collect()
}

/// Short barrier put payoff, per path:
///
/// `premium - max(strike - S_T, 0)` when the protection is live
/// (`S_T < knock_out_level && S_T <= knock_in_level`), else the full
/// `premium`. All levels are absolute prices of the single underlying.
fn evaluate_short_put(contract: &Contract, paths: &PathEnsemble) -> PayoffEnsemble {
    let strike = contract.strike();
    let premium = contract.premium();
    let ki = contract.knock_in_level();
    let ko = contract.knock_out_level();

    (0..paths.n_paths())
        .into_par_iter()
        .map(|path| {
            let s_t = paths.terminal(path, 0);
            let protected = s_t < ko && s_t <= ki;
            let intrinsic = if protected {
                (strike - s_t).max(0.0)
            } else {
                0.0
            };
            premium - intrinsic
        })
        .collect()
}
