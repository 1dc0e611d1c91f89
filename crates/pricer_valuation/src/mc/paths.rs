//! GBM path generation.

use pricer_contracts::Contract;
use rayon::prelude::*;

use crate::ensemble::PathEnsemble;
use crate::error::SimulationError;
use crate::mc::{MAX_PATHS, MAX_STEPS};
use crate::rng::SimRng;

/// Simulates a path ensemble for the contract.
///
/// One-shot entry point: validates the dimensions, seeds a fresh
/// generator and produces `n_paths` trajectories of `n_steps` steps
/// over the contract's underlyings, time zero included. For repeated
/// valuations prefer [`NoteValuer`](crate::NoteValuer), which reuses
/// its draw buffer.
///
/// Deterministic: the same `(contract, n_paths, n_steps, seed)` always
/// yields an element-for-element identical ensemble.
///
/// # Errors
///
/// Returns [`SimulationError`] when `n_paths` or `n_steps` is 0 or
/// exceeds its maximum.
pub fn simulate(
    contract: &Contract,
    n_paths: usize,
    n_steps: usize,
    seed: u64,
) -> Result<PathEnsemble, SimulationError> {
    if n_paths == 0 || n_paths > MAX_PATHS {
        return Err(SimulationError::InvalidPathCount(n_paths));
    }
    if n_steps == 0 || n_steps > MAX_STEPS {
        return Err(SimulationError::InvalidStepCount(n_steps));
    }

    let mut rng = SimRng::from_seed(seed);
    let mut randoms = vec![0.0; n_paths * n_steps * contract.num_underlyings()];
    rng.fill_normal(&mut randoms);

    Ok(generate_paths(contract, n_paths, n_steps, &randoms))
}

/// Evolves the path population from pre-drawn standard normals.
///
/// `randoms` holds `n_paths × n_steps × n_assets` draws in
/// `(path, step, asset)` order. Each path occupies a disjoint slice of
/// the output buffer, so the evolution is a parallel map whose result
/// does not depend on scheduling.
pub(crate) fn generate_paths(
    contract: &Contract,
    n_paths: usize,
    n_steps: usize,
    randoms: &[f64],
) -> PathEnsemble {
    let n_assets = contract.num_underlyings();
    let n_obs = n_steps + 1;
    debug_assert_eq!(randoms.len(), n_paths * n_steps * n_assets);

    let dt = contract.maturity_years() / n_steps as f64;
    let sigma = contract.volatility();
    let drift_dt = (contract.risk_free_rate() - 0.5 * sigma * sigma) * dt;
    let vol_sqrt_dt = sigma * dt.sqrt();

    // 2x2 Cholesky factor [[1, 0], [rho, sqrt(1 - rho^2)]]; applied
    // only for two-asset baskets.
    let rho = contract.correlation();
    let correlate = n_assets == 2;
    let rho_comp = (1.0 - rho * rho).sqrt();

    let initial = contract.underlyings();
    let mut data = vec![0.0; n_paths * n_obs * n_assets];

    data.par_chunks_mut(n_obs * n_assets)
        .zip(randoms.par_chunks(n_steps * n_assets))
        .for_each(|(path, draws)| {
            path[..n_assets].copy_from_slice(initial);
            for step in 0..n_steps {
                let prev = step * n_assets;
                let next = prev + n_assets;
                let z = &draws[prev..next];
                if correlate {
                    let z0 = z[0];
                    let z1 = rho * z[0] + rho_comp * z[1];
                    path[next] = path[prev] * (drift_dt + vol_sqrt_dt * z0).exp();
                    path[next + 1] = path[prev + 1] * (drift_dt + vol_sqrt_dt * z1).exp();
                } else {
                    for asset in 0..n_assets {
                        path[next + asset] =
                            path[prev + asset] * (drift_dt + vol_sqrt_dt * z[asset]).exp();
                    }
                }
            }
        });

    PathEnsemble::new(data, n_paths, n_steps, n_assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_contracts::PayoffShape;

    fn single_asset(vol: f64) -> Contract {
        Contract::builder()
            .shape(PayoffShape::WorstOfAutocall)
            .underlyings(vec![100.0])
            .maturity_years(1.0)
            .knock_out_level(98.0)
            .knock_in_level(98.0)
            .coupon_rate(0.08)
            .volatility(vol)
            .risk_free_rate(0.05)
            .build()
            .unwrap()
    }

    fn pair(rho: f64) -> Contract {
        Contract::builder()
            .shape(PayoffShape::WorstOfAutocall)
            .underlyings(vec![100.0, 100.0])
            .maturity_years(1.0)
            .knock_out_level(98.0)
            .knock_in_level(98.0)
            .coupon_rate(0.08)
            .volatility(0.25)
            .correlation(rho)
            .risk_free_rate(0.05)
            .build()
            .unwrap()
    }

    #[test]
    fn test_dimension_validation() {
        let contract = single_asset(0.2);
        assert!(matches!(
            simulate(&contract, 0, 1, 42),
            Err(SimulationError::InvalidPathCount(0))
        ));
        assert!(matches!(
            simulate(&contract, 10, 0, 42),
            Err(SimulationError::InvalidStepCount(0))
        ));
        assert!(matches!(
            simulate(&contract, MAX_PATHS + 1, 1, 42),
            Err(SimulationError::InvalidPathCount(_))
        ));
    }

    #[test]
    fn test_time_zero_holds_initial_prices() {
        let contract = pair(0.5);
        let paths = simulate(&contract, 50, 4, 42).unwrap();
        for p in 0..50 {
            assert_eq!(paths.price(p, 0, 0), 100.0);
            assert_eq!(paths.price(p, 0, 1), 100.0);
        }
    }

    #[test]
    fn test_prices_stay_positive_and_finite() {
        let contract = single_asset(0.4);
        let paths = simulate(&contract, 200, 20, 7).unwrap();
        for p in 0..200 {
            for s in 0..=20 {
                let price = paths.price(p, s, 0);
                assert!(price > 0.0 && price.is_finite(), "price = {}", price);
            }
        }
    }

    #[test]
    fn test_determinism_same_seed() {
        let contract = pair(0.7);
        let a = simulate(&contract, 100, 5, 12345).unwrap();
        let b = simulate(&contract, 100, 5, 12345).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let contract = single_asset(0.2);
        let a = simulate(&contract, 100, 5, 1).unwrap();
        let b = simulate(&contract, 100, 5, 2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_volatility_is_deterministic_forward() {
        let contract = single_asset(0.0);
        let paths = simulate(&contract, 10, 4, 42).unwrap();
        let dt = 0.25;
        for p in 0..10 {
            for s in 0..=4 {
                let forward = 100.0 * (0.05 * dt * s as f64).exp();
                assert_relative_eq!(paths.price(p, s, 0), forward, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_terminal_mean_matches_risk_neutral_drift() {
        // E[S_T] = S0 * exp(r T)
        let contract = single_asset(0.2);
        let paths = simulate(&contract, 50_000, 1, 42).unwrap();
        let mean = (0..paths.n_paths())
            .map(|p| paths.terminal(p, 0))
            .sum::<f64>()
            / paths.n_paths() as f64;
        assert_relative_eq!(mean, 100.0 * 0.05_f64.exp(), max_relative = 0.02);
    }

    #[test]
    fn test_full_correlation_moves_pair_in_lockstep() {
        let contract = pair(1.0);
        let paths = simulate(&contract, 100, 3, 42).unwrap();
        // With rho = 1 both assets receive the identical shock stream.
        for p in 0..100 {
            for s in 0..=3 {
                assert_relative_eq!(
                    paths.price(p, s, 0),
                    paths.price(p, s, 1),
                    epsilon = 1e-10
                );
            }
        }
    }

    #[test]
    fn test_correlation_raises_comovement() {
        let hi = simulate(&pair(0.9), 20_000, 1, 42).unwrap();
        let lo = simulate(&pair(0.0), 20_000, 1, 42).unwrap();

        let sample_corr = |paths: &PathEnsemble| {
            let n = paths.n_paths() as f64;
            let (mut ma, mut mb) = (0.0, 0.0);
            for p in 0..paths.n_paths() {
                ma += paths.terminal(p, 0).ln();
                mb += paths.terminal(p, 1).ln();
            }
            ma /= n;
            mb /= n;
            let (mut cov, mut va, mut vb) = (0.0, 0.0, 0.0);
            for p in 0..paths.n_paths() {
                let da = paths.terminal(p, 0).ln() - ma;
                let db = paths.terminal(p, 1).ln() - mb;
                cov += da * db;
                va += da * da;
                vb += db * db;
            }
            cov / (va.sqrt() * vb.sqrt())
        };

        let corr_hi = sample_corr(&hi);
        let corr_lo = sample_corr(&lo);
        assert_relative_eq!(corr_hi, 0.9, epsilon = 0.03);
        assert!(corr_lo.abs() < 0.03, "corr_lo = {}", corr_lo);
    }
}
