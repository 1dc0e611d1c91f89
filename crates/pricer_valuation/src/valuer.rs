//! Valuation orchestrator.

use pricer_contracts::Contract;

use crate::error::{SimulationError, ValuationError};
use crate::mc::{self, SimWorkspace, ValuationConfig};
use crate::metrics::{self, ValuationReport};
use crate::payoff;
use crate::rng::SimRng;

/// Runs the simulate → evaluate → aggregate pipeline for a contract.
///
/// Owns a [`SimWorkspace`] so repeated valuations with the same
/// dimensions reuse the random-draw buffer instead of reallocating it.
/// Each call reseeds its generator from the configured seed, so two
/// calls with the same contract produce identical reports; the valuer
/// carries no state between calls other than buffer capacity.
pub struct NoteValuer {
    config: ValuationConfig,
    workspace: SimWorkspace,
}

impl NoteValuer {
    /// Creates a valuer from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] when the configuration's dimensions
    /// or success fraction are out of range.
    pub fn new(config: ValuationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let capacity = config.n_paths() * config.n_steps();
        Ok(Self {
            config,
            workspace: SimWorkspace::new(capacity),
        })
    }

    /// Returns the valuer's configuration.
    #[inline]
    pub fn config(&self) -> &ValuationConfig {
        &self.config
    }

    /// Values the contract with the configured seed (0 when unset).
    ///
    /// # Errors
    ///
    /// Returns [`ValuationError`] when the contract's shape does not
    /// support its underlying count.
    pub fn value(&mut self, contract: &Contract) -> Result<ValuationReport, ValuationError> {
        let seed = self.config.seed().unwrap_or(0);
        self.value_with_seed(contract, seed)
    }

    /// Values the contract with an explicit seed, overriding the
    /// configured one. Useful for seed-sensitivity checks without
    /// rebuilding the valuer.
    pub fn value_with_seed(
        &mut self,
        contract: &Contract,
        seed: u64,
    ) -> Result<ValuationReport, ValuationError> {
        let n_paths = self.config.n_paths();
        let n_steps = self.config.n_steps();
        let n_assets = contract.num_underlyings();

        self.workspace.ensure_capacity(n_paths * n_steps * n_assets);
        let mut rng = SimRng::from_seed(seed);
        rng.fill_normal(self.workspace.randoms_mut());

        let paths = mc::generate_paths(contract, n_paths, n_steps, self.workspace.randoms());
        let payoffs = payoff::evaluate(contract, &paths)?;
        Ok(metrics::aggregate(
            contract,
            &paths,
            payoffs,
            self.config.success_fraction(),
        ))
    }
}
