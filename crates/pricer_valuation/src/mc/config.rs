//! Valuation run configuration.

use crate::error::SimulationError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Default success-probability threshold, as a fraction of the maximum
/// achievable payoff for the contract's shape.
const DEFAULT_SUCCESS_FRACTION: f64 = 0.9;

/// Immutable configuration for one valuation run.
///
/// Use [`ValuationConfig::builder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_valuation::ValuationConfig;
///
/// let config = ValuationConfig::builder()
///     .n_paths(20_000)
///     .n_steps(1)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_paths(), 20_000);
/// assert_eq!(config.success_fraction(), 0.9);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ValuationConfig {
    n_paths: usize,
    n_steps: usize,
    seed: Option<u64>,
    success_fraction: f64,
}

impl ValuationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> ValuationConfigBuilder {
        ValuationConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the optional seed for reproducibility.
    ///
    /// An unset seed means seed 0; valuations are deterministic either
    /// way.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the success-threshold fraction of maximum payoff.
    #[inline]
    pub fn success_fraction(&self) -> f64 {
        self.success_fraction
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] if `n_paths` or `n_steps` is 0 or
    /// exceeds its maximum, or if `success_fraction` is not a finite
    /// value in [0, 1].
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(SimulationError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(SimulationError::InvalidStepCount(self.n_steps));
        }
        if !self.success_fraction.is_finite() || !(0.0..=1.0).contains(&self.success_fraction) {
            return Err(SimulationError::InvalidParameter {
                name: "success_fraction",
                value: format!("{} (must be in [0, 1])", self.success_fraction),
            });
        }
        Ok(())
    }
}

/// Builder for [`ValuationConfig`].
#[derive(Clone, Debug)]
pub struct ValuationConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
    success_fraction: f64,
}

impl Default for ValuationConfigBuilder {
    fn default() -> Self {
        Self {
            n_paths: None,
            n_steps: None,
            seed: None,
            success_fraction: DEFAULT_SUCCESS_FRACTION,
        }
    }
}

impl ValuationConfigBuilder {
    /// Sets the number of simulation paths (required, [1, [`MAX_PATHS`]]).
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path (required, [1, [`MAX_STEPS`]]).
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the success-threshold fraction of maximum payoff.
    ///
    /// Defaults to 0.9: a path counts as a success when its payoff
    /// reaches 90% of the shape's maximum achievable payoff.
    #[inline]
    pub fn success_fraction(mut self, fraction: f64) -> Self {
        self.success_fraction = fraction;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] when a required field is missing or
    /// any field fails validation.
    pub fn build(self) -> Result<ValuationConfig, SimulationError> {
        let n_paths = self.n_paths.ok_or(SimulationError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;
        let n_steps = self.n_steps.ok_or(SimulationError::InvalidParameter {
            name: "n_steps",
            value: "must be specified".to_string(),
        })?;

        let config = ValuationConfig {
            n_paths,
            n_steps,
            seed: self.seed,
            success_fraction: self.success_fraction,
        };
        config.validate()?;
        Ok(config)
    }
}
