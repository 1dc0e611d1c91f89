//! Path and payoff ensembles.
//!
//! A [`PathEnsemble`] is the dense, immutable output of one simulation
//! call: `(n_paths, n_steps + 1, n_assets)` prices in row-major order
//! with the contract's initial prices at step 0. Both the payoff
//! evaluator and the metrics aggregator read it: the aggregator needs
//! path-level barrier-touch information, not just terminal prices.

/// One cash-flow value per simulated path, ordered like the
/// [`PathEnsemble`] path axis.
pub type PayoffEnsemble = Vec<f64>;

/// Immutable ensemble of simulated price paths.
///
/// # Memory layout
///
/// Row-major `data[(path * (n_steps + 1) + step) * n_assets + asset]`,
/// where `step = 0` holds the initial prices. For `n_steps = 1` this
/// degenerates to spot plus one terminal observation per underlying,
/// the single-step terminal-sampling form.
#[derive(Clone, Debug, PartialEq)]
pub struct PathEnsemble {
    data: Vec<f64>,
    n_paths: usize,
    n_steps: usize,
    n_assets: usize,
}

impl PathEnsemble {
    /// Wraps a filled buffer as an immutable ensemble.
    ///
    /// # Panics
    ///
    /// Panics if the buffer length does not match
    /// `n_paths * (n_steps + 1) * n_assets` (programming error in the
    /// simulator, not a user-facing failure mode).
    pub(crate) fn new(data: Vec<f64>, n_paths: usize, n_steps: usize, n_assets: usize) -> Self {
        assert_eq!(data.len(), n_paths * (n_steps + 1) * n_assets);
        Self {
            data,
            n_paths,
            n_steps,
            n_assets,
        }
    }

    /// Returns the number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps (observations minus one).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the number of underlyings per observation.
    #[inline]
    pub fn n_assets(&self) -> usize {
        self.n_assets
    }

    /// Returns the price of one underlying at one observation.
    ///
    /// `step = 0` is the initial price; `step = n_steps` is terminal.
    #[inline]
    pub fn price(&self, path: usize, step: usize, asset: usize) -> f64 {
        self.data[(path * (self.n_steps + 1) + step) * self.n_assets + asset]
    }

    /// Returns the terminal price of one underlying on one path.
    #[inline]
    pub fn terminal(&self, path: usize, asset: usize) -> f64 {
        self.price(path, self.n_steps, asset)
    }

    /// Returns the worst-of performance ratio at one observation:
    /// `min_i S_i(step) / S_i(0)`.
    ///
    /// With a single underlying this is just its performance ratio.
    pub fn worst_of_ratio(&self, path: usize, step: usize) -> f64 {
        let mut worst = f64::INFINITY;
        for asset in 0..self.n_assets {
            let ratio = self.price(path, step, asset) / self.price(path, 0, asset);
            if ratio < worst {
                worst = ratio;
            }
        }
        worst
    }

    /// Returns the terminal worst-of performance ratio of one path.
    #[inline]
    pub fn terminal_worst_of_ratio(&self, path: usize) -> f64 {
        self.worst_of_ratio(path, self.n_steps)
    }

    /// Returns the minimum worst-of performance ratio over every
    /// observation of one path, the initial one included.
    ///
    /// This is the path-wise barrier-touch statistic: a down barrier
    /// at ratio `b` is touched iff this value is `<= b`.
    pub fn min_worst_of_ratio(&self, path: usize) -> f64 {
        let mut min = f64::INFINITY;
        for step in 0..=self.n_steps {
            let worst = self.worst_of_ratio(path, step);
            if worst < min {
                min = worst;
            }
        }
        min
    }
}
