//! Immutable contract value object and its validating builder.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Payoff convention of a barrier-structured note.
///
/// The two variants encode genuinely opposite barrier semantics and
/// are never merged into one code path:
///
/// - `WorstOfAutocall`: the KO barrier sits *below* the initial level;
///   touching it from above terminates the coupon. Barrier levels and
///   the worst-of value live in percent-of-initial space (par = 100).
/// - `ShortBarrierPut`: the KO barrier sits *above* the strike; the
///   terminal price reaching it (or staying above the KI level)
///   cancels the buyer's downside protection. Levels are absolute
///   prices of the single underlying.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoffShape {
    /// Worst-of basket note paying par plus coupon on survival.
    WorstOfAutocall,
    /// Single-underlying income note: premium minus knocked-out put intrinsic.
    ShortBarrierPut,
}

/// Canonical, unit-normalised terms of a structured note.
///
/// Immutable once built. Construction goes through [`Contract::builder`]
/// (decimal-form inputs) or [`Contract::from_deal`](crate::Contract::from_deal)
/// (ingestion records with percent-style fields, normalised exactly
/// once there).
///
/// All rates are annualised and in decimal form: a 32% volatility is
/// stored as `0.32`. The single volatility applies to every underlying
/// in a basket; per-underlying volatility surfaces are out of scope.
///
/// # Examples
///
/// ```rust
/// use pricer_contracts::{Contract, PayoffShape};
///
/// let contract = Contract::builder()
///     .shape(PayoffShape::ShortBarrierPut)
///     .underlyings(vec![380.0])
///     .maturity_years(380.0 / 365.0)
///     .strike(220.0)
///     .knock_in_level(266.0)
///     .knock_out_level(418.0)
///     .premium(5.5)
///     .volatility(0.32)
///     .risk_free_rate(0.05)
///     .build()
///     .unwrap();
///
/// assert_eq!(contract.num_underlyings(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    shape: PayoffShape,
    underlyings: Vec<f64>,
    maturity_years: f64,
    strike: f64,
    knock_in_level: f64,
    knock_out_level: f64,
    premium: f64,
    volatility: f64,
    coupon_rate: f64,
    correlation: f64,
    risk_free_rate: f64,
}

impl Contract {
    /// Creates a new contract builder.
    #[inline]
    pub fn builder() -> ContractBuilder {
        ContractBuilder::default()
    }

    /// Returns the payoff shape tag.
    #[inline]
    pub fn shape(&self) -> PayoffShape {
        self.shape
    }

    /// Returns the ordered initial prices, one per underlying.
    #[inline]
    pub fn underlyings(&self) -> &[f64] {
        &self.underlyings
    }

    /// Returns the number of underlyings (N >= 1).
    #[inline]
    pub fn num_underlyings(&self) -> usize {
        self.underlyings.len()
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn maturity_years(&self) -> f64 {
        self.maturity_years
    }

    /// Returns the strike, in the shape's price units.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the knock-in barrier level, in the shape's price units.
    #[inline]
    pub fn knock_in_level(&self) -> f64 {
        self.knock_in_level
    }

    /// Returns the knock-out barrier level, in the shape's price units.
    #[inline]
    pub fn knock_out_level(&self) -> f64 {
        self.knock_out_level
    }

    /// Returns the premium received for selling the embedded option.
    #[inline]
    pub fn premium(&self) -> f64 {
        self.premium
    }

    /// Returns the annualised volatility in decimal form.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the annualised coupon rate paid on survival, decimal form.
    #[inline]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Returns the pairwise correlation.
    ///
    /// Applied only when exactly two underlyings are configured;
    /// ignored otherwise.
    #[inline]
    pub fn correlation(&self) -> f64 {
        self.correlation
    }

    /// Returns the annualised continuously-compounded discount rate.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Returns the discount factor `exp(-r * T)` to maturity.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.maturity_years).exp()
    }
}

/// Builder for [`Contract`].
///
/// `shape`, `underlyings` and `maturity_years` are required; every
/// other term defaults to zero, which is the neutral value for terms a
/// shape does not read (e.g. `premium` for the autocall shape). The
/// builder never invents values for terms a payoff *does* read;
/// populating those from partial ingestion data is the ingestion
/// layer's job, done explicitly before this point.
#[derive(Clone, Debug, Default)]
pub struct ContractBuilder {
    shape: Option<PayoffShape>,
    underlyings: Option<Vec<f64>>,
    maturity_years: Option<f64>,
    strike: f64,
    knock_in_level: f64,
    knock_out_level: f64,
    premium: f64,
    volatility: f64,
    coupon_rate: f64,
    correlation: f64,
    risk_free_rate: f64,
}

impl ContractBuilder {
    /// Sets the payoff shape (required).
    #[inline]
    pub fn shape(mut self, shape: PayoffShape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Sets the ordered initial prices (required, N >= 1).
    #[inline]
    pub fn underlyings(mut self, underlyings: Vec<f64>) -> Self {
        self.underlyings = Some(underlyings);
        self
    }

    /// Sets the time to maturity in years (required, > 0).
    #[inline]
    pub fn maturity_years(mut self, maturity_years: f64) -> Self {
        self.maturity_years = Some(maturity_years);
        self
    }

    /// Sets the strike price.
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = strike;
        self
    }

    /// Sets the knock-in barrier level.
    #[inline]
    pub fn knock_in_level(mut self, level: f64) -> Self {
        self.knock_in_level = level;
        self
    }

    /// Sets the knock-out barrier level.
    #[inline]
    pub fn knock_out_level(mut self, level: f64) -> Self {
        self.knock_out_level = level;
        self
    }

    /// Sets the premium received (>= 0).
    #[inline]
    pub fn premium(mut self, premium: f64) -> Self {
        self.premium = premium;
        self
    }

    /// Sets the annualised volatility in decimal form (>= 0).
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    /// Sets the annualised coupon rate in decimal form.
    #[inline]
    pub fn coupon_rate(mut self, coupon_rate: f64) -> Self {
        self.coupon_rate = coupon_rate;
        self
    }

    /// Sets the pairwise correlation (in [-1, 1]).
    #[inline]
    pub fn correlation(mut self, correlation: f64) -> Self {
        self.correlation = correlation;
        self
    }

    /// Sets the annualised continuously-compounded discount rate.
    #[inline]
    pub fn risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    /// Builds and validates the contract.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a required term is missing,
    /// `maturity_years <= 0`, any initial price or the volatility is
    /// negative, the underlying list is empty, the correlation lies
    /// outside [-1, 1], or the premium is negative.
    ///
    /// Barrier ordering is deliberately *not* validated: crossed
    /// barriers (KI >= KO) are legal and evaluated exactly as written
    /// by the payoff layer.
    pub fn build(self) -> Result<Contract, ValidationError> {
        let shape = self.shape.ok_or(ValidationError::MissingTerm { name: "shape" })?;
        let underlyings = self.underlyings.ok_or(ValidationError::MissingTerm {
            name: "underlyings",
        })?;
        let maturity_years = self.maturity_years.ok_or(ValidationError::MissingTerm {
            name: "maturity_years",
        })?;

        if underlyings.is_empty() {
            return Err(ValidationError::EmptyUnderlyings);
        }
        for (index, &price) in underlyings.iter().enumerate() {
            if !(price >= 0.0) {
                return Err(ValidationError::NegativeInitialPrice { index, price });
            }
        }
        if !(maturity_years > 0.0) {
            return Err(ValidationError::InvalidMaturity {
                maturity: maturity_years,
            });
        }
        if !(self.volatility >= 0.0) {
            return Err(ValidationError::NegativeVolatility {
                volatility: self.volatility,
            });
        }
        if !(-1.0..=1.0).contains(&self.correlation) {
            return Err(ValidationError::CorrelationOutOfRange {
                correlation: self.correlation,
            });
        }
        if !(self.premium >= 0.0) {
            return Err(ValidationError::NegativePremium {
                premium: self.premium,
            });
        }

        Ok(Contract {
            shape,
            underlyings,
            maturity_years,
            strike: self.strike,
            knock_in_level: self.knock_in_level,
            knock_out_level: self.knock_out_level,
            premium: self.premium,
            volatility: self.volatility,
            coupon_rate: self.coupon_rate,
            correlation: self.correlation,
            risk_free_rate: self.risk_free_rate,
        })
    }
}
