//! Contract validation errors.

use thiserror::Error;

/// Validation failure for malformed or out-of-domain contract terms.
///
/// Raised synchronously by [`ContractBuilder::build`](crate::ContractBuilder::build)
/// and by [`Contract::from_deal`](crate::Contract::from_deal). The
/// contract layer never repairs bad input; correcting and resubmitting
/// is an ingestion-layer concern.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Time to maturity must be strictly positive.
    #[error("Invalid maturity: T = {maturity} (must be > 0)")]
    InvalidMaturity {
        /// The rejected maturity in years.
        maturity: f64,
    },

    /// At least one initial price is required.
    #[error("Contract requires at least one underlying")]
    EmptyUnderlyings,

    /// Initial prices must be non-negative.
    #[error("Invalid initial price at index {index}: S0 = {price}")]
    NegativeInitialPrice {
        /// Position in the underlying sequence.
        index: usize,
        /// The rejected price.
        price: f64,
    },

    /// Annualised volatility must be non-negative (zero is allowed).
    #[error("Invalid volatility: sigma = {volatility}")]
    NegativeVolatility {
        /// The rejected volatility in decimal form.
        volatility: f64,
    },

    /// Pairwise correlation must lie in [-1, 1].
    #[error("Invalid correlation: rho = {correlation} (must be in [-1, 1])")]
    CorrelationOutOfRange {
        /// The rejected correlation.
        correlation: f64,
    },

    /// Premium received for the embedded option must be non-negative.
    #[error("Invalid premium: {premium} (must be >= 0)")]
    NegativePremium {
        /// The rejected premium.
        premium: f64,
    },

    /// A required builder term was never supplied.
    #[error("Missing contract term '{name}'")]
    MissingTerm {
        /// Name of the absent term.
        name: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_offending_value() {
        let err = ValidationError::InvalidMaturity { maturity: -0.5 };
        assert!(err.to_string().contains("-0.5"));

        let err = ValidationError::NegativeInitialPrice {
            index: 1,
            price: -380.0,
        };
        assert!(err.to_string().contains("index 1"));
        assert!(err.to_string().contains("-380"));

        let err = ValidationError::CorrelationOutOfRange { correlation: 1.5 };
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_missing_term_display() {
        let err = ValidationError::MissingTerm {
            name: "maturity_years",
        };
        assert_eq!(err.to_string(), "Missing contract term 'maturity_years'");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = ValidationError::EmptyUnderlyings;
        let _: &dyn std::error::Error = &err;
    }
}
