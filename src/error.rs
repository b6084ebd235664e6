//! Error type shared by all GA operations.

use thiserror::Error;

/// Errors raised by GA operations and configuration validation.
///
/// All variants describe caller mistakes; none is transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    /// Fitness statistics were requested for a population with no members.
    #[error("cannot evaluate an empty population")]
    EmptyPopulation,

    /// Crossover parents have different lengths.
    #[error("genome lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A rate parameter lies outside `[0, 1]` (or is NaN).
    #[error("{name} must lie in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    /// A size or length parameter that must be positive was zero, or a
    /// position exceeded the genome length.
    #[error("{name} is out of range: {value}")]
    InvalidLength { name: &'static str, value: usize },
}

pub type Result<T> = std::result::Result<T, GaError>;

/// Checks that `value` is a probability.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GaError::InvalidProbability { name, value })
    }
}

/// Checks that `value` is strictly positive.
pub(crate) fn check_positive(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        Err(GaError::InvalidLength { name, value })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_probability_bounds() {
        assert!(check_probability("rate", 0.0).is_ok());
        assert!(check_probability("rate", 1.0).is_ok());
        assert_eq!(
            check_probability("rate", 1.5),
            Err(GaError::InvalidProbability {
                name: "rate",
                value: 1.5
            })
        );
        assert!(check_probability("rate", -0.1).is_err());
        assert!(check_probability("rate", f64::NAN).is_err());
    }

    #[test]
    fn test_check_positive() {
        assert!(check_positive("size", 1).is_ok());
        assert_eq!(
            check_positive("size", 0),
            Err(GaError::InvalidLength {
                name: "size",
                value: 0
            })
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            GaError::EmptyPopulation.to_string(),
            "cannot evaluate an empty population"
        );
        assert_eq!(
            GaError::LengthMismatch { left: 3, right: 4 }.to_string(),
            "genome lengths differ: 3 vs 4"
        );
    }
}
