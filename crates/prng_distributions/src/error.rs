//! Error types for distribution construction.

use thiserror::Error;

/// Distribution validation errors.
///
/// Raised synchronously by constructors and one-shot samplers before any
/// engine draw is made, so a failed call never advances the engine.
///
/// # Variants
/// - `ArgumentOutOfRange`: A parameter is outside its admissible range
/// - `InvalidArgument`: Parameters are individually valid but jointly malformed
/// - `LengthMismatch`: Parallel input sequences have incompatible lengths
///
/// # Examples
/// ```
/// use prng_distributions::DistributionError;
///
/// let err = DistributionError::LengthMismatch { name: "ys", expected: 4, got: 3 };
/// assert_eq!(format!("{}", err), "Length mismatch for 'ys': expected 4, got 3");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DistributionError {
    /// Parameter out of range (negative weight, non-finite bound, ...).
    #[error("Argument '{name}' out of range: {reason}")]
    ArgumentOutOfRange {
        /// Parameter name
        name: &'static str,
        /// What was violated
        reason: String,
    },

    /// Malformed shape (unordered bounds, zero total area, ...).
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Parameter name
        name: &'static str,
        /// What was violated
        reason: String,
    },

    /// Sequence lengths do not fit together.
    #[error("Length mismatch for '{name}': expected {expected}, got {got}")]
    LengthMismatch {
        /// Parameter name
        name: &'static str,
        /// Required length
        expected: usize,
        /// Supplied length
        got: usize,
    },
}

impl DistributionError {
    pub(crate) fn out_of_range(name: &'static str, reason: impl Into<String>) -> Self {
        DistributionError::ArgumentOutOfRange {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        DistributionError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = DistributionError::out_of_range("weights", "negative entry at index 2");
        assert_eq!(
            format!("{}", err),
            "Argument 'weights' out of range: negative entry at index 2"
        );
    }

    #[test]
    fn test_invalid_display() {
        let err = DistributionError::invalid("x", "bounds not ordered");
        assert!(format!("{}", err).contains("bounds not ordered"));
    }
}
