//! Error types for deviate sampling.
//!
//! Only the Poisson sampler has a domain that can be violated by its
//! argument; the uniform and Gaussian streams are total.

use thiserror::Error;

/// Sampling errors.
///
/// # Examples
/// ```
/// use noise_core::SamplingError;
///
/// let err = SamplingError::InvalidMean { mean: -1.0 };
/// assert!(format!("{}", err).contains("mean"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SamplingError {
    /// Poisson mean is negative, not finite, or too large for the
    /// rejection constants to be finite.
    #[error("Invalid Poisson mean: λ = {mean} (must be finite and non-negative)")]
    InvalidMean {
        /// The rejected mean
        mean: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_mean_display() {
        let err = SamplingError::InvalidMean { mean: -2.5 };
        let msg = err.to_string();
        assert!(msg.contains("-2.5"));
        assert!(msg.contains("non-negative"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&SamplingError::InvalidMean { mean: f64::NAN });
    }
}
