//! Error types for red-noise processes.

use thiserror::Error;

/// Red-noise process errors.
///
/// # Variants
/// - `InvalidTimeStep`: `dt` is zero, negative or not finite
/// - `DegenerateStep`: the step multiplier for a series is not finite
/// - `IndexOutOfRange`: series index outside `[0, count)`
/// - `BufferLength`: caller buffer length differs from the series count
/// - `InvalidParameter`: rejected configuration value
///
/// # Examples
/// ```
/// use noise_models::red_noise::RedNoiseError;
///
/// let err = RedNoiseError::IndexOutOfRange { index: 4, len: 3 };
/// assert!(format!("{}", err).contains("4"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RedNoiseError {
    /// Time step is zero, negative or not finite.
    #[error("Invalid time step: dt = {dt} (must be finite and positive)")]
    InvalidTimeStep {
        /// The rejected time step
        dt: f64,
    },

    /// Step multiplier evaluated to NaN or infinity.
    #[error("Degenerate step multiplier for series {series} at dt = {dt}")]
    DegenerateStep {
        /// Series whose multiplier failed
        series: usize,
        /// The time step
        dt: f64,
    },

    /// Series index outside `[0, len)`.
    #[error("Series index {index} out of range for {len} series")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of series
        len: usize,
    },

    /// Caller buffer does not hold one value per series.
    #[error("Value buffer holds {actual} values, expected {expected}")]
    BufferLength {
        /// Configured series count
        expected: usize,
        /// Buffer length supplied
        actual: usize,
    },

    /// Invalid configuration parameter.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RedNoiseError::InvalidTimeStep { dt: 0.0 };
        assert!(err.to_string().contains("dt = 0"));

        let err = RedNoiseError::DegenerateStep { series: 2, dt: 0.5 };
        assert!(err.to_string().contains("series 2"));

        let err = RedNoiseError::BufferLength {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Value buffer holds 3 values, expected 4");

        let err = RedNoiseError::InvalidParameter {
            name: "tau",
            value: "must be at least 1".to_string(),
        };
        assert!(err.to_string().contains("tau"));
    }
}
