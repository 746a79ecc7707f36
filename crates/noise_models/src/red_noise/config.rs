//! Red-noise process configuration.
//!
//! This module provides [`RedNoiseConfig`] and the builder that validates it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::RedNoiseError;

/// Red-noise process configuration.
///
/// Immutable once built. Every series of a process built from one
/// configuration shares the same correlation time and amplitude.
///
/// # Examples
///
/// ```rust
/// use noise_models::red_noise::RedNoiseConfig;
///
/// let config = RedNoiseConfig::builder()
///     .series(8)
///     .tau(20.0)
///     .sigma(1.5)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.series(), 8);
/// assert_eq!(config.decay(), 0.95);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RedNoiseConfig {
    /// Number of independent series.
    series: usize,
    /// Correlation time τ, in the same units as `dt`.
    tau: f64,
    /// Amplitude σ of each series.
    sigma: f64,
}

impl RedNoiseConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> RedNoiseConfigBuilder {
        RedNoiseConfigBuilder::default()
    }

    /// Creates and validates a configuration in one call.
    ///
    /// # Errors
    ///
    /// See [`RedNoiseConfig::validate`].
    pub fn new(series: usize, tau: f64, sigma: f64) -> Result<Self, RedNoiseError> {
        let config = Self { series, tau, sigma };
        config.validate()?;
        Ok(config)
    }

    /// Returns the number of series.
    #[inline]
    pub fn series(&self) -> usize {
        self.series
    }

    /// Returns the correlation time τ.
    #[inline]
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Returns the amplitude σ.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Returns the per-series decay factor α = 1 - 1/τ.
    #[inline]
    pub fn decay(&self) -> f64 {
        1.0 - 1.0 / self.tau
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `RedNoiseError::InvalidParameter` if:
    /// - `series` is 0
    /// - `tau` is zero or not finite
    /// - `sigma` is not finite
    ///
    /// τ below 1 (negative α) and negative σ are accepted. A τ in (0, 1)
    /// only yields a finite step multiplier for time steps where α^(1/dt + 1)
    /// is defined; other steps fail in
    /// [`RedNoiseProcess::advance`](super::RedNoiseProcess::advance) with
    /// `RedNoiseError::DegenerateStep`.
    pub fn validate(&self) -> Result<(), RedNoiseError> {
        if self.series == 0 {
            return Err(RedNoiseError::InvalidParameter {
                name: "series",
                value: "must be at least 1".to_string(),
            });
        }
        if !self.tau.is_finite() || self.tau == 0.0 {
            return Err(RedNoiseError::InvalidParameter {
                name: "tau",
                value: format!("{} (must be finite and non-zero)", self.tau),
            });
        }
        if !self.sigma.is_finite() {
            return Err(RedNoiseError::InvalidParameter {
                name: "sigma",
                value: format!("{} (must be finite)", self.sigma),
            });
        }
        Ok(())
    }
}

/// Builder for [`RedNoiseConfig`].
///
/// All three fields are required; validation happens in [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct RedNoiseConfigBuilder {
    series: Option<usize>,
    tau: Option<f64>,
    sigma: Option<f64>,
}

impl RedNoiseConfigBuilder {
    /// Sets the number of series.
    #[inline]
    pub fn series(mut self, series: usize) -> Self {
        self.series = Some(series);
        self
    }

    /// Sets the correlation time τ (finite, non-zero).
    #[inline]
    pub fn tau(mut self, tau: f64) -> Self {
        self.tau = Some(tau);
        self
    }

    /// Sets the amplitude σ (finite).
    #[inline]
    pub fn sigma(mut self, sigma: f64) -> Self {
        self.sigma = Some(sigma);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `RedNoiseError::InvalidParameter` if a field is missing or invalid.
    pub fn build(self) -> Result<RedNoiseConfig, RedNoiseError> {
        let series = self.series.ok_or(RedNoiseError::InvalidParameter {
            name: "series",
            value: "must be specified".to_string(),
        })?;

        let tau = self.tau.ok_or(RedNoiseError::InvalidParameter {
            name: "tau",
            value: "must be specified".to_string(),
        })?;

        let sigma = self.sigma.ok_or(RedNoiseError::InvalidParameter {
            name: "sigma",
            value: "must be specified".to_string(),
        })?;

        RedNoiseConfig::new(series, tau, sigma)
    }
}
