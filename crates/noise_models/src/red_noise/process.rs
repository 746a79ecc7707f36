//! Time-stepped red-noise process.

use noise_core::rng::NormalSource;
use tracing::debug;

use super::config::RedNoiseConfig;
use super::error::RedNoiseError;
use super::storage::{InitialValues, SeriesValues};

/// Step multiplier ρ for decay factor α and time step `dt`.
///
/// # Mathematical Definition
/// ```text
/// n = 1 / dt
/// ρ = sqrt( (1 - α)² / (n - 2α - nα² + 2α^(n+1)) / dt )
/// ```
///
/// The denominator is (1-α)²(1-α²) times the variance of the sum of `n`
/// consecutive terms of a unit-innovation AR(1) sequence with coefficient α.
/// For α = 0 (τ = 1) it reduces to ρ = 1.
///
/// Returns NaN or infinity when the denominator degenerates (very large
/// `dt`, or α < 0 with non-integer `n`); [`RedNoiseProcess::advance`]
/// rejects such steps.
///
/// # Examples
/// ```
/// use noise_models::red_noise::step_multiplier;
///
/// assert!((step_multiplier(0.0, 0.25) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn step_multiplier(decay: f64, dt: f64) -> f64 {
    let n = 1.0 / dt;
    let complement = 1.0 - decay;
    let denominator = n - 2.0 * decay - n * decay * decay + 2.0 * decay.powf(n + 1.0);
    (complement * complement / denominator / dt).sqrt()
}

/// Red-noise process over a fixed number of series.
///
/// Each series `i` carries a decay factor `α_i = 1 - 1/τ`, an amplitude
/// `σ_i` and a current value. [`advance`](Self::advance) adds
/// `sqrt(dt) · σ_i · ρ_i · z_i` to every value, where `z_i` is a fresh
/// standard normal deviate drawn in series order and `ρ_i` is the
/// [`step_multiplier`].
///
/// # Generator
///
/// The process draws from any [`NormalSource`] `R`. Pass `&mut NoiseRng` to
/// lend a generator for the process lifetime, or `Rc<RefCell<NoiseRng>>` to
/// let several processes share one generator. Neither form is `Sync`; the
/// process is strictly single-threaded.
///
/// # Storage
///
/// Values are owned ([`InitialValues::Broadcast`]) or borrowed from the
/// caller ([`InitialValues::Borrowed`]). A borrowed buffer holds the latest
/// state after the process is dropped.
///
/// # Examples
///
/// ```rust
/// use noise_core::rng::NoiseRng;
/// use noise_models::red_noise::RedNoiseProcess;
///
/// let mut rng = NoiseRng::new(-3);
/// let mut buffer = [1.0, 2.0];
///
/// {
///     let mut process = RedNoiseProcess::with_buffer(&mut rng, 5.0, 0.1, &mut buffer).unwrap();
///     process.advance(0.5).unwrap();
///     assert!(process.is_borrowed());
/// }
///
/// assert_ne!(buffer, [1.0, 2.0]);
/// ```
#[derive(Debug)]
pub struct RedNoiseProcess<'a, R> {
    rng: R,
    /// Per-series decay α = 1 - 1/τ.
    decay: Vec<f64>,
    /// Per-series amplitude σ.
    amplitude: Vec<f64>,
    values: SeriesValues<'a>,
    /// Time step the cached multipliers belong to.
    cached_dt: Option<f64>,
    /// Per-series step multipliers ρ for `cached_dt`.
    rho: Vec<f64>,
}

impl<'a, R: NormalSource> RedNoiseProcess<'a, R> {
    /// Creates a process from a configuration and initial values.
    ///
    /// # Errors
    ///
    /// - `RedNoiseError::InvalidParameter` if the configuration is invalid
    ///   (it is re-validated here since it may have been deserialised)
    /// - `RedNoiseError::BufferLength` if a borrowed buffer does not hold
    ///   exactly `config.series()` values
    pub fn new(
        rng: R,
        config: &RedNoiseConfig,
        initial: InitialValues<'a>,
    ) -> Result<Self, RedNoiseError> {
        config.validate()?;
        let count = config.series();
        let values = SeriesValues::from_initial(initial, count)?;

        debug!(
            series = count,
            tau = config.tau(),
            sigma = config.sigma(),
            borrowed = values.is_borrowed(),
            "created red-noise process"
        );

        Ok(Self {
            rng,
            decay: vec![config.decay(); count],
            amplitude: vec![config.sigma(); count],
            values,
            cached_dt: None,
            rho: Vec::new(),
        })
    }

    /// Creates a process owning `count` series, all starting at `value`.
    ///
    /// # Errors
    ///
    /// Returns `RedNoiseError::InvalidParameter` for an invalid count, τ or σ.
    pub fn with_value(
        rng: R,
        count: usize,
        tau: f64,
        sigma: f64,
        value: f64,
    ) -> Result<Self, RedNoiseError> {
        let config = RedNoiseConfig::new(count, tau, sigma)?;
        Self::new(rng, &config, InitialValues::Broadcast(value))
    }

    /// Creates a process working in place on `buffer`, one series per element.
    ///
    /// # Errors
    ///
    /// Returns `RedNoiseError::InvalidParameter` for an empty buffer or an
    /// invalid τ or σ.
    pub fn with_buffer(
        rng: R,
        tau: f64,
        sigma: f64,
        buffer: &'a mut [f64],
    ) -> Result<Self, RedNoiseError> {
        let config = RedNoiseConfig::new(buffer.len(), tau, sigma)?;
        Self::new(rng, &config, InitialValues::Borrowed(buffer))
    }

    /// Advances every series by time `dt`.
    ///
    /// Draws exactly one normal deviate per series, in series order.
    ///
    /// # Errors
    ///
    /// - `RedNoiseError::InvalidTimeStep` if `dt` is not finite and positive
    /// - `RedNoiseError::DegenerateStep` if a step multiplier is not finite
    ///
    /// On error nothing is drawn and no value changes.
    pub fn advance(&mut self, dt: f64) -> Result<(), RedNoiseError> {
        self.refresh_multipliers(dt)?;

        let sqrt_dt = dt.sqrt();
        for ((value, &amplitude), &rho) in self
            .values
            .iter_mut()
            .zip(self.amplitude.iter())
            .zip(self.rho.iter())
        {
            *value += sqrt_dt * amplitude * rho * self.rng.next_normal();
        }
        Ok(())
    }

    fn refresh_multipliers(&mut self, dt: f64) -> Result<(), RedNoiseError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(RedNoiseError::InvalidTimeStep { dt });
        }
        if self.cached_dt == Some(dt) {
            return Ok(());
        }

        let mut rho = Vec::with_capacity(self.decay.len());
        for (series, &decay) in self.decay.iter().enumerate() {
            let multiplier = step_multiplier(decay, dt);
            if !multiplier.is_finite() {
                return Err(RedNoiseError::DegenerateStep { series, dt });
            }
            rho.push(multiplier);
        }

        debug!(dt, "recomputed step multipliers");
        self.rho = rho;
        self.cached_dt = Some(dt);
        Ok(())
    }
}

impl<R> RedNoiseProcess<'_, R> {
    /// Returns the number of series.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the process has no series.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the current value of series `index`.
    ///
    /// # Errors
    ///
    /// Returns `RedNoiseError::IndexOutOfRange` if `index >= len()`.
    #[inline]
    pub fn value(&self, index: usize) -> Result<f64, RedNoiseError> {
        self.values
            .get(index)
            .copied()
            .ok_or(RedNoiseError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Returns all current values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns a mutable view of the live state.
    ///
    /// Writes through this view are the starting point of the next
    /// [`advance`](Self::advance).
    #[inline]
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Returns the decay factor α of series `index`.
    ///
    /// # Errors
    ///
    /// Returns `RedNoiseError::IndexOutOfRange` if `index >= len()`.
    pub fn decay(&self, index: usize) -> Result<f64, RedNoiseError> {
        self.decay
            .get(index)
            .copied()
            .ok_or(RedNoiseError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Returns the amplitude σ of series `index`.
    ///
    /// # Errors
    ///
    /// Returns `RedNoiseError::IndexOutOfRange` if `index >= len()`.
    pub fn amplitude(&self, index: usize) -> Result<f64, RedNoiseError> {
        self.amplitude
            .get(index)
            .copied()
            .ok_or(RedNoiseError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Returns `true` if the values live in a caller buffer.
    #[inline]
    pub fn is_borrowed(&self) -> bool {
        self.values.is_borrowed()
    }

    /// Consumes the process and returns its values (copied if borrowed).
    pub fn into_values(self) -> Vec<f64> {
        self.values.into_owned()
    }
}
