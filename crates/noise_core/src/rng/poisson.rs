//! Poisson deviates.
//!
//! Small means are simulated directly by multiplying uniforms until the
//! product drops below `exp(-λ)`. That needs about λ draws, so from
//! [`SMALL_MEAN_THRESHOLD`] upwards the sampler switches to rejection
//! against a Lorentzian envelope, whose acceptance test needs `ln Γ`.

use std::f64::consts::PI;

use super::source::UniformSource;
use crate::error::SamplingError;
use crate::math::special::log_gamma;

/// Means below this value use direct simulation.
pub const SMALL_MEAN_THRESHOLD: f64 = 12.0;

/// Envelope scale of the rejection branch.
const ENVELOPE_SCALE: f64 = 0.9;

/// Constants derived from the last mean seen.
#[derive(Clone, Copy, Debug, PartialEq)]
enum MeanConstants {
    Small {
        mean: f64,
        /// exp(-λ)
        g: f64,
    },
    Large {
        mean: f64,
        /// sqrt(2λ)
        sq: f64,
        /// ln λ
        alxm: f64,
        /// λ ln λ - ln Γ(λ + 1)
        g: f64,
    },
}

impl MeanConstants {
    fn mean(&self) -> f64 {
        match *self {
            MeanConstants::Small { mean, .. } | MeanConstants::Large { mean, .. } => mean,
        }
    }
}

/// Poisson sampler with per-instance memoisation of mean-derived constants.
///
/// Constants are recomputed whenever the mean differs (exact comparison)
/// from the one used on the previous call; repeated calls with the same mean
/// reuse them.
///
/// # Examples
///
/// ```rust
/// use noise_core::rng::{PoissonSampler, UniformGenerator};
///
/// let mut uniform = UniformGenerator::new(-3);
/// let mut poisson = PoissonSampler::new();
///
/// let k = poisson.sample(&mut uniform, 4.0).unwrap();
/// assert!(k >= 0.0 && k.fract() == 0.0);
/// assert_eq!(poisson.cached_mean(), Some(4.0));
///
/// assert!(poisson.sample(&mut uniform, -1.0).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct PoissonSampler {
    cache: Option<MeanConstants>,
}

impl PoissonSampler {
    /// Creates a sampler with no cached constants.
    #[inline]
    pub fn new() -> Self {
        Self { cache: None }
    }

    /// Returns the mean the cached constants belong to, if any.
    #[inline]
    pub fn cached_mean(&self) -> Option<f64> {
        self.cache.as_ref().map(MeanConstants::mean)
    }

    /// Returns a Poisson deviate with expectation `mean`.
    ///
    /// The result is a non-negative integer stored as `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::InvalidMean`] if `mean` is negative, not
    /// finite, or so large (above about 1e305) that `λ ln λ - ln Γ(λ + 1)`
    /// overflows. No uniform is drawn in that case.
    pub fn sample<S: UniformSource + ?Sized>(
        &mut self,
        source: &mut S,
        mean: f64,
    ) -> Result<f64, SamplingError> {
        if !mean.is_finite() || mean < 0.0 {
            return Err(SamplingError::InvalidMean { mean });
        }

        if mean < SMALL_MEAN_THRESHOLD {
            let g = self.small_constants(mean);
            Ok(sample_direct(source, g))
        } else {
            let (sq, alxm, g) = self.large_constants(mean)?;
            Ok(sample_rejection(source, mean, sq, alxm, g))
        }
    }

    fn small_constants(&mut self, mean: f64) -> f64 {
        match self.cache {
            Some(MeanConstants::Small { mean: cached, g }) if cached == mean => g,
            _ => {
                let g = (-mean).exp();
                self.cache = Some(MeanConstants::Small { mean, g });
                g
            }
        }
    }

    fn large_constants(&mut self, mean: f64) -> Result<(f64, f64, f64), SamplingError> {
        match self.cache {
            Some(MeanConstants::Large {
                mean: cached,
                sq,
                alxm,
                g,
            }) if cached == mean => Ok((sq, alxm, g)),
            _ => {
                let sq = (2.0 * mean).sqrt();
                let alxm = mean.ln();
                let g = mean * alxm - log_gamma(mean + 1.0);
                // A NaN acceptance bound would reject forever.
                if !(sq.is_finite() && alxm.is_finite() && g.is_finite()) {
                    return Err(SamplingError::InvalidMean { mean });
                }
                self.cache = Some(MeanConstants::Large { mean, sq, alxm, g });
                Ok((sq, alxm, g))
            }
        }
    }
}

/// Counts uniform multiplications until the running product is <= g.
fn sample_direct<S: UniformSource + ?Sized>(source: &mut S, g: f64) -> f64 {
    let mut em = -1.0;
    let mut t = 1.0;
    loop {
        em += 1.0;
        t *= source.next_uniform();
        if t <= g {
            return em;
        }
    }
}

/// Rejection against a Lorentzian centred on the mean.
fn sample_rejection<S: UniformSource + ?Sized>(
    source: &mut S,
    mean: f64,
    sq: f64,
    alxm: f64,
    g: f64,
) -> f64 {
    loop {
        let (y, em) = loop {
            let y = (PI * source.next_uniform()).tan();
            let em = sq * y + mean;
            if em >= 0.0 {
                break (y, em);
            }
        };
        let em = em.floor();
        let t = ENVELOPE_SCALE * (1.0 + y * y) * (em * alxm - log_gamma(em + 1.0) - g).exp();
        if source.next_uniform() <= t {
            return em;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::UniformGenerator;

    struct Scripted {
        values: Vec<f64>,
        position: usize,
    }

    impl UniformSource for Scripted {
        fn next_uniform(&mut self) -> f64 {
            let value = self.values[self.position];
            self.position += 1;
            value
        }
    }

    #[test]
    fn test_direct_branch_counts_multiplications() {
        // exp(-1) ≈ 0.368: 0.5 > g, 0.25 <= g -> one multiplication past the first
        let mut source = Scripted {
            values: vec![0.5, 0.5, 0.5],
            position: 0,
        };
        let mut sampler = PoissonSampler::new();

        let k = sampler.sample(&mut source, 1.0).unwrap();
        assert_eq!(k, 1.0);
        assert_eq!(source.position, 2);
    }

    #[test]
    fn test_zero_mean_returns_zero() {
        let mut rng = UniformGenerator::new(-1);
        let mut sampler = PoissonSampler::new();
        for _ in 0..100 {
            assert_eq!(sampler.sample(&mut rng, 0.0).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_invalid_means_draw_nothing() {
        let mut source = Scripted {
            values: vec![],
            position: 0,
        };
        let mut sampler = PoissonSampler::new();

        for &mean in &[-0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = sampler.sample(&mut source, mean);
            assert!(matches!(result, Err(SamplingError::InvalidMean { .. })));
        }
        assert_eq!(source.position, 0);
        assert_eq!(sampler.cached_mean(), None);
    }

    #[test]
    fn test_overflowing_mean_is_rejected() {
        let mut source = Scripted {
            values: vec![],
            position: 0,
        };
        let mut sampler = PoissonSampler::new();

        for &mean in &[1e306, f64::MAX] {
            let result = sampler.sample(&mut source, mean);
            assert_eq!(result, Err(SamplingError::InvalidMean { mean }));
        }
        assert_eq!(source.position, 0);
        assert_eq!(sampler.cached_mean(), None);
    }

    #[test]
    fn test_huge_finite_mean_still_samples() {
        let mut rng = UniformGenerator::new(-8);
        let mut sampler = PoissonSampler::new();
        let k = sampler.sample(&mut rng, 1e9).unwrap();
        assert!((k - 1e9).abs() < 1e6);
        assert_eq!(k.fract(), 0.0);
    }

    #[test]
    fn test_cache_follows_mean_and_branch() {
        let mut rng = UniformGenerator::new(-2);
        let mut sampler = PoissonSampler::new();

        sampler.sample(&mut rng, 3.0).unwrap();
        assert!(matches!(sampler.cache, Some(MeanConstants::Small { .. })));
        assert_eq!(sampler.cached_mean(), Some(3.0));

        sampler.sample(&mut rng, 40.0).unwrap();
        match sampler.cache {
            Some(MeanConstants::Large { mean, sq, alxm, g }) => {
                assert_eq!(mean, 40.0);
                assert_eq!(sq, 80.0_f64.sqrt());
                assert_eq!(alxm, 40.0_f64.ln());
                assert_eq!(g, 40.0 * 40.0_f64.ln() - log_gamma(41.0));
            }
            other => panic!("expected large-mean constants, got {:?}", other),
        }

        sampler.sample(&mut rng, 3.0).unwrap();
        assert_eq!(sampler.cached_mean(), Some(3.0));
    }

    #[test]
    fn test_threshold_uses_rejection_branch() {
        let mut rng = UniformGenerator::new(-4);
        let mut sampler = PoissonSampler::new();
        sampler.sample(&mut rng, SMALL_MEAN_THRESHOLD).unwrap();
        assert!(matches!(sampler.cache, Some(MeanConstants::Large { .. })));
    }

    #[test]
    fn test_large_mean_outputs_are_integers() {
        let mut rng = UniformGenerator::new(-6);
        let mut sampler = PoissonSampler::new();
        for _ in 0..1000 {
            let k = sampler.sample(&mut rng, 250.0).unwrap();
            assert!(k >= 0.0);
            assert_eq!(k.fract(), 0.0);
        }
    }
}
