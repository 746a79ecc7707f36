//! Standard normal deviates by the polar Box–Muller method.

use super::source::UniformSource;

/// Polar Box–Muller sampler.
///
/// Each accepted point of the unit disk yields two independent standard
/// normal deviates. The first call returns one of them and caches the other;
/// the next call returns the cached one without drawing. Fresh and cached
/// outcomes strictly alternate.
///
/// The sampler does not own its uniform source; it borrows one per call.
///
/// # Examples
///
/// ```rust
/// use noise_core::rng::{GaussianSampler, UniformGenerator};
///
/// let mut uniform = UniformGenerator::new(-1);
/// let mut gaussian = GaussianSampler::new();
///
/// let n = 100_000;
/// let mean = (0..n).map(|_| gaussian.sample(&mut uniform)).sum::<f64>() / n as f64;
/// assert!(mean.abs() < 0.02);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GaussianSampler {
    /// Second deviate of the last accepted pair, if not yet returned.
    cached: Option<f64>,
}

impl GaussianSampler {
    /// Creates a sampler with an empty cache.
    #[inline]
    pub fn new() -> Self {
        Self { cached: None }
    }

    /// Returns `true` if the next call will return a cached deviate.
    #[inline]
    pub fn has_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Discards any cached deviate.
    #[inline]
    pub fn reset(&mut self) {
        self.cached = None;
    }

    /// Returns the next standard normal deviate.
    ///
    /// Without a cached deviate, draws pairs `v1 = 2u - 1`, `v2 = 2u - 1`
    /// until `0 < v1² + v2² < 1`, then returns `v2 · fac` and caches
    /// `v1 · fac`, where `fac = sqrt(-2 ln(rsq) / rsq)`.
    pub fn sample<S: UniformSource + ?Sized>(&mut self, source: &mut S) -> f64 {
        if let Some(value) = self.cached.take() {
            return value;
        }

        loop {
            let v1 = 2.0 * source.next_uniform() - 1.0;
            let v2 = 2.0 * source.next_uniform() - 1.0;
            let rsq = v1 * v1 + v2 * v2;

            // The origin is excluded: ln(0) / 0.
            if rsq < 1.0 && rsq != 0.0 {
                let fac = (-2.0 * rsq.ln() / rsq).sqrt();
                self.cached = Some(v1 * fac);
                return v2 * fac;
            }
        }
    }

    /// Fills the buffer with standard normal deviates.
    pub fn fill<S: UniformSource + ?Sized>(&mut self, source: &mut S, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.sample(source);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Replays a fixed sequence of uniforms and counts how many were drawn.
    struct Scripted {
        values: Vec<f64>,
        position: usize,
    }

    impl Scripted {
        fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                position: 0,
            }
        }
    }

    impl UniformSource for Scripted {
        fn next_uniform(&mut self) -> f64 {
            let value = self.values[self.position];
            self.position += 1;
            value
        }
    }

    fn polar_pair(u1: f64, u2: f64) -> (f64, f64) {
        let v1 = 2.0 * u1 - 1.0;
        let v2 = 2.0 * u2 - 1.0;
        let rsq = v1 * v1 + v2 * v2;
        let fac = (-2.0 * rsq.ln() / rsq).sqrt();
        (v2 * fac, v1 * fac)
    }

    #[test]
    fn test_pair_then_cache() {
        let mut source = Scripted::new(&[0.75, 0.25]);
        let mut sampler = GaussianSampler::new();

        let first = sampler.sample(&mut source);
        assert_eq!(source.position, 2);
        assert!(sampler.has_cached());

        let second = sampler.sample(&mut source);
        assert_eq!(source.position, 2, "cached call must not draw");
        assert!(!sampler.has_cached());

        let (expected_first, expected_second) = polar_pair(0.75, 0.25);
        assert_relative_eq!(first, expected_first, epsilon = 1e-15);
        assert_relative_eq!(second, expected_second, epsilon = 1e-15);
        // v1 = 0.5, v2 = -0.5 -> the pair differs only in sign
        assert_relative_eq!(first, -second, epsilon = 1e-15);
    }

    #[test]
    fn test_rejects_outside_disk_and_origin() {
        // (0.99, 0.99) lies outside the disk, (0.5, 0.5) is the origin.
        let mut source = Scripted::new(&[0.99, 0.99, 0.5, 0.5, 0.6, 0.3]);
        let mut sampler = GaussianSampler::new();

        let value = sampler.sample(&mut source);
        assert_eq!(source.position, 6);

        let (expected, _) = polar_pair(0.6, 0.3);
        assert_relative_eq!(value, expected, epsilon = 1e-15);
    }

    #[test]
    fn test_alternation_over_many_calls() {
        let mut source = Scripted::new(&[0.75, 0.25, 0.6, 0.3, 0.2, 0.45]);
        let mut sampler = GaussianSampler::new();

        for call in 0..6 {
            assert_eq!(sampler.has_cached(), call % 2 == 1);
            sampler.sample(&mut source);
        }
        assert_eq!(source.position, 6);
    }

    #[test]
    fn test_reset_discards_cache() {
        let mut source = Scripted::new(&[0.75, 0.25, 0.6, 0.3]);
        let mut sampler = GaussianSampler::new();

        sampler.sample(&mut source);
        sampler.reset();
        let value = sampler.sample(&mut source);

        assert_eq!(source.position, 4);
        let (expected, _) = polar_pair(0.6, 0.3);
        assert_relative_eq!(value, expected, epsilon = 1e-15);
    }

    #[test]
    fn test_independent_instances_do_not_share_cache() {
        let mut source = Scripted::new(&[0.75, 0.25, 0.6, 0.3]);
        let mut a = GaussianSampler::new();
        let b = GaussianSampler::new();

        a.sample(&mut source);
        assert!(a.has_cached());
        assert!(!b.has_cached());
    }
}
