//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

use std::cell::RefCell;
use std::rc::Rc;

/// Test that the special functions are accessible via absolute path.
#[test]
fn test_math_module_exports() {
    use noise_core::math::log_gamma;
    use noise_core::math::special;

    assert_eq!(log_gamma(3.0_f64), special::log_gamma(3.0_f64));
}

/// Test that the generator types are accessible via absolute path.
#[test]
fn test_rng_module_exports() {
    use noise_core::rng::gaussian::GaussianSampler;
    use noise_core::rng::poisson::{PoissonSampler, SMALL_MEAN_THRESHOLD};
    use noise_core::rng::stream::NoiseRng;
    use noise_core::rng::uniform::{UniformGenerator, MAX_UNIFORM};

    let mut uniform = UniformGenerator::default();
    let mut gaussian = GaussianSampler::new();
    let mut poisson = PoissonSampler::new();

    assert!(uniform.next_uniform() <= MAX_UNIFORM);
    assert!(gaussian.sample(&mut uniform).is_finite());
    assert!(poisson.sample(&mut uniform, SMALL_MEAN_THRESHOLD).is_ok());

    let mut rng = NoiseRng::default();
    assert_eq!(rng.initial_seed(), 1);
    assert!(rng.gen_uniform() < 1.0);
}

/// Test that errors are accessible at the crate root.
#[test]
fn test_error_exports() {
    use noise_core::error::SamplingError as ModuleError;
    use noise_core::SamplingError;

    let err: ModuleError = SamplingError::InvalidMean { mean: -1.0 };
    assert!(err.to_string().contains("-1"));
}

/// Test that one generator can be shared by several consumers on one thread.
#[test]
fn test_shared_generator_through_traits() {
    use noise_core::rng::{NoiseRng, NormalSource, UniformSource};

    fn draw_pair<U: UniformSource, N: NormalSource>(mut u: U, mut n: N) -> (f64, f64) {
        (u.next_uniform(), n.next_normal())
    }

    let shared = Rc::new(RefCell::new(NoiseRng::new(-64)));
    let (u, z) = draw_pair(Rc::clone(&shared), Rc::clone(&shared));

    let mut reference = NoiseRng::new(-64);
    assert_eq!(u, reference.gen_uniform());
    assert_eq!(z, reference.gen_normal());
}
