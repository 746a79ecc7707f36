//! # Deviate Streams
//!
//! Seeded, reproducible streams of uniform, Gaussian and Poisson deviates.
//!
//! ## Module Structure
//!
//! - [`source`]: the [`UniformSource`] / [`NormalSource`] traits and their
//!   forwarding impls for `&mut T` and `Rc<RefCell<T>>`
//! - [`uniform`]: [`UniformGenerator`], Park–Miller with Bays–Durham shuffle
//! - [`gaussian`]: [`GaussianSampler`], polar Box–Muller with a one-deviate cache
//! - [`poisson`]: [`PoissonSampler`], direct simulation / Lorentzian rejection
//! - [`stream`]: [`NoiseRng`], one generator plus both samplers
//!
//! ## Sampler State
//!
//! The samplers hold only their own cached state. They borrow the uniform
//! source for the duration of a single call, so one generator can feed any
//! number of samplers, and two samplers never share a cache.
//!
//! ## Usage Example
//!
//! ```rust
//! use noise_core::rng::{GaussianSampler, UniformGenerator};
//!
//! let mut uniform = UniformGenerator::new(-7);
//! let mut gaussian = GaussianSampler::new();
//!
//! let first = gaussian.sample(&mut uniform);
//! assert!(gaussian.has_cached());
//! let second = gaussian.sample(&mut uniform);
//! assert!(!gaussian.has_cached());
//! assert_ne!(first, second);
//! ```
//!
//! ## Thread Safety
//!
//! None of these types synchronise. Sharing one stream between threads
//! without external locking makes the sequence non-reproducible.

pub mod gaussian;
pub mod poisson;
pub mod source;
pub mod stream;
pub mod uniform;

// Public re-exports
pub use gaussian::GaussianSampler;
pub use poisson::{PoissonSampler, SMALL_MEAN_THRESHOLD};
pub use source::{NormalSource, UniformSource};
pub use stream::NoiseRng;
pub use uniform::{UniformGenerator, MAX_UNIFORM};
