//! # noise_core: Seeded Deviate Streams
//!
//! ## Layer 1 (Foundation) Role
//!
//! noise_core is the bottom layer of the workspace, providing:
//! - A Park–Miller generator with Bays–Durham shuffle (`rng::UniformGenerator`)
//! - Polar Box–Muller Gaussian deviates (`rng::GaussianSampler`)
//! - Poisson deviates by direct simulation or Lorentzian rejection (`rng::PoissonSampler`)
//! - A combined facade owning all three (`rng::NoiseRng`)
//! - The Lanczos log-gamma approximation (`math::special`)
//! - Error types: `SamplingError` (`error`)
//!
//! ## Sequential by Construction
//!
//! Every generator and sampler here is a small, stateful, single-stream
//! object. None of them is meant to be shared across threads; sharing on one
//! thread goes through `&mut` or `Rc<RefCell<_>>`, both of which the
//! [`rng::UniformSource`] and [`rng::NormalSource`] traits forward.
//!
//! ## Usage Example
//!
//! ```rust
//! use noise_core::rng::NoiseRng;
//!
//! let mut rng = NoiseRng::new(-42);
//!
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let z = rng.gen_normal();
//! assert!(z.is_finite());
//!
//! let k = rng.gen_poisson(3.5).unwrap();
//! assert_eq!(k, k.floor());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod math;
pub mod rng;

pub use error::SamplingError;
