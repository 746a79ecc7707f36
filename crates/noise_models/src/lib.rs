//! # noise_models: Correlated Noise Processes
//!
//! ## Layer 2 (Models) Role
//!
//! noise_models builds time-stepped processes on top of the deviate streams
//! in `noise_core`:
//! - Red-noise process over `count` series (`red_noise::RedNoiseProcess`)
//! - Validating configuration builder (`red_noise::RedNoiseConfig`)
//! - Owned or caller-borrowed value storage (`red_noise::SeriesValues`)
//! - Error types: `RedNoiseError` (`red_noise::error`)
//!
//! ## Usage Example
//!
//! ```rust
//! use noise_core::rng::NoiseRng;
//! use noise_models::red_noise::{InitialValues, RedNoiseConfig, RedNoiseProcess};
//!
//! let mut rng = NoiseRng::new(-7);
//! let config = RedNoiseConfig::builder()
//!     .series(3)
//!     .tau(10.0)
//!     .sigma(0.5)
//!     .build()
//!     .unwrap();
//!
//! let mut process = RedNoiseProcess::new(&mut rng, &config, InitialValues::Broadcast(0.0)).unwrap();
//! for _ in 0..100 {
//!     process.advance(0.1).unwrap();
//! }
//! assert_eq!(process.values().len(), 3);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `RedNoiseConfig`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod red_noise;

pub use red_noise::{RedNoiseConfig, RedNoiseError, RedNoiseProcess};
