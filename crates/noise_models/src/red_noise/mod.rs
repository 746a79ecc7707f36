//! Red (correlated) noise time series.
//!
//! A [`RedNoiseProcess`] holds `count` independent series. Every call to
//! [`RedNoiseProcess::advance`] draws one standard normal deviate per
//! series, in series order, and adds a step-size-corrected increment.
//!
//! ## Module Structure
//!
//! - [`config`]: [`RedNoiseConfig`] and its builder
//! - [`error`]: [`RedNoiseError`]
//! - [`storage`]: [`SeriesValues`], owned or borrowed state buffer
//! - [`process`]: [`RedNoiseProcess`] and the step multiplier

pub mod config;
pub mod error;
pub mod process;
pub mod storage;

pub use config::{RedNoiseConfig, RedNoiseConfigBuilder};
pub use error::RedNoiseError;
pub use process::{step_multiplier, RedNoiseProcess};
pub use storage::{InitialValues, SeriesValues};
