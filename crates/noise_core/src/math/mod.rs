//! Numeric helpers shared by the samplers.
//!
//! - [`special`]: special functions (`log_gamma`)

pub mod special;

pub use special::log_gamma;
