//! CLI command implementations
//!
//! Each submodule implements a specific CLI command and writes its result to
//! the supplied writer.

pub mod check;
pub mod gaussian;
pub mod poisson;
pub mod red_noise;
pub mod uniform;
