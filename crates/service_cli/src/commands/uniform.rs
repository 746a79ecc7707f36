//! Uniform command implementation
//!
//! Draws uniform deviates on (0, 1) from the shuffled Park–Miller stream.

use std::io::Write;

use noise_core::rng::NoiseRng;
use tracing::info;

use crate::config::OutputFormat;
use crate::output::write_samples;
use crate::Result;

/// Run the uniform command
pub fn run<W: Write>(writer: W, seed: i32, count: usize, format: OutputFormat) -> Result<()> {
    info!("Drawing {} uniform deviates (seed {})", count, seed);

    let mut rng = NoiseRng::new(seed);
    let mut samples = vec![0.0; count];
    rng.fill_uniform(&mut samples);

    write_samples(writer, format, &samples)
}
