//! Poisson command implementation

use std::io::Write;

use noise_core::rng::NoiseRng;
use tracing::info;

use crate::config::OutputFormat;
use crate::output::write_samples;
use crate::Result;

/// Run the poisson command
///
/// The mean is validated before any deviate is drawn.
pub fn run<W: Write>(
    writer: W,
    seed: i32,
    mean: f64,
    count: usize,
    format: OutputFormat,
) -> Result<()> {
    info!("Drawing {} Poisson deviates (mean {}, seed {})", count, mean, seed);

    let mut rng = NoiseRng::new(seed);
    let samples = (0..count)
        .map(|_| rng.gen_poisson(mean))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    write_samples(writer, format, &samples)
}
