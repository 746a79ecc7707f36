//! Gaussian command implementation

use std::io::Write;

use noise_core::rng::NoiseRng;
use tracing::info;

use crate::config::OutputFormat;
use crate::output::write_samples;
use crate::Result;

/// Run the gaussian command
pub fn run<W: Write>(writer: W, seed: i32, count: usize, format: OutputFormat) -> Result<()> {
    info!("Drawing {} standard normal deviates (seed {})", count, seed);

    let mut rng = NoiseRng::new(seed);
    let mut samples = vec![0.0; count];
    rng.fill_normal(&mut samples);

    write_samples(writer, format, &samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gaussian_matches_stream() {
        let mut out = Vec::new();
        run(&mut out, -11, 5, OutputFormat::Json).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_slice(&out).unwrap();

        let mut rng = NoiseRng::new(-11);
        for record in parsed {
            assert_relative_eq!(
                record["value"].as_f64().unwrap(),
                rng.gen_gaussian(),
                epsilon = 1e-15
            );
        }
    }
}
