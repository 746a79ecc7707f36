//! Red-noise command implementation
//!
//! Simulates a red-noise process and records every series after each step.
//! Step 0 is the initial state.

use std::io::Write;

use noise_core::rng::NoiseRng;
use noise_models::red_noise::{InitialValues, RedNoiseProcess};
use tracing::info;

use crate::config::{OutputFormat, RedNoiseSettings};
use crate::output::{write_steps, StepRecord};
use crate::Result;

/// Run the red-noise command
pub fn run<W: Write>(
    writer: W,
    seed: i32,
    settings: &RedNoiseSettings,
    format: OutputFormat,
) -> Result<()> {
    info!("Simulating red noise...");
    info!("  Series: {}", settings.series);
    info!("  Tau: {}", settings.tau);
    info!("  Sigma: {}", settings.sigma);
    info!("  Time step: {}", settings.dt);
    info!("  Steps: {}", settings.steps);

    let records = simulate(seed, settings)?;
    write_steps(writer, format, &records)
}

/// Produce `settings.steps + 1` records, starting with the initial state.
pub fn simulate(seed: i32, settings: &RedNoiseSettings) -> Result<Vec<StepRecord>> {
    let config = settings.process_config()?;
    let mut rng = NoiseRng::new(seed);
    let mut process =
        RedNoiseProcess::new(&mut rng, &config, InitialValues::Broadcast(settings.initial))?;

    let mut records = Vec::with_capacity(settings.steps + 1);
    records.push(StepRecord {
        step: 0,
        time: 0.0,
        values: process.values().to_vec(),
    });

    for step in 1..=settings.steps {
        process.advance(settings.dt)?;
        records.push(StepRecord {
            step,
            time: step as f64 * settings.dt,
            values: process.values().to_vec(),
        });
    }

    Ok(records)
}
