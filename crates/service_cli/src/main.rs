//! rednoise CLI - Command Line Access to Noise Streams
//!
//! This is the operational entry point for the noise_core and noise_models
//! libraries.
//!
//! # Commands
//!
//! - `rednoise uniform --count <n>` - Draw uniform deviates
//! - `rednoise gaussian --count <n>` - Draw standard normal deviates
//! - `rednoise poisson --mean <m> --count <n>` - Draw Poisson deviates
//! - `rednoise red-noise` - Simulate a red-noise process
//! - `rednoise check` - Validate and print the effective configuration
//!
//! # Architecture
//!
//! As the service layer on top of noise_core (L1) and noise_models (L2), this
//! crate only parses arguments, loads configuration and encodes results.

use std::io;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use crate::config::{CliConfig, LogLevel, OutputFormat};

/// Deviate streams and red-noise simulation
#[derive(Parser)]
#[command(name = "rednoise")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "rednoise.toml")]
    config: String,

    /// Generator seed (negative values select distinct streams)
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    seed: Option<i32>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw uniform deviates on (0, 1)
    Uniform {
        /// Number of deviates
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Draw standard normal deviates
    Gaussian {
        /// Number of deviates
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Draw Poisson deviates
    Poisson {
        /// Distribution mean
        #[arg(short, long, allow_hyphen_values = true)]
        mean: f64,

        /// Number of deviates
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Simulate a red-noise process
    RedNoise {
        /// Number of series
        #[arg(long)]
        series: Option<usize>,

        /// Correlation time (finite, non-zero)
        #[arg(long)]
        tau: Option<f64>,

        /// Amplitude
        #[arg(long)]
        sigma: Option<f64>,

        /// Time step
        #[arg(long)]
        dt: Option<f64>,

        /// Number of steps
        #[arg(long)]
        steps: Option<usize>,

        /// Starting value of every series
        #[arg(long, allow_hyphen_values = true)]
        initial: Option<f64>,
    },

    /// Check configuration and print the effective values
    Check,
}

fn init_tracing(config: &CliConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Results go to stdout; logs stay on stderr.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = crate::config::load(&cli.config)?;
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level;
    }

    init_tracing(&config, cli.verbose);
    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(path = %cli.config, seed = config.seed, "configuration loaded");

    let stdout = io::stdout().lock();

    match cli.command {
        Commands::Uniform { count } => {
            commands::uniform::run(stdout, config.seed, count, config.format)
        }
        Commands::Gaussian { count } => {
            commands::gaussian::run(stdout, config.seed, count, config.format)
        }
        Commands::Poisson { mean, count } => {
            commands::poisson::run(stdout, config.seed, mean, count, config.format)
        }
        Commands::RedNoise {
            series,
            tau,
            sigma,
            dt,
            steps,
            initial,
        } => {
            let settings = &mut config.red_noise;
            if let Some(series) = series {
                settings.series = series;
            }
            if let Some(tau) = tau {
                settings.tau = tau;
            }
            if let Some(sigma) = sigma {
                settings.sigma = sigma;
            }
            if let Some(dt) = dt {
                settings.dt = dt;
            }
            if let Some(steps) = steps {
                settings.steps = steps;
            }
            if let Some(initial) = initial {
                settings.initial = initial;
            }
            commands::red_noise::run(stdout, config.seed, &config.red_noise, config.format)
        }
        Commands::Check => commands::check::run(stdout, &config),
    }
}
