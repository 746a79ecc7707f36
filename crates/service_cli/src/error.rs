//! CLI error types

use noise_core::SamplingError;
use noise_models::RedNoiseError;
use thiserror::Error;

/// Errors surfaced by `rednoise` commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),

    #[error("Red-noise error: {0}")]
    RedNoise(#[from] RedNoiseError),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML output error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
