//! CLI configuration management
//!
//! Sources, lowest to highest priority:
//! 1. Default values
//! 2. TOML file (`--config`, missing file is not an error)
//! 3. Environment variables prefixed `REDNOISE_` (`__` separates nested keys,
//!    e.g. `REDNOISE_RED_NOISE__TAU`)
//! 4. Command-line flags, applied by the caller

use std::str::FromStr;

use config::{Config, Environment, File, FileFormat};
use noise_models::red_noise::{RedNoiseConfig, RedNoiseError};
use serde::{Deserialize, Serialize};

use crate::{CliError, Result};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "REDNOISE";

/// Log levels accepted in configuration and on the command line
///
/// Parsing is case-insensitive in both places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::InvalidArgument(format!(
                "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output encodings for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Red-noise simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedNoiseSettings {
    /// Number of series
    pub series: usize,
    /// Correlation time τ
    pub tau: f64,
    /// Amplitude σ
    pub sigma: f64,
    /// Starting value of every series
    pub initial: f64,
    /// Time step
    pub dt: f64,
    /// Number of steps to simulate
    pub steps: usize,
}

impl Default for RedNoiseSettings {
    fn default() -> Self {
        Self {
            series: 1,
            tau: 10.0,
            sigma: 1.0,
            initial: 0.0,
            dt: 0.1,
            steps: 100,
        }
    }
}

impl RedNoiseSettings {
    /// Builds the process configuration, checking the time step as well.
    pub fn process_config(&self) -> std::result::Result<RedNoiseConfig, RedNoiseError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(RedNoiseError::InvalidTimeStep { dt: self.dt });
        }
        RedNoiseConfig::builder()
            .series(self.series)
            .tau(self.tau)
            .sigma(self.sigma)
            .build()
    }
}

/// Effective CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Generator seed; non-negative seeds select the seed-1 stream
    pub seed: i32,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    pub format: OutputFormat,
    /// Red-noise simulation settings
    pub red_noise: RedNoiseSettings,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> std::result::Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: -1,
            log_level: LogLevel::Info,
            format: OutputFormat::Csv,
            red_noise: RedNoiseSettings::default(),
        }
    }
}

impl CliConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.red_noise.process_config()?;
        Ok(())
    }
}

/// Load configuration from `path` and the process environment
pub fn load(path: &str) -> Result<CliConfig> {
    load_with_env(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn load_with_env(path: &str, env: Environment) -> Result<CliConfig> {
    let settings = Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(false))
        .add_source(env)
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("rednoise-{}-{}.toml", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn no_env() -> Environment {
        environment().source(Some(HashMap::new()))
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.seed, -1);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.red_noise.series, 1);
        assert_eq!(config.red_noise.tau, 10.0);
        assert_eq!(config.red_noise.steps, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Warn").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("loud").is_err());
        assert_eq!(LogLevel::Error.to_string(), "error");
    }

    #[test]
    fn test_log_level_from_file_is_case_insensitive() {
        let path = temp_config("level", "log_level = \"WARN\"\n");
        let config = load_with_env(path.to_str().unwrap(), no_env()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_unknown_log_level_is_config_error() {
        let path = temp_config("badlevel", "log_level = \"loud\"\n");
        let result = load_with_env(path.to_str().unwrap(), no_env());
        std::fs::remove_file(&path).unwrap();

        match result {
            Err(CliError::Config(err)) => assert!(err.to_string().contains("Invalid log level")),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = load_with_env("/nonexistent/rednoise.toml", no_env()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_file_values_override_defaults() {
        let path = temp_config(
            "file",
            r#"
seed = -42
format = "json"

[red_noise]
series = 3
tau = 25.0
"#,
        );

        let config = load_with_env(path.to_str().unwrap(), no_env()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.seed, -42);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.red_noise.series, 3);
        assert_eq!(config.red_noise.tau, 25.0);
        // Unset keys keep their defaults.
        assert_eq!(config.red_noise.sigma, 1.0);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_environment_overrides_file() {
        let path = temp_config("env", "seed = -42\n[red_noise]\ndt = 0.5\n");

        let mut vars = HashMap::new();
        vars.insert("REDNOISE_SEED".to_string(), "-7".to_string());
        vars.insert("REDNOISE_LOG_LEVEL".to_string(), "debug".to_string());
        vars.insert("REDNOISE_RED_NOISE__DT".to_string(), "0.25".to_string());
        let env = environment().source(Some(vars));

        let config = load_with_env(path.to_str().unwrap(), env).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.seed, -7);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.red_noise.dt, 0.25);
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let mut config = CliConfig::default();
        config.red_noise.tau = 0.0;
        assert!(matches!(
            config.validate(),
            Err(CliError::RedNoise(RedNoiseError::InvalidParameter { name: "tau", .. }))
        ));

        let mut config = CliConfig::default();
        config.red_noise.dt = 0.0;
        assert!(matches!(
            config.validate(),
            Err(CliError::RedNoise(RedNoiseError::InvalidTimeStep { .. }))
        ));
    }
}
