//! Check command implementation
//!
//! Validates the effective configuration and prints it as TOML.

use std::io::Write;

use noise_core::rng::NoiseRng;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run<W: Write>(mut writer: W, config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");

    config.validate()?;
    let first = NoiseRng::new(config.seed).gen_uniform();

    writeln!(writer, "# effective configuration")?;
    write!(writer, "{}", toml::to_string_pretty(config)?)?;
    writeln!(writer)?;
    writeln!(writer, "# first uniform deviate: {}", first)?;
    writeln!(writer, "# configuration OK")?;

    info!("Configuration valid");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_check_prints_config() {
        let mut out = Vec::new();
        run(&mut out, &CliConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("seed = -1"));
        assert!(text.contains("[red_noise]"));
        assert!(text.contains("tau = 10.0"));
        assert!(text.ends_with("# configuration OK\n"));
    }

    #[test]
    fn test_check_rejects_invalid_config() {
        let mut config = CliConfig::default();
        config.red_noise.sigma = f64::NAN;

        let mut out = Vec::new();
        assert!(matches!(run(&mut out, &config), Err(CliError::RedNoise(_))));
        assert!(out.is_empty());
    }
}
