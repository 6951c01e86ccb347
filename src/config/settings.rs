//! Application settings loaded from config.toml
//!
//! The file is optional. When present it can override the late-fee rate and list
//! vehicles that should exist in the fleet on startup.

use crate::core::pricing::DEFAULT_PENALTY_RATE_PER_DAY;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable naming an alternative settings file.
pub const CONFIG_PATH_VAR: &str = "RENTAL_BUDDY_CONFIG";

/// Default settings file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Late fee charged per day past the planned return date
    #[serde(default = "default_penalty_rate")]
    pub penalty_rate_per_day: i64,
    /// Vehicles to seed into the fleet
    #[serde(default)]
    pub vehicles: Vec<VehicleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            penalty_rate_per_day: DEFAULT_PENALTY_RATE_PER_DAY,
            vehicles: Vec::new(),
        }
    }
}

/// Configuration for a single seeded vehicle
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct VehicleConfig {
    /// Registration plate
    pub plate: String,
    /// Manufacturer
    pub make: String,
    /// Model name
    pub model: String,
    /// Price per rental day
    pub daily_rate: i64,
}

const fn default_penalty_rate() -> i64 {
    DEFAULT_PENALTY_RATE_PER_DAY
}

/// Parses settings from TOML text and checks the values that have to be sane.
///
/// # Errors
/// Returns an error if the TOML is invalid or the penalty rate is negative.
pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    if config.penalty_rate_per_day < 0 {
        return Err(Error::Config {
            message: format!(
                "penalty_rate_per_day must not be negative (got {})",
                config.penalty_rate_per_day
            ),
        });
    }

    Ok(config)
}

/// Loads settings from a TOML file.
///
/// A missing file is not an error: defaults are returned instead.
///
/// # Errors
/// Returns an error if:
/// - The file exists but cannot be read
/// - The TOML syntax is invalid
/// - `penalty_rate_per_day` is negative
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        info!("No settings file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    debug!("Loading settings from {}", path.display());
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;
    parse_config(&contents)
}

/// Loads settings from `$RENTAL_BUDDY_CONFIG`, or `./config.toml` when unset.
pub fn load_default_config() -> Result<Config> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_config(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            penalty_rate_per_day = 75000

            [[vehicles]]
            plate = "B 1234 XY"
            make = "Toyota"
            model = "Avanza"
            daily_rate = 300000

            [[vehicles]]
            plate = "D 42 AB"
            make = "Honda"
            model = "Brio"
            daily_rate = 250000
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.penalty_rate_per_day, 75_000);
        assert_eq!(config.vehicles.len(), 2);
        assert_eq!(config.vehicles[0].plate, "B 1234 XY");
        assert_eq!(config.vehicles[1].daily_rate, 250_000);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.penalty_rate_per_day, 50_000);
    }

    #[test]
    fn test_negative_penalty_rejected() {
        let result = parse_config("penalty_rate_per_day = -1");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_malformed_config_rejected() {
        let result = parse_config("[[vehicles]]\nplate = ");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "penalty_rate_per_day = 10000").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.penalty_rate_per_day, 10_000);
        assert!(config.vehicles.is_empty());
    }
}
