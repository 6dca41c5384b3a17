use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::{Config, MAX_DELAY_SCALE};

/// Default project-local configuration directory
pub const CONFIG_DIR: &str = ".edusim";

/// Prefix of environment overrides, e.g. `EDUSIM_SIMULATION__DELAY_SCALE`
pub const ENV_PREFIX: &str = "EDUSIM_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),

    #[error("Invalid delay_scale: {0}. Must be between 0 and 100")]
    InvalidDelayScale(f64),

    #[error("Invalid failure_rate: {0}. Must be between 0.0 and 1.0")]
    InvalidFailureRate(f64),

    #[error("Invalid log_capacity: {0}. Must be at least 1")]
    InvalidLogCapacity(usize),

    #[error("Invalid poll_interval_ms: {0}. Must be at least 1")]
    InvalidPollInterval(u64),

    #[error("Uptime label cannot be empty")]
    EmptyUptime,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .edusim/config.yaml (project config)
    /// 3. .edusim/local.yaml (project local overrides, optional)
    /// 4. Environment variables (EDUSIM_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        Self::load_from_dir(CONFIG_DIR)
    }

    /// Same layering as [`ConfigLoader::load`], rooted at `dir`.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Config> {
        let dir = dir.as_ref();
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(dir.join("config.yaml")))
            .merge(Yaml::file(dir.join("local.yaml")))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, without environment overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        let sim = &config.simulation;
        if !(0.0..=MAX_DELAY_SCALE).contains(&sim.delay_scale) {
            return Err(ConfigError::InvalidDelayScale(sim.delay_scale));
        }

        if !(0.0..=1.0).contains(&sim.failure_rate) {
            return Err(ConfigError::InvalidFailureRate(sim.failure_rate));
        }

        if sim.log_capacity == 0 {
            return Err(ConfigError::InvalidLogCapacity(sim.log_capacity));
        }

        if sim.uptime.trim().is_empty() {
            return Err(ConfigError::EmptyUptime);
        }

        if config.monitor.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidPollInterval(config.monitor.poll_interval_ms));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.simulation.log_capacity, 100);
        assert!((config.simulation.delay_scale - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.monitor.poll_interval_ms, 1000);
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
logging:
  level: debug
  format: json
  rotation: hourly
simulation:
  delay_scale: 0.25
  failure_rate: 0.1
  log_capacity: 50
monitor:
  poll_interval_ms: 500
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert!((config.simulation.delay_scale - 0.25).abs() < f64::EPSILON);
        assert!((config.simulation.failure_rate - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.simulation.log_capacity, 50);
        assert_eq!(config.simulation.uptime, "99.98%");
        assert_eq!(config.monitor.poll_interval_ms, 500);

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "invalid".to_string();

        match ConfigLoader::validate(&config).unwrap_err() {
            ConfigError::InvalidLogLevel(level) => assert_eq!(level, "invalid"),
            other => panic!("Expected InvalidLogLevel error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_invalid_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogFormat(_))
        ));
    }

    #[test]
    fn test_validate_invalid_rotation() {
        let mut config = Config::default();
        config.logging.rotation = "weekly".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidRotation(_))
        ));
    }

    #[test]
    fn test_validate_negative_delay_scale() {
        let mut config = Config::default();
        config.simulation.delay_scale = -1.0;

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidDelayScale(_))
        ));

        config.simulation.delay_scale = f64::NAN;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidDelayScale(_))
        ));
    }

    #[test]
    fn test_validate_delay_scale_upper_bound() {
        let mut config = Config::default();
        config.simulation.delay_scale = MAX_DELAY_SCALE;
        assert!(ConfigLoader::validate(&config).is_ok());

        config.simulation.delay_scale = 1e20;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidDelayScale(_))
        ));

        config.simulation.delay_scale = f64::INFINITY;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidDelayScale(_))
        ));
    }

    #[test]
    fn test_validate_failure_rate_bounds() {
        let mut config = Config::default();
        config.simulation.failure_rate = 1.5;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidFailureRate(_))
        ));

        config.simulation.failure_rate = 1.0;
        assert!(ConfigLoader::validate(&config).is_ok());
    }

    #[test]
    fn test_validate_zero_log_capacity() {
        let mut config = Config::default();
        config.simulation.log_capacity = 0;

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogCapacity(0))
        ));
    }

    #[test]
    fn test_validate_zero_poll_interval() {
        let mut config = Config::default();
        config.monitor.poll_interval_ms = 0;

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidPollInterval(0))
        ));
    }

    #[test]
    fn test_validate_empty_uptime() {
        let mut config = Config::default();
        config.simulation.uptime = "  ".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyUptime)
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "simulation:\n  log_capacity: 7\n").unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.simulation.log_capacity, 7);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "simulation:\n  failure_rate: 2.0\n").unwrap();

        assert!(ConfigLoader::load_from_file(&path).is_err());
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();

        temp_env::with_vars_unset(
            [
                "EDUSIM_SIMULATION__LOG_CAPACITY",
                "EDUSIM_SIMULATION__DELAY_SCALE",
                "EDUSIM_LOGGING__LEVEL",
            ],
            || {
                let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
                assert_eq!(config.simulation.log_capacity, 100);
            },
        );
    }

    #[test]
    fn test_env_disables_stderr_logging() {
        let dir = tempfile::tempdir().unwrap();

        temp_env::with_vars([("EDUSIM_LOGGING__STDERR", Some("false"))], || {
            let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
            assert!(!config.logging.stderr);
        });
    }

    #[test]
    fn test_local_overrides_project_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.yaml"),
            "simulation:\n  log_capacity: 40\n  delay_scale: 0.5\n",
        )
        .unwrap();
        fs::write(dir.path().join("local.yaml"), "simulation:\n  log_capacity: 20\n").unwrap();

        temp_env::with_vars_unset(
            ["EDUSIM_SIMULATION__LOG_CAPACITY", "EDUSIM_SIMULATION__DELAY_SCALE"],
            || {
                let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
                assert_eq!(config.simulation.log_capacity, 20);
                assert!((config.simulation.delay_scale - 0.5).abs() < f64::EPSILON);
            },
        );
    }

    #[test]
    fn test_env_override() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.yaml"), "logging:\n  level: warn\n").unwrap();

        temp_env::with_vars(
            [
                ("EDUSIM_LOGGING__LEVEL", Some("debug")),
                ("EDUSIM_SIMULATION__LOG_CAPACITY", Some("12")),
            ],
            || {
                let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
                assert_eq!(config.logging.level, "debug");
                assert_eq!(config.simulation.log_capacity, 12);
            },
        );
    }
}
