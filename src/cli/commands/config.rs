//! Effective configuration command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ConfigOutput {
    pub config: Config,
}

impl CommandOutput for ConfigOutput {
    fn to_human(&self) -> String {
        serde_yaml::to_string(&self.config)
            .unwrap_or_else(|err| format!("Failed to render configuration: {err}"))
    }
}

pub fn execute(config: &Config, json_mode: bool) -> Result<()> {
    output(
        &ConfigOutput {
            config: config.clone(),
        },
        json_mode,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_output_is_transparent() {
        let out = ConfigOutput {
            config: Config::default(),
        };
        let json = out.to_json();
        assert_eq!(json["simulation"]["log_capacity"], 100);
        assert_eq!(json["logging"]["level"], "info");

        let yaml = out.to_human();
        assert!(yaml.contains("poll_interval_ms: 1000"));
    }
}
