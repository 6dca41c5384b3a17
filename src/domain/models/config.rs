use serde::{Deserialize, Serialize};

/// Main configuration structure for edusim
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Simulation tuning
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Monitoring view configuration
    #[serde(default)]
    pub monitor: MonitorConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<String>,

    /// Rotation of log files: daily, hourly, never
    #[serde(default = "default_rotation")]
    pub rotation: String,

    /// Write log events to stderr (set false to log only to `log_dir`)
    #[serde(default = "default_stderr")]
    pub stderr: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

const fn default_stderr() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
            stderr: default_stderr(),
        }
    }
}

/// Simulation tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationConfig {
    /// Multiplier applied to every nominal operation delay, 0 to 100 (0 disables waiting)
    #[serde(default = "default_delay_scale")]
    pub delay_scale: f64,

    /// Probability (0.0-1.0) that an operation fails after its delay
    #[serde(default)]
    pub failure_rate: f64,

    /// Maximum number of entries kept in the log buffer
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,

    /// Uptime figure reported by stats
    #[serde(default = "default_uptime")]
    pub uptime: String,
}

/// Largest accepted `simulation.delay_scale`
pub const MAX_DELAY_SCALE: f64 = 100.0;

const fn default_delay_scale() -> f64 {
    1.0
}

const fn default_log_capacity() -> usize {
    100
}

fn default_uptime() -> String {
    "99.98%".to_string()
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            delay_scale: default_delay_scale(),
            failure_rate: 0.0,
            log_capacity: default_log_capacity(),
            uptime: default_uptime(),
        }
    }
}

/// Monitoring view configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MonitorConfig {
    /// Polling interval of the monitor in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

const fn default_poll_interval_ms() -> u64 {
    1000
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}
