//! Log entries recorded by simulated operations.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp format used for display in the monitoring view.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Success,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Success => "SUCCESS",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "INFO" => Some(Self::Info),
            "WARNING" | "WARN" => Some(Self::Warning),
            "ERROR" => Some(Self::Error),
            "SUCCESS" => Some(Self::Success),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single immutable log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Monotonic identifier, unique within one buffer
    pub id: u64,
    /// Creation time, already formatted for display
    pub timestamp: String,
    pub level: LogLevel,
    /// Originating module, e.g. `ADMISSIONS_AI`
    pub module: String,
    pub message: String,
    /// Simulated latency of the operation that produced the entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

impl LogEntry {
    /// Create an entry stamped with the current local time.
    pub fn new(
        id: u64,
        level: LogLevel,
        module: impl Into<String>,
        message: impl Into<String>,
        latency_ms: Option<u64>,
    ) -> Self {
        Self {
            id,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            level,
            module: module.into(),
            message: message.into(),
            latency_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_serializes_uppercase() {
        let json = serde_json::to_string(&LogLevel::Success).unwrap();
        assert_eq!(json, "\"SUCCESS\"");
        let level: LogLevel = serde_json::from_str("\"WARNING\"").unwrap();
        assert_eq!(level, LogLevel::Warning);
    }

    #[test]
    fn test_parse_str_accepts_aliases() {
        assert_eq!(LogLevel::parse_str("warn"), Some(LogLevel::Warning));
        assert_eq!(LogLevel::parse_str("success"), Some(LogLevel::Success));
        assert_eq!(LogLevel::parse_str("fatal"), None);
    }

    #[test]
    fn test_entry_timestamp_is_formatted() {
        let entry = LogEntry::new(1, LogLevel::Info, "SYSTEM", "boot", None);
        // HH:MM:SS
        assert_eq!(entry.timestamp.len(), 8);
        assert_eq!(entry.timestamp.matches(':').count(), 2);
    }

    #[test]
    fn test_latency_omitted_when_absent() {
        let entry = LogEntry::new(7, LogLevel::Info, "SYSTEM", "boot", None);
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("latency_ms").is_none());
    }
}
