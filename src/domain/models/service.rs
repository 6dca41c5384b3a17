//! Simulated microservice status model.
//!
//! Every simulated service is identified by a stable string key
//! (e.g. `admissionsAI`) and carries one of a small set of states.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current state of a simulated microservice.
///
/// There is no transition table: any state may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    /// No task in flight
    Idle,
    /// A request-driven task is in flight
    Processing,
    /// Long-lived always-on service
    Running,
}

impl Default for ServiceStatus {
    fn default() -> Self {
        Self::Idle
    }
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Processing => "processing",
            Self::Running => "running",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "idle" => Some(Self::Idle),
            "processing" | "busy" => Some(Self::Processing),
            "running" => Some(Self::Running),
            _ => None,
        }
    }

    /// Whether the service counts towards the active microservice gauge.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One registry row as handed out by snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    /// Stable service key
    pub key: String,
    /// Status at the time of the snapshot
    pub status: ServiceStatus,
}

impl ServiceEntry {
    pub fn new(key: impl Into<String>, status: ServiceStatus) -> Self {
        Self {
            key: key.into(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(ServiceStatus::default(), ServiceStatus::Idle);
    }

    #[test]
    fn test_from_str_roundtrips_as_str() {
        for status in [
            ServiceStatus::Idle,
            ServiceStatus::Processing,
            ServiceStatus::Running,
        ] {
            assert_eq!(ServiceStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(ServiceStatus::from_str("BUSY"), Some(ServiceStatus::Processing));
        assert_eq!(ServiceStatus::from_str("stopped"), None);
    }

    #[test]
    fn test_is_active() {
        assert!(!ServiceStatus::Idle.is_active());
        assert!(ServiceStatus::Processing.is_active());
        assert!(ServiceStatus::Running.is_active());
    }
}
