//! Aggregate health snapshot shown by the monitoring view.

use serde::{Deserialize, Serialize};

/// Simulated host load gauges, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadSample {
    pub cpu_percent: f64,
    pub memory_percent: f64,
}

/// Display-only snapshot, recomputed on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    /// Registry entries whose status is not idle
    pub active_microservices: usize,
    /// Operations started since the service was constructed
    pub total_requests: u64,
    pub uptime: String,
}
