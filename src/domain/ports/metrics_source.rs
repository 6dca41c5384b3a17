use crate::domain::models::LoadSample;

/// Source of the CPU/memory gauges reported by stats.
pub trait MetricsSource: Send + Sync {
    fn sample(&self) -> LoadSample;
}
