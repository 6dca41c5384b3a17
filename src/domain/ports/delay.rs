//! Simulated latency port.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::models::DelaySpec;

/// Strategy for waiting out the simulated latency of an operation.
///
/// Implementations suspend the calling task and return the simulated
/// duration that elapsed, which is recorded as the log entry latency.
#[async_trait]
pub trait DelayStrategy: Send + Sync {
    async fn delay(&self, spec: DelaySpec) -> Duration;
}
