//! Generic task runner for simulated operations.
//!
//! Every operation follows the same sequence:
//! 1. mark its service `Processing`
//! 2. wait out the simulated latency
//! 3. append exactly one log entry (success level, or `ERROR` on injected failure)
//! 4. mark its service `Idle`
//! 5. hand back the freshly built [`AnalysisResult`]
//!
//! There is no per-key locking. Concurrent calls against the same service
//! race on the registry (last write wins) but each still records its own
//! log entry.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info_span, warn, Instrument};
use uuid::Uuid;

use crate::domain::errors::{ServiceError, ServiceResult};
use crate::domain::models::{
    AnalysisResult, LogLevel, OperationDescriptor, OperationInput, OperationKind, ServiceStatus,
};
use crate::domain::ports::{DelayStrategy, FailureInjector};
use crate::services::log_buffer::LogBuffer;
use crate::services::operation_catalog;
use crate::services::status_registry::StatusRegistry;

/// Drives operation descriptors through the registry and log buffer.
#[derive(Clone)]
pub struct TaskRunner {
    registry: StatusRegistry,
    logs: LogBuffer,
    delay: Arc<dyn DelayStrategy>,
    failures: Arc<dyn FailureInjector>,
    requests: Arc<AtomicU64>,
}

impl TaskRunner {
    pub fn new(
        registry: StatusRegistry,
        logs: LogBuffer,
        delay: Arc<dyn DelayStrategy>,
        failures: Arc<dyn FailureInjector>,
    ) -> Self {
        Self {
            registry,
            logs,
            delay,
            failures,
            requests: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Run a catalog operation.
    pub async fn run(&self, kind: OperationKind, input: &OperationInput) -> ServiceResult<AnalysisResult> {
        self.run_descriptor(operation_catalog::descriptor(kind), input)
            .await
    }

    /// Run an arbitrary descriptor. Its service key must already be registered.
    ///
    /// The steps run on their own task: a caller that stops polling only
    /// discards the result, the key still returns to `Idle` and the entry is
    /// still logged.
    pub async fn run_descriptor(
        &self,
        descriptor: &OperationDescriptor,
        input: &OperationInput,
    ) -> ServiceResult<AnalysisResult> {
        let span = info_span!(
            "operation",
            run_id = %Uuid::new_v4(),
            operation = %descriptor.kind,
            service = descriptor.service_key,
        );

        let runner = self.clone();
        let operation = descriptor.kind;
        let descriptor = *descriptor;
        let input = input.clone();
        let handle = tokio::spawn(
            async move { runner.execute(&descriptor, &input).await }.instrument(span),
        );

        match handle.await {
            Ok(result) => result,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(_) => Err(ServiceError::Interrupted(operation)),
        }
    }

    async fn execute(
        &self,
        descriptor: &OperationDescriptor,
        input: &OperationInput,
    ) -> ServiceResult<AnalysisResult> {
        let key = descriptor.service_key;
        self.registry.set(key, ServiceStatus::Processing).await?;
        self.requests.fetch_add(1, Ordering::Relaxed);
        debug!(delay = %descriptor.delay, "operation started");

        let elapsed = self.delay.delay(descriptor.delay).await;
        let latency_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

        let failure = self.failures.inject(descriptor.kind);
        match &failure {
            None => {
                self.logs
                    .append(descriptor.level, descriptor.module, descriptor.message, Some(latency_ms))
                    .await;
            }
            Some(reason) => {
                self.logs
                    .append(
                        LogLevel::Error,
                        descriptor.module,
                        format!("{} failed: {reason}", descriptor.kind),
                        Some(latency_ms),
                    )
                    .await;
            }
        }

        // Reset before returning, on both paths.
        self.registry.set(key, ServiceStatus::Idle).await?;

        match failure {
            None => {
                debug!(latency_ms, "operation completed");
                Ok((descriptor.build)(input))
            }
            Some(reason) => {
                warn!(latency_ms, %reason, "operation failed");
                Err(ServiceError::OperationFailed {
                    operation: descriptor.kind,
                    service_key: key.to_string(),
                    reason,
                })
            }
        }
    }

    /// Operations started since construction, including failed ones.
    pub fn total_requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    pub fn registry(&self) -> &StatusRegistry {
        &self.registry
    }

    pub fn logs(&self) -> &LogBuffer {
        &self.logs
    }
}
