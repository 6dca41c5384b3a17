//! Common test utilities for integration tests
//!
//! Provides shared fixtures, helpers, and test utilities used across
//! multiple integration test files.

#![allow(dead_code)]

use async_trait::async_trait;
use edusim::domain::models::DelaySpec;
use edusim::domain::ports::DelayStrategy;
use edusim::infrastructure::simulation::FixedMetricsSource;
use edusim::services::AiService;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex, Semaphore};

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Service with zero latency and fixed load gauges
pub fn instant_service() -> AiService {
    AiService::builder()
        .instant()
        .metrics(Arc::new(FixedMetricsSource::new(40.0, 55.0)))
        .build()
}

/// Delay strategy that holds every operation until the test releases it
///
/// Each call reports its spec on the `entered` channel before parking, so a
/// test can wait until an operation is provably mid-flight.
pub struct GatedDelay {
    entered_tx: mpsc::UnboundedSender<DelaySpec>,
    entered_rx: Mutex<mpsc::UnboundedReceiver<DelaySpec>>,
    release: Semaphore,
}

impl GatedDelay {
    pub fn new() -> Arc<Self> {
        let (entered_tx, entered_rx) = mpsc::unbounded_channel();
        Arc::new(Self {
            entered_tx,
            entered_rx: Mutex::new(entered_rx),
            release: Semaphore::new(0),
        })
    }

    /// Wait until one more operation has entered its delay
    pub async fn wait_entered(&self) -> DelaySpec {
        self.entered_rx
            .lock()
            .await
            .recv()
            .await
            .expect("gate sender dropped")
    }

    /// Let `n` parked operations finish their delay
    pub fn open(&self, n: usize) {
        self.release.add_permits(n);
    }
}

#[async_trait]
impl DelayStrategy for GatedDelay {
    async fn delay(&self, spec: DelaySpec) -> Duration {
        let _ = self.entered_tx.send(spec);
        self.release
            .acquire()
            .await
            .expect("gate semaphore closed")
            .forget();
        Duration::from_millis(spec.max_ms())
    }
}

/// Service whose operations park inside their delay until released
pub fn gated_service() -> (AiService, Arc<GatedDelay>) {
    let gate = GatedDelay::new();
    let service = AiService::builder()
        .delay(gate.clone())
        .metrics(Arc::new(FixedMetricsSource::new(40.0, 55.0)))
        .build();
    (service, gate)
}
