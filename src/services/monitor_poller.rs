use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::domain::models::{AggregateStats, LogEntry, ServiceEntry};
use crate::services::ai_service::AiService;

/// Everything the monitoring view renders, read in one pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorSnapshot {
    /// Poll sequence number, starting at 1
    pub tick: u64,
    pub taken_at: DateTime<Utc>,
    pub services: Vec<ServiceEntry>,
    pub logs: Vec<LogEntry>,
    pub stats: AggregateStats,
}

/// Monitor poller events
#[derive(Debug, Clone)]
pub enum MonitorEvent {
    /// A fresh snapshot
    Snapshot(Arc<MonitorSnapshot>),

    /// Poller shutdown
    Shutdown,
}

/// Background poller for the monitoring view
///
/// Re-reads service statuses, the log buffer and aggregate stats at a fixed
/// interval, independently of any in-flight operation.
///
/// Uses tokio primitives:
/// - RwLock for the cached latest snapshot
/// - broadcast channel for snapshot notifications (one-to-many)
/// - interval timer for periodic polling
/// - select! for graceful shutdown handling
///
/// # Examples
///
/// ```
/// use edusim::services::{AiService, MonitorEvent};
/// use std::time::Duration;
///
/// # async fn example() -> anyhow::Result<()> {
/// let service = AiService::builder().instant().build();
/// let poller = service.monitor(Duration::from_millis(1000));
///
/// let mut events = poller.subscribe();
/// let handle = poller.start();
///
/// if let MonitorEvent::Snapshot(snapshot) = events.recv().await? {
///     println!("{} services", snapshot.services.len());
/// }
///
/// poller.shutdown();
/// handle.await?;
/// # Ok(())
/// # }
/// ```
pub struct MonitorPoller {
    service: AiService,

    interval: Duration,

    /// Latest snapshot (cached for quick access)
    latest: Arc<RwLock<Option<Arc<MonitorSnapshot>>>>,

    /// Event broadcaster (one-to-many notification)
    event_tx: broadcast::Sender<MonitorEvent>,

    /// Shutdown signal broadcaster
    shutdown_tx: broadcast::Sender<()>,
}

impl MonitorPoller {
    pub fn new(service: AiService, interval: Duration) -> Self {
        let (event_tx, _) = broadcast::channel(64);
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            service,
            interval: interval.max(Duration::from_millis(1)),
            latest: Arc::new(RwLock::new(None)),
            event_tx,
            shutdown_tx,
        }
    }

    /// Read one snapshot without going through the background task.
    pub async fn poll_once(service: &AiService, tick: u64) -> MonitorSnapshot {
        MonitorSnapshot {
            tick,
            taken_at: Utc::now(),
            services: service.service_statuses().await,
            logs: service.logs().await,
            stats: service.stats().await,
        }
    }

    /// Spawn the polling task. The first snapshot is taken immediately.
    pub fn start(&self) -> tokio::task::JoinHandle<()> {
        let service = self.service.clone();
        let latest = Arc::clone(&self.latest);
        let event_tx = self.event_tx.clone();
        let period = self.interval;
        let mut shutdown_rx = self.shutdown_tx.subscribe();

        tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut tick = 0u64;

            info!(interval = ?period, "Monitor poller started");

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        tick += 1;
                        let snapshot = Arc::new(Self::poll_once(&service, tick).await);

                        {
                            let mut current = latest.write().await;
                            *current = Some(Arc::clone(&snapshot));
                        }

                        debug!(
                            tick,
                            active = snapshot.stats.active_microservices,
                            logs = snapshot.logs.len(),
                            "Monitor snapshot taken"
                        );

                        // No subscribers is fine.
                        let _ = event_tx.send(MonitorEvent::Snapshot(snapshot));
                    }

                    _ = shutdown_rx.recv() => {
                        info!("Monitor poller shutting down");
                        let _ = event_tx.send(MonitorEvent::Shutdown);
                        break;
                    }
                }
            }

            info!("Monitor poller stopped");
        })
    }

    pub fn subscribe(&self) -> broadcast::Receiver<MonitorEvent> {
        self.event_tx.subscribe()
    }

    /// Most recent snapshot, if the poller has ticked at least once.
    pub async fn latest(&self) -> Option<Arc<MonitorSnapshot>> {
        self.latest.read().await.clone()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Signal the polling task to stop.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }
}
