//! Monitoring view command.
//!
//! Launches a random workload in the background and prints the poller's
//! snapshots while the operations are in flight.

use anyhow::{Context, Result};
use console::style;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{Config, OperationInput, OperationKind};
use crate::services::{AiService, MonitorEvent, MonitorSnapshot};

/// Log entries shown per snapshot in human output
const RECENT_LOGS: usize = 5;

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct SnapshotOutput<'a>(pub &'a MonitorSnapshot);

impl CommandOutput for SnapshotOutput<'_> {
    fn to_human(&self) -> String {
        let snapshot = self.0;
        let formatter = TableFormatter::new();

        let busy: Vec<_> = snapshot
            .services
            .iter()
            .filter(|entry| entry.status.is_active())
            .cloned()
            .collect();
        let recent: Vec<_> = snapshot.logs.iter().take(RECENT_LOGS).cloned().collect();

        let mut sections = vec![
            style(format!(
                "tick {} at {}",
                snapshot.tick,
                snapshot.taken_at.format("%H:%M:%S%.3f")
            ))
            .bold()
            .to_string(),
            formatter.format_stats(&snapshot.stats),
            formatter.format_services(&busy),
        ];
        if !recent.is_empty() {
            sections.push(formatter.format_logs(&recent));
        }

        sections.join("\n")
    }
}

/// Pick `count` operations at random from the catalog.
pub fn random_workload(count: usize) -> Vec<OperationKind> {
    let mut rng = rand::thread_rng();
    (0..count)
        .filter_map(|_| OperationKind::ALL.choose(&mut rng).copied())
        .collect()
}

fn spawn_workload(service: &AiService, kinds: Vec<OperationKind>) -> Vec<JoinHandle<()>> {
    kinds
        .into_iter()
        .map(|kind| {
            let service = service.clone();
            tokio::spawn(async move {
                match service.run(kind, &OperationInput::new()).await {
                    Ok(result) => debug!(operation = %kind, title = %result.title, "workload operation finished"),
                    Err(err) => warn!(operation = %kind, error = %err, "workload operation failed"),
                }
            })
        })
        .collect()
}

pub async fn execute(
    config: &Config,
    ticks: u64,
    interval_ms: Option<u64>,
    workload: usize,
    json_mode: bool,
) -> Result<()> {
    let service = AiService::from_config(&config.simulation);
    let period = Duration::from_millis(interval_ms.unwrap_or(config.monitor.poll_interval_ms));

    let poller = service.monitor(period);
    let mut events = poller.subscribe();
    let poller_handle = poller.start();

    let workers = spawn_workload(&service, random_workload(workload));

    let mut seen = 0u64;
    while seen < ticks {
        match events.recv().await {
            Ok(MonitorEvent::Snapshot(snapshot)) => {
                seen += 1;
                output(&SnapshotOutput(&snapshot), json_mode);
            }
            Ok(MonitorEvent::Shutdown) | Err(RecvError::Closed) => break,
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "monitor output fell behind");
            }
        }
    }

    poller.shutdown();
    poller_handle.await.context("Monitor poller task panicked")?;

    // Operations still in flight are abandoned with the process.
    for worker in workers {
        worker.abort();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_workload_size() {
        assert_eq!(random_workload(0).len(), 0);
        assert_eq!(random_workload(7).len(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_prints_requested_ticks() {
        let config = Config::default();
        execute(&config, 3, Some(500), 2, true).await.unwrap();
    }

    #[tokio::test]
    async fn test_snapshot_human_output_shows_busy_services() {
        let service = AiService::builder().instant().build();
        service.analyze_attendance().await.unwrap();

        let snapshot = crate::services::MonitorPoller::poll_once(&service, 1).await;
        let human = SnapshotOutput(&snapshot).to_human();

        assert!(human.contains("tick 1"));
        assert!(human.contains("chatbotGateway"));
    }
}
