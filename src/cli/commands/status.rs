//! Registry, stats and log buffer snapshot command.
//!
//! Every invocation builds a fresh service. `--workload` runs random
//! operations first (nominal latency, no waiting) so the tables show a
//! populated state; without it the output is the initial state.

use anyhow::Result;
use serde::Serialize;
use tracing::warn;

use crate::cli::commands::monitor::random_workload;
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{AggregateStats, Config, LogEntry, OperationInput, OperationKind, ServiceEntry};
use crate::services::{AiService, AiServiceBuilder};

#[derive(Debug, Serialize)]
pub struct StatusOutput {
    pub services: Vec<ServiceEntry>,
    pub stats: AggregateStats,
    pub logs: Vec<LogEntry>,
}

impl StatusOutput {
    pub async fn collect(service: &AiService) -> Self {
        Self {
            services: service.service_statuses().await,
            stats: service.stats().await,
            logs: service.logs().await,
        }
    }
}

impl CommandOutput for StatusOutput {
    fn to_human(&self) -> String {
        let formatter = TableFormatter::new();
        let mut sections = vec![
            formatter.format_services(&self.services),
            formatter.format_stats(&self.stats),
        ];

        if self.logs.is_empty() {
            sections.push("No log entries.".to_string());
        } else {
            sections.push(formatter.format_logs(&self.logs));
        }

        sections.join("\n\n")
    }
}

/// Run `kinds` one after another; injected failures are logged and skipped.
pub async fn run_workload(service: &AiService, kinds: &[OperationKind]) {
    for &kind in kinds {
        if let Err(err) = service.run(kind, &OperationInput::new()).await {
            warn!(operation = %kind, error = %err, "status workload operation failed");
        }
    }
}

pub async fn execute(config: &Config, workload: usize, json_mode: bool) -> Result<()> {
    let service = AiServiceBuilder::from_config(&config.simulation)
        .instant()
        .build();
    run_workload(&service, &random_workload(workload)).await;

    output(&StatusOutput::collect(&service).await, json_mode);
    Ok(())
}
