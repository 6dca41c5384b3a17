//! Single operation command.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::output::progress::create_hidden_spinner;
use crate::cli::output::{
    create_spinner_with_message, output, CommandOutput, ProgressBarExt, TableFormatter,
};
use crate::domain::models::{AnalysisResult, Config, LogEntry, OperationInput, OperationKind};
use crate::services::{operation_catalog, AiServiceBuilder};

#[derive(Debug, Serialize)]
pub struct RunOutput {
    pub operation: OperationKind,
    pub service_key: &'static str,
    pub result: AnalysisResult,
    /// Log entry appended by this run
    pub log: Option<LogEntry>,
}

impl CommandOutput for RunOutput {
    fn to_human(&self) -> String {
        let formatter = TableFormatter::new();
        let mut out = formatter.format_result(&self.result);
        if let Some(entry) = &self.log {
            out.push_str("\n\n");
            out.push_str(&formatter.format_logs(std::slice::from_ref(entry)));
        }
        out
    }
}

/// Resolve an operation name and build its input from the CLI flags.
pub fn parse_request(
    operation: &str,
    count: Option<u32>,
    subject: Option<String>,
) -> Result<(OperationKind, OperationInput)> {
    let kind = OperationKind::parse_str(operation).with_context(|| {
        format!("Unknown operation '{operation}' (run `edusim ops` to list operations)")
    })?;

    let mut input = OperationInput::new();
    if let Some(count) = count {
        input = input.with_count(count);
    }
    if let Some(subject) = subject {
        input = input.with_subject(subject);
    }

    Ok((kind, input))
}

pub async fn execute(
    config: &Config,
    operation: &str,
    count: Option<u32>,
    subject: Option<String>,
    instant: bool,
    json_mode: bool,
) -> Result<()> {
    let (kind, input) = parse_request(operation, count, subject)?;
    let descriptor = operation_catalog::descriptor(kind);

    let mut builder = AiServiceBuilder::from_config(&config.simulation);
    if instant {
        builder = builder.instant();
    }
    let service = builder.build();

    let spinner = if json_mode {
        create_hidden_spinner()
    } else {
        create_spinner_with_message(format!("{kind} on {}", descriptor.service_key))
    };

    let result = match service.run(kind, &input).await {
        Ok(result) => {
            spinner.finish_success(format!("{kind} complete"));
            result
        }
        Err(err) => {
            spinner.finish_error(err.to_string());
            return Err(err).with_context(|| format!("Operation {kind} failed"));
        }
    };

    let log = service.logs().await.into_iter().next();
    output(
        &RunOutput {
            operation: kind,
            service_key: descriptor.service_key,
            result,
            log,
        },
        json_mode,
    );

    Ok(())
}
