//! Operation catalog command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{DelaySpec, LogLevel, OperationDescriptor, OperationKind};
use crate::services::operation_catalog;

#[derive(Debug, Serialize)]
pub struct OperationOutput {
    pub operation: OperationKind,
    pub domain: &'static str,
    pub service_key: &'static str,
    pub module: &'static str,
    pub level: LogLevel,
    pub delay: DelaySpec,
}

impl From<&OperationDescriptor> for OperationOutput {
    fn from(op: &OperationDescriptor) -> Self {
        Self {
            operation: op.kind,
            domain: op.domain,
            service_key: op.service_key,
            module: op.module,
            level: op.level,
            delay: op.delay,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CatalogOutput {
    pub operations: Vec<OperationOutput>,
    pub total: usize,
    #[serde(skip)]
    catalog: &'static [OperationDescriptor],
}

impl CatalogOutput {
    pub fn new(catalog: &'static [OperationDescriptor]) -> Self {
        Self {
            operations: catalog.iter().map(OperationOutput::from).collect(),
            total: catalog.len(),
            catalog,
        }
    }
}

impl CommandOutput for CatalogOutput {
    fn to_human(&self) -> String {
        format!(
            "{} operation(s):\n{}",
            self.total,
            TableFormatter::new().format_catalog(self.catalog)
        )
    }
}

pub fn execute(json_mode: bool) -> Result<()> {
    output(&CatalogOutput::new(operation_catalog::all()), json_mode);
    Ok(())
}
