//! Table output formatting for CLI commands
//!
//! Provides formatted tables for the operation catalog, service statuses,
//! the log buffer and aggregate stats using comfy-table.
//! Supports color-coded cells, automatic column sizing, and accessibility features.

use crate::domain::models::{
    AggregateStats, AnalysisResult, LogEntry, LogLevel, OperationDescriptor, ServiceEntry,
    ServiceStatus,
};
use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

use super::truncate;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Create a new table formatter with custom settings
    pub fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format the operation catalog
    pub fn format_catalog(&self, catalog: &[OperationDescriptor]) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&["Operation", "Domain", "Service", "Module", "Delay"]));

        for op in catalog {
            table.add_row(vec![
                Cell::new(op.kind.as_str()),
                Cell::new(op.domain),
                Cell::new(op.service_key),
                Cell::new(op.module),
                Cell::new(op.delay.to_string()),
            ]);
        }

        table.to_string()
    }

    /// Format registry entries in registration order
    pub fn format_services(&self, services: &[ServiceEntry]) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&["Service", "Status"]));

        for entry in services {
            let status_cell = if self.use_colors {
                Cell::new(entry.status.as_str()).fg(status_color(entry.status))
            } else {
                Cell::new(format!("{} {}", status_icon(entry.status), entry.status))
            };
            table.add_row(vec![Cell::new(&entry.key), status_cell]);
        }

        table.to_string()
    }

    /// Format log entries, newest first
    pub fn format_logs(&self, logs: &[LogEntry]) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&["#", "Time", "Level", "Module", "Message", "Latency"]));

        for entry in logs {
            let level_cell = if self.use_colors {
                Cell::new(entry.level.as_str()).fg(level_color(entry.level))
            } else {
                Cell::new(entry.level.as_str())
            };
            let latency = entry
                .latency_ms
                .map_or_else(|| "-".to_string(), |ms| format!("{ms} ms"));

            table.add_row(vec![
                Cell::new(entry.id),
                Cell::new(&entry.timestamp),
                level_cell,
                Cell::new(&entry.module),
                Cell::new(truncate(&entry.message, 60)),
                Cell::new(latency),
            ]);
        }

        table.to_string()
    }

    /// Format the aggregate stats snapshot as a two-column table
    pub fn format_stats(&self, stats: &AggregateStats) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&["Metric", "Value"]));

        table.add_row(vec![Cell::new("CPU"), Cell::new(format!("{:.1}%", stats.cpu_percent))]);
        table.add_row(vec![
            Cell::new("Memory"),
            Cell::new(format!("{:.1}%", stats.memory_percent)),
        ]);
        table.add_row(vec![
            Cell::new("Active microservices"),
            Cell::new(stats.active_microservices),
        ]);
        table.add_row(vec![Cell::new("Total requests"), Cell::new(stats.total_requests)]);
        table.add_row(vec![Cell::new("Uptime"), Cell::new(&stats.uptime)]);

        table.to_string()
    }

    /// Format an analysis result: title, summary, data points and recommendations
    pub fn format_result(&self, result: &AnalysisResult) -> String {
        let mut lines = vec![result.title.clone(), result.summary.clone()];

        if let Some(points) = &result.data_points {
            let mut table = self.create_base_table();
            table.set_header(header(&["Label", "Value"]));
            for point in points {
                table.add_row(vec![Cell::new(&point.label), Cell::new(point.value.to_string())]);
            }
            lines.push(table.to_string());
        }

        if !result.recommendations.is_empty() {
            lines.push("Recommendations:".to_string());
            lines.extend(result.recommendations.iter().map(|r| format!("  - {r}")));
        }

        lines.join("\n")
    }

    /// Create a base table with common settings
    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|title| Cell::new(title).add_attribute(Attribute::Bold))
        .collect()
}

/// Check if color output is supported
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::colors_enabled()
}

fn status_color(status: ServiceStatus) -> Color {
    match status {
        ServiceStatus::Idle => Color::DarkGrey,
        ServiceStatus::Processing => Color::Yellow,
        ServiceStatus::Running => Color::Green,
    }
}

fn status_icon(status: ServiceStatus) -> &'static str {
    match status {
        ServiceStatus::Idle => "○",
        ServiceStatus::Processing => "⟳",
        ServiceStatus::Running => "●",
    }
}

fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Info => Color::Cyan,
        LogLevel::Warning => Color::Yellow,
        LogLevel::Error => Color::Red,
        LogLevel::Success => Color::Green,
    }
}
