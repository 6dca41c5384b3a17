//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "edusim")]
#[command(about = "edusim - simulated school administration AI services", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the operation catalog
    Ops,

    /// Run one operation and print its result
    Run {
        /// Operation name, e.g. analyze-applicants
        operation: String,

        /// Numeric input (applicants, students, questions, ...)
        #[arg(short, long)]
        count: Option<u32>,

        /// Text input (course subject, event name, destination, ...)
        #[arg(short, long)]
        subject: Option<String>,

        /// Report nominal latency without waiting
        #[arg(long)]
        instant: bool,
    },

    /// Show service statuses, aggregate stats and the log buffer
    ///
    /// Each invocation starts a fresh service, so without --workload this is
    /// the initial state.
    Status {
        /// Random operations to run first, reporting nominal latency without waiting
        #[arg(short, long, default_value = "0")]
        workload: usize,
    },

    /// Poll monitoring snapshots while a random workload runs
    Monitor {
        /// Number of snapshots to print before exiting
        #[arg(short, long, default_value = "5")]
        ticks: u64,

        /// Poll interval in milliseconds (defaults to monitor.poll_interval_ms)
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Number of concurrent random operations to launch
        #[arg(short, long, default_value = "3")]
        workload: usize,
    },

    /// Print the effective configuration
    Config,
}
