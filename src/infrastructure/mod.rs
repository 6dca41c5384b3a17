//! Infrastructure layer module
//!
//! This module contains the adapters behind the domain ports and the
//! ambient services of the process:
//! - Configuration management
//! - Logging infrastructure
//! - Simulation adapters (latency, load gauges, failure injection)

pub mod config;
pub mod logging;
pub mod simulation;
