//! CLI command implementations.

pub mod config;
pub mod monitor;
pub mod ops;
pub mod run;
pub mod status;
