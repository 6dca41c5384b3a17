//! Simulation adapters
//!
//! Implementations of the domain ports used when no real backend exists:
//! - Tokio-timer and instant latency strategies
//! - Pseudo-random and fixed load gauges
//! - Failure injection policies

pub mod delay;
pub mod failure;
pub mod metrics;

pub use delay::{InstantDelay, TokioDelay};
pub use failure::{FailOperations, NoFailures, RandomFailures};
pub use metrics::{FixedMetricsSource, RandomMetricsSource};
