//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the seams the task runner and stats snapshot depend on:
//! - DelayStrategy: how simulated latency elapses
//! - MetricsSource: where CPU/memory gauges come from
//! - FailureInjector: whether a simulated operation fails
//!
//! Production wiring lives in `infrastructure::simulation`; tests substitute
//! zero, gated or deterministic implementations.

pub mod delay;
pub mod failure_injector;
pub mod metrics_source;

pub use delay::DelayStrategy;
pub use failure_injector::FailureInjector;
pub use metrics_source::MetricsSource;
