//! edusim - Simulated School Administration AI Services
//!
//! edusim stands in for the AI back end of a school administration
//! dashboard. Every operation (admissions analysis, budget forecasting,
//! timetable optimization, ...) marks its microservice as processing, waits
//! a simulated latency, appends one entry to a bounded activity log, returns
//! the service to idle and hands back a canned analysis.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, errors and ports
//! - **Service Layer** (`services`): Registry, log buffer, task runner and facade
//! - **Infrastructure Layer** (`infrastructure`): Config, logging and simulation adapters
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```
//! use edusim::AiService;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let service = AiService::builder().instant().build();
//! let forecast = service.forecast_budget().await?;
//! println!("{}", forecast.summary);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{ServiceError, ServiceResult};
pub use domain::models::{
    AggregateStats, AnalysisResult, Config, DataPoint, DataValue, LogEntry, LogLevel,
    LoggingConfig, MonitorConfig, OperationDescriptor, OperationInput, OperationKind,
    ServiceEntry, ServiceStatus, SimulationConfig,
};
pub use domain::ports::{DelayStrategy, FailureInjector, MetricsSource};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{
    AiService, AiServiceBuilder, LogBuffer, MonitorEvent, MonitorPoller, MonitorSnapshot,
    StatusRegistry, TaskRunner,
};
