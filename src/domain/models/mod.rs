pub mod analysis;
pub mod config;
pub mod log_entry;
pub mod operation;
pub mod service;
pub mod stats;

pub use analysis::{AnalysisResult, DataPoint, DataValue};
pub use config::{Config, LoggingConfig, MonitorConfig, SimulationConfig, MAX_DELAY_SCALE};
pub use log_entry::{LogEntry, LogLevel};
pub use operation::{DelaySpec, OperationDescriptor, OperationInput, OperationKind, ResultBuilder};
pub use service::{ServiceEntry, ServiceStatus};
pub use stats::{AggregateStats, LoadSample};
