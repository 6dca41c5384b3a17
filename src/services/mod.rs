pub mod ai_service;
pub mod log_buffer;
pub mod monitor_poller;
pub mod operation_catalog;
pub mod status_registry;
pub mod task_runner;

pub use ai_service::{AiService, AiServiceBuilder};
pub use log_buffer::LogBuffer;
pub use monitor_poller::{MonitorEvent, MonitorPoller, MonitorSnapshot};
pub use status_registry::StatusRegistry;
pub use task_runner::TaskRunner;
