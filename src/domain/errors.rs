//! Domain errors for the simulated service layer.

use thiserror::Error;

use crate::domain::models::OperationKind;

/// Errors surfaced by the registry and the task runner.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The key was never registered. Indicates a wiring bug, not a runtime condition.
    #[error("Unknown service key: {0}")]
    UnknownServiceKey(String),

    #[error("Operation {operation} on {service_key} failed: {reason}")]
    OperationFailed {
        operation: OperationKind,
        service_key: String,
        reason: String,
    },

    /// The operation's task was cancelled before finishing, e.g. by runtime shutdown.
    #[error("Operation {0} was interrupted")]
    Interrupted(OperationKind),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
