use crate::domain::models::OperationKind;

/// Decides whether a simulated operation fails once its delay has elapsed.
///
/// Returning `Some(reason)` fails the call with that reason.
pub trait FailureInjector: Send + Sync {
    fn inject(&self, operation: OperationKind) -> Option<String>;
}
