use rand::Rng;

use crate::domain::models::OperationKind;
use crate::domain::ports::FailureInjector;

/// Every operation succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFailures;

impl FailureInjector for NoFailures {
    fn inject(&self, _operation: OperationKind) -> Option<String> {
        None
    }
}

/// Fails each call independently with probability `rate`.
#[derive(Debug, Clone, Copy)]
pub struct RandomFailures {
    rate: f64,
}

impl RandomFailures {
    pub fn new(rate: f64) -> Self {
        Self {
            rate: rate.clamp(0.0, 1.0),
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl FailureInjector for RandomFailures {
    fn inject(&self, operation: OperationKind) -> Option<String> {
        if self.rate > 0.0 && rand::thread_rng().gen_bool(self.rate) {
            Some(format!("simulated fault injected into {operation}"))
        } else {
            None
        }
    }
}

/// Fails only the listed operations, always.
#[derive(Debug, Clone, Default)]
pub struct FailOperations {
    operations: Vec<OperationKind>,
}

impl FailOperations {
    pub fn new(operations: impl IntoIterator<Item = OperationKind>) -> Self {
        Self {
            operations: operations.into_iter().collect(),
        }
    }
}

impl FailureInjector for FailOperations {
    fn inject(&self, operation: OperationKind) -> Option<String> {
        self.operations
            .contains(&operation)
            .then(|| format!("{operation} is configured to fail"))
    }
}
