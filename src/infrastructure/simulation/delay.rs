use async_trait::async_trait;
use std::time::Duration;

use crate::domain::models::{DelaySpec, MAX_DELAY_SCALE};
use crate::domain::ports::DelayStrategy;

/// Waits out simulated latency on the tokio timer.
///
/// The nominal delay is multiplied by `scale`, clamped to
/// `0..=MAX_DELAY_SCALE`; a scale of zero returns immediately. Works with a
/// paused tokio clock in tests.
#[derive(Debug, Clone, Copy)]
pub struct TokioDelay {
    scale: f64,
}

impl TokioDelay {
    pub fn new(scale: f64) -> Self {
        let scale = if scale.is_nan() {
            0.0
        } else {
            scale.clamp(0.0, MAX_DELAY_SCALE)
        };
        Self { scale }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Default for TokioDelay {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[async_trait]
impl DelayStrategy for TokioDelay {
    async fn delay(&self, spec: DelaySpec) -> Duration {
        let nominal = {
            let mut rng = rand::thread_rng();
            spec.sample(&mut rng)
        };
        let scaled = Duration::try_from_secs_f64(nominal.as_secs_f64() * self.scale)
            .unwrap_or(Duration::MAX);

        if !scaled.is_zero() {
            tokio::time::sleep(scaled).await;
        }
        scaled
    }
}

/// Reports the nominal latency without waiting.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantDelay;

#[async_trait]
impl DelayStrategy for InstantDelay {
    async fn delay(&self, spec: DelaySpec) -> Duration {
        let mut rng = rand::thread_rng();
        spec.sample(&mut rng)
    }
}
