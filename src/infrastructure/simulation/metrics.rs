use rand::Rng;

use crate::domain::models::LoadSample;
use crate::domain::ports::MetricsSource;

/// Pseudo-random CPU/memory gauges. Nothing is measured.
#[derive(Debug, Clone, Copy)]
pub struct RandomMetricsSource {
    cpu_range: (f64, f64),
    memory_range: (f64, f64),
}

impl RandomMetricsSource {
    pub fn new(cpu_range: (f64, f64), memory_range: (f64, f64)) -> Self {
        Self {
            cpu_range: clamp_range(cpu_range),
            memory_range: clamp_range(memory_range),
        }
    }
}

impl Default for RandomMetricsSource {
    fn default() -> Self {
        Self::new((20.0, 60.0), (40.0, 70.0))
    }
}

impl MetricsSource for RandomMetricsSource {
    fn sample(&self) -> LoadSample {
        let mut rng = rand::thread_rng();
        LoadSample {
            cpu_percent: round1(rng.gen_range(self.cpu_range.0..=self.cpu_range.1)),
            memory_percent: round1(rng.gen_range(self.memory_range.0..=self.memory_range.1)),
        }
    }
}

/// Always reports the same gauges.
#[derive(Debug, Clone, Copy)]
pub struct FixedMetricsSource(pub LoadSample);

impl FixedMetricsSource {
    pub fn new(cpu_percent: f64, memory_percent: f64) -> Self {
        Self(LoadSample {
            cpu_percent,
            memory_percent,
        })
    }
}

impl MetricsSource for FixedMetricsSource {
    fn sample(&self) -> LoadSample {
        self.0
    }
}

fn clamp_range((low, high): (f64, f64)) -> (f64, f64) {
    let low = low.clamp(0.0, 100.0);
    let high = high.clamp(0.0, 100.0);
    if low <= high {
        (low, high)
    } else {
        (high, low)
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_source_stays_in_range() {
        let source = RandomMetricsSource::default();
        for _ in 0..500 {
            let sample = source.sample();
            assert!((20.0..=60.0).contains(&sample.cpu_percent));
            assert!((40.0..=70.0).contains(&sample.memory_percent));
        }
    }

    #[test]
    fn test_inverted_range_is_normalized() {
        let source = RandomMetricsSource::new((90.0, 10.0), (150.0, 120.0));
        let sample = source.sample();
        assert!((10.0..=90.0).contains(&sample.cpu_percent));
        assert!((sample.memory_percent - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fixed_source() {
        let sample = FixedMetricsSource::new(42.0, 55.5).sample();
        assert!((sample.cpu_percent - 42.0).abs() < f64::EPSILON);
        assert!((sample.memory_percent - 55.5).abs() < f64::EPSILON);
    }
}
