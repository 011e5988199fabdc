//! Randomized inter-probe pacing

use crate::types::{AppError, Result};
use rand::Rng;
use std::time::Duration;

/// Uniform random delay drawn from a closed `[min, max]` interval.
///
/// Each simulated client samples one delay after every probe, so
/// consecutive probes from the same client never overlap.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    min: Duration,
    max: Duration,
}

impl Pacing {
    /// Create a pacing interval, rejecting an inverted range
    pub fn new(min: Duration, max: Duration) -> Result<Self> {
        if min > max {
            return Err(AppError::config(format!(
                "Pacing interval is inverted: min {}ms > max {}ms",
                min.as_millis(),
                max.as_millis()
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    /// Draw one delay uniformly from the interval
    pub fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        let millis = rand::thread_rng().gen_range(self.min.as_millis()..=self.max.as_millis());
        Duration::from_millis(millis as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_interval_rejected() {
        let result = Pacing::new(Duration::from_millis(300), Duration::from_millis(100));
        assert!(result.is_err());
    }

    #[test]
    fn test_degenerate_interval_always_returns_min() {
        let pacing = Pacing::new(Duration::from_millis(50), Duration::from_millis(50)).unwrap();
        for _ in 0..10 {
            assert_eq!(pacing.sample(), Duration::from_millis(50));
        }
    }

    #[test]
    fn test_samples_fall_within_interval() {
        let min = Duration::from_millis(100);
        let max = Duration::from_millis(300);
        let pacing = Pacing::new(min, max).unwrap();

        for _ in 0..1000 {
            let delay = pacing.sample();
            assert!(delay >= min, "delay {:?} below minimum", delay);
            assert!(delay <= max, "delay {:?} above maximum", delay);
        }
    }

    #[test]
    fn test_samples_cover_the_interval() {
        let pacing = Pacing::new(Duration::from_millis(0), Duration::from_millis(10)).unwrap();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(pacing.sample().as_millis());
        }
        // A uniform draw over 11 values should hit more than a couple
        assert!(seen.len() > 3, "only {} distinct delays sampled", seen.len());
    }
}
