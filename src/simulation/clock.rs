//! Delay source used while a trip is under way

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use super::error::{SimError, SimResult};

/// Suspends the current task for a simulated travel time.
pub trait Clock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Waits on the tokio timer, scaling every delay by `time_scale`
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    time_scale: f64,
}

impl TokioClock {
    /// Rejects a NaN, infinite or negative `time_scale`.
    pub fn new(time_scale: f64) -> SimResult<Self> {
        if !time_scale.is_finite() || time_scale < 0.0 {
            return Err(SimError::InvalidTimeScale(time_scale));
        }
        Ok(Self { time_scale })
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self { time_scale: 1.0 }
    }
}

impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        // Saturates instead of overflowing for huge scales
        let scaled = Duration::try_from_secs_f64(duration.as_secs_f64() * self.time_scale)
            .unwrap_or(Duration::MAX);
        if !scaled.is_zero() {
            tokio::time::sleep(scaled).await;
        }
    }
}

/// Returns immediately and remembers every requested delay
#[derive(Debug, Default)]
pub struct RecordingClock {
    requested: Mutex<Vec<Duration>>,
}

impl RecordingClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested(&self) -> Vec<Duration> {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Clock for RecordingClock {
    async fn sleep(&self, duration: Duration) {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(duration);
    }
}
