//! Minimum-interval gate for outbound completion calls.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{self, Instant};
use tracing::debug;

use grace_core::persona;

/// Keeps outbound calls at least `min_interval` apart.
///
/// The lock is held while waiting, so concurrent callers queue up and each
/// one starts a full interval after the previous.
#[derive(Debug)]
pub struct RequestThrottle {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RequestThrottle {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait until a call may start, then record its start time.
    ///
    /// Returns how long the caller was held back.
    pub async fn acquire(&self) -> Duration {
        let mut last_request = self.last_request.lock().await;

        let mut waited = Duration::ZERO;
        if let Some(previous) = *last_request {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                waited = self.min_interval - elapsed;
                debug!(wait_ms = waited.as_millis() as u64, "Throttling outbound call");
                time::sleep(waited).await;
            }
        }

        *last_request = Some(Instant::now());
        waited
    }
}

impl Default for RequestThrottle {
    fn default() -> Self {
        Self::new(persona::MIN_REQUEST_INTERVAL)
    }
}
