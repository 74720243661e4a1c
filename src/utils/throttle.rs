//! Self-imposed request pacing.

use std::time::Duration;

use tokio::time::Instant;

/// Enforces a minimum interval between consecutive requests.
///
/// This is a plain spacing delay: no token bucket and no reaction to 429s.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    /// Allow at most `requests_per_second` requests per second.
    ///
    /// Zero disables pacing.
    pub fn per_second(requests_per_second: u32) -> Self {
        let interval = match requests_per_second {
            0 => Duration::ZERO,
            n => (Duration::from_secs(1) / n).max(Duration::from_millis(1)),
        };
        Self {
            interval,
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until the next request is allowed, then mark it as sent.
    pub async fn wait(&mut self) {
        if let Some(last) = self.last {
            tokio::time::sleep_until(last + self.interval).await;
        }
        self.last = Some(Instant::now());
    }
}
