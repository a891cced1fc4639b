use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::debug;

use crate::error::{PaperFetchError, Result};

/// Token-bucket rate limiter for NCBI E-utilities compliance
///
/// NCBI allows 3 requests per second without an API key and 10 with one;
/// exceeding the limit can get an IP blocked. The limiter is cheap to clone
/// and all clones share the same bucket.
#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<Bucket>>,
}

struct Bucket {
    available: f64,
    capacity: f64,
    /// Tokens added per second
    refill_rate: f64,
    last_refill: Instant,
}

impl Bucket {
    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill).as_secs_f64();
        self.available = (self.available + elapsed * self.refill_rate).min(self.capacity);
        self.last_refill = now;
    }

    fn try_take(&mut self) -> bool {
        self.refill();
        if self.available >= 1.0 {
            self.available -= 1.0;
            true
        } else {
            false
        }
    }
}

impl RateLimiter {
    /// Create a limiter allowing `requests_per_second` requests
    pub fn new(requests_per_second: f64) -> Self {
        let capacity = requests_per_second.max(1.0);
        Self {
            inner: Arc::new(Mutex::new(Bucket {
                available: capacity,
                capacity,
                refill_rate: requests_per_second,
                last_refill: Instant::now(),
            })),
        }
    }

    /// Acquire a token, sleeping as needed to respect the configured rate
    pub async fn acquire(&self) -> Result<()> {
        // Two attempts: immediate, then once more after waiting out one
        // refill interval. A second failure means the clock went badly wrong.
        for attempt in 0..2 {
            let wait = {
                let mut bucket = self.inner.lock().await;
                if bucket.try_take() {
                    debug!(remaining = bucket.available, "rate limit token acquired");
                    return Ok(());
                }
                Duration::from_secs_f64(1.0 / bucket.refill_rate)
            };

            if attempt == 0 {
                debug!(wait_ms = wait.as_millis() as u64, "waiting for rate limit token");
                sleep(wait).await;
            }
        }

        Err(PaperFetchError::RateLimitExceeded)
    }

    /// Whether a token could be acquired right now (does not consume one)
    pub async fn check_available(&self) -> bool {
        let mut bucket = self.inner.lock().await;
        bucket.refill();
        bucket.available >= 1.0
    }

    /// Configured rate in requests per second
    pub async fn rate(&self) -> f64 {
        self.inner.lock().await.refill_rate
    }
}
