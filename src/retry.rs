use std::future::Future;
use std::time::Duration;

use tokio_retry::strategy::{jitter, ExponentialBackoff};
use tokio_retry::RetryIf;
use tracing::warn;

use crate::error::{PaperFetchError, Result};

/// Retry policy for transient NCBI API failures
///
/// Server errors (5xx) and throttling responses (429) are retried with
/// exponential backoff and jitter; everything else fails immediately.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries after the initial attempt
    pub max_retries: usize,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Upper bound on the backoff delay
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryConfig {
    fn strategy(&self) -> impl Iterator<Item = Duration> {
        // ExponentialBackoff::from_millis(base) yields base^n; base 2 with
        // the initial delay as factor gives plain doubling.
        let factor = (self.initial_delay.as_millis() as u64 / 2).max(1);
        ExponentialBackoff::from_millis(2)
            .factor(factor)
            .max_delay(self.max_delay)
            .map(jitter)
            .take(self.max_retries)
    }
}

/// Run `operation`, retrying retryable errors per `config`
pub(crate) async fn with_retry<T, F, Fut>(
    operation: F,
    config: &RetryConfig,
    description: &str,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    RetryIf::spawn(config.strategy(), operation, |err: &PaperFetchError| {
        let retryable = err.is_retryable();
        if retryable {
            warn!(error = %err, "{description} failed, retrying");
        }
        retryable
    })
    .await
}
