//! Retry handling for transient research-endpoint failures.
//!
//! A 429 carries the server's own `Retry-After` interval, and the policy
//! honors it verbatim rather than guessing. Network-level failures fall back
//! to an exponential schedule derived from `backoff_base_secs`. Everything
//! else (404s, unexpected statuses, decode failures, bad base URLs) would
//! fail identically on a second try and is returned at once.

use std::future::Future;
use std::time::Duration;

use crate::error::ResearchError;

#[derive(Debug, Clone, Copy)]
pub(crate) struct RetryPolicy {
    /// Additional attempts after the first failure.
    pub max_retries: u32,
    /// Base of the exponential schedule used for network failures.
    pub backoff_base_secs: u64,
}

impl RetryPolicy {
    /// The wait before retrying after `err`, or `None` when the error is not
    /// worth retrying. `attempt` is zero-based and only feeds the
    /// exponential schedule; a throttled response dictates its own wait.
    fn delay_after(&self, attempt: u32, err: &ResearchError) -> Option<Duration> {
        match err {
            ResearchError::RateLimited { retry_after_secs } => {
                Some(Duration::from_secs(*retry_after_secs))
            }
            ResearchError::Http(_) => Some(Duration::from_secs(
                self.backoff_base_secs
                    .saturating_mul(2u64.saturating_pow(attempt)),
            )),
            _ => None,
        }
    }

    /// Runs `operation` up to `max_retries + 1` times, sleeping between
    /// attempts per [`Self::delay_after`]. The last error wins when the
    /// budget runs out.
    pub(crate) async fn run<T, F, Fut>(&self, mut operation: F) -> Result<T, ResearchError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ResearchError>>,
    {
        for attempt in 0..self.max_retries {
            let err = match operation().await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };
            let Some(delay) = self.delay_after(attempt, &err) else {
                return Err(err);
            };
            tracing::warn!(
                attempt,
                delay_secs = delay.as_secs(),
                error = %err,
                "research request failed; waiting before retry"
            );
            tokio::time::sleep(delay).await;
        }
        operation().await
    }
}
