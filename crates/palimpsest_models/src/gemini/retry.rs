//! Retry loop and backoff policy for generation requests.

use crate::gemini::client::GeminiClient;
use palimpsest_core::GenerateRequest;
use palimpsest_error::{GeminiError, GeminiErrorKind};
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Backoff parameters for the generation retry loop.
///
/// Defaults mirror production behavior: a fixed 3 second pause when the
/// endpoint reports overload, and a jittered pause drawn uniformly from
/// [1 s, 3 s) for other transient failures.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Fixed pause inserted after a 503.
    pub overload_backoff: Duration,
    /// Lower bound of the jittered pause.
    pub jitter_min: Duration,
    /// Upper bound (exclusive) of the jittered pause.
    pub jitter_max: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            overload_backoff: Duration::from_secs(3),
            jitter_min: Duration::from_secs(1),
            jitter_max: Duration::from_secs(3),
        }
    }
}

impl RetryPolicy {
    /// Pause to insert before the attempt that follows `kind`.
    fn backoff_for(&self, kind: &GeminiErrorKind) -> Duration {
        match kind {
            GeminiErrorKind::Overloaded => self.overload_backoff,
            _ => {
                let (lo, hi) = (self.jitter_min.as_secs_f64(), self.jitter_max.as_secs_f64());
                if hi <= lo {
                    return self.jitter_min;
                }
                Duration::from_secs_f64(rand::thread_rng().gen_range(lo..hi))
            }
        }
    }
}

/// Drives single attempts until success, a terminal error, or an exhausted
/// attempt budget.
///
/// The budget is `request.retries()` attempts total. Every retryable
/// failure, 503 included, consumes one attempt; exhaustion surfaces the
/// last attempt's error.
pub(crate) async fn generate_with_retry(
    client: &GeminiClient,
    request: &GenerateRequest,
    policy: &RetryPolicy,
) -> Result<String, GeminiError> {
    let max_attempts = (*request.retries()).max(1);
    let mut attempt = 0_u32;

    loop {
        attempt += 1;
        match client.generate_once(request).await {
            Ok(text) => {
                if attempt > 1 {
                    debug!(attempt, "Generation succeeded after retry");
                }
                return Ok(text);
            }
            Err(err) => {
                if !err.is_retryable() {
                    warn!(attempt, error = %err, "Non-retryable error, failing immediately");
                    return Err(err);
                }
                if attempt >= max_attempts {
                    warn!(attempt, error = %err, "All retry attempts exhausted");
                    return Err(err);
                }

                let backoff = policy.backoff_for(&err.kind);
                debug!(
                    attempt,
                    backoff_ms = backoff.as_millis() as u64,
                    error = %err,
                    "Retrying after transient failure"
                );
                sleep(backoff).await;
            }
        }
    }
}
