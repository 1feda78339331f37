use std::time::Duration;

use crate::classify::{categorize_error, ApiError, ErrorKind};
use crate::config::RetryConfig;

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Exponential backoff with a ceiling, gated by the error category.
///
/// Built from a [`RetryConfig`] and passed explicitly to whoever runs the
/// retry loop; it holds no state between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Attempt budget; no retry once `attempt >= max_retries`.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub base_delay: Duration,
    /// Growth factor per attempt.
    pub multiplier: f64,
    /// Upper bound on any single delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(cfg: &RetryConfig) -> Self {
        Self {
            max_retries: cfg.max_retries,
            base_delay: Duration::from_millis(cfg.retry_delay_ms),
            multiplier: cfg.backoff_multiplier,
            max_delay: Duration::from_millis(cfg.max_retry_delay_ms),
        }
    }
}

impl RetryPolicy {
    /// Delay before the retry following `attempt` (1-based):
    /// `base * multiplier^(attempt-1)`, capped at `max_delay` and rounded to
    /// the nearest whole millisecond (e.g. `100 * 1.3^3 = 219.7` gives 220ms).
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
        let base_ms = self.base_delay.as_millis() as f64;
        let max_ms = self.max_delay.as_millis() as f64;
        let raw = base_ms * self.multiplier.powi(exp);
        let ms = if raw.is_finite() { raw.clamp(0.0, max_ms) } else { max_ms };
        Duration::from_millis(ms.round() as u64)
    }

    /// False once the budget is spent, otherwise the kind's `retryable` flag.
    pub fn should_retry_kind(&self, kind: ErrorKind, attempt: u32) -> bool {
        if attempt >= self.max_retries {
            return false;
        }
        kind.is_retryable()
    }

    pub fn should_retry(&self, error: &ApiError, attempt: u32) -> bool {
        self.should_retry_kind(categorize_error(error), attempt)
    }

    /// Combine [`should_retry`](Self::should_retry) and [`retry_delay`](Self::retry_delay).
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        if self.should_retry_kind(kind, attempt) {
            RetryDecision::RetryAfter(self.retry_delay(attempt))
        } else {
            RetryDecision::NoRetry
        }
    }
}

/// Backoff delay in whole milliseconds (rounded to nearest) for `attempt` under `config`.
pub fn calculate_retry_delay(attempt: u32, config: &RetryConfig) -> u64 {
    RetryPolicy::from(config).retry_delay(attempt).as_millis() as u64
}

pub fn should_retry(error: &ApiError, attempt: u32, config: &RetryConfig) -> bool {
    RetryPolicy::from(config).should_retry(error, attempt)
}
