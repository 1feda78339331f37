//! `fedapi backoff` – delay schedule under the effective retry config.

use fedapi_core::classify::categorize_status;
use fedapi_core::config::FedApiConfig;
use fedapi_core::retry::{RetryDecision, RetryPolicy};

pub fn run_backoff(cfg: &FedApiConfig, attempts: Option<u32>, status: u16) {
    let retry = cfg.retry_config();
    let policy = RetryPolicy::from(&retry);
    let kind = categorize_status(i64::from(status));
    let attempts = attempts.unwrap_or(retry.max_retries.saturating_add(1));

    println!("status {} -> {} (retryable: {})", status, kind, kind.is_retryable());
    println!("  {:>7}  {:>10}  {}", "Attempt", "Delay(ms)", "Decision");
    for attempt in 1..=attempts {
        let delay_ms = policy.retry_delay(attempt).as_millis();
        let decision = match policy.decide(attempt, kind) {
            RetryDecision::RetryAfter(_) => "retry",
            RetryDecision::NoRetry => "stop",
        };
        println!("  {:>7}  {:>10}  {}", attempt, delay_ms, decision);
    }
}
