//! `fedapi simulate <status>...` – drive the async retry loop with scripted responses.

use anyhow::Result;
use fedapi_core::classify::TransportOutcome;
use fedapi_core::config::FedApiConfig;
use fedapi_core::retry::{run_with_retry_async, RetryPolicy};
use serde_json::Value;
use std::time::Duration;

/// Status for the given 1-based attempt; the last scripted status repeats.
fn scripted(statuses: &[u16], attempt: usize) -> u16 {
    statuses
        .get(attempt - 1)
        .or_else(|| statuses.last())
        .copied()
        .unwrap_or(0)
}

pub async fn run_simulate(cfg: &FedApiConfig, statuses: &[u16], no_wait: bool) -> Result<()> {
    let mut policy = RetryPolicy::from(&cfg.retry_config());
    if no_wait {
        policy.base_delay = Duration::ZERO;
        policy.max_delay = Duration::ZERO;
    }

    let mut attempt = 0usize;
    let result = run_with_retry_async(&policy, None, || {
        attempt += 1;
        let status = scripted(statuses, attempt);
        println!("attempt {}: status {}", attempt, status);
        async move {
            match status {
                0 => Err(TransportOutcome::NoResponse),
                200..=299 => Ok(status),
                s => Err(TransportOutcome::http(s, Value::Null)),
            }
        }
    })
    .await;

    match result {
        Ok(status) => println!("succeeded with status {}", status),
        Err(e) => {
            println!("failed: {}", e);
            if let Some(handled) = e.handled() {
                println!("user message: {}", handled.display_message());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::scripted;

    #[test]
    fn last_status_repeats() {
        let s = [503, 200];
        assert_eq!(scripted(&s, 1), 503);
        assert_eq!(scripted(&s, 2), 200);
        assert_eq!(scripted(&s, 5), 200);
    }
}
