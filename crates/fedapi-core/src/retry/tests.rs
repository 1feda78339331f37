//! End-to-end: transport failure -> classification -> retry decision.

use super::*;
use crate::classify::{handle_api_error, parse_api_error, ErrorKind, TransportOutcome};
use crate::config::RetryConfig;
use serde_json::json;
use std::time::Duration;

#[test]
fn server_error_is_retried_with_base_delay() {
    let outcome = TransportOutcome::http(500, json!({"message": "DB down"}));
    let err = parse_api_error(&outcome);
    assert_eq!(err.status, 500);
    assert_eq!(err.message, "DB down");

    let handled = handle_api_error(&outcome);
    assert_eq!(handled.kind, ErrorKind::ServerError);
    assert!(handled.category.retryable);

    let cfg = RetryConfig::default();
    assert!(should_retry(&err, 1, &cfg));
    assert_eq!(calculate_retry_delay(1, &cfg), 1000);
}

#[test]
fn unauthenticated_is_never_retried() {
    let outcome = TransportOutcome::http(401, json!({}));
    let handled = handle_api_error(&outcome);
    assert_eq!(handled.kind, ErrorKind::Authentication);
    assert!(!handled.category.retryable);
    assert!(handled.category.action_required);

    let policy = RetryPolicy::default();
    assert!(!policy.should_retry(&handled.error, 1));
    assert_eq!(policy.decide(1, handled.kind), RetryDecision::NoRetry);
    assert_eq!(handled.display_message(), "Please log in again to continue.: HTTP 401 Error");
}

#[test]
fn network_failure_stops_at_budget() {
    let handled = handle_api_error(&TransportOutcome::NoResponse);
    let policy = RetryPolicy::default();
    assert_eq!(
        policy.decide(2, handled.kind),
        RetryDecision::RetryAfter(Duration::from_millis(2000))
    );
    assert!(!policy.should_retry(&handled.error, 3));
}

#[test]
fn precomputed_kind_matches_recomputed() {
    let policy = RetryPolicy::default();
    for status in [0u16, 400, 401, 403, 404, 408, 418, 500, 504] {
        let handled = handle_api_error(&TransportOutcome::http(status, json!(null)));
        for attempt in 1..=4 {
            assert_eq!(
                policy.should_retry_kind(handled.kind, attempt),
                policy.should_retry(&handled.error, attempt),
                "status {status} attempt {attempt}"
            );
        }
    }
}
