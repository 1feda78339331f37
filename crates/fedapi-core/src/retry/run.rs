//! Retry loop: run an operation until it succeeds or the policy says stop.
//!
//! The loop walks `Idle -> Attempting -> {Success, Retrying, Failed}`; from
//! `Retrying` it waits the backoff delay and goes back to `Attempting` with the
//! next attempt number. An optional abort flag (set by another thread or task)
//! is checked around each wait.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::error::RetryError;
use super::policy::{RetryDecision, RetryPolicy};
use crate::classify::{handle_api_error, TransportOutcome};

/// Phase of one logical operation's retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPhase {
    Idle,
    Attempting,
    Retrying,
    Success,
    Failed,
}

impl RetryPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            RetryPhase::Idle => "idle",
            RetryPhase::Attempting => "attempting",
            RetryPhase::Retrying => "retrying",
            RetryPhase::Success => "success",
            RetryPhase::Failed => "failed",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RetryPhase::Success | RetryPhase::Failed)
    }
}

/// Per-operation loop state: current phase and 1-based attempt number.
struct RetryState {
    phase: RetryPhase,
    attempt: u32,
}

impl RetryState {
    fn new() -> Self {
        Self {
            phase: RetryPhase::Idle,
            attempt: 1,
        }
    }

    fn enter(&mut self, next: RetryPhase) {
        tracing::trace!(
            from = self.phase.as_str(),
            to = next.as_str(),
            attempt = self.attempt,
            "retry phase"
        );
        self.phase = next;
    }

    /// Classify a failure and either return the wait before the next attempt
    /// or the terminal error.
    fn on_failure(
        &mut self,
        policy: &RetryPolicy,
        outcome: &TransportOutcome,
    ) -> Result<Duration, RetryError> {
        let handled = handle_api_error(outcome);
        match policy.decide(self.attempt, handled.kind) {
            RetryDecision::RetryAfter(delay) => {
                self.enter(RetryPhase::Retrying);
                tracing::warn!(
                    attempt = self.attempt,
                    delay_ms = delay.as_millis() as u64,
                    kind = handled.kind.as_str(),
                    "request failed, retrying: {}",
                    handled.error.message
                );
                Ok(delay)
            }
            RetryDecision::NoRetry => {
                self.enter(RetryPhase::Failed);
                tracing::info!(
                    attempts = self.attempt,
                    kind = handled.kind.as_str(),
                    "giving up: {}",
                    handled.error.message
                );
                let attempts = self.attempt;
                Err(if handled.category.retryable {
                    RetryError::Exhausted {
                        attempts,
                        error: handled,
                    }
                } else {
                    RetryError::Rejected {
                        attempts,
                        error: handled,
                    }
                })
            }
        }
    }

    fn check_abort(&mut self, abort: Option<&AtomicBool>) -> Result<(), RetryError> {
        if abort.is_some_and(|a| a.load(Ordering::Relaxed)) {
            self.enter(RetryPhase::Failed);
            tracing::info!(attempts = self.attempt, "retry aborted");
            return Err(RetryError::Aborted {
                attempts: self.attempt,
            });
        }
        Ok(())
    }

    fn next_attempt(&mut self) {
        self.attempt += 1;
        self.enter(RetryPhase::Attempting);
    }
}

/// Runs `f` until it succeeds or the retry policy says to stop.
/// On retryable failure, sleeps the calling thread for the backoff duration.
pub fn run_with_retry<T, F>(
    policy: &RetryPolicy,
    abort: Option<&AtomicBool>,
    mut f: F,
) -> Result<T, RetryError>
where
    F: FnMut() -> Result<T, TransportOutcome>,
{
    let mut state = RetryState::new();
    state.enter(RetryPhase::Attempting);
    loop {
        match f() {
            Ok(v) => {
                state.enter(RetryPhase::Success);
                return Ok(v);
            }
            Err(outcome) => {
                let delay = state.on_failure(policy, &outcome)?;
                state.check_abort(abort)?;
                std::thread::sleep(delay);
                state.check_abort(abort)?;
                state.next_attempt();
            }
        }
    }
}

/// Async variant of [`run_with_retry`]; waits with `tokio::time::sleep` so other
/// tasks keep running during the backoff.
pub async fn run_with_retry_async<T, F, Fut>(
    policy: &RetryPolicy,
    abort: Option<&AtomicBool>,
    mut f: F,
) -> Result<T, RetryError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, TransportOutcome>>,
{
    let mut state = RetryState::new();
    state.enter(RetryPhase::Attempting);
    loop {
        match f().await {
            Ok(v) => {
                state.enter(RetryPhase::Success);
                return Ok(v);
            }
            Err(outcome) => {
                let delay = state.on_failure(policy, &outcome)?;
                state.check_abort(abort)?;
                tokio::time::sleep(delay).await;
                state.check_abort(abort)?;
                state.next_attempt();
            }
        }
    }
}
