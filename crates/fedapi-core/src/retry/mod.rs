//! Retry and backoff policy.
//!
//! [`RetryPolicy`] decides whether a classified error is worth another attempt
//! (attempt budget and category both have to allow it) and how long to wait.
//! [`run_with_retry`] and [`run_with_retry_async`] are ready-made loops for
//! callers that do not need to drive the state machine themselves.

mod error;
mod policy;
mod run;

pub use error::RetryError;
pub use policy::{calculate_retry_delay, should_retry, RetryDecision, RetryPolicy};
pub use run::{run_with_retry, run_with_retry_async, RetryPhase};

#[cfg(test)]
mod tests;
