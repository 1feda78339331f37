//! Classify failed API calls into error kinds.
//!
//! A failure flows through three steps: the transport layer reports a
//! [`TransportOutcome`], [`parse_api_error`] extracts an [`ApiError`], and
//! [`categorize_error`] assigns one [`ErrorKind`] with its static
//! [`ErrorCategory`] (user text, retryable, action required).
//! [`handle_api_error`] runs both steps.

mod categorize;
mod display;
mod kind;
mod outcome;
mod parse;

pub use categorize::{
    categorize_error, categorize_status, handle_api_error, is_auth_error, is_network_error,
    HandledError,
};
pub use display::{create_user_friendly_message, format_error_for_display};
pub use kind::{ErrorCategory, ErrorKind};
pub use outcome::TransportOutcome;
pub use parse::{parse_api_error, ApiError};
