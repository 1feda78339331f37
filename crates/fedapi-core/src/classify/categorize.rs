//! Classify HTTP statuses and parsed errors into [`ErrorKind`]s.

use thiserror::Error;

use super::kind::{ErrorCategory, ErrorKind};
use super::outcome::TransportOutcome;
use super::parse::{parse_api_error, ApiError};

/// Map any status to exactly one kind. Total over every integer: 0 is network,
/// listed 4xx codes map to their kinds, 408/504 are timeouts, remaining
/// values >= 500 are server errors, and everything else is unknown.
pub fn categorize_status(status: i64) -> ErrorKind {
    match status {
        0 => ErrorKind::Network,
        400 => ErrorKind::Validation,
        401 => ErrorKind::Authentication,
        403 => ErrorKind::Authorization,
        404 => ErrorKind::NotFound,
        408 | 504 => ErrorKind::Timeout,
        s if s >= 500 => ErrorKind::ServerError,
        _ => ErrorKind::Unknown,
    }
}

pub fn categorize_error(error: &ApiError) -> ErrorKind {
    categorize_status(i64::from(error.status))
}

/// A parsed error together with its classification.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {}", .error.message)]
pub struct HandledError {
    pub error: ApiError,
    pub kind: ErrorKind,
    pub category: &'static ErrorCategory,
}

impl HandledError {
    pub fn from_api_error(error: ApiError) -> Self {
        let kind = categorize_error(&error);
        Self {
            error,
            kind,
            category: kind.category(),
        }
    }

    /// Text to show the user; see [`format_error_for_display`](super::format_error_for_display).
    pub fn display_message(&self) -> String {
        super::display::format_error_for_display(&self.error, self.category)
    }
}

/// Parse then categorize a failed transport call.
pub fn handle_api_error(outcome: &TransportOutcome) -> HandledError {
    let handled = HandledError::from_api_error(parse_api_error(outcome));
    tracing::debug!(
        status = handled.error.status,
        kind = handled.kind.as_str(),
        request_id = handled.error.request_id.as_deref().unwrap_or("-"),
        "classified api error"
    );
    handled
}

pub fn is_network_error(error: &ApiError) -> bool {
    categorize_error(error) == ErrorKind::Network
}

/// True for both authentication (401) and authorization (403) failures.
pub fn is_auth_error(error: &ApiError) -> bool {
    matches!(
        categorize_error(error),
        ErrorKind::Authentication | ErrorKind::Authorization
    )
}
