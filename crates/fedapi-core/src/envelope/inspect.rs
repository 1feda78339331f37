//! Read-only predicates and accessors over envelopes.

use super::types::{ResponseEnvelope, ResponseStatus};

pub fn is_successful_response<T>(response: &ResponseEnvelope<T>) -> bool {
    response.status == ResponseStatus::Success
}

pub fn has_errors<T>(response: &ResponseEnvelope<T>) -> bool {
    !response.errors.is_empty()
}

pub fn has_warnings<T>(response: &ResponseEnvelope<T>) -> bool {
    !response.warnings.is_empty()
}

pub fn extract_error_messages<T>(response: &ResponseEnvelope<T>) -> &[String] {
    &response.errors
}

pub fn extract_warning_messages<T>(response: &ResponseEnvelope<T>) -> &[String] {
    &response.warnings
}
