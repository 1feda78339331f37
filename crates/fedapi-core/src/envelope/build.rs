//! Direct constructors for callers that already know the outcome.

use super::types::{ResponseEnvelope, ResponseMetadata, ResponseStatus};

pub fn create_success_response<T>(data: T, message: impl Into<String>) -> ResponseEnvelope<T> {
    ResponseEnvelope {
        data: Some(data),
        message: message.into(),
        status: ResponseStatus::Success,
        errors: Vec::new(),
        warnings: Vec::new(),
        metadata: ResponseMetadata::now(),
    }
}

/// Error envelope with no payload. `errors` is stored exactly as given
/// (no dedup, no reordering); `status_code` lands in `metadata.status_code`.
pub fn create_error_response<T>(
    message: impl Into<String>,
    errors: Vec<String>,
    status_code: u16,
) -> ResponseEnvelope<T> {
    let mut metadata = ResponseMetadata::now();
    metadata.status_code = Some(status_code);
    ResponseEnvelope {
        data: None,
        message: message.into(),
        status: ResponseStatus::Error,
        errors,
        warnings: Vec::new(),
        metadata,
    }
}

pub fn create_partial_success_response<T>(
    data: T,
    message: impl Into<String>,
    warnings: Vec<String>,
) -> ResponseEnvelope<T> {
    ResponseEnvelope {
        data: Some(data),
        message: message.into(),
        status: ResponseStatus::PartialSuccess,
        errors: Vec::new(),
        warnings,
        metadata: ResponseMetadata::now(),
    }
}
