//! Uniform response envelopes.
//!
//! Every operation outcome handed to the UI layer is a [`ResponseEnvelope`]:
//! either built directly (`create_*_response`) when the caller already knows
//! the outcome, or produced by [`handle_api_response`] from whatever shape the
//! upstream API returned.

mod build;
mod inspect;
mod normalize;
mod types;

pub use build::{create_error_response, create_partial_success_response, create_success_response};
pub use inspect::{
    extract_error_messages, extract_warning_messages, has_errors, has_warnings,
    is_successful_response,
};
pub use normalize::handle_api_response;
pub use types::{Pagination, ResponseEnvelope, ResponseMetadata, ResponseStatus};
