//! Envelope types shared by the builders, the normalizer and callers.

use serde::{Deserialize, Serialize};

use crate::timestamp::now_iso8601;

/// Outcome discriminator of an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    #[default]
    Success,
    Error,
    PartialSuccess,
}

impl ResponseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseStatus::Success => "success",
            ResponseStatus::Error => "error",
            ResponseStatus::PartialSuccess => "partial_success",
        }
    }

    /// Parse the wire form; unrecognized strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(ResponseStatus::Success),
            "error" => Some(ResponseStatus::Error),
            "partial_success" => Some(ResponseStatus::PartialSuccess),
            _ => None,
        }
    }
}

/// Page window reported by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    #[serde(default)]
    pub total_pages: u64,
}

impl Pagination {
    /// Build a page window; `total_pages` is `ceil(total / limit)`, or 0 when `limit` is 0.
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    /// ISO-8601 time the envelope was built.
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// HTTP status recorded by `create_error_response`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl ResponseMetadata {
    /// Metadata stamped with the current time and nothing else.
    pub fn now() -> Self {
        Self {
            timestamp: now_iso8601(),
            request_id: None,
            pagination: None,
            status_code: None,
        }
    }
}

/// Uniform wrapper around any operation outcome.
///
/// `data` is `None` for `Error` envelopes built by this crate; `errors` is empty
/// for `Success`. Envelopes are not mutated once handed to a caller, apart from
/// the `with_*` builders used while constructing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    pub data: Option<T>,
    pub message: String,
    #[serde(default)]
    pub status: ResponseStatus,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    pub metadata: ResponseMetadata,
}

impl<T> ResponseEnvelope<T> {
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.metadata.request_id = Some(request_id.into());
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.metadata.pagination = Some(pagination);
        self
    }

    /// Transform the payload, keeping every other field.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResponseEnvelope<U> {
        ResponseEnvelope {
            data: self.data.map(f),
            message: self.message,
            status: self.status,
            errors: self.errors,
            warnings: self.warnings,
            metadata: self.metadata,
        }
    }
}
