//! Failed transport call, as reported by the HTTP layer.

use serde_json::Value;
use std::fmt;

/// How a request failed. Built by the transport layer so classification never
/// has to probe an untyped error object.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportOutcome {
    /// A response arrived with a non-success status.
    Http {
        status: u16,
        /// Decoded response body; `Value::Null` when empty or not JSON.
        body: Value,
        /// Request id from a response header, if the server sent one.
        request_id: Option<String>,
    },
    /// The request was sent but nothing came back.
    NoResponse,
    /// The request never left the client (bad input, serialization, etc.).
    Client { message: Option<String> },
}

impl TransportOutcome {
    pub fn http(status: u16, body: Value) -> Self {
        TransportOutcome::Http {
            status,
            body,
            request_id: None,
        }
    }

    pub fn client(message: impl Into<String>) -> Self {
        TransportOutcome::Client {
            message: Some(message.into()),
        }
    }
}

impl fmt::Display for TransportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportOutcome::Http { status, .. } => write!(f, "HTTP {}", status),
            TransportOutcome::NoResponse => write!(f, "no response"),
            TransportOutcome::Client { message: Some(m) } => write!(f, "client error: {}", m),
            TransportOutcome::Client { message: None } => write!(f, "client error"),
        }
    }
}
