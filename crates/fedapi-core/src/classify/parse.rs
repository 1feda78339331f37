//! Extract a uniform [`ApiError`] from a failed transport call.

use serde::Serialize;
use serde_json::Value;

use super::outcome::TransportOutcome;
use crate::timestamp::now_iso8601;

/// Error details pulled out of a failed call. `status` 0 means no response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub message: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ApiError {
    /// Error for `status` with the given message and nothing else.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
            code: None,
            details: None,
            timestamp: now_iso8601(),
            request_id: None,
        }
    }
}

pub fn parse_api_error(outcome: &TransportOutcome) -> ApiError {
    match outcome {
        TransportOutcome::Http {
            status,
            body,
            request_id,
        } => {
            let message = str_field(body, "message")
                .or_else(|| str_field(body, "error"))
                .unwrap_or_else(|| format!("HTTP {} Error", status));
            let details = body
                .get("details")
                .or_else(|| body.get("errors"))
                .filter(|v| !v.is_null())
                .cloned();
            ApiError {
                message,
                status: *status,
                code: str_field(body, "code"),
                details,
                timestamp: now_iso8601(),
                request_id: request_id.clone().or_else(|| str_field(body, "requestId")),
            }
        }
        TransportOutcome::NoResponse => ApiError {
            code: Some("NO_RESPONSE".to_string()),
            ..ApiError::new(0, "No response received from server")
        },
        TransportOutcome::Client { message } => ApiError {
            code: Some("UNKNOWN".to_string()),
            ..ApiError::new(
                0,
                message
                    .clone()
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "An unexpected error occurred".to_string()),
            )
        },
    }
}

fn str_field(body: &Value, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn http_body_fields_are_extracted() {
        let outcome = TransportOutcome::Http {
            status: 422,
            body: json!({
                "message": "Invalid CPF",
                "code": "E_CPF",
                "details": {"field": "cpf"},
                "requestId": "body-id"
            }),
            request_id: Some("header-id".to_string()),
        };
        let err = parse_api_error(&outcome);
        assert_eq!(err.status, 422);
        assert_eq!(err.message, "Invalid CPF");
        assert_eq!(err.code.as_deref(), Some("E_CPF"));
        assert_eq!(err.details, Some(json!({"field": "cpf"})));
        assert_eq!(err.request_id.as_deref(), Some("header-id"));
    }

    #[test]
    fn http_without_message_gets_status_text() {
        let err = parse_api_error(&TransportOutcome::http(502, Value::Null));
        assert_eq!(err.message, "HTTP 502 Error");
        assert_eq!(err.status, 502);
        assert!(err.code.is_none());
        assert!(err.details.is_none());
    }

    #[test]
    fn http_falls_back_to_error_field_and_body_request_id() {
        let body = json!({"error": "Token expired", "errors": ["exp"], "requestId": "r-9"});
        let err = parse_api_error(&TransportOutcome::http(401, body));
        assert_eq!(err.message, "Token expired");
        assert_eq!(err.details, Some(json!(["exp"])));
        assert_eq!(err.request_id.as_deref(), Some("r-9"));
    }

    #[test]
    fn no_response() {
        let err = parse_api_error(&TransportOutcome::NoResponse);
        assert_eq!(err.status, 0);
        assert_eq!(err.message, "No response received from server");
        assert_eq!(err.code.as_deref(), Some("NO_RESPONSE"));
    }

    #[test]
    fn client_error_with_and_without_message() {
        let err = parse_api_error(&TransportOutcome::client("invalid date"));
        assert_eq!(err.status, 0);
        assert_eq!(err.message, "invalid date");
        assert_eq!(err.code.as_deref(), Some("UNKNOWN"));

        let err = parse_api_error(&TransportOutcome::Client { message: None });
        assert_eq!(err.message, "An unexpected error occurred");
    }

    #[test]
    fn timestamp_is_stamped() {
        let err = parse_api_error(&TransportOutcome::NoResponse);
        assert!(chrono::DateTime::parse_from_rfc3339(&err.timestamp).is_ok());
    }
}
