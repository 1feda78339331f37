//! Normalize an arbitrary upstream JSON response into a [`ResponseEnvelope`].
//!
//! A response of the form `{"data": {...}}` is unwrapped: the inner object may
//! carry its own `message`, `status`, `errors`, `warnings` and `metadata`, and
//! any field it lacks is defaulted. Anything else is treated as a bare payload.
//! Nothing here fails; malformed fields are replaced by defaults.

use serde_json::{Map, Value};

use super::types::{Pagination, ResponseEnvelope, ResponseMetadata, ResponseStatus};

pub fn handle_api_response(response: &Value, default_message: &str) -> ResponseEnvelope<Value> {
    match response.get("data") {
        Some(inner) if !inner.is_null() => from_inner(inner, default_message),
        _ => bare(response, default_message),
    }
}

fn bare(response: &Value, default_message: &str) -> ResponseEnvelope<Value> {
    ResponseEnvelope {
        data: Some(response.clone()),
        message: default_message.to_string(),
        status: ResponseStatus::Success,
        errors: Vec::new(),
        warnings: Vec::new(),
        metadata: ResponseMetadata::now(),
    }
}

fn from_inner(inner: &Value, default_message: &str) -> ResponseEnvelope<Value> {
    let Some(obj) = inner.as_object() else {
        return bare(inner, default_message);
    };

    let message = match obj.get("message").and_then(Value::as_str) {
        Some(m) => m.to_string(),
        None => {
            tracing::debug!("response has no message, using default");
            default_message.to_string()
        }
    };
    let status = obj
        .get("status")
        .and_then(Value::as_str)
        .and_then(ResponseStatus::parse)
        .unwrap_or_default();

    // Error envelopes never carry a payload. Otherwise a nested `data` is the
    // payload, falling back to the inner object itself.
    let data = match obj.get("data") {
        _ if status == ResponseStatus::Error => None,
        Some(d) if !d.is_null() => Some(d.clone()),
        _ => Some(inner.clone()),
    };

    ResponseEnvelope {
        data,
        message,
        status,
        errors: string_list(obj.get("errors")),
        warnings: string_list(obj.get("warnings")),
        metadata: metadata(obj.get("metadata").and_then(Value::as_object)),
    }
}

/// Strings pass through; other scalars and objects are rendered as JSON text.
fn string_list(v: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = v else {
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| !item.is_null())
        .map(|item| match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect()
}

fn metadata(obj: Option<&Map<String, Value>>) -> ResponseMetadata {
    let mut meta = ResponseMetadata::now();
    let Some(obj) = obj else {
        return meta;
    };
    if let Some(ts) = obj.get("timestamp").and_then(Value::as_str) {
        meta.timestamp = ts.to_string();
    }
    meta.request_id = obj
        .get("requestId")
        .and_then(Value::as_str)
        .map(str::to_string);
    meta.pagination = obj
        .get("pagination")
        .and_then(|p| serde_json::from_value::<Pagination>(p.clone()).ok())
        .map(|p| {
            if p.total_pages == 0 {
                Pagination::new(p.page, p.limit, p.total)
            } else {
                p
            }
        });
    meta.status_code = obj
        .get("statusCode")
        .and_then(Value::as_u64)
        .and_then(|c| u16::try_from(c).ok());
    meta
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_value_is_wrapped_as_success() {
        let env = handle_api_response(&json!([1, 2, 3]), "ok");
        assert_eq!(env.status, ResponseStatus::Success);
        assert_eq!(env.data, Some(json!([1, 2, 3])));
        assert_eq!(env.message, "ok");
        assert!(env.errors.is_empty());
        assert!(env.warnings.is_empty());

        let scalar = handle_api_response(&json!("pong"), "ok");
        assert_eq!(scalar.data, Some(json!("pong")));
    }

    #[test]
    fn object_without_data_field_is_the_payload() {
        let body = json!({"id": 7, "name": "Lions FC"});
        let env = handle_api_response(&body, "ok");
        assert_eq!(env.data, Some(body));
        assert_eq!(env.message, "ok");
    }

    #[test]
    fn null_data_counts_as_absent() {
        let body = json!({"data": null, "x": 1});
        let env = handle_api_response(&body, "ok");
        assert_eq!(env.data, Some(body));
    }

    #[test]
    fn error_status_passes_through() {
        let env = handle_api_response(&json!({"data": {"status": "error"}}), "ok");
        assert_eq!(env.status, ResponseStatus::Error);
        assert!(env.data.is_none());
    }

    #[test]
    fn error_status_drops_nested_data() {
        let body = json!({
            "data": {"status": "error", "message": "x", "errors": ["e"], "data": {"id": 1}}
        });
        let env = handle_api_response(&body, "ok");
        assert_eq!(env.status, ResponseStatus::Error);
        assert!(env.data.is_none());
        assert_eq!(env.message, "x");
        assert_eq!(env.errors, vec!["e".to_string()]);
    }

    #[test]
    fn upstream_message_wins_over_default() {
        let body = json!({"data": {"status": "error", "message": "Club license expired", "errors": ["license"]}});
        let env = handle_api_response(&body, "ok");
        assert_eq!(env.status, ResponseStatus::Error);
        assert_eq!(env.message, "Club license expired");
        assert_eq!(env.errors, vec!["license".to_string()]);
    }

    #[test]
    fn nested_envelope_fields_pass_through() {
        let body = json!({
            "data": {
                "data": {"members": 120},
                "message": "Members loaded",
                "status": "partial_success",
                "warnings": ["3 records incomplete"],
                "metadata": {
                    "timestamp": "2024-03-01T10:00:00.000Z",
                    "requestId": "abc-123",
                    "pagination": {"page": 2, "limit": 50, "total": 120}
                }
            }
        });
        let env = handle_api_response(&body, "ok");
        assert_eq!(env.status, ResponseStatus::PartialSuccess);
        assert_eq!(env.data, Some(json!({"members": 120})));
        assert_eq!(env.message, "Members loaded");
        assert_eq!(env.warnings, vec!["3 records incomplete".to_string()]);
        assert_eq!(env.metadata.timestamp, "2024-03-01T10:00:00.000Z");
        assert_eq!(env.metadata.request_id.as_deref(), Some("abc-123"));
        let page = env.metadata.pagination.unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn inner_object_without_nested_data_is_payload() {
        let inner = json!({"id": 1, "message": "Saved"});
        let env = handle_api_response(&json!({ "data": inner.clone() }), "ok");
        assert_eq!(env.message, "Saved");
        assert_eq!(env.status, ResponseStatus::Success);
        assert_eq!(env.data, Some(inner));
    }

    #[test]
    fn malformed_fields_are_defaulted() {
        let body = json!({
            "data": {
                "status": 42,
                "message": ["not", "a", "string"],
                "errors": "oops",
                "warnings": [1, null, "w"],
                "metadata": "nope"
            }
        });
        let env = handle_api_response(&body, "fallback");
        assert_eq!(env.status, ResponseStatus::Success);
        assert_eq!(env.message, "fallback");
        assert!(env.errors.is_empty());
        assert_eq!(env.warnings, vec!["1".to_string(), "w".to_string()]);
        assert!(!env.metadata.timestamp.is_empty());
        assert!(env.metadata.request_id.is_none());
    }

    #[test]
    fn unknown_status_string_defaults_to_success() {
        let env = handle_api_response(&json!({"data": {"status": "weird"}}), "ok");
        assert_eq!(env.status, ResponseStatus::Success);
    }

    #[test]
    fn scalar_inner_data_is_the_payload() {
        let env = handle_api_response(&json!({"data": 5}), "ok");
        assert_eq!(env.data, Some(json!(5)));
        assert_eq!(env.status, ResponseStatus::Success);
    }
}
