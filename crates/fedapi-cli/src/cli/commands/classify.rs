//! `fedapi classify <status>` – kind, category and display text for a status.

use fedapi_core::classify::{handle_api_error, TransportOutcome};
use serde_json::{json, Value};

pub fn run_classify(status: u16, message: Option<&str>) {
    let outcome = match (status, message) {
        (0, None) => TransportOutcome::NoResponse,
        (0, Some(m)) => TransportOutcome::client(m),
        (s, m) => TransportOutcome::http(s, m.map_or(Value::Null, |m| json!({ "message": m }))),
    };
    let handled = handle_api_error(&outcome);
    let cat = handled.category;
    println!("{:<16} {}", "Kind", handled.kind);
    println!("{:<16} {}", "Title", cat.title);
    println!("{:<16} {}", "Description", cat.description);
    println!("{:<16} {}", "Retryable", cat.retryable);
    println!("{:<16} {}", "Action required", cat.action_required);
    println!("{:<16} {}", "Message", handled.display_message());
}
