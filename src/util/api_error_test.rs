use super::*;
use crate::notifications::MemoryDom;
use crate::timing::VirtualTimer;
use serde_json::json;
use std::rc::Rc;

fn response(status: u16, body: Option<Value>) -> ApiFailure {
    ApiFailure::Response { status, body }
}

#[test]
fn body_error_field_wins_over_status() {
    let failure = response(404, Some(json!({ "error": "Video too large" })));
    assert_eq!(api_error_message(&failure, DEFAULT_API_ERROR), "Video too large");
}

#[test]
fn known_statuses_have_fixed_messages() {
    assert_eq!(api_error_message(&response(404, None), DEFAULT_API_ERROR), "Service not found");
    assert_eq!(
        api_error_message(&response(500, Some(json!({ "detail": "x" }))), DEFAULT_API_ERROR),
        "Internal server error"
    );
}

#[test]
fn other_statuses_use_fallback() {
    assert_eq!(api_error_message(&response(403, None), "Upload failed"), "Upload failed");
    assert_eq!(
        api_error_message(&response(400, Some(json!({ "error": "" }))), DEFAULT_API_ERROR),
        DEFAULT_API_ERROR
    );
}

#[test]
fn non_text_error_field_is_ignored() {
    let failure = response(500, Some(json!({ "error": { "code": 7 } })));
    assert_eq!(failure.server_message(), None);
    assert_eq!(api_error_message(&failure, DEFAULT_API_ERROR), "Internal server error");
}

#[test]
fn transport_failures() {
    assert_eq!(
        api_error_message(&ApiFailure::NoResponse, DEFAULT_API_ERROR),
        "No response from server"
    );
    assert_eq!(
        api_error_message(&ApiFailure::Setup("bad url".to_owned()), DEFAULT_API_ERROR),
        "bad url"
    );
    assert_eq!(
        api_error_message(&ApiFailure::Setup(String::new()), DEFAULT_API_ERROR),
        DEFAULT_API_ERROR
    );
}

#[test]
fn handle_api_error_raises_escaped_error_toast() {
    let dom = MemoryDom::new();
    let center = NotificationCenter::new(dom.clone(), Rc::new(VirtualTimer::new()));
    let failure = response(422, Some(json!({ "error": "<b>bad</b> file" })));

    let id = handle_api_error(&center, &failure, DEFAULT_API_ERROR);
    assert_eq!(center.severity(id), Some(Severity::Error));
    let markup = dom.markup_of(&center.dom_id(id)).expect("toast markup");
    assert!(markup.contains("&lt;b&gt;bad&lt;/b&gt; file"));
    assert!(markup.contains("text-danger"));
}
