use super::*;
use serde_json::json;

#[test]
fn detail_message_uses_plain_string() {
    let detail = json!("LOGIN_BAD_CREDENTIALS");
    assert_eq!(detail_message(Some(&detail)).as_deref(), Some("LOGIN_BAD_CREDENTIALS"));
}

#[test]
fn detail_message_uses_object_reason() {
    let detail = json!({ "code": "REGISTER_INVALID_PASSWORD", "reason": "Password too weak" });
    assert_eq!(detail_message(Some(&detail)).as_deref(), Some("Password too weak"));
}

#[test]
fn detail_message_uses_first_validation_entry() {
    let detail = json!([
        { "loc": ["body", "email"], "msg": "value is not a valid email address" },
        { "loc": ["body", "password"], "msg": "field required" }
    ]);
    assert_eq!(
        detail_message(Some(&detail)).as_deref(),
        Some("value is not a valid email address")
    );
}

#[test]
fn detail_message_none_for_unusable_values() {
    assert_eq!(detail_message(None), None);
    assert_eq!(detail_message(Some(&json!(42))), None);
    assert_eq!(detail_message(Some(&json!(""))), None);
    assert_eq!(detail_message(Some(&json!({ "code": "X" }))), None);
}

#[test]
fn error_message_falls_back_for_transport_errors() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(error_message(&err), UNKNOWN_ERROR_MESSAGE);
}

#[test]
fn detail_str_only_for_string_rejections() {
    let err = ApiError::rejected(404, Some(json!("Item not found")));
    assert_eq!(err.detail_str(), Some("Item not found"));
    let err = ApiError::rejected(422, Some(json!([{ "msg": "bad" }])));
    assert_eq!(err.detail_str(), None);
}
