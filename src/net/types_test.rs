use super::*;

#[test]
fn item_deserializes_nullable_columns() {
    let item: Item = serde_json::from_value(serde_json::json!({
        "id": "6f1c",
        "name": "Widget",
        "description": null,
        "quantity": null,
        "user_id": "u1"
    }))
    .expect("item");
    assert_eq!(item.description, None);
    assert_eq!(item.quantity, None);
    assert_eq!(item.user_id.as_deref(), Some("u1"));
}

#[test]
fn item_deserializes_without_user_id() {
    let item: Item = serde_json::from_value(serde_json::json!({
        "id": "1",
        "name": "Bolt",
        "description": "M4",
        "quantity": 12
    }))
    .expect("item");
    assert_eq!(item.quantity, Some(12));
    assert_eq!(item.user_id, None);
}

#[test]
fn new_item_serializes_integer_quantity() {
    let payload = NewItem { name: "Nut".to_owned(), description: "M4".to_owned(), quantity: 5 };
    assert_eq!(
        serde_json::to_value(&payload).expect("json"),
        serde_json::json!({ "name": "Nut", "description": "M4", "quantity": 5 })
    );
}

#[test]
fn token_response_tolerates_missing_token() {
    let body: TokenResponse = serde_json::from_str(r#"{"token_type":"bearer"}"#).expect("body");
    assert_eq!(body.access_token, None);
}

#[test]
fn error_body_without_detail_is_none() {
    let body: ErrorBody = serde_json::from_str("{}").expect("body");
    assert!(body.detail.is_none());
}
