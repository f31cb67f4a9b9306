use super::*;

#[test]
fn item_path_appends_encoded_id() {
    assert_eq!(item_path("42"), "/items/42");
    assert_eq!(item_path("a/b"), "/items/a%2Fb");
}

#[test]
fn login_form_body_encodes_credentials() {
    let credentials = Credentials {
        username: "user@example.com".to_owned(),
        password: "p&ss word".to_owned(),
    };
    assert_eq!(
        login_form_body(&credentials),
        "username=user%40example.com&password=p%26ss%20word"
    );
}

#[cfg(not(feature = "csr"))]
#[test]
fn http_client_is_unavailable_outside_browser() {
    let client = HttpClient::default();
    let result = futures::executor::block_on(client.list_items(&AuthHeaders::new()));
    assert_eq!(result, Err(ApiError::Unavailable));
}
