use super::*;

#[test]
fn from_raw_defaults_when_unset() {
    assert_eq!(ApiConfig::from_raw(None).base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_raw_defaults_when_blank() {
    assert_eq!(ApiConfig::from_raw(Some("   ")).base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_raw_trims_trailing_slashes() {
    let config = ApiConfig::from_raw(Some(" https://api.example.com// "));
    assert_eq!(config.base_url, "https://api.example.com");
}

#[test]
fn endpoint_joins_with_single_slash() {
    let config = ApiConfig::from_raw(Some("https://api.example.com/"));
    assert_eq!(config.endpoint("/items/"), "https://api.example.com/items/");
    assert_eq!(config.endpoint("users/me"), "https://api.example.com/users/me");
}
