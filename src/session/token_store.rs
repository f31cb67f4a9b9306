//! Bearer-token persistence for the signed-in browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authorized request reads the token through [`TokenStore`]. The
//! browser build keeps it in the `accessToken` cookie; tests and non-browser
//! builds use [`MemoryTokenStore`].
//!
//! The client never looks inside the token. Its presence is the only signal
//! used for authorization decisions.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::collections::BTreeMap;
use std::sync::Mutex;

/// Cookie name holding the access token.
pub const TOKEN_COOKIE: &str = "accessToken";
/// Cookie lifetime set on every write (24 hours).
pub const TOKEN_MAX_AGE_SECS: u32 = 86_400;
pub const AUTHORIZATION: &str = "Authorization";

/// Header map attached to authorized requests. Empty when no token is stored.
pub type AuthHeaders = BTreeMap<&'static str, String>;

/// Persistence adapter for the session token.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn remove(&self);

    /// `Authorization: Bearer <token>`, or an empty map when signed out.
    /// An empty token counts as signed out.
    fn auth_headers(&self) -> AuthHeaders {
        let mut headers = AuthHeaders::new();
        if let Some(token) = self.get().filter(|token| !token.is_empty()) {
            headers.insert(AUTHORIZATION, format!("Bearer {token}"));
        }
        headers
    }
}

/// Whether `headers` carries an authorization entry.
pub fn is_authorized(headers: &AuthHeaders) -> bool {
    headers.contains_key(AUTHORIZATION)
}

/// Find `key` in a `document.cookie` string and URL-decode its value.
///
/// Entries without `=` are skipped, as are values that fail to decode.
pub fn parse_cookie(cookies: &str, key: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|entry| entry.trim().split_once('='))
        .find(|(name, _)| *name == key)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
}

/// Cookie assignment that stores `token` for [`TOKEN_MAX_AGE_SECS`].
pub fn set_cookie_string(token: &str) -> String {
    format!(
        "{TOKEN_COOKIE}={}; path=/; max-age={TOKEN_MAX_AGE_SECS}",
        urlencoding::encode(token)
    )
}

/// Cookie assignment that expires the token immediately.
pub fn clear_cookie_string() -> String {
    format!("{TOKEN_COOKIE}=; path=/; max-age=0")
}

/// Token store backed by `document.cookie`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieTokenStore;

#[cfg(feature = "csr")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast as _;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

impl TokenStore for CookieTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let cookies = html_document()?.cookie().ok()?;
            parse_cookie(&cookies, TOKEN_COOKIE).filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(&set_cookie_string(token));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn remove(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(&clear_cookie_string());
            }
        }
    }
}

/// In-process token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn remove(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}
