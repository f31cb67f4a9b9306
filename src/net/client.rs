//! REST client for the inventory API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: stubs returning [`ApiError::Unavailable`] since these endpoints
//! are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Rejected`] carrying the server's
//! `detail`; fetch and decode failures become `Network`/`Decode`. Nothing here
//! panics, so callers can always turn a failure into a renderable result.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use super::error::ApiError;
use super::types::{Credentials, Item, NewItem, NewUser, TokenResponse, User};
use crate::config::ApiConfig;
use crate::session::token_store::AuthHeaders;

pub const LOGIN_PATH: &str = "/auth/jwt/login";
pub const LOGOUT_PATH: &str = "/auth/jwt/logout";
pub const REGISTER_PATH: &str = "/auth/register";
pub const FORGOT_PASSWORD_PATH: &str = "/auth/forgot-password";
pub const CURRENT_USER_PATH: &str = "/users/me";
pub const ITEMS_PATH: &str = "/items/";

/// Remote operations consumed by the façade layer.
///
/// Authorized operations take the header map from
/// [`TokenStore::auth_headers`](crate::session::token_store::TokenStore::auth_headers)
/// and forward it untouched.
#[allow(async_fn_in_trait)]
pub trait InventoryApi {
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError>;
    async fn register(&self, user: &NewUser) -> Result<(), ApiError>;
    async fn logout(&self, auth: &AuthHeaders) -> Result<(), ApiError>;
    async fn forgot_password(&self, email: &str) -> Result<(), ApiError>;
    async fn current_user(&self, auth: &AuthHeaders) -> Result<User, ApiError>;
    async fn list_items(&self, auth: &AuthHeaders) -> Result<Vec<Item>, ApiError>;
    async fn create_item(&self, auth: &AuthHeaders, item: &NewItem) -> Result<Item, ApiError>;
    async fn delete_item(&self, auth: &AuthHeaders, item_id: &str) -> Result<(), ApiError>;
}

#[cfg(any(test, feature = "csr"))]
fn item_path(item_id: &str) -> String {
    format!("{ITEMS_PATH}{}", urlencoding::encode(item_id))
}

/// OAuth2 password-grant form body expected by the login endpoint.
#[cfg(any(test, feature = "csr"))]
fn login_form_body(credentials: &Credentials) -> String {
    format!(
        "username={}&password={}",
        urlencoding::encode(&credentials.username),
        urlencoding::encode(&credentials.password)
    )
}

/// Browser HTTP implementation of [`InventoryApi`].
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    config: ApiConfig,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg(feature = "csr")]
mod http {
    use gloo_net::http::{RequestBuilder, Response};

    use super::ApiError;
    use crate::net::types::ErrorBody;
    use crate::session::token_store::AuthHeaders;

    pub(super) fn with_headers(mut builder: RequestBuilder, headers: &AuthHeaders) -> RequestBuilder {
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        builder
    }

    pub(super) fn network(err: gloo_net::Error) -> ApiError {
        ApiError::Network(err.to_string())
    }

    /// Pass 2xx responses through; turn anything else into a rejection.
    pub(super) async fn check(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let detail = resp.json::<ErrorBody>().await.ok().and_then(|body| body.detail);
        Err(ApiError::rejected(status, detail))
    }

    pub(super) async fn decode<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl InventoryApi for HttpClient {
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.config.endpoint(LOGIN_PATH))
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(login_form_body(credentials))
                .map_err(http::network)?
                .send()
                .await
                .map_err(http::network)?;
            http::decode(http::check(resp).await?).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, user: &NewUser) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.config.endpoint(REGISTER_PATH))
                .json(user)
                .map_err(http::network)?
                .send()
                .await
                .map_err(http::network)?;
            http::check(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = user;
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self, auth: &AuthHeaders) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = gloo_net::http::Request::post(&self.config.endpoint(LOGOUT_PATH));
            let resp = http::with_headers(builder, auth)
                .send()
                .await
                .map_err(http::network)?;
            http::check(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = auth;
            Err(ApiError::Unavailable)
        }
    }

    async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let payload = serde_json::json!({ "email": email });
            let resp = gloo_net::http::Request::post(&self.config.endpoint(FORGOT_PASSWORD_PATH))
                .json(&payload)
                .map_err(http::network)?
                .send()
                .await
                .map_err(http::network)?;
            http::check(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = email;
            Err(ApiError::Unavailable)
        }
    }

    async fn current_user(&self, auth: &AuthHeaders) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = gloo_net::http::Request::get(&self.config.endpoint(CURRENT_USER_PATH));
            let resp = http::with_headers(builder, auth)
                .send()
                .await
                .map_err(http::network)?;
            http::decode(http::check(resp).await?).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = auth;
            Err(ApiError::Unavailable)
        }
    }

    async fn list_items(&self, auth: &AuthHeaders) -> Result<Vec<Item>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = gloo_net::http::Request::get(&self.config.endpoint(ITEMS_PATH));
            let resp = http::with_headers(builder, auth)
                .send()
                .await
                .map_err(http::network)?;
            http::decode(http::check(resp).await?).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = auth;
            Err(ApiError::Unavailable)
        }
    }

    async fn create_item(&self, auth: &AuthHeaders, item: &NewItem) -> Result<Item, ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = gloo_net::http::Request::post(&self.config.endpoint(ITEMS_PATH));
            let resp = http::with_headers(builder, auth)
                .json(item)
                .map_err(http::network)?
                .send()
                .await
                .map_err(http::network)?;
            http::decode(http::check(resp).await?).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (auth, item);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_item(&self, auth: &AuthHeaders, item_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = gloo_net::http::Request::delete(&self.config.endpoint(&item_path(item_id)));
            let resp = http::with_headers(builder, auth)
                .send()
                .await
                .map_err(http::network)?;
            http::check(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (auth, item_id);
            Err(ApiError::Unavailable)
        }
    }
}
