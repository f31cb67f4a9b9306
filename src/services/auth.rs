//! Authentication façade: login, registration, logout, password reset.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures never reach the network. Server rejections become
//! `ServerValidation` with the server's own wording; anything else is logged
//! and reported as a generic `ServerError`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::UNEXPECTED_ERROR;
use super::form_result::FormResult;
use crate::net::client::InventoryApi;
use crate::net::error::{ApiError, error_message};
use crate::session::token_store::{TokenStore, is_authorized};
use crate::validation::{validate_login, validate_registration};

pub const PASSWORD_RESET_SENT: &str = "Password reset email sent. Please check your inbox.";

/// Rejections carry server wording; every other failure is unexpected.
fn remote_failure(operation: &str, err: &ApiError) -> FormResult {
    match err {
        ApiError::Rejected { .. } => FormResult::ServerValidation(error_message(err)),
        _ => {
            log::error!("{operation} error: {err}");
            FormResult::ServerError(UNEXPECTED_ERROR.to_owned())
        }
    }
}

/// Sign in and store the returned access token.
pub async fn login<A, S>(api: &A, tokens: &S, username: &str, password: &str) -> FormResult
where
    A: InventoryApi,
    S: TokenStore + ?Sized,
{
    let credentials = match validate_login(username, password) {
        Ok(credentials) => credentials,
        Err(errors) => return errors.into(),
    };

    match api.login(&credentials).await {
        Ok(resp) => match resp.access_token.filter(|t| !t.is_empty()) {
            Some(token) => {
                tokens.set(&token);
                FormResult::success()
            }
            None => {
                log::error!("login succeeded without an access token");
                FormResult::ServerError(UNEXPECTED_ERROR.to_owned())
            }
        },
        Err(err) => remote_failure("login", &err),
    }
}

/// Create an account. Does not sign the user in.
pub async fn register<A>(api: &A, email: &str, password: &str) -> FormResult
where
    A: InventoryApi,
{
    let user = match validate_registration(email, password) {
        Ok(user) => user,
        Err(errors) => return errors.into(),
    };

    match api.register(&user).await {
        Ok(()) => FormResult::success(),
        Err(err) => remote_failure("registration", &err),
    }
}

/// Sign out. Always succeeds and always leaves the token store empty.
pub async fn logout<A, S>(api: &A, tokens: &S) -> FormResult
where
    A: InventoryApi,
    S: TokenStore + ?Sized,
{
    let headers = tokens.auth_headers();
    if is_authorized(&headers) {
        // The server call only notifies; clearing the local token below does
        // not depend on its outcome.
        if let Err(err) = api.logout(&headers).await {
            log::warn!("logout notification failed: {err}");
        }
    }
    tokens.remove();
    FormResult::success()
}

/// Ask the server to email a password reset link.
pub async fn password_reset_request<A>(api: &A, email: &str) -> FormResult
where
    A: InventoryApi,
{
    match api.forgot_password(email).await {
        Ok(()) => FormResult::success_with(PASSWORD_RESET_SENT),
        Err(err) => remote_failure("password reset", &err),
    }
}
