//! Inventory façade: list, create and delete items.
//!
//! Every operation needs a stored token and short-circuits with
//! [`NO_ACCESS_TOKEN`] before touching the network when there is none.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use super::form_result::FormResult;
use super::{NO_ACCESS_TOKEN, UNEXPECTED_ITEM_ERROR};
use crate::net::client::InventoryApi;
use crate::net::error::ApiError;
use crate::net::types::Item;
use crate::session::token_store::{AuthHeaders, TokenStore, is_authorized};
use crate::validation::validate_item;

fn authorized_headers<S: TokenStore + ?Sized>(tokens: &S) -> Option<AuthHeaders> {
    Some(tokens.auth_headers()).filter(is_authorized)
}

/// Server detail when it is a plain string, else `fallback`; transport
/// failures are logged and reported generically.
fn failure_message(operation: &str, err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Rejected { .. } => err.detail_str().unwrap_or(fallback).to_owned(),
        _ => {
            log::error!("{operation} error: {err}");
            UNEXPECTED_ITEM_ERROR.to_owned()
        }
    }
}

/// Fetch the signed-in user's items, or a message explaining why not.
///
/// # Errors
///
/// Returns the user-facing message when no token is stored or the request fails.
pub async fn fetch_items<A, S>(api: &A, tokens: &S) -> Result<Vec<Item>, String>
where
    A: InventoryApi,
    S: TokenStore + ?Sized,
{
    let Some(headers) = authorized_headers(tokens) else {
        return Err(NO_ACCESS_TOKEN.to_owned());
    };
    api.list_items(&headers)
        .await
        .map_err(|err| failure_message("fetch items", &err, "Failed to fetch items"))
}

/// Validate and create an item.
pub async fn add_item<A, S>(api: &A, tokens: &S, name: &str, description: &str, quantity: &str) -> FormResult
where
    A: InventoryApi,
    S: TokenStore + ?Sized,
{
    let Some(headers) = authorized_headers(tokens) else {
        return FormResult::Message(NO_ACCESS_TOKEN.to_owned());
    };
    let item = match validate_item(name, description, quantity) {
        Ok(item) => item,
        Err(errors) => return errors.into(),
    };

    match api.create_item(&headers, &item).await {
        Ok(created) => {
            log::debug!("created item {}", created.id);
            FormResult::success()
        }
        Err(err) => FormResult::Message(failure_message("add item", &err, "Failed to create item")),
    }
}

/// Delete an item by identifier.
pub async fn remove_item<A, S>(api: &A, tokens: &S, item_id: &str) -> FormResult
where
    A: InventoryApi,
    S: TokenStore + ?Sized,
{
    let Some(headers) = authorized_headers(tokens) else {
        return FormResult::Message(NO_ACCESS_TOKEN.to_owned());
    };

    match api.delete_item(&headers, item_id).await {
        Ok(()) => FormResult::success(),
        Err(err) => FormResult::Message(failure_message("remove item", &err, "Failed to delete item")),
    }
}
