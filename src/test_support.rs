//! Shared fakes for façade and session tests.

use std::sync::Mutex;

use crate::net::client::InventoryApi;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, Item, NewItem, NewUser, TokenResponse, User};
use crate::session::token_store::{AUTHORIZATION, AuthHeaders};

/// One recorded call: operation name plus the authorization header it carried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Call {
    pub op: &'static str,
    pub authorization: Option<String>,
}

/// Scripted [`InventoryApi`] that records every call it receives.
pub struct MockApi {
    calls: Mutex<Vec<Call>>,
    pub login: Result<TokenResponse, ApiError>,
    pub unit: Result<(), ApiError>,
    pub user: Result<User, ApiError>,
    pub items: Result<Vec<Item>, ApiError>,
    pub created: Result<Item, ApiError>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            login: Ok(TokenResponse {
                access_token: Some("tok123".to_owned()),
                token_type: Some("bearer".to_owned()),
            }),
            unit: Ok(()),
            user: Ok(user()),
            items: Ok(vec![item("1", "Widget")]),
            created: Ok(item("2", "Gadget")),
        }
    }
}

impl MockApi {
    pub fn failing_with(err: ApiError) -> Self {
        Self {
            login: Err(err.clone()),
            unit: Err(err.clone()),
            user: Err(err.clone()),
            items: Err(err.clone()),
            created: Err(err),
            ..Self::default()
        }
    }

    pub fn with_login(login: Result<TokenResponse, ApiError>) -> Self {
        Self { login, ..Self::default() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn ops(&self) -> Vec<&'static str> {
        self.calls().into_iter().map(|c| c.op).collect()
    }

    fn record(&self, op: &'static str, auth: Option<&AuthHeaders>) {
        let authorization = auth.and_then(|h| h.get(AUTHORIZATION).cloned());
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(Call { op, authorization });
        }
    }
}

pub fn user() -> User {
    User {
        id: "u1".to_owned(),
        email: "user@example.com".to_owned(),
        is_active: true,
        is_superuser: false,
        is_verified: true,
    }
}

pub fn item(id: &str, name: &str) -> Item {
    Item {
        id: id.to_owned(),
        name: name.to_owned(),
        description: Some("desc".to_owned()),
        quantity: Some(3),
        user_id: Some("u1".to_owned()),
    }
}

impl InventoryApi for MockApi {
    async fn login(&self, _credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        self.record("login", None);
        self.login.clone()
    }

    async fn register(&self, _user: &NewUser) -> Result<(), ApiError> {
        self.record("register", None);
        self.unit.clone()
    }

    async fn logout(&self, auth: &AuthHeaders) -> Result<(), ApiError> {
        self.record("logout", Some(auth));
        self.unit.clone()
    }

    async fn forgot_password(&self, _email: &str) -> Result<(), ApiError> {
        self.record("forgot_password", None);
        self.unit.clone()
    }

    async fn current_user(&self, auth: &AuthHeaders) -> Result<User, ApiError> {
        self.record("current_user", Some(auth));
        self.user.clone()
    }

    async fn list_items(&self, auth: &AuthHeaders) -> Result<Vec<Item>, ApiError> {
        self.record("list_items", Some(auth));
        self.items.clone()
    }

    async fn create_item(&self, auth: &AuthHeaders, _item: &NewItem) -> Result<Item, ApiError> {
        self.record("create_item", Some(auth));
        self.created.clone()
    }

    async fn delete_item(&self, auth: &AuthHeaders, _item_id: &str) -> Result<(), ApiError> {
        self.record("delete_item", Some(auth));
        self.unit.clone()
    }
}
