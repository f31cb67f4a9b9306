//! Session controller shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app checks the stored token against `/users/me` once at startup and
//! again after login. Protected routes read the resulting [`SessionStatus`]
//! rather than issuing their own checks.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

pub mod token_store;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;

use crate::net::client::{HttpClient, InventoryApi};
use crate::net::types::User;
use token_store::{CookieTokenStore, TokenStore, is_authorized};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Checking,
    Authenticated,
    Unauthenticated,
}

/// Outcome of one session check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCheck {
    Authenticated(User),
    Unauthenticated,
}

impl SessionCheck {
    pub fn status(&self) -> SessionStatus {
        match self {
            Self::Authenticated(_) => SessionStatus::Authenticated,
            Self::Unauthenticated => SessionStatus::Unauthenticated,
        }
    }
}

/// Ask the server who the stored token belongs to.
///
/// Without a token this resolves immediately and makes no request.
pub async fn check_session<A, S>(api: &A, tokens: &S) -> SessionCheck
where
    A: InventoryApi,
    S: TokenStore + ?Sized,
{
    let headers = tokens.auth_headers();
    if !is_authorized(&headers) {
        return SessionCheck::Unauthenticated;
    }
    match api.current_user(&headers).await {
        Ok(user) => SessionCheck::Authenticated(user),
        Err(err) => {
            log::debug!("session check failed: {err}");
            SessionCheck::Unauthenticated
        }
    }
}

/// Context object giving pages the API client, the token store, and the
/// current session status.
///
/// Each check is tagged with a generation. Only the result of the latest
/// check (or a later sign-out) may change the status.
pub struct Session<A, S> {
    api: Arc<A>,
    tokens: Arc<S>,
    generation: Arc<AtomicU64>,
    status: RwSignal<SessionStatus>,
    user: RwSignal<Option<User>>,
}

impl<A, S> Clone for Session<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            tokens: Arc::clone(&self.tokens),
            generation: Arc::clone(&self.generation),
            status: self.status,
            user: self.user,
        }
    }
}

/// Session type used by the browser app.
pub type AppSession = Session<HttpClient, CookieTokenStore>;

impl<A, S> Session<A, S>
where
    A: InventoryApi + Send + Sync + 'static,
    S: TokenStore + Send + Sync + 'static,
{
    pub fn new(api: A, tokens: S) -> Self {
        Self {
            api: Arc::new(api),
            tokens: Arc::new(tokens),
            generation: Arc::new(AtomicU64::new(0)),
            status: RwSignal::new(SessionStatus::Checking),
            user: RwSignal::new(None),
        }
    }

    pub fn api(&self) -> Arc<A> {
        Arc::clone(&self.api)
    }

    pub fn tokens(&self) -> Arc<S> {
        Arc::clone(&self.tokens)
    }

    pub fn status(&self) -> ReadSignal<SessionStatus> {
        self.status.read_only()
    }

    pub fn user(&self) -> ReadSignal<Option<User>> {
        self.user.read_only()
    }

    fn apply(&self, check: SessionCheck) {
        let status = check.status();
        log::debug!("session status: {status:?}");
        match check {
            SessionCheck::Authenticated(user) => self.user.set(Some(user)),
            SessionCheck::Unauthenticated => self.user.set(None),
        }
        self.status.set(status);
    }

    /// Invalidate any check still in flight and mark the session as checking.
    /// Returns the generation the new check must report back with.
    pub fn begin_check(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.status.set(SessionStatus::Checking);
        generation
    }

    /// Apply the result of the check started as `generation`.
    ///
    /// Returns `false` and leaves the session untouched when a newer check or
    /// a sign-out has happened since.
    pub fn finish_check(&self, generation: u64, check: SessionCheck) -> bool {
        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!("dropping stale session check {generation}");
            return false;
        }
        self.apply(check);
        true
    }

    /// Mark the session as checking and re-run the server check.
    pub fn refresh(&self) {
        let generation = self.begin_check();
        #[cfg(feature = "csr")]
        {
            let session = self.clone();
            leptos::task::spawn_local(async move {
                let check = check_session(&*session.api, &*session.tokens).await;
                session.finish_check(generation, check);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = generation;
        }
    }

    /// Record a local sign-out without contacting the server.
    pub fn sign_out(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.apply(SessionCheck::Unauthenticated);
    }
}
