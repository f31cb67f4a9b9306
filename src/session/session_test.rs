use futures::executor::block_on;
use leptos::prelude::*;

use super::token_store::MemoryTokenStore;
use super::*;
use crate::net::error::ApiError;
use crate::test_support::{MockApi, user};

#[test]
fn check_session_without_token_makes_no_request() {
    let api = MockApi::default();
    let tokens = MemoryTokenStore::default();

    let check = block_on(check_session(&api, &tokens));

    assert_eq!(check, SessionCheck::Unauthenticated);
    assert!(api.calls().is_empty());
}

#[test]
fn check_session_with_valid_token_is_authenticated() {
    let api = MockApi::default();
    let tokens = MemoryTokenStore::with_token("tok123");

    let check = block_on(check_session(&api, &tokens));

    assert_eq!(check, SessionCheck::Authenticated(user()));
    assert_eq!(check.status(), SessionStatus::Authenticated);
    assert_eq!(api.calls()[0].authorization.as_deref(), Some("Bearer tok123"));
}

#[test]
fn check_session_error_is_unauthenticated() {
    let api = MockApi::failing_with(ApiError::rejected(401, None));
    let tokens = MemoryTokenStore::with_token("expired");

    let check = block_on(check_session(&api, &tokens));

    assert_eq!(check.status(), SessionStatus::Unauthenticated);
    assert_eq!(api.ops(), vec!["current_user"]);
}

#[test]
fn check_session_network_failure_is_unauthenticated() {
    let api = MockApi::failing_with(ApiError::Network("offline".to_owned()));
    let tokens = MemoryTokenStore::with_token("tok");

    assert_eq!(block_on(check_session(&api, &tokens)), SessionCheck::Unauthenticated);
}

#[test]
fn session_status_defaults_to_checking() {
    assert_eq!(SessionStatus::default(), SessionStatus::Checking);
}

// =============================================================
// Session controller
// =============================================================

fn with_session(f: impl FnOnce(Session<MockApi, MemoryTokenStore>)) {
    let owner = leptos::reactive::owner::Owner::new();
    owner.with(|| f(Session::new(MockApi::default(), MemoryTokenStore::default())));
}

#[test]
fn new_session_starts_checking() {
    with_session(|session| {
        assert_eq!(session.status().get_untracked(), SessionStatus::Checking);
        assert_eq!(session.user().get_untracked(), None);
    });
}

#[test]
fn finish_check_applies_current_result() {
    with_session(|session| {
        let generation = session.begin_check();

        assert!(session.finish_check(generation, SessionCheck::Authenticated(user())));
        assert_eq!(session.status().get_untracked(), SessionStatus::Authenticated);
        assert_eq!(session.user().get_untracked(), Some(user()));
    });
}

#[test]
fn late_mount_check_does_not_override_login_check() {
    with_session(|session| {
        let mount = session.begin_check();
        let after_login = session.begin_check();

        assert!(session.finish_check(after_login, SessionCheck::Authenticated(user())));
        assert!(!session.finish_check(mount, SessionCheck::Unauthenticated));

        assert_eq!(session.status().get_untracked(), SessionStatus::Authenticated);
        assert_eq!(session.user().get_untracked(), Some(user()));
    });
}

#[test]
fn check_finishing_after_sign_out_is_dropped() {
    with_session(|session| {
        let generation = session.begin_check();
        session.sign_out();

        assert!(!session.finish_check(generation, SessionCheck::Authenticated(user())));
        assert_eq!(session.status().get_untracked(), SessionStatus::Unauthenticated);
        assert_eq!(session.user().get_untracked(), None);
    });
}

#[test]
fn refresh_marks_session_checking() {
    with_session(|session| {
        session.sign_out();
        session.refresh();
        assert_eq!(session.status().get_untracked(), SessionStatus::Checking);
    });
}
