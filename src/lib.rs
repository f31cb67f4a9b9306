//! # stockroom-ui
//!
//! Leptos + WASM frontend for the stockroom inventory service.
//!
//! This crate contains the pages, components, session controller, form
//! validation, and the REST client used to sign users in and manage their
//! inventory items. Browser-only glue sits behind the `csr` feature so the
//! form and session logic can be exercised natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod session;
pub mod state;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;
