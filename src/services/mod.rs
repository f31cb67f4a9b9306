//! Façade operations between pages and the REST client.
//!
//! ARCHITECTURE
//! ============
//! Every operation validates input, calls [`InventoryApi`](crate::net::client::InventoryApi),
//! and normalizes the outcome into a [`form_result::FormResult`] the page can
//! render. Token side effects (store on login, clear on logout) happen here.

pub mod auth;
pub mod form_result;
pub mod items;

/// Generic text shown for failures the user cannot act on.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again later.";
/// Shorter variant used by item operations.
pub const UNEXPECTED_ITEM_ERROR: &str = "An unexpected error occurred";
pub const NO_ACCESS_TOKEN: &str = "No access token found";
