//! Networking modules for the inventory REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` defines the [`client::InventoryApi`] seam and its browser HTTP
//! implementation, `types` holds the wire DTOs, and `error` classifies failures.

pub mod client;
pub mod error;
pub mod types;
