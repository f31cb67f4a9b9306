//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome, the dashboard shell, and the route guard
//! while reading the session controller from Leptos context.

pub mod dashboard_layout;
pub mod form_fields;
pub mod item_table;
pub mod protected_route;
