//! Page-local state models.
//!
//! DESIGN
//! ======
//! Plain structs held in `RwSignal`s by pages. Transition logic lives in
//! methods so it can be tested without a reactive runtime.

pub mod form;
pub mod items;
