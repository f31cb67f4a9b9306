//! Dashboard item-list state.
//!
//! DESIGN
//! ======
//! No client-side cache: every load replaces `items` with what the server
//! returned, and deletes trigger a fresh load.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use crate::net::types::Item;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemsState {
    pub items: Vec<Item>,
    pub loading: bool,
    pub error: Option<String>,
    /// Item whose delete request is in flight.
    pub deleting: Option<String>,
}

impl ItemsState {
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply_fetch(&mut self, result: Result<Vec<Item>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => {
                self.items.clear();
                self.error = Some(message);
            }
        }
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.as_deref() == Some(id)
    }
}

/// Quantity column text; the server allows the column to be null.
pub fn quantity_label(item: &Item) -> String {
    item.quantity.map_or_else(|| "-".to_owned(), |q| q.to_string())
}

pub fn description_label(item: &Item) -> &str {
    item.description.as_deref().unwrap_or("")
}
