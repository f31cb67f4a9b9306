//! API endpoint configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A browser bundle has no process environment, so the API base URL is baked
//! in from `INVENTORY_API_BASE_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Location of the remote inventory API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build config from the `INVENTORY_API_BASE_URL` value captured at compile time.
    ///
    /// Falls back to [`DEFAULT_API_BASE_URL`] when unset or blank.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("INVENTORY_API_BASE_URL"))
    }

    fn from_raw(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url }
    }

    /// Absolute URL for an API path such as `/items/`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
