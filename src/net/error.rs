//! Failure classification for API calls.
//!
//! ERROR HANDLING
//! ==============
//! `Rejected` is the server saying no (bad credentials, duplicate email,
//! request validation) and is shown to the user. Every other variant is an
//! unexpected failure: logged, then replaced with a generic message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("request rejected with status {status}")]
    Rejected { status: u16, detail: Option<Value> },
    #[error("network request failed: {0}")]
    Network(String),
    #[error("response decode failed: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    pub fn rejected(status: u16, detail: Option<Value>) -> Self {
        Self::Rejected { status, detail }
    }

    /// Server-provided detail, if this is a rejection that carried one.
    pub fn detail(&self) -> Option<&Value> {
        match self {
            Self::Rejected { detail, .. } => detail.as_ref(),
            _ => None,
        }
    }

    /// The detail when it is a plain string.
    pub fn detail_str(&self) -> Option<&str> {
        self.detail().and_then(Value::as_str)
    }
}

/// Human-readable text for a server `detail` value.
///
/// Strings are used verbatim, objects contribute their `reason`, and request
/// validation lists contribute the first entry's `msg`.
pub fn detail_message(detail: Option<&Value>) -> Option<String> {
    match detail? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(map) => map.get("reason").and_then(Value::as_str).map(str::to_owned),
        Value::Array(entries) => entries
            .first()
            .and_then(|e| e.get("msg"))
            .and_then(Value::as_str)
            .map(str::to_owned),
        _ => None,
    }
}

/// [`detail_message`] for an error, falling back to [`UNKNOWN_ERROR_MESSAGE`].
pub fn error_message(err: &ApiError) -> String {
    detail_message(err.detail()).unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_owned())
}
