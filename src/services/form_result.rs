//! Outcome of one form submission.

#[cfg(test)]
#[path = "form_result_test.rs"]
mod form_result_test;

use crate::validation::FieldErrors;

/// What a page renders after a submit. Replaced on every submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormResult {
    Success { message: Option<String> },
    /// Local validation failed; nothing was sent.
    FieldErrors(FieldErrors),
    /// The server rejected the request (bad credentials, duplicate email).
    ServerValidation(String),
    /// Network or unexpected failure, already reduced to a generic message.
    ServerError(String),
    /// Operation-specific failure text.
    Message(String),
}

impl FormResult {
    pub fn success() -> Self {
        Self::Success { message: None }
    }

    pub fn success_with(message: impl Into<String>) -> Self {
        Self::Success { message: Some(message.into()) }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        match self {
            Self::FieldErrors(errors) => errors.get(field),
            _ => None,
        }
    }

    /// Single message rendered near the submit control.
    pub fn form_error(&self) -> Option<&str> {
        match self {
            Self::ServerValidation(msg) | Self::ServerError(msg) | Self::Message(msg) => Some(msg),
            Self::Success { .. } | Self::FieldErrors(_) => None,
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        match self {
            Self::Success { message } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<FieldErrors> for FormResult {
    fn from(errors: FieldErrors) -> Self {
        Self::FieldErrors(errors)
    }
}
