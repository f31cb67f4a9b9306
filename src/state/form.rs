//! Per-form submission state.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::services::form_result::FormResult;

/// Last submission result plus the in-flight flag that disables the submit
/// button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub result: Option<FormResult>,
    pub pending: bool,
}

impl FormState {
    /// Start a submission. Returns `false` if one is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        self.result = None;
        true
    }

    pub fn finish(&mut self, result: FormResult) {
        self.pending = false;
        self.result = Some(result);
    }

    pub fn field_errors(&self, field: &str) -> Vec<String> {
        self.result
            .as_ref()
            .and_then(|r| r.field_errors(field))
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }

    pub fn form_error(&self) -> Option<String> {
        self.result.as_ref().and_then(FormResult::form_error).map(str::to_owned)
    }

    pub fn success_message(&self) -> Option<String> {
        self.result.as_ref().and_then(FormResult::success_message).map(str::to_owned)
    }
}
