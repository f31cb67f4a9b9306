//! Client-side form validation run before any request leaves the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each validator returns the cleaned-up payload or a [`FieldErrors`] map that
//! pages render under the matching inputs. Every failing rule is reported, not
//! just the first.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::{Credentials, NewItem, NewUser};

pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));
static SPECIAL_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).expect("Invalid regex"));

/// Why a quantity string could not be read as an integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    #[error("Quantity must be a valid number")]
    NotANumber,
    #[error("Quantity is out of range")]
    OutOfRange,
}

/// Validation messages keyed by form field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// Login requires both fields to be non-empty.
pub fn validate_login(username: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let mut errors = FieldErrors::new();
    if username.is_empty() {
        errors.add("username", "Username is required");
    }
    if password.is_empty() {
        errors.add("password", "Password is required");
    }
    errors.into_result(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// Registration requires a well-formed email and a password meeting the policy.
pub fn validate_registration(email: &str, password: &str) -> Result<NewUser, FieldErrors> {
    let mut errors = FieldErrors::new();
    let email = email.trim();
    if !is_valid_email(email) {
        errors.add("email", "Invalid email address");
    }
    for message in password_policy_violations(password) {
        errors.add("password", message);
    }
    errors.into_result(NewUser { email: email.to_owned(), password: password.to_owned() })
}

/// Item creation requires name and description text and a numeric quantity.
pub fn validate_item(name: &str, description: &str, quantity: &str) -> Result<NewItem, FieldErrors> {
    let mut errors = FieldErrors::new();
    if name.is_empty() {
        errors.add("name", "Name is required");
    }
    if description.is_empty() {
        errors.add("description", "Description is required");
    }
    let parsed = if quantity.is_empty() {
        errors.add("quantity", "Quantity is required");
        None
    } else {
        match parse_leading_int(quantity) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                errors.add("quantity", err.to_string());
                None
            }
        }
    };
    match parsed {
        Some(quantity) if errors.is_empty() => Ok(NewItem {
            name: name.to_owned(),
            description: description.to_owned(),
            quantity,
        }),
        _ => Err(errors),
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Messages for every password rule `password` breaks, in display order.
pub fn password_policy_violations(password: &str) -> Vec<&'static str> {
    let mut violations = Vec::new();
    if password.chars().count() < MIN_PASSWORD_LEN {
        violations.push("Password should be at least 8 characters.");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push("Password should contain at least one uppercase letter.");
    }
    if !SPECIAL_CHAR_RE.is_match(password) {
        violations.push("Password should contain at least one special character.");
    }
    violations
}

/// Parse the integer prefix of `raw`: leading whitespace, an optional sign,
/// then at least one digit. Anything after the digits is ignored, so `"12kg"`
/// parses as 12 and `"3.7"` as 3. Digit runs beyond the `i64` range are
/// rejected as out of range.
pub fn parse_leading_int(raw: &str) -> Result<i64, QuantityError> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(QuantityError::NotANumber);
    }
    let digits = &rest[..digits_len];
    let signed = if negative { format!("-{digits}") } else { digits.to_owned() };
    signed.parse().map_err(|_| QuantityError::OutOfRange)
}
