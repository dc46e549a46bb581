//! Shared validation functions for user-entered text.
//!
//! Centralized so every entry point applies the same rules.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{LarderError, Result};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email regex is valid"));

/// Validates that a required field is non-empty after trimming.
pub fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LarderError::Validation(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(())
}

/// Validates an email address.
///
/// Intentionally loose: something before an `@`, something after it, and a
/// dot in the domain part.
pub fn validate_email(email: &str) -> Result<()> {
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(LarderError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }
    Ok(())
}

/// Validates a complete feedback submission.
pub fn validate_feedback(name: &str, email: &str, message: &str) -> Result<()> {
    validate_required("Name", name)?;
    validate_required("Email", email)?;
    validate_required("Message", message)?;
    validate_email(email)
}
