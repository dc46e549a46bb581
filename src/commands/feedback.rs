//! Feedback submission command.
//!
//! Validation-only: the feedback endpoint of the original site never left
//! the page, so this checks the fields and thanks the user.

use owo_colors::OwoColorize;

use crate::error::Result;
use crate::utils::validation::validate_feedback;

/// Validate and acknowledge a feedback submission.
pub fn cmd_feedback(name: &str, email: &str, message: &str) -> Result<()> {
    validate_feedback(name, email, message)?;
    println!("{} Thank you for your feedback!", "✓".green());
    Ok(())
}
