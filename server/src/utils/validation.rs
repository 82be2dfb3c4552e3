//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SurrealDB TEXT fields have no built-in length enforcement, so every
//! write path validates here first.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: restaurant, menu item
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions (restaurant blurb, dish description)
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone numbers, user ids, transaction ids
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Delivery addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_empty_and_whitespace() {
        assert!(validate_required_text("", "address", MAX_ADDRESS_LEN).is_err());
        assert!(validate_required_text("   ", "address", MAX_ADDRESS_LEN).is_err());
        assert!(validate_required_text("42 Curry Lane", "address", MAX_ADDRESS_LEN).is_ok());
    }

    #[test]
    fn required_text_rejects_overlong() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn optional_text_passes_none() {
        assert!(validate_optional_text(&None, "description", MAX_NOTE_LEN).is_ok());
        let too_long = Some("y".repeat(MAX_NOTE_LEN + 1));
        assert!(validate_optional_text(&too_long, "description", MAX_NOTE_LEN).is_err());
    }
}
