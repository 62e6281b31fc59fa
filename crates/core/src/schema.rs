//! Explicit input schemas for creation payloads.
//!
//! Each request DTO implements [`Schema`] by running its field checks in
//! declaration order; the first failing constraint short-circuits with a
//! [`CoreError::Validation`] whose message names the field. Checks run
//! before any storage call.

use validator::{ValidateEmail, ValidateUrl};

use crate::error::CoreError;
use crate::platform::Platform;

/// A payload that can validate itself before it reaches storage.
pub trait Schema {
    /// Return the first violated constraint, if any.
    fn check(&self) -> Result<(), CoreError>;
}

/// Build the client-facing validation error for `field`.
pub fn field_error(field: &str, message: &str) -> CoreError {
    CoreError::Validation(format!("Validation error: {message} at \"{field}\""))
}

/// Reject empty or whitespace-only strings.
pub fn require_non_empty(field: &str, value: &str, message: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(field_error(field, message));
    }
    Ok(())
}

/// Reject strings shorter than `min` characters (not bytes).
pub fn require_min_chars(
    field: &str,
    value: &str,
    min: usize,
    message: &str,
) -> Result<(), CoreError> {
    if value.trim().chars().count() < min {
        return Err(field_error(field, message));
    }
    Ok(())
}

pub fn require_email(field: &str, value: &str, message: &str) -> Result<(), CoreError> {
    if !value.validate_email() {
        return Err(field_error(field, message));
    }
    Ok(())
}

/// Reject anything that does not parse as an absolute URL.
pub fn require_url(field: &str, value: &str, message: &str) -> Result<(), CoreError> {
    if !value.validate_url() {
        return Err(field_error(field, message));
    }
    Ok(())
}

/// Parse a platform name, mapping failure onto a field error.
pub fn require_platform(field: &str, value: &str) -> Result<Platform, CoreError> {
    value
        .parse::<Platform>()
        .map_err(|_| field_error(field, "Platform must be 'instagram' or 'x'"))
}

/// Collapse `Some("")` / `Some("   ")` into `None` for optional text fields.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
