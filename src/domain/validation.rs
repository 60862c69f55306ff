//! Required-field checks shared by the create and update commands.

use crate::error::ApiError;

/// Returns the value of a required text field, unchanged.
///
/// # Errors
///
/// Returns [`ApiError::MissingField`] when the value is absent or empty.
/// Whitespace-only values are accepted as sent.
pub fn required_text(field: &'static str, value: Option<String>) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::MissingField(field)),
    }
}

/// Normalizes an optional text field: only `""` becomes `None`.
#[must_use]
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Returns a required foreign-key reference.
///
/// # Errors
///
/// Returns [`ApiError::MissingField`] when absent and
/// [`ApiError::InvalidRequest`] when not a positive integer.
pub fn required_reference(field: &'static str, value: Option<i64>) -> Result<i64, ApiError> {
    match value {
        None => Err(ApiError::MissingField(field)),
        Some(v) if v <= 0 => Err(ApiError::InvalidRequest(format!(
            "{field} must be a positive integer"
        ))),
        Some(v) => Ok(v),
    }
}
