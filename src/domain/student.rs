//! Student creation command.

use super::validation::required_text;
use crate::error::ApiError;

/// A validated request to insert a student row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    /// Display name, guaranteed non-empty.
    pub name: String,
}

impl NewStudent {
    /// Validates the raw `name` field.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingField`] if `name` is absent or empty.
    pub fn new(name: Option<String>) -> Result<Self, ApiError> {
        Ok(Self {
            name: required_text("name", name)?,
        })
    }
}
