//! Course creation command.

use super::validation::{optional_text, required_text};
use crate::error::ApiError;

/// A validated request to insert a course row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    /// Course title, guaranteed non-empty.
    pub title: String,
    /// Free-text description; stored as `NULL` when absent or empty.
    pub description: Option<String>,
}

impl NewCourse {
    /// Validates the raw `title` and `description` fields.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingField`] if `title` is absent or empty.
    pub fn new(title: Option<String>, description: Option<String>) -> Result<Self, ApiError> {
        Ok(Self {
            title: required_text("title", title)?,
            description: optional_text(description),
        })
    }
}
