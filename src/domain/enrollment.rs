//! Enrollment commands and creation defaults.
//!
//! An enrollment always starts with [`DEFAULT_SCORE`] and
//! [`DEFAULT_STATUS`]; neither is client-settable at creation. Only the
//! status can change afterwards, and it is free text.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::{CourseId, StudentId};
use super::validation::{required_reference, required_text};
use crate::error::ApiError;

/// Score assigned to every new enrollment.
pub const DEFAULT_SCORE: i32 = 100;

/// Status assigned to every new enrollment.
pub const DEFAULT_STATUS: &str = "Active";

/// A validated request to insert an enrollment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewEnrollment {
    /// Enrolled student.
    pub student_id: StudentId,
    /// Course the student enrolls in.
    pub course_id: CourseId,
}

impl NewEnrollment {
    /// Validates the raw `studentId` and `courseId` fields.
    ///
    /// Whether the referenced rows exist is left to the store's
    /// foreign-key constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingField`] if either id is absent and
    /// [`ApiError::InvalidRequest`] if either is not positive.
    pub fn new(student_id: Option<i64>, course_id: Option<i64>) -> Result<Self, ApiError> {
        let student_id = required_reference("studentId", student_id)?;
        let course_id = required_reference("courseId", course_id)?;
        Ok(Self {
            student_id: StudentId::new(student_id),
            course_id: CourseId::new(course_id),
        })
    }

    /// Score the row is created with.
    #[must_use]
    pub const fn score(&self) -> i32 {
        DEFAULT_SCORE
    }

    /// Status the row is created with.
    #[must_use]
    pub fn status(&self) -> EnrollmentStatus {
        EnrollmentStatus(DEFAULT_STATUS.to_string())
    }
}

/// Enrollment status. Any non-empty string is accepted and stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnrollmentStatus(String);

impl EnrollmentStatus {
    /// Validates the raw `status` field.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingField`] if `status` is absent or empty.
    pub fn parse(raw: Option<String>) -> Result<Self, ApiError> {
        Ok(Self(required_text("status", raw)?))
    }

    /// Returns the status text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the status, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
