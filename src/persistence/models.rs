//! Rows returned by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CourseId, EnrollmentId, StudentId};

/// A freshly inserted `students` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Store-assigned identity.
    pub id: StudentId,
    /// Student name as stored.
    pub name: String,
}

/// A freshly inserted `courses` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Store-assigned identity.
    pub id: CourseId,
    /// Course title.
    pub title: String,
    /// Nullable description.
    pub description: Option<String>,
}

/// A freshly inserted `enrollments` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    /// Store-assigned identity.
    pub id: EnrollmentId,
    /// Enrolled student.
    pub student_id: StudentId,
    /// Enrolled course.
    pub course_id: CourseId,
    /// Score the row was created with.
    pub score: i32,
    /// Status the row was created with.
    pub status: String,
}

/// One row of the enrollment + course join for a single student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentEnrollment {
    /// Enrollment identity.
    pub id: EnrollmentId,
    /// Title of the joined course.
    pub title: String,
    /// Current score.
    pub score: i32,
    /// Current status.
    pub status: String,
    /// Timestamp assigned by the store at creation.
    pub enrollment_date: DateTime<Utc>,
}

/// Result row of the liveness probe (`SELECT 1 AS test`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthProbe {
    /// Always `1` when the store answers.
    pub test: i32,
}
