//! Enrollment DTOs: create, status update, and per-student listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CourseId, EnrollmentId, StudentId};
use crate::persistence::models::{EnrollmentRecord, StudentEnrollment};

/// Request body for `POST /enrollments`.
///
/// Any other fields (such as `score` or `status`) are ignored.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnrollmentRequest {
    /// Student to enroll.
    #[serde(default)]
    pub student_id: Option<i64>,
    /// Course to enroll in.
    #[serde(default)]
    pub course_id: Option<i64>,
}

/// Response body for `POST /enrollments` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentResponse {
    /// Store-assigned identity.
    pub id: EnrollmentId,
    /// Enrolled student.
    pub student_id: StudentId,
    /// Enrolled course.
    pub course_id: CourseId,
    /// Initial score, always 100.
    pub score: i32,
    /// Initial status, always `"Active"`.
    pub status: String,
}

impl From<EnrollmentRecord> for EnrollmentResponse {
    fn from(record: EnrollmentRecord) -> Self {
        Self {
            id: record.id,
            student_id: record.student_id,
            course_id: record.course_id,
            score: record.score,
            status: record.status,
        }
    }
}

/// Request body for `PUT /enrollments/:id`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    /// New status, stored verbatim.
    #[serde(default)]
    pub status: Option<String>,
}

/// Response body for `PUT /enrollments/:id`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateStatusResponse {
    /// Path segment, echoed exactly as sent.
    pub id: String,
    /// Status as stored.
    pub status: String,
}

/// One element of the `GET /students/:id/enrollments` response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentEnrollmentDto {
    /// Enrollment identity.
    pub id: EnrollmentId,
    /// Title of the enrolled course.
    pub title: String,
    /// Current score.
    pub score: i32,
    /// Current status.
    pub status: String,
    /// When the enrollment was created.
    pub enrollment_date: DateTime<Utc>,
}

impl From<StudentEnrollment> for StudentEnrollmentDto {
    fn from(row: StudentEnrollment) -> Self {
        Self {
            id: row.id,
            title: row.title,
            score: row.score,
            status: row.status,
            enrollment_date: row.enrollment_date,
        }
    }
}
