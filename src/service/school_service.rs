//! School service: student, course, and enrollment operations.

use std::sync::Arc;

use crate::domain::{
    EnrollmentId, EnrollmentStatus, NewCourse, NewEnrollment, NewStudent, StudentId,
};
use crate::error::ApiError;
use crate::persistence::SchoolStore;
use crate::persistence::models::{
    CourseRecord, EnrollmentRecord, HealthProbe, StudentEnrollment, StudentRecord,
};

/// Orchestration layer for all registry operations.
///
/// Stateless: holds only a handle to the shared store. Every method issues
/// exactly one statement and never retries.
#[derive(Debug, Clone)]
pub struct SchoolService {
    store: Arc<dyn SchoolStore>,
}

impl SchoolService {
    /// Creates a new `SchoolService` over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn SchoolStore>) -> Self {
        Self { store }
    }

    /// Persists a new student.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] if the insert fails.
    pub async fn create_student(&self, student: NewStudent) -> Result<StudentRecord, ApiError> {
        let record = self.store.insert_student(&student).await?;
        tracing::info!(student_id = %record.id, "student created");
        Ok(record)
    }

    /// Persists a new course.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] if the insert fails.
    pub async fn create_course(&self, course: NewCourse) -> Result<CourseRecord, ApiError> {
        let record = self.store.insert_course(&course).await?;
        tracing::info!(course_id = %record.id, "course created");
        Ok(record)
    }

    /// Enrolls a student in a course with the default score and status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] if the insert fails, including when the
    /// student or course does not exist.
    pub async fn enroll(&self, enrollment: NewEnrollment) -> Result<EnrollmentRecord, ApiError> {
        let record = self.store.insert_enrollment(&enrollment).await?;
        tracing::info!(
            enrollment_id = %record.id,
            student_id = %record.student_id,
            course_id = %record.course_id,
            "enrollment created"
        );
        Ok(record)
    }

    /// Replaces an enrollment's status.
    ///
    /// Succeeds even when no enrollment has the given id; the miss is only
    /// logged.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] if the update fails.
    pub async fn update_status(
        &self,
        id: EnrollmentId,
        status: EnrollmentStatus,
    ) -> Result<EnrollmentStatus, ApiError> {
        let touched = self.store.update_enrollment_status(id, &status).await?;
        if touched == 0 {
            tracing::warn!(enrollment_id = %id, "status update matched no enrollment");
        } else {
            tracing::info!(enrollment_id = %id, status = %status, "enrollment status updated");
        }
        Ok(status)
    }

    /// Lists a student's enrollments with course titles.
    ///
    /// An unknown student yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] if the query fails.
    pub async fn student_enrollments(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<StudentEnrollment>, ApiError> {
        let rows = self.store.student_enrollments(student_id).await?;
        tracing::debug!(%student_id, count = rows.len(), "listed enrollments");
        Ok(rows)
    }

    /// Probes the store.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] when the store does not answer.
    pub async fn health(&self) -> Result<Vec<HealthProbe>, ApiError> {
        self.store.ping().await
    }
}
