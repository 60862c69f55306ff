//! Persistence layer: the relational store behind every route.
//!
//! [`SchoolStore`] is the seam between request handling and the database.
//! Each method issues exactly one parameterized statement; referential
//! integrity is enforced by the store's foreign keys, not here. The
//! concrete implementation uses `sqlx::PgPool`.

pub mod models;
pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::domain::{EnrollmentId, EnrollmentStatus, NewCourse, NewEnrollment, NewStudent, StudentId};
use crate::error::ApiError;
use models::{CourseRecord, EnrollmentRecord, HealthProbe, StudentEnrollment, StudentRecord};

pub use postgres::PostgresStore;

/// Access to the `students`, `courses`, and `enrollments` tables.
#[async_trait]
pub trait SchoolStore: Send + Sync + std::fmt::Debug {
    /// Inserts a student and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on database failure.
    async fn insert_student(&self, student: &NewStudent) -> Result<StudentRecord, ApiError>;

    /// Inserts a course and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on database failure.
    async fn insert_course(&self, course: &NewCourse) -> Result<CourseRecord, ApiError>;

    /// Inserts an enrollment with the default score and status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on database failure, including a
    /// foreign-key violation for an unknown student or course.
    async fn insert_enrollment(
        &self,
        enrollment: &NewEnrollment,
    ) -> Result<EnrollmentRecord, ApiError>;

    /// Sets the status of one enrollment. Returns the number of rows touched.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on database failure.
    async fn update_enrollment_status(
        &self,
        id: EnrollmentId,
        status: &EnrollmentStatus,
    ) -> Result<u64, ApiError>;

    /// Lists a student's enrollments joined with course titles, ordered by
    /// enrollment id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] on database failure.
    async fn student_enrollments(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<StudentEnrollment>, ApiError>;

    /// Runs the trivial liveness query.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] when the store is unreachable.
    async fn ping(&self) -> Result<Vec<HealthProbe>, ApiError>;
}
