//! PostgreSQL implementation of the store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use super::SchoolStore;
use super::models::{CourseRecord, EnrollmentRecord, HealthProbe, StudentEnrollment, StudentRecord};
use crate::config::DatabaseConfig;
use crate::domain::{
    EnrollmentId, EnrollmentStatus, NewCourse, NewEnrollment, NewStudent, StudentId,
};
use crate::error::ApiError;

/// Builds connection options from the configured parts.
///
/// A managed-instance socket directory wins over the TCP host.
#[must_use]
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    let options = PgConnectOptions::new()
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name);

    match &config.socket_dir {
        Some(dir) => options.socket(dir),
        None => options.host(&config.host),
    }
}

/// Creates the process-wide connection pool.
///
/// Connections are opened on first use, so the service starts even when
/// the store is down and `/health` can report it. Callers waiting for a
/// connection queue inside the pool.
#[must_use]
pub fn connect_lazy(config: &DatabaseConfig) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(connect_options(config))
}

/// PostgreSQL-backed store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a store over the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchoolStore for PostgresStore {
    async fn insert_student(&self, student: &NewStudent) -> Result<StudentRecord, ApiError> {
        let id = sqlx::query_scalar::<_, i64>("INSERT INTO students (name) VALUES ($1) RETURNING id")
            .bind(&student.name)
            .fetch_one(&self.pool)
            .await?;

        Ok(StudentRecord {
            id: StudentId::new(id),
            name: student.name.clone(),
        })
    }

    async fn insert_course(&self, course: &NewCourse) -> Result<CourseRecord, ApiError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO courses (title, description) VALUES ($1, $2) RETURNING id",
        )
        .bind(&course.title)
        .bind(course.description.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(CourseRecord {
            id: id.into(),
            title: course.title.clone(),
            description: course.description.clone(),
        })
    }

    async fn insert_enrollment(
        &self,
        enrollment: &NewEnrollment,
    ) -> Result<EnrollmentRecord, ApiError> {
        let status = enrollment.status();
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO enrollments (student_id, course_id, score, status) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(enrollment.student_id.get())
        .bind(enrollment.course_id.get())
        .bind(enrollment.score())
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(EnrollmentRecord {
            id: id.into(),
            student_id: enrollment.student_id,
            course_id: enrollment.course_id,
            score: enrollment.score(),
            status: status.into_inner(),
        })
    }

    async fn update_enrollment_status(
        &self,
        id: EnrollmentId,
        status: &EnrollmentStatus,
    ) -> Result<u64, ApiError> {
        let result = sqlx::query("UPDATE enrollments SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn student_enrollments(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<StudentEnrollment>, ApiError> {
        let rows = sqlx::query_as::<_, (i64, String, i32, String, DateTime<Utc>)>(
            "SELECT e.id, c.title, e.score, e.status, e.enrollment_date \
             FROM enrollments e \
             JOIN courses c ON e.course_id = c.id \
             WHERE e.student_id = $1 \
             ORDER BY e.id ASC",
        )
        .bind(student_id.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(
                |(id, title, score, status, enrollment_date)| StudentEnrollment {
                    id: id.into(),
                    title,
                    score,
                    status,
                    enrollment_date,
                },
            )
            .collect())
    }

    async fn ping(&self) -> Result<Vec<HealthProbe>, ApiError> {
        let rows = sqlx::query_scalar::<_, i32>("SELECT 1 AS test")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|test| HealthProbe { test }).collect())
    }
}
