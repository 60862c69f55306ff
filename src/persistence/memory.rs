//! In-memory store for unit tests.
//!
//! Mirrors the schema's constraints: identities count up from 1 per table,
//! and enrollments must reference an existing student and course.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use super::SchoolStore;
use super::models::{CourseRecord, EnrollmentRecord, HealthProbe, StudentEnrollment, StudentRecord};
use crate::domain::{
    EnrollmentId, EnrollmentStatus, NewCourse, NewEnrollment, NewStudent, StudentId,
};
use crate::error::ApiError;

#[derive(Debug, Default)]
struct Tables {
    students: Vec<StudentRecord>,
    courses: Vec<CourseRecord>,
    enrollments: Vec<(EnrollmentRecord, DateTime<Utc>)>,
}

/// Vector-backed store with foreign-key checks and a kill switch.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    offline: AtomicBool,
}

impl MemoryStore {
    /// Creates an empty, reachable store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail as if the store were unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of persisted students.
    pub async fn student_count(&self) -> usize {
        self.tables.lock().await.students.len()
    }

    /// Number of persisted courses.
    pub async fn course_count(&self) -> usize {
        self.tables.lock().await.courses.len()
    }

    /// Number of persisted enrollments.
    pub async fn enrollment_count(&self) -> usize {
        self.tables.lock().await.enrollments.len()
    }

    fn check_online(&self) -> Result<(), ApiError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ApiError::Store("connection refused".to_string()));
        }
        Ok(())
    }
}

fn next_id(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX - 1) + 1
}

#[async_trait]
impl SchoolStore for MemoryStore {
    async fn insert_student(&self, student: &NewStudent) -> Result<StudentRecord, ApiError> {
        self.check_online()?;
        let mut tables = self.tables.lock().await;
        let record = StudentRecord {
            id: next_id(tables.students.len()).into(),
            name: student.name.clone(),
        };
        tables.students.push(record.clone());
        Ok(record)
    }

    async fn insert_course(&self, course: &NewCourse) -> Result<CourseRecord, ApiError> {
        self.check_online()?;
        let mut tables = self.tables.lock().await;
        let record = CourseRecord {
            id: next_id(tables.courses.len()).into(),
            title: course.title.clone(),
            description: course.description.clone(),
        };
        tables.courses.push(record.clone());
        Ok(record)
    }

    async fn insert_enrollment(
        &self,
        enrollment: &NewEnrollment,
    ) -> Result<EnrollmentRecord, ApiError> {
        self.check_online()?;
        let mut tables = self.tables.lock().await;

        if !tables.students.iter().any(|s| s.id == enrollment.student_id) {
            return Err(ApiError::Store(
                "insert on table \"enrollments\" violates foreign key constraint \
                 \"enrollments_student_id_fkey\""
                    .to_string(),
            ));
        }
        if !tables.courses.iter().any(|c| c.id == enrollment.course_id) {
            return Err(ApiError::Store(
                "insert on table \"enrollments\" violates foreign key constraint \
                 \"enrollments_course_id_fkey\""
                    .to_string(),
            ));
        }

        let record = EnrollmentRecord {
            id: next_id(tables.enrollments.len()).into(),
            student_id: enrollment.student_id,
            course_id: enrollment.course_id,
            score: enrollment.score(),
            status: enrollment.status().into_inner(),
        };
        tables.enrollments.push((record.clone(), Utc::now()));
        Ok(record)
    }

    async fn update_enrollment_status(
        &self,
        id: EnrollmentId,
        status: &EnrollmentStatus,
    ) -> Result<u64, ApiError> {
        self.check_online()?;
        let mut tables = self.tables.lock().await;
        let mut touched = 0;
        for (row, _) in tables.enrollments.iter_mut().filter(|(r, _)| r.id == id) {
            row.status = status.as_str().to_string();
            touched += 1;
        }
        Ok(touched)
    }

    async fn student_enrollments(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<StudentEnrollment>, ApiError> {
        self.check_online()?;
        let tables = self.tables.lock().await;
        let mut rows: Vec<StudentEnrollment> = tables
            .enrollments
            .iter()
            .filter(|(row, _)| row.student_id == student_id)
            .filter_map(|(row, enrolled_at)| {
                let course = tables.courses.iter().find(|c| c.id == row.course_id)?;
                Some(StudentEnrollment {
                    id: row.id,
                    title: course.title.clone(),
                    score: row.score,
                    status: row.status.clone(),
                    enrollment_date: *enrolled_at,
                })
            })
            .collect();
        rows.sort_by_key(|r| r.id);
        Ok(rows)
    }

    async fn ping(&self) -> Result<Vec<HealthProbe>, ApiError> {
        self.check_online()?;
        Ok(vec![HealthProbe { test: 1 }])
    }
}
