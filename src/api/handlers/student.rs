//! Student handlers: create, list enrollments.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{CreateStudentRequest, StudentEnrollmentDto, StudentResponse};
use crate::api::extract::{ApiJson, PathId};
use crate::app_state::AppState;
use crate::domain::{NewStudent, StudentId};
use crate::error::{ApiError, ErrorResponse};

/// `POST /students` — Create a student.
///
/// # Errors
///
/// Returns [`ApiError`] on a missing name or store failure.
#[utoipa::path(
    post,
    path = "/students",
    tag = "Students",
    summary = "Create a student",
    description = "Inserts a student row and echoes the assigned id and name.",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 400, description = "Missing or empty name", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateStudentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let student = NewStudent::new(req.name)?;
    let record = state.school_service.create_student(student).await?;
    Ok((StatusCode::CREATED, Json(StudentResponse::from(record))))
}

/// `GET /students/:id/enrollments` — List a student's enrollments.
///
/// # Errors
///
/// Returns [`ApiError`] on a non-integer id or store failure.
#[utoipa::path(
    get,
    path = "/students/{id}/enrollments",
    tag = "Students",
    summary = "List a student's enrollments",
    description = "Returns every enrollment of the student joined with its course title, ordered by enrollment id. An unknown student yields an empty list.",
    params(
        ("id" = i64, Path, description = "Student id"),
    ),
    responses(
        (status = 200, description = "Enrollments of the student", body = Vec<StudentEnrollmentDto>),
        (status = 400, description = "Non-integer id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn list_student_enrollments(
    State(state): State<AppState>,
    PathId { id, .. }: PathId,
) -> Result<impl IntoResponse, ApiError> {
    let rows = state
        .school_service
        .student_enrollments(StudentId::new(id))
        .await?;

    let data: Vec<StudentEnrollmentDto> = rows.into_iter().map(Into::into).collect();
    Ok(Json(data))
}

/// Student routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/students", post(create_student))
        .route("/students/{id}/enrollments", get(list_student_enrollments))
}
