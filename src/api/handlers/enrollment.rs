//! Enrollment handlers: create, update status.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{post, put};
use axum::{Json, Router};

use crate::api::dto::{
    CreateEnrollmentRequest, EnrollmentResponse, UpdateStatusRequest, UpdateStatusResponse,
};
use crate::api::extract::{ApiJson, PathId};
use crate::app_state::AppState;
use crate::domain::{EnrollmentId, EnrollmentStatus, NewEnrollment};
use crate::error::{ApiError, ErrorResponse};

/// `POST /enrollments` — Enroll a student in a course.
///
/// # Errors
///
/// Returns [`ApiError`] on missing ids or store failure (including an
/// unknown student or course).
#[utoipa::path(
    post,
    path = "/enrollments",
    tag = "Enrollments",
    summary = "Create an enrollment",
    description = "Inserts an enrollment with score 100 and status \"Active\". Both referenced rows must exist.",
    request_body = CreateEnrollmentRequest,
    responses(
        (status = 201, description = "Enrollment created", body = EnrollmentResponse),
        (status = 400, description = "Missing or invalid studentId/courseId", body = ErrorResponse),
        (status = 500, description = "Store failure or unknown reference", body = ErrorResponse),
    )
)]
pub async fn create_enrollment(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateEnrollmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let enrollment = NewEnrollment::new(req.student_id, req.course_id)?;
    let record = state.school_service.enroll(enrollment).await?;
    Ok((StatusCode::CREATED, Json(EnrollmentResponse::from(record))))
}

/// `PUT /enrollments/:id` — Replace an enrollment's status.
///
/// # Errors
///
/// Returns [`ApiError`] on a missing status, non-integer id, or store failure.
#[utoipa::path(
    put,
    path = "/enrollments/{id}",
    tag = "Enrollments",
    summary = "Update enrollment status",
    description = "Stores the given status verbatim. Any non-empty string is accepted.",
    params(
        ("id" = i64, Path, description = "Enrollment id"),
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = UpdateStatusResponse),
        (status = 400, description = "Missing status or non-integer id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn update_enrollment_status(
    State(state): State<AppState>,
    PathId { id, raw }: PathId,
    ApiJson(req): ApiJson<UpdateStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let status = EnrollmentStatus::parse(req.status)?;
    let status = state
        .school_service
        .update_status(EnrollmentId::new(id), status)
        .await?;

    Ok(Json(UpdateStatusResponse {
        id: raw,
        status: status.into_inner(),
    }))
}

/// Enrollment routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/enrollments", post(create_enrollment))
        .route("/enrollments/{id}", put(update_enrollment_status))
}
