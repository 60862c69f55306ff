//! Course handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{CourseResponse, CreateCourseRequest};
use crate::api::extract::ApiJson;
use crate::app_state::AppState;
use crate::domain::NewCourse;
use crate::error::{ApiError, ErrorResponse};

/// `POST /courses` — Create a course.
///
/// # Errors
///
/// Returns [`ApiError`] on a missing title or store failure.
#[utoipa::path(
    post,
    path = "/courses",
    tag = "Courses",
    summary = "Create a course",
    description = "Inserts a course row. The description is optional and omitted from the response when absent.",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Missing or empty title", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn create_course(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateCourseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let course = NewCourse::new(req.title, req.description)?;
    let record = state.school_service.create_course(course).await?;
    Ok((StatusCode::CREATED, Json(CourseResponse::from(record))))
}

/// Course routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/courses", post(create_course))
}
