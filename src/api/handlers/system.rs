//! System endpoints: service description and health check.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::persistence::models::HealthProbe;

/// Store liveness report.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `"OK"` or `"ERROR"`.
    pub status: String,
    /// `"connected"` or `"disconnected"`.
    pub db: String,
    /// Rows returned by the probe query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<Vec<HealthProbe>>,
    /// Driver message when the probe failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Route index returned by `GET /`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EndpointIndex {
    health: &'static str,
    students: &'static str,
    courses: &'static str,
    enrollments: &'static str,
    student_enrollments: &'static str,
}

/// Static service description.
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    message: &'static str,
    status: &'static str,
    timestamp: String,
    version: &'static str,
    endpoints: EndpointIndex,
}

/// `GET /` — Describe the service and its endpoints.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Service description",
    description = "Returns a static description of the service and the routes it exposes.",
    responses(
        (status = 200, description = "Service description", body = RootResponse),
    )
)]
pub async fn root_handler() -> impl IntoResponse {
    Json(RootResponse {
        message: "enrollment API is running",
        status: "online",
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
        endpoints: EndpointIndex {
            health: "/health",
            students: "/students",
            courses: "/courses",
            enrollments: "/enrollments",
            student_enrollments: "/students/:id/enrollments",
        },
    })
}

/// `GET /health` — Probe the store.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Runs a trivial query against the store and reports whether it answered.",
    responses(
        (status = 200, description = "Store reachable", body = HealthResponse),
        (status = 500, description = "Store unreachable", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.school_service.health().await {
        Ok(rows) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "OK".to_string(),
                db: "connected".to_string(),
                test: Some(rows),
                error: None,
            }),
        ),
        Err(err) => {
            let message = match err {
                ApiError::Store(msg) => msg,
                other => other.to_string(),
            };
            tracing::error!(error = %message, "health probe failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    status: "ERROR".to_string(),
                    db: "disconnected".to_string(),
                    test: None,
                    error: Some(message),
                }),
            )
        }
    }
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
}
