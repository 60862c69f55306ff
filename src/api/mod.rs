//! REST API layer: route handlers, DTOs, extractors, and router composition.
//!
//! Routes are mounted at the root. The OpenAPI document is served at
//! `/api-docs/openapi.json`, with Swagger UI at `/swagger-ui` when the
//! `swagger-ui` feature is enabled.

pub mod dto;
pub mod extract;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI description of every route.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "enrollment-gateway",
        description = "REST API for students, courses, and enrollments"
    ),
    paths(
        handlers::system::root_handler,
        handlers::system::health_handler,
        handlers::student::create_student,
        handlers::student::list_student_enrollments,
        handlers::course::create_course,
        handlers::enrollment::create_enrollment,
        handlers::enrollment::update_enrollment_status,
    ),
    components(schemas(
        dto::CreateStudentRequest,
        dto::StudentResponse,
        dto::CreateCourseRequest,
        dto::CourseResponse,
        dto::CreateEnrollmentRequest,
        dto::EnrollmentResponse,
        dto::UpdateStatusRequest,
        dto::UpdateStatusResponse,
        dto::StudentEnrollmentDto,
        handlers::system::HealthResponse,
        handlers::system::RootResponse,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "Students", description = "Student creation and enrollment listing"),
        (name = "Courses", description = "Course creation"),
        (name = "Enrollments", description = "Enrollment creation and status updates"),
        (name = "System", description = "Service description and health"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    #[cfg(not(feature = "swagger-ui"))]
    let router = router.route(
        "/api-docs/openapi.json",
        axum::routing::get(|| async { axum::Json(ApiDoc::openapi()) }),
    );

    router
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::persistence::SchoolStore;
    use crate::persistence::memory::MemoryStore;
    use crate::service::SchoolService;

    fn make_app() -> (Router, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let service = SchoolService::new(Arc::clone(&store) as Arc<dyn SchoolStore>);
        let state = AppState {
            school_service: Arc::new(service),
        };
        (build_router().with_state(state), store)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        };
        let Ok(request) = request else {
            panic!("request build failed");
        };
        let Ok(response) = app.clone().oneshot(request).await else {
            panic!("router failed");
        };
        let status = response.status();
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> StatusCode {
        let Ok(request) = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
        else {
            panic!("request build failed");
        };
        let Ok(response) = app.clone().oneshot(request).await else {
            panic!("router failed");
        };
        response.status()
    }

    async fn seed(app: &Router) {
        let (status, _) = send(app, "POST", "/students", Some(json!({"name": "Ana"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, _) = send(app, "POST", "/courses", Some(json!({"title": "Math"}))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn end_to_end_scenario() {
        let (app, _) = make_app();

        let (status, body) = send(&app, "POST", "/students", Some(json!({"name": "Ana"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"id": 1, "name": "Ana"}));

        let (status, body) = send(&app, "POST", "/courses", Some(json!({"title": "Math"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"id": 1, "title": "Math"}));

        let (status, body) = send(
            &app,
            "POST",
            "/enrollments",
            Some(json!({"studentId": 1, "courseId": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({"id": 1, "studentId": 1, "courseId": 1, "score": 100, "status": "Active"})
        );

        let (status, body) = send(
            &app,
            "PUT",
            "/enrollments/1",
            Some(json!({"status": "Completed"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": "1", "status": "Completed"}));

        let (status, body) = send(&app, "GET", "/students/1/enrollments", None).await;
        assert_eq!(status, StatusCode::OK);
        let Some(rows) = body.as_array() else {
            panic!("expected array, got {body}");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], json!(1));
        assert_eq!(rows[0]["title"], json!("Math"));
        assert_eq!(rows[0]["score"], json!(100));
        assert_eq!(rows[0]["status"], json!("Completed"));
        assert!(rows[0]["enrollmentDate"].is_string());
    }

    #[tokio::test]
    async fn course_description_is_echoed_when_present() {
        let (app, _) = make_app();
        let (status, body) = send(
            &app,
            "POST",
            "/courses",
            Some(json!({"title": "Math", "description": "Algebra and geometry"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({"id": 1, "title": "Math", "description": "Algebra and geometry"})
        );
    }

    #[tokio::test]
    async fn whitespace_only_values_are_accepted_as_sent() {
        let (app, _) = make_app();

        let (status, body) = send(&app, "POST", "/students", Some(json!({"name": "   "}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"id": 1, "name": "   "}));

        let (status, body) = send(
            &app,
            "POST",
            "/courses",
            Some(json!({"title": " ", "description": " "})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"id": 1, "title": " ", "description": " "}));

        let _ = send(
            &app,
            "POST",
            "/enrollments",
            Some(json!({"studentId": 1, "courseId": 1})),
        )
        .await;
        let (status, body) = send(&app, "PUT", "/enrollments/1", Some(json!({"status": " "}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": "1", "status": " "}));

        let (_, body) = send(&app, "GET", "/students/1/enrollments", None).await;
        assert_eq!(body[0]["status"], json!(" "));
        assert_eq!(body[0]["title"], json!(" "));
    }

    #[tokio::test]
    async fn empty_description_is_omitted() {
        let (app, _) = make_app();
        let (status, body) = send(
            &app,
            "POST",
            "/courses",
            Some(json!({"title": "Math", "description": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"id": 1, "title": "Math"}));
    }

    #[tokio::test]
    async fn status_update_echoes_raw_path_segment() {
        let (app, _) = make_app();
        seed(&app).await;
        let _ = send(
            &app,
            "POST",
            "/enrollments",
            Some(json!({"studentId": 1, "courseId": 1})),
        )
        .await;

        let (status, body) = send(
            &app,
            "PUT",
            "/enrollments/01",
            Some(json!({"status": "Completed"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": "01", "status": "Completed"}));

        let (_, body) = send(&app, "GET", "/students/1/enrollments", None).await;
        assert_eq!(body[0]["status"], json!("Completed"));
    }

    #[tokio::test]
    async fn missing_required_fields_are_rejected_without_rows() {
        let (app, store) = make_app();

        let (status, body) = send(&app, "POST", "/students", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], json!(1002));

        let (status, _) = send(&app, "POST", "/students", Some(json!({"name": ""}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            "POST",
            "/courses",
            Some(json!({"description": "no title"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert_eq!(store.student_count().await, 0);
        assert_eq!(store.course_count().await, 0);
    }

    #[tokio::test]
    async fn enrollment_requires_both_ids() {
        let (app, store) = make_app();
        seed(&app).await;

        let (status, _) = send(&app, "POST", "/enrollments", Some(json!({"studentId": 1}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "POST", "/enrollments", Some(json!({"courseId": 1}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert_eq!(store.enrollment_count().await, 0);
    }

    #[tokio::test]
    async fn enrollment_ignores_client_score_and_status() {
        let (app, _) = make_app();
        seed(&app).await;

        let (status, body) = send(
            &app,
            "POST",
            "/enrollments",
            Some(json!({"studentId": 1, "courseId": 1, "score": 5, "status": "Dropped"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["score"], json!(100));
        assert_eq!(body["status"], json!("Active"));
    }

    #[tokio::test]
    async fn enrollment_with_unknown_reference_is_a_store_error() {
        let (app, store) = make_app();
        seed(&app).await;

        let (status, body) = send(
            &app,
            "POST",
            "/enrollments",
            Some(json!({"studentId": 1, "courseId": 42})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], json!(3001));
        assert!(body["error"]["details"].is_string());
        assert_eq!(store.enrollment_count().await, 0);
    }

    #[tokio::test]
    async fn status_update_requires_status() {
        let (app, _) = make_app();
        let (status, _) = send(&app, "PUT", "/enrollments/1", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn status_is_stored_verbatim() {
        let (app, _) = make_app();
        seed(&app).await;
        let _ = send(
            &app,
            "POST",
            "/enrollments",
            Some(json!({"studentId": 1, "courseId": 1})),
        )
        .await;

        let (status, _) = send(
            &app,
            "PUT",
            "/enrollments/1",
            Some(json!({"status": "paused - awaiting Transcript"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, "GET", "/students/1/enrollments", None).await;
        assert_eq!(body[0]["status"], json!("paused - awaiting Transcript"));
    }

    #[tokio::test]
    async fn non_integer_path_id_is_rejected() {
        let (app, _) = make_app();
        let (status, _) = send(&app, "GET", "/students/abc/enrollments", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            "PUT",
            "/enrollments/x1",
            Some(json!({"status": "Completed"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let (app, _) = make_app();
        assert_eq!(
            send_raw(&app, "POST", "/students", "{\"name\":").await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            send_raw(&app, "POST", "/enrollments", r#"{"studentId":"one","courseId":1}"#).await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn listing_is_empty_for_student_without_enrollments() {
        let (app, _) = make_app();
        seed(&app).await;
        let (status, body) = send(&app, "GET", "/students/1/enrollments", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn listing_only_includes_the_students_rows_in_order() {
        let (app, _) = make_app();
        seed(&app).await;
        let _ = send(&app, "POST", "/students", Some(json!({"name": "Luis"}))).await;
        let _ = send(&app, "POST", "/courses", Some(json!({"title": "History"}))).await;

        for (student, course) in [(1, 2), (2, 1), (1, 1)] {
            let (status, _) = send(
                &app,
                "POST",
                "/enrollments",
                Some(json!({"studentId": student, "courseId": course})),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (_, body) = send(&app, "GET", "/students/1/enrollments", None).await;
        let Some(rows) = body.as_array() else {
            panic!("expected array");
        };
        let titles: Vec<&str> = rows.iter().filter_map(|r| r["title"].as_str()).collect();
        assert_eq!(titles, vec!["History", "Math"]);
    }

    #[tokio::test]
    async fn repeated_listing_is_identical() {
        let (app, _) = make_app();
        seed(&app).await;
        let _ = send(
            &app,
            "POST",
            "/enrollments",
            Some(json!({"studentId": 1, "courseId": 1})),
        )
        .await;

        let (_, first) = send(&app, "GET", "/students/1/enrollments", None).await;
        let (_, second) = send(&app, "GET", "/students/1/enrollments", None).await;
        assert_eq!(first.to_string(), second.to_string());
    }

    #[tokio::test]
    async fn health_reports_connection_state() {
        let (app, store) = make_app();

        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"status": "OK", "db": "connected", "test": [{"test": 1}]})
        );

        store.set_offline(true);
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], json!("ERROR"));
        assert_eq!(body["db"], json!("disconnected"));
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn store_outage_surfaces_as_structured_500() {
        let (app, store) = make_app();
        store.set_offline(true);

        let (status, body) = send(&app, "POST", "/students", Some(json!({"name": "Ana"}))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], json!("database error"));

        let (status, _) = send(&app, "GET", "/students/1/enrollments", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn root_lists_endpoints() {
        let (app, _) = make_app();
        let (status, body) = send(&app, "GET", "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], json!("online"));
        assert_eq!(
            body["endpoints"]["studentEnrollments"],
            json!("/students/:id/enrollments")
        );
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let (app, _) = make_app();
        let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/students"].is_object());
    }

    #[test]
    fn openapi_covers_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/health",
            "/students",
            "/students/{id}/enrollments",
            "/courses",
            "/enrollments",
            "/enrollments/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
