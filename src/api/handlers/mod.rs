//! REST endpoint handlers organized by resource.

pub mod course;
pub mod enrollment;
pub mod student;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(student::routes())
        .merge(course::routes())
        .merge(enrollment::routes())
}
