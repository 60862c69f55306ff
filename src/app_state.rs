//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::SchoolService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// Built once at startup; the store handle inside is the process-wide
/// connection pool.
#[derive(Debug, Clone)]
pub struct AppState {
    /// School service for all store access.
    pub school_service: Arc<SchoolService>,
}
