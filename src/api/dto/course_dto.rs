//! Course DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::CourseId;
use crate::persistence::models::CourseRecord;

/// Request body for `POST /courses`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    /// Course title (required, non-empty).
    #[serde(default)]
    pub title: Option<String>,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Response body for `POST /courses` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    /// Store-assigned identity.
    pub id: CourseId,
    /// Title echoed from the request.
    pub title: String,
    /// Description, omitted when none was stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<CourseRecord> for CourseResponse {
    fn from(record: CourseRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
        }
    }
}
