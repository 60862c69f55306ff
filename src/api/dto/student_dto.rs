//! Student DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::StudentId;
use crate::persistence::models::StudentRecord;

/// Request body for `POST /students`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    /// Student name (required, non-empty).
    #[serde(default)]
    pub name: Option<String>,
}

/// Response body for `POST /students` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    /// Store-assigned identity.
    pub id: StudentId,
    /// Name echoed from the request.
    pub name: String,
}

impl From<StudentRecord> for StudentResponse {
    fn from(record: StudentRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
        }
    }
}
