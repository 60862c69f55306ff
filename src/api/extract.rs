//! Custom Axum extractors that reject with [`ApiError`].

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::ApiError;

/// JSON body extractor whose rejections are 400 [`ApiError`]s.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Extracts a single integer `{id}` path segment, keeping the segment as
/// it appeared in the URI.
#[derive(Debug, Clone)]
pub struct PathId {
    /// Parsed identity.
    pub id: i64,
    /// Raw path segment, e.g. `"01"` for `/enrollments/01`.
    pub raw: String,
}

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state).await?;
        match raw.parse::<i64>() {
            Ok(id) => Ok(Self { id, raw }),
            Err(_) => Err(ApiError::InvalidRequest(format!(
                "id must be an integer, got {raw:?}"
            ))),
        }
    }
}
