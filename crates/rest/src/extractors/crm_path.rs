//! CRM path segment extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

use crate::error::RestError;

/// Axum extractor for the `{id}` segment of `/physicians/{id}`.
///
/// Only checks that the segment is an integer; the range check belongs to
/// the storage, which reports both failures as `invalid-identifier`.
///
/// # Example
///
/// ```rust,ignore
/// use clinic_rest::extractors::CrmPath;
///
/// async fn read_handler(CrmPath(id): CrmPath) {
///     println!("CRM: {}", id);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrmPath(pub i64);

impl CrmPath {
    /// Parses a raw path segment.
    pub fn parse(raw: &str) -> Result<Self, RestError> {
        raw.parse()
            .map(CrmPath)
            .map_err(|_| RestError::InvalidIdentifier {
                value: raw.to_string(),
            })
    }
}

impl<S> FromRequestParts<S> for CrmPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        CrmPath::parse(&raw).map_err(IntoResponse::into_response)
    }
}
