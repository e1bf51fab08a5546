//! Read handler.
//!
//! `GET [base]/physicians/[id]`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_registry::PhysicianStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::CrmPath;
use crate::state::AppState;

/// Handler for reading a physician by CRM.
///
/// # Response
///
/// - `200 OK` - Physician found, returns the record
/// - `400 Bad Request` - The CRM is not a six-digit integer
/// - `404 Not Found` - No physician with that CRM
///
/// # Example
///
/// ```http
/// GET /physicians/222222 HTTP/1.1
/// Host: localhost:3000
/// ```
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    CrmPath(id): CrmPath,
) -> RestResult<Response>
where
    S: PhysicianStorage,
{
    debug!(crm = id, "Processing read request");

    let physician = state.storage().get(id)?;

    Ok((StatusCode::OK, Json(physician)).into_response())
}
