//! Delete handler.
//!
//! `DELETE [base]/physicians/[id]`

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_registry::PhysicianStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::CrmPath;
use crate::state::AppState;

/// Handler for removing a physician.
///
/// Removal is permanent; deleting the same CRM again yields `404`.
///
/// # Response
///
/// - `204 No Content` - Physician removed
/// - `400 Bad Request` - The CRM is not a six-digit integer
/// - `404 Not Found` - No physician with that CRM
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    CrmPath(id): CrmPath,
) -> RestResult<Response>
where
    S: PhysicianStorage,
{
    debug!(crm = id, "Processing delete request");

    state.storage().delete(id)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
