//! Update handler.
//!
//! `PUT [base]/physicians/[id]`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_registry::PhysicianStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::{CrmPath, PhysicianBody};
use crate::state::AppState;

/// Handler for partially updating a physician.
///
/// Only the supplied members (`name`, `specialty`) change; the CRM never does.
///
/// Checks run in order: CRM validity, then existence, then the body. A
/// request with both an unknown CRM and an unreadable body is a 404.
///
/// # Response
///
/// - `200 OK` - Returns the updated record
/// - `400 Bad Request` - Invalid CRM, no member supplied, or a blank member
/// - `404 Not Found` - No physician with that CRM
///
/// # Example
///
/// ```http
/// PUT /physicians/111111 HTTP/1.1
/// Host: localhost:3000
/// Content-Type: application/json
///
/// {"specialty": "Geriatria"}
/// ```
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    CrmPath(id): CrmPath,
    body: Result<PhysicianBody, RestError>,
) -> RestResult<Response>
where
    S: PhysicianStorage,
{
    let body = match body {
        Ok(body) => body,
        Err(err) => {
            state.storage().get(id)?;
            debug!(crm = id, error = %err, "Rejecting update body");
            return Err(err);
        }
    };

    debug!(
        crm = id,
        name = ?body.name(),
        specialty = ?body.specialty(),
        "Processing update request"
    );

    let updated = state.storage().update(id, body.into_update())?;

    Ok((StatusCode::OK, Json(updated)).into_response())
}
