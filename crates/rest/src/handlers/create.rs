//! Create handler.
//!
//! `POST [base]/physicians`

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use clinic_registry::PhysicianStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::PhysicianBody;
use crate::state::AppState;

/// Handler for registering a physician.
///
/// The server assigns the CRM; an `id` or `crm` in the body is ignored.
///
/// # Response
///
/// - `201 Created` - Returns the new record with a `Location` header
/// - `400 Bad Request` - `name` or `specialty` missing, blank or not a string
/// - `409 Conflict` - No CRM left to assign
/// - `413 Payload Too Large` / `415 Unsupported Media Type` - Body cannot be read
///
/// # Example
///
/// ```http
/// POST /physicians HTTP/1.1
/// Host: localhost:3000
/// Content-Type: application/json
///
/// {"name": "Dr. Novo", "specialty": "Neurologia"}
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    body: PhysicianBody,
) -> RestResult<Response>
where
    S: PhysicianStorage,
{
    debug!(
        name = ?body.name(),
        specialty = ?body.specialty(),
        "Processing create request"
    );

    let created = state.storage().create(body.into_new_physician())?;

    let location = format!("{}/physicians/{}", state.base_url(), created.id());
    let location = HeaderValue::from_str(&location).map_err(|e| RestError::InternalError {
        message: format!("Invalid Location header '{}': {}", location, e),
    })?;
    let mut headers = HeaderMap::new();
    headers.insert(header::LOCATION, location);

    debug!(crm = %created.id(), "Physician created");

    Ok((StatusCode::CREATED, headers, Json(created)).into_response())
}
