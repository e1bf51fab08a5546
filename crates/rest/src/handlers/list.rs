//! List handler.
//!
//! `GET [base]/physicians`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_registry::PhysicianStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for listing physicians.
///
/// Returns every registered physician in insertion order. There is no
/// pagination or filtering.
///
/// # Response
///
/// - `200 OK` - JSON array of physician records
pub async fn list_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: PhysicianStorage,
{
    let physicians = state.storage().list();

    debug!(count = physicians.len(), "Listing physicians");

    Ok((StatusCode::OK, Json(physicians)).into_response())
}
