//! Physician route configuration.
//!
//! Defines all routes for the Clinic API.

use axum::{Router, routing::get};
use clinic_registry::PhysicianStorage;

use crate::handlers;
use crate::state::AppState;

/// Creates all Clinic API routes.
///
/// # Routes
///
/// ## Service
/// - `GET /` - Banner
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
/// - `GET /api-docs` - OpenAPI document
///
/// ## Physicians
/// - `GET /physicians` - List
/// - `POST /physicians` - Create
/// - `GET /physicians/{id}` - Read
/// - `PUT /physicians/{id}` - Update
/// - `DELETE /physicians/{id}` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: PhysicianStorage + 'static,
{
    Router::new()
        // Service routes
        .route("/", get(handlers::index_handler))
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        .route("/api-docs", get(handlers::api_docs_handler::<S>))
        // Physician routes
        .route(
            "/physicians",
            get(handlers::list_handler::<S>).post(handlers::create_handler::<S>),
        )
        .route(
            "/physicians/{id}",
            get(handlers::read_handler::<S>)
                .put(handlers::update_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        )
        // State
        .with_state(state)
}
