//! # clinic-rest - Clinic REST API
//!
//! This crate exposes the physician registry over HTTP using
//! [axum](https://docs.rs/axum). Handlers translate requests into calls on a
//! [`PhysicianStorage`] and serialize the results or errors back to JSON.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use clinic_registry::PhysicianRegistry;
//! use clinic_rest::{create_app_with_config, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(PhysicianRegistry::seeded(), config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern | Success |
//! |-----------|-------------|-------------|---------|
//! | list | GET | `/physicians` | 200 |
//! | read | GET | `/physicians/{id}` | 200 |
//! | create | POST | `/physicians` | 201 |
//! | update | PUT | `/physicians/{id}` | 200 |
//! | delete | DELETE | `/physicians/{id}` | 204 |
//! | health | GET | `/health` | 200 |
//! | API document | GET | `/api-docs` | 200 |
//!
//! Records are JSON objects `{"id": 111111, "name": "...", "specialty": "..."}`.
//!
//! ## Error Handling
//!
//! Errors are returned as `{"code": "...", "message": "..."}`:
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 400 | invalid-identifier | CRM is not an integer in [100000, 999999] |
//! | 400 | invalid-field | Missing, blank or non-string field, or empty update |
//! | 400 | invalid-body | Body is not a JSON object |
//! | 413 | payload-too-large | Body exceeds the configured limit |
//! | 415 | unsupported-media-type | Body is not JSON |
//! | 404 | not-found | No physician with that CRM |
//! | 409 | identifiers-exhausted | No CRM left to assign |
//! | 500 | internal-error | Internal server error |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Axum extractors for the CRM path segment and request bodies
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use clinic_registry::PhysicianStorage;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default settings.
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: PhysicianStorage + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// This function sets up the routes, the shared state and the middleware
/// stack (tracing, timeout, body limit and, if enabled, CORS).
///
/// # Example
///
/// ```rust
/// use clinic_registry::PhysicianRegistry;
/// use clinic_rest::{create_app_with_config, ServerConfig};
///
/// let config = ServerConfig {
///     port: 8080,
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(PhysicianRegistry::seeded(), config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: PhysicianStorage + 'static,
{
    info!(
        backend = storage.backend_name(),
        physicians = storage.count(),
        "Creating Clinic API router"
    );

    // Create application state
    let state = AppState::new(Arc::new(storage), config.clone());

    // Build the router with all physician routes
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = router.layer(DefaultBodyLimit::max(config.max_body_size));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG`, when set,
/// takes precedence over `level`.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "clinic_rest={level},clinic_registry={level},clinic_server={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
