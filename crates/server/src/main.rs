//! Clinic API server
//!
//! Serves the in-memory physician registry over HTTP.

use clap::Parser;
use clinic_registry::{PhysicianRegistry, PhysicianStorage};
use clinic_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

/// Resolves once the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let registry = PhysicianRegistry::seeded();

    info!(
        port = config.port,
        host = %config.host,
        backend = registry.backend_name(),
        physicians = registry.count(),
        "Starting Clinic API server"
    );

    let app = create_app_with_config(registry, config.clone());
    serve(app, &config).await
}
