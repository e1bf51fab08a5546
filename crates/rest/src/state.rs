//! Application state for the Clinic REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the physician storage and the server configuration.

use std::sync::Arc;

use clinic_registry::PhysicianStorage;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage type (must implement [`PhysicianStorage`])
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use clinic_registry::PhysicianRegistry;
/// use clinic_rest::{AppState, ServerConfig};
///
/// let registry = PhysicianRegistry::seeded();
/// let state = AppState::new(Arc::new(registry), ServerConfig::default());
/// assert_eq!(state.base_url(), "http://localhost:3000");
/// ```
pub struct AppState<S> {
    /// The physician storage.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: PhysicianStorage> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the physician storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the base URL for the server, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }
}
