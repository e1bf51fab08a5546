//! Clinic API test harness.
//!
//! Provides a test server backed by a fresh registry, so tests never observe
//! each other's mutations.

use axum_test::{TestResponse, TestServer};
use clinic_registry::PhysicianRegistry;
use clinic_rest::{ServerConfig, create_app_with_config};
use serde_json::Value;

/// Test harness for Clinic API testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_read() {
///     let harness = ClinicTestHarness::seeded();
///
///     let response = harness.get("/physicians/111111").await;
///
///     assert_eq!(response.status_code(), 200);
/// }
/// ```
pub struct ClinicTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// Server configuration.
    pub config: ServerConfig,
}

impl ClinicTestHarness {
    /// Creates a harness over the seeded registry.
    pub fn seeded() -> Self {
        Self::new(PhysicianRegistry::seeded(), ServerConfig::for_testing())
    }

    /// Creates a harness over an empty registry.
    pub fn empty() -> Self {
        Self::new(PhysicianRegistry::new(), ServerConfig::for_testing())
    }

    /// Creates a harness over the seeded registry with a custom configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        Self::new(PhysicianRegistry::seeded(), config)
    }

    fn new(registry: PhysicianRegistry, config: ServerConfig) -> Self {
        let app = create_app_with_config(registry, config.clone());
        let server = TestServer::new(app).expect("Failed to create test server");
        Self { server, config }
    }

    /// Makes a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.server.get(path).await
    }

    /// Makes a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.server.post(path).json(&body).await
    }

    /// Makes a PUT request with JSON body.
    pub async fn put(&self, path: &str, body: Value) -> TestResponse {
        self.server.put(path).json(&body).await
    }

    /// Makes a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.server.delete(path).await
    }

    /// Lists the physicians currently registered.
    pub async fn list(&self) -> Vec<Value> {
        self.get("/physicians").await.json()
    }
}
