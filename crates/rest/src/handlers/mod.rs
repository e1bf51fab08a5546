//! HTTP request handlers for the Clinic API.
//!
//! - [`list`] - List every physician
//! - [`read`] - Read a physician by CRM
//! - [`create`] - Register a physician
//! - [`update`] - Partially update a physician
//! - [`delete`] - Remove a physician
//! - [`health`] - Health, liveness and readiness endpoints
//! - [`api_docs`] - OpenAPI document
//! - [`index`] - Root banner

pub mod api_docs;
pub mod create;
pub mod delete;
pub mod health;
pub mod index;
pub mod list;
pub mod read;
pub mod update;

// Re-export handlers for convenience
pub use api_docs::api_docs_handler;
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use index::index_handler;
pub use list::list_handler;
pub use read::read_handler;
pub use update::update_handler;
