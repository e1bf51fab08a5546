//! Axum extractors for Clinic API requests.
//!
//! - [`CrmPath`] - Extract the CRM from the request path
//! - [`PhysicianBody`] - Extract physician fields from a JSON request body

mod crm_path;
mod physician_body;

pub use crm_path::CrmPath;
pub use physician_body::PhysicianBody;
