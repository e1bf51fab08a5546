//! Route configuration for the Clinic API.
//!
//! This module contains the routing configuration that maps HTTP paths
//! to handlers.

pub mod physician_routes;

pub use physician_routes::create_routes;
