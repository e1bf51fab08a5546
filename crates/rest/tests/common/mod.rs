//! Common test utilities for Clinic API testing.
//!
//! - [`harness`] - Test server wrapper
//! - [`fixtures`] - Seed data and request bodies
//! - [`assertions`] - HTTP response assertions

// Each test binary uses a different subset of the helpers
#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
pub mod harness;
