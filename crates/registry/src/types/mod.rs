//! Core types for physician records.

mod crm;
mod physician;

pub use crm::Crm;
pub use physician::{NewPhysician, PhysicianRecord, PhysicianUpdate};
