//! # clinic-registry - Physician Registry
//!
//! This crate owns the physician collection behind the Clinic API. It enforces
//! CRM validity and uniqueness, generates CRMs for new physicians, and applies
//! partial updates. Nothing is persisted: the collection lives as long as the
//! [`PhysicianRegistry`] value that holds it.
//!
//! ## Data Model
//!
//! | Field | Type | Rule |
//! |-------|------|------|
//! | `id` | integer (CRM) | unique, immutable, in `[100000, 999999]` |
//! | `name` | text | non-empty after trimming |
//! | `specialty` | text | non-empty after trimming |
//!
//! ## CRM Generation
//!
//! A new physician receives one above the highest CRM currently registered
//! (100000 when the registry is empty). Freed CRMs are not tracked: deleting
//! the highest record lowers the next generated CRM.
//!
//! ## Quick Start
//!
//! ```
//! use clinic_registry::{NewPhysician, PhysicianRegistry, PhysicianStorage, RegistryError};
//!
//! let registry = PhysicianRegistry::seeded();
//! assert_eq!(registry.list().len(), 3);
//!
//! let dermatologist = registry.get(222_222).unwrap();
//! assert_eq!(dermatologist.specialty(), "Dermatologia");
//!
//! assert!(matches!(registry.get(42), Err(RegistryError::InvalidIdentifier { .. })));
//! assert!(matches!(registry.get(999_999), Err(RegistryError::NotFound { .. })));
//!
//! let created = registry.create(NewPhysician::new("Dr. Novo", "Neurologia")).unwrap();
//! assert_eq!(created.id().value(), 333_334);
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - CRM and physician record types
//! - [`error`] - Error types for all operations
//! - [`core`] - The [`PhysicianStorage`] trait
//! - [`registry`] - The in-memory [`PhysicianRegistry`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod core;
pub mod error;
pub mod registry;
pub mod types;

pub use crate::core::PhysicianStorage;
pub use error::{Field, FieldError, RegistryError, RegistryResult};
pub use registry::PhysicianRegistry;
pub use types::{Crm, NewPhysician, PhysicianRecord, PhysicianUpdate};
