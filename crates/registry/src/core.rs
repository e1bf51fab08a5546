//! Physician storage trait.
//!
//! This module defines the [`PhysicianStorage`] trait, the seam between the
//! HTTP layer and whatever holds the physician collection. The only
//! implementation is the in-memory [`PhysicianRegistry`](crate::PhysicianRegistry).
//!
//! Identifiers are taken as raw `i64` values so that every implementation
//! applies the same validity rule: anything outside `[100000, 999999]` fails
//! with [`RegistryError::InvalidIdentifier`](crate::RegistryError::InvalidIdentifier)
//! before the collection is consulted.

use crate::error::RegistryResult;
use crate::types::{NewPhysician, PhysicianRecord, PhysicianUpdate};

/// CRUD operations over the physician collection.
///
/// # Example
///
/// ```
/// use clinic_registry::{NewPhysician, PhysicianRegistry, PhysicianStorage, PhysicianUpdate};
///
/// let registry = PhysicianRegistry::seeded();
///
/// let created = registry.create(NewPhysician::new("Dr. Novo", "Neurologia")).unwrap();
/// assert_eq!(created.id().value(), 333_334);
///
/// let updated = registry
///     .update(333_334, PhysicianUpdate::default().with_specialty("Neurocirurgia"))
///     .unwrap();
/// assert_eq!(updated.specialty(), "Neurocirurgia");
///
/// registry.delete(333_334).unwrap();
/// assert!(registry.get(333_334).is_err());
/// ```
pub trait PhysicianStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Returns the number of registered physicians.
    fn count(&self) -> usize;

    /// Returns every physician in insertion order.
    fn list(&self) -> Vec<PhysicianRecord>;

    /// Returns the physician registered under `id`.
    ///
    /// # Errors
    ///
    /// * `InvalidIdentifier` - If `id` is outside the CRM range
    /// * `NotFound` - If no physician has that CRM
    fn get(&self, id: i64) -> RegistryResult<PhysicianRecord>;

    /// Registers a new physician under a freshly generated CRM.
    ///
    /// # Errors
    ///
    /// * `InvalidField` - If `name` or `specialty` is missing or blank
    /// * `IdentifiersExhausted` - If no CRM is left to assign
    fn create(&self, input: NewPhysician) -> RegistryResult<PhysicianRecord>;

    /// Applies the supplied fields to the physician registered under `id`.
    ///
    /// # Errors
    ///
    /// * `InvalidIdentifier` - If `id` is outside the CRM range
    /// * `NotFound` - If no physician has that CRM
    /// * `InvalidField` - If no field is supplied, or a supplied one is blank
    fn update(&self, id: i64, changes: PhysicianUpdate) -> RegistryResult<PhysicianRecord>;

    /// Removes the physician registered under `id`.
    ///
    /// # Errors
    ///
    /// * `InvalidIdentifier` - If `id` is outside the CRM range
    /// * `NotFound` - If no physician has that CRM
    fn delete(&self, id: i64) -> RegistryResult<()>;
}
