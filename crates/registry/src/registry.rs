//! In-memory physician registry.

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::core::PhysicianStorage;
use crate::error::{RegistryError, RegistryResult};
use crate::types::{Crm, NewPhysician, PhysicianRecord, PhysicianUpdate};

/// Physicians every process starts with, in insertion order.
const SEED: [(Crm, &str, &str); 3] = [
    (Crm::new_unchecked(111_111), "Dr. Fulano", "Cardiologia"),
    (Crm::new_unchecked(222_222), "Dr. Sicrano", "Dermatologia"),
    (Crm::new_unchecked(333_333), "Dra. Beltrana", "Pediatria"),
];

/// Process-memory store of physician records.
///
/// The collection is a `Vec` kept in insertion order behind a single
/// [`RwLock`]. Reads share the lock; each mutation (including CRM generation
/// and the insert that follows it) runs under one write acquisition.
///
/// CRMs are generated as one above the highest CRM currently registered, so
/// deleting the highest record lowers the next generated CRM.
#[derive(Debug, Default)]
pub struct PhysicianRegistry {
    records: RwLock<Vec<PhysicianRecord>>,
}

impl PhysicianRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the three startup physicians
    /// (CRMs 111111, 222222 and 333333).
    pub fn seeded() -> Self {
        let records = SEED
            .iter()
            .map(|&(crm, name, specialty)| {
                PhysicianRecord::new(crm, name.to_string(), specialty.to_string())
            })
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }
}

/// Returns the CRM the next created physician receives.
///
/// This is the highest live CRM plus one. An empty registry starts at
/// [`Crm::FIRST`] (100000) rather than 1, so generated CRMs always stay in
/// range.
fn next_crm(records: &[PhysicianRecord]) -> RegistryResult<Crm> {
    match records.iter().map(PhysicianRecord::id).max() {
        Some(highest) => highest
            .successor()
            .ok_or(RegistryError::IdentifiersExhausted { highest }),
        None => Ok(Crm::FIRST),
    }
}

fn position(records: &[PhysicianRecord], crm: Crm) -> RegistryResult<usize> {
    records
        .iter()
        .position(|record| record.id() == crm)
        .ok_or(RegistryError::NotFound { crm })
}

impl PhysicianStorage for PhysicianRegistry {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn count(&self) -> usize {
        self.records.read().len()
    }

    fn list(&self) -> Vec<PhysicianRecord> {
        self.records.read().clone()
    }

    fn get(&self, id: i64) -> RegistryResult<PhysicianRecord> {
        let crm = Crm::try_from(id)?;
        let records = self.records.read();
        let index = position(&records, crm)?;
        Ok(records[index].clone())
    }

    fn create(&self, input: NewPhysician) -> RegistryResult<PhysicianRecord> {
        let (name, specialty) = input.validate()?;

        let mut records = self.records.write();
        let crm = next_crm(&records)?;
        let record = PhysicianRecord::new(crm, name, specialty);
        records.push(record.clone());

        info!(crm = %crm, total = records.len(), "Physician registered");
        Ok(record)
    }

    fn update(&self, id: i64, changes: PhysicianUpdate) -> RegistryResult<PhysicianRecord> {
        let crm = Crm::try_from(id)?;

        let mut records = self.records.write();
        let index = position(&records, crm)?;
        let (name, specialty) = changes.validate()?;

        let record = &mut records[index];
        if let Some(name) = name {
            record.set_name(name);
        }
        if let Some(specialty) = specialty {
            record.set_specialty(specialty);
        }

        debug!(crm = %crm, "Physician updated");
        Ok(record.clone())
    }

    fn delete(&self, id: i64) -> RegistryResult<()> {
        let crm = Crm::try_from(id)?;

        let mut records = self.records.write();
        let index = position(&records, crm)?;
        records.remove(index);

        info!(crm = %crm, total = records.len(), "Physician removed");
        Ok(())
    }
}
