//! Test fixtures for Clinic API testing.
//!
//! Mirrors the physicians every registry is seeded with.

use serde_json::{Value, json};

/// A seeded physician.
#[derive(Debug, Clone, Copy)]
pub struct SeedPhysician {
    /// CRM.
    pub crm: u32,
    /// Name.
    pub name: &'static str,
    /// Specialty.
    pub specialty: &'static str,
}

impl SeedPhysician {
    /// Returns the record as the API serializes it.
    pub fn to_json(&self) -> Value {
        json!({ "id": self.crm, "name": self.name, "specialty": self.specialty })
    }

    /// Returns the resource path.
    pub fn path(&self) -> String {
        format!("/physicians/{}", self.crm)
    }
}

/// Dr. Fulano, cardiology.
pub const FULANO: SeedPhysician = SeedPhysician {
    crm: 111_111,
    name: "Dr. Fulano",
    specialty: "Cardiologia",
};

/// Dr. Sicrano, dermatology.
pub const SICRANO: SeedPhysician = SeedPhysician {
    crm: 222_222,
    name: "Dr. Sicrano",
    specialty: "Dermatologia",
};

/// Dra. Beltrana, pediatrics.
pub const BELTRANA: SeedPhysician = SeedPhysician {
    crm: 333_333,
    name: "Dra. Beltrana",
    specialty: "Pediatria",
};

/// The seed set in insertion order.
pub const SEED: [SeedPhysician; 3] = [FULANO, SICRANO, BELTRANA];

/// Body of a valid create request.
pub fn new_physician(name: &str, specialty: &str) -> Value {
    json!({ "name": name, "specialty": specialty })
}
