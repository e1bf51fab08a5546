//! Physician record types.
//!
//! [`PhysicianRecord`] is what the registry stores and hands out.
//! [`NewPhysician`] and [`PhysicianUpdate`] are the unvalidated inputs of the
//! create and update operations; the registry checks them before touching the
//! collection.

use serde::Serialize;

use crate::error::{Field, FieldError};
use crate::types::Crm;

/// A registered physician.
///
/// Serializes as `{ "id": 111111, "name": "...", "specialty": "..." }`.
/// Records only come out of the registry, so they cannot be deserialized:
///
/// ```compile_fail
/// let record: clinic_registry::PhysicianRecord =
///     serde_json::from_str(r#"{"id": 111111, "name": "", "specialty": ""}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhysicianRecord {
    /// The CRM license number.
    id: Crm,

    /// Display name.
    name: String,

    /// Medical specialty.
    specialty: String,
}

impl PhysicianRecord {
    /// Creates a record from already validated parts.
    pub(crate) fn new(id: Crm, name: String, specialty: String) -> Self {
        Self {
            id,
            name,
            specialty,
        }
    }

    /// Returns the CRM.
    pub fn id(&self) -> Crm {
        self.id
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the specialty.
    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_specialty(&mut self, specialty: String) {
        self.specialty = specialty;
    }
}

/// Input of the create operation.
///
/// Both fields are required; they are optional here so that a missing field
/// surfaces as a [`FieldError::Missing`] from the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPhysician {
    /// Display name.
    pub name: Option<String>,

    /// Medical specialty.
    pub specialty: Option<String>,
}

impl NewPhysician {
    /// Creates a complete create request.
    pub fn new(name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            specialty: Some(specialty.into()),
        }
    }

    /// Validates both fields, returning their trimmed values.
    pub(crate) fn validate(&self) -> Result<(String, String), FieldError> {
        let name = required(Field::Name, self.name.as_deref())?;
        let specialty = required(Field::Specialty, self.specialty.as_deref())?;
        Ok((name, specialty))
    }
}

/// Input of the update operation. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhysicianUpdate {
    /// New display name.
    pub name: Option<String>,

    /// New medical specialty.
    pub specialty: Option<String>,
}

impl PhysicianUpdate {
    /// Sets the name to update.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the specialty to update.
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    /// Returns `true` if no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.specialty.is_none()
    }

    /// Validates the supplied fields, returning their trimmed values.
    pub(crate) fn validate(&self) -> Result<(Option<String>, Option<String>), FieldError> {
        if self.is_empty() {
            return Err(FieldError::NothingToUpdate);
        }
        let name = self
            .name
            .as_deref()
            .map(|value| required(Field::Name, Some(value)))
            .transpose()?;
        let specialty = self
            .specialty
            .as_deref()
            .map(|value| required(Field::Specialty, Some(value)))
            .transpose()?;
        Ok((name, specialty))
    }
}

fn required(field: Field, value: Option<&str>) -> Result<String, FieldError> {
    let value = value.ok_or(FieldError::Missing(field))?.trim();
    if value.is_empty() {
        return Err(FieldError::Blank(field));
    }
    Ok(value.to_string())
}
