//! Error types for the physician registry.
//!
//! Every failing registry operation returns a [`RegistryError`] and leaves the
//! collection untouched.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use std::fmt;

use thiserror::Error;

use crate::types::Crm;

/// The primary error type for registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The identifier is not an integer in `[100000, 999999]`.
    #[error(
        "invalid CRM '{value}': must be a six-digit integer between {min} and {max}",
        min = Crm::MIN,
        max = Crm::MAX
    )]
    InvalidIdentifier { value: String },

    /// A physician field is missing, blank or has the wrong type, or an
    /// update carried no field at all.
    #[error(transparent)]
    InvalidField(#[from] FieldError),

    /// No physician is registered under the identifier.
    #[error("physician not found: {crm}")]
    NotFound { crm: Crm },

    /// The next generated identifier would fall outside the CRM range.
    #[error("no CRM left to assign: highest registered CRM is {highest}")]
    IdentifiersExhausted { highest: Crm },
}

impl RegistryError {
    /// Creates an [`RegistryError::InvalidIdentifier`] for the given raw value.
    pub fn invalid_identifier(value: impl fmt::Display) -> Self {
        RegistryError::InvalidIdentifier {
            value: value.to_string(),
        }
    }
}

/// Physician fields subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Specialty,
}

impl Field {
    /// Returns the JSON member name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Specialty => "specialty",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures on physician fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("field '{0}' is required")]
    Missing(Field),

    #[error("field '{0}' must not be blank")]
    Blank(Field),

    #[error("field '{0}' must be a string")]
    NotAString(Field),

    #[error("no field to update: supply at least one of 'name' or 'specialty'")]
    NothingToUpdate,
}

impl FieldError {
    /// Returns the offending field, if the error concerns a single one.
    pub fn field(&self) -> Option<Field> {
        match self {
            FieldError::Missing(field) | FieldError::Blank(field) | FieldError::NotAString(field) => {
                Some(*field)
            }
            FieldError::NothingToUpdate => None,
        }
    }
}

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
