//! CRM license number type.
//!
//! This module defines [`Crm`], the identifier of a physician record. A CRM is
//! always a six-digit positive integer; the type cannot hold anything else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// A validated CRM license number in `[100000, 999999]`.
///
/// # Examples
///
/// ```
/// use clinic_registry::types::Crm;
///
/// let crm: Crm = "222222".parse().unwrap();
/// assert_eq!(crm.value(), 222_222);
///
/// assert!(Crm::try_from(99_999).is_err());
/// assert!("12ab".parse::<Crm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Crm(u32);

impl Crm {
    /// Lowest valid CRM.
    pub const MIN: u32 = 100_000;

    /// Highest valid CRM.
    pub const MAX: u32 = 999_999;

    /// The lowest CRM, assigned first by an empty registry.
    pub const FIRST: Crm = Crm(Crm::MIN);

    /// Wraps a value known to be in range.
    pub(crate) const fn new_unchecked(value: u32) -> Crm {
        debug_assert!(value >= Crm::MIN && value <= Crm::MAX);
        Crm(value)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns the CRM immediately after this one, or `None` past [`Crm::MAX`].
    pub fn successor(&self) -> Option<Crm> {
        Crm::try_from(i64::from(self.0) + 1).ok()
    }
}

impl TryFrom<i64> for Crm {
    type Error = RegistryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Crm::MIN)..=i64::from(Crm::MAX)).contains(&value) {
            Ok(Crm(value as u32))
        } else {
            Err(RegistryError::invalid_identifier(value))
        }
    }
}

impl FromStr for Crm {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .parse()
            .map_err(|_| RegistryError::invalid_identifier(s))?;
        Crm::try_from(value)
    }
}

impl From<Crm> for u32 {
    fn from(crm: Crm) -> Self {
        crm.0
    }
}

impl fmt::Display for Crm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
