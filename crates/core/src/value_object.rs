//! Value object trait + shared value objects.
//!
//! Value objects have **no identity**: they are defined entirely by their
//! attribute values and are immutable once constructed.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects (equality by value, not identity).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Stock-keeping unit.
///
/// SKUs are trimmed, non-empty, and uppercased for catalog-wide uniqueness
/// checks (uniqueness itself is enforced by the backing store).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    pub fn new(raw: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Sku {}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
