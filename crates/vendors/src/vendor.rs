use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smartshelf_core::{DomainError, DomainResult, Entity, VendorId};

/// Vendor reference entity.
///
/// The performance score is externally assigned (0..=100), not computed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    id: VendorId,
    name: String,
    email: String,
    phone: Option<String>,
    address: Option<String>,
    performance: u8,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Fields for registering a vendor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVendor {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub performance: u8,
}

impl Vendor {
    pub fn create(id: VendorId, spec: NewVendor, at: DateTime<Utc>) -> DomainResult<Self> {
        if spec.name.trim().is_empty() {
            return Err(DomainError::validation("vendor name cannot be empty"));
        }
        if !spec.email.contains('@') {
            return Err(DomainError::validation("vendor email is malformed"));
        }
        if spec.performance > 100 {
            return Err(DomainError::validation(
                "performance score must be within 0..=100",
            ));
        }
        Ok(Self {
            id,
            name: spec.name.trim().to_string(),
            email: spec.email.trim().to_string(),
            phone: spec.phone,
            address: spec.address,
            performance: spec.performance,
            created_at: at,
            updated_at: at,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn performance(&self) -> u8 {
        self.performance
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Performance is assigned externally; this just records the new value.
    pub fn set_performance(&mut self, performance: u8, at: DateTime<Utc>) -> DomainResult<()> {
        if performance > 100 {
            return Err(DomainError::validation(
                "performance score must be within 0..=100",
            ));
        }
        self.performance = performance;
        self.updated_at = at;
        Ok(())
    }
}

impl Entity for Vendor {
    type Id = VendorId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
