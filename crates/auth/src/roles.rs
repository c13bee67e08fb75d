//! Role model for RBAC.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use smartshelf_core::DomainError;

/// Closed role enumeration.
///
/// Behavior that differs by role (visible data, editable fields, allowed
/// transitions) is expressed with exhaustive matches on this enum rather than
/// ad hoc string comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    WarehouseManager,
    Vendor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::WarehouseManager => "warehouse_manager",
            Role::Vendor => "vendor",
        }
    }

    /// Internal staff (non-vendor) roles.
    pub fn is_internal(&self) -> bool {
        match self {
            Role::Admin | Role::WarehouseManager => true,
            Role::Vendor => false,
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "warehouse_manager" => Ok(Role::WarehouseManager),
            "vendor" => Ok(Role::Vendor),
            other => Err(DomainError::validation(format!("unknown role: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_round_trip_through_strings() {
        for role in [Role::Admin, Role::WarehouseManager, Role::Vendor] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_a_validation_error() {
        let err = "superuser".parse::<Role>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn vendors_are_not_internal_staff() {
        assert!(Role::Admin.is_internal());
        assert!(Role::WarehouseManager.is_internal());
        assert!(!Role::Vendor.is_internal());
    }
}
