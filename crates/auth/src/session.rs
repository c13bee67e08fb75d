//! Explicit session object (dependency-injected, never ambient).

use serde::{Deserialize, Serialize};

use smartshelf_core::{UserId, VendorId};

use crate::roles::Role;

/// The authenticated actor for one sequence of operations.
///
/// Constructed once at sign-in and passed explicitly to every component that
/// needs role or vendor scoping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    /// Bound vendor for vendor-role sessions.
    pub vendor_id: Option<VendorId>,
}

impl Session {
    pub fn internal(user_id: UserId, full_name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            full_name: full_name.into(),
            email: email.into(),
            role,
            vendor_id: None,
        }
    }

    pub fn vendor(
        user_id: UserId,
        full_name: impl Into<String>,
        email: impl Into<String>,
        vendor_id: VendorId,
    ) -> Self {
        Self {
            user_id,
            full_name: full_name.into(),
            email: email.into(),
            role: Role::Vendor,
            vendor_id: Some(vendor_id),
        }
    }

    /// Data visibility scope for this session.
    ///
    /// Vendors see only rows bound to their vendor; internal staff see all. A
    /// vendor session with no vendor binding sees nothing rather than
    /// everything.
    pub fn scope(&self) -> Scope {
        match self.role {
            Role::Admin | Role::WarehouseManager => Scope::All,
            Role::Vendor => match self.vendor_id {
                Some(vendor_id) => Scope::Vendor(vendor_id),
                None => Scope::Nothing,
            },
        }
    }
}

/// Row-visibility scope derived from a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Scope {
    All,
    Vendor(VendorId),
    Nothing,
}

impl Scope {
    /// Whether a row bound to `vendor_id` (or unbound) is visible.
    pub fn allows_vendor(&self, vendor_id: Option<VendorId>) -> bool {
        match self {
            Scope::All => true,
            Scope::Vendor(own) => vendor_id == Some(*own),
            Scope::Nothing => false,
        }
    }
}
