//! Pure authorization checks for role-guarded operations.
//!
//! - No IO
//! - No panics
//! - No business logic (policy checks only)

use smartshelf_core::{DomainError, DomainResult, VendorId};

use crate::roles::Role;
use crate::session::Session;

/// Only internal staff may create/edit catalog entries; only admins delete.
pub fn ensure_can_manage_catalog(session: &Session, deleting: bool) -> DomainResult<()> {
    match (session.role, deleting) {
        (Role::Admin, _) => Ok(()),
        (Role::WarehouseManager, false) => Ok(()),
        (Role::WarehouseManager, true) | (Role::Vendor, _) => Err(DomainError::Unauthorized),
    }
}

/// Only the counterparty vendor may respond to an order/request addressed to it.
pub fn ensure_vendor_counterparty(session: &Session, vendor_id: VendorId) -> DomainResult<()> {
    match session.role {
        Role::Vendor if session.vendor_id == Some(vendor_id) => Ok(()),
        _ => Err(DomainError::Unauthorized),
    }
}

/// Only internal staff may move an approved purchase order to completed.
pub fn ensure_can_complete_order(session: &Session) -> DomainResult<()> {
    if session.role.is_internal() {
        Ok(())
    } else {
        Err(DomainError::Unauthorized)
    }
}

/// Audit logs are visible to admins only.
pub fn ensure_can_view_audit_logs(session: &Session) -> DomainResult<()> {
    match session.role {
        Role::Admin => Ok(()),
        Role::WarehouseManager | Role::Vendor => Err(DomainError::Unauthorized),
    }
}
