//! `smartshelf-auth`: roles, sessions, and pure authorization checks.
//!
//! This crate is intentionally decoupled from HTTP and storage. Role is a
//! closed enumeration matched exhaustively wherever behavior differs, and the
//! session is an explicit value passed into every scoped operation, never
//! ambient global state.

pub mod authorize;
pub mod roles;
pub mod session;

pub use authorize::{
    ensure_can_complete_order, ensure_can_manage_catalog, ensure_can_view_audit_logs,
    ensure_vendor_counterparty,
};
pub use roles::Role;
pub use session::{Scope, Session};
