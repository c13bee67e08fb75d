//! Append-only audit log records.

pub mod log;

pub use log::{AuditAction, AuditLog};
