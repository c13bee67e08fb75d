//! In-app alert records.

pub mod alert;

pub use alert::{Alert, AlertKind, Severity};
