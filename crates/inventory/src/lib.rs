//! Stock movement domain module.
//!
//! Transactions are immutable, append-only facts; validation happens before
//! anything is written. A stock_out may never take the last-known stock below
//! zero.

pub mod movement;
pub mod transaction;

pub use movement::{apply_movement, MovementKind};
pub use transaction::{NewTransaction, Transaction};
