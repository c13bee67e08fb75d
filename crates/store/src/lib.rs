//! `smartshelf-store`
//!
//! **Responsibility:** the backing store for the whole system.
//!
//! An in-memory, single-process store with the same contract a hosted
//! Postgres-plus-realtime backend would offer:
//! - every mutation commits under one lock, then announces itself on the
//!   change feed (commit first, notify second)
//! - reads return joined display rows, already filtered to the caller's
//!   visibility scope
//! - transactions and audit logs are append-only

pub mod error;
pub mod memory;
pub mod profile;
pub mod rows;
pub mod views;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use profile::Profile;
pub use rows::{ProductRow, PurchaseOrderRow, StockRequestRow, TransactionRow};
pub use views::{AlertsView, ProductsView, PurchaseOrdersView, StockRequestsView, TransactionsView};
