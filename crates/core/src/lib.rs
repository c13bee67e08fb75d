//! `smartshelf-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{
    AlertId, AuditLogId, CategoryId, ProductId, PurchaseOrderId, StockRequestId, TransactionId,
    UserId, VendorId,
};
pub use value_object::{Sku, ValueObject};
