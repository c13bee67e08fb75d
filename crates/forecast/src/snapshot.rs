//! Snapshot inputs for forecast jobs.
//!
//! Snapshots are plain data copied out of the caller's scoped caches; jobs
//! never reach into storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smartshelf_core::{ProductId, VendorId};

/// One product's current position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub product_id: ProductId,
    pub sku: String,
    pub name: String,
    pub vendor_id: Option<VendorId>,
    pub vendor_name: Option<String>,
    pub current_stock: i64,
    pub reorder_level: i64,
}

/// One outbound (stock_out) movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundUsage {
    pub product_id: ProductId,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Inventory position plus outbound history, as of a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub as_of: DateTime<Utc>,
    pub products: Vec<ProductSnapshot>,
    pub outbound: Vec<OutboundUsage>,
}

impl InventorySnapshot {
    pub fn new(as_of: DateTime<Utc>) -> Self {
        Self {
            as_of,
            products: Vec::new(),
            outbound: Vec::new(),
        }
    }
}
