//! Joined display rows.
//!
//! Reads return these instead of raw records so consumers never re-join
//! names client-side; a missing referent degrades to `None`, it never fails
//! the read.

use serde::Serialize;
use uuid::Uuid;

use smartshelf_core::Entity;
use smartshelf_inventory::Transaction;
use smartshelf_products::Product;
use smartshelf_purchasing::{PurchaseOrder, StockRequest};

/// Product plus resolved category and vendor names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub product: Product,
    pub category_name: Option<String>,
    pub vendor_name: Option<String>,
}

impl ProductRow {
    pub fn row_id(&self) -> Uuid {
        *self.product.id().as_uuid()
    }
}

/// Transaction plus the product's display coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    pub transaction: Transaction,
    pub product_name: Option<String>,
    pub product_sku: Option<String>,
}

impl TransactionRow {
    pub fn row_id(&self) -> Uuid {
        *self.transaction.id().as_uuid()
    }
}

/// Purchase order plus the vendor's display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseOrderRow {
    pub order: PurchaseOrder,
    pub vendor_name: Option<String>,
}

impl PurchaseOrderRow {
    pub fn row_id(&self) -> Uuid {
        *self.order.id().as_uuid()
    }
}

/// Stock request plus product and vendor display names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockRequestRow {
    pub request: StockRequest,
    pub product_name: Option<String>,
    pub product_sku: Option<String>,
    pub vendor_name: Option<String>,
}

impl StockRequestRow {
    pub fn row_id(&self) -> Uuid {
        *self.request.id().as_uuid()
    }
}
