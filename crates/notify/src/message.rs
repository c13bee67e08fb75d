//! Outbound message shapes.

use serde::{Deserialize, Serialize};

use smartshelf_core::{ProductId, PurchaseOrderId, StockRequestId};

/// Which workflow a vendor email belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorEmailKind {
    PurchaseOrder,
    StockRequest,
    OrderUpdate,
}

/// An email addressed to a vendor contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorEmail {
    pub to: String,
    pub vendor_name: String,
    pub kind: VendorEmailKind,
    pub subject: String,
    pub body: String,
    pub order_id: Option<PurchaseOrderId>,
    pub request_id: Option<StockRequestId>,
}

/// Which condition triggered an SMS.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmsKind {
    CriticalStock,
    OutOfStock,
    UrgentOrder,
}

/// A short text alert for conditions that cannot wait for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmsAlert {
    pub phone: String,
    pub kind: SmsKind,
    pub message: String,
    pub product_id: Option<ProductId>,
}
