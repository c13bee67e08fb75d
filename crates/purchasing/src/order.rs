use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smartshelf_auth::{ensure_can_complete_order, ensure_vendor_counterparty, Session};
use smartshelf_core::{
    DomainError, DomainResult, Entity, ProductId, PurchaseOrderId, UserId, VendorId,
};

use crate::Decision;

/// Purchase order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Approved => "approved",
            OrderStatus::Rejected => "rejected",
            OrderStatus::Completed => "completed",
        }
    }

    /// No transition leaves `rejected` or `completed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Rejected | OrderStatus::Completed)
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Purchase order line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_price: f64,
}

/// Line item input for order creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_price: f64,
}

/// A formal request from internal staff to a vendor to supply goods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    id: PurchaseOrderId,
    vendor_id: VendorId,
    status: OrderStatus,
    items: Vec<OrderItem>,
    total_amount: f64,
    created_by: Option<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PurchaseOrder {
    /// Create a pending order with at least one validated line item.
    pub fn create(
        id: PurchaseOrderId,
        vendor_id: VendorId,
        items: Vec<NewOrderItem>,
        created_by: Option<UserId>,
        at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if items.is_empty() {
            return Err(DomainError::validation(
                "purchase order requires at least one line item",
            ));
        }

        let mut lines = Vec::with_capacity(items.len());
        let mut total = 0.0;
        for item in items {
            if item.quantity <= 0 {
                return Err(DomainError::validation(
                    "line item quantity must be greater than zero",
                ));
            }
            if !item.unit_price.is_finite() || item.unit_price < 0.0 {
                return Err(DomainError::validation(
                    "line item unit price must be a non-negative number",
                ));
            }
            total += item.quantity as f64 * item.unit_price;
            lines.push(OrderItem {
                product_id: item.product_id,
                quantity: item.quantity,
                unit_price: item.unit_price,
            });
        }

        Ok(Self {
            id,
            vendor_id,
            status: OrderStatus::Pending,
            items: lines,
            total_amount: total,
            created_by,
            created_at: at,
            updated_at: at,
        })
    }

    pub fn vendor_id(&self) -> VendorId {
        self.vendor_id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn created_by(&self) -> Option<UserId> {
        self.created_by
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Counterparty vendor moves `pending → approved | rejected`.
    pub fn respond(
        &mut self,
        session: &Session,
        decision: Decision,
        at: DateTime<Utc>,
    ) -> DomainResult<()> {
        ensure_vendor_counterparty(session, self.vendor_id)?;
        self.ensure_status(OrderStatus::Pending)?;

        self.status = match decision {
            Decision::Approve => OrderStatus::Approved,
            Decision::Reject => OrderStatus::Rejected,
        };
        self.updated_at = at;
        Ok(())
    }

    /// Internal staff moves `approved → completed`.
    pub fn complete(&mut self, session: &Session, at: DateTime<Utc>) -> DomainResult<()> {
        ensure_can_complete_order(session)?;
        self.ensure_status(OrderStatus::Approved)?;

        self.status = OrderStatus::Completed;
        self.updated_at = at;
        Ok(())
    }

    fn ensure_status(&self, expected: OrderStatus) -> DomainResult<()> {
        if self.status != expected {
            return Err(DomainError::conflict(format!(
                "purchase order is {}, expected {expected}",
                self.status
            )));
        }
        Ok(())
    }
}

impl Entity for PurchaseOrder {
    type Id = PurchaseOrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
