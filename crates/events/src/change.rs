//! Change events announced by the backing store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tables of the backing store that emit change notifications.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Products,
    Transactions,
    PurchaseOrders,
    StockRequests,
    Alerts,
    AuditLogs,
    Vendors,
    Categories,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Products => "products",
            Table::Transactions => "transactions",
            Table::PurchaseOrders => "purchase_orders",
            Table::StockRequests => "stock_requests",
            Table::Alerts => "alerts",
            Table::AuditLogs => "audit_logs",
            Table::Vendors => "vendors",
            Table::Categories => "categories",
        }
    }
}

impl core::fmt::Display for Table {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of row change.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Inserted,
    Updated,
    Deleted,
}

/// A single row-level change notification.
///
/// Deliberately payload-free: consumers must not trust an event to carry a
/// complete row (joined display fields are resolved by re-fetching). Deletes
/// are reconciled from `row_id` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub table: Table,
    pub kind: ChangeKind,
    pub row_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl ChangeEvent {
    pub fn new(table: Table, kind: ChangeKind, row_id: Uuid) -> Self {
        Self {
            table,
            kind,
            row_id,
            occurred_at: Utc::now(),
        }
    }
}
