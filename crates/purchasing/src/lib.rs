//! Purchase order and stock request workflows.
//!
//! Both entities share the same response state machine:
//! `pending → approved | rejected`, vendor counterparty only; purchase
//! orders additionally allow `approved → completed` for internal staff.
//! `rejected` and `completed` are terminal.

pub mod order;
pub mod request;

pub use order::{NewOrderItem, OrderItem, OrderStatus, PurchaseOrder};
pub use request::{NewStockRequest, RequestStatus, StockRequest};

use serde::{Deserialize, Serialize};

/// Counterparty decision on a pending order or request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
    Reject,
}
