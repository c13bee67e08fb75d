//! Stock arithmetic with validation.

use serde::{Deserialize, Serialize};

use smartshelf_core::{DomainError, DomainResult};

/// Direction of a stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    StockIn,
    StockOut,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::StockIn => "stock_in",
            MovementKind::StockOut => "stock_out",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MovementKind::StockIn => "Stock In",
            MovementKind::StockOut => "Stock Out",
        }
    }
}

impl core::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute the stock level after a movement.
///
/// Rejects quantities <= 0 and any stock_out larger than the current stock;
/// the check is made against the caller's last-known value before any write
/// happens, so a rejection leaves stock untouched.
pub fn apply_movement(current_stock: i64, kind: MovementKind, quantity: i64) -> DomainResult<i64> {
    if quantity <= 0 {
        return Err(DomainError::validation("quantity must be greater than zero"));
    }

    match kind {
        MovementKind::StockIn => Ok(current_stock + quantity),
        MovementKind::StockOut => {
            if quantity > current_stock {
                return Err(DomainError::insufficient_stock(quantity, current_stock));
            }
            Ok(current_stock - quantity)
        }
    }
}
