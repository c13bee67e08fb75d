use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smartshelf_core::{DomainError, DomainResult, Entity, ProductId, TransactionId, UserId};

use crate::movement::MovementKind;

/// Immutable record of a stock movement.
///
/// Append-only: the store exposes no update or delete for transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    kind: MovementKind,
    product_id: ProductId,
    quantity: i64,
    handler_id: Option<UserId>,
    handler_name: String,
    reference: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

/// Fields for recording a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub kind: MovementKind,
    pub product_id: ProductId,
    pub quantity: i64,
    pub reference: Option<String>,
    pub notes: Option<String>,
}

impl Transaction {
    /// Build the record; movement validation against current stock is done
    /// separately via [`crate::apply_movement`] before anything is persisted.
    pub fn record(
        id: TransactionId,
        spec: NewTransaction,
        handler_id: Option<UserId>,
        handler_name: impl Into<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if spec.quantity <= 0 {
            return Err(DomainError::validation("quantity must be greater than zero"));
        }
        Ok(Self {
            id,
            kind: spec.kind,
            product_id: spec.product_id,
            quantity: spec.quantity,
            handler_id,
            handler_name: handler_name.into(),
            reference: spec.reference,
            notes: spec.notes,
            created_at: at,
        })
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn handler_id(&self) -> Option<UserId> {
        self.handler_id
    }

    pub fn handler_name(&self) -> &str {
        &self.handler_name
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_all_fields() {
        let product_id = ProductId::new();
        let txn = Transaction::record(
            TransactionId::new(),
            NewTransaction {
                kind: MovementKind::StockOut,
                product_id,
                quantity: 4,
                reference: Some("SO-42".to_string()),
                notes: None,
            },
            Some(UserId::new()),
            "Asha",
            Utc::now(),
        )
        .unwrap();

        assert_eq!(txn.kind(), MovementKind::StockOut);
        assert_eq!(txn.product_id(), product_id);
        assert_eq!(txn.quantity(), 4);
        assert_eq!(txn.reference(), Some("SO-42"));
    }

    #[test]
    fn record_rejects_non_positive_quantity() {
        let err = Transaction::record(
            TransactionId::new(),
            NewTransaction {
                kind: MovementKind::StockIn,
                product_id: ProductId::new(),
                quantity: 0,
                reference: None,
                notes: None,
            },
            None,
            "Asha",
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
