use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smartshelf_auth::{ensure_vendor_counterparty, Role, Session};
use smartshelf_core::{
    DomainError, DomainResult, Entity, ProductId, StockRequestId, UserId, VendorId,
};

use crate::Decision;

/// Stock request status: one-shot transition out of pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }
}

impl core::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An informal request from internal staff to a vendor for a product or
/// general stock, distinct from a purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRequest {
    id: StockRequestId,
    product_id: Option<ProductId>,
    vendor_id: VendorId,
    requested_by: Option<UserId>,
    requested_by_name: String,
    requested_by_role: Role,
    quantity: i64,
    status: RequestStatus,
    notes: Option<String>,
    response_notes: Option<String>,
    responded_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Fields for creating a stock request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStockRequest {
    pub product_id: Option<ProductId>,
    pub vendor_id: VendorId,
    pub quantity: i64,
    pub notes: Option<String>,
}

impl StockRequest {
    pub fn create(
        id: StockRequestId,
        spec: NewStockRequest,
        requested_by: &Session,
        at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if spec.quantity <= 0 {
            return Err(DomainError::validation("quantity must be greater than zero"));
        }
        Ok(Self {
            id,
            product_id: spec.product_id,
            vendor_id: spec.vendor_id,
            requested_by: Some(requested_by.user_id),
            requested_by_name: requested_by.full_name.clone(),
            requested_by_role: requested_by.role,
            quantity: spec.quantity,
            status: RequestStatus::Pending,
            notes: spec.notes,
            response_notes: None,
            responded_at: None,
            created_at: at,
            updated_at: at,
        })
    }

    pub fn product_id(&self) -> Option<ProductId> {
        self.product_id
    }

    pub fn vendor_id(&self) -> VendorId {
        self.vendor_id
    }

    pub fn requested_by(&self) -> Option<UserId> {
        self.requested_by
    }

    pub fn requested_by_name(&self) -> &str {
        &self.requested_by_name
    }

    pub fn requested_by_role(&self) -> Role {
        self.requested_by_role
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn response_notes(&self) -> Option<&str> {
        self.response_notes.as_deref()
    }

    pub fn responded_at(&self) -> Option<DateTime<Utc>> {
        self.responded_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Counterparty vendor answers a pending request, optionally attaching
    /// response notes (a rejection reason, delivery estimate, etc).
    pub fn respond(
        &mut self,
        session: &Session,
        decision: Decision,
        response_notes: Option<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<()> {
        ensure_vendor_counterparty(session, self.vendor_id)?;
        if self.status != RequestStatus::Pending {
            return Err(DomainError::conflict(format!(
                "stock request is already {}",
                self.status
            )));
        }

        self.status = match decision {
            Decision::Approve => RequestStatus::Approved,
            Decision::Reject => RequestStatus::Rejected,
        };
        self.response_notes = response_notes;
        self.responded_at = Some(at);
        self.updated_at = at;
        Ok(())
    }
}

impl Entity for StockRequest {
    type Id = StockRequestId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requester() -> Session {
        Session::internal(UserId::new(), "WM", "wm@example.com", Role::WarehouseManager)
    }

    fn request_for(vendor_id: VendorId) -> StockRequest {
        StockRequest::create(
            StockRequestId::new(),
            NewStockRequest {
                product_id: Some(ProductId::new()),
                vendor_id,
                quantity: 25,
                notes: Some("restock for weekend rush".to_string()),
            },
            &requester(),
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn create_captures_requester_identity() {
        let request = request_for(VendorId::new());
        assert_eq!(request.status(), RequestStatus::Pending);
        assert_eq!(request.requested_by_name(), "WM");
        assert_eq!(request.requested_by_role(), Role::WarehouseManager);
        assert!(request.responded_at().is_none());
    }

    #[test]
    fn create_rejects_non_positive_quantity() {
        let err = StockRequest::create(
            StockRequestId::new(),
            NewStockRequest {
                product_id: None,
                vendor_id: VendorId::new(),
                quantity: 0,
                notes: None,
            },
            &requester(),
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn respond_records_notes_and_timestamp() {
        let vendor_id = VendorId::new();
        let mut request = request_for(vendor_id);
        let vendor = Session::vendor(UserId::new(), "V", "v@acme.com", vendor_id);

        request
            .respond(
                &vendor,
                Decision::Reject,
                Some("out of production".to_string()),
                Utc::now(),
            )
            .unwrap();

        assert_eq!(request.status(), RequestStatus::Rejected);
        assert_eq!(request.response_notes(), Some("out of production"));
        assert!(request.responded_at().is_some());
    }

    #[test]
    fn response_is_one_shot() {
        let vendor_id = VendorId::new();
        let mut request = request_for(vendor_id);
        let vendor = Session::vendor(UserId::new(), "V", "v@acme.com", vendor_id);

        request
            .respond(&vendor, Decision::Approve, None, Utc::now())
            .unwrap();
        let err = request
            .respond(&vendor, Decision::Reject, None, Utc::now())
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(request.status(), RequestStatus::Approved);
    }

    #[test]
    fn internal_staff_cannot_answer_their_own_request() {
        let mut request = request_for(VendorId::new());
        let err = request
            .respond(&requester(), Decision::Approve, None, Utc::now())
            .unwrap_err();
        assert_eq!(err, DomainError::Unauthorized);
    }
}
