//! Purchase order and stock request workflows.

use chrono::Utc;

use smartshelf_alerts::{Alert, AlertKind, Severity};
use smartshelf_audit::AuditAction;
use smartshelf_auth::{Session, ensure_can_manage_catalog};
use smartshelf_core::{AlertId, DomainError, Entity, PurchaseOrderId, StockRequestId, VendorId};
use smartshelf_notify::{VendorEmail, VendorEmailKind};
use smartshelf_purchasing::{
    Decision, NewOrderItem, NewStockRequest, OrderStatus, PurchaseOrder, RequestStatus,
    StockRequest,
};

use crate::error::AppResult;
use crate::services::Services;

impl Services {
    // ----- purchase orders --------------------------------------------------

    pub fn create_purchase_order(
        &self,
        session: &Session,
        vendor_id: VendorId,
        items: Vec<NewOrderItem>,
    ) -> AppResult<PurchaseOrder> {
        ensure_can_manage_catalog(session, false)?;
        let vendor = self
            .store
            .get_vendor(vendor_id)?
            .ok_or(DomainError::NotFound)?;

        let order = PurchaseOrder::create(
            PurchaseOrderId::new(),
            vendor_id,
            items,
            Some(session.user_id),
            Utc::now(),
        )?;
        let order = self.store.insert_order(order)?;

        self.alert_vendor_users(
            vendor_id,
            AlertKind::OrderUpdate,
            "New Purchase Order",
            &format!(
                "{} placed a purchase order ({} item(s), total {:.2})",
                session.full_name,
                order.items().len(),
                order.total_amount()
            ),
            Severity::Info,
            None,
        );
        self.notifier().send_vendor_email(VendorEmail {
            to: vendor.email().to_string(),
            vendor_name: vendor.name().to_string(),
            kind: VendorEmailKind::PurchaseOrder,
            subject: "New Purchase Order".to_string(),
            body: format!(
                "A purchase order with {} item(s) totalling {:.2} awaits your response.",
                order.items().len(),
                order.total_amount()
            ),
            order_id: Some(*order.id()),
            request_id: None,
        });
        self.audit(
            session,
            AuditAction::Create,
            "PurchaseOrder",
            order.id(),
            format!("Created purchase order for {}", vendor.name()),
        );

        Ok(order)
    }

    /// Counterparty vendor answers a pending order.
    pub fn respond_to_purchase_order(
        &self,
        session: &Session,
        id: PurchaseOrderId,
        decision: Decision,
    ) -> AppResult<PurchaseOrder> {
        let now = Utc::now();
        let order = self
            .store
            .update_order(id, |o| o.respond(session, decision, now))?;

        if let Some(creator) = order.created_by() {
            let (title, severity) = match order.status() {
                OrderStatus::Approved => ("Purchase Order Approved", Severity::Info),
                _ => ("Purchase Order Rejected", Severity::Warning),
            };
            self.raise_alert(Alert::new(
                AlertId::new(),
                AlertKind::VendorResponse,
                title,
                format!("{} {} the purchase order", session.full_name, order.status()),
                severity,
                Some(creator),
                None,
                now,
            ));
        }
        self.audit(
            session,
            AuditAction::Update,
            "PurchaseOrder",
            id,
            format!("Vendor marked order {}", order.status()),
        );

        Ok(order)
    }

    /// Internal staff marks an approved order as completed (goods received).
    pub fn complete_purchase_order(
        &self,
        session: &Session,
        id: PurchaseOrderId,
    ) -> AppResult<PurchaseOrder> {
        let now = Utc::now();
        let order = self.store.update_order(id, |o| o.complete(session, now))?;

        if let Some(creator) = order.created_by() {
            self.raise_alert(Alert::new(
                AlertId::new(),
                AlertKind::OrderUpdate,
                "Purchase Order Completed",
                format!("Purchase order {id} was completed"),
                Severity::Info,
                Some(creator),
                None,
                now,
            ));
        }
        self.audit(
            session,
            AuditAction::Update,
            "PurchaseOrder",
            id,
            "Marked order completed",
        );

        Ok(order)
    }

    // ----- stock requests ---------------------------------------------------

    pub fn create_stock_request(
        &self,
        session: &Session,
        spec: NewStockRequest,
    ) -> AppResult<StockRequest> {
        ensure_can_manage_catalog(session, false)?;
        let vendor = self
            .store
            .get_vendor(spec.vendor_id)?
            .ok_or(DomainError::NotFound)?;

        let product_id = spec.product_id;
        let quantity = spec.quantity;
        let request = StockRequest::create(StockRequestId::new(), spec, session, Utc::now())?;
        let request = self.store.insert_request(request)?;

        self.alert_vendor_users(
            request.vendor_id(),
            AlertKind::StockRequest,
            "New Stock Request",
            &format!("{} requested {} units", session.full_name, quantity),
            Severity::Info,
            product_id,
        );
        self.notifier().send_vendor_email(VendorEmail {
            to: vendor.email().to_string(),
            vendor_name: vendor.name().to_string(),
            kind: VendorEmailKind::StockRequest,
            subject: "New Stock Request".to_string(),
            body: format!(
                "{} requested {} units. Please approve or reject.",
                session.full_name, quantity
            ),
            order_id: None,
            request_id: Some(*request.id()),
        });
        self.audit(
            session,
            AuditAction::Create,
            "StockRequest",
            request.id(),
            format!("Requested {} units from {}", quantity, vendor.name()),
        );

        Ok(request)
    }

    /// Counterparty vendor answers a pending request, once.
    pub fn respond_to_stock_request(
        &self,
        session: &Session,
        id: StockRequestId,
        decision: Decision,
        response_notes: Option<String>,
    ) -> AppResult<StockRequest> {
        let now = Utc::now();
        let request = self
            .store
            .update_request(id, |r| r.respond(session, decision, response_notes, now))?;

        if let Some(requester) = request.requested_by() {
            let (title, severity) = match request.status() {
                RequestStatus::Approved => ("Stock Request Approved", Severity::Info),
                _ => ("Stock Request Rejected", Severity::Warning),
            };
            let mut message = format!("{} {} your stock request", session.full_name, request.status());
            if let Some(notes) = request.response_notes() {
                message.push_str(": ");
                message.push_str(notes);
            }
            self.raise_alert(Alert::new(
                AlertId::new(),
                AlertKind::VendorResponse,
                title,
                message,
                severity,
                Some(requester),
                request.product_id(),
                now,
            ));
        }
        self.audit(
            session,
            AuditAction::Update,
            "StockRequest",
            id,
            format!("Vendor marked request {}", request.status()),
        );

        Ok(request)
    }
}
