//! Stock movements and their follow-on effects.

use chrono::Utc;

use smartshelf_alerts::{Alert, AlertKind, Severity};
use smartshelf_audit::AuditAction;
use smartshelf_auth::Session;
use smartshelf_core::{AlertId, DomainError, Entity};
use smartshelf_inventory::{NewTransaction, Transaction};
use smartshelf_notify::{SmsAlert, SmsKind};
use smartshelf_products::{Product, StockStatus};

use crate::error::AppResult;
use crate::services::Services;

impl Services {
    /// Record a validated stock movement.
    ///
    /// The store checks the movement against current stock and commits the
    /// transaction and the new stock level atomically; a rejection changes
    /// nothing. On success the low-stock alert, SMS, and audit entry run as
    /// best-effort follow-ons.
    pub fn record_transaction(
        &self,
        session: &Session,
        spec: NewTransaction,
    ) -> AppResult<(Transaction, Product)> {
        if !session.role.is_internal() {
            return Err(DomainError::Unauthorized.into());
        }

        let (transaction, product) = self.store.record_movement(
            spec,
            Some(session.user_id),
            &session.full_name,
            Utc::now(),
        )?;

        if product.stock_status() != StockStatus::InStock {
            self.raise_stock_alert(&product);
            self.notify_critical_stock(&product);
        }

        self.audit(
            session,
            AuditAction::Create,
            "Transaction",
            transaction.id(),
            format!(
                "{} {} x{}",
                transaction.kind().label(),
                product.name(),
                transaction.quantity()
            ),
        );

        Ok((transaction, product))
    }

    fn raise_stock_alert(&self, product: &Product) {
        let (title, message, severity) = match product.stock_status() {
            StockStatus::OutOfStock => (
                "Out of Stock",
                format!("{} ({}) is out of stock", product.name(), product.sku()),
                Severity::Critical,
            ),
            StockStatus::LowStock => (
                "Low Stock Alert",
                format!(
                    "{} ({}) is down to {} units (reorder level {})",
                    product.name(),
                    product.sku(),
                    product.current_stock(),
                    product.reorder_level()
                ),
                Severity::Warning,
            ),
            StockStatus::InStock => return,
        };
        // Broadcast; every dashboard user sees stock health.
        self.raise_alert(Alert::new(
            AlertId::new(),
            AlertKind::LowStock,
            title,
            message,
            severity,
            None,
            Some(*product.id()),
            Utc::now(),
        ));
    }

    fn notify_critical_stock(&self, product: &Product) {
        let Some(phone) = self.ops_phone.as_deref() else {
            return;
        };
        let kind = if product.current_stock() == 0 {
            SmsKind::OutOfStock
        } else {
            SmsKind::CriticalStock
        };
        self.notifier().send_sms_alert(SmsAlert {
            phone: phone.to_string(),
            kind,
            message: format!(
                "{} ({}): {} units left",
                product.name(),
                product.sku(),
                product.current_stock()
            ),
            product_id: Some(*product.id()),
        });
    }
}
