//! The service facade and its shared best-effort helpers.

use chrono::Utc;

use smartshelf_alerts::{Alert, AlertKind, Severity};
use smartshelf_audit::{AuditAction, AuditLog};
use smartshelf_auth::{Session, ensure_can_view_audit_logs};
use smartshelf_core::{AlertId, AuditLogId, ProductId, VendorId};
use smartshelf_notify::Notifier;
use smartshelf_store::{InMemoryStore, Profile};

use crate::error::AppResult;

/// Application service layer.
///
/// Primary mutations go through the store and are the only part of an
/// operation that can fail it. Secondary effects (alerts, audit entries,
/// emails, SMS) are best-effort: failures are logged at `warn` and the
/// operation still succeeds.
#[derive(Clone)]
pub struct Services {
    pub(crate) store: InMemoryStore,
    pub(crate) notifier: Notifier,
    pub(crate) ops_phone: Option<String>,
}

impl Services {
    pub fn new(store: InMemoryStore, notifier: Notifier) -> Self {
        Self {
            store,
            notifier,
            ops_phone: None,
        }
    }

    /// Phone number for critical stock SMS alerts. Without one, SMS sends
    /// are skipped.
    pub fn with_ops_phone(mut self, phone: impl Into<String>) -> Self {
        self.ops_phone = Some(phone.into());
        self
    }

    pub fn store(&self) -> &InMemoryStore {
        &self.store
    }

    /// Register or update a user profile. Vendor-role profiles must carry
    /// their vendor binding for targeted alerts to reach them.
    pub fn register_profile(&self, profile: Profile) -> AppResult<()> {
        self.store.upsert_profile(profile)?;
        Ok(())
    }

    /// Admin-only view of the audit trail, newest first.
    pub fn audit_logs(&self, session: &Session) -> AppResult<Vec<AuditLog>> {
        ensure_can_view_audit_logs(session)?;
        Ok(self.store.list_audit_logs()?)
    }

    // ----- best-effort secondary effects ------------------------------------

    pub(crate) fn audit(
        &self,
        session: &Session,
        action: AuditAction,
        entity_type: &str,
        entity_id: impl ToString,
        details: impl Into<String>,
    ) {
        let entry = AuditLog::record(
            AuditLogId::new(),
            Some(session.user_id),
            session.full_name.clone(),
            action,
            entity_type,
            entity_id.to_string(),
            details,
            Utc::now(),
        );
        if let Err(err) = self.store.append_audit(entry) {
            tracing::warn!(entity_type, error = %err, "audit entry not recorded");
        }
    }

    pub(crate) fn raise_alert(&self, alert: Alert) {
        if let Err(err) = self.store.insert_alert(alert) {
            tracing::warn!(error = %err, "alert not raised");
        }
    }

    /// One targeted alert per user account bound to the vendor.
    pub(crate) fn alert_vendor_users(
        &self,
        vendor_id: VendorId,
        kind: AlertKind,
        title: &str,
        message: &str,
        severity: Severity,
        product_id: Option<ProductId>,
    ) {
        let profiles = match self.store.profiles_for_vendor(vendor_id) {
            Ok(profiles) => profiles,
            Err(err) => {
                tracing::warn!(%vendor_id, error = %err, "vendor alert fan-out skipped");
                return;
            }
        };
        for profile in profiles {
            self.raise_alert(Alert::new(
                AlertId::new(),
                kind,
                title,
                message,
                severity,
                Some(profile.user_id),
                product_id,
                Utc::now(),
            ));
        }
    }

    pub(crate) fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}
