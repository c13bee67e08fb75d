use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smartshelf_core::{AlertId, Entity, ProductId, UserId};

/// Domain event category the alert was raised for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    LowStock,
    Reorder,
    Expiry,
    StockRequest,
    VendorResponse,
    OrderUpdate,
}

/// Alert severity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

/// Notification record surfaced in-app.
///
/// Created by domain events; the only mutation is the read-state toggle.
/// Dismissal is a hard delete performed by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    id: AlertId,
    kind: AlertKind,
    title: String,
    message: String,
    severity: Severity,
    is_read: bool,
    /// Target user; `None` broadcasts to every viewer.
    user_id: Option<UserId>,
    product_id: Option<ProductId>,
    created_at: DateTime<Utc>,
}

impl Alert {
    pub fn new(
        id: AlertId,
        kind: AlertKind,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        user_id: Option<UserId>,
        product_id: Option<ProductId>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            message: message.into(),
            severity,
            is_read: false,
            user_id,
            product_id,
            created_at: at,
        }
    }

    pub fn kind(&self) -> AlertKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_read(&self) -> bool {
        self.is_read
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn product_id(&self) -> Option<ProductId> {
        self.product_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn mark_read(&mut self) {
        self.is_read = true;
    }

    pub fn mark_unread(&mut self) {
        self.is_read = false;
    }

    /// Visible to `user`: broadcast alerts plus alerts targeted at them.
    pub fn visible_to(&self, user: UserId) -> bool {
        match self.user_id {
            None => true,
            Some(target) => target == user,
        }
    }
}

impl Entity for Alert {
    type Id = AlertId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alerts_start_unread() {
        let alert = Alert::new(
            AlertId::new(),
            AlertKind::LowStock,
            "Low Stock Alert",
            "Widgets are running low",
            Severity::Warning,
            None,
            Some(ProductId::new()),
            Utc::now(),
        );
        assert!(!alert.is_read());
    }

    #[test]
    fn read_state_toggles() {
        let mut alert = Alert::new(
            AlertId::new(),
            AlertKind::OrderUpdate,
            "PO Approved",
            "Your PO was approved",
            Severity::Info,
            Some(UserId::new()),
            None,
            Utc::now(),
        );
        alert.mark_read();
        assert!(alert.is_read());
        alert.mark_unread();
        assert!(!alert.is_read());
    }

    #[test]
    fn targeted_alerts_are_only_visible_to_target() {
        let target = UserId::new();
        let alert = Alert::new(
            AlertId::new(),
            AlertKind::VendorResponse,
            "Request Approved",
            "Your request was approved",
            Severity::Info,
            Some(target),
            None,
            Utc::now(),
        );
        assert!(alert.visible_to(target));
        assert!(!alert.visible_to(UserId::new()));
    }

    #[test]
    fn severity_orders_from_info_to_critical() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Critical);
    }
}
