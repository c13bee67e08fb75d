//! Best-effort notification dispatch.

use std::sync::Arc;

use crate::gateway::{EmailGateway, SmsGateway};
use crate::message::{SmsAlert, VendorEmail};

/// Fire-and-forget front door for outbound notifications.
///
/// Both send methods return `()`; failures are logged at `warn` and dropped.
/// Callers stay on their happy path whether or not the channel is up.
#[derive(Clone)]
pub struct Notifier {
    email: Arc<dyn EmailGateway>,
    sms: Arc<dyn SmsGateway>,
}

impl Notifier {
    pub fn new(email: Arc<dyn EmailGateway>, sms: Arc<dyn SmsGateway>) -> Self {
        Self { email, sms }
    }

    pub fn send_vendor_email(&self, email: VendorEmail) {
        if let Err(err) = self.email.send_email(&email) {
            tracing::warn!(
                to = %email.to,
                kind = ?email.kind,
                error = %err,
                "vendor email not delivered"
            );
        } else {
            tracing::info!(to = %email.to, kind = ?email.kind, "vendor email sent");
        }
    }

    pub fn send_sms_alert(&self, sms: SmsAlert) {
        if let Err(err) = self.sms.send_sms(&sms) {
            tracing::warn!(
                phone = %sms.phone,
                kind = ?sms.kind,
                error = %err,
                "sms alert not delivered"
            );
        } else {
            tracing::info!(phone = %sms.phone, kind = ?sms.kind, "sms alert sent");
        }
    }
}
