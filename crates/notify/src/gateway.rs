//! Delivery gateways.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::message::{SmsAlert, VendorEmail};

/// Failure reported by a delivery channel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("delivery rejected: {0}")]
    Rejected(String),

    #[error("channel unavailable: {0}")]
    Unavailable(String),
}

/// Sends vendor emails. Implementations own transport and credentials.
pub trait EmailGateway: Send + Sync {
    fn send_email(&self, email: &VendorEmail) -> Result<(), GatewayError>;
}

/// Sends SMS alerts.
pub trait SmsGateway: Send + Sync {
    fn send_sms(&self, sms: &SmsAlert) -> Result<(), GatewayError>;
}

/// In-memory gateway that records outbound messages; used in tests and as a
/// stand-in where no transport is configured.
#[derive(Debug, Clone, Default)]
pub struct RecordingGateway {
    emails: Arc<Mutex<Vec<VendorEmail>>>,
    texts: Arc<Mutex<Vec<SmsAlert>>>,
    failing: Arc<Mutex<bool>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emails(&self) -> Vec<VendorEmail> {
        self.emails.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn texts(&self) -> Vec<SmsAlert> {
        self.texts.lock().map(|t| t.clone()).unwrap_or_default()
    }

    /// Make every subsequent send fail, to exercise best-effort paths.
    pub fn set_failing(&self, failing: bool) {
        if let Ok(mut f) = self.failing.lock() {
            *f = failing;
        }
    }

    fn is_failing(&self) -> bool {
        self.failing.lock().map(|f| *f).unwrap_or(false)
    }
}

impl EmailGateway for RecordingGateway {
    fn send_email(&self, email: &VendorEmail) -> Result<(), GatewayError> {
        if self.is_failing() {
            return Err(GatewayError::Unavailable("recording gateway set to fail".into()));
        }
        if let Ok(mut emails) = self.emails.lock() {
            emails.push(email.clone());
        }
        Ok(())
    }
}

impl SmsGateway for RecordingGateway {
    fn send_sms(&self, sms: &SmsAlert) -> Result<(), GatewayError> {
        if self.is_failing() {
            return Err(GatewayError::Unavailable("recording gateway set to fail".into()));
        }
        if let Ok(mut texts) = self.texts.lock() {
            texts.push(sms.clone());
        }
        Ok(())
    }
}
