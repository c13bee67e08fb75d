//! `smartshelf-notify`
//!
//! **Responsibility:** outbound email and SMS notifications.
//!
//! Delivery is strictly best-effort: a failed send is logged and swallowed,
//! never propagated. No domain operation may fail because a notification
//! could not go out.

pub mod gateway;
pub mod message;
pub mod notifier;

pub use gateway::{EmailGateway, GatewayError, RecordingGateway, SmsGateway};
pub use message::{SmsAlert, SmsKind, VendorEmail, VendorEmailKind};
pub use notifier::Notifier;
