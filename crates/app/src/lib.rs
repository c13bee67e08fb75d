//! `smartshelf-app`
//!
//! **Responsibility:** the application service layer.
//!
//! [`Services`] is the single front door the dashboard talks to. It wires the
//! store, the change feed, the forecast jobs, the notifier, and the report
//! builders together, and enforces the role guards on every operation. Each
//! method takes the caller's [`smartshelf_auth::Session`] explicitly.

pub mod alerts;
pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod exports;
pub mod forecasting;
pub mod mount;
pub mod orders;
pub mod services;
pub mod stock;

#[cfg(test)]
mod integration_tests;

pub use dashboard::DashboardStats;
pub use error::{AppError, AppResult};
pub use services::Services;
