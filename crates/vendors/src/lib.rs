//! Vendor domain module.

pub mod vendor;

pub use vendor::{NewVendor, Vendor};
