//! `smartshelf-forecast`
//!
//! **Responsibility:** demand-forecasting and auto-restock suggestions.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on the other domain crates (products/inventory/etc).
//! - It must not mutate any state.
//! - It consumes snapshots and emits **insights**, not domain events.
//!
//! All jobs are deterministic arithmetic over in-memory history; outputs are
//! derived values recomputed on demand, never persisted.

pub mod demand;
pub mod job;
pub mod restock;
pub mod result;
pub mod snapshot;

pub use demand::{DemandForecastJob, NO_USAGE_SENTINEL, ProductForecast, RecommendedAction};
pub use job::ForecastJob;
pub use restock::{RestockSuggestion, RestockSuggestionJob, Urgency};
pub use result::ForecastError;
pub use snapshot::{InventorySnapshot, OutboundUsage, ProductSnapshot};
