//! Auto-restock suggestions for products at or below their reorder level.

use serde::{Deserialize, Serialize};

use smartshelf_core::{ProductId, VendorId};

use crate::job::ForecastJob;
use crate::result::ForecastError;
use crate::snapshot::{InventorySnapshot, ProductSnapshot};

/// How badly a product needs restocking. Ordered most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Critical,
    High,
    Medium,
}

impl Urgency {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }
}

/// A suggested replenishment for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockSuggestion {
    pub product_id: ProductId,
    pub sku: String,
    pub name: String,
    pub vendor_id: Option<VendorId>,
    pub vendor_name: String,
    pub current_stock: i64,
    pub reorder_level: i64,
    pub suggested_quantity: i64,
    pub urgency: Urgency,
    pub reason: String,
}

/// Suggests order quantities for every product at or below its reorder level.
///
/// The suggested quantity covers the deficit to the reorder level plus a 50%
/// safety stock and a 30% demand buffer, both derived from the reorder level.
#[derive(Debug, Clone)]
pub struct RestockSuggestionJob {
    snapshot: InventorySnapshot,
}

const SAFETY_STOCK_FACTOR: f64 = 0.5;
const DEMAND_BUFFER_FACTOR: f64 = 0.3;

impl RestockSuggestionJob {
    pub fn new(snapshot: InventorySnapshot) -> Self {
        Self { snapshot }
    }

    fn suggest_one(product: &ProductSnapshot) -> RestockSuggestion {
        let deficit = (product.reorder_level - product.current_stock).max(0);
        let safety = (product.reorder_level as f64 * SAFETY_STOCK_FACTOR).ceil() as i64;
        let buffer = (product.reorder_level as f64 * DEMAND_BUFFER_FACTOR).ceil() as i64;
        let suggested_quantity = deficit + safety + buffer;

        let urgency = if product.current_stock == 0 {
            Urgency::Critical
        } else if (product.current_stock as f64)
            <= product.reorder_level as f64 * DEMAND_BUFFER_FACTOR
        {
            Urgency::High
        } else {
            Urgency::Medium
        };

        let reason = match urgency {
            Urgency::Critical => "Out of stock. Immediate restock required.".to_string(),
            Urgency::High => format!(
                "Critically low: {} units left (reorder level {}).",
                product.current_stock, product.reorder_level
            ),
            Urgency::Medium => format!(
                "Below reorder level: {} of {} units.",
                product.current_stock, product.reorder_level
            ),
        };

        RestockSuggestion {
            product_id: product.product_id,
            sku: product.sku.clone(),
            name: product.name.clone(),
            vendor_id: product.vendor_id,
            vendor_name: product
                .vendor_name
                .clone()
                .unwrap_or_else(|| "Unassigned".to_string()),
            current_stock: product.current_stock,
            reorder_level: product.reorder_level,
            suggested_quantity,
            urgency,
            reason,
        }
    }
}

impl ForecastJob for RestockSuggestionJob {
    type Output = Vec<RestockSuggestion>;

    fn input(&self) -> &InventorySnapshot {
        &self.snapshot
    }

    fn run(&self) -> Result<Self::Output, ForecastError> {
        let mut rows: Vec<RestockSuggestion> = self
            .snapshot
            .products
            .iter()
            .filter(|p| p.current_stock <= p.reorder_level)
            .map(Self::suggest_one)
            .collect();

        rows.sort_by_key(|r| r.urgency);
        Ok(rows)
    }
}
