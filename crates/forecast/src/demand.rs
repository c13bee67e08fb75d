//! Demand forecasting over trailing outbound usage.

use std::collections::HashMap;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use smartshelf_core::ProductId;

use crate::job::ForecastJob;
use crate::result::ForecastError;
use crate::snapshot::InventorySnapshot;

/// What the forecast recommends doing about a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    ReorderNow,
    ReorderSoon,
    Sufficient,
}

impl RecommendedAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ReorderNow => "Reorder Now",
            Self::ReorderSoon => "Reorder Soon",
            Self::Sufficient => "Sufficient",
        }
    }
}

/// Per-product forecast row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductForecast {
    pub product_id: ProductId,
    pub sku: String,
    pub name: String,
    pub current_stock: i64,
    /// Mean units consumed per day over the window, rounded to one decimal.
    pub avg_daily_usage: f64,
    /// `999` means no measured usage with stock on hand; `0` means already out.
    pub days_until_stockout: i64,
    pub action: RecommendedAction,
    /// Percentage in `[60, 95]`, growing with the number of observed movements.
    pub confidence: u8,
}

/// Projects days-until-stockout for every product in the snapshot from its
/// trailing outbound usage.
///
/// The window defaults to 30 days; override with [`with_window_days`]
/// for what-if analysis.
///
/// [`with_window_days`]: DemandForecastJob::with_window_days
#[derive(Debug, Clone)]
pub struct DemandForecastJob {
    snapshot: InventorySnapshot,
    window_days: i64,
}

/// Days with no usage reported as "effectively never runs out".
pub const NO_USAGE_SENTINEL: i64 = 999;

const REORDER_NOW_HORIZON: i64 = 7;
const REORDER_SOON_HORIZON: i64 = 14;

impl DemandForecastJob {
    pub fn new(snapshot: InventorySnapshot) -> Self {
        Self {
            snapshot,
            window_days: 30,
        }
    }

    pub fn with_window_days(mut self, window_days: i64) -> Self {
        self.window_days = window_days;
        self
    }

    fn forecast_one(
        &self,
        product: &crate::snapshot::ProductSnapshot,
        total_out: i64,
        movement_count: usize,
    ) -> ProductForecast {
        let avg = total_out as f64 / self.window_days as f64;

        let days_until_stockout = if avg > 0.0 {
            (product.current_stock as f64 / avg).floor() as i64
        } else if product.current_stock > 0 {
            NO_USAGE_SENTINEL
        } else {
            0
        };

        let action = if product.current_stock == 0 || days_until_stockout <= REORDER_NOW_HORIZON {
            RecommendedAction::ReorderNow
        } else if days_until_stockout <= REORDER_SOON_HORIZON
            || product.current_stock <= product.reorder_level
        {
            RecommendedAction::ReorderSoon
        } else {
            RecommendedAction::Sufficient
        };

        // More observed movements, more confidence, capped at 95%.
        let confidence = (60 + 5 * movement_count as u64).min(95) as u8;

        ProductForecast {
            product_id: product.product_id,
            sku: product.sku.clone(),
            name: product.name.clone(),
            current_stock: product.current_stock,
            avg_daily_usage: (avg * 10.0).round() / 10.0,
            days_until_stockout,
            action,
            confidence,
        }
    }
}

impl ForecastJob for DemandForecastJob {
    type Output = Vec<ProductForecast>;

    fn input(&self) -> &InventorySnapshot {
        &self.snapshot
    }

    fn run(&self) -> Result<Self::Output, ForecastError> {
        if self.window_days <= 0 {
            return Err(ForecastError::InvalidInput(
                "window_days must be positive".into(),
            ));
        }

        let cutoff = self.snapshot.as_of - Duration::days(self.window_days);

        // (total quantity out, movement count) per product inside the window.
        let mut usage: HashMap<ProductId, (i64, usize)> = HashMap::new();
        for m in &self.snapshot.outbound {
            if m.occurred_at >= cutoff {
                let entry = usage.entry(m.product_id).or_insert((0, 0));
                entry.0 += m.quantity;
                entry.1 += 1;
            }
        }

        let mut rows: Vec<ProductForecast> = self
            .snapshot
            .products
            .iter()
            .map(|p| {
                let (total, count) = usage.get(&p.product_id).copied().unwrap_or((0, 0));
                self.forecast_one(p, total, count)
            })
            .collect();

        // Most urgent first.
        rows.sort_by_key(|r| r.days_until_stockout);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{OutboundUsage, ProductSnapshot};
    use chrono::{TimeZone, Utc};

    fn as_of() -> chrono::DateTime<chrono::Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn product(stock: i64, reorder: i64) -> ProductSnapshot {
        ProductSnapshot {
            product_id: ProductId::new(),
            sku: "WID-001".into(),
            name: "Widget".into(),
            vendor_id: None,
            vendor_name: None,
            current_stock: stock,
            reorder_level: reorder,
        }
    }

    fn outbound(product_id: ProductId, quantity: i64, days_ago: i64) -> OutboundUsage {
        OutboundUsage {
            product_id,
            quantity,
            occurred_at: as_of() - Duration::days(days_ago),
        }
    }

    fn run_single(
        product: ProductSnapshot,
        outbound: Vec<OutboundUsage>,
    ) -> ProductForecast {
        let snapshot = InventorySnapshot {
            as_of: as_of(),
            products: vec![product],
            outbound,
        };
        let mut rows = DemandForecastJob::new(snapshot).run().unwrap();
        assert_eq!(rows.len(), 1);
        rows.remove(0)
    }

    #[test]
    fn no_usage_with_stock_on_hand_reports_sentinel() {
        let row = run_single(product(50, 10), vec![]);
        assert_eq!(row.avg_daily_usage, 0.0);
        assert_eq!(row.days_until_stockout, NO_USAGE_SENTINEL);
        assert_eq!(row.action, RecommendedAction::Sufficient);
    }

    #[test]
    fn out_of_stock_always_recommends_reorder_now() {
        let row = run_single(product(0, 10), vec![]);
        assert_eq!(row.days_until_stockout, 0);
        assert_eq!(row.action, RecommendedAction::ReorderNow);
    }

    #[test]
    fn daily_usage_projects_days_until_stockout() {
        let p = product(60, 10);
        let id = p.product_id;
        // 60 units out over the window, 2 per day.
        let row = run_single(p, vec![outbound(id, 30, 5), outbound(id, 30, 20)]);
        assert_eq!(row.avg_daily_usage, 2.0);
        assert_eq!(row.days_until_stockout, 30);
        assert_eq!(row.action, RecommendedAction::Sufficient);
    }

    #[test]
    fn avg_daily_usage_rounds_to_one_decimal() {
        let p = product(100, 10);
        let id = p.product_id;
        // 7 units / 30 days = 0.2333..
        let row = run_single(p, vec![outbound(id, 7, 3)]);
        assert_eq!(row.avg_daily_usage, 0.2);
    }

    #[test]
    fn short_horizon_recommends_reorder_now() {
        let p = product(10, 2);
        let id = p.product_id;
        // 60 out / 30 days = 2 per day, 5 days left.
        let row = run_single(p, vec![outbound(id, 60, 1)]);
        assert_eq!(row.days_until_stockout, 5);
        assert_eq!(row.action, RecommendedAction::ReorderNow);
    }

    #[test]
    fn mid_horizon_recommends_reorder_soon() {
        let p = product(20, 2);
        let id = p.product_id;
        // 2 per day, 10 days left.
        let row = run_single(p, vec![outbound(id, 60, 1)]);
        assert_eq!(row.days_until_stockout, 10);
        assert_eq!(row.action, RecommendedAction::ReorderSoon);
    }

    #[test]
    fn at_reorder_level_recommends_reorder_soon_even_with_long_horizon() {
        let p = product(30, 30);
        let id = p.product_id;
        // 0.5 per day, 60 days left, but stock sits at the reorder level.
        let row = run_single(p, vec![outbound(id, 15, 1)]);
        assert_eq!(row.days_until_stockout, 60);
        assert_eq!(row.action, RecommendedAction::ReorderSoon);
    }

    #[test]
    fn movements_outside_window_are_ignored() {
        let p = product(50, 10);
        let id = p.product_id;
        let row = run_single(p, vec![outbound(id, 500, 45)]);
        assert_eq!(row.avg_daily_usage, 0.0);
        assert_eq!(row.days_until_stockout, NO_USAGE_SENTINEL);
    }

    #[test]
    fn confidence_grows_with_movement_count_and_caps() {
        let baseline = run_single(product(50, 10), vec![]);
        assert_eq!(baseline.confidence, 60);

        let p = product(500, 10);
        let id = p.product_id;
        let five: Vec<_> = (1..=5).map(|d| outbound(id, 1, d)).collect();
        assert_eq!(run_single(p, five).confidence, 85);

        let p = product(500, 10);
        let id = p.product_id;
        let twelve: Vec<_> = (1..=12).map(|d| outbound(id, 1, d)).collect();
        assert_eq!(run_single(p, twelve).confidence, 95);
    }

    #[test]
    fn rows_sort_most_urgent_first() {
        let healthy = product(900, 10);
        let tight = product(10, 2);
        let tight_id = tight.product_id;
        let snapshot = InventorySnapshot {
            as_of: as_of(),
            products: vec![healthy, tight],
            outbound: vec![outbound(tight_id, 60, 1)],
        };
        let rows = DemandForecastJob::new(snapshot).run().unwrap();
        assert_eq!(rows[0].product_id, tight_id);
        assert!(rows[0].days_until_stockout <= rows[1].days_until_stockout);
    }

    #[test]
    fn rejects_non_positive_window() {
        let err = DemandForecastJob::new(InventorySnapshot::new(as_of()))
            .with_window_days(0)
            .run()
            .unwrap_err();
        assert!(matches!(err, ForecastError::InvalidInput(_)));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn confidence_stays_in_band(
                stock in 0i64..10_000,
                moves in proptest::collection::vec((1i64..100, 0i64..29), 0..40),
            ) {
                let p = product(stock, 10);
                let id = p.product_id;
                let outbound = moves
                    .into_iter()
                    .map(|(q, d)| outbound(id, q, d))
                    .collect();
                let row = run_single(p, outbound);
                prop_assert!(row.confidence >= 60 && row.confidence <= 95);
            }

            #[test]
            fn days_never_negative(
                stock in 0i64..10_000,
                moves in proptest::collection::vec((1i64..100, 0i64..29), 0..40),
            ) {
                let p = product(stock, 10);
                let id = p.product_id;
                let outbound: Vec<OutboundUsage> = moves
                    .into_iter()
                    .map(|(q, d)| outbound(id, q, d))
                    .collect();
                let had_usage = !outbound.is_empty();
                let row = run_single(p, outbound);
                prop_assert!(row.days_until_stockout >= 0);
                if !had_usage && stock > 0 {
                    prop_assert_eq!(row.days_until_stockout, NO_USAGE_SENTINEL);
                }
            }
        }
    }
}
