//! Dashboard statistics.

use chrono::Utc;
use serde::Serialize;

use smartshelf_auth::Session;
use smartshelf_products::StockStatus;
use smartshelf_purchasing::OrderStatus;
use smartshelf_sync::RowSource;

use crate::error::AppResult;
use crate::services::Services;

/// Headline numbers for the dashboard landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_products: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    /// Share of products in healthy stock, as a rounded percentage.
    pub inventory_health: u8,
    pub todays_transactions: usize,
    pub pending_orders: usize,
    pub vendors: usize,
}

impl Services {
    /// Compute dashboard statistics over the caller's visible rows.
    pub fn dashboard_stats(&self, session: &Session) -> AppResult<DashboardStats> {
        let scope = session.scope();

        let products = self.store.products_view(scope).fetch_all()?;
        let total_products = products.len();
        let low_stock = products
            .iter()
            .filter(|r| r.product.stock_status() == StockStatus::LowStock)
            .count();
        let out_of_stock = products
            .iter()
            .filter(|r| r.product.stock_status() == StockStatus::OutOfStock)
            .count();

        let inventory_health = if total_products == 0 {
            100
        } else {
            let healthy = total_products - low_stock - out_of_stock;
            (healthy as f64 / total_products as f64 * 100.0).round() as u8
        };

        let today = Utc::now().date_naive();
        let todays_transactions = self
            .store
            .transactions_view(scope)
            .fetch_all()?
            .iter()
            .filter(|r| r.transaction.created_at().date_naive() == today)
            .count();

        let pending_orders = self
            .store
            .purchase_orders_view(scope)
            .fetch_all()?
            .iter()
            .filter(|r| r.order.status() == OrderStatus::Pending)
            .count();

        let vendors = self.store.list_vendors()?.len();

        Ok(DashboardStats {
            total_products,
            low_stock,
            out_of_stock,
            inventory_health,
            todays_transactions,
            pending_orders,
            vendors,
        })
    }
}
