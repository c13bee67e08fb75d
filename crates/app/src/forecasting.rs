//! Forecasting and auto-restock over the caller's visible inventory.

use chrono::Utc;

use smartshelf_auth::Session;
use smartshelf_core::Entity;
use smartshelf_forecast::{
    DemandForecastJob, ForecastJob, InventorySnapshot, OutboundUsage, ProductForecast,
    ProductSnapshot, RestockSuggestion, RestockSuggestionJob, Urgency,
};
use smartshelf_inventory::MovementKind;
use smartshelf_notify::{SmsAlert, SmsKind};
use smartshelf_purchasing::{NewOrderItem, PurchaseOrder};
use smartshelf_sync::RowSource;

use crate::error::AppResult;
use crate::services::Services;

impl Services {
    /// Copy the caller's visible inventory and outbound history into a
    /// forecast snapshot.
    pub fn inventory_snapshot(&self, session: &Session) -> AppResult<InventorySnapshot> {
        let scope = session.scope();
        let mut snapshot = InventorySnapshot::new(Utc::now());

        for row in self.store.products_view(scope).fetch_all()? {
            let p = &row.product;
            snapshot.products.push(ProductSnapshot {
                product_id: *p.id(),
                sku: p.sku().as_str().to_string(),
                name: p.name().to_string(),
                vendor_id: p.vendor_id(),
                vendor_name: row.vendor_name.clone(),
                current_stock: p.current_stock(),
                reorder_level: p.reorder_level(),
            });
        }

        for row in self.store.transactions_view(scope).fetch_all()? {
            let t = &row.transaction;
            if t.kind() == MovementKind::StockOut {
                snapshot.outbound.push(OutboundUsage {
                    product_id: t.product_id(),
                    quantity: t.quantity(),
                    occurred_at: t.created_at(),
                });
            }
        }

        Ok(snapshot)
    }

    /// Demand forecast rows, most urgent first.
    pub fn demand_forecast(&self, session: &Session) -> AppResult<Vec<ProductForecast>> {
        let snapshot = self.inventory_snapshot(session)?;
        Ok(DemandForecastJob::new(snapshot).run()?)
    }

    /// Restock suggestions for products at or below their reorder level.
    pub fn restock_suggestions(&self, session: &Session) -> AppResult<Vec<RestockSuggestion>> {
        let snapshot = self.inventory_snapshot(session)?;
        Ok(RestockSuggestionJob::new(snapshot).run()?)
    }

    /// Turn selected suggestions into purchase orders, one per vendor.
    ///
    /// Callers may edit `suggested_quantity` before passing suggestions in.
    /// Suggestions without a vendor, or with a zero quantity, are skipped
    /// with a warning rather than failing the batch.
    pub fn generate_restock_orders(
        &self,
        session: &Session,
        suggestions: &[RestockSuggestion],
    ) -> AppResult<Vec<PurchaseOrder>> {
        let mut groups: Vec<(smartshelf_core::VendorId, Vec<NewOrderItem>)> = Vec::new();

        for suggestion in suggestions {
            let Some(vendor_id) = suggestion.vendor_id else {
                tracing::warn!(sku = %suggestion.sku, "restock skipped, product has no vendor");
                continue;
            };
            if suggestion.suggested_quantity <= 0 {
                tracing::warn!(sku = %suggestion.sku, "restock skipped, nothing to order");
                continue;
            }
            let unit_price = self
                .store
                .get_product(suggestion.product_id)?
                .map(|p| p.price())
                .unwrap_or_default();

            let item = NewOrderItem {
                product_id: suggestion.product_id,
                quantity: suggestion.suggested_quantity,
                unit_price,
            };
            match groups.iter_mut().find(|(v, _)| *v == vendor_id) {
                Some((_, items)) => items.push(item),
                None => groups.push((vendor_id, vec![item])),
            }
        }

        let mut orders = Vec::with_capacity(groups.len());
        for (vendor_id, items) in groups {
            orders.push(self.create_purchase_order(session, vendor_id, items)?);
        }

        // An order covering an out-of-stock product cannot wait for email.
        if let Some(phone) = self.ops_phone.as_deref() {
            for suggestion in suggestions {
                if suggestion.urgency == Urgency::Critical
                    && suggestion.vendor_id.is_some()
                    && suggestion.suggested_quantity > 0
                {
                    self.notifier().send_sms_alert(SmsAlert {
                        phone: phone.to_string(),
                        kind: SmsKind::UrgentOrder,
                        message: format!(
                            "Urgent restock order placed for {} ({})",
                            suggestion.name, suggestion.sku
                        ),
                        product_id: Some(suggestion.product_id),
                    });
                }
            }
        }
        Ok(orders)
    }
}
