//! In-memory backing store.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use smartshelf_alerts::Alert;
use smartshelf_audit::AuditLog;
use smartshelf_auth::Scope;
use smartshelf_core::{
    AlertId, CategoryId, DomainError, Entity, ProductId, PurchaseOrderId, StockRequestId, UserId,
    VendorId,
};
use smartshelf_events::{ChangeEvent, ChangeFeed, ChangeKind, InMemoryChangeFeed, Subscription, Table};
use smartshelf_inventory::{NewTransaction, Transaction, apply_movement};
use smartshelf_products::{Category, Product, ProductUpdate};
use smartshelf_purchasing::{PurchaseOrder, StockRequest};
use smartshelf_vendors::Vendor;

use crate::error::{StoreError, StoreResult};
use crate::profile::Profile;
use crate::views::{
    AlertsView, ProductsView, PurchaseOrdersView, StockRequestsView, TransactionsView,
};

#[derive(Default)]
pub(crate) struct Tables {
    pub(crate) products: Vec<Product>,
    pub(crate) categories: Vec<Category>,
    pub(crate) vendors: Vec<Vendor>,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) purchase_orders: Vec<PurchaseOrder>,
    pub(crate) stock_requests: Vec<StockRequest>,
    pub(crate) alerts: Vec<Alert>,
    pub(crate) audit_logs: Vec<AuditLog>,
    pub(crate) profiles: Vec<Profile>,
}

/// Single-process store with realtime change announcements.
///
/// Every mutation follows the same discipline: take the table lock, commit,
/// release, then publish the change events. Notifications therefore always
/// describe rows a subsequent refetch can observe.
#[derive(Clone)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
    feed: Arc<InMemoryChangeFeed<ChangeEvent>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            tables: Arc::new(Mutex::new(Tables::default())),
            feed: Arc::new(InMemoryChangeFeed::new()),
        }
    }

    pub fn subscribe(&self) -> Subscription<ChangeEvent> {
        self.feed.subscribe()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Tables>> {
        self.tables.lock().map_err(|_| StoreError::Poisoned)
    }

    fn announce(&self, table: Table, kind: ChangeKind, row_id: Uuid) {
        if self.feed.publish(ChangeEvent::new(table, kind, row_id)).is_err() {
            tracing::warn!(table = table.as_str(), %row_id, "change announcement dropped");
        }
    }

    // ----- products ---------------------------------------------------------

    /// Insert a product. SKU must be unique within the catalog.
    pub fn insert_product(&self, product: Product) -> StoreResult<Product> {
        let row_id = *product.id().as_uuid();
        {
            let mut tables = self.lock()?;
            if tables.products.iter().any(|p| p.sku() == product.sku()) {
                return Err(DomainError::conflict(format!(
                    "SKU {} already exists",
                    product.sku()
                ))
                .into());
            }
            tables.products.push(product.clone());
        }
        self.announce(Table::Products, ChangeKind::Inserted, row_id);
        Ok(product)
    }

    pub fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
        at: DateTime<Utc>,
    ) -> StoreResult<Product> {
        let updated = {
            let mut tables = self.lock()?;
            let product = tables
                .products
                .iter_mut()
                .find(|p| *p.id() == id)
                .ok_or_else(StoreError::not_found)?;
            product.apply_update(update, at)?;
            product.clone()
        };
        self.announce(Table::Products, ChangeKind::Updated, *id.as_uuid());
        Ok(updated)
    }

    pub fn delete_product(&self, id: ProductId) -> StoreResult<()> {
        {
            let mut tables = self.lock()?;
            let before = tables.products.len();
            tables.products.retain(|p| *p.id() != id);
            if tables.products.len() == before {
                return Err(StoreError::not_found());
            }
        }
        self.announce(Table::Products, ChangeKind::Deleted, *id.as_uuid());
        Ok(())
    }

    pub fn get_product(&self, id: ProductId) -> StoreResult<Option<Product>> {
        Ok(self.lock()?.products.iter().find(|p| *p.id() == id).cloned())
    }

    /// Validate and commit a stock movement as one atomic step.
    ///
    /// The movement is checked against the product's stock *inside* the
    /// table lock, so two concurrent stock-outs cannot both pass validation
    /// against the same pre-image.
    pub fn record_movement(
        &self,
        spec: NewTransaction,
        handler_id: Option<UserId>,
        handler_name: &str,
        at: DateTime<Utc>,
    ) -> StoreResult<(Transaction, Product)> {
        let (transaction, product) = {
            let mut tables = self.lock()?;
            let product = tables
                .products
                .iter_mut()
                .find(|p| *p.id() == spec.product_id)
                .ok_or_else(StoreError::not_found)?;

            let new_stock = apply_movement(product.current_stock(), spec.kind, spec.quantity)?;
            let transaction =
                Transaction::record(smartshelf_core::TransactionId::new(), spec, handler_id, handler_name, at)?;
            product.set_stock(new_stock, at)?;

            let snapshot = product.clone();
            tables.transactions.push(transaction.clone());
            (transaction, snapshot)
        };

        self.announce(
            Table::Transactions,
            ChangeKind::Inserted,
            *transaction.id().as_uuid(),
        );
        self.announce(Table::Products, ChangeKind::Updated, *product.id().as_uuid());
        Ok((transaction, product))
    }

    // ----- categories and vendors -------------------------------------------

    pub fn insert_category(&self, category: Category) -> StoreResult<Category> {
        let row_id = *category.id().as_uuid();
        self.lock()?.categories.push(category.clone());
        self.announce(Table::Categories, ChangeKind::Inserted, row_id);
        Ok(category)
    }

    pub fn get_category(&self, id: CategoryId) -> StoreResult<Option<Category>> {
        Ok(self.lock()?.categories.iter().find(|c| *c.id() == id).cloned())
    }

    pub fn insert_vendor(&self, vendor: Vendor) -> StoreResult<Vendor> {
        let row_id = *vendor.id().as_uuid();
        self.lock()?.vendors.push(vendor.clone());
        self.announce(Table::Vendors, ChangeKind::Inserted, row_id);
        Ok(vendor)
    }

    pub fn get_vendor(&self, id: VendorId) -> StoreResult<Option<Vendor>> {
        Ok(self.lock()?.vendors.iter().find(|v| *v.id() == id).cloned())
    }

    pub fn list_vendors(&self) -> StoreResult<Vec<Vendor>> {
        Ok(self.lock()?.vendors.iter().rev().cloned().collect())
    }

    // ----- profiles ---------------------------------------------------------

    pub fn upsert_profile(&self, profile: Profile) -> StoreResult<()> {
        let mut tables = self.lock()?;
        match tables
            .profiles
            .iter_mut()
            .find(|p| p.user_id == profile.user_id)
        {
            Some(existing) => *existing = profile,
            None => tables.profiles.push(profile),
        }
        Ok(())
    }

    pub fn get_profile(&self, user_id: UserId) -> StoreResult<Option<Profile>> {
        Ok(self
            .lock()?
            .profiles
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    /// Vendor-role accounts bound to a vendor, for targeted alert fan-out.
    pub fn profiles_for_vendor(&self, vendor_id: VendorId) -> StoreResult<Vec<Profile>> {
        Ok(self
            .lock()?
            .profiles
            .iter()
            .filter(|p| p.vendor_id == Some(vendor_id))
            .cloned()
            .collect())
    }

    // ----- purchase orders and stock requests --------------------------------

    pub fn insert_order(&self, order: PurchaseOrder) -> StoreResult<PurchaseOrder> {
        let row_id = *order.id().as_uuid();
        self.lock()?.purchase_orders.push(order.clone());
        self.announce(Table::PurchaseOrders, ChangeKind::Inserted, row_id);
        Ok(order)
    }

    pub fn get_order(&self, id: PurchaseOrderId) -> StoreResult<Option<PurchaseOrder>> {
        Ok(self
            .lock()?
            .purchase_orders
            .iter()
            .find(|o| *o.id() == id)
            .cloned())
    }

    /// Apply a transition to a stored order; the change is announced only if
    /// the transition succeeds.
    pub fn update_order(
        &self,
        id: PurchaseOrderId,
        transition: impl FnOnce(&mut PurchaseOrder) -> Result<(), DomainError>,
    ) -> StoreResult<PurchaseOrder> {
        let updated = {
            let mut tables = self.lock()?;
            let order = tables
                .purchase_orders
                .iter_mut()
                .find(|o| *o.id() == id)
                .ok_or_else(StoreError::not_found)?;
            transition(order)?;
            order.clone()
        };
        self.announce(Table::PurchaseOrders, ChangeKind::Updated, *id.as_uuid());
        Ok(updated)
    }

    pub fn insert_request(&self, request: StockRequest) -> StoreResult<StockRequest> {
        let row_id = *request.id().as_uuid();
        self.lock()?.stock_requests.push(request.clone());
        self.announce(Table::StockRequests, ChangeKind::Inserted, row_id);
        Ok(request)
    }

    pub fn get_request(&self, id: StockRequestId) -> StoreResult<Option<StockRequest>> {
        Ok(self
            .lock()?
            .stock_requests
            .iter()
            .find(|r| *r.id() == id)
            .cloned())
    }

    pub fn update_request(
        &self,
        id: StockRequestId,
        transition: impl FnOnce(&mut StockRequest) -> Result<(), DomainError>,
    ) -> StoreResult<StockRequest> {
        let updated = {
            let mut tables = self.lock()?;
            let request = tables
                .stock_requests
                .iter_mut()
                .find(|r| *r.id() == id)
                .ok_or_else(StoreError::not_found)?;
            transition(request)?;
            request.clone()
        };
        self.announce(Table::StockRequests, ChangeKind::Updated, *id.as_uuid());
        Ok(updated)
    }

    // ----- alerts -----------------------------------------------------------

    pub fn insert_alert(&self, alert: Alert) -> StoreResult<Alert> {
        let row_id = *alert.id().as_uuid();
        self.lock()?.alerts.push(alert.clone());
        self.announce(Table::Alerts, ChangeKind::Inserted, row_id);
        Ok(alert)
    }

    pub fn get_alert(&self, id: AlertId) -> StoreResult<Option<Alert>> {
        Ok(self.lock()?.alerts.iter().find(|a| *a.id() == id).cloned())
    }

    pub fn mark_alert_read(&self, id: AlertId) -> StoreResult<Alert> {
        let updated = {
            let mut tables = self.lock()?;
            let alert = tables
                .alerts
                .iter_mut()
                .find(|a| *a.id() == id)
                .ok_or_else(StoreError::not_found)?;
            alert.mark_read();
            alert.clone()
        };
        self.announce(Table::Alerts, ChangeKind::Updated, *id.as_uuid());
        Ok(updated)
    }

    /// Dismissal is a hard delete.
    pub fn delete_alert(&self, id: AlertId) -> StoreResult<()> {
        {
            let mut tables = self.lock()?;
            let before = tables.alerts.len();
            tables.alerts.retain(|a| *a.id() != id);
            if tables.alerts.len() == before {
                return Err(StoreError::not_found());
            }
        }
        self.announce(Table::Alerts, ChangeKind::Deleted, *id.as_uuid());
        Ok(())
    }

    // ----- audit trail ------------------------------------------------------

    /// Append-only; there is deliberately no update or delete for the trail.
    pub fn append_audit(&self, entry: AuditLog) -> StoreResult<AuditLog> {
        let row_id = *entry.id().as_uuid();
        self.lock()?.audit_logs.push(entry.clone());
        self.announce(Table::AuditLogs, ChangeKind::Inserted, row_id);
        Ok(entry)
    }

    /// Newest first.
    pub fn list_audit_logs(&self) -> StoreResult<Vec<AuditLog>> {
        Ok(self.lock()?.audit_logs.iter().rev().cloned().collect())
    }

    // ----- scoped read views ------------------------------------------------

    pub fn products_view(&self, scope: Scope) -> ProductsView {
        ProductsView::new(Arc::clone(&self.tables), scope)
    }

    pub fn transactions_view(&self, scope: Scope) -> TransactionsView {
        TransactionsView::new(Arc::clone(&self.tables), scope)
    }

    pub fn purchase_orders_view(&self, scope: Scope) -> PurchaseOrdersView {
        PurchaseOrdersView::new(Arc::clone(&self.tables), scope)
    }

    pub fn stock_requests_view(&self, scope: Scope) -> StockRequestsView {
        StockRequestsView::new(Arc::clone(&self.tables), scope)
    }

    pub fn alerts_view(&self, user_id: UserId) -> AlertsView {
        AlertsView::new(Arc::clone(&self.tables), user_id)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
