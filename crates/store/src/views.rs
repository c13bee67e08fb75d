//! Scoped read views over the store's tables.
//!
//! Each view pairs the table data with a visibility scope fixed at
//! construction. Vendors get views bound to their vendor id; internal staff
//! get unrestricted ones. The scope can therefore never widen after sign-in.

use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use smartshelf_alerts::Alert;
use smartshelf_auth::Scope;
use smartshelf_core::{CategoryId, Entity, ProductId, UserId, VendorId};
use smartshelf_events::Table;
use smartshelf_sync::{RowSource, SourceError};

use crate::memory::Tables;
use crate::rows::{ProductRow, PurchaseOrderRow, StockRequestRow, TransactionRow};

/// Visible alerts are capped to the newest 50, matching the notification
/// panel's page size.
pub const ALERT_LIMIT: usize = 50;

fn lock(tables: &Mutex<Tables>) -> Result<MutexGuard<'_, Tables>, SourceError> {
    tables
        .lock()
        .map_err(|_| SourceError::Unavailable("store lock poisoned".into()))
}

fn category_name(tables: &Tables, id: Option<CategoryId>) -> Option<String> {
    let id = id?;
    tables
        .categories
        .iter()
        .find(|c| *c.id() == id)
        .map(|c| c.name().to_string())
}

fn vendor_name(tables: &Tables, id: Option<VendorId>) -> Option<String> {
    let id = id?;
    tables
        .vendors
        .iter()
        .find(|v| *v.id() == id)
        .map(|v| v.name().to_string())
}

fn product_coords(tables: &Tables, id: Option<ProductId>) -> (Option<String>, Option<String>) {
    let Some(id) = id else {
        return (None, None);
    };
    match tables.products.iter().find(|p| *p.id() == id) {
        Some(p) => (Some(p.name().to_string()), Some(p.sku().as_str().to_string())),
        None => (None, None),
    }
}

/// Products joined with category and vendor names.
pub struct ProductsView {
    tables: Arc<Mutex<Tables>>,
    scope: Scope,
}

impl ProductsView {
    pub(crate) fn new(tables: Arc<Mutex<Tables>>, scope: Scope) -> Self {
        Self { tables, scope }
    }
}

impl RowSource for ProductsView {
    type Row = ProductRow;

    fn table(&self) -> Table {
        Table::Products
    }

    fn fetch_all(&self) -> Result<Vec<ProductRow>, SourceError> {
        let tables = lock(&self.tables)?;
        Ok(tables
            .products
            .iter()
            .rev()
            .filter(|p| self.scope.allows_vendor(p.vendor_id()))
            .map(|p| ProductRow {
                product: p.clone(),
                category_name: category_name(&tables, p.category_id()),
                vendor_name: vendor_name(&tables, p.vendor_id()),
            })
            .collect())
    }

    fn fetch_one(&self, row_id: Uuid) -> Result<Option<ProductRow>, SourceError> {
        let tables = lock(&self.tables)?;
        Ok(tables
            .products
            .iter()
            .find(|p| *p.id().as_uuid() == row_id)
            .filter(|p| self.scope.allows_vendor(p.vendor_id()))
            .map(|p| ProductRow {
                product: p.clone(),
                category_name: category_name(&tables, p.category_id()),
                vendor_name: vendor_name(&tables, p.vendor_id()),
            }))
    }

    fn row_id(row: &ProductRow) -> Uuid {
        row.row_id()
    }
}

/// Transactions joined with product display coordinates.
///
/// Vendor scope resolves through the product's vendor binding; movements on
/// products that no longer exist are only visible to internal staff.
pub struct TransactionsView {
    tables: Arc<Mutex<Tables>>,
    scope: Scope,
}

impl TransactionsView {
    pub(crate) fn new(tables: Arc<Mutex<Tables>>, scope: Scope) -> Self {
        Self { tables, scope }
    }

    fn visible(&self, tables: &Tables, product_id: ProductId) -> bool {
        match self.scope {
            Scope::All => true,
            Scope::Nothing => false,
            Scope::Vendor(_) => tables
                .products
                .iter()
                .find(|p| *p.id() == product_id)
                .is_some_and(|p| self.scope.allows_vendor(p.vendor_id())),
        }
    }
}

impl RowSource for TransactionsView {
    type Row = TransactionRow;

    fn table(&self) -> Table {
        Table::Transactions
    }

    fn fetch_all(&self) -> Result<Vec<TransactionRow>, SourceError> {
        let tables = lock(&self.tables)?;
        Ok(tables
            .transactions
            .iter()
            .rev()
            .filter(|t| self.visible(&tables, t.product_id()))
            .map(|t| {
                let (product_name, product_sku) = product_coords(&tables, Some(t.product_id()));
                TransactionRow {
                    transaction: t.clone(),
                    product_name,
                    product_sku,
                }
            })
            .collect())
    }

    fn fetch_one(&self, row_id: Uuid) -> Result<Option<TransactionRow>, SourceError> {
        let tables = lock(&self.tables)?;
        Ok(tables
            .transactions
            .iter()
            .find(|t| *t.id().as_uuid() == row_id)
            .filter(|t| self.visible(&tables, t.product_id()))
            .map(|t| {
                let (product_name, product_sku) = product_coords(&tables, Some(t.product_id()));
                TransactionRow {
                    transaction: t.clone(),
                    product_name,
                    product_sku,
                }
            }))
    }

    fn row_id(row: &TransactionRow) -> Uuid {
        row.row_id()
    }
}

/// Purchase orders joined with the vendor name.
pub struct PurchaseOrdersView {
    tables: Arc<Mutex<Tables>>,
    scope: Scope,
}

impl PurchaseOrdersView {
    pub(crate) fn new(tables: Arc<Mutex<Tables>>, scope: Scope) -> Self {
        Self { tables, scope }
    }
}

impl RowSource for PurchaseOrdersView {
    type Row = PurchaseOrderRow;

    fn table(&self) -> Table {
        Table::PurchaseOrders
    }

    fn fetch_all(&self) -> Result<Vec<PurchaseOrderRow>, SourceError> {
        let tables = lock(&self.tables)?;
        Ok(tables
            .purchase_orders
            .iter()
            .rev()
            .filter(|o| self.scope.allows_vendor(Some(o.vendor_id())))
            .map(|o| PurchaseOrderRow {
                order: o.clone(),
                vendor_name: vendor_name(&tables, Some(o.vendor_id())),
            })
            .collect())
    }

    fn fetch_one(&self, row_id: Uuid) -> Result<Option<PurchaseOrderRow>, SourceError> {
        let tables = lock(&self.tables)?;
        Ok(tables
            .purchase_orders
            .iter()
            .find(|o| *o.id().as_uuid() == row_id)
            .filter(|o| self.scope.allows_vendor(Some(o.vendor_id())))
            .map(|o| PurchaseOrderRow {
                order: o.clone(),
                vendor_name: vendor_name(&tables, Some(o.vendor_id())),
            }))
    }

    fn row_id(row: &PurchaseOrderRow) -> Uuid {
        row.row_id()
    }
}

/// Stock requests joined with product and vendor names.
pub struct StockRequestsView {
    tables: Arc<Mutex<Tables>>,
    scope: Scope,
}

impl StockRequestsView {
    pub(crate) fn new(tables: Arc<Mutex<Tables>>, scope: Scope) -> Self {
        Self { tables, scope }
    }
}

impl RowSource for StockRequestsView {
    type Row = StockRequestRow;

    fn table(&self) -> Table {
        Table::StockRequests
    }

    fn fetch_all(&self) -> Result<Vec<StockRequestRow>, SourceError> {
        let tables = lock(&self.tables)?;
        Ok(tables
            .stock_requests
            .iter()
            .rev()
            .filter(|r| self.scope.allows_vendor(Some(r.vendor_id())))
            .map(|r| {
                let (product_name, product_sku) = product_coords(&tables, r.product_id());
                StockRequestRow {
                    request: r.clone(),
                    product_name,
                    product_sku,
                    vendor_name: vendor_name(&tables, Some(r.vendor_id())),
                }
            })
            .collect())
    }

    fn fetch_one(&self, row_id: Uuid) -> Result<Option<StockRequestRow>, SourceError> {
        let tables = lock(&self.tables)?;
        Ok(tables
            .stock_requests
            .iter()
            .find(|r| *r.id().as_uuid() == row_id)
            .filter(|r| self.scope.allows_vendor(Some(r.vendor_id())))
            .map(|r| {
                let (product_name, product_sku) = product_coords(&tables, r.product_id());
                StockRequestRow {
                    request: r.clone(),
                    product_name,
                    product_sku,
                    vendor_name: vendor_name(&tables, Some(r.vendor_id())),
                }
            }))
    }

    fn row_id(row: &StockRequestRow) -> Uuid {
        row.row_id()
    }
}

/// Alerts visible to one user: broadcasts plus their targeted alerts,
/// newest first, capped at [`ALERT_LIMIT`].
pub struct AlertsView {
    tables: Arc<Mutex<Tables>>,
    user_id: UserId,
}

impl AlertsView {
    pub(crate) fn new(tables: Arc<Mutex<Tables>>, user_id: UserId) -> Self {
        Self { tables, user_id }
    }
}

impl RowSource for AlertsView {
    type Row = Alert;

    fn table(&self) -> Table {
        Table::Alerts
    }

    fn fetch_all(&self) -> Result<Vec<Alert>, SourceError> {
        let tables = lock(&self.tables)?;
        Ok(tables
            .alerts
            .iter()
            .rev()
            .filter(|a| a.visible_to(self.user_id))
            .take(ALERT_LIMIT)
            .cloned()
            .collect())
    }

    fn fetch_one(&self, row_id: Uuid) -> Result<Option<Alert>, SourceError> {
        let tables = lock(&self.tables)?;
        Ok(tables
            .alerts
            .iter()
            .find(|a| *a.id().as_uuid() == row_id)
            .filter(|a| a.visible_to(self.user_id))
            .cloned())
    }

    fn row_id(row: &Alert) -> Uuid {
        *row.id().as_uuid()
    }
}
