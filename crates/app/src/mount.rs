//! Live page caches.
//!
//! Each mount subscribes to the change feed first, then loads, so no change
//! can fall between the initial fetch and the subscription. Call
//! [`smartshelf_sync::ResourceCache::pump`] from the page loop and
//! `unmount` on teardown.

use smartshelf_auth::Session;
use smartshelf_store::{
    AlertsView, ProductsView, PurchaseOrdersView, StockRequestsView, TransactionsView,
};
use smartshelf_sync::ResourceCache;

use crate::error::AppResult;
use crate::services::Services;

impl Services {
    pub fn mount_products(&self, session: &Session) -> AppResult<ResourceCache<ProductsView>> {
        let subscription = self.store.subscribe();
        Ok(ResourceCache::new(
            self.store.products_view(session.scope()),
            subscription,
        )?)
    }

    pub fn mount_transactions(
        &self,
        session: &Session,
    ) -> AppResult<ResourceCache<TransactionsView>> {
        let subscription = self.store.subscribe();
        Ok(ResourceCache::new(
            self.store.transactions_view(session.scope()),
            subscription,
        )?)
    }

    pub fn mount_purchase_orders(
        &self,
        session: &Session,
    ) -> AppResult<ResourceCache<PurchaseOrdersView>> {
        let subscription = self.store.subscribe();
        Ok(ResourceCache::new(
            self.store.purchase_orders_view(session.scope()),
            subscription,
        )?)
    }

    pub fn mount_stock_requests(
        &self,
        session: &Session,
    ) -> AppResult<ResourceCache<StockRequestsView>> {
        let subscription = self.store.subscribe();
        Ok(ResourceCache::new(
            self.store.stock_requests_view(session.scope()),
            subscription,
        )?)
    }

    pub fn mount_alerts(&self, session: &Session) -> AppResult<ResourceCache<AlertsView>> {
        let subscription = self.store.subscribe();
        Ok(ResourceCache::new(
            self.store.alerts_view(session.user_id),
            subscription,
        )?)
    }
}
