//! Refetch-on-notify row cache.

use uuid::Uuid;

use smartshelf_events::{ChangeEvent, ChangeKind, Subscription};

use crate::source::{RowSource, SourceError};

/// A local copy of one table's visible rows, kept fresh from a change feed.
///
/// Lifecycle mirrors a dashboard page: [`ResourceCache::new`] subscribes and
/// loads, [`pump`] applies queued notifications, [`unmount`] tears down. The
/// subscription is taken as an argument so it provably exists before the
/// initial load; a change arriving during the load is queued, not lost.
///
/// [`pump`]: ResourceCache::pump
/// [`unmount`]: ResourceCache::unmount
pub struct ResourceCache<S: RowSource> {
    source: S,
    subscription: Option<Subscription<ChangeEvent>>,
    rows: Vec<S::Row>,
    stale: bool,
}

impl<S: RowSource> ResourceCache<S> {
    /// Subscribe-then-load. The initial fetch happens after the subscription
    /// is live.
    pub fn new(source: S, subscription: Subscription<ChangeEvent>) -> Result<Self, SourceError> {
        let mut cache = Self {
            source,
            subscription: Some(subscription),
            rows: Vec::new(),
            stale: true,
        };
        cache.refresh()?;
        Ok(cache)
    }

    /// Replace the cached rows with a full fetch.
    pub fn refresh(&mut self) -> Result<(), SourceError> {
        self.rows = self.source.fetch_all()?;
        self.stale = false;
        Ok(())
    }

    /// Drain queued change notifications and reconcile the cache.
    ///
    /// Each notification for this cache's table triggers a refetch of the
    /// affected row; the notification itself is never trusted for row data.
    /// Returns the number of notifications applied. After [`unmount`] this is
    /// a no-op returning 0.
    ///
    /// [`unmount`]: ResourceCache::unmount
    pub fn pump(&mut self) -> usize {
        let Some(subscription) = self.subscription.take() else {
            return 0;
        };

        let mut applied = 0;
        while let Ok(event) = subscription.try_recv() {
            if event.table != self.source.table() {
                continue;
            }
            self.apply(&event);
            applied += 1;
        }

        self.subscription = Some(subscription);
        applied
    }

    fn apply(&mut self, event: &ChangeEvent) {
        match event.kind {
            ChangeKind::Deleted => self.remove(event.row_id),
            ChangeKind::Inserted | ChangeKind::Updated => {
                match self.source.fetch_one(event.row_id) {
                    Ok(Some(row)) => self.upsert(row),
                    // Gone (or no longer visible) by the time we refetched.
                    Ok(None) => self.remove(event.row_id),
                    Err(err) => {
                        tracing::warn!(
                            table = self.source.table().as_str(),
                            row_id = %event.row_id,
                            error = %err,
                            "refetch failed, cache marked stale"
                        );
                        self.stale = true;
                    }
                }
            }
        }
    }

    fn upsert(&mut self, row: S::Row) {
        let id = S::row_id(&row);
        match self.rows.iter().position(|r| S::row_id(r) == id) {
            Some(idx) => self.rows[idx] = row,
            None => self.rows.push(row),
        }
    }

    fn remove(&mut self, row_id: Uuid) {
        self.rows.retain(|r| S::row_id(r) != row_id);
    }

    /// Stop listening. The last fetched rows remain readable but frozen.
    pub fn unmount(&mut self) {
        self.subscription = None;
    }

    pub fn rows(&self) -> &[S::Row] {
        &self.rows
    }

    /// True when a refetch failed and the cache may lag the store.
    /// Cleared by the next successful [`refresh`](ResourceCache::refresh).
    pub fn is_stale(&self) -> bool {
        self.stale
    }
}
