//! `smartshelf-events`: the per-table change-notification channel.
//!
//! The backing store is the source of truth; every committed insert, update,
//! or delete is announced on the change feed so client-side caches can
//! reconcile. Envelopes carry **no row payload**; consumers re-fetch the row
//! to resolve joined display fields.

pub mod change;
pub mod feed;
pub mod in_memory_feed;

pub use change::{ChangeEvent, ChangeKind, Table};
pub use feed::{ChangeFeed, Subscription};
pub use in_memory_feed::{InMemoryChangeFeed, InMemoryFeedError};
