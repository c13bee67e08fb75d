use thiserror::Error;
use uuid::Uuid;

use smartshelf_events::Table;

/// Row lookup failure reported by a backing store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A read view over one table of the backing store.
///
/// Implementations return already-joined display rows; callers never see raw
/// storage records.
pub trait RowSource {
    type Row: Clone;

    /// The table this source reads from.
    fn table(&self) -> Table;

    /// Fetch every row visible to the view, in the store's listing order.
    fn fetch_all(&self) -> Result<Vec<Self::Row>, SourceError>;

    /// Fetch one row by id. `Ok(None)` means the row does not exist or is not
    /// visible to the view.
    fn fetch_one(&self, row_id: Uuid) -> Result<Option<Self::Row>, SourceError>;

    /// The id of a fetched row, used to match rows to change notifications.
    fn row_id(row: &Self::Row) -> Uuid;
}
