//! `smartshelf-sync`
//!
//! **Responsibility:** keeping local row caches consistent with the store.
//!
//! Change notifications carry no payload, only the table and row id. A cache
//! reacts to a notification by refetching the affected row from its
//! [`RowSource`], so the source of truth is always the store, never the
//! notification stream.

pub mod cache;
pub mod source;

pub use cache::ResourceCache;
pub use source::{RowSource, SourceError};
