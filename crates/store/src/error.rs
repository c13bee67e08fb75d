use thiserror::Error;

use smartshelf_core::DomainError;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A writer panicked while holding the table lock.
    #[error("store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn not_found() -> Self {
        Self::Domain(DomainError::NotFound)
    }
}
