use thiserror::Error;

use smartshelf_core::DomainError;
use smartshelf_forecast::ForecastError;
use smartshelf_store::StoreError;
use smartshelf_sync::SourceError;

pub type AppResult<T> = Result<T, AppError>;

/// Failure surfaced to the dashboard.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error(transparent)]
    Forecast(#[from] ForecastError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Domain(domain) => Self::Domain(domain),
            StoreError::Poisoned => Self::Storage("store lock poisoned".into()),
        }
    }
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Unavailable(msg) => Self::Storage(msg),
        }
    }
}
