use thiserror::Error;

/// Forecast computation failure.
///
/// Jobs are pure arithmetic; the only failures are malformed inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForecastError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
