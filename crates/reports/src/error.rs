use thiserror::Error;

/// Export/import failure.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("report output was not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("malformed input: {0}")]
    Malformed(String),
}
