use thiserror::Error;

#[derive(Error, Debug)]
pub enum MortgageError {
    /// A lending rule rejected the request. The message is shown to the caller as-is.
    #[error("{0}")]
    Validation(String),
    #[error("Missing required fields")]
    MissingFields,
    #[error("Calculation error: {0}")]
    Calculation(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MortgageError>;
