//! Единый тип ошибок публичного API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BintaxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Timestamp parse error: {0}")]
    TimestampParse(String),

    #[error("Amount parse error: {0}")]
    AmountParse(String),

    #[error("Unknown operation type: {0}")]
    UnknownOperationType(String),
}

pub type Result<T> = std::result::Result<T, BintaxError>;
