//! Crate-wide error type
//!
//! Precondition violations (bad date strings, empty feeds, zero-length
//! cycles) get their own variants so callers can distinguish them from
//! IO and network failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD, e.g. 1969-07-20")]
    InvalidDateFormat(String),

    #[error("No photo dates available to match against")]
    EmptyDateList,

    #[error("Cycle length must be positive")]
    InvalidCycleLength,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),
}

pub type Result<T> = std::result::Result<T, Error>;
