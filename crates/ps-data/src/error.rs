//! Data-subsystem error type.

use thiserror::Error;

/// Errors produced by `ps-data`.
#[derive(Debug, Error)]
pub enum DataError {
    /// A seed or rate table is malformed.  Fatal at startup.
    #[error("configuration error in {table} table: {reason}")]
    Config { table: &'static str, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    pub(crate) fn config(table: &'static str, reason: impl Into<String>) -> Self {
        DataError::Config { table, reason: reason.into() }
    }
}

pub type DataResult<T> = Result<T, DataError>;
