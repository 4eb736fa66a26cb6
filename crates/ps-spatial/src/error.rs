//! Spatial-query error type.

use thiserror::Error;

/// Errors produced by `ps-spatial`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpatialError {
    /// The name is not in the destination table.  User-facing; the caller
    /// should offer the known names instead.
    #[error("destination {0:?} not found")]
    DestinationNotFound(String),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
