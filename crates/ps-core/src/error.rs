//! Shared error type.
//!
//! Sub-crates define their own error enums (`DataError`, `SpatialError`,
//! `EngineError`) and wrap `SpotError` where a tag fails to parse.

use thiserror::Error;

/// Errors produced by `ps-core` parsing helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpotError {
    #[error("unknown {what} {value:?}")]
    UnknownTag {
        what:  &'static str,
        value: String,
    },
}

/// Shorthand result type for `ps-core`.
pub type SpotResult<T> = Result<T, SpotError>;
