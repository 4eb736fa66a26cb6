//! Engine-level error type.

use thiserror::Error;

use ps_core::SpotError;
use ps_data::DataError;
use ps_spatial::SpatialError;

use crate::config::ConfigError;

/// Errors produced while configuring or running the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generator tables rejected at startup.
    #[error("dataset error: {0}")]
    Data(#[from] DataError),

    #[error(transparent)]
    Spatial(#[from] SpatialError),

    #[error("invalid configuration value: {0}")]
    Tag(#[from] SpotError),

    #[error("invalid setting `{key}`: {reason}")]
    InvalidSetting {
        key:    &'static str,
        reason: String,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;
