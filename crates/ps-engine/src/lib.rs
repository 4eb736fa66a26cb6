//! `ps-engine` — the philaspot engine facade.
//!
//! # Request flow
//!
//! ```text
//! startup:   Config ─▶ EngineBuilder::build ─▶ Dataset::generate (once)
//!                                           └▶ LocationIndex (R-tree)
//! search:    find_near ─▶ envelope prefilter ─▶ exact distance
//!                      └▶ AvailabilityModel::predict + ReportSummary per hit
//! report:    ReportStore::submit (engine clock)
//! analytics: ps_analytics::snapshot over Dataset + ReportStore
//! ```
//!
//! # Crate layout
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`config`]  | TOML file loading and conversion to engine settings    |
//! | [`builder`] | `EngineBuilder`                                        |
//! | [`engine`]  | `ParkingEngine` — search, report, summary, analytics   |
//! | [`error`]   | `EngineError`, `EngineResult<T>`                       |
//!
//! # Cargo features
//!
//! | Feature | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Serialize/deserialize every public data type.            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ps_engine::{EngineBuilder, config};
//!
//! let config = config::load_default()?;
//! let engine = EngineBuilder::from_config(&config)?.build()?;
//! let store = engine.open_session("tab-1");
//! let result = engine.search_default(&store, "Independence Hall")?;
//! ```

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;

#[cfg(test)]
mod tests;

pub use builder::EngineBuilder;
pub use config::{Config, ConfigError};
pub use engine::ParkingEngine;
pub use error::{EngineError, EngineResult};
