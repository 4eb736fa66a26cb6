//! `ps-core` — foundational types for the `philaspot` parking engine.
//!
//! This crate is a dependency of every other `ps-*` crate.  It has no `ps-*`
//! dependencies and few external ones (`rand`, `chrono`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`ids`]    | `LocationId`, `ReportId`                                 |
//! | [`geo`]    | `GeoPoint`, haversine distance in miles                  |
//! | [`kind`]   | `LocationKind` — garage / lot / meter / permit           |
//! | [`rng`]    | `TableRng` (per generated table)                         |
//! | [`time`]   | `Clock`, `SystemClock`, `ManualClock`, `DayType`         |
//! | [`error`]  | `SpotError`, `SpotResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod kind;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SpotError, SpotResult};
pub use geo::GeoPoint;
pub use ids::{LocationId, ReportId};
pub use kind::LocationKind;
pub use rng::{TableRng, TableTag};
pub use time::{Clock, DayType, ManualClock, SystemClock};
