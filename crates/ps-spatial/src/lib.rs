//! `ps-spatial` — find parking near a named destination.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`index`]  | `LocationIndex` — R-tree box prefilter over every location    |
//! | [`search`] | `SpatialEngine::find_near`, `SearchResult`, `LocationHit`     |
//! | [`prefs`]  | `Preferences`, `RankOptions`, `SortKey`                       |
//! | [`rank`]   | `ParkingOption` and `SearchResult::ranked`                    |
//! | [`error`]  | `SpatialError`, `SpatialResult<T>`                            |
//!
//! # Search model
//!
//! The R-tree returns every location inside a lat/lon box that encloses the
//! search circle.  Each candidate is then tested with the exact haversine
//! distance, so the box never changes which locations are returned, only
//! how many are tested.

pub mod error;
pub mod index;
pub mod prefs;
pub mod rank;
pub mod search;


pub use error::{SpatialError, SpatialResult};
pub use index::{LocationIndex, Slot};
pub use prefs::{Preferences, RankOptions, SortKey};
pub use rank::{ParkingOption, WALKING_MPH, walking_minutes};
pub use search::{LocationHit, SearchContext, SearchResult, SpatialEngine};
