//! `ps-data` — seeded synthetic parking dataset.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                |
//! |------------------|---------------------------------------------------------|
//! | [`model`]        | `ParkingFacility`, `MeteredSegment`, `PermitBlock`, …   |
//! | [`tables`]       | `GeneratorConfig` and the built-in Philadelphia anchors |
//! | [`generate`]     | `generate_*` functions and the immutable `Dataset`      |
//! | [`destinations`] | `DestinationTable` — the fixed named destinations       |
//! | [`export`]       | CSV dump of the generated tables                        |
//! | [`error`]        | `DataError`, `DataResult<T>`                            |
//!
//! # Determinism
//!
//! Anchor identity (which garages, which streets, which neighborhoods) comes
//! only from the seed tables.  The seed drives counts per street, jitter
//! offsets, and categorical attributes.  The same [`GeneratorConfig`] always
//! yields the same [`Dataset`].
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod destinations;
pub mod error;
pub mod export;
pub mod generate;
pub mod model;
pub mod tables;


pub use destinations::{DestinationTable, destinations};
pub use error::{DataError, DataResult};
pub use generate::{Dataset, generate_facilities, generate_meters, generate_permit_blocks};
pub use model::{
    BlockSide, Destination, DestinationCategory, EnforcementWindow, FacilityType, Feature,
    MeterType, MeteredSegment, OperationalStatus, ParkingFacility, ParkingSituation,
    PaymentMethod, PermitBlock, StreetSide, TimeRestriction, VisitorParking,
};
pub use tables::{FacilityAnchor, GeneratorConfig, MeteredStreet, Neighborhood, Rate, RateEntry};
