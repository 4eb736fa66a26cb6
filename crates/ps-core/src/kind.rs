//! Location category enum shared across the data, prediction, and query
//! crates.

use std::str::FromStr;

use crate::SpotError;

/// What kind of parking a location offers.
///
/// Replaces the string tags (`"garage"`, `"garage_lot"`, `"permit_zone"`…)
/// that clients send with reports.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LocationKind {
    /// Multi-level parking structure.
    Garage,
    /// Surface lot.
    Lot,
    /// Metered curbside segment.
    Meter,
    /// Residential permit block.
    Permit,
}

impl LocationKind {
    pub const ALL: [LocationKind; 4] = [
        LocationKind::Garage,
        LocationKind::Lot,
        LocationKind::Meter,
        LocationKind::Permit,
    ];

    /// `true` for the off-street kinds held in the facility table.
    #[inline]
    pub fn is_facility(self) -> bool {
        matches!(self, LocationKind::Garage | LocationKind::Lot)
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            LocationKind::Garage => "garage",
            LocationKind::Lot    => "lot",
            LocationKind::Meter  => "meter",
            LocationKind::Permit => "permit",
        }
    }
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationKind {
    type Err = SpotError;

    /// Accepts the canonical labels plus the dashboard's form values
    /// (`garage_lot`, `permit_zone`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "garage" | "garage_lot"   => Ok(LocationKind::Garage),
            "lot"                     => Ok(LocationKind::Lot),
            "meter"                   => Ok(LocationKind::Meter),
            "permit" | "permit_zone"  => Ok(LocationKind::Permit),
            other => Err(SpotError::UnknownTag {
                what:  "location kind",
                value: other.to_owned(),
            }),
        }
    }
}
