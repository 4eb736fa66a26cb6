//! Search preferences and sort keys.

use std::fmt;
use std::str::FromStr;

use ps_core::{LocationKind, SpotError};
use ps_data::Feature;

/// Ordering applied by [`SearchResult::ranked`](crate::SearchResult::ranked).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortKey {
    /// Nearest first.
    #[default]
    Distance,
    /// Cheapest first; permit-only blocks last.
    Price,
    /// Most likely available first.
    Availability,
    /// Most reported first.
    ReportCount,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Distance     => "distance",
            SortKey::Price        => "price",
            SortKey::Availability => "availability",
            SortKey::ReportCount  => "report_count",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = SpotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance"                           => Ok(SortKey::Distance),
            "price"                              => Ok(SortKey::Price),
            "availability"                       => Ok(SortKey::Availability),
            "report_count" | "reports" | "report-count" => Ok(SortKey::ReportCount),
            _ => Err(SpotError::UnknownTag { what: "sort key", value: s.trim().to_owned() }),
        }
    }
}

/// What a user asked for.
///
/// Only `required_features` affects
/// [`SpatialEngine::find_near`](crate::SpatialEngine::find_near), and only
/// for features where [`Feature::is_enforced`] holds.  The remaining fields
/// drive client-side ranking through [`RankOptions`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preferences {
    pub preferred_types:    Vec<LocationKind>,
    /// Miles.  Clients usually pass this as the search radius.
    pub max_walk_distance:  f64,
    /// Dollars per hour; `None` means no cap.
    pub max_price_per_hour: Option<f64>,
    pub required_features:  Vec<Feature>,
    pub sort_by:            SortKey,
}

impl Preferences {
    /// `true` if a facility with `features` satisfies every enforced
    /// requirement.
    pub fn admits_facility(&self, features: &[Feature]) -> bool {
        self.required_features
            .iter()
            .filter(|f| f.is_enforced())
            .all(|f| features.contains(f))
    }

    pub fn requiring(mut self, feature: Feature) -> Self {
        if !self.required_features.contains(&feature) {
            self.required_features.push(feature);
        }
        self
    }
}

impl Default for Preferences {
    /// No restrictions: every type, no price cap, no required features.
    fn default() -> Self {
        Self {
            preferred_types:    LocationKind::ALL.to_vec(),
            max_walk_distance:  1.0,
            max_price_per_hour: None,
            required_features:  Vec::new(),
            sort_by:            SortKey::Distance,
        }
    }
}

/// Client-side filter and ordering over a [`SearchResult`](crate::SearchResult).
#[derive(Clone, Debug, PartialEq)]
pub struct RankOptions {
    pub preferred_types:    Vec<LocationKind>,
    pub max_price_per_hour: Option<f64>,
    pub sort_by:            SortKey,
    /// Keep at most this many options.
    pub limit:              Option<usize>,
}

impl RankOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Default for RankOptions {
    fn default() -> Self {
        Self::from(&Preferences::default())
    }
}

impl From<&Preferences> for RankOptions {
    fn from(prefs: &Preferences) -> Self {
        Self {
            preferred_types:    prefs.preferred_types.clone(),
            max_price_per_hour: prefs.max_price_per_hour,
            sort_by:            prefs.sort_by,
            limit:              None,
        }
    }
}
