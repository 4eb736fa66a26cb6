//! Identifier wrappers.
//!
//! Location ids are strings because reports reference them without
//! validation: a client may submit a report for any id it likes, and the
//! store must keep it.  Report ids are sequential integers assigned by the
//! store.

use std::borrow::Borrow;
use std::fmt;

// ── LocationId ────────────────────────────────────────────────────────────────

/// Identifier of a garage, meter, or permit block (`facility_3`,
/// `meter_1000012`, `permit_C_7`).
///
/// Unique within its generated table; unvalidated when it arrives on a report.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocationId(String);

impl LocationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// `facility_<n>`, `n` 1-based.
    pub fn facility(n: usize) -> Self {
        Self(format!("facility_{n}"))
    }

    /// `meter_<n>` where `n` is the meter number.
    pub fn meter(n: u32) -> Self {
        Self(format!("meter_{n}"))
    }

    /// `permit_<zone>_<n>`, `n` 1-based within the zone.
    pub fn permit(zone: char, n: usize) -> Self {
        Self(format!("permit_{zone}_{n}"))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for LocationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for LocationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ── ReportId ──────────────────────────────────────────────────────────────────

/// Sequential id of a user report, starting at 1 within each store.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ReportId(pub u64);

impl ReportId {
    pub const FIRST: ReportId = ReportId(1);

    #[inline]
    pub fn next(self) -> ReportId {
        ReportId(self.0 + 1)
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
