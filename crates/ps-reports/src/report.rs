//! A single crowd report and its reporter token.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use ps_core::{LocationId, LocationKind, ReportId, SpotError};

// ── ReportStatus ──────────────────────────────────────────────────────────────

/// What a user saw at a location.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReportStatus {
    Available,
    Limited,
    Full,
    OutOfOrder,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 4] = [
        ReportStatus::Available,
        ReportStatus::Limited,
        ReportStatus::Full,
        ReportStatus::OutOfOrder,
    ];

    /// `available` and `limited` count toward observed availability.
    #[inline]
    pub fn is_favorable(self) -> bool {
        matches!(self, ReportStatus::Available | ReportStatus::Limited)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReportStatus::Available  => "available",
            ReportStatus::Limited    => "limited",
            ReportStatus::Full       => "full",
            ReportStatus::OutOfOrder => "out_of_order",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = SpotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ReportStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SpotError::UnknownTag { what: "report status", value: s.to_owned() })
    }
}

// ── ReporterToken ─────────────────────────────────────────────────────────────

/// Anonymized reporter identity: the first 8 hex digits of the MD5 of the
/// session id.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ReporterToken(String);

impl ReporterToken {
    pub const LEN: usize = 8;

    pub fn for_session(session_id: &str) -> Self {
        let digest = md5::compute(session_id.as_bytes());
        let mut hex = format!("{digest:x}");
        hex.truncate(Self::LEN);
        Self(hex)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReporterToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

/// One submitted observation.  Never mutated once stored.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub id:            ReportId,
    /// Not checked against the generated tables.
    pub location_id:   LocationId,
    pub location_kind: LocationKind,
    pub status:        ReportStatus,
    pub notes:         Option<String>,
    pub timestamp:     NaiveDateTime,
    pub reporter:      ReporterToken,
}

impl Report {
    /// Seconds since submission as seen from `now`.  Negative only when
    /// `now` precedes the report.
    #[inline]
    pub fn age_secs(&self, now: NaiveDateTime) -> i64 {
        ps_core::time::seconds_between(self.timestamp, now)
    }

    /// `true` if the report is strictly younger than `window_secs`.
    #[inline]
    pub fn is_within(&self, window_secs: i64, now: NaiveDateTime) -> bool {
        self.age_secs(now) < window_secs
    }
}
