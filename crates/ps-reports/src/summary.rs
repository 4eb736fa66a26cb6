//! Per-location report summaries.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, TimeDelta};

use ps_core::SpotError;

use crate::{Report, ReportStatus};

/// Headline status of a summary: the most frequent report status, or
/// `Unknown` when there are no reports in the window.
///
/// Serializes as a bare label (`"unknown"`, `"full"`, ...).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SummaryStatus {
    Unknown,
    Reported(ReportStatus),
}

impl SummaryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SummaryStatus::Unknown          => "unknown",
            SummaryStatus::Reported(status) => status.as_str(),
        }
    }
}

impl fmt::Display for SummaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryStatus {
    type Err = SpotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("unknown") {
            return Ok(SummaryStatus::Unknown);
        }
        s.parse().map(SummaryStatus::Reported)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SummaryStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SummaryStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = <String as serde::Deserialize>::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// How many reports back the headline status.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SummaryConfidence {
    None,
    Low,
    Medium,
    High,
}

impl SummaryConfidence {
    /// ≥5 high, ≥2 medium, 1 low, 0 none.
    pub fn from_count(count: usize) -> Self {
        match count {
            0      => SummaryConfidence::None,
            1      => SummaryConfidence::Low,
            2..=4  => SummaryConfidence::Medium,
            _      => SummaryConfidence::High,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SummaryConfidence::None   => "none",
            SummaryConfidence::Low    => "low",
            SummaryConfidence::Medium => "medium",
            SummaryConfidence::High   => "high",
        }
    }
}

impl fmt::Display for SummaryConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction reports are moving in.  Only `Stable` is computed today.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Trend {
    #[default]
    Stable,
}

/// Reports for one location over a look-back window.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportSummary {
    pub status:       SummaryStatus,
    pub confidence:   SummaryConfidence,
    pub report_count: usize,
    /// Count per status, in the order each status first appeared.
    pub breakdown:    Vec<(ReportStatus, usize)>,
    pub trend:        Trend,
}

impl ReportSummary {
    pub fn empty() -> Self {
        Self {
            status:       SummaryStatus::Unknown,
            confidence:   SummaryConfidence::None,
            report_count: 0,
            breakdown:    Vec::new(),
            trend:        Trend::Stable,
        }
    }

    /// Summarize `reports`, which must already be filtered to one location
    /// and window and be in submission order.
    pub fn from_reports<'a>(reports: impl IntoIterator<Item = &'a Report>) -> Self {
        let mut breakdown: Vec<(ReportStatus, usize)> = Vec::new();
        let mut report_count = 0;

        for report in reports {
            report_count += 1;
            match breakdown.iter_mut().find(|(s, _)| *s == report.status) {
                Some((_, n)) => *n += 1,
                None => breakdown.push((report.status, 1)),
            }
        }

        // First strictly-greater count wins, so ties go to the earliest seen.
        let mut top: Option<(ReportStatus, usize)> = None;
        for &(status, n) in &breakdown {
            if top.is_none_or(|(_, best)| n > best) {
                top = Some((status, n));
            }
        }

        match top {
            None => Self::empty(),
            Some((status, _)) => Self {
                status: SummaryStatus::Reported(status),
                confidence: SummaryConfidence::from_count(report_count),
                report_count,
                breakdown,
                trend: Trend::Stable,
            },
        }
    }

    /// Summarize the reports in `log` for `location_id` with `timestamp >=
    /// now - hours_back`.  `log` must be in submission order.
    pub fn for_location(
        log:         &[Report],
        location_id: &str,
        hours_back:  u32,
        now:         NaiveDateTime,
    ) -> Self {
        let cutoff = window_start(now, hours_back);
        Self::from_reports(
            log.iter()
                .filter(|r| r.location_id.as_str() == location_id && r.timestamp >= cutoff),
        )
    }

    /// Count for one status; 0 if it never appeared.
    pub fn count_of(&self, status: ReportStatus) -> usize {
        self.breakdown
            .iter()
            .find(|(s, _)| *s == status)
            .map_or(0, |&(_, n)| n)
    }
}

/// Earliest timestamp inside a `hours_back` window ending at `now`.
/// Saturates at `NaiveDateTime::MIN`, so any `u32` is a valid window.
pub fn window_start(now: NaiveDateTime, hours_back: u32) -> NaiveDateTime {
    now.checked_sub_signed(TimeDelta::hours(i64::from(hours_back)))
        .unwrap_or(NaiveDateTime::MIN)
}

impl Default for ReportSummary {
    fn default() -> Self {
        Self::empty()
    }
}
