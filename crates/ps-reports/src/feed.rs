//! The community feed: recent reports across every location.

use chrono::NaiveDateTime;
use rustc_hash::FxHashSet;

use crate::{Report, ReportStatus};

const SECS_PER_MIN:  i64 = 60;
const SECS_PER_HOUR: i64 = 3600;

/// Which reports the feed shows.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedFilter {
    /// Look-back window in hours.
    pub hours_back: u32,
    /// Statuses to keep; an empty list keeps nothing.
    pub statuses:   Vec<ReportStatus>,
}

impl FeedFilter {
    /// Every status over the last `hours_back` hours.
    pub fn last_hours(hours_back: u32) -> Self {
        Self { hours_back, statuses: ReportStatus::ALL.to_vec() }
    }

    pub fn with_statuses(mut self, statuses: &[ReportStatus]) -> Self {
        self.statuses = statuses.to_vec();
        self
    }

    pub(crate) fn accepts(&self, report: &Report, now: NaiveDateTime) -> bool {
        report.age_secs(now) <= i64::from(self.hours_back) * SECS_PER_HOUR
            && self.statuses.contains(&report.status)
    }
}

impl Default for FeedFilter {
    fn default() -> Self {
        Self::last_hours(6)
    }
}

/// One row of the feed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedEntry {
    pub report: Report,
    /// `"12 min ago"`, `"3 hr ago"`.
    pub age:    String,
}

/// Totals over the filtered reports.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedStats {
    pub total:            usize,
    pub available:        usize,
    pub full:             usize,
    pub unique_locations: usize,
}

/// Filtered reports, newest first, plus their totals.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feed {
    pub entries: Vec<FeedEntry>,
    pub stats:   FeedStats,
}

impl Feed {
    /// Build the feed from `reports` in submission order.
    pub(crate) fn build(reports: &[Report], filter: &FeedFilter, now: NaiveDateTime) -> Self {
        let mut locations = FxHashSet::default();
        let mut stats = FeedStats::default();
        let mut entries = Vec::new();

        // Timestamps are non-decreasing, so walking backwards is newest first.
        for report in reports.iter().rev().filter(|r| filter.accepts(r, now)) {
            stats.total += 1;
            match report.status {
                ReportStatus::Available => stats.available += 1,
                ReportStatus::Full      => stats.full += 1,
                _ => {}
            }
            locations.insert(report.location_id.as_str());
            entries.push(FeedEntry { report: report.clone(), age: age_label(report.age_secs(now)) });
        }
        stats.unique_locations = locations.len();

        Self { entries, stats }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Minutes under an hour, whole hours otherwise.
pub fn age_label(age_secs: i64) -> String {
    let age_secs = age_secs.max(0);
    if age_secs < SECS_PER_HOUR {
        format!("{} min ago", age_secs / SECS_PER_MIN)
    } else {
        format!("{} hr ago", age_secs / SECS_PER_HOUR)
    }
}
