//! The `ReportStore` — one session's append-only report log.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDateTime, TimeDelta};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use ps_core::{LocationId, LocationKind, ReportId};

use crate::feed::{Feed, FeedFilter};
use crate::summary::window_start;
use crate::{Report, ReportStatus, ReportSummary, ReporterToken};

/// Look-back window for [`ReportStore::summary`] when the caller has no
/// preference.
pub const DEFAULT_SUMMARY_HOURS: u32 = 6;

#[derive(Default)]
struct Log {
    reports:     Vec<Report>,
    /// Indices into `reports`, per location, in submission order.
    by_location: FxHashMap<LocationId, Vec<usize>>,
}

/// Append-only store of crowd reports for one session.
///
/// Reports are assigned ids `1, 2, 3, …` in submission order.  The id
/// assignment and the append happen under a single write guard, so a store
/// shared between threads never produces duplicate or skipped ids.
pub struct ReportStore {
    session:  String,
    reporter: ReporterToken,
    log:      RwLock<Log>,
}

impl ReportStore {
    /// Empty store for `session_id`; every report it accepts is signed with
    /// the session's [`ReporterToken`].
    pub fn for_session(session_id: impl Into<String>) -> Self {
        let session = session_id.into();
        let reporter = ReporterToken::for_session(&session);
        Self { session, reporter, log: RwLock::new(Log::default()) }
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    pub fn reporter(&self) -> &ReporterToken {
        &self.reporter
    }

    // ── Writes ────────────────────────────────────────────────────────────

    /// Record a report and return the stored copy.
    ///
    /// Never fails.  Blank notes are stored as `None`.  A `now` earlier than
    /// the last stored timestamp is clamped up to it so timestamps never go
    /// backwards.
    pub fn submit(
        &self,
        location_id: impl Into<LocationId>,
        kind:        LocationKind,
        status:      ReportStatus,
        notes:       Option<&str>,
        now:         NaiveDateTime,
    ) -> Report {
        let location_id = location_id.into();
        let notes = notes.map(str::trim).filter(|n| !n.is_empty()).map(str::to_owned);

        let mut log = self.write();
        let id = ReportId(log.reports.len() as u64 + ReportId::FIRST.0);
        let timestamp = log.reports.last().map_or(now, |last| last.timestamp.max(now));

        let report = Report {
            id,
            location_id: location_id.clone(),
            location_kind: kind,
            status,
            notes,
            timestamp,
            reporter: self.reporter.clone(),
        };

        let index = log.reports.len();
        log.reports.push(report.clone());
        log.by_location.entry(location_id).or_default().push(index);
        drop(log);

        debug!(
            id = report.id.0,
            location = %report.location_id,
            kind = %kind,
            status = %status,
            "Report submitted"
        );
        report
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.read().reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().reports.is_empty()
    }

    /// Copy of every report in submission order.
    pub fn snapshot(&self) -> Vec<Report> {
        self.read().reports.clone()
    }

    /// Run `f` over every report in submission order without copying.
    pub fn with_reports<R>(&self, f: impl FnOnce(&[Report]) -> R) -> R {
        f(&self.read().reports)
    }

    /// Every report for `location_id`, oldest first.
    pub fn reports_for(&self, location_id: &str) -> Vec<Report> {
        let log = self.read();
        log.by_location
            .get(location_id)
            .map(|indices| indices.iter().map(|&i| log.reports[i].clone()).collect())
            .unwrap_or_default()
    }

    /// Reports strictly younger than `window` as of `now`.
    pub fn count_within(&self, window: TimeDelta, now: NaiveDateTime) -> usize {
        let window_secs = window.num_seconds();
        self.read()
            .reports
            .iter()
            .filter(|r| r.is_within(window_secs, now))
            .count()
    }

    /// Summarize reports for `location_id` with `timestamp >= now -
    /// hours_back`.
    pub fn summary(&self, location_id: &str, hours_back: u32, now: NaiveDateTime) -> ReportSummary {
        let cutoff = window_start(now, hours_back);
        let log = self.read();
        let Some(indices) = log.by_location.get(location_id) else {
            return ReportSummary::empty();
        };
        ReportSummary::from_reports(
            indices
                .iter()
                .map(|&i| &log.reports[i])
                .filter(|r| r.timestamp >= cutoff),
        )
    }

    /// Recent reports across all locations, newest first.
    pub fn recent_feed(&self, filter: &FeedFilter, now: NaiveDateTime) -> Feed {
        Feed::build(&self.read().reports, filter, now)
    }

    // ── Locking ───────────────────────────────────────────────────────────

    fn read(&self) -> RwLockReadGuard<'_, Log> {
        self.log.read().unwrap_or_else(|poisoned| {
            warn!(session = %self.session, "Report store lock poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Log> {
        self.log.write().unwrap_or_else(|poisoned| {
            warn!(session = %self.session, "Report store lock poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl std::fmt::Debug for ReportStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportStore")
            .field("session", &self.session)
            .field("reporter", &self.reporter)
            .field("reports", &self.len())
            .finish()
    }
}
