//! `ParkingEngine` — the single entry point a client talks to.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::debug;

use ps_analytics::AnalyticsSnapshot;
use ps_core::{Clock, LocationId, LocationKind};
use ps_data::Dataset;
use ps_predict::AvailabilityModel;
use ps_reports::{Feed, FeedFilter, Report, ReportStatus, ReportStore, ReportSummary};
use ps_spatial::{Preferences, SearchContext, SearchResult, SpatialEngine, SpatialResult};

/// Generated tables, spatial index, predictor, and clock.
///
/// Built once by [`EngineBuilder`](crate::EngineBuilder) and shared
/// read-only; all per-user state lives in the [`ReportStore`] passed into
/// each call.
pub struct ParkingEngine {
    pub(crate) spatial:        SpatialEngine,
    pub(crate) clock:          Arc<dyn Clock>,
    pub(crate) model:          Arc<dyn AvailabilityModel>,
    pub(crate) summary_hours:  u32,
    pub(crate) default_radius: f64,
    pub(crate) preferences:    Preferences,
}

impl ParkingEngine {
    // ── Sessions ──────────────────────────────────────────────────────────

    /// Fresh, empty report store for one user session.
    pub fn open_session(&self, session_id: impl Into<String>) -> ReportStore {
        let store = ReportStore::for_session(session_id);
        debug!(session = store.session(), reporter = %store.reporter(), "Session opened");
        store
    }

    // ── Search ────────────────────────────────────────────────────────────

    /// Parking within `radius_miles` of `destination`, predicted for now.
    pub fn search(
        &self,
        store:        &ReportStore,
        destination:  &str,
        radius_miles: f64,
        prefs:        &Preferences,
    ) -> SpatialResult<SearchResult> {
        let now = self.now();
        self.run_search(store, destination, radius_miles, prefs, now, now)
    }

    /// Like [`search`](Self::search), but predictions are for `target`.
    /// Reports still count as recent relative to the clock.
    pub fn search_at(
        &self,
        store:        &ReportStore,
        destination:  &str,
        radius_miles: f64,
        prefs:        &Preferences,
        target:       NaiveDateTime,
    ) -> SpatialResult<SearchResult> {
        self.run_search(store, destination, radius_miles, prefs, target, self.now())
    }

    /// Search with the configured radius and preferences.
    pub fn search_default(&self, store: &ReportStore, destination: &str) -> SpatialResult<SearchResult> {
        self.search(store, destination, self.default_radius, &self.preferences)
    }

    fn run_search(
        &self,
        store:        &ReportStore,
        destination:  &str,
        radius_miles: f64,
        prefs:        &Preferences,
        target:       NaiveDateTime,
        now:          NaiveDateTime,
    ) -> SpatialResult<SearchResult> {
        let ctx = SearchContext {
            model: self.model.as_ref(),
            store,
            target,
            now,
            summary_hours: self.summary_hours,
        };
        self.spatial.find_near(destination, radius_miles, prefs, &ctx)
    }

    // ── Reports ───────────────────────────────────────────────────────────

    /// Record a crowd report, stamped with the engine clock.
    ///
    /// The location id is not checked against the dataset.
    pub fn report(
        &self,
        store:       &ReportStore,
        location_id: impl Into<LocationId>,
        kind:        LocationKind,
        status:      ReportStatus,
        notes:       Option<&str>,
    ) -> Report {
        store.submit(location_id, kind, status, notes, self.now())
    }

    pub fn reports_for(&self, store: &ReportStore, location_id: &str, hours_back: u32) -> ReportSummary {
        store.summary(location_id, hours_back, self.now())
    }

    pub fn feed(&self, store: &ReportStore, filter: &FeedFilter) -> Feed {
        store.recent_feed(filter, self.now())
    }

    // ── Analytics ─────────────────────────────────────────────────────────

    pub fn analytics(&self, store: &ReportStore) -> AnalyticsSnapshot {
        ps_analytics::snapshot(self.dataset(), store, self.now())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn dataset(&self) -> &Dataset {
        self.spatial.dataset()
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn default_radius_miles(&self) -> f64 {
        self.default_radius
    }

    pub fn summary_hours(&self) -> u32 {
        self.summary_hours
    }

    /// Preferences from the config file, or unrestricted.
    pub fn default_preferences(&self) -> &Preferences {
        &self.preferences
    }
}

impl fmt::Debug for ParkingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParkingEngine")
            .field("seed", &self.dataset().seed)
            .field("locations", &self.dataset().location_count())
            .field("model", &self.model)
            .field("summary_hours", &self.summary_hours)
            .field("default_radius", &self.default_radius)
            .finish_non_exhaustive()
    }
}
