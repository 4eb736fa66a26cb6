//! `SpatialEngine::find_near` and its result types.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::debug;

use ps_core::geo::round_to;
use ps_core::{GeoPoint, LocationKind};
use ps_data::{Dataset, Destination, MeteredSegment, ParkingFacility, PermitBlock};
use ps_predict::{AvailabilityModel, Prediction};
use ps_reports::{Report, ReportStore, ReportSummary};

use crate::index::{LocationIndex, Slot};
use crate::{Preferences, SpatialError, SpatialResult};

/// Everything a search reads besides the static tables.
#[derive(Clone, Copy)]
pub struct SearchContext<'a> {
    pub model:         &'a dyn AvailabilityModel,
    pub store:         &'a ReportStore,
    /// Time the prediction is for.
    pub target:        NaiveDateTime,
    /// Wall clock; decides which reports are recent.
    pub now:           NaiveDateTime,
    /// Look-back window for the per-location report summary.
    pub summary_hours: u32,
}

/// One location within the search radius.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationHit<T> {
    pub location:       T,
    /// Great-circle miles from the destination, rounded to 2 decimals.
    pub distance_miles: f64,
    pub prediction:     Prediction,
    pub reports:        ReportSummary,
}

/// Output of [`SpatialEngine::find_near`].  Each list is sorted nearest
/// first.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub destination:   Destination,
    pub search_radius: f64,
    pub garages:       Vec<LocationHit<ParkingFacility>>,
    pub meters:        Vec<LocationHit<MeteredSegment>>,
    pub permits:       Vec<LocationHit<PermitBlock>>,
    pub total_found:   usize,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.total_found == 0
    }
}

/// Radius search over a shared [`Dataset`].
pub struct SpatialEngine {
    dataset: Arc<Dataset>,
    index:   LocationIndex,
}

impl SpatialEngine {
    /// Index every location in `dataset`.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let index = LocationIndex::build(&dataset);
        Self { dataset, index }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn index(&self) -> &LocationIndex {
        &self.index
    }

    /// Find parking within `radius_miles` of the named destination.
    ///
    /// A location is included iff its exact haversine distance is at most
    /// `radius_miles`.  Facilities lacking an enforced required feature and
    /// meters that are not active are left out.  Read-only.
    ///
    /// # Errors
    ///
    /// [`SpatialError::DestinationNotFound`] if `destination` is not in the
    /// destination table.
    pub fn find_near(
        &self,
        destination:  &str,
        radius_miles: f64,
        prefs:        &Preferences,
        ctx:          &SearchContext<'_>,
    ) -> SpatialResult<SearchResult> {
        let dest = self
            .dataset
            .destinations
            .get(destination)
            .ok_or_else(|| SpatialError::DestinationNotFound(destination.to_owned()))?;
        let center = dest.position;

        let mut garages = Vec::new();
        let mut meters = Vec::new();
        let mut permits = Vec::new();

        // Table order, so the stable distance sort below breaks ties the
        // same way on every run.
        let mut slots = self.index.candidates(center, radius_miles);
        slots.sort_unstable();

        ctx.store.with_reports(|reports| {
            for slot in slots {
                match slot {
                    Slot::Facility(i) => {
                        let f = &self.dataset.facilities[i];
                        if !prefs.admits_facility(&f.features) {
                            continue;
                        }
                        if let Some(hit) = make_hit(f, f.kind.kind(), f.id.as_str(), f.position, center, radius_miles, reports, ctx) {
                            garages.push(hit);
                        }
                    }
                    Slot::Meter(i) => {
                        let m = &self.dataset.meters[i];
                        if !m.is_active() {
                            continue;
                        }
                        if let Some(hit) = make_hit(m, LocationKind::Meter, m.id.as_str(), m.position, center, radius_miles, reports, ctx) {
                            meters.push(hit);
                        }
                    }
                    Slot::Permit(i) => {
                        let p = &self.dataset.permits[i];
                        if let Some(hit) = make_hit(p, LocationKind::Permit, p.id.as_str(), p.position, center, radius_miles, reports, ctx) {
                            permits.push(hit);
                        }
                    }
                }
            }
        });

        sort_by_distance(&mut garages);
        sort_by_distance(&mut meters);
        sort_by_distance(&mut permits);

        let total_found = garages.len() + meters.len() + permits.len();
        debug!(
            destination,
            radius_miles,
            garages = garages.len(),
            meters = meters.len(),
            permits = permits.len(),
            "Parking search"
        );

        Ok(SearchResult {
            destination: dest.clone(),
            search_radius: radius_miles,
            garages,
            meters,
            permits,
            total_found,
        })
    }
}

impl std::fmt::Debug for SpatialEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialEngine")
            .field("locations", &self.dataset.location_count())
            .field("index", &self.index)
            .finish()
    }
}

#[allow(clippy::too_many_arguments)]
fn make_hit<T: Clone>(
    location:     &T,
    kind:         LocationKind,
    id:           &str,
    position:     GeoPoint,
    center:       GeoPoint,
    radius_miles: f64,
    reports:      &[Report],
    ctx:          &SearchContext<'_>,
) -> Option<LocationHit<T>> {
    let distance = center.distance_miles(position);
    if distance > radius_miles {
        return None;
    }
    Some(LocationHit {
        location:       location.clone(),
        distance_miles: round_to(distance, 2),
        prediction:     ctx.model.predict(kind, id, ctx.target, reports, ctx.now),
        reports:        ReportSummary::for_location(reports, id, ctx.summary_hours, ctx.now),
    })
}

/// Stable, so equal distances keep table order.
fn sort_by_distance<T>(hits: &mut [LocationHit<T>]) {
    hits.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
}
