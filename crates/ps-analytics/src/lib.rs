//! `ps-analytics` — dashboard aggregates.
//!
//! [`snapshot`] is pure: it reads the dataset and the report store and
//! returns the same value until another report is submitted or the clock
//! moves past a report's one-hour mark.

use chrono::{NaiveDateTime, TimeDelta};

use ps_core::geo::round_to;
use ps_data::Dataset;
use ps_reports::ReportStore;


/// Number of destination names listed as popular.
pub const POPULAR_DESTINATIONS: usize = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationCounts {
    pub facilities: usize,
    pub meters:     usize,
    pub permits:    usize,
}

impl LocationCounts {
    pub fn total(&self) -> usize {
        self.facilities + self.meters + self.permits
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GarageOccupancy {
    pub total_spots:     u64,
    pub available_spots: u64,
    /// `(1 - available / total) * 100`, one decimal; 0.0 with no spots.
    pub occupancy_rate:  f64,
}

impl GarageOccupancy {
    fn of(dataset: &Dataset) -> Self {
        let total_spots: u64 = dataset.facilities.iter().map(|f| u64::from(f.total_spots)).sum();
        let available_spots: u64 = dataset.facilities.iter().map(|f| u64::from(f.available_spots)).sum();
        let occupancy_rate = if total_spots == 0 {
            0.0
        } else {
            round_to((1.0 - available_spots as f64 / total_spots as f64) * 100.0, 1)
        };
        Self { total_spots, available_spots, occupancy_rate }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserEngagement {
    pub total_reports:     usize,
    /// Reports strictly younger than one hour.
    pub reports_last_hour: usize,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalyticsSnapshot {
    pub total_locations:      LocationCounts,
    pub garage_occupancy:     GarageOccupancy,
    pub user_engagement:      UserEngagement,
    /// First [`POPULAR_DESTINATIONS`] names in table order.
    pub popular_destinations: Vec<String>,
}

/// Aggregate `dataset` and `store` as of `now`.
pub fn snapshot(dataset: &Dataset, store: &ReportStore, now: NaiveDateTime) -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        total_locations: LocationCounts {
            facilities: dataset.facilities.len(),
            meters:     dataset.meters.len(),
            permits:    dataset.permits.len(),
        },
        garage_occupancy: GarageOccupancy::of(dataset),
        user_engagement: UserEngagement {
            total_reports:     store.len(),
            reports_last_hour: store.count_within(TimeDelta::hours(1), now),
        },
        popular_destinations: dataset
            .destinations
            .names()
            .take(POPULAR_DESTINATIONS)
            .map(str::to_owned)
            .collect(),
    }
}
