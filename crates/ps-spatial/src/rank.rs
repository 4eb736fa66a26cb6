//! Client-side ranking: one flat, filtered, sorted list of options.

use ps_core::LocationKind;
use ps_data::{MeteredSegment, ParkingFacility, PermitBlock};
use ps_predict::Prediction;
use ps_reports::ReportSummary;

use crate::{LocationHit, RankOptions, SearchResult, SortKey};

/// Average walking pace used for walking-time estimates.
pub const WALKING_MPH: f64 = 3.0;

/// Whole minutes to walk `distance_miles`, rounded down.
pub fn walking_minutes(distance_miles: f64) -> u32 {
    (distance_miles.max(0.0) * 60.0 / WALKING_MPH) as u32
}

/// A search hit of any kind, borrowed from a [`SearchResult`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ParkingOption<'a> {
    Facility(&'a LocationHit<ParkingFacility>),
    Meter(&'a LocationHit<MeteredSegment>),
    Permit(&'a LocationHit<PermitBlock>),
}

impl<'a> ParkingOption<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            ParkingOption::Facility(h) => h.location.id.as_str(),
            ParkingOption::Meter(h)    => h.location.id.as_str(),
            ParkingOption::Permit(h)   => h.location.id.as_str(),
        }
    }

    pub fn kind(&self) -> LocationKind {
        match *self {
            ParkingOption::Facility(h) => h.location.kind.kind(),
            ParkingOption::Meter(_)    => LocationKind::Meter,
            ParkingOption::Permit(_)   => LocationKind::Permit,
        }
    }

    pub fn distance_miles(&self) -> f64 {
        match *self {
            ParkingOption::Facility(h) => h.distance_miles,
            ParkingOption::Meter(h)    => h.distance_miles,
            ParkingOption::Permit(h)   => h.distance_miles,
        }
    }

    pub fn prediction(&self) -> &'a Prediction {
        match *self {
            ParkingOption::Facility(h) => &h.prediction,
            ParkingOption::Meter(h)    => &h.prediction,
            ParkingOption::Permit(h)   => &h.prediction,
        }
    }

    pub fn reports(&self) -> &'a ReportSummary {
        match *self {
            ParkingOption::Facility(h) => &h.reports,
            ParkingOption::Meter(h)    => &h.reports,
            ParkingOption::Permit(h)   => &h.reports,
        }
    }

    /// Dollars per hour; permit blocks have no hourly price.
    pub fn hourly_price(&self) -> Option<f64> {
        match *self {
            ParkingOption::Facility(h) => Some(h.location.hourly_rate),
            ParkingOption::Meter(h)    => Some(h.location.rate_per_hour),
            ParkingOption::Permit(_)   => None,
        }
    }

    /// Price key: free permit blocks cost 0, permit-only blocks sort last.
    pub fn sort_price(&self) -> f64 {
        match *self {
            ParkingOption::Permit(h) if h.location.permit_required => f64::INFINITY,
            ParkingOption::Permit(_) => 0.0,
            _ => self.hourly_price().unwrap_or(0.0),
        }
    }

    /// Display title, e.g. `Meter - Market St (Block 1200)`.
    pub fn title(&self) -> String {
        match *self {
            ParkingOption::Facility(h) => h.location.name.clone(),
            ParkingOption::Meter(h) => {
                format!("Meter - {} (Block {})", h.location.street, h.location.block)
            }
            ParkingOption::Permit(h) => {
                format!("Street - {} ({})", h.location.street, h.location.neighborhood)
            }
        }
    }

    pub fn walking_minutes(&self) -> u32 {
        walking_minutes(self.distance_miles())
    }
}

impl SearchResult {
    /// Every hit as a [`ParkingOption`]: garages, then meters, then permit
    /// blocks, each nearest first.
    pub fn options(&self) -> impl Iterator<Item = ParkingOption<'_>> {
        self.garages
            .iter()
            .map(ParkingOption::Facility)
            .chain(self.meters.iter().map(ParkingOption::Meter))
            .chain(self.permits.iter().map(ParkingOption::Permit))
    }

    /// Filter by type and price, sort, and truncate.
    ///
    /// Sorting is stable, so options with equal keys keep the order of
    /// [`options`](Self::options).
    pub fn ranked(&self, opts: &RankOptions) -> Vec<ParkingOption<'_>> {
        let mut ranked: Vec<_> = self
            .options()
            .filter(|o| opts.preferred_types.contains(&o.kind()))
            .filter(|o| match (opts.max_price_per_hour, o.hourly_price()) {
                (Some(cap), Some(price)) => price <= cap,
                _ => true,
            })
            .collect();

        match opts.sort_by {
            SortKey::Distance => {
                ranked.sort_by(|a, b| a.distance_miles().total_cmp(&b.distance_miles()));
            }
            SortKey::Price => {
                ranked.sort_by(|a, b| a.sort_price().total_cmp(&b.sort_price()));
            }
            SortKey::Availability => ranked.sort_by(|a, b| {
                b.prediction().availability.total_cmp(&a.prediction().availability)
            }),
            SortKey::ReportCount => {
                ranked.sort_by(|a, b| b.reports().report_count.cmp(&a.reports().report_count));
            }
        }

        if let Some(limit) = opts.limit {
            ranked.truncate(limit);
        }
        ranked
    }
}
