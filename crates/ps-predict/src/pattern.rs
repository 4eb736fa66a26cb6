//! Static hourly occupancy patterns.
//!
//! Each table maps an hour of day to the baseline chance of finding a spot.
//! Hours absent from a table, and location kinds without a table (lots and
//! permit blocks), fall back to [`DEFAULT_BASE`].

use ps_core::{DayType, LocationKind};

/// Baseline for any (kind, day, hour) the tables do not cover.
pub const DEFAULT_BASE: f64 = 0.5;

type HourTable = &'static [(u8, f64)];

const GARAGE_WEEKDAY: HourTable = &[
    (7, 0.2), (8, 0.1), (9, 0.15), (10, 0.3), (11, 0.25), (12, 0.2), (13, 0.2),
    (14, 0.25), (15, 0.3), (16, 0.25), (17, 0.1), (18, 0.15), (19, 0.4),
    (20, 0.6), (21, 0.7), (22, 0.8),
];

const GARAGE_WEEKEND: HourTable = &[
    (8, 0.6), (9, 0.5), (10, 0.4), (11, 0.3), (12, 0.2), (13, 0.2), (14, 0.25),
    (15, 0.3), (16, 0.4), (17, 0.5), (18, 0.6), (19, 0.7), (20, 0.8), (21, 0.8),
    (22, 0.9),
];

const METER_WEEKDAY: HourTable = &[
    (8, 0.2), (9, 0.1), (10, 0.15), (11, 0.1), (12, 0.05), (13, 0.1), (14, 0.15),
    (15, 0.2), (16, 0.3), (17, 0.1), (18, 0.2), (19, 0.4), (20, 0.8),
];

const METER_WEEKEND: HourTable = &[
    (9, 0.7), (10, 0.6), (11, 0.5), (12, 0.3), (13, 0.2), (14, 0.25), (15, 0.4),
    (16, 0.5), (17, 0.6), (18, 0.7), (19, 0.8), (20, 0.9),
];

/// Hour-of-day baselines for the kinds that have them.
#[derive(Clone, Debug)]
pub struct OccupancyPatterns {
    garage_weekday: HourTable,
    garage_weekend: HourTable,
    meter_weekday:  HourTable,
    meter_weekend:  HourTable,
}

impl OccupancyPatterns {
    /// Center City garage and meter curves.
    pub const fn philadelphia() -> Self {
        Self {
            garage_weekday: GARAGE_WEEKDAY,
            garage_weekend: GARAGE_WEEKEND,
            meter_weekday:  METER_WEEKDAY,
            meter_weekend:  METER_WEEKEND,
        }
    }

    fn table(&self, kind: LocationKind, day: DayType) -> Option<HourTable> {
        match (kind, day) {
            (LocationKind::Garage, DayType::Weekday) => Some(self.garage_weekday),
            (LocationKind::Garage, DayType::Weekend) => Some(self.garage_weekend),
            (LocationKind::Meter,  DayType::Weekday) => Some(self.meter_weekday),
            (LocationKind::Meter,  DayType::Weekend) => Some(self.meter_weekend),
            (LocationKind::Lot | LocationKind::Permit, _) => None,
        }
    }

    /// Baseline availability for `kind` at `hour` on a `day`.
    pub fn base(&self, kind: LocationKind, day: DayType, hour: u8) -> f64 {
        self.table(kind, day)
            .and_then(|t| t.iter().find(|&&(h, _)| h == hour))
            .map_or(DEFAULT_BASE, |&(_, v)| v)
    }
}

impl Default for OccupancyPatterns {
    fn default() -> Self {
        Self::philadelphia()
    }
}
