//! Unit tests for ps-predict.

#[cfg(test)]
mod helpers {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Wednesday 2025-03-12.
    pub fn weekday(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    /// Saturday 2025-03-15.
    pub fn saturday(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap().and_hms_opt(h, m, 0).unwrap()
    }
}

#[cfg(test)]
mod patterns {
    use ps_core::{DayType, LocationKind};

    use crate::{DEFAULT_BASE, OccupancyPatterns};

    #[test]
    fn table_lookups() {
        let p = OccupancyPatterns::philadelphia();
        assert_eq!(p.base(LocationKind::Garage, DayType::Weekday, 8), 0.1);
        assert_eq!(p.base(LocationKind::Garage, DayType::Weekend, 22), 0.9);
        assert_eq!(p.base(LocationKind::Meter, DayType::Weekday, 12), 0.05);
        assert_eq!(p.base(LocationKind::Meter, DayType::Weekend, 20), 0.9);
    }

    #[test]
    fn missing_hours_and_kinds_default() {
        let p = OccupancyPatterns::philadelphia();
        assert_eq!(p.base(LocationKind::Garage, DayType::Weekday, 3), DEFAULT_BASE);
        assert_eq!(p.base(LocationKind::Meter, DayType::Weekend, 8), DEFAULT_BASE);
        assert_eq!(p.base(LocationKind::Lot, DayType::Weekday, 8), DEFAULT_BASE);
        assert_eq!(p.base(LocationKind::Permit, DayType::Weekend, 12), DEFAULT_BASE);
    }
}

#[cfg(test)]
mod heuristic {
    use chrono::TimeDelta;
    use ps_core::{DayType, LocationKind};
    use ps_reports::{Report, ReportStatus, ReportStore};

    use super::helpers::{saturday, weekday};
    use crate::{
        AvailabilityBand, AvailabilityModel, HeuristicPredictor, MAX_AVAILABILITY,
        MIN_AVAILABILITY, PredictionConfidence,
    };

    fn reports(entries: &[(&str, ReportStatus, chrono::NaiveDateTime)]) -> Vec<Report> {
        let store = ReportStore::for_session("predict");
        for &(id, status, at) in entries {
            store.submit(id, LocationKind::Garage, status, None, at);
        }
        store.snapshot()
    }

    #[test]
    fn no_reports_is_low_confidence_base() {
        let p = HeuristicPredictor::default();
        let now = weekday(10, 0);
        let pred = p.predict(LocationKind::Garage, "facility_1", now, &[], now);
        assert_eq!(pred.confidence, PredictionConfidence::Low);
        assert_eq!(pred.availability, 0.3);
        assert_eq!(pred.factors.hour, 10);
        assert_eq!(pred.factors.day_type, DayType::Weekday);
        assert_eq!(pred.factors.user_reports, 0);
    }

    #[test]
    fn three_full_reports_pull_below_base() {
        let now = weekday(10, 30);
        let log = reports(&[
            ("facility_1", ReportStatus::Full, weekday(10, 0)),
            ("facility_1", ReportStatus::Full, weekday(10, 10)),
            ("facility_1", ReportStatus::Full, weekday(10, 20)),
        ]);
        let p = HeuristicPredictor::default();
        let pred = p.predict(LocationKind::Garage, "facility_1", now, &log, now);
        assert_eq!(pred.confidence, PredictionConfidence::High);
        assert!(pred.availability < 0.3);
        assert!((pred.availability - 0.09).abs() < 1e-9);
    }

    #[test]
    fn mixed_reports_blend() {
        let now = weekday(10, 30);
        let log = reports(&[
            ("facility_1", ReportStatus::Available, weekday(10, 0)),
            ("facility_1", ReportStatus::Limited, weekday(10, 5)),
            ("facility_1", ReportStatus::Full, weekday(10, 10)),
            ("facility_1", ReportStatus::OutOfOrder, weekday(10, 15)),
        ]);
        let pred = HeuristicPredictor::default().predict(LocationKind::Garage, "facility_1", now, &log, now);
        // 0.3 * 0.3 + 0.7 * 0.5
        assert!((pred.availability - 0.44).abs() < 1e-9);
    }

    #[test]
    fn one_or_two_reports_keep_base() {
        let now = weekday(10, 30);
        let log = reports(&[
            ("facility_1", ReportStatus::Available, weekday(10, 0)),
            ("facility_1", ReportStatus::Available, weekday(10, 10)),
        ]);
        let pred = HeuristicPredictor::default().predict(LocationKind::Garage, "facility_1", now, &log, now);
        assert_eq!(pred.confidence, PredictionConfidence::Medium);
        assert_eq!(pred.availability, 0.3);
    }

    #[test]
    fn only_recent_reports_for_same_location_count() {
        let now = weekday(12, 0);
        let log = reports(&[
            ("facility_1", ReportStatus::Full, weekday(10, 0)),
            ("facility_1", ReportStatus::Full, weekday(11, 0)),
            ("facility_2", ReportStatus::Full, weekday(11, 30)),
            ("facility_2", ReportStatus::Full, weekday(11, 40)),
            ("facility_2", ReportStatus::Full, weekday(11, 50)),
        ]);
        let pred = HeuristicPredictor::default().predict(LocationKind::Garage, "facility_1", now, &log, now);
        assert_eq!(pred.confidence, PredictionConfidence::Low, "exactly one hour old is stale");
        assert_eq!(pred.factors.user_reports, 5, "factors count the whole log");
    }

    #[test]
    fn recency_uses_wall_clock_not_target() {
        let now = weekday(10, 30);
        let target = now + TimeDelta::hours(5);
        let log = reports(&[
            ("facility_1", ReportStatus::Full, weekday(10, 0)),
            ("facility_1", ReportStatus::Full, weekday(10, 10)),
            ("facility_1", ReportStatus::Full, weekday(10, 20)),
        ]);
        let pred = HeuristicPredictor::default().predict(LocationKind::Garage, "facility_1", target, &log, now);
        assert_eq!(pred.confidence, PredictionConfidence::High);
        assert_eq!(pred.factors.hour, 15);
    }

    #[test]
    fn clamped_at_both_ends() {
        let p = HeuristicPredictor::default();
        // Meter weekday noon is 0.05 already; all-full pushes lower.
        let now = weekday(12, 30);
        let full = reports(&[
            ("m", ReportStatus::Full, weekday(12, 0)),
            ("m", ReportStatus::Full, weekday(12, 5)),
            ("m", ReportStatus::Full, weekday(12, 10)),
        ]);
        let pred = p.predict(LocationKind::Meter, "m", now, &full, now);
        assert_eq!(pred.availability, MIN_AVAILABILITY);

        // Garage Saturday 22:00 is 0.9; all-available gives 0.97.
        let now = saturday(22, 30);
        let open = reports(&[
            ("g", ReportStatus::Available, saturday(22, 0)),
            ("g", ReportStatus::Available, saturday(22, 5)),
            ("g", ReportStatus::Available, saturday(22, 10)),
        ]);
        let pred = p.predict(LocationKind::Garage, "g", now, &open, now);
        assert_eq!(pred.availability, MAX_AVAILABILITY);
        assert_eq!(pred.band(), AvailabilityBand::High);
        assert_eq!(pred.percent(), 95);
    }

    #[test]
    fn always_in_range() {
        let p = HeuristicPredictor::default();
        for kind in LocationKind::ALL {
            for h in 0..24 {
                for at in [weekday(h, 0), saturday(h, 0)] {
                    let pred = p.predict(kind, "x", at, &[], at);
                    assert!((MIN_AVAILABILITY..=MAX_AVAILABILITY).contains(&pred.availability));
                }
            }
        }
    }

    #[test]
    fn bands() {
        assert_eq!(AvailabilityBand::of(0.71), AvailabilityBand::High);
        assert_eq!(AvailabilityBand::of(0.7), AvailabilityBand::Medium);
        assert_eq!(AvailabilityBand::of(0.41), AvailabilityBand::Medium);
        assert_eq!(AvailabilityBand::of(0.4), AvailabilityBand::Low);
    }
}
