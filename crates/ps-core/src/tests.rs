//! Unit tests for ps-core primitives.

#[cfg(test)]
mod ids {
    use crate::{LocationId, ReportId};

    #[test]
    fn constructors_format() {
        assert_eq!(LocationId::facility(3).as_str(), "facility_3");
        assert_eq!(LocationId::meter(1_000_000).as_str(), "meter_1000000");
        assert_eq!(LocationId::permit('C', 7).as_str(), "permit_C_7");
    }

    #[test]
    fn borrow_as_str_for_map_lookup() {
        let mut map = std::collections::HashMap::new();
        map.insert(LocationId::facility(1), 5);
        assert_eq!(map.get("facility_1"), Some(&5));
    }

    #[test]
    fn report_ids_are_sequential() {
        assert_eq!(ReportId::FIRST.next(), ReportId(2));
        assert!(ReportId(1) < ReportId(2));
        assert_eq!(ReportId(7).to_string(), "#7");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;
    use crate::geo::round_to;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(39.9496, -75.1503);
        assert!(p.distance_miles(p) < 1e-9);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 69.09 miles on the mean sphere
        let a = GeoPoint::new(39.0, -75.0);
        let b = GeoPoint::new(40.0, -75.0);
        let d = a.distance_miles(b);
        assert!((d - 69.09).abs() < 0.05, "got {d}");
    }

    #[test]
    fn independence_hall_to_stadiums() {
        // Independence Hall → Citizens Bank Park is a little over 3 miles.
        let hall = GeoPoint::new(39.9496, -75.1503);
        let park = GeoPoint::new(39.9061, -75.1665);
        let d = hall.distance_miles(park);
        assert!((3.0..3.3).contains(&d), "got {d}");
    }

    #[test]
    fn degree_span_covers_circle() {
        let c = GeoPoint::new(39.95, -75.16);
        let (half_lat, half_lon) = c.degree_span(1.0);
        // Points exactly on the circle due north and due east.
        let north = GeoPoint::new(c.lat + half_lat, c.lon);
        assert!((c.distance_miles(north) - 1.0).abs() < 1e-6);
        let east = GeoPoint::new(c.lat, c.lon + half_lon);
        assert!(c.distance_miles(east) >= 1.0);
    }

    #[test]
    fn validity() {
        assert!(GeoPoint::new(39.95, -75.16).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(87.56, 1), 87.6);
        assert_eq!(round_to(-0.126, 2), -0.13);
    }
}

#[cfg(test)]
mod kind {
    use crate::LocationKind;

    #[test]
    fn parses_dashboard_tags() {
        assert_eq!("garage_lot".parse::<LocationKind>(), Ok(LocationKind::Garage));
        assert_eq!("permit_zone".parse::<LocationKind>(), Ok(LocationKind::Permit));
        assert_eq!(" Meter ".parse::<LocationKind>(), Ok(LocationKind::Meter));
        assert!("valet".parse::<LocationKind>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for kind in LocationKind::ALL {
            assert_eq!(kind.to_string().parse::<LocationKind>(), Ok(kind));
        }
    }

    #[test]
    fn facility_kinds() {
        assert!(LocationKind::Garage.is_facility());
        assert!(LocationKind::Lot.is_facility());
        assert!(!LocationKind::Meter.is_facility());
    }
}

#[cfg(test)]
mod time {
    use chrono::{NaiveDate, TimeDelta};

    use crate::time::{hour_of, seconds_between};
    use crate::{Clock, DayType, ManualClock};

    fn at(y: i32, m: u32, d: u32, h: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, 0, 0))
            .expect("valid test date")
    }

    #[test]
    fn day_type() {
        // 2024-06-08 was a Saturday, 2024-06-10 a Monday.
        assert_eq!(DayType::of(at(2024, 6, 8, 12)), DayType::Weekend);
        assert_eq!(DayType::of(at(2024, 6, 9, 12)), DayType::Weekend);
        assert_eq!(DayType::of(at(2024, 6, 10, 12)), DayType::Weekday);
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(at(2024, 6, 10, 9));
        clock.advance(TimeDelta::minutes(90));
        assert_eq!(clock.now(), at(2024, 6, 10, 10) + TimeDelta::minutes(30));
        assert_eq!(hour_of(clock.now()), 10);
    }

    #[test]
    fn seconds_between_sign() {
        let a = at(2024, 6, 10, 9);
        let b = at(2024, 6, 10, 10);
        assert_eq!(seconds_between(a, b), 3600);
        assert_eq!(seconds_between(b, a), -3600);
    }
}

#[cfg(test)]
mod rng {
    use crate::{TableRng, TableTag};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = TableRng::new(42, TableTag::Meters);
        let mut r2 = TableRng::new(42, TableTag::Meters);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1_000_000);
            let b: u32 = r2.gen_range(0..1_000_000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_tables_differ() {
        let mut meters = TableRng::new(42, TableTag::Meters);
        let mut permits = TableRng::new(42, TableTag::Permits);
        let a: Vec<u32> = (0..8).map(|_| meters.gen_range(0..u32::MAX)).collect();
        let b: Vec<u32> = (0..8).map(|_| permits.gen_range(0..u32::MAX)).collect();
        assert_ne!(a, b, "table streams should diverge");
    }

    #[test]
    fn pick_weighted_respects_zero_weight() {
        let mut rng = TableRng::new(7, TableTag::Meters);
        for _ in 0..500 {
            assert_eq!(rng.pick_weighted(&[("never", 0.0), ("always", 1.0)]), "always");
        }
    }

    #[test]
    fn pick_weighted_roughly_proportional() {
        let mut rng = TableRng::new(11, TableTag::Meters);
        let hits = (0..10_000)
            .filter(|_| rng.pick_weighted(&[(true, 0.95), (false, 0.05)]))
            .count();
        assert!((9_300..9_700).contains(&hits), "got {hits}");
    }

    #[test]
    fn pick_in_bounds() {
        let mut rng = TableRng::new(0, TableTag::Permits);
        for _ in 0..200 {
            assert!([1, 2, 4].contains(&rng.pick(&[1, 2, 4])));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = TableRng::new(0, TableTag::Facilities);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
