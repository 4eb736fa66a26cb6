//! Unit tests for ps-engine.

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use std::io::Write;

    use ps_core::LocationKind;
    use ps_data::{DataError, Feature, Rate};
    use ps_spatial::SortKey;

    use crate::config::{ConfigError, load_from_path, load_from_str};
    use crate::EngineError;

    const MINIMAL: &str = r#"
        [app]
        name = "philaspot"

        [logging]
        level = "warn"
    "#;

    #[test]
    fn minimal_file_uses_defaults() {
        let config = load_from_str(MINIMAL).unwrap();
        assert_eq!(config.app.name, "philaspot");
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.generator.seed, 42);
        assert_eq!(config.default_radius_miles().unwrap(), 1.0);
        assert_eq!(config.summary_hours_back(), 6);

        let prefs = config.preferences().unwrap();
        assert_eq!(prefs.preferred_types, vec![LocationKind::Garage, LocationKind::Lot, LocationKind::Meter]);
        assert_eq!(prefs.max_walk_distance, 0.8);
        assert_eq!(prefs.max_price_per_hour, Some(12.0));
        assert!(prefs.required_features.is_empty());
        assert_eq!(prefs.sort_by, SortKey::Distance);
    }

    #[test]
    fn full_file_parses() {
        let text = r#"
            [app]
            name = "philaspot-test"

            [logging]
            level = "debug"

            [generator]
            seed = 7
            default_hourly_rate = 6.5
            default_daily_max = 25.0

            [[generator.rates]]
            name = "8th & Race Garage"
            hourly_rate = 12.0
            daily_max = 17.0

            [[generator.rates]]
            name = "Brand New Lot"
            hourly_rate = 3.0
            daily_max = 9.0

            [search]
            default_radius_miles = 0.5
            summary_hours_back = 2

            [preferences]
            preferred_types = ["garage", "permit"]
            max_walk_distance = 0.3
            required_features = ["ev_charging"]
            sort_by = "report_count"
        "#;
        let config = load_from_str(text).unwrap();

        let generator = config.generator_config().unwrap();
        assert_eq!(generator.seed, 7);
        assert_eq!(generator.default_rate, Rate::new(6.5, 25.0));
        assert_eq!(generator.rate_for("8th & Race Garage"), Rate::new(12.0, 17.0));
        assert_eq!(generator.rate_for("Brand New Lot"), Rate::new(3.0, 9.0));
        assert_eq!(generator.rate_for("Nowhere"), Rate::new(6.5, 25.0));

        assert_eq!(config.default_radius_miles().unwrap(), 0.5);
        assert_eq!(config.summary_hours_back(), 2);

        let prefs = config.preferences().unwrap();
        assert_eq!(prefs.preferred_types, vec![LocationKind::Garage, LocationKind::Permit]);
        assert_eq!(prefs.required_features, vec![Feature::EvCharging]);
        assert_eq!(prefs.sort_by, SortKey::ReportCount);
        // Absent keys fall back per field.
        assert_eq!(prefs.max_price_per_hour, Some(12.0));
    }

    #[test]
    fn feature_short_names_load() {
        let text = format!("{MINIMAL}\n[preferences]\nrequired_features = [\"handicap\", \"ev\"]\n");
        let prefs = load_from_str(&text).unwrap().preferences().unwrap();
        assert_eq!(prefs.required_features, vec![Feature::HandicapAccessible, Feature::EvCharging]);
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();
        let config = load_from_path(file.path()).unwrap();
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn shipped_config_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/philaspot.toml");
        let config = load_from_path(path).unwrap();
        assert_eq!(config.app.name, "philaspot");
        config.generator_config().unwrap();
        config.preferences().unwrap();
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_path(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = load_from_str("[app\nname = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_required_section_is_parse_error() {
        let err = load_from_str("[app]\nname = \"x\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn negative_rate_is_rejected() {
        let text = format!(
            "{MINIMAL}\n[[generator.rates]]\nname = \"Bad Garage\"\nhourly_rate = -1.0\ndaily_max = 10.0\n"
        );
        let config = load_from_str(&text).unwrap();
        let err = config.generator_config().unwrap_err();
        assert!(matches!(err, EngineError::Data(DataError::Config { table: "rate", .. })));
    }

    #[test]
    fn unknown_tags_are_rejected() {
        let bad_sort = format!("{MINIMAL}\n[preferences]\nsort_by = \"vibes\"\n");
        let err = load_from_str(&bad_sort).unwrap().preferences().unwrap_err();
        assert!(matches!(err, EngineError::Tag(_)));

        let bad_kind = format!("{MINIMAL}\n[preferences]\npreferred_types = [\"helipad\"]\n");
        let err = load_from_str(&bad_kind).unwrap().preferences().unwrap_err();
        assert!(matches!(err, EngineError::Tag(_)));
    }

    #[test]
    fn negative_radius_and_price_are_rejected() {
        let radius = format!("{MINIMAL}\n[search]\ndefault_radius_miles = -0.5\n");
        let err = load_from_str(&radius).unwrap().default_radius_miles().unwrap_err();
        assert!(matches!(err, EngineError::InvalidSetting { key: "search.default_radius_miles", .. }));

        let price = format!("{MINIMAL}\n[preferences]\nmax_price_per_hour = -3.0\n");
        let err = load_from_str(&price).unwrap().preferences().unwrap_err();
        assert!(matches!(err, EngineError::InvalidSetting { key: "preferences.max_price_per_hour", .. }));
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use std::sync::Arc;

    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
    use ps_core::{DayType, LocationKind, ManualClock};
    use ps_predict::{AvailabilityModel, Factors, Prediction, PredictionConfidence};
    use ps_reports::{FeedFilter, Report, ReportStatus, SummaryConfidence, SummaryStatus};
    use ps_spatial::{Preferences, SpatialError};

    use crate::config::load_from_str;
    use crate::{EngineBuilder, EngineError, ParkingEngine};

    /// Wednesday 2025-03-12 10:30.
    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap().and_hms_opt(10, 30, 0).unwrap()
    }

    fn engine_with_clock() -> (ParkingEngine, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(start()));
        let engine = EngineBuilder::new().shared_clock(clock.clone()).build().unwrap();
        (engine, clock)
    }

    #[test]
    fn builds_default_dataset() {
        let (engine, _) = engine_with_clock();
        assert_eq!(engine.dataset().seed, 42);
        assert_eq!(engine.dataset().facilities.len(), 10);
        assert_eq!(engine.dataset().destinations.len(), 16);
        assert_eq!(engine.now(), start());
    }

    #[test]
    fn same_seed_same_dataset() {
        let a = EngineBuilder::new().seed(9).build().unwrap();
        let b = EngineBuilder::new().seed(9).build().unwrap();
        assert_eq!(a.dataset().meters, b.dataset().meters);
        assert_eq!(a.dataset().permits, b.dataset().permits);
    }

    #[test]
    fn invalid_radius_fails_build() {
        let err = EngineBuilder::new().default_radius(f64::NAN).build().unwrap_err();
        assert!(matches!(err, EngineError::InvalidSetting { key: "default_radius", .. }));
    }

    #[test]
    fn unknown_destination_is_not_found() {
        let (engine, _) = engine_with_clock();
        let store = engine.open_session("s");
        let err = engine.search(&store, "Unknown Place", 1.0, &Preferences::default()).unwrap_err();
        assert_eq!(err, SpatialError::DestinationNotFound("Unknown Place".into()));
    }

    #[test]
    fn search_results_stay_in_radius() {
        let (engine, _) = engine_with_clock();
        let store = engine.open_session("s");
        let r = engine.search(&store, "Independence Hall", 0.5, &Preferences::default()).unwrap();
        assert!(!r.garages.is_empty());
        assert!(!r.meters.is_empty());
        assert!(r.options().all(|o| o.distance_miles() <= 0.5));
        assert_eq!(r.total_found, r.garages.len() + r.meters.len() + r.permits.len());
    }

    #[test]
    fn reports_move_the_prediction() {
        let (engine, clock) = engine_with_clock();
        let store = engine.open_session("s");

        let before = engine.search(&store, "Independence Hall", 1.0, &Preferences::default()).unwrap();
        let base = before.garages.iter().find(|h| h.location.id.as_str() == "facility_4").unwrap();
        assert_eq!(base.prediction.confidence, PredictionConfidence::Low);

        for _ in 0..3 {
            engine.report(&store, "facility_4", LocationKind::Garage, ReportStatus::Full, Some("  packed "));
            clock.advance(TimeDelta::minutes(1));
        }

        let after = engine.search(&store, "Independence Hall", 1.0, &Preferences::default()).unwrap();
        let hit = after.garages.iter().find(|h| h.location.id.as_str() == "facility_4").unwrap();
        assert_eq!(hit.prediction.confidence, PredictionConfidence::High);
        assert!(hit.prediction.availability < base.prediction.availability);
        assert_eq!(hit.reports.report_count, 3);
    }

    #[test]
    fn report_then_summary() {
        let (engine, _) = engine_with_clock();
        let store = engine.open_session("s");

        let report = engine.report(&store, "meter_1000003", LocationKind::Meter, ReportStatus::Limited, Some("  two left "));
        assert_eq!(report.id.0, 1);
        assert_eq!(report.timestamp, start());
        assert_eq!(report.notes.as_deref(), Some("two left"));

        let summary = engine.reports_for(&store, "meter_1000003", 0);
        assert_eq!(summary.report_count, 1);
        assert_eq!(summary.status, SummaryStatus::Reported(ReportStatus::Limited));
        assert_eq!(summary.count_of(ReportStatus::Limited), 1);

        let empty = engine.reports_for(&store, "facility_1", 6);
        assert_eq!(empty.status, SummaryStatus::Unknown);
        assert_eq!(empty.confidence, SummaryConfidence::None);
        assert_eq!(empty.report_count, 0);
    }

    #[test]
    fn sessions_are_isolated() {
        let (engine, _) = engine_with_clock();
        let a = engine.open_session("a");
        let b = engine.open_session("b");
        engine.report(&a, "facility_1", LocationKind::Garage, ReportStatus::Full, None);
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
        assert_ne!(a.reporter(), b.reporter());
    }

    #[test]
    fn huge_summary_window_still_searches() {
        let engine = EngineBuilder::new()
            .clock(ManualClock::new(start()))
            .summary_hours(u32::MAX)
            .build()
            .unwrap();
        let store = engine.open_session("s");
        engine.report(&store, "facility_4", LocationKind::Garage, ReportStatus::Full, None);
        let r = engine.search(&store, "Independence Hall", 1.0, &Preferences::default()).unwrap();
        let hit = r.garages.iter().find(|h| h.location.id.as_str() == "facility_4").unwrap();
        assert_eq!(hit.reports.report_count, 1);
        assert_eq!(engine.reports_for(&store, "facility_4", u32::MAX).report_count, 1);
    }

    #[test]
    fn clock_moving_backwards_keeps_order() {
        let (engine, clock) = engine_with_clock();
        let store = engine.open_session("s");
        engine.report(&store, "facility_1", LocationKind::Garage, ReportStatus::Full, None);
        clock.set(start() - TimeDelta::minutes(10));
        let second = engine.report(&store, "facility_1", LocationKind::Garage, ReportStatus::Limited, None);
        assert_eq!(second.id.0, 2);
        assert_eq!(second.timestamp, start());
    }

    #[test]
    fn feed_uses_engine_clock() {
        let (engine, clock) = engine_with_clock();
        let store = engine.open_session("s");
        engine.report(&store, "facility_2", LocationKind::Garage, ReportStatus::Available, None);
        clock.advance(TimeDelta::hours(2));
        engine.report(&store, "facility_3", LocationKind::Garage, ReportStatus::Full, None);

        let feed = engine.feed(&store, &FeedFilter::last_hours(1));
        assert_eq!(feed.stats.total, 1);
        assert_eq!(feed.entries[0].report.location_id.as_str(), "facility_3");

        let feed = engine.feed(&store, &FeedFilter::last_hours(6));
        assert_eq!(feed.stats.total, 2);
        assert_eq!(feed.stats.available, 1);
        assert_eq!(feed.stats.full, 1);
    }

    #[test]
    fn analytics_track_the_clock() {
        let (engine, clock) = engine_with_clock();
        let store = engine.open_session("s");
        engine.report(&store, "facility_1", LocationKind::Garage, ReportStatus::Limited, None);

        let first = engine.analytics(&store);
        assert_eq!(first, engine.analytics(&store));
        assert_eq!(first.user_engagement.total_reports, 1);
        assert_eq!(first.user_engagement.reports_last_hour, 1);
        assert_eq!(first.total_locations.total(), engine.dataset().location_count());

        clock.advance(TimeDelta::hours(1));
        let later = engine.analytics(&store);
        assert_eq!(later.user_engagement.reports_last_hour, 0);
    }

    #[test]
    fn search_at_predicts_for_target_time() {
        let (engine, _) = engine_with_clock();
        let store = engine.open_session("s");
        // Saturday evening.
        let target = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap().and_hms_opt(19, 0, 0).unwrap();
        let r = engine
            .search_at(&store, "Citizens Bank Park", 1.0, &Preferences::default(), target)
            .unwrap();
        for o in r.options() {
            assert_eq!(o.prediction().factors.day_type, DayType::Weekend);
            assert_eq!(o.prediction().factors.hour, 19);
        }
    }

    #[derive(Debug)]
    struct Fixed(f64);

    impl AvailabilityModel for Fixed {
        fn predict(
            &self,
            _kind:        LocationKind,
            _location_id: &str,
            target:       NaiveDateTime,
            reports:      &[Report],
            _now:         NaiveDateTime,
        ) -> Prediction {
            Prediction {
                availability: self.0,
                confidence:   PredictionConfidence::Medium,
                factors:      Factors {
                    hour:         ps_core::time::hour_of(target),
                    day_type:     DayType::of(target),
                    user_reports: reports.len(),
                },
            }
        }
    }

    #[test]
    fn custom_model_is_used() {
        let engine = EngineBuilder::new().clock(ManualClock::new(start())).model(Fixed(0.61)).build().unwrap();
        let store = engine.open_session("s");
        let r = engine.search(&store, "Reading Terminal Market", 1.0, &Preferences::default()).unwrap();
        assert!(!r.is_empty());
        assert!(r.options().all(|o| o.prediction().availability == 0.61));
    }

    #[test]
    fn builder_from_config() {
        let text = r#"
            [app]
            name = "philaspot"
            [logging]
            level = "info"
            [generator]
            seed = 11
            [search]
            default_radius_miles = 0.4
            summary_hours_back = 3
            [preferences]
            preferred_types = ["meter"]
        "#;
        let config = load_from_str(text).unwrap();
        let engine = EngineBuilder::from_config(&config)
            .unwrap()
            .clock(ManualClock::new(start()))
            .build()
            .unwrap();
        assert_eq!(engine.dataset().seed, 11);
        assert_eq!(engine.default_radius_miles(), 0.4);
        assert_eq!(engine.summary_hours(), 3);
        assert_eq!(engine.default_preferences().preferred_types, vec![LocationKind::Meter]);

        let store = engine.open_session("s");
        let r = engine.search_default(&store, "Rittenhouse Square").unwrap();
        assert_eq!(r.search_radius, 0.4);
        assert!(r.options().all(|o| o.distance_miles() <= 0.4));
    }
}
