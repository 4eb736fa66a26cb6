//! `HeuristicPredictor` — static hourly baseline nudged by recent reports.

use chrono::NaiveDateTime;

use ps_core::time::hour_of;
use ps_core::{DayType, LocationKind};
use ps_reports::Report;

use crate::model::{
    AvailabilityModel, Factors, MAX_AVAILABILITY, MIN_AVAILABILITY, Prediction,
    PredictionConfidence,
};
use crate::pattern::OccupancyPatterns;

/// Reports older than this (relative to the wall clock) are ignored.
pub const RECENT_WINDOW_SECS: i64 = 3600;

/// Recent reports needed before they override the baseline.
pub const HIGH_CONFIDENCE_REPORTS: usize = 3;

/// Weight of the baseline when blending with observed availability.
const BASE_WEIGHT: f64 = 0.3;

/// The default model.
///
/// 1. Look up the baseline for (kind, weekday/weekend, hour of `target`).
/// 2. Keep reports for the same location strictly younger than one hour as
///    of `now`.
/// 3. Three or more: blend `0.3 * base + 0.7 * favorable_fraction`, high
///    confidence.  One or two: medium confidence, baseline unchanged.
///    None: low confidence.
/// 4. Clamp to `[0.05, 0.95]`.
#[derive(Clone, Debug, Default)]
pub struct HeuristicPredictor {
    patterns: OccupancyPatterns,
}

impl HeuristicPredictor {
    pub const fn new(patterns: OccupancyPatterns) -> Self {
        Self { patterns }
    }

    /// Predictor over [`OccupancyPatterns::philadelphia`].
    pub const fn philadelphia() -> Self {
        Self::new(OccupancyPatterns::philadelphia())
    }

    pub fn patterns(&self) -> &OccupancyPatterns {
        &self.patterns
    }
}

impl AvailabilityModel for HeuristicPredictor {
    fn predict(
        &self,
        kind:        LocationKind,
        location_id: &str,
        target:      NaiveDateTime,
        reports:     &[Report],
        now:         NaiveDateTime,
    ) -> Prediction {
        let hour = hour_of(target);
        let day_type = DayType::of(target);
        let base = self.patterns.base(kind, day_type, hour);

        let (recent, favorable) = reports
            .iter()
            .filter(|r| r.location_id.as_str() == location_id && r.is_within(RECENT_WINDOW_SECS, now))
            .fold((0usize, 0usize), |(n, fav), r| (n + 1, fav + usize::from(r.status.is_favorable())));

        let (availability, confidence) = match recent {
            0 => (base, PredictionConfidence::Low),
            n if n >= HIGH_CONFIDENCE_REPORTS => {
                let observed = favorable as f64 / n as f64;
                (BASE_WEIGHT * base + (1.0 - BASE_WEIGHT) * observed, PredictionConfidence::High)
            }
            _ => (base, PredictionConfidence::Medium),
        };

        Prediction {
            availability: availability.clamp(MIN_AVAILABILITY, MAX_AVAILABILITY),
            confidence,
            factors: Factors { hour, day_type, user_reports: reports.len() },
        }
    }
}
