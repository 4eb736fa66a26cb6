//! The `AvailabilityModel` trait and the prediction it returns.

use std::fmt;

use chrono::NaiveDateTime;

use ps_core::{DayType, LocationKind};
use ps_reports::Report;

/// Predicted availability is always clamped into this range.
pub const MIN_AVAILABILITY: f64 = 0.05;
pub const MAX_AVAILABILITY: f64 = 0.95;

/// Pluggable availability estimator.
///
/// The engine calls [`predict`][Self::predict] once per location returned
/// by a search.  Implementations must be `Send + Sync` so one model can
/// serve every session.
pub trait AvailabilityModel: Send + Sync + fmt::Debug {
    /// Estimate the chance of finding a spot at `location_id` at `target`.
    ///
    /// `reports` is the session's whole report log; the model picks out the
    /// ones it cares about.  `now` is the wall clock, which may differ from
    /// `target`.
    fn predict(
        &self,
        kind:        LocationKind,
        location_id: &str,
        target:      NaiveDateTime,
        reports:     &[Report],
        now:         NaiveDateTime,
    ) -> Prediction;
}

// ── Prediction ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PredictionConfidence {
    Low,
    Medium,
    High,
}

impl PredictionConfidence {
    pub fn as_str(self) -> &'static str {
        match self {
            PredictionConfidence::Low    => "low",
            PredictionConfidence::Medium => "medium",
            PredictionConfidence::High   => "high",
        }
    }
}

impl fmt::Display for PredictionConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs that shaped a prediction, for display.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Factors {
    /// Hour of the target time, 0–23.
    pub hour:         u8,
    pub day_type:     DayType,
    /// Size of the report log handed to the model, not just the ones that
    /// matched.
    pub user_reports: usize,
}

#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prediction {
    /// In `[MIN_AVAILABILITY, MAX_AVAILABILITY]`.
    pub availability: f64,
    pub confidence:   PredictionConfidence,
    pub factors:      Factors,
}

impl Prediction {
    pub fn band(&self) -> AvailabilityBand {
        AvailabilityBand::of(self.availability)
    }

    /// Availability as a whole percentage.
    pub fn percent(&self) -> u8 {
        (self.availability * 100.0).round() as u8
    }
}

/// Coarse availability label: high above 0.7, medium above 0.4.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AvailabilityBand {
    Low,
    Medium,
    High,
}

impl AvailabilityBand {
    pub fn of(availability: f64) -> Self {
        if availability > 0.7 {
            AvailabilityBand::High
        } else if availability > 0.4 {
            AvailabilityBand::Medium
        } else {
            AvailabilityBand::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AvailabilityBand::Low    => "low",
            AvailabilityBand::Medium => "medium",
            AvailabilityBand::High   => "high",
        }
    }
}

impl fmt::Display for AvailabilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
