//! Wall-clock access and day classification.
//!
//! # Design
//!
//! All engine time is local civil time as a `chrono::NaiveDateTime`: the
//! occupancy tables are keyed by the hour a driver sees on a Philadelphia
//! clock, and reports are compared against the same clock.
//!
//! Components never call `Local::now()` themselves.  They take a `now`
//! argument, and the engine facade reads it from a [`Clock`] so tests can
//! pin or advance time with [`ManualClock`].

use std::fmt;
use std::sync::{Mutex, PoisonError};

use chrono::{Datelike, Local, NaiveDateTime, TimeDelta, Timelike, Weekday};

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host's local time.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self { now: Mutex::new(start) }
    }

    /// Move the clock forward (or backward, for a negative delta).
    pub fn advance(&self, by: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }

    pub fn set(&self, to: NaiveDateTime) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ── DayType ───────────────────────────────────────────────────────────────────

/// Weekday vs. weekend, the second key of the occupancy tables.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    /// Saturday and Sunday are weekend days.
    pub fn of(at: NaiveDateTime) -> DayType {
        match at.weekday() {
            Weekday::Sat | Weekday::Sun => DayType::Weekend,
            _ => DayType::Weekday,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayType::Weekday => "weekday",
            DayType::Weekend => "weekend",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hour of day, 0–23.
#[inline]
pub fn hour_of(at: NaiveDateTime) -> u8 {
    at.hour() as u8
}

/// Whole seconds elapsed from `earlier` to `later`; negative if `earlier`
/// is in the future.
#[inline]
pub fn seconds_between(earlier: NaiveDateTime, later: NaiveDateTime) -> i64 {
    (later - earlier).num_seconds()
}
