//! `ps-predict` — availability prediction.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`model`]     | `AvailabilityModel` trait, `Prediction`, `AvailabilityBand` |
//! | [`pattern`]   | `OccupancyPatterns` — static hour-of-day baselines         |
//! | [`heuristic`] | `HeuristicPredictor` — the default `AvailabilityModel`     |
//!
//! Prediction never fails.  Unknown kinds and hours fall back to a 0.5
//! baseline, and every result is clamped to `[0.05, 0.95]`.

pub mod heuristic;
pub mod model;
pub mod pattern;

#[cfg(test)]
mod tests;

pub use heuristic::{HeuristicPredictor, RECENT_WINDOW_SECS};
pub use model::{
    AvailabilityBand, AvailabilityModel, Factors, MAX_AVAILABILITY, MIN_AVAILABILITY, Prediction,
    PredictionConfidence,
};
pub use pattern::{DEFAULT_BASE, OccupancyPatterns};
