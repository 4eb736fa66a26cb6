//! Fluent builder for constructing a [`ParkingEngine`].

use std::sync::Arc;

use tracing::info;

use ps_core::{Clock, SystemClock};
use ps_data::{Dataset, GeneratorConfig};
use ps_predict::{AvailabilityModel, HeuristicPredictor};
use ps_spatial::{Preferences, SpatialEngine};

use crate::config::{Config, DEFAULT_RADIUS_MILES, DEFAULT_SUMMARY_HOURS};
use crate::{EngineError, EngineResult, ParkingEngine};

/// Fluent builder for [`ParkingEngine`].
///
/// Every input has a default:
///
/// | Method                | Default                                   |
/// |-----------------------|-------------------------------------------|
/// | `.generator(c)`       | `GeneratorConfig::philadelphia()`         |
/// | `.seed(s)`            | 42                                        |
/// | `.clock(c)`           | `SystemClock`                             |
/// | `.model(m)`           | `HeuristicPredictor::philadelphia()`      |
/// | `.summary_hours(h)`   | 6                                         |
/// | `.default_radius(r)`  | 1.0 miles                                 |
/// | `.preferences(p)`     | `Preferences::default()`                  |
///
/// # Example
///
/// ```rust,ignore
/// let engine = EngineBuilder::new()
///     .seed(7)
///     .clock(ManualClock::new(start))
///     .build()?;
/// let store = engine.open_session("browser-tab-1");
/// let result = engine.search(&store, "Reading Terminal Market", 0.5, &Preferences::default())?;
/// ```
pub struct EngineBuilder {
    generator:      GeneratorConfig,
    clock:          Arc<dyn Clock>,
    model:          Arc<dyn AvailabilityModel>,
    summary_hours:  u32,
    default_radius: f64,
    preferences:    Preferences,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            generator:      GeneratorConfig::philadelphia(),
            clock:          Arc::new(SystemClock),
            model:          Arc::new(HeuristicPredictor::philadelphia()),
            summary_hours:  DEFAULT_SUMMARY_HOURS,
            default_radius: DEFAULT_RADIUS_MILES,
            preferences:    Preferences::default(),
        }
    }

    /// Builder seeded from a loaded config file.
    ///
    /// # Errors
    ///
    /// Any rate table, radius, or preference the file gets wrong.
    pub fn from_config(config: &Config) -> EngineResult<Self> {
        Ok(Self::new()
            .generator(config.generator_config()?)
            .summary_hours(config.summary_hours_back())
            .default_radius(config.default_radius_miles()?)
            .preferences(config.preferences()?))
    }

    pub fn generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// Replace only the seed of the current generator config.
    pub fn seed(mut self, seed: u64) -> Self {
        self.generator.seed = seed;
        self
    }

    pub fn clock(self, clock: impl Clock + 'static) -> Self {
        self.shared_clock(Arc::new(clock))
    }

    /// Use a clock the caller keeps a handle to, e.g. a `ManualClock` a test
    /// advances.
    pub fn shared_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn model(mut self, model: impl AvailabilityModel + 'static) -> Self {
        self.model = Arc::new(model);
        self
    }

    pub fn summary_hours(mut self, hours: u32) -> Self {
        self.summary_hours = hours;
        self
    }

    pub fn default_radius(mut self, miles: f64) -> Self {
        self.default_radius = miles;
        self
    }

    pub fn preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Generate the dataset, index it, and return a ready engine.
    ///
    /// This is the only place the dataset is generated.
    pub fn build(self) -> EngineResult<ParkingEngine> {
        if !self.default_radius.is_finite() || self.default_radius < 0.0 {
            return Err(EngineError::InvalidSetting {
                key:    "default_radius",
                reason: format!("{} must be a finite non-negative number of miles", self.default_radius),
            });
        }

        let dataset = Arc::new(Dataset::generate(&self.generator)?);
        let spatial = SpatialEngine::new(Arc::clone(&dataset));

        info!(
            seed = dataset.seed,
            locations = dataset.location_count(),
            model = ?self.model,
            "Parking engine ready"
        );

        Ok(ParkingEngine {
            spatial,
            clock:          self.clock,
            model:          self.model,
            summary_hours:  self.summary_hours,
            default_radius: self.default_radius,
            preferences:    self.preferences,
        })
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
