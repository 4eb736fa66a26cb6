//! TOML configuration.
//!
//! Only `[app]` and `[logging]` are required.  Every other section, and
//! every key within it, falls back to the built-in defaults.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use ps_core::LocationKind;
use ps_data::tables::DEFAULT_SEED;
use ps_data::{Feature, GeneratorConfig, Rate};
use ps_spatial::{Preferences, SortKey};

use crate::{EngineError, EngineResult};

pub const DEFAULT_CONFIG_PATH: &str = "config/philaspot.toml";
pub const DEFAULT_RADIUS_MILES: f64 = 1.0;
pub const DEFAULT_SUMMARY_HOURS: u32 = ps_reports::DEFAULT_SUMMARY_HOURS;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub app:         AppSection,
    pub logging:     LoggingSection,
    #[serde(default)]
    pub generator:   GeneratorSection,
    #[serde(default)]
    pub search:      SearchSection,
    #[serde(default)]
    pub preferences: PreferencesSection,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSection {
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSection {
    /// `tracing` filter directive, e.g. `info` or `ps_spatial=debug`.
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeneratorSection {
    pub seed:                u64,
    pub default_hourly_rate: f64,
    pub default_daily_max:   f64,
    /// Replaces the built-in rate for a matching name, or adds one.
    pub rates:               Vec<RateOverride>,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            seed:                DEFAULT_SEED,
            default_hourly_rate: Rate::DEFAULT.hourly,
            default_daily_max:   Rate::DEFAULT.daily_max,
            rates:               Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RateOverride {
    pub name:        String,
    pub hourly_rate: f64,
    pub daily_max:   f64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchSection {
    pub default_radius_miles: f64,
    pub summary_hours_back:   u32,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            default_radius_miles: DEFAULT_RADIUS_MILES,
            summary_hours_back:   DEFAULT_SUMMARY_HOURS,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PreferencesSection {
    pub preferred_types:    Vec<String>,
    pub max_walk_distance:  f64,
    pub max_price_per_hour: Option<f64>,
    pub required_features:  Vec<String>,
    pub sort_by:            String,
}

impl Default for PreferencesSection {
    fn default() -> Self {
        Self {
            preferred_types:    vec!["garage".into(), "lot".into(), "meter".into()],
            max_walk_distance:  0.8,
            max_price_per_hour: Some(12.0),
            required_features:  Vec::new(),
            sort_by:            SortKey::Distance.as_str().to_owned(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_default() -> Result<Config, ConfigError> {
    load_from_path(DEFAULT_CONFIG_PATH)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

pub fn load_from_str(contents: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

impl Config {
    /// Built-in Philadelphia tables with this file's seed and rate changes
    /// applied, validated.
    pub fn generator_config(&self) -> EngineResult<GeneratorConfig> {
        let section = &self.generator;
        let mut config = GeneratorConfig::philadelphia().with_seed(section.seed);
        config.default_rate = Rate::new(section.default_hourly_rate, section.default_daily_max);
        for entry in &section.rates {
            config.set_rate(&entry.name, Rate::new(entry.hourly_rate, entry.daily_max));
        }
        config.validate()?;
        Ok(config)
    }

    /// Search radius used when a client does not pick one.
    pub fn default_radius_miles(&self) -> EngineResult<f64> {
        let r = self.search.default_radius_miles;
        if !r.is_finite() || r < 0.0 {
            return Err(EngineError::InvalidSetting {
                key:    "search.default_radius_miles",
                reason: format!("{r} must be a finite non-negative number of miles"),
            });
        }
        Ok(r)
    }

    pub fn summary_hours_back(&self) -> u32 {
        self.search.summary_hours_back
    }

    /// Parse the `[preferences]` strings.
    pub fn preferences(&self) -> EngineResult<Preferences> {
        let section = &self.preferences;

        let preferred_types = section
            .preferred_types
            .iter()
            .map(|s| s.parse::<LocationKind>())
            .collect::<Result<Vec<_>, _>>()?;
        let required_features = section
            .required_features
            .iter()
            .map(|s| s.parse::<Feature>())
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(cap) = section.max_price_per_hour {
            if !cap.is_finite() || cap < 0.0 {
                return Err(EngineError::InvalidSetting {
                    key:    "preferences.max_price_per_hour",
                    reason: format!("{cap} must be a finite non-negative price"),
                });
            }
        }

        Ok(Preferences {
            preferred_types,
            max_walk_distance: section.max_walk_distance,
            max_price_per_hour: section.max_price_per_hour,
            required_features,
            sort_by: section.sort_by.parse()?,
        })
    }
}
