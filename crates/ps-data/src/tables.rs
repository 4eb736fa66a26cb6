//! Seed tables and generator configuration.
//!
//! The built-in tables anchor the synthetic data to real Philadelphia
//! places: PPA and institutional garages, metered commercial corridors, and
//! residential permit neighborhoods.  [`GeneratorConfig::philadelphia`]
//! returns them; callers may replace the seed or extend the rate table
//! before generation.

use std::collections::HashSet;
use std::ops::Range;

use ps_core::GeoPoint;

use crate::{DataError, DataResult, FacilityType};

/// Fallback seed for the whole dataset.
pub const DEFAULT_SEED: u64 = 42;

// ── Seed table rows ───────────────────────────────────────────────────────────

/// Hourly rate and daily maximum, in dollars.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rate {
    pub hourly:    f64,
    pub daily_max: f64,
}

impl Rate {
    pub const fn new(hourly: f64, daily_max: f64) -> Self {
        Self { hourly, daily_max }
    }

    /// Rate used for facilities missing from the rate table.
    pub const DEFAULT: Rate = Rate::new(5.0, 20.0);

    fn check(self, table: &'static str, owner: &str) -> DataResult<()> {
        for (what, v) in [("hourly rate", self.hourly), ("daily max", self.daily_max)] {
            if !v.is_finite() || v < 0.0 {
                return Err(DataError::config(table, format!("{owner}: {what} {v} must be a finite non-negative number")));
            }
        }
        Ok(())
    }
}

/// A real garage or lot the generator always emits.
#[derive(Clone, Debug, PartialEq)]
pub struct FacilityAnchor {
    pub name:     String,
    pub position: GeoPoint,
    pub operator: String,
    pub kind:     FacilityType,
}

/// One row of the facility name → rate table.
#[derive(Clone, Debug, PartialEq)]
pub struct RateEntry {
    pub name: String,
    pub rate: Rate,
}

/// A metered corridor; meters are scattered along `[from_block, to_block)`.
#[derive(Clone, Debug, PartialEq)]
pub struct MeteredStreet {
    pub street:     String,
    pub from_block: u32,
    pub to_block:   u32,
    pub base:       GeoPoint,
    pub zone:       String,
    pub rate:       f64,
}

/// A residential permit neighborhood; blocks are scattered around `base`.
#[derive(Clone, Debug, PartialEq)]
pub struct Neighborhood {
    pub name:        String,
    pub zone:        char,
    pub base:        GeoPoint,
    pub permit_cost: u32,
}

// ── Built-in Philadelphia tables ──────────────────────────────────────────────

// (name, lat, lon, operator)
const FACILITIES: &[(&str, f64, f64, &str)] = &[
    ("8th & Race Garage",        39.9565, -75.1525, "PPA"),
    ("2nd & Lombard Garage",     39.9387, -75.1436, "PPA"),
    ("11th & Vine Garage",       39.9587, -75.1578, "PPA"),
    ("AutoPark at the Bell",     39.9496, -75.1503, "PPA"),
    ("Convention Center Garage", 39.9553, -75.1596, "PPA"),
    ("Independence Mall Garage", 39.9496, -75.1470, "PPA"),
    ("University City Garage",   39.9522, -75.1932, "UPHS"),
    ("Temple University Garage", 39.9812, -75.1567, "Temple"),
    ("Art Museum Garage",        39.9656, -75.1810, "PMA"),
    ("Fashion District Garage",  39.9520, -75.1598, "Private"),
];

// (name, hourly, daily max)
const RATES: &[(&str, f64, f64)] = &[
    ("8th & Race Garage",        12.0,  17.0),
    ("2nd & Lombard Garage",      6.0,  25.0),
    ("11th & Vine Garage",       12.0,  18.0),
    ("AutoPark at the Bell",     14.0,  32.0),
    ("Convention Center Garage", 17.0,  40.0),
    ("Independence Mall Garage", 14.0,  32.0),
    ("University City Garage",   15.95, 30.0),
    ("Temple University Garage",  7.0,  22.0),
    ("Art Museum Garage",        10.0,  39.0),
    ("Fashion District Garage",  10.0,  35.0),
];

// (street, from block, to block, lat, lon, zone, rate)
const METERED_STREETS: &[(&str, u32, u32, f64, f64, &str, f64)] = &[
    ("Market St",        400,  2000, 39.9526, -75.1652, "Center City Core",   4.00),
    ("Chestnut St",      400,  2000, 39.9489, -75.1634, "Center City Core",   4.00),
    ("Walnut St",        400,  2000, 39.9467, -75.1632, "Center City Core",   4.00),
    ("Spring Garden St", 200,  2400, 39.9611, -75.1580, "Center City Area",   3.50),
    ("Delaware Ave",     100,  1200, 39.9530, -75.1403, "Long-term",          2.50),
    ("2nd St",           2100, 2800, 39.9676, -75.1427, "Northern Liberties", 2.00),
];

// (name, zone, lat, lon, annual permit cost)
const NEIGHBORHOODS: &[(&str, char, f64, f64, u32)] = &[
    ("Center City East",   'A', 39.9500, -75.1500, 35),
    ("Center City West",   'B', 39.9500, -75.1700, 35),
    ("Northern Liberties", 'C', 39.9676, -75.1427, 35),
    ("South Philadelphia", 'D', 39.9200, -75.1600, 35),
    ("University City",    'E', 39.9522, -75.1932, 35),
    ("Fishtown",           'F', 39.9676, -75.1300, 35),
];

/// Long-form description of a meter zone; unknown zones describe themselves.
pub fn zone_description(zone: &str) -> String {
    match zone {
        "Center City Core"   => "Arch to Locust St, 4th to 20th St",
        "Center City Area"   => "Spring Garden to Bainbridge St, River to River",
        "Long-term"          => "4-hour and 12-hour time limits",
        "Northern Liberties" => "Northern Liberties neighborhood",
        other                => other,
    }
    .to_owned()
}

// ── GeneratorConfig ───────────────────────────────────────────────────────────

/// Everything the generator reads.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Master RNG seed.  The same seed always produces identical tables.
    pub seed:                    u64,
    pub facilities:              Vec<FacilityAnchor>,
    pub rates:                   Vec<RateEntry>,
    /// Rate for facilities absent from `rates`.
    pub default_rate:            Rate,
    pub metered_streets:         Vec<MeteredStreet>,
    pub neighborhoods:           Vec<Neighborhood>,
    /// Meters drawn per street (half-open).
    pub meters_per_street:       Range<u32>,
    /// Permit blocks drawn per neighborhood (half-open).
    pub blocks_per_neighborhood: Range<u32>,
}

impl GeneratorConfig {
    /// The built-in Philadelphia tables with [`DEFAULT_SEED`].
    pub fn philadelphia() -> Self {
        Self {
            seed: DEFAULT_SEED,
            facilities: FACILITIES
                .iter()
                .map(|&(name, lat, lon, operator)| FacilityAnchor {
                    name:     name.to_owned(),
                    position: GeoPoint::new(lat, lon),
                    operator: operator.to_owned(),
                    kind:     FacilityType::Garage,
                })
                .collect(),
            rates: RATES
                .iter()
                .map(|&(name, hourly, daily)| RateEntry {
                    name: name.to_owned(),
                    rate: Rate::new(hourly, daily),
                })
                .collect(),
            default_rate: Rate::DEFAULT,
            metered_streets: METERED_STREETS
                .iter()
                .map(|&(street, from_block, to_block, lat, lon, zone, rate)| MeteredStreet {
                    street: street.to_owned(),
                    from_block,
                    to_block,
                    base: GeoPoint::new(lat, lon),
                    zone: zone.to_owned(),
                    rate,
                })
                .collect(),
            neighborhoods: NEIGHBORHOODS
                .iter()
                .map(|&(name, zone, lat, lon, permit_cost)| Neighborhood {
                    name: name.to_owned(),
                    zone,
                    base: GeoPoint::new(lat, lon),
                    permit_cost,
                })
                .collect(),
            meters_per_street:       8..15,
            blocks_per_neighborhood: 15..25,
        }
    }

    /// Replace the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Insert or replace the rate for a facility name.
    pub fn set_rate(&mut self, name: &str, rate: Rate) {
        match self.rates.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.rate = rate,
            None => self.rates.push(RateEntry { name: name.to_owned(), rate }),
        }
    }

    /// Rate for a facility name, falling back to `default_rate`.
    pub fn rate_for(&self, name: &str) -> Rate {
        self.rates
            .iter()
            .find(|e| e.name == name)
            .map_or(self.default_rate, |e| e.rate)
    }

    /// Reject tables the generator cannot use.
    pub fn validate(&self) -> DataResult<()> {
        self.default_rate.check("rate", "default rate")?;

        let mut seen = HashSet::new();
        for entry in &self.rates {
            if !seen.insert(entry.name.as_str()) {
                return Err(DataError::config("rate", format!("duplicate entry {:?}", entry.name)));
            }
            entry.rate.check("rate", &entry.name)?;
        }

        let mut seen = HashSet::new();
        for anchor in &self.facilities {
            if !seen.insert(anchor.name.as_str()) {
                return Err(DataError::config("facility", format!("duplicate anchor {:?}", anchor.name)));
            }
            if !anchor.position.is_valid() {
                return Err(DataError::config("facility", format!("{}: invalid coordinate {}", anchor.name, anchor.position)));
            }
        }

        check_count_range("metered street", &self.meters_per_street)?;
        let mut seen = HashSet::new();
        for street in &self.metered_streets {
            if !seen.insert(street.street.as_str()) {
                return Err(DataError::config("metered street", format!("duplicate street {:?}", street.street)));
            }
            if street.from_block >= street.to_block {
                return Err(DataError::config(
                    "metered street",
                    format!("{}: block range {}..{} is empty", street.street, street.from_block, street.to_block),
                ));
            }
            if !street.base.is_valid() {
                return Err(DataError::config("metered street", format!("{}: invalid coordinate {}", street.street, street.base)));
            }
            if !street.rate.is_finite() || street.rate < 0.0 {
                return Err(DataError::config("metered street", format!("{}: rate {} must be non-negative", street.street, street.rate)));
            }
        }

        check_count_range("neighborhood", &self.blocks_per_neighborhood)?;
        let mut seen = HashSet::new();
        for hood in &self.neighborhoods {
            if !hood.zone.is_ascii_uppercase() {
                return Err(DataError::config("neighborhood", format!("{}: zone {:?} must be an uppercase letter", hood.name, hood.zone)));
            }
            if !seen.insert(hood.zone) {
                return Err(DataError::config("neighborhood", format!("zone {} assigned twice", hood.zone)));
            }
            if !hood.base.is_valid() {
                return Err(DataError::config("neighborhood", format!("{}: invalid coordinate {}", hood.name, hood.base)));
            }
        }

        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::philadelphia()
    }
}

fn check_count_range(table: &'static str, range: &Range<u32>) -> DataResult<()> {
    if range.start >= range.end {
        return Err(DataError::config(table, format!("count range {}..{} is empty", range.start, range.end)));
    }
    Ok(())
}
