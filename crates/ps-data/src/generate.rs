//! Table generators and the immutable [`Dataset`].

use chrono::NaiveTime;
use tracing::info;

use ps_core::{GeoPoint, LocationId, TableRng, TableTag};

use crate::destinations::{DestinationTable, destinations};
use crate::model::{
    BlockSide, EnforcementWindow, Feature, MeterType, MeteredSegment, OperationalStatus,
    ParkingFacility, PaymentMethod, PermitBlock, StreetSide, TimeRestriction, VisitorParking,
};
use crate::tables::{GeneratorConfig, zone_description};
use crate::DataResult;

/// Meter numbers are sequential from here.
pub const FIRST_METER_NUMBER: u32 = 1_000_000;

/// Max meter jitter in degrees, scaled by how far along the corridor the
/// block sits.
const METER_JITTER_DEG: f64 = 0.008;

/// Max permit-block jitter in degrees around the neighborhood base.
const PERMIT_JITTER_DEG: f64 = 0.015;

const PPA_CAPACITY:   u32 = 400;
const OTHER_CAPACITY: u32 = 200;

// ── Facilities ────────────────────────────────────────────────────────────────

/// One facility per anchor, in anchor order.  No randomness: capacity,
/// hours, and rates are all derived from the anchor.
pub fn generate_facilities(config: &GeneratorConfig) -> Vec<ParkingFacility> {
    config
        .facilities
        .iter()
        .enumerate()
        .map(|(i, anchor)| {
            let is_ppa = anchor.operator == "PPA";
            let total_spots = if is_ppa { PPA_CAPACITY } else { OTHER_CAPACITY };
            let rate = config.rate_for(&anchor.name);
            let first_word = anchor.name.split_whitespace().next().unwrap_or(&anchor.name);

            ParkingFacility {
                id:              LocationId::facility(i + 1),
                name:            anchor.name.clone(),
                kind:            anchor.kind,
                operator:        anchor.operator.clone(),
                position:        anchor.position,
                total_spots,
                available_spots: (total_spots / 2).max(1).min(total_spots),
                hourly_rate:     round_cents(rate.hourly),
                daily_max:       round_cents(rate.daily_max),
                hours:           if is_ppa { "24/7" } else { "6AM-11PM" }.to_owned(),
                features:        vec![
                    Feature::Covered,
                    Feature::TwentyFourHour,
                    Feature::Security,
                    Feature::HandicapAccessible,
                ],
                payment_methods: vec![PaymentMethod::Cash, PaymentMethod::CreditCard, PaymentMethod::MobileApp],
                phone:           format!("215-683-{}", 1000 + i),
                address:         format!("{first_word} Street, Philadelphia, PA"),
            }
        })
        .collect()
}

// ── Meters ────────────────────────────────────────────────────────────────────

/// Scatter meters along each metered corridor.
pub fn generate_meters(config: &GeneratorConfig) -> Vec<MeteredSegment> {
    let mut rng = TableRng::new(config.seed, TableTag::Meters);
    let mut meters = Vec::new();
    let mut meter_number = FIRST_METER_NUMBER;

    let enforcement = EnforcementWindow {
        days:  "MON-SAT".to_owned(),
        start: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
        end:   NaiveTime::from_hms_opt(20, 0, 0).unwrap_or_default(),
    };

    for street in &config.metered_streets {
        let count = rng.gen_range(config.meters_per_street.clone());
        let span = f64::from(street.to_block - street.from_block);
        let description = zone_description(&street.zone);

        for _ in 0..count {
            let block = rng.gen_range(street.from_block..street.to_block);
            let along = f64::from(block - street.from_block) / span;
            let lat_jitter = rng.gen_range(-METER_JITTER_DEG..METER_JITTER_DEG) * along;
            let lon_jitter = rng.gen_range(-METER_JITTER_DEG..METER_JITTER_DEG) * along;

            meters.push(MeteredSegment {
                id:               LocationId::meter(meter_number),
                meter_number,
                street:           street.street.clone(),
                block,
                side:             rng.pick(&[StreetSide::North, StreetSide::South, StreetSide::East, StreetSide::West]),
                position:         GeoPoint::new(street.base.lat + lat_jitter, street.base.lon + lon_jitter),
                rate_per_hour:    street.rate,
                time_limit_hours: rng.pick(&[1, 2, 4]),
                enforcement:      enforcement.clone(),
                meter_type:       rng.pick(&[MeterType::SingleSpace, MeterType::MultiSpace]),
                payment_methods:  vec![PaymentMethod::Coin, PaymentMethod::CreditCard, PaymentMethod::MobileApp],
                status:           rng.pick_weighted(&[
                    (OperationalStatus::Active, 0.95),
                    (OperationalStatus::OutOfOrder, 0.05),
                ]),
                zone:             street.zone.clone(),
                zone_description: description.clone(),
                mobile_zone:      format!("91{}", rng.gen_range(1000u32..10_000)),
            });

            meter_number += 1;
        }
    }

    meters
}

// ── Permit blocks ─────────────────────────────────────────────────────────────

/// Scatter permit blocks around each neighborhood.
pub fn generate_permit_blocks(config: &GeneratorConfig) -> Vec<PermitBlock> {
    let mut rng = TableRng::new(config.seed, TableTag::Permits);
    let mut blocks = Vec::new();

    for hood in &config.neighborhoods {
        let count = rng.gen_range(config.blocks_per_neighborhood.clone());

        for i in 0..count as usize {
            let direction = rng.pick(&['N', 'S']);
            let street = format!("{direction} {} St", ordinal(rng.gen_range(2..25)));
            let block = rng.gen_range(100..2800);
            let lat_offset = rng.gen_range(-PERMIT_JITTER_DEG..PERMIT_JITTER_DEG);
            let lon_offset = rng.gen_range(-PERMIT_JITTER_DEG..PERMIT_JITTER_DEG);

            let permit_required = rng.gen_bool(0.8);
            let time_restrictions = rng.pick_weighted(&[
                (TimeRestriction::WeekdayDaytime, 0.5),
                (TimeRestriction::MonSatDaytime, 0.3),
                (TimeRestriction::OvernightOnly, 0.2),
            ]);
            let visitor = if !permit_required {
                VisitorParking::Unrestricted
            } else if rng.gen_bool(0.7) {
                VisitorParking::Limited { max_hours: rng.pick(&[2, 3, 4]) }
            } else {
                VisitorParking::NotAllowed
            };

            blocks.push(PermitBlock {
                id:                 LocationId::permit(hood.zone, i + 1),
                neighborhood:       hood.name.clone(),
                zone:               hood.zone,
                street,
                block,
                side:               rng.pick(&[BlockSide::Both, BlockSide::North, BlockSide::South, BlockSide::East, BlockSide::West]),
                position:           GeoPoint::new(hood.base.lat + lat_offset, hood.base.lon + lon_offset),
                permit_required,
                permit_type:        if permit_required {
                    format!("Residential Zone {}", hood.zone)
                } else {
                    "No Permit Required".to_owned()
                },
                permit_cost_annual: if permit_required { hood.permit_cost } else { 0 },
                time_restrictions,
                visitor,
                estimated_spaces:   rng.gen_range(12..28),
            });
        }
    }

    blocks
}

// ── Dataset ───────────────────────────────────────────────────────────────────

/// The generated tables, built once at startup and never mutated.
///
/// Share it by reference (or behind an `Arc`) with every component that
/// needs it.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dataset {
    pub seed:         u64,
    pub facilities:   Vec<ParkingFacility>,
    pub meters:       Vec<MeteredSegment>,
    pub permits:      Vec<PermitBlock>,
    pub destinations: DestinationTable,
}

impl Dataset {
    /// Validate `config`, then run every generator once.
    ///
    /// Fails only with [`DataError::Config`](crate::DataError::Config).
    pub fn generate(config: &GeneratorConfig) -> DataResult<Self> {
        config.validate()?;

        let dataset = Self {
            seed:         config.seed,
            facilities:   generate_facilities(config),
            meters:       generate_meters(config),
            permits:      generate_permit_blocks(config),
            destinations: destinations(),
        };

        info!(
            seed = config.seed,
            facilities = dataset.facilities.len(),
            meters = dataset.meters.len(),
            permits = dataset.permits.len(),
            destinations = dataset.destinations.len(),
            "Synthetic parking dataset generated"
        );

        Ok(dataset)
    }

    /// Total number of generated locations across the three tables.
    pub fn location_count(&self) -> usize {
        self.facilities.len() + self.meters.len() + self.permits.len()
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// `2nd`, `3rd`, `11th`, `21st`, …
pub(crate) fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _)       => "st",
        (2, _)       => "nd",
        (3, _)       => "rd",
        _            => "th",
    };
    format!("{n}{suffix}")
}
