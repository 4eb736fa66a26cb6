//! Location and destination records produced by the generator.
//!
//! Every record is immutable after generation.  Categorical attributes are
//! closed enums with a stable string label (used for CSV export, serde, and
//! config parsing).

use std::fmt;

use chrono::NaiveTime;

use ps_core::{GeoPoint, LocationId, LocationKind, SpotError};

/// Generate a closed enum with a `&'static str` label per variant, plus
/// `Display` and `FromStr` over those labels.  `Variant => "label" | "alt"`
/// makes `FromStr` (and serde) also accept `"alt"`; `as_str` always returns
/// the first label.
macro_rules! tag_enum {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vattr:meta])* $variant:ident => $label:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $(
                $(#[$vattr])*
                #[cfg_attr(feature = "serde", serde(rename = $label $(, alias = $alias)*))]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = SpotError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($label $(| $alias)* => Ok($name::$variant),)+
                    other => Err(SpotError::UnknownTag {
                        what:  stringify!($name),
                        value: other.to_owned(),
                    }),
                }
            }
        }
    };
}

// ── Garages and lots ──────────────────────────────────────────────────────────

tag_enum! {
    pub enum FacilityType {
        Garage => "garage",
        Lot    => "lot",
    }
}

impl FacilityType {
    pub fn kind(self) -> LocationKind {
        match self {
            FacilityType::Garage => LocationKind::Garage,
            FacilityType::Lot    => LocationKind::Lot,
        }
    }
}

tag_enum! {
    /// Amenity a facility may offer.  Searches only enforce
    /// [`EvCharging`](Feature::EvCharging) and
    /// [`HandicapAccessible`](Feature::HandicapAccessible).
    pub enum Feature {
        Covered            => "covered" | "covered_indoor",
        TwentyFourHour     => "24_hour_access" | "24h" | "24_hour",
        Security           => "security" | "security_attended",
        HandicapAccessible => "handicap_accessible" | "handicap",
        EvCharging         => "ev_charging" | "ev" | "ev_charging_station",
    }
}

impl Feature {
    /// `true` if a search drops facilities lacking this feature.
    #[inline]
    pub fn is_enforced(self) -> bool {
        matches!(self, Feature::EvCharging | Feature::HandicapAccessible)
    }
}

tag_enum! {
    pub enum PaymentMethod {
        Cash       => "cash",
        Coin       => "coin",
        CreditCard => "credit_card",
        MobileApp  => "mobile_app",
    }
}

/// An off-street garage or surface lot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParkingFacility {
    pub id:              LocationId,
    pub name:            String,
    pub kind:            FacilityType,
    pub operator:        String,
    pub position:        GeoPoint,
    pub total_spots:     u32,
    /// Static placeholder, never updated.  Always ≤ `total_spots`.
    pub available_spots: u32,
    pub hourly_rate:     f64,
    pub daily_max:       f64,
    pub hours:           String,
    pub features:        Vec<Feature>,
    pub payment_methods: Vec<PaymentMethod>,
    pub phone:           String,
    pub address:         String,
}

impl ParkingFacility {
    #[inline]
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }
}

// ── Meters ────────────────────────────────────────────────────────────────────

tag_enum! {
    pub enum StreetSide {
        North => "North",
        South => "South",
        East  => "East",
        West  => "West",
    }
}

tag_enum! {
    pub enum MeterType {
        SingleSpace => "single_space",
        MultiSpace  => "multi_space",
    }
}

tag_enum! {
    pub enum OperationalStatus {
        Active     => "active",
        OutOfOrder => "out_of_order",
    }
}

/// Days and hours during which a meter must be paid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnforcementWindow {
    /// Day range label, e.g. `MON-SAT`.
    pub days:  String,
    pub start: NaiveTime,
    pub end:   NaiveTime,
}

impl EnforcementWindow {
    /// `HH:MM-HH:MM`.
    pub fn hours_label(&self) -> String {
        format!("{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

/// One metered curbside segment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeteredSegment {
    pub id:               LocationId,
    pub meter_number:     u32,
    pub street:           String,
    pub block:            u32,
    pub side:             StreetSide,
    pub position:         GeoPoint,
    pub rate_per_hour:    f64,
    pub time_limit_hours: u8,
    pub enforcement:      EnforcementWindow,
    pub meter_type:       MeterType,
    pub payment_methods:  Vec<PaymentMethod>,
    pub status:           OperationalStatus,
    pub zone:             String,
    pub zone_description: String,
    /// Pay-by-phone zone code.
    pub mobile_zone:      String,
}

impl MeteredSegment {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == OperationalStatus::Active
    }
}

// ── Permit blocks ─────────────────────────────────────────────────────────────

tag_enum! {
    pub enum BlockSide {
        Both  => "Both",
        North => "North",
        South => "South",
        East  => "East",
        West  => "West",
    }
}

tag_enum! {
    pub enum TimeRestriction {
        WeekdayDaytime => "8AM-6PM Mon-Fri",
        MonSatDaytime  => "8AM-8PM Mon-Sat",
        OvernightOnly  => "6PM-8AM Daily (Overnight Only)",
    }
}

/// Whether non-residents may park on a permit block, and for how long.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", tag = "policy"))]
pub enum VisitorParking {
    NotAllowed,
    Limited { max_hours: u8 },
    /// No permit is required on the block.
    Unrestricted,
}

impl VisitorParking {
    #[inline]
    pub fn allowed(self) -> bool {
        !matches!(self, VisitorParking::NotAllowed)
    }

    /// Maximum visitor stay; `None` when unrestricted, `Some(0)` when not
    /// allowed.
    pub fn max_hours(self) -> Option<u8> {
        match self {
            VisitorParking::NotAllowed           => Some(0),
            VisitorParking::Limited { max_hours } => Some(max_hours),
            VisitorParking::Unrestricted         => None,
        }
    }
}

/// A residential-permit street block.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PermitBlock {
    pub id:                 LocationId,
    pub neighborhood:       String,
    pub zone:               char,
    pub street:             String,
    pub block:              u32,
    pub side:               BlockSide,
    pub position:           GeoPoint,
    pub permit_required:    bool,
    pub permit_type:        String,
    pub permit_cost_annual: u32,
    pub time_restrictions:  TimeRestriction,
    pub visitor:            VisitorParking,
    pub estimated_spaces:   u32,
}

impl PermitBlock {
    /// `Zone A`, `Zone B`, …
    pub fn zone_label(&self) -> String {
        format!("Zone {}", self.zone)
    }
}

// ── Destinations ──────────────────────────────────────────────────────────────

tag_enum! {
    /// What parking a destination itself offers.
    pub enum ParkingSituation {
        None              => "none",
        LimitedPaid       => "limited_paid",
        GarageNearby      => "garage_nearby",
        StadiumLots       => "stadium_lots",
        GarageAvailable   => "garage_available",
        MeterStreet       => "meter_street",
        MallGarage        => "mall_garage",
        LimitedExpensive  => "limited_expensive",
        MeterLimited      => "meter_limited",
        StreetSomePermit  => "street_some_permit",
    }
}

impl ParkingSituation {
    /// `true` for situations a client should flag as a warning.
    pub fn is_constrained(self) -> bool {
        matches!(
            self,
            ParkingSituation::None
                | ParkingSituation::LimitedPaid
                | ParkingSituation::LimitedExpensive
        )
    }
}

tag_enum! {
    pub enum DestinationCategory {
        Historic       => "historic",
        Museum         => "museum",
        Food           => "food",
        Sports         => "sports",
        University     => "university",
        Hospital       => "hospital",
        Shopping       => "shopping",
        Transportation => "transportation",
        Entertainment  => "entertainment",
        Neighborhood   => "neighborhood",
    }
}

/// A named place a user can search around.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    pub name:        String,
    pub position:    GeoPoint,
    pub parking:     ParkingSituation,
    pub category:    DestinationCategory,
    pub description: String,
}
