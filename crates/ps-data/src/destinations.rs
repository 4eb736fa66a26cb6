//! The fixed table of named destinations.
//!
//! Order matters: analytics reports the first ten names as "popular", in
//! table order.

use ps_core::GeoPoint;

use crate::model::{Destination, DestinationCategory as Cat, ParkingSituation as Pk};

// (name, lat, lon, parking, category, description)
const DESTINATIONS: &[(&str, f64, f64, Pk, Cat, &str)] = &[
    ("Independence Hall", 39.9496, -75.1503, Pk::None, Cat::Historic,
     "Birthplace of America - no on-site parking"),
    ("Liberty Bell Center", 39.9496, -75.1503, Pk::None, Cat::Historic,
     "Iconic symbol - no on-site parking"),
    ("Philadelphia Art Museum", 39.9656, -75.1810, Pk::LimitedPaid, Cat::Museum,
     "World-class art museum - limited paid parking"),
    ("Reading Terminal Market", 39.9526, -75.1596, Pk::GarageNearby, Cat::Food,
     "Historic food market - nearby parking garages"),
    ("Citizens Bank Park", 39.9061, -75.1665, Pk::StadiumLots, Cat::Sports,
     "Phillies stadium - large parking lots available"),
    ("Lincoln Financial Field", 39.9008, -75.1675, Pk::StadiumLots, Cat::Sports,
     "Eagles stadium - extensive parking"),
    ("Wells Fargo Center", 39.9012, -75.1720, Pk::StadiumLots, Cat::Sports,
     "76ers/Flyers arena - ample parking"),
    ("University of Pennsylvania", 39.9522, -75.1932, Pk::GarageAvailable, Cat::University,
     "Ivy League university - parking garages available"),
    ("Temple University", 39.9812, -75.1567, Pk::GarageAvailable, Cat::University,
     "Major university - multiple parking options"),
    ("Hospital of the University of Pennsylvania", 39.9496, -75.1924, Pk::GarageAvailable, Cat::Hospital,
     "Major hospital - patient/visitor parking"),
    ("Rittenhouse Square", 39.9496, -75.1719, Pk::MeterStreet, Cat::Shopping,
     "Upscale shopping district - metered street parking"),
    ("Fashion District Philadelphia", 39.9520, -75.1598, Pk::MallGarage, Cat::Shopping,
     "Major shopping center - parking garage included"),
    ("30th Street Station", 39.9558, -75.1819, Pk::LimitedExpensive, Cat::Transportation,
     "Major train station - limited expensive parking"),
    ("South Street", 39.9413, -75.1582, Pk::MeterStreet, Cat::Entertainment,
     "Entertainment district - metered parking"),
    ("Old City", 39.9500, -75.1450, Pk::MeterLimited, Cat::Historic,
     "Historic district - limited metered parking"),
    ("Northern Liberties", 39.9676, -75.1427, Pk::StreetSomePermit, Cat::Neighborhood,
     "Trendy neighborhood - mix of street parking"),
];

/// Ordered destination table with lookup by exact name.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DestinationTable {
    entries: Vec<Destination>,
}

impl DestinationTable {
    pub fn new(entries: Vec<Destination>) -> Self {
        Self { entries }
    }

    /// Exact-name lookup.  Sixteen entries; a linear scan is fine.
    pub fn get(&self, name: &str) -> Option<&Destination> {
        self.entries.iter().find(|d| d.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|d| d.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Destination> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The built-in Philadelphia destinations.
pub fn destinations() -> DestinationTable {
    DestinationTable::new(
        DESTINATIONS
            .iter()
            .map(|&(name, lat, lon, parking, category, description)| Destination {
                name: name.to_owned(),
                position: GeoPoint::new(lat, lon),
                parking,
                category,
                description: description.to_owned(),
            })
            .collect(),
    )
}
