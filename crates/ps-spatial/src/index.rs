//! R-tree over every generated location.
//!
//! The tree stores plain `[lat, lon]` points and answers box queries only.
//! Callers use [`LocationIndex::candidates`] as a prefilter and then apply
//! the exact haversine test; the box is built from
//! [`GeoPoint::degree_span`] so it always contains the search circle.

use rstar::{AABB, RTree, RTreeObject};

use ps_core::GeoPoint;
use ps_data::Dataset;

/// Position of a location within its [`Dataset`] table.  Orders by table,
/// then by row.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Slot {
    Facility(usize),
    Meter(usize),
    Permit(usize),
}

#[derive(Clone, Debug)]
struct IndexEntry {
    point: [f64; 2], // [lat, lon]
    slot:  Slot,
}

impl RTreeObject for IndexEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

/// Relative slack added to the query box so rounding in the degree
/// conversion never clips a point that sits right on the circle.
const ENVELOPE_SLACK: f64 = 1e-3;

/// Bulk-loaded R-tree of facilities, meters, and permit blocks.
pub struct LocationIndex {
    tree: RTree<IndexEntry>,
}

impl LocationIndex {
    pub fn build(dataset: &Dataset) -> Self {
        let point = |p: GeoPoint| [p.lat, p.lon];
        let entries: Vec<IndexEntry> = dataset
            .facilities
            .iter()
            .enumerate()
            .map(|(i, f)| IndexEntry { point: point(f.position), slot: Slot::Facility(i) })
            .chain(dataset.meters.iter().enumerate().map(|(i, m)| IndexEntry {
                point: point(m.position),
                slot:  Slot::Meter(i),
            }))
            .chain(dataset.permits.iter().enumerate().map(|(i, p)| IndexEntry {
                point: point(p.position),
                slot:  Slot::Permit(i),
            }))
            .collect();

        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Every location that might lie within `radius_miles` of `center`.
    ///
    /// A superset of the exact answer.  When the box would wrap the
    /// antimeridian or a pole, every location is returned.
    pub fn candidates(&self, center: GeoPoint, radius_miles: f64) -> Vec<Slot> {
        if radius_miles.is_nan() || radius_miles < 0.0 {
            return Vec::new();
        }

        let (half_lat, half_lon) = center.degree_span(radius_miles);
        let half_lat = half_lat * (1.0 + ENVELOPE_SLACK) + f64::EPSILON;
        let half_lon = half_lon * (1.0 + ENVELOPE_SLACK) + f64::EPSILON;

        let lo = [center.lat - half_lat, center.lon - half_lon];
        let hi = [center.lat + half_lat, center.lon + half_lon];
        if lo[0] < -90.0 || hi[0] > 90.0 || lo[1] < -180.0 || hi[1] > 180.0 {
            return self.tree.iter().map(|e| e.slot).collect();
        }

        let envelope = AABB::from_corners(lo, hi);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|e| e.slot)
            .collect()
    }
}

impl std::fmt::Debug for LocationIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationIndex").field("entries", &self.len()).finish()
    }
}
