//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Generated jitter offsets are
//! on the order of 1e-3 degrees, so single precision would visibly round
//! distances reported to two decimal places of a mile.

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3_958.761_3;

/// Miles spanned by one degree of latitude on the mean sphere.
pub const MILES_PER_DEG_LAT: f64 = EARTH_RADIUS_MILES * std::f64::consts::PI / 180.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` when both components are finite and inside the WGS-84 range.
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Central angle between two points in radians (haversine formula).
    fn central_angle(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        2.0 * a.sqrt().atan2((1.0 - a).sqrt())
    }

    /// Haversine great-circle distance in miles.
    pub fn distance_miles(self, other: GeoPoint) -> f64 {
        EARTH_RADIUS_MILES * self.central_angle(other)
    }

    /// Half-widths `(lat_deg, lon_deg)` of a box that contains every point
    /// within `radius_miles` of `self`.
    ///
    /// The longitude span uses the cosine of the box edge closest to a pole,
    /// so the box is never narrower than the circle.
    pub fn degree_span(self, radius_miles: f64) -> (f64, f64) {
        let half_lat = radius_miles / MILES_PER_DEG_LAT;
        let poleward = (self.lat.abs() + half_lat).min(89.999);
        let half_lon = (half_lat / poleward.to_radians().cos()).min(180.0);
        (half_lat, half_lon)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Round `value` to `places` decimal places, half away from zero.
#[inline]
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
