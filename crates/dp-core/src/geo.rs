//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` longitude/latitude.  Boundary generation compares
//! distances against a metre-scale target at resolutions down to ~1e-5°, so
//! single precision would swamp the bisection tolerance.

use std::f64::consts::PI;

use crate::{GeoError, GeoResult};

/// Sphere radius used by every distance and offset calculation, in metres.
///
/// This is the WGS-84 equatorial radius applied to a perfect sphere.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Arc length in metres of `deg` degrees along a great circle.
#[inline]
pub fn deg_to_m(deg: f64) -> f64 {
    deg * PI * EARTH_RADIUS_M / 180.0
}

/// Central angle in degrees subtended by `m` metres along a great circle.
#[inline]
pub fn m_to_deg(m: f64) -> f64 {
    180.0 * m / (PI * EARTH_RADIUS_M)
}

/// A geographic coordinate in decimal degrees.
///
/// `lon` ∈ [-180, 180], `lat` ∈ [-90, 90].  Construction does not enforce the
/// range; the generators check their center with [`validate`](Self::validate).
/// Boundary points they emit are not wrapped and may fall past ±180° of
/// longitude when the circle crosses the antimeridian.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Same latitude, different longitude.
    #[inline]
    pub fn with_lon(self, lon: f64) -> Self {
        Self { lon, lat: self.lat }
    }

    /// Same longitude, different latitude.
    #[inline]
    pub fn with_lat(self, lat: f64) -> Self {
        Self { lon: self.lon, lat }
    }

    /// Reject non-finite coordinates, `|lat| > 90` and `|lon| > 180`.
    pub fn validate(self) -> GeoResult<()> {
        if !self.lon.is_finite() || !self.lat.is_finite() {
            return Err(GeoError::InvalidInput(format!("non-finite coordinate {self}")));
        }
        if self.lat.abs() > 90.0 {
            return Err(GeoError::InvalidInput(format!("latitude {} outside [-90, 90]", self.lat)));
        }
        if self.lon.abs() > 180.0 {
            return Err(GeoError::InvalidInput(format!("longitude {} outside [-180, 180]", self.lon)));
        }
        Ok(())
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric, and exactly `0.0` for identical points.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let d_lat = lat2 - lat1;
        let d_lon = other.lon.to_radians() - self.lon.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// `true` when `other` lies within `d` metres (inclusive).
    #[inline]
    pub fn within(self, other: GeoPoint, d: f64) -> bool {
        self.distance_m(other) <= d
    }

    /// `[lon, lat]`, the GeoJSON coordinate order.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl From<(f64, f64)> for GeoPoint {
    /// `(lon, lat)`.
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}
