//! Metric offsets in the north and east directions.
//!
//! These invert the spherical model used by [`GeoPoint::distance_m`]: moving
//! north by `m` metres changes latitude by [`m_to_deg`]`(m)`, which is exactly
//! the arc a haversine distance of `m` spans along a meridian.  Moving east
//! scales the same angle by `1 / cos(lat)`.

use crate::{GeoError, GeoPoint, GeoResult, m_to_deg};

/// Below this, `1 / cos(lat)` is treated as divergent.
const MIN_COS_LAT: f64 = 1e-12;

/// Shift `p` north by `dy` metres (negative `dy` moves south).
#[inline]
pub fn move_north(p: GeoPoint, dy: f64) -> GeoPoint {
    p.with_lat(p.lat + m_to_deg(dy))
}

/// Shift `p` east by `dx` metres (negative `dx` moves west).
///
/// # Errors
/// [`GeoError::PoleSingularity`] when `p` sits on (or numerically at) a pole.
pub fn move_east(p: GeoPoint, dx: f64) -> GeoResult<GeoPoint> {
    let cos_lat = p.lat.to_radians().cos();
    if p.lat.abs() >= 90.0 || cos_lat.abs() < MIN_COS_LAT {
        return Err(GeoError::PoleSingularity { lat: p.lat });
    }
    Ok(p.with_lon(p.lon + m_to_deg(dx) / cos_lat))
}

/// North by `dy`, then east by `dx` at the new latitude.
///
/// The two moves do not commute exactly; the difference is second order in
/// the offset and ignored here.
pub fn translate(p: GeoPoint, dx: f64, dy: f64) -> GeoResult<GeoPoint> {
    move_east(move_north(p, dy), dx)
}
