//! Axis-aligned square outline around a center.
//!
//! The two diagonal corners come from [`translate`]: `(-d, -d)` gives the
//! south-west corner, `(+d, +d)` the north-east.  The outline is emitted as
//! two interleaved polylines, one per pair of opposite edges:
//!
//! ```text
//!   first half   west edge S→N, then north edge W→E
//!   second half  east edge N→S, then south edge E→W
//! ```
//!
//! The halves are concatenated but not joined into a ring, so the result is
//! an open outline.

use dp_core::{BoundaryConfig, GeoPoint, Polygon, translate};

use crate::{BoundaryResult, validate_inputs};

/// `start, start + step, …` while strictly below `end`.
fn grid(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    (0u64..)
        .map(move |k| start + k as f64 * step)
        .take_while(move |&v| v < end)
}

/// Open outline of the square with half-width `distance_m` metres centered on
/// `center`, with edge points every `config.step_deg` degrees.
///
/// # Errors
/// - [`GeoError::InvalidInput`](dp_core::GeoError::InvalidInput) for a
///   center outside the coordinate domain, a non-positive distance or an
///   invalid `config`.
/// - [`GeoError::PoleSingularity`](dp_core::GeoError::PoleSingularity) when
///   a corner latitude lands on a pole.
pub fn rectangle_boundary(
    center:     GeoPoint,
    distance_m: f64,
    config:     &BoundaryConfig,
) -> BoundaryResult<Polygon> {
    validate_inputs(center, distance_m, config)?;
    let step = config.step_deg;

    let sw = translate(center, -distance_m, -distance_m)?;
    let ne = translate(center, distance_m, distance_m)?;
    log::debug!("rectangle around {center}, {distance_m} m: corners {sw} / {ne}");

    let mut first  = Vec::new();
    let mut second = Vec::new();

    for lat in grid(sw.lat, ne.lat, step) {
        first.push(GeoPoint::new(sw.lon, lat));
        second.push(GeoPoint::new(ne.lon, ne.lat - lat + sw.lat));
    }
    for lon in grid(sw.lon, ne.lon, step) {
        first.push(GeoPoint::new(lon, ne.lat));
        second.push(GeoPoint::new(ne.lon - lon + sw.lon, sw.lat));
    }

    log::debug!("rectangle outline: {} points", first.len() + second.len());
    Ok(first.into_iter().chain(second).collect())
}
