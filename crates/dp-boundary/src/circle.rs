//! Circle boundary: every point at (approximately) one distance from a center.
//!
//! # Algorithm
//!
//! Longitudes are sampled on the grid `center.lon + k * step` for integer `k`.
//!
//! ① **Extent scan**: walk `k` outward in both directions along the
//!   center's own latitude while the sample stays within the target distance.
//!   This yields the inclusive range `k_min ..= k_max`.  Each walk stops after
//!   half a turn (180°); past that, distance along a parallel shrinks again.
//!
//! ② **Upper arc**: for `k = k_max` down to `k_min`, bisect north.
//!
//! ③ **Lower arc**: for `k = k_min` up to `k_max`, bisect south.
//!
//! ④ **Assembly**: upper arc, then lower arc, then the first upper point
//!   again, giving a closed ring that runs east → north → west → south → east.
//!
//! With the `parallel` feature, ② and ③ run on Rayon's thread pool.  The
//! indexed iteration keeps sample order, so no sort is needed afterwards.

use dp_core::{BoundaryConfig, GeoPoint, Polygon};

use crate::{BoundaryResult, SearchDirection, bisect_latitude, validate_inputs};

/// The two halves of a circle boundary before assembly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CircleArcs {
    /// North half, ordered east to west.
    pub upper: Vec<GeoPoint>,
    /// South half, ordered west to east.
    pub lower: Vec<GeoPoint>,
}

impl CircleArcs {
    /// Concatenate upper and lower arcs and close the ring by repeating the
    /// first point.
    pub fn into_polygon(self) -> Polygon {
        let mut ring = Polygon::with_capacity(self.upper.len() + self.lower.len() + 1);
        let first = self.upper.first().or(self.lower.first()).copied();
        for p in self.upper.into_iter().chain(self.lower) {
            ring.push(p);
        }
        if let Some(first) = first {
            ring.push(first);
        }
        ring
    }

    /// Total number of sampled points across both arcs.
    pub fn len(&self) -> usize {
        self.upper.len() + self.lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upper.is_empty() && self.lower.is_empty()
    }
}

/// Sample longitude `k` steps east of the center (west for negative `k`).
#[inline]
fn sample_lon(center: GeoPoint, k: i64, step: f64) -> f64 {
    center.lon + k as f64 * step
}

/// Furthest grid index in direction `sign` (±1) whose sample on the
/// center's parallel is still within `distance_m`.
fn scan_extent(center: GeoPoint, distance_m: f64, step: f64, sign: i64) -> i64 {
    let cap = (180.0 / step).floor() as i64;
    let mut k = 0;
    while k < cap {
        let lon = sample_lon(center, (k + 1) * sign, step);
        if !center.within(center.with_lon(lon), distance_m) {
            break;
        }
        k += 1;
    }
    k * sign
}

/// Bisect each of `count` longitudes, where sample `i` sits at grid index
/// `index_of(i)`.
fn trace_arc<F>(
    center:     GeoPoint,
    distance_m: f64,
    count:      usize,
    index_of:   F,
    direction:  SearchDirection,
    config:     &BoundaryConfig,
) -> BoundaryResult<Vec<GeoPoint>>
where
    F: Fn(usize) -> i64 + Sync,
{
    let sample = |i: usize| {
        let lon = sample_lon(center, index_of(i), config.step_deg);
        bisect_latitude(center, distance_m, lon, direction, config)
            .map(|lat| GeoPoint::new(lon, lat))
    };

    #[cfg(not(feature = "parallel"))]
    {
        (0..count).map(sample).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        (0..count).into_par_iter().map(sample).collect()
    }
}

/// Compute the upper and lower arcs of the circle of radius `distance_m`
/// metres around `center`.
///
/// # Errors
/// - [`GeoError::InvalidInput`](dp_core::GeoError::InvalidInput) for a
///   center outside the coordinate domain, a non-positive distance or an
///   invalid `config`, before any search.
/// - [`BoundaryError::NonConvergence`](crate::BoundaryError::NonConvergence)
///   from any bisection.
pub fn circle_arcs(
    center:     GeoPoint,
    distance_m: f64,
    config:     &BoundaryConfig,
) -> BoundaryResult<CircleArcs> {
    validate_inputs(center, distance_m, config)?;
    let step = config.step_deg;

    let k_max = scan_extent(center, distance_m, step, 1);
    let k_min = scan_extent(center, distance_m, step, -1);
    let count = (k_max - k_min + 1) as usize;
    log::debug!(
        "circle around {center}, {distance_m} m: lon {} ..= {} ({count} samples at {step}°)",
        sample_lon(center, k_min, step),
        sample_lon(center, k_max, step),
    );

    for pole in [SearchDirection::North, SearchDirection::South] {
        if center.within(GeoPoint::new(center.lon, pole.pole()), distance_m) {
            log::warn!(
                "{distance_m} m around {center} reaches the {pole:?} pole; \
                 that side of the boundary is clamped to the pole"
            );
        }
    }

    let upper = trace_arc(
        center, distance_m, count,
        |i| k_max - i as i64,
        SearchDirection::North, config,
    )?;
    let lower = trace_arc(
        center, distance_m, count,
        |i| k_min + i as i64,
        SearchDirection::South, config,
    )?;

    Ok(CircleArcs { upper, lower })
}

/// Closed ring approximating all points `distance_m` metres from `center`.
///
/// Every emitted point is within `distance_m` of the center and at most one
/// step (of latitude, or of longitude at the extremes) short of it.  When
/// `distance_m` is smaller than one step, the ring collapses onto the
/// center's meridian; it is returned anyway and
/// [`Polygon::is_degenerate`] reports it.
///
/// Longitudes are not wrapped: a circle crossing the antimeridian continues
/// past ±180° so the ring stays continuous for plotting.
pub fn circle_boundary(
    center:     GeoPoint,
    distance_m: f64,
    config:     &BoundaryConfig,
) -> BoundaryResult<Polygon> {
    let ring = circle_arcs(center, distance_m, config)?.into_polygon();
    if ring.is_degenerate() {
        log::warn!(
            "{distance_m} m around {center} is below the {}° resolution; \
             boundary collapsed to {} points on one meridian",
            config.step_deg,
            ring.len()
        );
    }
    Ok(ring)
}
