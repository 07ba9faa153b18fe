//! Latitude bisection along a fixed longitude.
//!
//! A spherical cap meets a meridian in a single arc, so on the segment from
//! the center's latitude to either pole the points within the target distance
//! form one interval starting at the center's latitude (provided the sample
//! longitude is itself in range there).  Bisection on that segment finds the
//! outermost latitude still within the target distance.
//!
//! ```text
//!   inside ────────── mid ────────── outside
//!   (center.lat)                     (±90°)
//!      within d? → inside = mid
//!      else      → outside = mid
//! ```
//!
//! When the target distance reaches past the pole, the pole end is never
//! moved and the search walks up to it.  The result is the pole latitude
//! (within tolerance), not an error.

use dp_core::{BoundaryConfig, GeoPoint};

use crate::{BoundaryError, BoundaryResult};

/// Which pole the search moves toward.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SearchDirection {
    /// Toward +90°.
    North,
    /// Toward −90°.
    South,
}

impl SearchDirection {
    /// Latitude of the target pole.
    #[inline]
    pub fn pole(self) -> f64 {
        match self {
            SearchDirection::North => 90.0,
            SearchDirection::South => -90.0,
        }
    }
}

/// Greatest (north) or least (south) latitude at `lon` whose distance from
/// `center` is still `<= distance_m`.
///
/// Stops once the bracket is no wider than `config.step_deg` and returns the
/// inside bound, so the result is never farther than `distance_m` but may
/// undershoot it by up to one step of latitude.
///
/// # Errors
/// [`BoundaryError::NonConvergence`] if `config.max_bisect_iters` halvings
/// are not enough, or if the midpoint stops changing because the tolerance is
/// finer than `f64` can represent at this latitude.
pub fn bisect_latitude(
    center:     GeoPoint,
    distance_m: f64,
    lon:        f64,
    direction:  SearchDirection,
    config:     &BoundaryConfig,
) -> BoundaryResult<f64> {
    let pole = direction.pole();
    let mut inside  = center.lat;
    let mut outside = pole;
    let mut iterations = 0u32;

    while (outside - inside).abs() > config.step_deg {
        let mid = (inside + outside) * 0.5;
        if iterations == config.max_bisect_iters || mid == inside || mid == outside {
            return Err(BoundaryError::NonConvergence { lon, iterations });
        }
        if center.within(GeoPoint::new(lon, mid), distance_m) {
            inside = mid;
        } else {
            outside = mid;
        }
        iterations += 1;
    }

    if outside == pole && center.within(GeoPoint::new(lon, pole), distance_m) {
        log::debug!(
            "target distance {distance_m} m from {center} encloses the {direction:?} pole; \
             boundary at lon {lon} clamped to {inside}"
        );
    }

    log::trace!("bisect lon={lon} {direction:?}: lat={inside} after {iterations} iterations");
    Ok(inside)
}
