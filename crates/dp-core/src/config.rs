//! Boundary generation settings.
//!
//! # The resolution knob
//!
//! `step_deg` plays two roles:
//!
//! - the longitude increment between consecutive circle samples (and the
//!   spacing of rectangle edge points), and
//! - the latitude width at which bisection stops.
//!
//! One degree of longitude shrinks with `cos(lat)` while one degree of
//! latitude does not, so the effective metric resolution varies across the
//! globe.  This is a deliberate single "fineness" setting; pick a step that
//! suits the latitude and distance in use.

use crate::{GeoError, GeoResult};

/// Settings threaded through every boundary generator call.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryConfig {
    /// Sampling step and bisection tolerance, in degrees.
    pub step_deg: f64,

    /// Upper bound on halvings per bisection.  Bisection of the 90° span
    /// needs `log2(90 / step_deg)` halvings, so this only trips when the
    /// tolerance is below what `f64` can resolve.
    pub max_bisect_iters: u32,
}

impl BoundaryConfig {
    pub const DEFAULT_STEP_DEG: f64 = 1e-5;
    pub const DEFAULT_MAX_BISECT_ITERS: u32 = 200;

    pub fn new(step_deg: f64) -> Self {
        Self { step_deg, ..Self::default() }
    }

    pub fn with_max_bisect_iters(mut self, iters: u32) -> Self {
        self.max_bisect_iters = iters;
        self
    }

    /// Reject steps that are non-finite, non-positive, or wider than a
    /// quarter turn, and a zero iteration cap.
    pub fn validate(&self) -> GeoResult<()> {
        if !self.step_deg.is_finite() || self.step_deg <= 0.0 {
            return Err(GeoError::InvalidInput(format!(
                "step must be a positive number of degrees, got {}",
                self.step_deg
            )));
        }
        if self.step_deg > 90.0 {
            return Err(GeoError::InvalidInput(format!(
                "step {}° exceeds 90°",
                self.step_deg
            )));
        }
        if self.max_bisect_iters == 0 {
            return Err(GeoError::InvalidInput(
                "max_bisect_iters must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            step_deg:         Self::DEFAULT_STEP_DEG,
            max_bisect_iters: Self::DEFAULT_MAX_BISECT_ITERS,
        }
    }
}
