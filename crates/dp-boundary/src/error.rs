//! Boundary-generation error type.

use thiserror::Error;

use dp_core::GeoError;

/// Errors produced by `dp-boundary`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BoundaryError {
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// Bisection ran out of iterations, or its midpoint stopped moving,
    /// before the bracket narrowed to the tolerance.
    #[error("latitude bisection at longitude {lon} did not converge after {iterations} iterations")]
    NonConvergence { lon: f64, iterations: u32 },
}

pub type BoundaryResult<T> = Result<T, BoundaryError>;
