//! Core error type.
//!
//! `dp-boundary` wraps `GeoError` as one variant of its own enum; the binary
//! converts everything into `anyhow::Error`.

use thiserror::Error;

/// Errors raised by point arithmetic and configuration validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// East-west offsets divide by `cos(lat)`, which vanishes at the poles.
    #[error("east-west offset is undefined at latitude {lat}° (pole)")]
    PoleSingularity { lat: f64 },
}

/// Shorthand result type for `dp-core`.
pub type GeoResult<T> = Result<T, GeoError>;
