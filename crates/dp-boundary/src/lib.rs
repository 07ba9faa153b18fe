//! `dp-boundary`: distance-boundary polygons around a center point.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`bisect`]  | `SearchDirection`, `bisect_latitude`                        |
//! | [`circle`]  | `circle_arcs`, `circle_boundary`, `CircleArcs`              |
//! | [`rect`]    | `rectangle_boundary`                                        |
//! | [`shape`]   | `Shape` selector                                            |
//! | [`error`]   | `BoundaryError`, `BoundaryResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Circle bisections run on Rayon's thread pool.             |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `dp-core` types.     |
//!
//! # Quick-start
//!
//! ```
//! use dp_boundary::circle_boundary;
//! use dp_core::{BoundaryConfig, GeoPoint};
//!
//! let ring = circle_boundary(GeoPoint::new(0.0, 0.0), 1_000.0, &BoundaryConfig::new(1e-3))?;
//! assert!(ring.is_closed());
//! # Ok::<(), dp_boundary::BoundaryError>(())
//! ```

pub mod bisect;
pub mod circle;
pub mod error;
pub mod rect;
pub mod shape;

#[cfg(test)]
mod tests;

pub use bisect::{SearchDirection, bisect_latitude};
pub use circle::{CircleArcs, circle_arcs, circle_boundary};
pub use error::{BoundaryError, BoundaryResult};
pub use rect::rectangle_boundary;
pub use shape::Shape;

use dp_core::{BoundaryConfig, GeoError, GeoPoint};

/// Shared argument check for every generator: a center inside the coordinate
/// domain, a positive, finite target distance and a valid config.  Runs
/// before any search begins.
pub(crate) fn validate_inputs(
    center:     GeoPoint,
    distance_m: f64,
    config:     &BoundaryConfig,
) -> BoundaryResult<()> {
    center.validate()?;
    if !distance_m.is_finite() || distance_m <= 0.0 {
        return Err(GeoError::InvalidInput(format!(
            "target distance must be a positive number of metres, got {distance_m}"
        ))
        .into());
    }
    config.validate()?;
    Ok(())
}
