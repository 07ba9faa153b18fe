//! `dp-core`: foundational types for the `d-poly` boundary generator.
//!
//! This crate is a dependency of every other `dp-*` crate.  It has no `dp-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, haversine distance, degree/metre factors  |
//! | [`translate`]   | `move_north`, `move_east`, `translate`                |
//! | [`polygon`]     | `Polygon` ordered point sequence                      |
//! | [`config`]      | `BoundaryConfig` (resolution step, iteration cap)     |
//! | [`error`]       | `GeoError`, `GeoResult`                               |
//!
//! # Earth model
//!
//! A sphere of radius [`EARTH_RADIUS_M`] (the WGS-84 *equatorial* radius, not
//! the mean radius).  Distances and offsets use the same radius so that
//! [`translate`] inverts [`GeoPoint::distance_m`] along meridians.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod polygon;
pub mod translate;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::BoundaryConfig;
pub use error::{GeoError, GeoResult};
pub use geo::{EARTH_RADIUS_M, GeoPoint, deg_to_m, m_to_deg};
pub use polygon::Polygon;
pub use translate::{move_east, move_north, translate};
