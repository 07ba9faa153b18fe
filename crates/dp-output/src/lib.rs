//! `dp-output`: boundary polygon writers.
//!
//! | Backend          | File contents                                               |
//! |------------------|-------------------------------------------------------------|
//! | [`GeoJsonWriter`] | `FeatureCollection` with one `LineString` feature per polygon |
//! | [`CsvWriter`]     | `lon,lat` header, one row per point                         |
//!
//! Both implement [`BoundaryWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use dp_output::{BoundaryWriter, GeoJsonWriter};
//!
//! let mut w = GeoJsonWriter::new(Path::new("data/polygon.geojson"));
//! w.write_polygon(&ring)?;
//! w.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod geojson;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use geojson::{Feature, FeatureCollection, GeoJsonWriter, Geometry};
pub use writer::BoundaryWriter;
