//! GeoJSON output backend.
//!
//! Each polygon becomes one `Feature` with empty `properties` and a
//! `LineString` geometry.  Circles are written as line strings rather than
//! `Polygon` geometries because rectangle outlines are open.
//!
//! ```json
//! {
//!   "type": "FeatureCollection",
//!   "features": [
//!     {
//!       "type": "Feature",
//!       "properties": {},
//!       "geometry": { "type": "LineString", "coordinates": [[lon, lat], …] }
//!     }
//!   ]
//! }
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use dp_core::Polygon;

use crate::OutputResult;
use crate::writer::BoundaryWriter;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind:     String,
    pub features: Vec<Feature>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind:       String,
    pub properties: Map<String, Value>,
    pub geometry:   Geometry,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString { coordinates: Vec<[f64; 2]> },
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self { kind: "FeatureCollection".into(), features: Vec::new() }
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl Feature {
    /// A `LineString` feature through every point of `polygon`, in order.
    pub fn line_string(polygon: &Polygon) -> Self {
        Self {
            kind:       "Feature".into(),
            properties: Map::new(),
            geometry:   Geometry::LineString {
                coordinates: polygon.iter().map(|p| p.to_array()).collect(),
            },
        }
    }
}

/// Collects polygons and writes them as one `FeatureCollection` on
/// [`finish`](BoundaryWriter::finish).
///
/// The file is created at `finish`, so a writer that is never finished
/// leaves nothing on disk.  A failed `finish` may be retried.
pub struct GeoJsonWriter {
    path:       PathBuf,
    collection: FeatureCollection,
    finished:   bool,
}

impl GeoJsonWriter {
    pub fn new(path: &Path) -> Self {
        Self {
            path:       path.to_path_buf(),
            collection: FeatureCollection::new(),
            finished:   false,
        }
    }

    pub fn collection(&self) -> &FeatureCollection {
        &self.collection
    }
}

impl BoundaryWriter for GeoJsonWriter {
    fn write_polygon(&mut self, polygon: &Polygon) -> OutputResult<()> {
        self.collection.features.push(Feature::line_string(polygon));
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        let mut out = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut out, &self.collection)?;
        out.flush()?;
        self.finished = true;
        Ok(())
    }
}
