//! CSV output backend.
//!
//! One `lon,lat` row per point, in polygon order.  Successive polygons are
//! appended without a separator.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use dp_core::Polygon;

use crate::OutputResult;
use crate::writer::BoundaryWriter;

/// Writes boundary points to a CSV file.
pub struct CsvWriter {
    points:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create (or truncate) `path` and write the header row.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let mut points = Writer::from_path(path)?;
        points.write_record(["lon", "lat"])?;
        Ok(Self { points, finished: false })
    }
}

impl BoundaryWriter for CsvWriter {
    fn write_polygon(&mut self, polygon: &Polygon) -> OutputResult<()> {
        for p in polygon {
            self.points.write_record(&[p.lon.to_string(), p.lat.to_string()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.points.flush()?;
        Ok(())
    }
}
