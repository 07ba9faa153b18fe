//! The `BoundaryWriter` trait implemented by all backend writers.

use dp_core::Polygon;

use crate::OutputResult;

/// Trait implemented by the GeoJSON and CSV writers.
pub trait BoundaryWriter {
    /// Append one polygon.
    fn write_polygon(&mut self, polygon: &Polygon) -> OutputResult<()>;

    /// Flush and close the underlying file.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
