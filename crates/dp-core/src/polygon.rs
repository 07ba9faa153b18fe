//! Ordered boundary point sequence.

use crate::GeoPoint;

/// An ordered sequence of boundary points.
///
/// Circle boundaries are closed rings (first point repeated as last).
/// Rectangle boundaries are open outlines.  Neither shape is enforced by the
/// type; use [`is_closed`](Self::is_closed) to check.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Polygon {
    points: Vec<GeoPoint>,
}

impl Polygon {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { points: Vec::with_capacity(n) }
    }

    pub fn push(&mut self, p: GeoPoint) {
        self.points.push(p);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn first(&self) -> Option<GeoPoint> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<GeoPoint> {
        self.points.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeoPoint> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    /// `true` if there are at least two points and the first equals the last
    /// bit-for-bit.
    pub fn is_closed(&self) -> bool {
        self.points.len() >= 2 && self.points.first() == self.points.last()
    }

    /// `true` if every point shares one longitude (or there are no points).
    ///
    /// A circle whose radius is below one resolution step collapses to the
    /// center meridian; it is still returned so callers can decide what to
    /// do with it.
    pub fn is_degenerate(&self) -> bool {
        match self.points.first() {
            None => true,
            Some(first) => self.points.iter().all(|p| p.lon == first.lon),
        }
    }

    /// Component-wise `(min, max)` corners, or `None` when empty.
    pub fn bounds(&self) -> Option<(GeoPoint, GeoPoint)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (
                GeoPoint::new(lo.lon.min(p.lon), lo.lat.min(p.lat)),
                GeoPoint::new(hi.lon.max(p.lon), hi.lat.max(p.lat)),
            )
        }))
    }
}

impl From<Vec<GeoPoint>> for Polygon {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }
}

impl FromIterator<GeoPoint> for Polygon {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
