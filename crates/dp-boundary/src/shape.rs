//! Boundary shape selector.

use dp_core::{BoundaryConfig, GeoPoint, Polygon};

use crate::{BoundaryResult, circle_boundary, rectangle_boundary};

/// Which outline to generate around a center.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Shape {
    /// Closed ring at a fixed geodesic distance.
    #[default]
    Circle,
    /// Open axis-aligned square outline with the distance as half-width.
    Rectangle,
}

impl Shape {
    pub fn generate(
        self,
        center:     GeoPoint,
        distance_m: f64,
        config:     &BoundaryConfig,
    ) -> BoundaryResult<Polygon> {
        match self {
            Shape::Circle    => circle_boundary(center, distance_m, config),
            Shape::Rectangle => rectangle_boundary(center, distance_m, config),
        }
    }

    /// `true` if the generated polygon repeats its first point at the end.
    #[inline]
    pub fn is_closed(self) -> bool {
        matches!(self, Shape::Circle)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Circle    => "circle",
            Shape::Rectangle => "rectangle",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
