//! Geometry types the clipping engine consumes and produces.
//!
//! All of them are plain owned coordinate sequences. Operations never mutate their inputs, results
//! are always freshly allocated.
mod edge;
mod line_string;
mod multi_polygon;
mod polygon;
mod ring;

pub use edge::Edge;
pub use line_string::LineString;
pub use multi_polygon::MultiPolygon;
pub use polygon::Polygon;
pub use ring::{Ring, RingOrientation};

use crate::core::math::Point;
use crate::core::traits::Real;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tag identifying the kind of a [Geometry], used for operation dispatch and error reporting.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPolygon,
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolygon => "MultiPolygon",
        };
        f.write_str(name)
    }
}

/// Any of the geometry kinds the operations in this crate accept.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geometry<T = f64> {
    Point(Point<T>),
    LineString(LineString<T>),
    Polygon(Polygon<T>),
    MultiPolygon(MultiPolygon<T>),
}

impl<T> Geometry<T>
where
    T: Real,
{
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }
}

impl<T> From<Point<T>> for Geometry<T> {
    fn from(value: Point<T>) -> Self {
        Geometry::Point(value)
    }
}

impl<T> From<LineString<T>> for Geometry<T> {
    fn from(value: LineString<T>) -> Self {
        Geometry::LineString(value)
    }
}

impl<T> From<Polygon<T>> for Geometry<T> {
    fn from(value: Polygon<T>) -> Self {
        Geometry::Polygon(value)
    }
}

impl<T> From<MultiPolygon<T>> for Geometry<T> {
    fn from(value: MultiPolygon<T>) -> Self {
        Geometry::MultiPolygon(value)
    }
}
