use crate::core::math::{Extent, Point};
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Open sequence of connected segments.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineString<T = f64> {
    pub points: Vec<Point<T>>,
}

impl<T> LineString<T>
where
    T: Real,
{
    pub fn new(points: Vec<Point<T>>) -> Self {
        LineString { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate the segments `(points[i], points[i + 1])`, no closing segment.
    pub fn segments(&self) -> impl Iterator<Item = (Point<T>, Point<T>)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn extent(&self) -> Option<Extent<T>> {
        Extent::from_points(self.points.iter().copied())
    }
}
