use crate::core::math::{Extent, Point};
use crate::core::traits::Real;

/// A segment between two consecutive ring vertexes with its cached extent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Edge<T = f64> {
    pub start: Point<T>,
    pub end: Point<T>,
    pub extent: Extent<T>,
}

impl<T> Edge<T>
where
    T: Real,
{
    pub fn new(start: Point<T>, end: Point<T>) -> Self {
        Edge {
            start,
            end,
            extent: Extent::from_segment(start, end),
        }
    }

    pub fn length(&self) -> T {
        (self.end - self.start).length()
    }

    pub fn midpoint(&self) -> Point<T> {
        self.start.midpoint(self.end)
    }
}
