use super::{min_max, Point};
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis aligned bounding box.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Extent<T = f64> {
    pub min_x: T,
    pub min_y: T,
    pub max_x: T,
    pub max_y: T,
}

impl<T> Extent<T>
where
    T: Real,
{
    pub fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Extent {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn from_point(p: Point<T>) -> Self {
        Extent::new(p.x, p.y, p.x, p.y)
    }

    /// Extent of the segment `p0 -> p1`.
    pub fn from_segment(p0: Point<T>, p1: Point<T>) -> Self {
        let (min_x, max_x) = min_max(p0.x, p1.x);
        let (min_y, max_y) = min_max(p0.y, p1.y);
        Extent::new(min_x, min_y, max_x, max_y)
    }

    /// Extent of all points given, `None` if there are no points.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point<T>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Extent::from_point(first), |acc, p| {
            acc.union(&Extent::from_point(p))
        }))
    }

    pub fn union(&self, other: &Self) -> Self {
        Extent::new(
            min_max(self.min_x, other.min_x).0,
            min_max(self.min_y, other.min_y).0,
            min_max(self.max_x, other.max_x).1,
            min_max(self.max_y, other.max_y).1,
        )
    }

    /// Inclusive overlap test, boxes that only share an edge or a corner overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    /// Extent grown by `amount` on every side.
    pub fn expanded(&self, amount: T) -> Self {
        Extent::new(
            self.min_x - amount,
            self.min_y - amount,
            self.max_x + amount,
            self.max_y + amount,
        )
    }

    pub fn center(&self) -> Point<T> {
        Point::new(
            (self.min_x + self.max_x) * T::half(),
            (self.min_y + self.max_y) * T::half(),
        )
    }

    pub fn width(&self) -> T {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> T {
        self.max_y - self.min_y
    }

    pub fn contains_point(&self, p: Point<T>) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}
