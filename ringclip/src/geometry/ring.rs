use super::Edge;
use crate::core::math::{point_in_ring, winding_number, Extent, Point, PointLocation};
use crate::core::traits::Real;
use crate::ClipError;
use static_aabb2d_index::{
    IndexableNum, StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder,
};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Winding direction of a ring.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RingOrientation {
    Clockwise,
    CounterClockwise,
}

/// Closed loop of points, the segment from the last point back to the first is implied.
///
/// A ring may still hold a duplicate closing point or repeated points as given by the caller, the
/// clipping operations call [Ring::cleaned] before using it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ring<T = f64> {
    pub points: Vec<Point<T>>,
}

impl<T> Ring<T>
where
    T: Real,
{
    pub fn new(points: Vec<Point<T>>) -> Self {
        Ring { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate all segments of the ring including the closing segment.
    pub fn iter_segments(&self) -> impl Iterator<Item = (Point<T>, Point<T>)> + '_ {
        let n = self.points.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    pub fn edges(&self) -> Vec<Edge<T>> {
        self.iter_segments().map(|(s, e)| Edge::new(s, e)).collect()
    }

    /// Signed area using the shoelace formula, positive for counter clockwise rings.
    pub fn signed_area(&self) -> T {
        let mut double_area = T::zero();
        for (v1, v2) in self.iter_segments() {
            double_area = double_area + v1.x * v2.y - v1.y * v2.x;
        }
        double_area / T::two()
    }

    pub fn area(&self) -> T {
        self.signed_area().abs()
    }

    pub fn orientation(&self) -> RingOrientation {
        if self.signed_area() > T::zero() {
            RingOrientation::CounterClockwise
        } else {
            RingOrientation::Clockwise
        }
    }

    pub fn reversed(&self) -> Self {
        Ring::new(self.points.iter().rev().copied().collect())
    }

    /// Returns a copy of the ring wound in the `orientation` given.
    pub fn oriented(&self, orientation: RingOrientation) -> Self {
        if self.orientation() == orientation {
            self.clone()
        } else {
            self.reversed()
        }
    }

    /// Returns a copy with repeated consecutive points and the closing duplicate removed.
    pub fn cleaned(&self, pos_equal_eps: T) -> Self {
        let mut points: Vec<Point<T>> = Vec::with_capacity(self.points.len());
        for &p in self.points.iter() {
            match points.last() {
                Some(last) if last.fuzzy_eq_eps(p, pos_equal_eps) => {}
                _ => points.push(p),
            }
        }

        while points.len() > 1 && points[0].fuzzy_eq_eps(points[points.len() - 1], pos_equal_eps)
        {
            points.pop();
        }

        Ring::new(points)
    }

    /// Check the ring has at least 3 distinct points.
    pub fn validate(&self, pos_equal_eps: T) -> Result<(), ClipError> {
        let count = self.cleaned(pos_equal_eps).len();
        if count < 3 {
            return Err(ClipError::TooFewPoints { count });
        }
        Ok(())
    }

    /// Cleaned copy of the ring, or an error if fewer than 3 distinct points remain.
    pub fn prepared(&self, pos_equal_eps: T) -> Result<Self, ClipError> {
        let cleaned = self.cleaned(pos_equal_eps);
        if cleaned.len() < 3 {
            return Err(ClipError::TooFewPoints {
                count: cleaned.len(),
            });
        }
        Ok(cleaned)
    }

    pub fn extent(&self) -> Option<Extent<T>> {
        Extent::from_points(self.points.iter().copied())
    }

    pub fn winding_number(&self, point: Point<T>) -> i32 {
        winding_number(point, &self.points)
    }

    pub fn locate_point(&self, point: Point<T>, pos_equal_eps: T) -> PointLocation {
        point_in_ring(point, &self.points, pos_equal_eps)
    }

    pub fn translate(&self, dx: T, dy: T) -> Self {
        let offset = Point::new(dx, dy);
        Ring::new(self.points.iter().map(|p| *p + offset).collect())
    }

    /// Creates a spatial index of all the ring edges.
    ///
    /// The edge start index is the key of each edge bounding box in the `StaticAABB2DIndex`.
    ///
    /// # Panics
    ///
    /// Panics if `T` fails to cast to/from a `u16`.
    pub fn create_edge_index(&self) -> StaticAABB2DIndex<T> {
        if self.points.len() < 2 {
            return unwrap_spatial_index(StaticAABB2DIndexBuilder::new(0));
        }

        let mut builder = StaticAABB2DIndexBuilder::new(self.points.len());
        for (v1, v2) in self.iter_segments() {
            let extent = Extent::from_segment(v1, v2);
            builder.add(extent.min_x, extent.min_y, extent.max_x, extent.max_y);
        }

        unwrap_spatial_index(builder)
    }
}

impl<T> Index<usize> for Ring<T> {
    type Output = Point<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

fn unwrap_spatial_index<T>(builder: StaticAABB2DIndexBuilder<T>) -> StaticAABB2DIndex<T>
where
    T: IndexableNum,
{
    match builder.build() {
        Ok(x) => x,
        Err(e) => match e {
            StaticAABB2DIndexBuildError::ItemCountError { .. } => {
                unreachable!("internal library error: count mismatch when building spatial index")
            }
            StaticAABB2DIndexBuildError::NumericCastError => {
                panic!("failed to cast numeric type: {e}")
            }
        },
    }
}
