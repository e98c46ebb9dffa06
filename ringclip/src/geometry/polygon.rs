use super::{Ring, RingOrientation};
use crate::core::math::{Extent, Point, PointLocation};
use crate::core::traits::Real;
use crate::ClipError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exterior ring with zero or more hole rings.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon<T = f64> {
    pub exterior: Ring<T>,
    pub holes: Vec<Ring<T>>,
}

impl<T> Polygon<T>
where
    T: Real,
{
    pub fn new(exterior: Ring<T>, holes: Vec<Ring<T>>) -> Self {
        Polygon { exterior, holes }
    }

    pub fn from_exterior(exterior: Ring<T>) -> Self {
        Polygon::new(exterior, Vec::new())
    }

    /// Area enclosed by the exterior minus the area of the holes.
    pub fn area(&self) -> T {
        self.holes
            .iter()
            .fold(self.exterior.area(), |acc, h| acc - h.area())
    }

    pub fn extent(&self) -> Option<Extent<T>> {
        self.exterior.extent()
    }

    /// Copy with the exterior counter clockwise and every hole clockwise.
    pub fn normalized(&self) -> Self {
        Polygon::new(
            self.exterior.oriented(RingOrientation::CounterClockwise),
            self.holes
                .iter()
                .map(|h| h.oriented(RingOrientation::Clockwise))
                .collect(),
        )
    }

    /// Locate `point` relative to the area of the polygon, points inside a hole are outside.
    pub fn locate_point(&self, point: Point<T>, pos_equal_eps: T) -> PointLocation {
        match self.exterior.locate_point(point, pos_equal_eps) {
            PointLocation::Inside => {}
            other => return other,
        }

        for hole in self.holes.iter() {
            match hole.locate_point(point, pos_equal_eps) {
                PointLocation::Inside => return PointLocation::Outside,
                PointLocation::OnBoundary => return PointLocation::OnBoundary,
                PointLocation::Outside => {}
            }
        }

        PointLocation::Inside
    }

    pub fn translate(&self, dx: T, dy: T) -> Self {
        Polygon::new(
            self.exterior.translate(dx, dy),
            self.holes.iter().map(|h| h.translate(dx, dy)).collect(),
        )
    }

    /// Check every ring of the polygon has at least 3 distinct points.
    pub fn validate(&self, pos_equal_eps: T) -> Result<(), ClipError> {
        self.exterior.validate(pos_equal_eps)?;
        for hole in self.holes.iter() {
            hole.validate(pos_equal_eps)?;
        }
        Ok(())
    }
}

impl<T> From<Ring<T>> for Polygon<T>
where
    T: Real,
{
    fn from(exterior: Ring<T>) -> Self {
        Polygon::from_exterior(exterior)
    }
}
