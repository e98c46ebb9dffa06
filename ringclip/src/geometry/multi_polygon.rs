use super::Polygon;
use crate::core::math::Extent;
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Collection of polygons.
///
/// Nothing stops the polygons from overlapping, use the correction operations to make them
/// disjoint.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiPolygon<T = f64> {
    pub polygons: Vec<Polygon<T>>,
}

impl<T> MultiPolygon<T>
where
    T: Real,
{
    pub fn new(polygons: Vec<Polygon<T>>) -> Self {
        MultiPolygon { polygons }
    }

    /// Sum of the polygon areas, overlapping regions are counted more than once.
    pub fn area(&self) -> T {
        self.polygons
            .iter()
            .fold(T::zero(), |acc, p| acc + p.area())
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polygon<T>> {
        self.polygons.iter()
    }

    pub fn extent(&self) -> Option<Extent<T>> {
        self.polygons
            .iter()
            .filter_map(|p| p.extent())
            .reduce(|acc, e| acc.union(&e))
    }
}

impl<T> From<Polygon<T>> for MultiPolygon<T>
where
    T: Real,
{
    fn from(polygon: Polygon<T>) -> Self {
        MultiPolygon::new(vec![polygon])
    }
}

impl<T> FromIterator<Polygon<T>> for MultiPolygon<T>
where
    T: Real,
{
    fn from_iter<I: IntoIterator<Item = Polygon<T>>>(iter: I) -> Self {
        MultiPolygon::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for MultiPolygon<T> {
    type Item = Polygon<T>;
    type IntoIter = std::vec::IntoIter<Polygon<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a MultiPolygon<T> {
    type Item = &'a Polygon<T>;
    type IntoIter = std::slice::Iter<'a, Polygon<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}
