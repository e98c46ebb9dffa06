use super::Point;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use ringclip::core::math::*;
/// let (min_val, max_val) = min_max(8.0, 4.0);
/// assert_eq!(min_val, 4.0);
/// assert_eq!(max_val, 8.0);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

#[inline]
pub fn dist_squared<T>(p0: Point<T>, p1: Point<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Parametric value of the projection of `p` onto the line through `p0 -> p1`.
///
/// Returns zero for a zero length segment.
#[inline]
pub fn parametric_from_point<T>(p0: Point<T>, p1: Point<T>, p: Point<T>) -> T
where
    T: Real,
{
    let v = p1 - p0;
    let len2 = v.length_squared();
    if len2 == T::zero() {
        return T::zero();
    }
    (p - p0).dot(v) / len2
}
