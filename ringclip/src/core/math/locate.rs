use super::{point_on_segment, ExcludeBoundary, Point};
use crate::core::traits::Real;

/// Where a point lies relative to a closed ring.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointLocation {
    Inside,
    Outside,
    OnBoundary,
}

/// Returns true if `p` is left of the directed line through `p0 -> p1`.
#[inline]
pub fn is_left<T>(p0: Point<T>, p1: Point<T>, p: Point<T>) -> bool
where
    T: Real,
{
    (p1 - p0).cross(p - p0) > T::zero()
}

/// Winding number of the implicitly closed ring `points` around `p`.
///
/// Positive for counter clockwise rings enclosing `p`, negative for clockwise, zero when outside.
/// Result is undefined when `p` lies on the ring.
pub fn winding_number<T>(p: Point<T>, points: &[Point<T>]) -> i32
where
    T: Real,
{
    let n = points.len();
    if n < 2 {
        return 0;
    }

    let mut winding = 0;
    for i in 0..n {
        let v1 = points[i];
        let v2 = points[(i + 1) % n];
        if v1.y <= p.y {
            if v2.y > p.y && is_left(v1, v2, p) {
                // upward crossing with point left
                winding += 1;
            }
        } else if v2.y <= p.y && !is_left(v1, v2, p) {
            // downward crossing with point right
            winding -= 1;
        }
    }

    winding
}

/// Locate `p` relative to the implicitly closed ring `points`.
///
/// The boundary is checked first (within `pos_equal_eps`) so points on an edge are never
/// reported inside or outside by the winding test.
///
/// # Examples
///
/// ```
/// # use ringclip::core::math::*;
/// let square = [point(0.0, 0.0), point(4.0, 0.0), point(4.0, 4.0), point(0.0, 4.0)];
/// assert_eq!(point_in_ring(point(2.0, 2.0), &square, 1e-5), PointLocation::Inside);
/// assert_eq!(point_in_ring(point(4.0, 1.0), &square, 1e-5), PointLocation::OnBoundary);
/// assert_eq!(point_in_ring(point(5.0, 1.0), &square, 1e-5), PointLocation::Outside);
/// ```
pub fn point_in_ring<T>(p: Point<T>, points: &[Point<T>], pos_equal_eps: T) -> PointLocation
where
    T: Real,
{
    let n = points.len();
    for i in 0..n {
        let s = points[i];
        let e = points[(i + 1) % n];
        if p.fuzzy_eq_eps(s, pos_equal_eps)
            || point_on_segment(p, s, e, ExcludeBoundary::None, pos_equal_eps)
        {
            return PointLocation::OnBoundary;
        }
    }

    if winding_number(p, points) != 0 {
        PointLocation::Inside
    } else {
        PointLocation::Outside
    }
}
