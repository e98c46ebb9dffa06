use super::{min_max, Point};
use crate::core::traits::Real;

/// Result of intersecting two line segments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SegIntr<T>
where
    T: Real,
{
    /// Segments do not touch, are parallel and apart, or one of them has zero length.
    NoIntersection,
    /// Segments meet at a single point.
    CrossingPoint {
        point: Point<T>,
        /// Parametric position of `point` along the first segment, in `[0, 1]`.
        alpha_a: T,
        /// Parametric position of `point` along the second segment, in `[0, 1]`.
        alpha_b: T,
    },
    /// Segments lie on the same line and overlap (possibly only at an end point).
    Collinear,
}

/// Finds the intersect between the segments `a1 -> a2` and `b1 -> b2`.
///
/// Uses the perpendicular dot product (2D cross product) of the segment directions. Parametric
/// range checks are scaled by segment length so `pos_equal_eps` is applied in position units
/// regardless of how long the segments are.
///
/// # Examples
///
/// ```
/// # use ringclip::core::math::*;
/// let result = segment_intersection(
///     point(0.0, 0.0),
///     point(1.0, 0.0),
///     point(0.5, -1.0),
///     point(0.5, 1.0),
///     1e-5,
/// );
/// if let SegIntr::CrossingPoint { point, alpha_a, alpha_b } = result {
///     assert_eq!(alpha_a, 0.5);
///     assert_eq!(alpha_b, 0.5);
///     assert!(point.fuzzy_eq(Point::new(0.5, 0.0)));
/// } else {
///     unreachable!("expected crossing point");
/// }
/// ```
pub fn segment_intersection<T>(
    a1: Point<T>,
    a2: Point<T>,
    b1: Point<T>,
    b2: Point<T>,
    pos_equal_eps: T,
) -> SegIntr<T>
where
    T: Real,
{
    use SegIntr::*;

    let v = a2 - a1;
    let u = b2 - b1;
    let len_a = v.length();
    let len_b = u.length();

    if len_a.fuzzy_eq_zero_eps(pos_equal_eps) || len_b.fuzzy_eq_zero_eps(pos_equal_eps) {
        return NoIntersection;
    }

    let v_cross_u = v.cross(u);
    // sine of the angle between the segments
    let sin_angle = v_cross_u / (len_a * len_b);

    if !sin_angle.fuzzy_eq_zero() {
        let w = a1 - b1;
        let alpha_a = u.cross(w) / v_cross_u;
        let alpha_b = v.cross(w) / v_cross_u;
        if !(alpha_a * len_a).fuzzy_in_range_eps(T::zero(), len_a, pos_equal_eps)
            || !(alpha_b * len_b).fuzzy_in_range_eps(T::zero(), len_b, pos_equal_eps)
        {
            return NoIntersection;
        }

        let alpha_a = clamp_unit(alpha_a);
        let alpha_b = clamp_unit(alpha_b);
        return CrossingPoint {
            point: a1.lerp(a2, alpha_a),
            alpha_a,
            alpha_b,
        };
    }

    // parallel, check distance of b from the line through a
    let dist_b1 = (v.cross(b1 - a1) / len_a).abs();
    let dist_b2 = (v.cross(b2 - a1) / len_a).abs();
    if dist_b1 > pos_equal_eps || dist_b2 > pos_equal_eps {
        return NoIntersection;
    }

    // collinear, project b onto a (in length units) and check overlap
    let t1 = (b1 - a1).dot(v) / len_a;
    let t2 = (b2 - a1).dot(v) / len_a;
    let (t_min, t_max) = min_max(t1, t2);
    if t_min > len_a + pos_equal_eps || t_max < -pos_equal_eps {
        return NoIntersection;
    }

    Collinear
}

#[inline]
fn clamp_unit<T>(t: T) -> T
where
    T: Real,
{
    if t < T::zero() {
        T::zero()
    } else if t > T::one() {
        T::one()
    } else {
        t
    }
}

/// Controls which end points of a segment count as being "on" the segment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ExcludeBoundary {
    /// Both end points are on the segment.
    #[default]
    None,
    /// The start point is not on the segment.
    Start,
    /// The end point is not on the segment.
    End,
    /// Neither end point is on the segment, only its interior.
    Both,
}

impl ExcludeBoundary {
    #[inline]
    pub fn excludes_start(self) -> bool {
        matches!(self, ExcludeBoundary::Start | ExcludeBoundary::Both)
    }

    #[inline]
    pub fn excludes_end(self) -> bool {
        matches!(self, ExcludeBoundary::End | ExcludeBoundary::Both)
    }
}

/// Test if `p` lies on the segment `start -> end`.
///
/// End points are included or excluded according to `exclude`. A zero length segment never
/// contains any point.
///
/// # Examples
///
/// ```
/// # use ringclip::core::math::*;
/// let s = point(0.0, 0.0);
/// let e = point(4.0, 0.0);
/// assert!(point_on_segment(point(2.0, 0.0), s, e, ExcludeBoundary::Both, 1e-5));
/// assert!(point_on_segment(s, s, e, ExcludeBoundary::End, 1e-5));
/// assert!(!point_on_segment(s, s, e, ExcludeBoundary::Start, 1e-5));
/// assert!(!point_on_segment(point(2.0, 0.1), s, e, ExcludeBoundary::None, 1e-5));
/// ```
pub fn point_on_segment<T>(
    p: Point<T>,
    start: Point<T>,
    end: Point<T>,
    exclude: ExcludeBoundary,
    pos_equal_eps: T,
) -> bool
where
    T: Real,
{
    let v = end - start;
    let len = v.length();
    if len.fuzzy_eq_zero_eps(pos_equal_eps) {
        return false;
    }

    let w = p - start;
    if (v.cross(w) / len).abs() > pos_equal_eps {
        return false;
    }

    let t = w.dot(v) / len;
    if !t.fuzzy_in_range_eps(T::zero(), len, pos_equal_eps) {
        return false;
    }

    if p.fuzzy_eq_eps(start, pos_equal_eps) {
        return !exclude.excludes_start();
    }

    if p.fuzzy_eq_eps(end, pos_equal_eps) {
        return !exclude.excludes_end();
    }

    true
}
