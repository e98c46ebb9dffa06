//! Spatial predicates between any two [Geometry] values.
//!
//! Every predicate has a form using default [ClipOptions] and an `_opt` form taking options
//! explicitly. Point and line tests are done directly with the segment math, area/area coverage
//! uses the clipping core.
use crate::clip::{clip_polygons, ClipOp, ClipOptions};
use crate::core::math::{
    parametric_from_point, point_on_segment, segment_intersection, ExcludeBoundary, Point,
    PointLocation, SegIntr,
};
use crate::core::traits::Real;
use crate::geometry::{Geometry, LineString, Polygon};
use crate::ClipError;
use std::cmp::Ordering;

/// Borrowed view of a geometry reduced to its dimension.
enum Shape<'a, T> {
    Point(Point<T>),
    Line(&'a LineString<T>),
    Area(&'a [Polygon<T>]),
}

fn shape<T>(geometry: &Geometry<T>) -> Shape<'_, T>
where
    T: Real,
{
    match geometry {
        Geometry::Point(p) => Shape::Point(*p),
        Geometry::LineString(l) => Shape::Line(l),
        Geometry::Polygon(p) => Shape::Area(std::slice::from_ref(p)),
        Geometry::MultiPolygon(mp) => Shape::Area(&mp.polygons),
    }
}

/// Returns true if `a` and `b` share at least one point, boundary contact included.
///
/// Defined for every pair of geometry kinds and symmetric.
///
/// # Examples
///
/// ```
/// # use ringclip::*;
/// let a: Geometry = polygon![[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]].into();
/// let b: Geometry = polygon![[(1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0)]].into();
/// let c: Geometry = polygon![[(3.0, 0.0), (4.0, 0.0), (4.0, 1.0), (3.0, 1.0)]].into();
/// assert!(intersects(&a, &b));
/// assert!(disjoint(&a, &c));
/// ```
pub fn intersects<T>(a: &Geometry<T>, b: &Geometry<T>) -> bool
where
    T: Real,
{
    intersects_opt(a, b, &ClipOptions::new())
}

pub fn intersects_opt<T>(a: &Geometry<T>, b: &Geometry<T>, options: &ClipOptions<T>) -> bool
where
    T: Real,
{
    let eps = options.pos_equal_eps;
    match (shape(a), shape(b)) {
        (Shape::Point(p), Shape::Point(q)) => p.fuzzy_eq_eps(q, eps),
        (Shape::Point(p), Shape::Line(l)) | (Shape::Line(l), Shape::Point(p)) => {
            point_on_line(p, l, eps)
        }
        (Shape::Point(p), Shape::Area(polys)) | (Shape::Area(polys), Shape::Point(p)) => {
            locate_in_area(p, polys, eps) != PointLocation::Outside
        }
        (Shape::Line(la), Shape::Line(lb)) => {
            let cutters: Vec<_> = la.segments().collect();
            split_samples(lb, &cutters, eps)
                .into_iter()
                .any(|p| point_on_line(p, la, eps))
        }
        (Shape::Line(l), Shape::Area(polys)) | (Shape::Area(polys), Shape::Line(l)) => {
            line_locations(l, polys, eps)
                .into_iter()
                .any(|loc| loc != PointLocation::Outside)
        }
        (Shape::Area(pa), Shape::Area(pb)) => areas_intersect(pa, pb, eps),
    }
}

/// Returns true if `a` and `b` share no point.
pub fn disjoint<T>(a: &Geometry<T>, b: &Geometry<T>) -> bool
where
    T: Real,
{
    !intersects(a, b)
}

pub fn disjoint_opt<T>(a: &Geometry<T>, b: &Geometry<T>, options: &ClipOptions<T>) -> bool
where
    T: Real,
{
    !intersects_opt(a, b, options)
}

/// Returns true if every point of `b` lies in `a` (interior or boundary).
///
/// Covering is asymmetric: a line covers a point on it but a point does not cover a line passing
/// through it. Points and lines never cover an area.
///
/// # Examples
///
/// ```
/// # use ringclip::*;
/// let line: Geometry = LineString::new(vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0)]).into();
/// let p: Geometry = Point::new(2.0, 0.0).into();
/// assert!(covers(&line, &p).unwrap());
/// assert!(!covers(&p, &line).unwrap());
/// ```
pub fn covers<T>(a: &Geometry<T>, b: &Geometry<T>) -> Result<bool, ClipError>
where
    T: Real,
{
    covers_opt(a, b, &ClipOptions::new())
}

pub fn covers_opt<T>(
    a: &Geometry<T>,
    b: &Geometry<T>,
    options: &ClipOptions<T>,
) -> Result<bool, ClipError>
where
    T: Real,
{
    let eps = options.pos_equal_eps;
    let result = match (shape(a), shape(b)) {
        (Shape::Point(p), Shape::Point(q)) => p.fuzzy_eq_eps(q, eps),
        // only a line collapsed onto the point is covered by it
        (Shape::Point(p), Shape::Line(l)) => {
            !l.is_empty() && l.points.iter().all(|q| q.fuzzy_eq_eps(p, eps))
        }
        (Shape::Point(_), Shape::Area(_)) | (Shape::Line(_), Shape::Area(_)) => false,
        (Shape::Line(l), Shape::Point(p)) => point_on_line(p, l, eps),
        (Shape::Line(la), Shape::Line(lb)) => {
            let cutters: Vec<_> = la.segments().collect();
            split_samples(lb, &cutters, eps)
                .into_iter()
                .all(|p| point_on_line(p, la, eps))
        }
        (Shape::Area(polys), Shape::Point(p)) => {
            locate_in_area(p, polys, eps) != PointLocation::Outside
        }
        (Shape::Area(polys), Shape::Line(l)) => line_locations(l, polys, eps)
            .into_iter()
            .all(|loc| loc != PointLocation::Outside),
        (Shape::Area(pa), Shape::Area(pb)) => uncovered_area(pa, pb, options)? <= eps,
    };

    Ok(result)
}

/// Returns true if every point of `a` lies in `b`, same as `covers(b, a)`.
pub fn covered_by<T>(a: &Geometry<T>, b: &Geometry<T>) -> Result<bool, ClipError>
where
    T: Real,
{
    covers(b, a)
}

pub fn covered_by_opt<T>(
    a: &Geometry<T>,
    b: &Geometry<T>,
    options: &ClipOptions<T>,
) -> Result<bool, ClipError>
where
    T: Real,
{
    covers_opt(b, a, options)
}

/// Returns true if `a` crosses `b`.
///
/// Two lines cross when some crossing point lies strictly inside a segment of each line and the
/// lines have no collinear overlap. Crossings exactly at a vertex of either line are not reported.
/// A line and an area cross when the line has parts both inside and outside the area. Every
/// other pair of kinds returns [ClipError::Unsupported].
///
/// # Examples
///
/// ```
/// # use ringclip::*;
/// let a: Geometry = LineString::new(vec![Point::new(0.0, 0.0), Point::new(2.0, 2.0)]).into();
/// let b: Geometry = LineString::new(vec![Point::new(0.0, 2.0), Point::new(2.0, 0.0)]).into();
/// assert!(crosses(&a, &b).unwrap());
///
/// let p: Geometry = Point::new(1.0, 1.0).into();
/// assert!(crosses(&a, &p).is_err());
/// ```
pub fn crosses<T>(a: &Geometry<T>, b: &Geometry<T>) -> Result<bool, ClipError>
where
    T: Real,
{
    crosses_opt(a, b, &ClipOptions::new())
}

pub fn crosses_opt<T>(
    a: &Geometry<T>,
    b: &Geometry<T>,
    options: &ClipOptions<T>,
) -> Result<bool, ClipError>
where
    T: Real,
{
    let eps = options.pos_equal_eps;
    match (shape(a), shape(b)) {
        (Shape::Line(la), Shape::Line(lb)) => Ok(lines_cross(la, lb, eps)),
        (Shape::Line(l), Shape::Area(polys)) | (Shape::Area(polys), Shape::Line(l)) => {
            let locations = line_locations(l, polys, eps);
            let inside = locations.iter().any(|&loc| loc == PointLocation::Inside);
            let outside = locations.iter().any(|&loc| loc == PointLocation::Outside);
            Ok(inside && outside)
        }
        _ => Err(ClipError::Unsupported {
            op: "crosses",
            first: a.kind(),
            second: b.kind(),
        }),
    }
}

fn lines_cross<T>(la: &LineString<T>, lb: &LineString<T>, eps: T) -> bool
where
    T: Real,
{
    let mut found_crossing = false;
    for (a1, a2) in la.segments() {
        for (b1, b2) in lb.segments() {
            match segment_intersection(a1, a2, b1, b2, eps) {
                SegIntr::NoIntersection => {}
                SegIntr::Collinear => return false,
                SegIntr::CrossingPoint { point, .. } => {
                    if point_on_segment(point, a1, a2, ExcludeBoundary::Both, eps)
                        && point_on_segment(point, b1, b2, ExcludeBoundary::Both, eps)
                    {
                        found_crossing = true;
                    }
                }
            }
        }
    }

    found_crossing
}

fn area_segments<T>(polygons: &[Polygon<T>]) -> Vec<(Point<T>, Point<T>)>
where
    T: Real,
{
    let mut result = Vec::new();
    for polygon in polygons {
        result.extend(polygon.exterior.iter_segments());
        for hole in polygon.holes.iter() {
            result.extend(hole.iter_segments());
        }
    }
    result
}

fn point_on_line<T>(p: Point<T>, line: &LineString<T>, eps: T) -> bool
where
    T: Real,
{
    line.points.iter().any(|q| q.fuzzy_eq_eps(p, eps))
        || line
            .segments()
            .any(|(s, e)| point_on_segment(p, s, e, ExcludeBoundary::None, eps))
}

/// Location of `p` in the union of `polygons`.
fn locate_in_area<T>(p: Point<T>, polygons: &[Polygon<T>], eps: T) -> PointLocation
where
    T: Real,
{
    let mut result = PointLocation::Outside;
    for polygon in polygons {
        match polygon.locate_point(p, eps) {
            PointLocation::Inside => return PointLocation::Inside,
            PointLocation::OnBoundary => result = PointLocation::OnBoundary,
            PointLocation::Outside => {}
        }
    }
    result
}

/// Sample points of `line` split at every place it meets one of the `cutters`.
///
/// Returns the end points of every sub-span plus its midpoint, so each returned midpoint lies on
/// a span that does not touch any cutter in its interior.
fn split_samples<T>(line: &LineString<T>, cutters: &[(Point<T>, Point<T>)], eps: T) -> Vec<Point<T>>
where
    T: Real,
{
    if line.len() == 1 {
        return line.points.clone();
    }

    let mut samples = Vec::new();
    for (s, e) in line.segments() {
        let mut params = vec![T::zero(), T::one()];
        for &(c1, c2) in cutters {
            match segment_intersection(s, e, c1, c2, eps) {
                SegIntr::NoIntersection => {}
                SegIntr::CrossingPoint { alpha_a, .. } => params.push(alpha_a),
                SegIntr::Collinear => {
                    for c in [c1, c2] {
                        let t = parametric_from_point(s, e, c);
                        if t > T::zero() && t < T::one() {
                            params.push(t);
                        }
                    }
                }
            }
        }

        params.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        samples.push(s);
        for w in params.windows(2) {
            let start = s.lerp(e, w[0]);
            let end = s.lerp(e, w[1]);
            if start.fuzzy_eq_eps(end, eps) {
                continue;
            }
            samples.push(start.midpoint(end));
            samples.push(end);
        }
    }

    samples
}

fn line_locations<T>(line: &LineString<T>, polygons: &[Polygon<T>], eps: T) -> Vec<PointLocation>
where
    T: Real,
{
    let cutters = area_segments(polygons);
    split_samples(line, &cutters, eps)
        .into_iter()
        .map(|p| locate_in_area(p, polygons, eps))
        .collect()
}

fn areas_intersect<T>(pa: &[Polygon<T>], pb: &[Polygon<T>], eps: T) -> bool
where
    T: Real,
{
    let vertex_in = |from: &[Polygon<T>], into: &[Polygon<T>]| {
        from.iter().any(|p| {
            p.exterior
                .points
                .iter()
                .any(|&v| locate_in_area(v, into, eps) != PointLocation::Outside)
        })
    };

    if vertex_in(pa, pb) || vertex_in(pb, pa) {
        return true;
    }

    let segs_a = area_segments(pa);
    let segs_b = area_segments(pb);
    segs_a.iter().any(|&(a1, a2)| {
        segs_b.iter().any(|&(b1, b2)| {
            !matches!(
                segment_intersection(a1, a2, b1, b2, eps),
                SegIntr::NoIntersection
            )
        })
    })
}

/// Area of `pb` not covered by `pa`.
fn uncovered_area<T>(
    pa: &[Polygon<T>],
    pb: &[Polygon<T>],
    options: &ClipOptions<T>,
) -> Result<T, ClipError>
where
    T: Real,
{
    let mut total = T::zero();
    for polygon in pb {
        let mut pieces = vec![polygon.clone()];
        for cover in pa {
            let mut next = Vec::new();
            for piece in pieces.iter() {
                next.extend(clip_polygons(piece, cover, ClipOp::Difference, options)?);
            }
            pieces = next;
            if pieces.is_empty() {
                break;
            }
        }
        total = pieces.iter().fold(total, |acc, p| acc + p.area());
    }

    Ok(total)
}
