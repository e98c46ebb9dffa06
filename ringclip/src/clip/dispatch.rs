use super::{clip_polygons, cut, union_correct, ClipOp, ClipOptions};
use crate::core::math::Point;
use crate::core::traits::Real;
use crate::geometry::{Geometry, GeometryKind, MultiPolygon, Polygon};
use crate::ClipError;

/// Boolean operation between two area geometries.
///
/// Implemented for every combination of [Polygon] and [MultiPolygon], any other pair of geometry
/// kinds returns [ClipError::Unsupported].
///
/// # Examples
///
/// ```
/// # use ringclip::*;
/// let a: Geometry = polygon![[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]].into();
/// let b: Geometry = polygon![[(1.0, 0.0), (3.0, 0.0), (3.0, 2.0), (1.0, 2.0)]].into();
/// let union = boolean(&a, &b, ClipOp::Union, &ClipOptions::new()).unwrap();
/// assert!((union.area() - 6.0).abs() < 1e-9);
///
/// let line: Geometry = LineString::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).into();
/// assert!(boolean(&a, &line, ClipOp::Union, &ClipOptions::new()).is_err());
/// ```
pub fn boolean<T>(
    a: &Geometry<T>,
    b: &Geometry<T>,
    op: ClipOp,
    options: &ClipOptions<T>,
) -> Result<MultiPolygon<T>, ClipError>
where
    T: Real,
{
    let polygons_a = match area_polygons(a) {
        Some(p) => p,
        None => return Err(unsupported(op.as_str(), a.kind(), b.kind())),
    };
    let polygons_b = match area_polygons(b) {
        Some(p) => p,
        None => return Err(unsupported(op.as_str(), a.kind(), b.kind())),
    };

    if let (Geometry::Polygon(pa), Geometry::Polygon(pb)) = (a, b) {
        return Ok(MultiPolygon::new(clip_polygons(pa, pb, op, options)?));
    }

    match op {
        ClipOp::Intersection => {
            let mut result = Vec::new();
            for pa in polygons_a {
                for pb in polygons_b {
                    result.extend(clip_polygons(pa, pb, op, options)?);
                }
            }
            Ok(MultiPolygon::new(result))
        }
        ClipOp::Union => {
            let all = polygons_a.iter().chain(polygons_b.iter()).cloned().collect();
            union_correct(&MultiPolygon::new(all), options)
        }
        ClipOp::Difference => {
            let mut result = Vec::new();
            for pa in polygons_a {
                let mut pieces = vec![pa.clone()];
                for pb in polygons_b {
                    let mut next = Vec::new();
                    for piece in pieces.iter() {
                        next.extend(clip_polygons(piece, pb, op, options)?);
                    }
                    pieces = next;
                }
                result.extend(pieces);
            }
            Ok(MultiPolygon::new(result))
        }
    }
}

/// Split an area geometry along the segment `line_start -> line_end`.
///
/// Implemented for [Polygon] and [MultiPolygon], other kinds return [ClipError::Unsupported].
pub fn cut_geometry<T>(
    geometry: &Geometry<T>,
    line_start: Point<T>,
    line_end: Point<T>,
    options: &ClipOptions<T>,
) -> Result<MultiPolygon<T>, ClipError>
where
    T: Real,
{
    let polygons = match area_polygons(geometry) {
        Some(p) => p,
        None => {
            return Err(unsupported(
                "cut",
                geometry.kind(),
                GeometryKind::LineString,
            ))
        }
    };

    let mut result = Vec::new();
    for polygon in polygons {
        result.extend(cut(polygon, line_start, line_end, options)?);
    }
    Ok(MultiPolygon::new(result))
}

fn area_polygons<T>(geometry: &Geometry<T>) -> Option<&[Polygon<T>]>
where
    T: Real,
{
    match geometry {
        Geometry::Polygon(p) => Some(std::slice::from_ref(p)),
        Geometry::MultiPolygon(mp) => Some(&mp.polygons),
        Geometry::Point(_) | Geometry::LineString(_) => None,
    }
}

fn unsupported(op: &'static str, first: GeometryKind, second: GeometryKind) -> ClipError {
    ClipError::Unsupported { op, first, second }
}
