use super::internal::containment::{resolve_no_intersections, ring_location_in};
use super::internal::graph::build_intersection_lists;
use super::internal::trace::{assemble, trace, TraceError};
use super::{union_correct, ClipOp, ClipOptions};
use crate::core::math::PointLocation;
use crate::core::traits::Real;
use crate::geometry::{MultiPolygon, Polygon, Ring, RingOrientation};
use crate::ClipError;

/// Boolean operation between the areas enclosed by two rings.
///
/// Rings may be given in either orientation, with or without a closing duplicate point. Output
/// polygons have counter clockwise exteriors and clockwise holes. An empty result is returned when
/// nothing remains (e.g. intersection of disjoint rings).
///
/// # Examples
///
/// ```
/// # use ringclip::*;
/// let a: Ring<f64> = ring![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
/// let b = ring![(5.0, 0.0), (15.0, 0.0), (15.0, 10.0), (5.0, 10.0)];
/// let result = clip_rings(&a, &b, ClipOp::Intersection, &ClipOptions::new()).unwrap();
/// assert_eq!(result.len(), 1);
/// assert!((result[0].area() - 50.0).abs() < 1e-9);
/// ```
pub fn clip_rings<T>(
    ring_a: &Ring<T>,
    ring_b: &Ring<T>,
    op: ClipOp,
    options: &ClipOptions<T>,
) -> Result<Vec<Polygon<T>>, ClipError>
where
    T: Real,
{
    let eps = options.pos_equal_eps;
    let a = ring_a
        .prepared(eps)?
        .oriented(RingOrientation::CounterClockwise);
    let b = ring_b
        .prepared(eps)?
        .oriented(RingOrientation::CounterClockwise);
    // walking the second ring backwards turns a difference into the same forward walk as an
    // intersection
    let b = if op == ClipOp::Difference {
        b.reversed()
    } else {
        b
    };

    let extents_overlap = match (a.extent(), b.extent()) {
        (Some(ea), Some(eb)) => ea.expanded(eps).overlaps(&eb),
        _ => false,
    };
    if !extents_overlap {
        return Ok(resolve_no_intersections(&a, &b, op, eps));
    }

    let (mut list_a, mut list_b) = build_intersection_lists(&a, &b, options);
    match trace(&mut list_a, &mut list_b, &a, &b, op, eps) {
        Ok(rings) => Ok(assemble(rings, eps)),
        Err(TraceError::DegenerateIntersectionCount { crossings }) => {
            log::debug!(
                "{} crossings between rings of {} and {} points, resolving {} by containment",
                crossings,
                a.len(),
                b.len(),
                op.as_str()
            );
            Ok(resolve_no_intersections(&a, &b, op, eps))
        }
    }
}

/// Boolean operation between two polygons with holes.
///
/// Holes of the output are pairwise disjoint, overlapping holes from the inputs are merged.
pub fn clip_polygons<T>(
    a: &Polygon<T>,
    b: &Polygon<T>,
    op: ClipOp,
    options: &ClipOptions<T>,
) -> Result<Vec<Polygon<T>>, ClipError>
where
    T: Real,
{
    a.validate(options.pos_equal_eps)?;
    b.validate(options.pos_equal_eps)?;

    match op {
        ClipOp::Intersection => {
            let pieces = clip_rings(&a.exterior, &b.exterior, op, options)?;
            let holes: Vec<Ring<T>> = a.holes.iter().chain(b.holes.iter()).cloned().collect();
            subtract_holes(pieces, &holes, options)
        }
        ClipOp::Difference => {
            let pieces = clip_rings(&a.exterior, &b.exterior, op, options)?;
            let mut result = subtract_holes(pieces, &a.holes, options)?;
            // parts of a inside the holes of b remain
            for hole in b.holes.iter() {
                let inside_hole = Polygon::from_exterior(hole.clone());
                result.extend(clip_polygons(a, &inside_hole, ClipOp::Intersection, options)?);
            }
            Ok(result)
        }
        ClipOp::Union => {
            let pieces = clip_rings(&a.exterior, &b.exterior, op, options)?;
            if a.holes.is_empty() && b.holes.is_empty() {
                return Ok(pieces);
            }

            // the parts of each hole not covered by the other polygon stay empty
            let mut regions = Vec::new();
            for hole in a.holes.iter() {
                let hole = Polygon::from_exterior(hole.clone());
                regions.extend(clip_polygons(&hole, b, ClipOp::Difference, options)?);
            }
            for hole in b.holes.iter() {
                let hole = Polygon::from_exterior(hole.clone());
                regions.extend(clip_polygons(&hole, a, ClipOp::Difference, options)?);
            }
            subtract_regions(pieces, regions, options)
        }
    }
}

/// Subtract `holes` from every polygon in `pieces`.
///
/// Holes already present on the pieces are pooled with `holes` and overlapping holes are merged, so
/// the holes of the output polygons are pairwise disjoint.
pub fn subtract_holes<T>(
    pieces: Vec<Polygon<T>>,
    holes: &[Ring<T>],
    options: &ClipOptions<T>,
) -> Result<Vec<Polygon<T>>, ClipError>
where
    T: Real,
{
    if holes.is_empty() && pieces.iter().all(|p| p.holes.is_empty()) {
        return Ok(pieces);
    }
    let regions = holes
        .iter()
        .map(|h| Polygon::from_exterior(h.clone()))
        .collect();
    subtract_regions(pieces, regions, options)
}

/// Subtract the areas of `regions` (which may have islands) from `pieces`.
fn subtract_regions<T>(
    pieces: Vec<Polygon<T>>,
    regions: Vec<Polygon<T>>,
    options: &ClipOptions<T>,
) -> Result<Vec<Polygon<T>>, ClipError>
where
    T: Real,
{
    let eps = options.pos_equal_eps;
    let mut pool = regions;
    let mut result = Vec::with_capacity(pieces.len());
    for piece in pieces {
        pool.extend(piece.holes.into_iter().map(Polygon::from_exterior));
        result.push(Polygon::from_exterior(piece.exterior));
    }
    if pool.is_empty() {
        return Ok(result);
    }

    let merged = if pool.len() == 1 {
        MultiPolygon::new(pool)
    } else {
        union_correct(&MultiPolygon::new(pool), options)?
    };

    for region in merged.polygons.iter() {
        let region_extent = match region.extent() {
            Some(e) => e.expanded(eps),
            None => continue,
        };

        let mut next = Vec::with_capacity(result.len());
        for piece in result {
            let overlaps = piece
                .extent()
                .map(|e| e.overlaps(&region_extent))
                .unwrap_or(false);
            if !overlaps {
                next.push(piece);
                continue;
            }

            let outside = clip_rings(&piece.exterior, &region.exterior, ClipOp::Difference, options)?;
            next.extend(carry_holes(outside, &piece.holes, eps));
            for island in region.holes.iter() {
                let inside = clip_rings(&piece.exterior, island, ClipOp::Intersection, options)?;
                next.extend(carry_holes(inside, &piece.holes, eps));
            }
        }
        result = next;
    }

    Ok(result)
}

/// Attach each of `holes` to the polygon of `pieces` that contains it.
fn carry_holes<T>(mut pieces: Vec<Polygon<T>>, holes: &[Ring<T>], pos_equal_eps: T) -> Vec<Polygon<T>>
where
    T: Real,
{
    for hole in holes {
        if let Some(owner) = pieces.iter_mut().find(|p| {
            ring_location_in(hole, &p.exterior, pos_equal_eps) == Some(PointLocation::Inside)
                && p.holes
                    .iter()
                    .all(|h| ring_location_in(hole, h, pos_equal_eps) != Some(PointLocation::Inside))
        }) {
            owner.holes.push(hole.clone());
        }
    }
    pieces
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Boolean operation between this polygon and `other` using default options.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ringclip::*;
    /// let square: Polygon<f64> = polygon![[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]];
    /// let notch = polygon![[(1.0, -1.0), (3.0, -1.0), (3.0, 2.0), (1.0, 2.0)]];
    /// let result = square.boolean(&notch, ClipOp::Difference).unwrap();
    /// assert_eq!(result.len(), 1);
    /// assert!((result.area() - 12.0).abs() < 1e-9);
    /// ```
    pub fn boolean(&self, other: &Polygon<T>, op: ClipOp) -> Result<MultiPolygon<T>, ClipError> {
        self.boolean_opt(other, op, &ClipOptions::new())
    }

    pub fn boolean_opt(
        &self,
        other: &Polygon<T>,
        op: ClipOp,
        options: &ClipOptions<T>,
    ) -> Result<MultiPolygon<T>, ClipError> {
        Ok(MultiPolygon::new(clip_polygons(self, other, op, options)?))
    }

    pub fn intersection(&self, other: &Polygon<T>) -> Result<MultiPolygon<T>, ClipError> {
        self.boolean(other, ClipOp::Intersection)
    }

    pub fn union(&self, other: &Polygon<T>) -> Result<MultiPolygon<T>, ClipError> {
        self.boolean(other, ClipOp::Union)
    }

    pub fn difference(&self, other: &Polygon<T>) -> Result<MultiPolygon<T>, ClipError> {
        self.boolean(other, ClipOp::Difference)
    }
}
