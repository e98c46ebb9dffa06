//! Resolving a boolean operation between two rings whose boundaries do not cross.
use crate::clip::ClipOp;
use crate::core::math::PointLocation;
use crate::core::traits::Real;
use crate::geometry::{Polygon, Ring, RingOrientation};

/// Location of `ring` relative to `other` decided by the first sample point not on `other`'s
/// boundary. Vertexes are sampled first, then edge midpoints.
///
/// Returns `None` if every sample lies on the boundary of `other`.
pub fn ring_location_in<T>(ring: &Ring<T>, other: &Ring<T>, pos_equal_eps: T) -> Option<PointLocation>
where
    T: Real,
{
    let vertexes = ring.points.iter().copied();
    let midpoints = ring.iter_segments().map(|(s, e)| s.midpoint(e));
    vertexes
        .chain(midpoints)
        .map(|p| other.locate_point(p, pos_equal_eps))
        .find(|loc| *loc != PointLocation::OnBoundary)
}

/// Result of `op` between the cleaned rings `ring_a` and `ring_b` when their boundaries do not
/// cross (they may still touch or coincide).
///
/// Output polygons have counter clockwise exteriors and clockwise holes.
pub fn resolve_no_intersections<T>(
    ring_a: &Ring<T>,
    ring_b: &Ring<T>,
    op: ClipOp,
    pos_equal_eps: T,
) -> Vec<Polygon<T>>
where
    T: Real,
{
    let a_in_b = ring_location_in(ring_a, ring_b, pos_equal_eps);
    let b_in_a = ring_location_in(ring_b, ring_a, pos_equal_eps);

    let ccw = |r: &Ring<T>| r.oriented(RingOrientation::CounterClockwise);
    let whole_a = || Polygon::from_exterior(ccw(ring_a));
    let whole_b = || Polygon::from_exterior(ccw(ring_b));

    match (a_in_b, b_in_a) {
        // every sample of one ring lies on the other, the rings coincide
        (None, _) | (_, None) | (Some(PointLocation::Inside), Some(PointLocation::Inside)) => {
            log::debug!("rings coincide, resolving {} by containment", op.as_str());
            match op {
                ClipOp::Intersection | ClipOp::Union => vec![whole_a()],
                ClipOp::Difference => Vec::new(),
            }
        }
        (Some(PointLocation::Inside), _) => match op {
            ClipOp::Intersection => vec![whole_a()],
            ClipOp::Union => vec![whole_b()],
            ClipOp::Difference => Vec::new(),
        },
        (_, Some(PointLocation::Inside)) => match op {
            ClipOp::Intersection => vec![whole_b()],
            ClipOp::Union => vec![whole_a()],
            ClipOp::Difference => vec![Polygon::new(
                ccw(ring_a),
                vec![ring_b.oriented(RingOrientation::Clockwise)],
            )],
        },
        _ => match op {
            ClipOp::Intersection => Vec::new(),
            ClipOp::Union => vec![whole_a(), whole_b()],
            ClipOp::Difference => vec![whole_a()],
        },
    }
}
