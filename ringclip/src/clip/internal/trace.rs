//! Span classification, crossing counting, and ring tracing over a pair of intersection lists.
use super::graph::{Alignment, NodeList};
use crate::clip::ClipOp;
use crate::core::math::{point_in_ring, point_on_segment, ExcludeBoundary, Point, PointLocation};
use crate::core::traits::Real;
use crate::geometry::{Polygon, Ring, RingOrientation};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TraceError {
    /// Crossings cannot be paired into closed rings, the caller falls back to a containment test.
    #[error("{crossings} crossings found, cannot pair entry and exit points")]
    DegenerateIntersectionCount { crossings: usize },
}

/// Class of a span (the segment from a node to the next node in its list).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SpanClass {
    Inside,
    Outside,
    Shared(Alignment),
}

/// Classify the span `start -> end` against the implicitly closed ring `other`.
pub fn classify_span<T>(
    start: Point<T>,
    end: Point<T>,
    other: &[Point<T>],
    pos_equal_eps: T,
) -> SpanClass
where
    T: Real,
{
    let mid = start.midpoint(end);
    match point_in_ring(mid, other, pos_equal_eps) {
        PointLocation::Inside => return SpanClass::Inside,
        PointLocation::Outside => return SpanClass::Outside,
        PointLocation::OnBoundary => {}
    }

    let dir = end - start;
    let n = other.len();
    for i in 0..n {
        let s = other[i];
        let e = other[(i + 1) % n];
        if !point_on_segment(mid, s, e, ExcludeBoundary::None, pos_equal_eps) {
            continue;
        }
        let edge_dir = e - s;
        let cross = dir.cross(edge_dir) / (dir.length() * edge_dir.length());
        if cross.abs() < pos_equal_eps {
            return if dir.dot(edge_dir) > T::zero() {
                SpanClass::Shared(Alignment::Aligned)
            } else {
                SpanClass::Shared(Alignment::Opposed)
            };
        }
    }

    // midpoint touches the boundary without running along it, try other samples
    for t in [T::half() * T::half(), T::one() - T::half() * T::half()] {
        match point_in_ring(start.lerp(end, t), other, pos_equal_eps) {
            PointLocation::Inside => return SpanClass::Inside,
            PointLocation::Outside => return SpanClass::Outside,
            PointLocation::OnBoundary => {}
        }
    }

    SpanClass::Outside
}

/// Whether a span of the given class is part of the result of `op`.
///
/// The first operand keeps outside spans for union and difference, the second operand keeps
/// outside spans only for union. The second operand is expected to be reversed for difference so
/// its kept (inside) spans run in the right direction. A shared span is kept once, from the first
/// operand, and only when both rings run the same way along it.
pub fn span_kept(class: SpanClass, op: ClipOp, is_first: bool) -> bool {
    let flip = op == ClipOp::Union || (op == ClipOp::Difference && is_first);
    match class {
        SpanClass::Inside => !flip,
        SpanClass::Outside => flip,
        SpanClass::Shared(Alignment::Aligned) => is_first,
        SpanClass::Shared(Alignment::Opposed) => false,
    }
}

/// Set `entry`, `shared` and `kept` on every node of `list`.
///
/// Only the head and intersection nodes are located against `other`, the rest inherit the class of
/// the node before them since a span can only change class at an intersection.
pub fn classify<T>(
    list: &mut NodeList<T>,
    other: &[Point<T>],
    op: ClipOp,
    is_first: bool,
    pos_equal_eps: T,
) where
    T: Real,
{
    let order: Vec<usize> = list.walk().collect();
    let mut class = SpanClass::Outside;
    for (position, &i) in order.iter().enumerate() {
        let node = &list.nodes[i];
        if position == 0 || node.is_intersection {
            let start = node.point;
            let end = list.nodes[node.next].point;
            if position == 0 || !start.fuzzy_eq_eps(end, pos_equal_eps) {
                class = classify_span(start, end, other, pos_equal_eps);
            }
        }

        let node = &mut list.nodes[i];
        node.entry = class == SpanClass::Inside;
        node.shared = match class {
            SpanClass::Shared(alignment) => Some(alignment),
            _ => None,
        };
        node.kept = span_kept(class, op, is_first);
    }
}

/// Number of nodes whose kept state differs from the node before them.
pub fn count_crossings<T>(list: &NodeList<T>) -> usize
where
    T: Real,
{
    list.nodes
        .iter()
        .filter(|n| n.kept != list.nodes[n.prev].kept)
        .count()
}

/// Classify both lists for `op` and walk them into closed rings.
///
/// `ring_a` and `ring_b` are the rings the lists were built from. Returns
/// [TraceError::DegenerateIntersectionCount] when fewer than two (or an odd number of) crossings
/// exist, in which case no ring can be traced and the caller should resolve the operation by
/// containment instead.
pub fn trace<T>(
    list_a: &mut NodeList<T>,
    list_b: &mut NodeList<T>,
    ring_a: &Ring<T>,
    ring_b: &Ring<T>,
    op: ClipOp,
    pos_equal_eps: T,
) -> Result<Vec<Ring<T>>, TraceError>
where
    T: Real,
{
    classify(list_a, &ring_b.points, op, true, pos_equal_eps);
    classify(list_b, &ring_a.points, op, false, pos_equal_eps);

    let crossings = count_crossings(list_a) + count_crossings(list_b);
    if crossings < 2 || crossings % 2 != 0 {
        return Err(TraceError::DegenerateIntersectionCount { crossings });
    }

    Ok(walk_rings(list_a, list_b))
}

fn walk_rings<T>(list_a: &NodeList<T>, list_b: &NodeList<T>) -> Vec<Ring<T>>
where
    T: Real,
{
    let lists = [list_a, list_b];
    let mut visited = [vec![false; list_a.len()], vec![false; list_b.len()]];
    let max_steps = list_a.len() + list_b.len() + 1;
    let mut rings = Vec::new();

    for start_list in 0..2 {
        for start in 0..lists[start_list].len() {
            if visited[start_list][start] || !lists[start_list].nodes[start].kept {
                continue;
            }

            let mut points = Vec::new();
            let mut current = (start_list, start);
            let mut closed = false;
            for step in 0..max_steps {
                let (l, i) = current;
                let node = &lists[l].nodes[i];
                if step > 0 {
                    let at_start = current == (start_list, start)
                        || node.neighbor.map(|n| (1 - l, n)) == Some((start_list, start));
                    if at_start {
                        closed = true;
                        break;
                    }
                }

                let (l, i) = if node.kept {
                    (l, i)
                } else {
                    match node.neighbor {
                        Some(n) if lists[1 - l].nodes[n].kept => (1 - l, n),
                        _ => break,
                    }
                };

                if visited[l][i] {
                    break;
                }

                visited[l][i] = true;
                points.push(lists[l].nodes[i].point);
                current = (l, lists[l].nodes[i].next);
            }

            if closed {
                rings.push(Ring::new(points));
            } else {
                log::debug!(
                    "dropping ring traced from list {} node {}, walk did not close ({} points)",
                    start_list,
                    start,
                    points.len()
                );
            }
        }
    }

    rings
}

/// Turn traced rings into polygons: counter clockwise rings become exteriors and clockwise rings
/// become holes of the smallest exterior containing them. Rings with no area are dropped.
pub fn assemble<T>(rings: Vec<Ring<T>>, pos_equal_eps: T) -> Vec<Polygon<T>>
where
    T: Real,
{
    let min_area = pos_equal_eps * pos_equal_eps;
    let mut exteriors = Vec::new();
    let mut holes = Vec::new();
    for ring in rings {
        let ring = ring.cleaned(pos_equal_eps);
        if ring.len() < 3 || ring.area() <= min_area {
            continue;
        }
        match ring.orientation() {
            RingOrientation::CounterClockwise => exteriors.push(ring),
            RingOrientation::Clockwise => holes.push(ring),
        }
    }

    let mut polygons: Vec<Polygon<T>> = exteriors.into_iter().map(Polygon::from_exterior).collect();
    for hole in holes {
        let owner = polygons
            .iter()
            .enumerate()
            .filter(|(_, p)| {
                super::containment::ring_location_in(&hole, &p.exterior, pos_equal_eps)
                    == Some(PointLocation::Inside)
            })
            .min_by(|(_, p1), (_, p2)| {
                p1.exterior
                    .area()
                    .partial_cmp(&p2.exterior.area())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i);

        match owner {
            Some(i) => polygons[i].holes.push(hole),
            None => log::debug!("dropping hole ring with no enclosing exterior"),
        }
    }

    polygons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::internal::graph::build_intersection_lists;
    use crate::clip::ClipOptions;
    use crate::core::math::point;
    use crate::core::traits::FuzzyEq;

    fn trace_op(a: &Ring<f64>, b: &Ring<f64>, op: ClipOp) -> Result<Vec<Ring<f64>>, TraceError> {
        let b = if op == ClipOp::Difference {
            b.reversed()
        } else {
            b.clone()
        };
        let (mut la, mut lb) = build_intersection_lists(a, &b, &ClipOptions::new());
        trace(&mut la, &mut lb, a, &b, op, 1e-5)
    }

    #[test]
    fn kept_rule() {
        use SpanClass::*;
        assert!(span_kept(Inside, ClipOp::Intersection, true));
        assert!(span_kept(Inside, ClipOp::Intersection, false));
        assert!(span_kept(Outside, ClipOp::Union, true));
        assert!(span_kept(Outside, ClipOp::Union, false));
        assert!(span_kept(Outside, ClipOp::Difference, true));
        assert!(span_kept(Inside, ClipOp::Difference, false));
        assert!(!span_kept(Inside, ClipOp::Difference, true));
        assert!(span_kept(Shared(Alignment::Aligned), ClipOp::Union, true));
        assert!(!span_kept(Shared(Alignment::Aligned), ClipOp::Union, false));
        assert!(!span_kept(Shared(Alignment::Opposed), ClipOp::Intersection, true));
    }

    #[test]
    fn classify_shared_span() {
        let square = [point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0), point(0.0, 1.0)];
        assert_eq!(
            classify_span(point(0.2, 0.0), point(0.8, 0.0), &square, 1e-5),
            SpanClass::Shared(Alignment::Aligned)
        );
        assert_eq!(
            classify_span(point(0.8, 0.0), point(0.2, 0.0), &square, 1e-5),
            SpanClass::Shared(Alignment::Opposed)
        );
        assert_eq!(
            classify_span(point(0.2, 0.2), point(0.8, 0.8), &square, 1e-5),
            SpanClass::Inside
        );
    }

    #[test]
    fn offset_rectangles_intersection() {
        let a = ring![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        let b = ring![(5.0, 0.0), (15.0, 0.0), (15.0, 10.0), (5.0, 10.0)];
        let rings = trace_op(&a, &b, ClipOp::Intersection).unwrap();
        assert_eq!(rings.len(), 1);
        assert_fuzzy_eq!(rings[0].signed_area(), 50.0);
        assert_eq!(
            rings[0].points,
            vec![
                point(10.0, 0.0),
                point(10.0, 10.0),
                point(5.0, 10.0),
                point(5.0, 0.0)
            ]
        );
    }

    #[test]
    fn offset_rectangles_union_and_difference() {
        let a = ring![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        let b = ring![(5.0, 0.0), (15.0, 0.0), (15.0, 10.0), (5.0, 10.0)];
        let union = trace_op(&a, &b, ClipOp::Union).unwrap();
        assert_eq!(union.len(), 1);
        assert_fuzzy_eq!(union[0].signed_area(), 150.0);

        let diff = trace_op(&a, &b, ClipOp::Difference).unwrap();
        assert_eq!(diff.len(), 1);
        assert_fuzzy_eq!(diff[0].signed_area(), 50.0);
    }

    #[test]
    fn nested_rings_are_degenerate() {
        let a = ring![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        let b = ring![(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 4.0)];
        let err = trace_op(&a, &b, ClipOp::Intersection).unwrap_err();
        assert_eq!(err, TraceError::DegenerateIntersectionCount { crossings: 0 });
    }

    #[test]
    fn assemble_attaches_holes() {
        let outer = ring![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        let inner = ring![(2.0, 2.0), (2.0, 4.0), (4.0, 4.0), (4.0, 2.0)];
        let sliver = ring![(20.0, 0.0), (21.0, 0.0), (22.0, 0.0)];
        let polygons = assemble(vec![inner.clone(), outer.clone(), sliver], 1e-5);
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].exterior, outer);
        assert_eq!(polygons[0].holes, vec![inner]);
    }
}
