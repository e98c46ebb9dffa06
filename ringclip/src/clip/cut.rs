use super::internal::graph::NodeList;
use super::{subtract_holes, ClipOptions};
use crate::core::math::{segment_intersection, Extent, Point, PointLocation, SegIntr};
use crate::core::traits::Real;
use crate::geometry::{Polygon, Ring, RingOrientation};
use crate::ClipError;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Copy, Clone)]
enum CutLocation<T> {
    Vertex(usize),
    Edge { edge: usize, alpha: T },
}

#[derive(Debug, Copy, Clone)]
struct CutCrossing<T> {
    /// Parametric position along the dividing line.
    t: T,
    point: Point<T>,
    loc: CutLocation<T>,
}

/// Which side of the directed line `p -> q` the point `x` is on, `0` when on the line.
fn side_of<T>(p: Point<T>, q: Point<T>, x: Point<T>, pos_equal_eps: T) -> i8
where
    T: Real,
{
    let dir = q - p;
    let dist = dir.cross(x - p) / dir.length();
    if dist > pos_equal_eps {
        1
    } else if dist < -pos_equal_eps {
        -1
    } else {
        0
    }
}

/// Split `polygon` along the segment `line_start -> line_end`.
///
/// Each pair of consecutive crossings along the line becomes a chord through the polygon and the
/// exterior is traced into pieces bounded by the chords. Holes are subtracted from the pieces
/// afterwards. If the line does not cross the exterior at least twice, crosses an odd number of
/// times, or a chord leaves the polygon, the polygon is returned unchanged as the only piece.
///
/// # Examples
///
/// ```
/// # use ringclip::*;
/// # use ringclip::core::math::point;
/// let square: Polygon<f64> = polygon![[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]];
/// let pieces = cut(&square, point(2.0, -1.0), point(2.0, 5.0), &ClipOptions::new()).unwrap();
/// assert_eq!(pieces.len(), 2);
/// assert!((pieces[0].area() - 8.0).abs() < 1e-9);
/// assert!((pieces[1].area() - 8.0).abs() < 1e-9);
/// ```
pub fn cut<T>(
    polygon: &Polygon<T>,
    line_start: Point<T>,
    line_end: Point<T>,
    options: &ClipOptions<T>,
) -> Result<Vec<Polygon<T>>, ClipError>
where
    T: Real,
{
    let eps = options.pos_equal_eps;
    polygon.validate(eps)?;
    let exterior = polygon
        .exterior
        .prepared(eps)?
        .oriented(RingOrientation::CounterClockwise);

    if line_start.fuzzy_eq_eps(line_end, eps) {
        return Ok(vec![polygon.clone()]);
    }

    let crossings = find_cut_crossings(&exterior, line_start, line_end, eps);
    if crossings.len() < 2 || crossings.len() % 2 != 0 {
        log::debug!(
            "cut line crosses exterior {} times, returning polygon unchanged",
            crossings.len()
        );
        return Ok(vec![polygon.clone()]);
    }

    for chord in crossings.chunks(2) {
        let mid = chord[0].point.midpoint(chord[1].point);
        if exterior.locate_point(mid, eps) != PointLocation::Inside {
            log::debug!("cut chord leaves the polygon, returning polygon unchanged");
            return Ok(vec![polygon.clone()]);
        }
    }

    let pieces = trace_pieces(&exterior, &crossings, eps);
    let holes: Vec<Ring<T>> = polygon
        .holes
        .iter()
        .map(|h| h.prepared(eps))
        .collect::<Result<_, _>>()?;
    subtract_holes(pieces, &holes, options)
}

/// Crossings of the line with `exterior` sorted by position along the line.
fn find_cut_crossings<T>(
    exterior: &Ring<T>,
    line_start: Point<T>,
    line_end: Point<T>,
    eps: T,
) -> Vec<CutCrossing<T>>
where
    T: Real,
{
    let n = exterior.len();
    let index = exterior.create_edge_index();
    let query = Extent::from_segment(line_start, line_end).expanded(eps);
    let mut candidates = index.query(query.min_x, query.min_y, query.max_x, query.max_y);
    candidates.sort_unstable();

    let mut crossings = Vec::new();
    let mut used_vertexes = HashSet::new();
    for i in candidates {
        let s = exterior[i];
        let e = exterior[(i + 1) % n];
        let (point, t, alpha) = match segment_intersection(line_start, line_end, s, e, eps) {
            SegIntr::CrossingPoint {
                point,
                alpha_a,
                alpha_b,
            } => (point, alpha_a, alpha_b),
            SegIntr::NoIntersection | SegIntr::Collinear => continue,
        };

        let vertex = if point.fuzzy_eq_eps(s, eps) {
            Some(i)
        } else if point.fuzzy_eq_eps(e, eps) {
            Some((i + 1) % n)
        } else {
            None
        };

        let loc = match vertex {
            Some(v) => {
                if !used_vertexes.insert(v) {
                    continue;
                }
                let before = side_of(line_start, line_end, exterior[(v + n - 1) % n], eps);
                let after = side_of(line_start, line_end, exterior[(v + 1) % n], eps);
                // touching the line or running along it is not a crossing
                if before * after >= 0 {
                    continue;
                }
                CutLocation::Vertex(v)
            }
            None => CutLocation::Edge { edge: i, alpha },
        };

        crossings.push(CutCrossing {
            t,
            point: match loc {
                CutLocation::Vertex(v) => exterior[v],
                CutLocation::Edge { .. } => point,
            },
            loc,
        });
    }

    crossings.sort_by(|a, b| a.t.partial_cmp(&b.t).unwrap_or(std::cmp::Ordering::Equal));
    crossings
}

/// Walk the exterior into pieces, jumping across a chord at every crossing node.
fn trace_pieces<T>(exterior: &Ring<T>, crossings: &[CutCrossing<T>], eps: T) -> Vec<Polygon<T>>
where
    T: Real,
{
    let mut list = NodeList::from_ring(exterior);
    let mut node_of = vec![0; crossings.len()];
    let mut by_edge: BTreeMap<usize, Vec<(T, usize)>> = BTreeMap::new();
    for (c, crossing) in crossings.iter().enumerate() {
        match crossing.loc {
            CutLocation::Vertex(v) => {
                list.nodes[v].is_intersection = true;
                node_of[c] = v;
            }
            CutLocation::Edge { edge, alpha } => by_edge.entry(edge).or_default().push((alpha, c)),
        }
    }
    for (edge, mut on_edge) in by_edge {
        on_edge.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        let mut after = edge;
        for (alpha, c) in on_edge {
            after = list.splice_after(after, crossings[c].point, alpha);
            node_of[c] = after;
        }
    }

    // chord partner of each crossing node
    let mut partner: Vec<Option<usize>> = vec![None; list.len()];
    for chord in node_of.chunks(2) {
        partner[chord[0]] = Some(chord[1]);
        partner[chord[1]] = Some(chord[0]);
    }

    let min_area = eps * eps;
    let max_steps = list.len() + crossings.len() + 1;
    let mut visited = vec![false; list.len()];
    let mut pieces = Vec::new();
    for start in 0..list.len() {
        if visited[start] {
            continue;
        }

        let mut points = Vec::new();
        let mut current = start;
        let mut closed = false;
        for _ in 0..max_steps {
            visited[current] = true;
            points.push(list.nodes[current].point);
            let mut next = list.nodes[current].next;
            if let Some(other) = partner[next] {
                points.push(list.nodes[next].point);
                next = other;
            }
            if next == start {
                closed = true;
                break;
            }
            if visited[next] {
                break;
            }
            current = next;
        }

        if !closed {
            log::debug!("dropping cut piece starting at node {}, walk did not close", start);
            continue;
        }

        let ring = Ring::new(points).cleaned(eps);
        if ring.len() >= 3 && ring.area() > min_area {
            pieces.push(Polygon::from_exterior(
                ring.oriented(RingOrientation::CounterClockwise),
            ));
        }
    }

    pieces
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Split this polygon along the segment `line_start -> line_end` using default options.
    pub fn cut(&self, line_start: Point<T>, line_end: Point<T>) -> Result<Vec<Polygon<T>>, ClipError> {
        cut(self, line_start, line_end, &ClipOptions::new())
    }
}
