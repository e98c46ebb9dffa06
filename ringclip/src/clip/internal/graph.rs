//! Intersection lists: arena backed, cyclic doubly linked copies of two rings with a matched node
//! inserted into each at every crossing.
use crate::bvh::{dual_query, Bvh};
use crate::clip::ClipOptions;
use crate::core::math::{segment_intersection, Extent, Point, SegIntr};
use crate::core::traits::Real;
use crate::geometry::{Edge, Ring};
use std::collections::{BTreeMap, HashSet};

/// Direction of a span lying on the other ring's boundary relative to that boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Alignment {
    Aligned,
    Opposed,
}

/// Vertex of an intersection list, either an original ring vertex or an inserted crossing.
#[derive(Debug, Clone)]
pub struct PolyNode<T> {
    pub point: Point<T>,
    pub prev: usize,
    pub next: usize,
    /// True for inserted crossings and for original vertexes the other ring passes through.
    pub is_intersection: bool,
    /// Span leaving this node lies inside the other ring.
    pub entry: bool,
    /// Span leaving this node lies on the other ring's boundary.
    pub shared: Option<Alignment>,
    /// Span leaving this node is part of the result.
    pub kept: bool,
    /// Index of the matching node in the other list.
    pub neighbor: Option<usize>,
    /// Parametric position along the original edge, zero for original vertexes.
    pub alpha: T,
}

impl<T> PolyNode<T>
where
    T: Real,
{
    fn new(point: Point<T>, prev: usize, next: usize, alpha: T) -> Self {
        PolyNode {
            point,
            prev,
            next,
            is_intersection: false,
            entry: false,
            shared: None,
            kept: false,
            neighbor: None,
            alpha,
        }
    }
}

/// Cyclic list of nodes stored in an arena, original vertex `i` of the ring is node `i`.
#[derive(Debug, Clone)]
pub struct NodeList<T> {
    pub nodes: Vec<PolyNode<T>>,
    original_count: usize,
}

impl<T> NodeList<T>
where
    T: Real,
{
    pub fn from_ring(ring: &Ring<T>) -> Self {
        let n = ring.len();
        let nodes = ring
            .points
            .iter()
            .enumerate()
            .map(|(i, &p)| PolyNode::new(p, (i + n - 1) % n, (i + 1) % n, T::zero()))
            .collect();
        NodeList {
            nodes,
            original_count: n,
        }
    }

    /// Number of original ring vertexes.
    #[inline]
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a new intersection node after `after`, returns its index.
    pub fn splice_after(&mut self, after: usize, point: Point<T>, alpha: T) -> usize {
        let index = self.nodes.len();
        let next = self.nodes[after].next;
        let mut node = PolyNode::new(point, after, next, alpha);
        node.is_intersection = true;
        self.nodes.push(node);
        self.nodes[after].next = index;
        self.nodes[next].prev = index;
        index
    }

    /// Node indexes in walk order starting from original vertex 0.
    pub fn walk(&self) -> ListWalk<'_, T> {
        ListWalk {
            list: self,
            current: if self.nodes.is_empty() { None } else { Some(0) },
        }
    }

    pub fn intersection_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_intersection).count()
    }
}

/// Iterator over node indexes of a [NodeList] in walk order.
pub struct ListWalk<'a, T> {
    list: &'a NodeList<T>,
    current: Option<usize>,
}

impl<'a, T> Iterator for ListWalk<'a, T> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current?;
        let next = self.list.nodes[index].next;
        self.current = if next == 0 { None } else { Some(next) };
        Some(index)
    }
}

/// Where a crossing lies on one ring.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Location<T> {
    Vertex(usize),
    Edge { edge: usize, alpha: T },
}

#[derive(Debug, Copy, Clone)]
struct Crossing<T> {
    point: Point<T>,
    loc_a: Location<T>,
    loc_b: Location<T>,
}

fn locate_on_edge<T>(
    point: Point<T>,
    alpha: T,
    edge: usize,
    edges: &[Edge<T>],
    pos_equal_eps: T,
) -> Location<T>
where
    T: Real,
{
    let e = &edges[edge];
    if point.fuzzy_eq_eps(e.start, pos_equal_eps) {
        Location::Vertex(edge)
    } else if point.fuzzy_eq_eps(e.end, pos_equal_eps) {
        Location::Vertex((edge + 1) % edges.len())
    } else {
        Location::Edge { edge, alpha }
    }
}

/// Candidate edge pairs `(edge of a, edge of b)` whose extents (grown by `pos_equal_eps`) overlap.
pub fn candidate_pairs<T>(
    edges_a: &[Edge<T>],
    edges_b: &[Edge<T>],
    options: &ClipOptions<T>,
) -> Vec<(usize, usize)>
where
    T: Real,
{
    let eps = options.pos_equal_eps;
    let extents_a: Vec<Extent<T>> = edges_a.iter().map(|e| e.extent.expanded(eps)).collect();
    let extents_b: Vec<Extent<T>> = edges_b.iter().map(|e| e.extent.expanded(eps)).collect();

    if edges_a.len() * edges_b.len() >= options.bvh_pair_threshold {
        let tree_a = Bvh::from_extents(&extents_a, options.bvh_node_size);
        let tree_b = Bvh::from_extents(&extents_b, options.bvh_node_size);
        return dual_query(&tree_a, &tree_b)
            .iter()
            .flat_map(|(i, js)| js.iter().map(move |&j| (i, j)))
            .collect();
    }

    let mut pairs = Vec::new();
    for (i, ea) in extents_a.iter().enumerate() {
        for (j, eb) in extents_b.iter().enumerate() {
            if ea.overlaps(eb) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Build the intersection lists for two cleaned rings.
///
/// Every crossing found between an edge of `ring_a` and an edge of `ring_b` appears once in each
/// list, the two nodes referencing each other through [PolyNode::neighbor]. Crossings within
/// `pos_equal_eps` of a vertex reuse that vertex node instead of inserting a new one. Crossings on
/// the same edge are spliced in order of their parametric position. Collinear edge pairs produce no
/// node.
pub fn build_intersection_lists<T>(
    ring_a: &Ring<T>,
    ring_b: &Ring<T>,
    options: &ClipOptions<T>,
) -> (NodeList<T>, NodeList<T>)
where
    T: Real,
{
    let eps = options.pos_equal_eps;
    let edges_a = ring_a.edges();
    let edges_b = ring_b.edges();

    let mut crossings: Vec<Crossing<T>> = Vec::new();
    let mut used_a = HashSet::new();
    let mut used_b = HashSet::new();
    for (i, j) in candidate_pairs(&edges_a, &edges_b, options) {
        let ea = &edges_a[i];
        let eb = &edges_b[j];
        let (point, alpha_a, alpha_b) =
            match segment_intersection(ea.start, ea.end, eb.start, eb.end, eps) {
                SegIntr::CrossingPoint {
                    point,
                    alpha_a,
                    alpha_b,
                } => (point, alpha_a, alpha_b),
                SegIntr::NoIntersection | SegIntr::Collinear => continue,
            };

        let loc_a = locate_on_edge(point, alpha_a, i, &edges_a, eps);
        let loc_b = locate_on_edge(point, alpha_b, j, &edges_b, eps);

        if let Location::Vertex(v) = loc_a {
            if used_a.contains(&v) {
                continue;
            }
        }
        if let Location::Vertex(v) = loc_b {
            if used_b.contains(&v) {
                continue;
            }
        }
        if let Location::Vertex(v) = loc_a {
            used_a.insert(v);
        }
        if let Location::Vertex(v) = loc_b {
            used_b.insert(v);
        }

        // prefer an existing vertex position so both lists hold the exact same point
        let point = match (loc_a, loc_b) {
            (Location::Vertex(v), _) => ring_a[v],
            (_, Location::Vertex(v)) => ring_b[v],
            _ => point,
        };

        crossings.push(Crossing {
            point,
            loc_a,
            loc_b,
        });
    }

    let mut list_a = NodeList::from_ring(ring_a);
    let mut list_b = NodeList::from_ring(ring_b);
    let nodes_a = insert_crossings(&mut list_a, crossings.iter().map(|c| (c.point, c.loc_a)));
    let nodes_b = insert_crossings(&mut list_b, crossings.iter().map(|c| (c.point, c.loc_b)));

    for (&na, &nb) in nodes_a.iter().zip(nodes_b.iter()) {
        list_a.nodes[na].neighbor = Some(nb);
        list_b.nodes[nb].neighbor = Some(na);
    }

    (list_a, list_b)
}

/// Insert crossings into `list`, returns the node index of each crossing in input order.
fn insert_crossings<T, I>(list: &mut NodeList<T>, crossings: I) -> Vec<usize>
where
    T: Real,
    I: Iterator<Item = (Point<T>, Location<T>)>,
{
    let mut node_indexes = Vec::new();
    let mut by_edge: BTreeMap<usize, Vec<(T, Point<T>, usize)>> = BTreeMap::new();
    for (crossing_index, (point, loc)) in crossings.enumerate() {
        match loc {
            Location::Vertex(v) => {
                list.nodes[v].is_intersection = true;
                node_indexes.push(v);
            }
            Location::Edge { edge, alpha } => {
                by_edge
                    .entry(edge)
                    .or_default()
                    .push((alpha, point, crossing_index));
                // placeholder until spliced below
                node_indexes.push(usize::MAX);
            }
        }
    }

    for (edge, mut on_edge) in by_edge {
        on_edge.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let mut after = edge;
        for (alpha, point, crossing_index) in on_edge {
            after = list.splice_after(after, point, alpha);
            node_indexes[crossing_index] = after;
        }
    }

    node_indexes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::point;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn offset_rectangles() {
        let a = ring![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        let b = ring![(5.0, 0.0), (15.0, 0.0), (15.0, 10.0), (5.0, 10.0)];
        let (la, lb) = build_intersection_lists(&a, &b, &ClipOptions::new());
        // (5, 0) and (5, 10) are vertexes of b on edges of a, (10, 0) and (10, 10) vertexes of a
        // on edges of b
        assert_eq!(la.intersection_count(), 4);
        assert_eq!(lb.intersection_count(), 4);
        assert_eq!(la.len(), 6);
        assert_eq!(lb.len(), 6);

        let walk: Vec<Point<f64>> = la.walk().map(|i| la.nodes[i].point).collect();
        assert_eq!(
            walk,
            vec![
                point(0.0, 0.0),
                point(5.0, 0.0),
                point(10.0, 0.0),
                point(10.0, 10.0),
                point(5.0, 10.0),
                point(0.0, 10.0)
            ]
        );

        for (i, node) in la.nodes.iter().enumerate() {
            if let Some(nb) = node.neighbor {
                assert_eq!(lb.nodes[nb].neighbor, Some(i));
                assert!(lb.nodes[nb].point.fuzzy_eq(node.point));
            }
        }
    }

    #[test]
    fn multiple_crossings_on_one_edge_are_ordered() {
        // comb crossing the bottom edge of the square three times
        let a = ring![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        let b = ring![
            (1.0, -1.0),
            (9.0, -1.0),
            (9.0, 1.0),
            (6.0, 1.0),
            (6.0, -0.5),
            (4.0, -0.5),
            (4.0, 1.0),
            (1.0, 1.0)
        ];
        let (la, _) = build_intersection_lists(&a, &b, &ClipOptions::new());
        let xs: Vec<f64> = la
            .walk()
            .map(|i| la.nodes[i].point)
            .filter(|p| p.y.fuzzy_eq_zero())
            .map(|p| p.x)
            .collect();
        let expected = [0.0, 1.0, 4.0, 6.0, 9.0, 10.0];
        assert_eq!(xs.len(), expected.len());
        for (x, e) in xs.iter().zip(expected.iter()) {
            assert_fuzzy_eq!(*x, *e);
        }
    }

    #[test]
    fn tree_and_brute_force_candidates_match() {
        let a = ring![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        let b = ring![(5.0, -5.0), (15.0, 5.0), (5.0, 15.0), (-5.0, 5.0)];
        let brute = candidate_pairs(&a.edges(), &b.edges(), &ClipOptions::new());
        let mut tree_options = ClipOptions::new();
        tree_options.bvh_pair_threshold = 0;
        tree_options.bvh_node_size = 2;
        let tree = candidate_pairs(&a.edges(), &b.edges(), &tree_options);
        assert_eq!(brute, tree);
    }
}
