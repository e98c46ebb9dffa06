use super::{Bvh, BvhNode};
use crate::core::traits::Real;
use std::collections::BTreeMap;

/// Candidate overlap pairs produced by [dual_query].
///
/// Keys are item indexes of the first tree in ascending order, each value is the ascending,
/// deduplicated list of item indexes of the second tree whose extents overlap the key's extent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlapMap {
    map: BTreeMap<usize, Vec<usize>>,
}

impl OverlapMap {
    pub fn new() -> Self {
        OverlapMap::default()
    }

    /// Candidates for item `a_index`, empty if there are none.
    pub fn get(&self, a_index: usize) -> &[usize] {
        self.map.get(&a_index).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.map.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Number of first tree items with at least one candidate.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Total number of candidate pairs.
    pub fn pair_count(&self) -> usize {
        self.map.values().map(|v| v.len()).sum()
    }

    fn push(&mut self, a_index: usize, b_index: usize) {
        self.map.entry(a_index).or_default().push(b_index);
    }

    fn finish(&mut self) {
        for candidates in self.map.values_mut() {
            candidates.sort_unstable();
            candidates.dedup();
        }
    }
}

/// Find every pair of items, one from each tree, whose extents overlap.
///
/// Walks both trees from their roots at once using an explicit stack of node pairs. A pair of
/// nodes whose extents do not overlap is discarded before any other work, leaf pairs re-test the
/// extent of each item pair before recording it.
///
/// # Examples
///
/// ```
/// # use ringclip::bvh::*;
/// # use ringclip::*;
/// let a = ring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
/// let b = ring![(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 6.0)];
/// let tree_a = Bvh::from_edges(&a.edges(), 8);
/// let tree_b = Bvh::from_edges(&b.edges(), 8);
/// assert!(dual_query(&tree_a, &tree_b).is_empty());
/// ```
pub fn dual_query<T>(tree_a: &Bvh<T>, tree_b: &Bvh<T>) -> OverlapMap
where
    T: Real,
{
    let mut result = OverlapMap::new();
    let (root_a, root_b) = match (tree_a.root(), tree_b.root()) {
        (Some(a), Some(b)) => (a, b),
        _ => return result,
    };

    let mut visited_pairs = 0usize;
    let mut pruned_pairs = 0usize;
    let mut stack = vec![(root_a, root_b)];
    while let Some((ia, ib)) = stack.pop() {
        visited_pairs += 1;
        let node_a = tree_a.node(ia);
        let node_b = tree_b.node(ib);
        if !node_a.extent().overlaps(node_b.extent()) {
            pruned_pairs += 1;
            continue;
        }

        match (node_a, node_b) {
            (BvhNode::Leaf { items: items_a, .. }, BvhNode::Leaf { items: items_b, .. }) => {
                for (index_a, extent_a) in items_a.iter() {
                    for (index_b, extent_b) in items_b.iter() {
                        if extent_a.overlaps(extent_b) {
                            result.push(*index_a, *index_b);
                        }
                    }
                }
            }
            (BvhNode::Leaf { .. }, BvhNode::Internal { children, .. }) => {
                stack.extend(children.iter().map(|&c| (ia, c)));
            }
            (BvhNode::Internal { children, .. }, BvhNode::Leaf { .. }) => {
                stack.extend(children.iter().map(|&c| (c, ib)));
            }
            (
                BvhNode::Internal {
                    children: children_a,
                    ..
                },
                BvhNode::Internal {
                    children: children_b,
                    ..
                },
            ) => {
                for &ca in children_a.iter() {
                    stack.extend(children_b.iter().map(|&cb| (ca, cb)));
                }
            }
        }
    }

    result.finish();
    log::trace!(
        "dual query visited {} node pairs, pruned {}, found {} candidate pairs",
        visited_pairs,
        pruned_pairs,
        result.pair_count()
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Extent;

    /// Deterministic pseudo random extents.
    fn scattered_extents(count: usize, seed: u64) -> Vec<Extent<f64>> {
        let mut state = seed;
        let mut next = move || {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) as f64) / ((1u64 << 31) as f64)
        };
        (0..count)
            .map(|_| {
                let x = next() * 100.0;
                let y = next() * 100.0;
                let w = next() * 5.0;
                let h = next() * 5.0;
                Extent::new(x, y, x + w, y + h)
            })
            .collect()
    }

    fn brute_force(a: &[Extent<f64>], b: &[Extent<f64>]) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, ea) in a.iter().enumerate() {
            for (j, eb) in b.iter().enumerate() {
                if ea.overlaps(eb) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    fn flatten(map: &OverlapMap) -> Vec<(usize, usize)> {
        map.iter()
            .flat_map(|(a, bs)| bs.iter().map(move |&b| (a, b)))
            .collect()
    }

    #[test]
    fn disjoint_unit_squares() {
        let a = ring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        let b = ring![(3.0, 0.0), (4.0, 0.0), (4.0, 1.0), (3.0, 1.0)];
        let tree_a = Bvh::from_edges(&a.edges(), 8);
        let tree_b = Bvh::from_edges(&b.edges(), 8);
        let result = dual_query(&tree_a, &tree_b);
        assert!(result.is_empty());
        assert_eq!(result.pair_count(), 0);
    }

    #[test]
    fn empty_tree() {
        let a = Bvh::from_extents(&scattered_extents(10, 1), 4);
        let b = Bvh::<f64>::from_extents(&[], 4);
        assert!(dual_query(&a, &b).is_empty());
        assert!(dual_query(&b, &a).is_empty());
    }

    #[test]
    fn overlapping_squares() {
        let a = ring![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
        let b = ring![(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)];
        let tree_a = Bvh::from_edges(&a.edges(), 2);
        let tree_b = Bvh::from_edges(&b.edges(), 2);
        let result = dual_query(&tree_a, &tree_b);
        // right side of a meets bottom of b, top of a meets left side of b
        assert_eq!(result.get(1), &[0]);
        assert_eq!(result.get(2), &[3]);
        assert_eq!(flatten(&result), brute_force(&extents(&a), &extents(&b)));
    }

    fn extents(r: &crate::geometry::Ring<f64>) -> Vec<Extent<f64>> {
        r.edges().iter().map(|e| e.extent).collect()
    }

    #[test]
    fn matches_brute_force_for_node_sizes() {
        let a = scattered_extents(300, 7);
        let b = scattered_extents(250, 11);
        let expected = brute_force(&a, &b);
        assert!(!expected.is_empty());
        for node_size in [2, 3, 8, 16, 64] {
            let tree_a = Bvh::from_extents(&a, node_size);
            let tree_b = Bvh::from_extents(&b, node_size);
            let result = dual_query(&tree_a, &tree_b);
            assert_eq!(flatten(&result), expected, "node_size {}", node_size);
        }
    }

    #[test]
    fn keys_and_values_sorted() {
        let a = scattered_extents(120, 3);
        let b = scattered_extents(120, 5);
        let result = dual_query(&Bvh::from_extents(&a, 4), &Bvh::from_extents(&b, 6));
        let keys: Vec<usize> = result.iter().map(|(k, _)| k).collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        for (_, values) in result.iter() {
            assert!(values.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
