//! Bounding volume hierarchy over edge extents and the dual tree overlap query.
//!
//! Trees are bulk loaded once using sort tile recursive packing and are read only afterwards, so
//! a built tree may be shared between threads and queried concurrently.
mod dual_query;

pub use dual_query::{dual_query, OverlapMap};

use crate::core::math::Extent;
use crate::core::traits::Real;
use crate::geometry::Edge;
use std::cmp::Ordering;

/// A node of a [Bvh], stored in the tree's node arena.
#[derive(Debug, Clone)]
pub enum BvhNode<T> {
    /// Up to `node_size` children, as indexes into the node arena.
    Internal {
        extent: Extent<T>,
        children: Vec<usize>,
    },
    /// Up to `node_size` `(item index, item extent)` pairs.
    Leaf {
        extent: Extent<T>,
        items: Vec<(usize, Extent<T>)>,
    },
}

impl<T> BvhNode<T>
where
    T: Real,
{
    #[inline]
    pub fn extent(&self) -> &Extent<T> {
        match self {
            BvhNode::Internal { extent, .. } => extent,
            BvhNode::Leaf { extent, .. } => extent,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, BvhNode::Leaf { .. })
    }
}

/// Bounding volume hierarchy over a set of extents (usually ring edges).
///
/// # Examples
///
/// ```
/// # use ringclip::bvh::*;
/// # use ringclip::core::math::*;
/// let extents: Vec<Extent<f64>> = (0..100)
///     .map(|i| {
///         let x = i as f64;
///         Extent::new(x, 0.0, x + 0.5, 1.0)
///     })
///     .collect();
/// let tree = Bvh::from_extents(&extents, 8);
/// assert_eq!(tree.len(), 100);
/// assert_eq!(tree.query(&Extent::new(10.2, 0.2, 11.1, 0.4)), vec![10, 11]);
/// ```
#[derive(Debug, Clone)]
pub struct Bvh<T> {
    nodes: Vec<BvhNode<T>>,
    root: Option<usize>,
    item_count: usize,
    node_size: usize,
}

impl<T> Bvh<T>
where
    T: Real,
{
    /// Bulk load a tree from `extents`, the item index of each extent is its position in the
    /// slice. `node_size` is clamped to at least 2.
    pub fn from_extents(extents: &[Extent<T>], node_size: usize) -> Self {
        let node_size = node_size.max(2);
        let item_count = extents.len();
        if item_count == 0 {
            return Bvh {
                nodes: Vec::new(),
                root: None,
                item_count,
                node_size,
            };
        }

        let mut items: Vec<(usize, Extent<T>)> = extents.iter().copied().enumerate().collect();

        let leaf_count = (item_count + node_size - 1) / node_size;
        let slice_count = (leaf_count as f64).sqrt().ceil() as usize;
        let slice_size = slice_count.max(1) * node_size;

        items.sort_by(|a, b| cmp_center_x(&a.1, &b.1));

        let mut nodes = Vec::with_capacity(2 * leaf_count);
        let mut level = Vec::with_capacity(leaf_count);
        for slice in items.chunks_mut(slice_size) {
            slice.sort_by(|a, b| cmp_center_y(&a.1, &b.1));
            for leaf_items in slice.chunks(node_size) {
                let extent = union_all(leaf_items.iter().map(|(_, e)| *e));
                level.push(nodes.len());
                nodes.push(BvhNode::Leaf {
                    extent,
                    items: leaf_items.to_vec(),
                });
            }
        }

        while level.len() > 1 {
            let mut next_level = Vec::with_capacity(level.len() / node_size + 1);
            for group in level.chunks(node_size) {
                let extent = union_all(group.iter().map(|&i| *nodes[i].extent()));
                next_level.push(nodes.len());
                nodes.push(BvhNode::Internal {
                    extent,
                    children: group.to_vec(),
                });
            }
            level = next_level;
        }

        Bvh {
            nodes,
            root: level.first().copied(),
            item_count,
            node_size,
        }
    }

    /// Bulk load a tree from the cached extents of `edges`.
    pub fn from_edges(edges: &[Edge<T>], node_size: usize) -> Self {
        let extents: Vec<Extent<T>> = edges.iter().map(|e| e.extent).collect();
        Bvh::from_extents(&extents, node_size)
    }

    /// Number of items indexed.
    #[inline]
    pub fn len(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    #[inline]
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    #[inline]
    pub fn node(&self, index: usize) -> &BvhNode<T> {
        &self.nodes[index]
    }

    #[inline]
    pub fn nodes(&self) -> &[BvhNode<T>] {
        &self.nodes
    }

    /// Extent of everything in the tree, `None` if the tree is empty.
    pub fn extent(&self) -> Option<Extent<T>> {
        self.root.map(|r| *self.nodes[r].extent())
    }

    /// Sorted indexes of all items whose extent overlaps `query`.
    pub fn query(&self, query: &Extent<T>) -> Vec<usize> {
        let mut results = Vec::new();
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            stack.push(root);
        }

        while let Some(i) = stack.pop() {
            let node = &self.nodes[i];
            if !node.extent().overlaps(query) {
                continue;
            }

            match node {
                BvhNode::Leaf { items, .. } => results.extend(
                    items
                        .iter()
                        .filter(|(_, e)| e.overlaps(query))
                        .map(|(index, _)| *index),
                ),
                BvhNode::Internal { children, .. } => stack.extend(children.iter().copied()),
            }
        }

        results.sort_unstable();
        results
    }
}

fn union_all<T, I>(mut extents: I) -> Extent<T>
where
    T: Real,
    I: Iterator<Item = Extent<T>>,
{
    // callers never pass an empty chunk
    let first = extents.next().unwrap_or_else(|| {
        Extent::new(T::zero(), T::zero(), T::zero(), T::zero())
    });
    extents.fold(first, |acc, e| acc.union(&e))
}

fn cmp_center_x<T>(a: &Extent<T>, b: &Extent<T>) -> Ordering
where
    T: Real,
{
    let ca = a.min_x + a.max_x;
    let cb = b.min_x + b.max_x;
    ca.partial_cmp(&cb).unwrap_or(Ordering::Equal)
}

fn cmp_center_y<T>(a: &Extent<T>, b: &Extent<T>) -> Ordering
where
    T: Real,
{
    let ca = a.min_y + a.max_y;
    let cb = b.min_y + b.max_y;
    ca.partial_cmp(&cb).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_extents(n: usize) -> Vec<Extent<f64>> {
        (0..n * n)
            .map(|i| {
                let x = (i % n) as f64;
                let y = (i / n) as f64;
                Extent::new(x, y, x + 0.5, y + 0.5)
            })
            .collect()
    }

    #[test]
    fn empty_tree() {
        let tree = Bvh::<f64>::from_extents(&[], 8);
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert!(tree.extent().is_none());
        assert!(tree.query(&Extent::new(0.0, 0.0, 1.0, 1.0)).is_empty());
    }

    #[test]
    fn single_item() {
        let tree = Bvh::from_extents(&[Extent::new(0.0, 0.0, 1.0, 1.0)], 8);
        assert_eq!(tree.len(), 1);
        assert!(tree.node(tree.root().unwrap()).is_leaf());
        assert_eq!(tree.query(&Extent::new(0.5, 0.5, 2.0, 2.0)), vec![0]);
    }

    #[test]
    fn node_size_clamped() {
        let tree = Bvh::from_extents(&grid_extents(4), 0);
        assert_eq!(tree.node_size(), 2);
        assert_eq!(tree.query(&Extent::new(1.2, 1.2, 1.3, 1.3)), vec![5]);
    }

    #[test]
    fn every_item_in_exactly_one_leaf() {
        let extents = grid_extents(13);
        let tree = Bvh::from_extents(&extents, 4);
        let mut seen = vec![0; extents.len()];
        for node in tree.nodes() {
            match node {
                BvhNode::Leaf { items, .. } => {
                    assert!(items.len() <= 4);
                    for (i, e) in items {
                        assert_eq!(*e, extents[*i]);
                        seen[*i] += 1;
                    }
                }
                BvhNode::Internal { children, .. } => {
                    assert!(!children.is_empty() && children.len() <= 4);
                    for &c in children {
                        let child = tree.node(c).extent();
                        let parent = node.extent();
                        assert!(parent.min_x <= child.min_x && parent.max_x >= child.max_x);
                        assert!(parent.min_y <= child.min_y && parent.max_y >= child.max_y);
                    }
                }
            }
        }
        assert!(seen.iter().all(|&c| c == 1));
    }

    #[test]
    fn query_matches_brute_force() {
        let extents = grid_extents(10);
        let tree = Bvh::from_extents(&extents, 5);
        let query = Extent::new(2.25, 3.75, 5.1, 6.0);
        let expected: Vec<usize> = extents
            .iter()
            .enumerate()
            .filter(|(_, e)| e.overlaps(&query))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(tree.query(&query), expected);
    }

    #[test]
    fn tree_is_sync() {
        fn assert_sync<S: Sync + Send>() {}
        assert_sync::<Bvh<f64>>();
        assert_sync::<Bvh<f32>>();
    }
}
