//! Boolean clipping between rings and polygons, cutting by a line, and multipolygon correction.
mod boolean;
mod correct;
mod cut;
mod dispatch;
pub mod internal;

pub use boolean::{clip_polygons, clip_rings, subtract_holes};
pub use correct::{
    apply_corrections, diff_correct, diff_correct_with_control, union_correct,
    union_correct_with_control, Correction,
};
pub use cut::cut;
pub use dispatch::{boolean, cut_geometry};

use crate::core::traits::Real;

/// Boolean operation to apply between two areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClipOp {
    /// Area covered by both operands.
    Intersection,
    /// Area covered by either operand.
    Union,
    /// Area of the first operand not covered by the second.
    Difference,
}

impl ClipOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClipOp::Intersection => "intersection",
            ClipOp::Union => "union",
            ClipOp::Difference => "difference",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ClipOptions<T>
where
    T: Real,
{
    /// Fuzzy comparison epsilon used for determining if two positions are equal, if a point lies
    /// on a segment or ring boundary, and for snapping crossing points to vertexes.
    pub pos_equal_eps: T,
    /// Once the product of the two rings' edge counts reaches this value candidate edge pairs are
    /// found with a dual tree query instead of testing every pair. `0` always uses the trees.
    pub bvh_pair_threshold: usize,
    /// Arity of internal tree nodes and capacity of tree leaves (at least 2).
    pub bvh_node_size: usize,
}

impl<T> ClipOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            pos_equal_eps: T::from(1e-5).unwrap(),
            bvh_pair_threshold: 4096,
            bvh_node_size: 8,
        }
    }
}

impl<T> Default for ClipOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
