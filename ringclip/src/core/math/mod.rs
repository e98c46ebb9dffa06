//! Core 2D math: points, extents, segment intersection, and point location.
mod base_math;
mod extent;
mod locate;
mod point;
mod segment;

pub use base_math::*;
pub use extent::Extent;
pub use locate::{is_left, point_in_ring, winding_number, PointLocation};
pub use point::{point, Point};
pub use segment::{point_on_segment, segment_intersection, ExcludeBoundary, SegIntr};
