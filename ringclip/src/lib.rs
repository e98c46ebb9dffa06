//! 2D polygon clipping: boolean intersection, union, and difference between polygons with holes,
//! cutting a polygon along a line, correcting overlapping multipolygons into disjoint parts, and
//! spatial predicates between points, lines, and areas.
//!
//! All algorithms are generic over the numeric type through [core::traits::Real] (implemented for
//! `f32` and `f64`), positions are compared with a fuzzy epsilon configured by
//! [clip::ClipOptions].
//!
//! # Examples
//!
//! ```
//! use ringclip::*;
//! let a: Polygon<f64> = polygon![[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]];
//! let b = polygon![[(5.0, 0.0), (15.0, 0.0), (15.0, 10.0), (5.0, 10.0)]];
//! let result = a.intersection(&b).unwrap();
//! assert_eq!(result.len(), 1);
//! assert!((result.area() - 50.0).abs() < 1e-9);
//! ```
#[macro_use]
mod macros;
mod error;

pub mod bvh;
pub mod clip;
pub mod core;
pub mod geometry;
pub mod predicates;

pub use crate::clip::*;
pub use crate::core::math::Point;
pub use crate::core::Control;
pub use crate::error::ClipError;
pub use crate::geometry::*;
pub use crate::predicates::*;
