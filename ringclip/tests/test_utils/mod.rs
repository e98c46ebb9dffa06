#![allow(dead_code)]

use ringclip::core::math::Extent;
use ringclip::core::traits::FuzzyEq;
use ringclip::{Polygon, Ring};

/// Fuzzy compare extent values
pub fn extent_fuzzy_eq_eps(a: &Extent<f64>, b: &Extent<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Holds a set of properties of a polygon for comparison in tests
#[derive(Debug, Copy, Clone)]
pub struct PolygonProperties {
    pub hole_count: usize,
    pub area: f64,
    pub extent: Extent<f64>,
}

impl PolygonProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-4;

    pub fn new(hole_count: usize, area: f64, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            hole_count,
            area,
            extent: Extent::new(min_x, min_y, max_x, max_y),
        }
    }

    pub fn from_polygon(polygon: &Polygon<f64>) -> Self {
        Self {
            hole_count: polygon.holes.len(),
            area: polygon.area(),
            extent: polygon.extent().unwrap(),
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.hole_count == other.hole_count
            && self.area.fuzzy_eq_eps(other.area, eps)
            && extent_fuzzy_eq_eps(&self.extent, &other.extent, eps)
    }
}

pub fn create_property_set(polygons: &[Polygon<f64>]) -> Vec<PolygonProperties> {
    polygons.iter().map(PolygonProperties::from_polygon).collect()
}

/// Returns true if every property set in `result` matches exactly one in `expected`, order is
/// ignored.
pub fn property_sets_match(result: &[PolygonProperties], expected: &[PolygonProperties]) -> bool {
    if result.len() != expected.len() {
        return false;
    }

    let mut used = vec![false; expected.len()];
    for r in result {
        let found = expected.iter().enumerate().position(|(i, e)| {
            !used[i] && r.fuzzy_eq_eps(e, PolygonProperties::PROP_CMP_EPS)
        });
        match found {
            Some(i) => used[i] = true,
            None => return false,
        }
    }

    true
}

/// Returns true if `a` and `b` have the same points in the same cyclic order, starting anywhere.
pub fn rings_match_any_start(a: &Ring<f64>, b: &Ring<f64>, eps: f64) -> bool {
    let n = a.len();
    if n != b.len() {
        return false;
    }
    if n == 0 {
        return true;
    }

    (0..n).any(|offset| (0..n).all(|i| a[(i + offset) % n].fuzzy_eq_eps(b[i], eps)))
}

pub fn square(x: f64, y: f64, size: f64) -> Ring<f64> {
    rect(x, y, x + size, y + size)
}

pub fn rect(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Ring<f64> {
    ringclip::ring![(min_x, min_y), (max_x, min_y), (max_x, max_y), (min_x, max_y)]
}

/// Regular polygon approximating a circle, counter clockwise.
pub fn circle(cx: f64, cy: f64, radius: f64, segments: usize) -> Ring<f64> {
    let points = (0..segments)
        .map(|i| {
            let angle = std::f64::consts::TAU * (i as f64) / (segments as f64);
            ringclip::Point::new(cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect();
    Ring::new(points)
}

pub fn total_area(polygons: &[Polygon<f64>]) -> f64 {
    polygons.iter().map(|p| p.area()).sum()
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
