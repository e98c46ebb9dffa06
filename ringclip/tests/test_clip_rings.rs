mod test_utils;

use ringclip::core::math::Extent;
use ringclip::core::traits::FuzzyEq;
use ringclip::*;
use test_utils::{
    circle, create_property_set, init_logger, property_sets_match, rect, rings_match_any_start,
    square, total_area, PolygonProperties,
};

fn clip(a: &Ring<f64>, b: &Ring<f64>, op: ClipOp) -> Vec<Polygon<f64>> {
    clip_rings(a, b, op, &ClipOptions::new()).unwrap()
}

#[test]
fn offset_rectangles_intersection() {
    init_logger();
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = a.translate(5.0, 0.0);
    let result = clip(&a, &b, ClipOp::Intersection);
    assert_eq!(result.len(), 1);
    assert!(result[0].holes.is_empty());
    assert_fuzzy_eq!(result[0].area(), 50.0);
    let expected = ring![(5.0, 0.0), (10.0, 0.0), (10.0, 10.0), (5.0, 10.0)];
    assert!(
        rings_match_any_start(&result[0].exterior, &expected, 1e-9),
        "{:?}",
        result[0].exterior
    );
}

#[test]
fn offset_rectangles_union_and_difference() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = a.translate(5.0, 0.0);

    let union = clip(&a, &b, ClipOp::Union);
    assert!(property_sets_match(
        &create_property_set(&union),
        &[PolygonProperties::new(0, 150.0, 0.0, 0.0, 15.0, 10.0)]
    ));

    let diff = clip(&a, &b, ClipOp::Difference);
    assert!(property_sets_match(
        &create_property_set(&diff),
        &[PolygonProperties::new(0, 50.0, 0.0, 0.0, 5.0, 10.0)]
    ));

    let diff = clip(&b, &a, ClipOp::Difference);
    assert!(property_sets_match(
        &create_property_set(&diff),
        &[PolygonProperties::new(0, 50.0, 10.0, 0.0, 15.0, 10.0)]
    ));
}

#[test]
fn triangle_crossing_square_side() {
    let sq = square(0.0, 0.0, 4.0);
    let tri = ring![(2.0, 1.0), (6.0, 2.0), (2.0, 3.0)];

    assert_fuzzy_eq!(total_area(&clip(&sq, &tri, ClipOp::Intersection)), 3.0);
    assert_fuzzy_eq!(total_area(&clip(&sq, &tri, ClipOp::Union)), 17.0);
    assert_fuzzy_eq!(total_area(&clip(&sq, &tri, ClipOp::Difference)), 13.0);
    assert_fuzzy_eq!(total_area(&clip(&tri, &sq, ClipOp::Difference)), 1.0);

    let union = clip(&sq, &tri, ClipOp::Union);
    assert_eq!(union.len(), 1);
    assert_eq!(union[0].extent(), Some(Extent::new(0.0, 0.0, 6.0, 4.0)));
}

#[test]
fn union_with_self_is_identity() {
    let shapes = [
        square(0.0, 0.0, 3.0),
        ring![(0.0, 0.0), (4.0, 0.0), (4.0, 1.0), (1.0, 1.0), (1.0, 4.0), (0.0, 4.0)],
        ring![(0.0, 0.0), (2.0, -1.0), (4.0, 0.0), (2.0, 3.0)],
    ];

    for shape in shapes.iter() {
        for &op in [ClipOp::Union, ClipOp::Intersection].iter() {
            let result = clip(shape, shape, op);
            assert_eq!(result.len(), 1, "op: {:?}, shape: {:?}", op, shape);
            assert!(rings_match_any_start(&result[0].exterior, shape, 1e-9));
        }

        assert!(clip(shape, shape, ClipOp::Difference).is_empty());
    }
}

#[test]
fn commutative_operations() {
    let pairs = [
        (rect(0.0, 0.0, 10.0, 10.0), rect(5.0, 0.0, 15.0, 10.0)),
        (square(0.0, 0.0, 4.0), ring![(2.0, 1.0), (6.0, 2.0), (2.0, 3.0)]),
        (circle(0.0, 0.0, 5.0, 32), circle(3.3, 0.7, 4.5, 24)),
    ];

    for (a, b) in pairs.iter() {
        for &op in [ClipOp::Intersection, ClipOp::Union].iter() {
            let ab = create_property_set(&clip(a, b, op));
            let ba = create_property_set(&clip(b, a, op));
            assert!(property_sets_match(&ab, &ba), "op: {:?}", op);
        }
    }
}

#[test]
fn complement_identity() {
    let pairs = [
        (rect(0.0, 0.0, 10.0, 10.0), rect(5.0, 0.0, 15.0, 10.0)),
        (square(0.0, 0.0, 4.0), ring![(2.0, 1.0), (6.0, 2.0), (2.0, 3.0)]),
        (circle(0.0, 0.0, 5.0, 32), circle(3.3, 0.7, 4.5, 24)),
        (square(0.0, 0.0, 10.0), square(2.0, 2.0, 3.0)),
        (square(0.0, 0.0, 1.0), square(5.0, 5.0, 1.0)),
    ];

    for (a, b) in pairs.iter() {
        let union = total_area(&clip(a, b, ClipOp::Union));
        let intersection = total_area(&clip(a, b, ClipOp::Intersection));
        assert_fuzzy_eq!(union, a.area() + b.area() - intersection, 1e-6);

        let diff = total_area(&clip(a, b, ClipOp::Difference));
        assert_fuzzy_eq!(diff, a.area() - intersection, 1e-6);
    }
}

#[test]
fn tree_and_brute_force_candidates_agree() {
    let a = circle(0.0, 0.0, 5.0, 64);
    let b = circle(3.3, 0.7, 4.5, 96);
    let brute = ClipOptions {
        bvh_pair_threshold: usize::MAX,
        ..ClipOptions::new()
    };
    let tree = ClipOptions {
        bvh_pair_threshold: 0,
        bvh_node_size: 4,
        ..ClipOptions::new()
    };

    for &op in [ClipOp::Intersection, ClipOp::Union, ClipOp::Difference].iter() {
        let r1 = clip_rings(&a, &b, op, &brute).unwrap();
        let r2 = clip_rings(&a, &b, op, &tree).unwrap();
        assert_eq!(r1, r2, "op: {:?}", op);
        assert_eq!(r1.len(), 1);
    }
}

#[test]
fn nested_rings() {
    let outer = square(0.0, 0.0, 10.0);
    let inner = square(2.0, 2.0, 2.0);

    let result = clip(&outer, &inner, ClipOp::Intersection);
    assert_eq!(result, vec![Polygon::from_exterior(inner.clone())]);

    let result = clip(&outer, &inner, ClipOp::Union);
    assert_eq!(result, vec![Polygon::from_exterior(outer.clone())]);

    let result = clip(&outer, &inner, ClipOp::Difference);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].holes.len(), 1);
    assert_fuzzy_eq!(result[0].area(), 96.0);
    assert_eq!(result[0].holes[0].orientation(), RingOrientation::Clockwise);

    assert!(clip(&inner, &outer, ClipOp::Difference).is_empty());
}

#[test]
fn inner_ring_touching_outer_boundary() {
    let outer = square(0.0, 0.0, 10.0);
    // shares a corner and part of two sides
    let inner = square(0.0, 0.0, 4.0);

    assert_fuzzy_eq!(total_area(&clip(&outer, &inner, ClipOp::Intersection)), 16.0);
    assert_fuzzy_eq!(total_area(&clip(&outer, &inner, ClipOp::Union)), 100.0);
    assert!(clip(&inner, &outer, ClipOp::Difference).is_empty());
}

#[test]
fn disjoint_rings() {
    let a = square(0.0, 0.0, 1.0);
    let b = square(5.0, 5.0, 1.0);

    assert!(clip(&a, &b, ClipOp::Intersection).is_empty());
    let union = clip(&a, &b, ClipOp::Union);
    assert_eq!(union.len(), 2);
    assert_eq!(
        clip(&a, &b, ClipOp::Difference),
        vec![Polygon::from_exterior(a.clone())]
    );
}

#[test]
fn input_orientation_and_closing_point_are_ignored() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(5.0, 0.0, 15.0, 10.0);
    let expected = create_property_set(&clip(&a, &b, ClipOp::Intersection));

    let mut closed = a.reversed();
    closed.points.push(closed.points[0]);
    let result = clip(&closed, &b.reversed(), ClipOp::Intersection);
    assert!(property_sets_match(&create_property_set(&result), &expected));
    assert_eq!(
        result[0].exterior.orientation(),
        RingOrientation::CounterClockwise
    );
}

#[test]
fn too_few_points() {
    let a = ring![(0.0, 0.0), (1.0, 0.0)];
    let b = square(0.0, 0.0, 1.0);
    let err = clip_rings(&a, &b, ClipOp::Union, &ClipOptions::new()).unwrap_err();
    assert_eq!(err, ClipError::TooFewPoints { count: 2 });
    assert!(err.is_invalid_input());

    // repeated points do not count
    let a = ring![(0.0, 0.0), (0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (0.0, 0.0)];
    let err = clip_rings(&b, &a, ClipOp::Intersection, &ClipOptions::new()).unwrap_err();
    assert_eq!(err, ClipError::TooFewPoints { count: 2 });
}

#[test]
fn single_precision() {
    let a: Ring<f32> = ring![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
    let b = a.translate(5.0, 0.0);
    let result = clip_rings(&a, &b, ClipOp::Intersection, &ClipOptions::new()).unwrap();
    assert_eq!(result.len(), 1);
    assert!((result[0].area() - 50.0).abs() < 1e-3);
}
