/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Used by the construction macros to count repetitions for reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a ring from a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use ringclip::ring;
/// # use ringclip::*;
/// let r = ring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)];
/// assert_eq!(r.len(), 3);
/// assert_eq!(r[1], Point::new(1.0, 0.0));
/// ```
#[macro_export]
macro_rules! ring {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut points = ::std::vec::Vec::with_capacity(size);
            $(
                points.push($crate::core::math::Point::new($x.0, $x.1));
            )*
            $crate::geometry::Ring::new(points)
        }
    };
}

/// Construct a polygon from bracketed lists of (x, y) tuples, the first list is the exterior and
/// any following lists are holes.
///
/// # Examples
///
/// ```
/// # use ringclip::polygon;
/// let p: ringclip::Polygon<f64> = polygon![
///     [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
///     [(2.0, 2.0), (2.0, 4.0), (4.0, 4.0), (4.0, 2.0)],
/// ];
/// assert_eq!(p.holes.len(), 1);
/// assert!((p.area() - 96.0).abs() < 1e-9);
/// ```
#[macro_export]
macro_rules! polygon {
    ([$( $x:expr ),* $(,)?] $(, [$( $h:expr ),* $(,)?])* $(,)?) => {
        $crate::geometry::Polygon::new(
            $crate::ring![$($x),*],
            ::std::vec![$($crate::ring![$($h),*]),*],
        )
    };
}
