use static_aabb2d_index as aabb_index;

/// Control flow returned from hooks to stop a long running loop early.
///
/// # Examples
///
/// ```
/// # use ringclip::core::*;
/// # use ringclip::core::traits::*;
/// # use ringclip::*;
/// let square = ring![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
/// let shifted = ring![(1.0, 0.0), (3.0, 0.0), (3.0, 2.0), (1.0, 2.0)];
/// let mp = MultiPolygon::new(vec![Polygon::from_exterior(square), Polygon::from_exterior(shifted)]);
///
/// // stop before the first merge
/// let result = union_correct_with_control(&mp, &ClipOptions::new(), &mut |_i, _j| Control::Break(()));
/// assert_eq!(result.unwrap_err(), ClipError::Cancelled);
/// ```
pub trait ControlFlow {
    /// Value indicating the loop should continue.
    fn continuing() -> Self;

    /// Returns `true` if the loop should stop.
    fn should_break(&self) -> bool;
}

impl<C> ControlFlow for C
where
    C: aabb_index::ControlFlow,
{
    #[inline]
    fn continuing() -> Self {
        <C as aabb_index::ControlFlow>::continuing()
    }

    #[inline]
    fn should_break(&self) -> bool {
        aabb_index::ControlFlow::should_break(self)
    }
}
