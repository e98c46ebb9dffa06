//! Shared numeric traits, 2D math, and control flow types used by all of the clipping algorithms.

use self::traits::ControlFlow;
pub mod math;
pub mod traits;

/// Control flow value returned by caller supplied hooks (e.g. the correction loop hooks).
#[derive(Debug)]
pub enum Control<B = ()> {
    /// Keep going.
    Continue,
    /// Stop as soon as possible, carrying a value.
    Break(B),
}

impl<B> Default for Control<B> {
    #[inline]
    fn default() -> Self {
        Control::Continue
    }
}

impl<B> ControlFlow for Control<B> {
    #[inline]
    fn continuing() -> Self {
        Control::Continue
    }

    #[inline]
    fn should_break(&self) -> bool {
        matches!(*self, Control::Break(_))
    }
}
