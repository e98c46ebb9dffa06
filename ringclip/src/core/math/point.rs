use crate::core::traits::Real;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position in the plane.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T>
where
    T: Real,
{
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    pub fn zero() -> Self {
        Point::new(T::zero(), T::zero())
    }

    /// Uniformly scale by `scale_factor`.
    pub fn scale(&self, scale_factor: T) -> Self {
        point(scale_factor * self.x, scale_factor * self.y)
    }

    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Perpendicular dot product (`self.x * other.y - self.y * other.x`), positive when `other`
    /// is counter clockwise from `self`.
    pub fn cross(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Point at parametric position `t` on the segment `self -> other`.
    pub fn lerp(&self, other: Self, t: T) -> Self {
        point(self.x + t * (other.x - self.x), self.y + t * (other.y - self.y))
    }

    pub fn midpoint(&self, other: Self) -> Self {
        self.lerp(other, T::half())
    }

    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

#[inline(always)]
pub fn point<T>(x: T, y: T) -> Point<T>
where
    T: Real,
{
    Point::new(x, y)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Point<T>> for Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Point<T>> for Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: &Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<'a, 'b, T: Real> ops::$op_trait<&'b Point<T>> for &'a Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: &'b Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

impl<T: Real> ops::Neg for Point<T> {
    type Output = Point<T>;
    fn neg(self) -> Self::Output {
        Point::new(-self.x, -self.y)
    }
}
