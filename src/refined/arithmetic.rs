//! Arithmetic on refined numbers
//!
//! Addition, subtraction and multiplication may break any invariant
//! (overflow, cancellation), so they always return the bare primitive.
//! Division and remainder only accept a divisor whose predicate implements
//! [`ExcludesZero`]; the divisor's type already proves it is not zero.
//! Integer arithmetic wraps, like `i32::wrapping_add`: `MAX + 1` yields `MIN`
//! and `MIN / -1` yields `MIN` instead of panicking.
//!
//! ```rust
//! use narrow::{NonZeroInt, StrictlyPositiveInt, StrictlyNegativeInt};
//!
//! let x = StrictlyPositiveInt::create(7);
//! let y = StrictlyPositiveInt::create(2);
//! let sum: i32 = x + y;
//! assert_eq!(sum, 9);
//! assert_eq!(x / y, 3);
//! assert_eq!(10 % NonZeroInt::create(4), 2);
//!
//! // Negating a strictly positive number can never fail.
//! let negated: StrictlyNegativeInt = -x;
//! assert_eq!(negated.to_primitive(), -7);
//! ```

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use super::predicates::numeric::{
    ExcludesZero, Negative, NonZero, Positive, StrictlyNegative, StrictlyPositive, Zero,
};
use super::{Predicate, Refined};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, |$x:ident, $y:ident| $body:expr, [$($ty:ty),+]) => {
        $(
            impl<P, Q> $trait<Refined<$ty, Q>> for Refined<$ty, P>
            where
                P: Predicate<$ty>,
                Q: Predicate<$ty>,
            {
                type Output = $ty;

                fn $method(self, other: Refined<$ty, Q>) -> $ty {
                    let ($x, $y) = (self.value, other.value);
                    $body
                }
            }

            impl<P: Predicate<$ty>> $trait<$ty> for Refined<$ty, P> {
                type Output = $ty;

                fn $method(self, other: $ty) -> $ty {
                    let ($x, $y) = (self.value, other);
                    $body
                }
            }

            impl<P: Predicate<$ty>> $trait<Refined<$ty, P>> for $ty {
                type Output = $ty;

                fn $method(self, other: Refined<$ty, P>) -> $ty {
                    let ($x, $y) = (self, other.value);
                    $body
                }
            }
        )+
    };
}

macro_rules! impl_division {
    ($trait:ident, $method:ident, |$x:ident, $y:ident| $body:expr, [$($ty:ty),+]) => {
        $(
            impl<P, Q> $trait<Refined<$ty, Q>> for Refined<$ty, P>
            where
                P: Predicate<$ty>,
                Q: Predicate<$ty> + ExcludesZero,
            {
                type Output = $ty;

                fn $method(self, other: Refined<$ty, Q>) -> $ty {
                    let ($x, $y) = (self.value, other.value);
                    $body
                }
            }

            impl<Q> $trait<Refined<$ty, Q>> for $ty
            where
                Q: Predicate<$ty> + ExcludesZero,
            {
                type Output = $ty;

                fn $method(self, other: Refined<$ty, Q>) -> $ty {
                    let ($x, $y) = (self, other.value);
                    $body
                }
            }
        )+
    };
}

macro_rules! impl_primitive_comparison {
    ($($ty:ty),+) => {
        $(
            impl<P: Predicate<$ty>> PartialEq<$ty> for Refined<$ty, P> {
                fn eq(&self, other: &$ty) -> bool {
                    self.value == *other
                }
            }

            impl<P: Predicate<$ty>> PartialOrd<$ty> for Refined<$ty, P> {
                fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                    self.value.partial_cmp(other)
                }
            }
        )+
    };
}

macro_rules! impl_neg {
    ($from:ty => $to:ty, [$($ty:ty),+]) => {
        $(
            impl Neg for Refined<$ty, $from> {
                type Output = Refined<$ty, $to>;

                fn neg(self) -> Self::Output {
                    Refined::derived(-self.value)
                }
            }
        )+
    };
}

impl_binary_op!(Add, add, |x, y| x.wrapping_add(y), [i8, i16, i32, i64]);
impl_binary_op!(Sub, sub, |x, y| x.wrapping_sub(y), [i8, i16, i32, i64]);
impl_binary_op!(Mul, mul, |x, y| x.wrapping_mul(y), [i8, i16, i32, i64]);
impl_binary_op!(Add, add, |x, y| x + y, [f32, f64]);
impl_binary_op!(Sub, sub, |x, y| x - y, [f32, f64]);
impl_binary_op!(Mul, mul, |x, y| x * y, [f32, f64]);

impl_division!(Div, div, |x, y| x.wrapping_div(y), [i8, i16, i32, i64]);
impl_division!(Rem, rem, |x, y| x.wrapping_rem(y), [i8, i16, i32, i64]);
impl_division!(Div, div, |x, y| x / y, [f32, f64]);
impl_division!(Rem, rem, |x, y| x % y, [f32, f64]);

impl_primitive_comparison!(i8, i16, i32, i64, f32, f64);

// -MAX always fits, -MIN never does
impl_neg!(StrictlyPositive => StrictlyNegative, [i8, i16, i32, i64, f32, f64]);
impl_neg!(Positive => Negative, [i8, i16, i32, i64, f32, f64]);
impl_neg!(Zero => Zero, [i8, i16, i32, i64, f32, f64]);
impl_neg!(StrictlyNegative => StrictlyPositive, [f32, f64]);
impl_neg!(Negative => Positive, [f32, f64]);
impl_neg!(NonZero => NonZero, [f32, f64]);

#[cfg(test)]
mod tests {
    use crate::refined::*;

    #[test]
    fn sum_of_strictly_positive_values_is_a_primitive() {
        let x = StrictlyPositiveInt::create(40);
        let y = StrictlyPositiveInt::create(2);
        let sum: i32 = x + y;
        assert_eq!(sum, 42);
    }

    #[test]
    fn mixed_operands() {
        let x = NegativeInt::create(-3);
        assert_eq!(x + 5, 2);
        assert_eq!(5 + x, 2);
        assert_eq!(x - 1, -4);
        assert_eq!(1 - x, 4);
        assert_eq!(x * StrictlyNegativeInt::create(-2), 6);
        assert_eq!(PositiveDouble::create(1.5) * 2.0, 3.0);
    }

    #[test]
    fn division_by_variants_excluding_zero() {
        let x = NegativeInt::create(-9);
        assert_eq!(x / StrictlyPositiveInt::create(2), -4);
        assert_eq!(x / StrictlyNegativeInt::create(-3), 3);
        assert_eq!(x % NonZeroInt::create(4), -1);
        assert_eq!(9 / NonZeroInt::create(-3), -3);
        assert_eq!(1.0 / StrictlyPositiveDouble::create(4.0), 0.25);
    }

    #[test]
    fn division_overflow_wraps() {
        let min = StrictlyNegativeInt::min();
        let minus_one = StrictlyNegativeInt::max();
        assert_eq!(min / minus_one, i32::MIN);
        assert_eq!(min % minus_one, 0);
    }

    #[test]
    fn integer_overflow_wraps() {
        let max = StrictlyPositiveInt::max();
        assert_eq!(max + max, -2);
        assert_eq!(max + 1, i32::MIN);
        assert_eq!(StrictlyNegativeInt::min() - 1, i32::MAX);
        assert_eq!(1 - StrictlyNegativeInt::min(), i32::MIN + 1);
        assert_eq!(StrictlyNegativeInt::min() * NonZeroInt::create(-1), i32::MIN);
        assert_eq!(StrictlyPositiveLong::max() * 2, -2);
    }

    #[test]
    fn negation_keeps_a_refined_type_when_safe() {
        let positive: StrictlyNegativeInt = -StrictlyPositiveInt::max();
        assert_eq!(positive.to_primitive(), -i32::MAX);
        let zero: NegativeInt = -PositiveInt::create(0);
        assert_eq!(zero.to_primitive(), 0);
        let flipped: StrictlyPositiveDouble = -StrictlyNegativeDouble::create(-2.5);
        assert_eq!(flipped.to_primitive(), 2.5);
    }

    #[test]
    fn comparison_with_primitives() {
        let x = StrictlyNegativeInt::create(-1);
        assert!(x < 0);
        assert!(x == -1);
        assert!(PositiveDouble::create(0.5) > 0.25);
    }
}
