//! Widening conversions between overlapping numeric variants
//!
//! A value of a narrower variant always satisfies the wider ones, so these
//! conversions are infallible. Narrowing goes through [`Refined::refine`].

use super::predicates::numeric::{
    Negative, NonZero, Positive, StrictlyNegative, StrictlyPositive, Zero,
};
use super::{Predicate, Refined};

macro_rules! impl_widening {
    ($from:ty => $($to:ty),+) => {
        $(
            impl<T> From<Refined<T, $from>> for Refined<T, $to>
            where
                $from: Predicate<T>,
                $to: Predicate<T>,
            {
                fn from(narrow: Refined<T, $from>) -> Self {
                    Self::derived(narrow.value)
                }
            }
        )+
    };
}

impl_widening!(StrictlyPositive => Positive, NonZero);
impl_widening!(StrictlyNegative => Negative, NonZero);
impl_widening!(Zero => Positive, Negative);

#[cfg(test)]
mod tests {
    use crate::refined::*;

    #[test]
    fn strictly_positive_is_positive_and_non_zero() {
        let x = StrictlyPositiveInt::create(5);
        let positive: PositiveInt = x.into();
        let non_zero: NonZeroInt = x.into();
        assert_eq!(positive.to_primitive(), 5);
        assert_eq!(non_zero.to_primitive(), 5);
    }

    #[test]
    fn strictly_negative_is_negative_and_non_zero() {
        let x = StrictlyNegativeDouble::create(-0.5);
        let negative: NegativeDouble = x.into();
        let non_zero: NonZeroDouble = x.into();
        assert_eq!(negative.to_primitive(), -0.5);
        assert_eq!(non_zero.to_primitive(), -0.5);
    }

    #[test]
    fn zero_is_positive_and_negative() {
        let zero = ZeroLong::create(0);
        let positive: PositiveLong = zero.into();
        let negative: NegativeLong = zero.into();
        assert_eq!(positive, negative.to_primitive());
    }

    #[test]
    fn widening_works_on_sizes() {
        let size = StrictlyPositiveUsize::create(3);
        let non_zero: Refined<usize, NonZero> = size.into();
        assert_eq!(non_zero.to_primitive(), 3);
    }
}
