//! Numeric predicates for refined types
//!
//! This module provides the numeric constraint lattice:
//! - [`Zero`]: value == 0
//! - [`NonZero`]: value != 0
//! - [`Positive`]: value >= 0
//! - [`StrictlyPositive`]: value > 0
//! - [`Negative`]: value <= 0
//! - [`StrictlyNegative`]: value < 0
//!
//! The variants overlap by capability: a strictly positive number is both
//! positive and non-zero, and converts into either through `From`.
//! Floating-point predicates reject NaN.
//!
//! # Example
//!
//! ```rust
//! use narrow::refined::{Refined, Negative, StrictlyNegative};
//!
//! type NegativeI32 = Refined<i32, Negative>;
//! assert!(NegativeI32::new(0).is_ok());
//! assert!(NegativeI32::new(1).is_err());
//!
//! type StrictlyNegativeF64 = Refined<f64, StrictlyNegative>;
//! assert!(StrictlyNegativeF64::new(-0.5).is_ok());
//! assert!(StrictlyNegativeF64::new(f64::NAN).is_err());
//! ```

use once_cell::sync::Lazy;

use super::super::Predicate;
use crate::error::{invariant_breach, ErrorMessage};
use crate::range::{Bound, NotEmptyRange};

/// Value must be zero (== 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

/// Value must be non-zero (!= 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct NonZero;

/// Value must be positive (>= 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct Positive;

/// Value must be strictly positive (> 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictlyPositive;

/// Value must be negative (<= 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct Negative;

/// Value must be strictly negative (< 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictlyNegative;

/// Marks predicates whose values can never be zero.
///
/// Dividing by a refined value whose predicate implements this trait needs
/// no runtime zero check.
pub trait ExcludesZero {}

impl ExcludesZero for NonZero {}
impl ExcludesZero for StrictlyPositive {}
impl ExcludesZero for StrictlyNegative {}

/// The fixed set of values a predicate accepts for a bounded primitive.
///
/// ```rust
/// use narrow::refined::{Domain, StrictlyPositive};
///
/// assert_eq!(<StrictlyPositive as Domain<i8>>::MIN, 1);
/// assert_eq!(<StrictlyPositive as Domain<i8>>::MAX, i8::MAX);
/// assert_eq!(<StrictlyPositive as Domain<i8>>::range().to_string(), "[1;127]");
/// ```
pub trait Domain<T>: Predicate<T> {
    /// Smallest accepted value
    const MIN: T;

    /// Largest accepted value
    const MAX: T;

    /// Canonical inclusive range `[MIN;MAX]`, built once on first access
    fn range() -> &'static NotEmptyRange<T>;
}

macro_rules! impl_numeric_predicate {
    ($pred:ty, |$v:ident| $check:expr, $message:path, $desc:expr, [$($ty:ty),+]) => {
        $(
            impl Predicate<$ty> for $pred {
                fn check(value: &$ty) -> Result<(), ErrorMessage> {
                    let $v = *value;
                    if $check {
                        Ok(())
                    } else {
                        Err($message(value))
                    }
                }

                fn description() -> &'static str {
                    $desc
                }
            }
        )+
    };
}

impl_numeric_predicate!(
    Zero,
    |v| v == 0,
    ErrorMessage::should_be_zero,
    "zero (== 0)",
    [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize]
);

impl_numeric_predicate!(
    Zero,
    |v| v == 0.0,
    ErrorMessage::should_be_zero,
    "zero (== 0)",
    [f32, f64]
);

impl_numeric_predicate!(
    NonZero,
    |v| v != 0,
    ErrorMessage::should_be_other_than_zero,
    "non-zero number (!= 0)",
    [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize]
);

impl_numeric_predicate!(
    NonZero,
    |v| v != 0.0 && !v.is_nan(),
    ErrorMessage::should_be_other_than_zero,
    "non-zero number (!= 0)",
    [f32, f64]
);

impl_numeric_predicate!(
    Positive,
    |v| v >= 0,
    ErrorMessage::should_be_positive,
    "positive number (>= 0)",
    [i8, i16, i32, i64, i128, isize]
);

impl_numeric_predicate!(
    Positive,
    |v| v >= 0.0,
    ErrorMessage::should_be_positive,
    "positive number (>= 0)",
    [f32, f64]
);

impl_numeric_predicate!(
    StrictlyPositive,
    |v| v > 0,
    ErrorMessage::should_be_greater_than_zero,
    "strictly positive number (> 0)",
    [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize]
);

impl_numeric_predicate!(
    StrictlyPositive,
    |v| v > 0.0,
    ErrorMessage::should_be_greater_than_zero,
    "strictly positive number (> 0)",
    [f32, f64]
);

impl_numeric_predicate!(
    Negative,
    |v| v <= 0,
    ErrorMessage::should_be_negative,
    "negative number (<= 0)",
    [i8, i16, i32, i64, i128, isize]
);

impl_numeric_predicate!(
    Negative,
    |v| v <= 0.0,
    ErrorMessage::should_be_negative,
    "negative number (<= 0)",
    [f32, f64]
);

impl_numeric_predicate!(
    StrictlyNegative,
    |v| v < 0,
    ErrorMessage::should_be_less_than_zero,
    "strictly negative number (< 0)",
    [i8, i16, i32, i64, i128, isize]
);

impl_numeric_predicate!(
    StrictlyNegative,
    |v| v < 0.0,
    ErrorMessage::should_be_less_than_zero,
    "strictly negative number (< 0)",
    [f32, f64]
);

macro_rules! impl_domain {
    ($pred:ty, $ty:ty, $min:expr, $max:expr) => {
        impl Domain<$ty> for $pred {
            const MIN: $ty = $min;
            const MAX: $ty = $max;

            fn range() -> &'static NotEmptyRange<$ty> {
                static RANGE: Lazy<NotEmptyRange<$ty>> = Lazy::new(|| {
                    NotEmptyRange::new(
                        Bound::Inclusive(<$pred as Domain<$ty>>::MIN),
                        Bound::Inclusive(<$pred as Domain<$ty>>::MAX),
                    )
                    .unwrap_or_else(|error| invariant_breach::<NotEmptyRange<$ty>>(&error))
                });
                &RANGE
            }
        }
    };
}

macro_rules! impl_signed_domains {
    ($($ty:ident),+) => {
        $(
            impl_domain!(Zero, $ty, 0, 0);
            impl_domain!(NonZero, $ty, $ty::MIN, $ty::MAX);
            impl_domain!(Positive, $ty, 0, $ty::MAX);
            impl_domain!(StrictlyPositive, $ty, 1, $ty::MAX);
            impl_domain!(Negative, $ty, $ty::MIN, 0);
            impl_domain!(StrictlyNegative, $ty, $ty::MIN, -1);
        )+
    };
}

impl_signed_domains!(i8, i16, i32, i64);
