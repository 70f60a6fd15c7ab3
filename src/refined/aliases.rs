//! Type aliases for the refined types this crate ships
//!
//! # Example
//!
//! ```rust
//! use narrow::{NotBlankString, StrictlyPositiveInt, NegativeDouble};
//!
//! let name = NotBlankString::new("Alice".to_string()).unwrap();
//! let age = StrictlyPositiveInt::new(25).unwrap();
//! let balance = NegativeDouble::new(-10.5).unwrap();
//! ```

use super::predicates::numeric::{
    Negative, NonZero, Positive, StrictlyNegative, StrictlyPositive, Zero,
};
use super::predicates::string::NotBlank;
use super::Refined;

// ============================================================================
// Int (i32)
// ============================================================================

/// An i32 that is guaranteed to be zero
pub type ZeroInt = Refined<i32, Zero>;

/// An i32 that is guaranteed to be other than zero
pub type NonZeroInt = Refined<i32, NonZero>;

/// An i32 that is guaranteed to be greater than or equal to zero
pub type PositiveInt = Refined<i32, Positive>;

/// An i32 that is guaranteed to be greater than zero
pub type StrictlyPositiveInt = Refined<i32, StrictlyPositive>;

/// An i32 that is guaranteed to be less than or equal to zero
pub type NegativeInt = Refined<i32, Negative>;

/// An i32 that is guaranteed to be less than zero
pub type StrictlyNegativeInt = Refined<i32, StrictlyNegative>;

// ============================================================================
// Long (i64)
// ============================================================================

/// An i64 that is guaranteed to be zero
pub type ZeroLong = Refined<i64, Zero>;

/// An i64 that is guaranteed to be other than zero
pub type NonZeroLong = Refined<i64, NonZero>;

/// An i64 that is guaranteed to be greater than or equal to zero
pub type PositiveLong = Refined<i64, Positive>;

/// An i64 that is guaranteed to be greater than zero
pub type StrictlyPositiveLong = Refined<i64, StrictlyPositive>;

/// An i64 that is guaranteed to be less than or equal to zero
pub type NegativeLong = Refined<i64, Negative>;

/// An i64 that is guaranteed to be less than zero
pub type StrictlyNegativeLong = Refined<i64, StrictlyNegative>;

// ============================================================================
// Double (f64)
// ============================================================================

/// An f64 that is guaranteed to be zero
pub type ZeroDouble = Refined<f64, Zero>;

/// An f64 that is guaranteed to be other than zero and not NaN
pub type NonZeroDouble = Refined<f64, NonZero>;

/// An f64 that is guaranteed to be greater than or equal to zero
pub type PositiveDouble = Refined<f64, Positive>;

/// An f64 that is guaranteed to be greater than zero
pub type StrictlyPositiveDouble = Refined<f64, StrictlyPositive>;

/// An f64 that is guaranteed to be less than or equal to zero
pub type NegativeDouble = Refined<f64, Negative>;

/// An f64 that is guaranteed to be less than zero
pub type StrictlyNegativeDouble = Refined<f64, StrictlyNegative>;

// ============================================================================
// Text and sizes
// ============================================================================

/// A string that is guaranteed to contain a non-whitespace character
pub type NotBlankString = Refined<String, NotBlank>;

/// A usize that is guaranteed to be greater than zero; the size of a not-empty collection
pub type StrictlyPositiveUsize = Refined<usize, StrictlyPositive>;
