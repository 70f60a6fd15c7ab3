//! # Narrow
//!
//! > *"Parse, don't validate"*
//!
//! A Rust library of refinement types: numbers, text and collections whose
//! illegal values cannot be represented once constructed.
//!
//! ## Philosophy
//!
//! A value is checked exactly once, when it is built. From then on its type
//! carries the guarantee:
//! - **Numbers** = a primitive narrowed to zero, non-zero, positive, strictly
//!   positive, negative or strictly negative values
//! - **Collections** = lists, sets and maps holding at least one element
//!
//! Every type offers the same construction protocol: `new` returns a
//! `Result`, `create` panics on invalid input and `create_or_none` returns an
//! `Option`.
//!
//! ## Quick Example
//!
//! ```rust
//! use narrow::prelude::*;
//!
//! fn average(values: &NotEmptyList<f64>) -> f64 {
//!     // never divides by zero: the list holds at least one element
//!     values.iter().sum::<f64>() / values.len() as f64
//! }
//!
//! let values = NotEmptyList::create(vec![1.0, 2.0, 3.0]);
//! assert_eq!(average(&values), 2.0);
//!
//! let quantity = StrictlyPositiveInt::create(3);
//! let total: i32 = quantity * 4;
//! assert_eq!(total, 12);
//!
//! match StrictlyPositiveInt::new(0) {
//!     Ok(_) => unreachable!(),
//!     Err(error) => assert_eq!(
//!         error.to_string(),
//!         "Number should be greater than zero (tried with 0)"
//!     ),
//! }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod collection;
pub mod email;
pub mod error;
pub mod number;
pub mod range;
pub mod refined;
pub mod serial;
pub mod testing;

// Re-exports
pub use collection::{NotEmptyCollection, NotEmptyList, NotEmptyMap, NotEmptySet};
pub use email::EmailAddress;
pub use error::{Error, ErrorMessage};
pub use number::AnyInt;
pub use range::{Bound, NotEmptyRange};
pub use refined::{
    Domain, ExcludesZero, Negative, NegativeDouble, NegativeInt, NegativeLong, NonZero,
    NonZeroDouble, NonZeroInt, NonZeroLong, NotBlank, NotBlankString, Positive, PositiveDouble,
    PositiveInt, PositiveLong, Predicate, Refined, StrictlyNegative, StrictlyNegativeDouble,
    StrictlyNegativeInt, StrictlyNegativeLong, StrictlyPositive, StrictlyPositiveDouble,
    StrictlyPositiveInt, StrictlyPositiveLong, StrictlyPositiveUsize, Zero, ZeroDouble, ZeroInt,
    ZeroLong,
};
pub use serial::Serializable;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::collection::{NotEmptyCollection, NotEmptyList, NotEmptyMap, NotEmptySet};
    pub use crate::email::EmailAddress;
    pub use crate::error::{Error, ErrorMessage};
    pub use crate::number::AnyInt;
    pub use crate::range::{Bound, NotEmptyRange};
    pub use crate::refined::*;
    pub use crate::serial::Serializable;
    pub use crate::{not_empty_list, not_empty_map, not_empty_set};
}
