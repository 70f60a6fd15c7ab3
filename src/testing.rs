//! Testing utilities for code built on narrow's types
//!
//! This module provides assertion macros for construction results and,
//! behind the `proptest` feature, [`Arbitrary`](proptest::arbitrary::Arbitrary)
//! strategies for domain-bearing refined numbers and not-empty lists.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use narrow::{assert_created, assert_rejected, StrictlyNegativeInt};
//!
//! let number = assert_created!(StrictlyNegativeInt::new(-2));
//! assert_eq!(number.to_primitive(), -2);
//!
//! assert_rejected!(
//!     StrictlyNegativeInt::new(2),
//!     "Number should be less than zero (tried with 2)"
//! );
//! ```

/// Assert that a construction succeeded, evaluating to the built value.
///
/// This macro will panic if the result is an `Err`.
///
/// # Example
///
/// ```rust
/// use narrow::{assert_created, NotEmptyList};
///
/// let list = assert_created!(NotEmptyList::new(vec![1]));
/// assert_eq!(list.len(), 1);
/// ```
#[macro_export]
macro_rules! assert_created {
    ($result:expr) => {
        match $result {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(error) => {
                panic!("Expected creation, got rejection: {}", error);
            }
        }
    };
}

/// Assert that a construction was rejected, evaluating to the error.
///
/// With a second argument, the error text must also equal it.
///
/// # Example
///
/// ```rust
/// use narrow::{assert_rejected, NotEmptyList};
///
/// let error = assert_rejected!(NotEmptyList::<u8>::new(vec![]));
/// assert_eq!(error.to_string(), "Given collection shouldn't be empty.");
///
/// assert_rejected!(NotEmptyList::<u8>::new(vec![]), "Given collection shouldn't be empty.");
/// ```
#[macro_export]
macro_rules! assert_rejected {
    ($result:expr) => {
        match $result {
            ::core::result::Result::Err(error) => error,
            ::core::result::Result::Ok(value) => {
                panic!("Expected rejection, got creation: {:?}", value);
            }
        }
    };
    ($result:expr, $expected:expr) => {{
        let error = $crate::assert_rejected!($result);
        assert_eq!(error.to_string(), $expected.to_string());
        error
    }};
}

#[cfg(feature = "proptest")]
mod strategies {
    use std::fmt::Debug;
    use std::ops::RangeInclusive;

    use proptest::prelude::*;

    use crate::collection::NotEmptyList;
    use crate::refined::{Domain, Refined};

    impl<T, P> Arbitrary for Refined<T, P>
    where
        T: Copy + PartialOrd + Debug + 'static,
        P: Domain<T>,
        RangeInclusive<T>: Strategy<Value = T>,
    {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: ()) -> Self::Strategy {
            (P::MIN..=P::MAX)
                .prop_filter_map("rejected by the predicate", Self::create_or_none)
                .boxed()
        }
    }

    impl<E> Arbitrary for NotEmptyList<E>
    where
        E: Arbitrary + Debug + 'static,
    {
        type Parameters = E::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            proptest::collection::vec(any_with::<E>(args), 1..32)
                .prop_filter_map("empty input", NotEmptyList::create_or_none)
                .boxed()
        }
    }
}
