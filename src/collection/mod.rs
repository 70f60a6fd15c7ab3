//! Collections guaranteed to hold at least one element
//!
//! Every wrapper copies its input into storage it owns, then exposes no
//! operation that could remove an element. Once built, a
//! [`NotEmptyList`], [`NotEmptySet`] or [`NotEmptyMap`] stays non-empty and
//! never observes later changes to the structure it was built from.
//!
//! # Example
//!
//! ```rust
//! use narrow::collection::{NotEmptyCollection, NotEmptyMap};
//! use std::collections::HashMap;
//!
//! let mut source = HashMap::from([('a', 1), ('b', 2)]);
//! let map = NotEmptyMap::create(source.clone());
//! source.clear();
//!
//! assert_eq!(map.to_string(), "{'a': 1, 'b': 2}");
//! assert_eq!(map.size().to_primitive(), 2);
//! assert!(NotEmptyMap::<char, i32>::create_or_none(source).is_none());
//! ```

mod list;
mod map;
#[cfg(feature = "serde")]
mod serde_impl;
mod serial;
mod set;

pub use list::NotEmptyList;
pub use map::NotEmptyMap;
pub use set::NotEmptySet;

use crate::error::{Error, ErrorMessage};
use crate::refined::{Refined, StrictlyPositiveUsize};

mod sealed {
    pub trait Sealed {}
}

/// Shared capability of the not-empty collections.
///
/// A collection is its first element (`head`) followed by the remaining
/// elements as another not-empty collection (`tail`), or nothing when it
/// holds a single element. The set of implementers is closed.
pub trait NotEmptyCollection: sealed::Sealed + Sized {
    /// Borrowed view of one element
    type Item<'a>
    where
        Self: 'a;

    /// First element.
    fn head(&self) -> Self::Item<'_>;

    /// Every element but the first, or `None` for a single element.
    fn tail(&self) -> Option<Self>;

    /// Number of elements, derived from the head/tail chain.
    ///
    /// The concrete collections override this with their stored count; the
    /// derivation walks the whole chain and is only suitable for short ones.
    fn size(&self) -> StrictlyPositiveUsize {
        Refined::derived(1 + size_or_zero(self.tail().as_ref()))
    }
}

/// Size of `collection`, or zero when there is none.
///
/// ```rust
/// use narrow::collection::{size_or_zero, NotEmptyList};
///
/// assert_eq!(size_or_zero::<NotEmptyList<i32>>(None), 0);
/// assert_eq!(size_or_zero(Some(&NotEmptyList::of(1, [2, 3]))), 3);
/// ```
pub fn size_or_zero<C: NotEmptyCollection>(collection: Option<&C>) -> usize {
    collection.map_or(0, |c| c.size().to_primitive())
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn empty_collection(collection: &'static str) -> Error {
    #[cfg(feature = "tracing")]
    tracing::debug!(collection, "rejected empty collection");
    Error::InvalidArgument(ErrorMessage::collection_should_not_be_empty())
}

/// Builds a [`NotEmptyList`] from one or more elements.
///
/// ```rust
/// use narrow::not_empty_list;
///
/// let list = not_empty_list![1, 2, 3];
/// assert_eq!(list.to_string(), "[1, 2, 3]");
/// ```
#[macro_export]
macro_rules! not_empty_list {
    ($head:expr $(, $rest:expr)* $(,)?) => {
        $crate::collection::NotEmptyList::of($head, [$($rest),*])
    };
}

/// Builds a [`NotEmptySet`] from one or more elements.
///
/// ```rust
/// use narrow::not_empty_set;
///
/// let set = not_empty_set![3, 1, 2, 1];
/// assert_eq!(set.to_string(), "{1, 2, 3}");
/// ```
#[macro_export]
macro_rules! not_empty_set {
    ($head:expr $(, $rest:expr)* $(,)?) => {
        $crate::collection::NotEmptySet::of($head, [$($rest),*])
    };
}

/// Builds a [`NotEmptyMap`] from one or more `key => value` entries.
///
/// ```rust
/// use narrow::not_empty_map;
///
/// let map = not_empty_map! { "b" => 2, "a" => 1 };
/// assert_eq!(map.to_string(), r#"{"a": 1, "b": 2}"#);
/// ```
#[macro_export]
macro_rules! not_empty_map {
    ($key:expr => $value:expr $(, $rest_key:expr => $rest_value:expr)* $(,)?) => {
        $crate::collection::NotEmptyMap::of(($key, $value), [$(($rest_key, $rest_value)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    // Relies on the derived size.
    #[derive(Clone)]
    struct Chain {
        value: u32,
        next: Option<Box<Chain>>,
    }

    impl Chain {
        fn of_length(length: u32) -> Self {
            (1..length).fold(Chain { value: 0, next: None }, |next, value| Chain {
                value,
                next: Some(Box::new(next)),
            })
        }
    }

    impl sealed::Sealed for Chain {}

    impl NotEmptyCollection for Chain {
        type Item<'a> = &'a u32;

        fn head(&self) -> &u32 {
            &self.value
        }

        fn tail(&self) -> Option<Self> {
            self.next.as_deref().cloned()
        }
    }

    #[test]
    fn derived_size_counts_the_chain() {
        assert_eq!(Chain::of_length(1).size().to_primitive(), 1);
        assert_eq!(Chain::of_length(25).size().to_primitive(), 25);
        assert_eq!(*Chain::of_length(3).head(), 2);
    }

    #[test]
    fn size_or_zero_of_missing_collection() {
        assert_eq!(size_or_zero::<Chain>(None), 0);
        assert_eq!(size_or_zero(Some(&Chain::of_length(4))), 4);
    }

    #[test]
    fn concrete_sizes_match_derivation() {
        let list = NotEmptyList::of(1, [2, 3, 4]);
        let derived = 1 + size_or_zero(list.tail().as_ref());
        assert_eq!(list.size().to_primitive(), derived);

        let set = NotEmptySet::of(1, [2, 2, 3]);
        assert_eq!(set.size().to_primitive(), 1 + size_or_zero(set.tail().as_ref()));

        let map = NotEmptyMap::of(("a", 1), [("b", 2)]);
        assert_eq!(map.size().to_primitive(), 1 + size_or_zero(map.tail().as_ref()));
    }

    #[test]
    fn large_input_size_is_direct() {
        let list = NotEmptyList::create(0..1_000_000);
        assert_eq!(list.size().to_primitive(), 1_000_000);
        assert_eq!(*list.last(), 999_999);
    }

    #[test]
    fn macros_accept_trailing_commas() {
        assert_eq!(not_empty_list![1,].len(), 1);
        assert_eq!(not_empty_set![1, 2,].len(), 2);
        assert_eq!(not_empty_map! { 1 => "one", }.len(), 1);
    }

    #[cfg(feature = "tracing")]
    #[tracing_test::traced_test]
    #[test]
    fn empty_input_is_logged() {
        assert!(NotEmptySet::<u8>::new([]).is_err());
        assert!(logs_contain("rejected empty collection"));
        assert!(logs_contain("NotEmptySet"));
    }
}
