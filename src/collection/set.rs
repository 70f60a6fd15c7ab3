//! Sets guaranteed to contain at least one element

use std::collections::BTreeSet;
use std::fmt;

use super::{empty_collection, sealed, NotEmptyCollection};
use crate::error::Error;
use crate::refined::{Refined, StrictlyPositiveUsize};

/// A set guaranteed to contain at least one element.
///
/// Elements are kept in ascending order, duplicates collapse, and the head is
/// the smallest element.
///
/// ```
/// use narrow::NotEmptySet;
///
/// let set = NotEmptySet::create(vec![3, 1, 3, 2]);
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.head(), &1);
/// assert_eq!(set.to_string(), "{1, 2, 3}");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotEmptySet<E: Ord> {
    head: E,
    tail: BTreeSet<E>,
}

impl<E: Ord> NotEmptySet<E> {
    /// Copies `elements` into a new set, failing if there are none.
    pub fn new<I>(elements: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = E>,
    {
        Self::split(elements.into_iter().collect()).ok_or_else(|| empty_collection("NotEmptySet"))
    }

    /// Copies `elements` into a new set, panicking if there are none.
    ///
    /// # Panics
    ///
    /// Panics with "Given collection shouldn't be empty." on empty input.
    #[track_caller]
    pub fn create<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        match Self::new(elements) {
            Ok(set) => set,
            Err(error) => panic!("{error}"),
        }
    }

    /// Copies `elements` into a new set, or returns `None` if there are none.
    pub fn create_or_none<I>(elements: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
    {
        Self::new(elements).ok()
    }

    /// Create a set from one element and any others.
    pub fn of<I>(first: E, rest: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut tail: BTreeSet<E> = rest.into_iter().collect();
        let head = match tail.pop_first() {
            Some(smallest) if smallest < first => {
                tail.insert(first);
                smallest
            }
            Some(smallest) if smallest > first => {
                tail.insert(smallest);
                first
            }
            _ => first,
        };
        Self { head, tail }
    }

    fn split(mut elements: BTreeSet<E>) -> Option<Self> {
        let head = elements.pop_first()?;
        Some(Self {
            head,
            tail: elements,
        })
    }

    /// Smallest element.
    pub fn head(&self) -> &E {
        &self.head
    }

    /// Largest element.
    pub fn last(&self) -> &E {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of distinct elements, always at least one.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if the set holds `value`.
    pub fn contains(&self, value: &E) -> bool {
        self.head == *value || self.tail.contains(value)
    }

    /// Iterate over the elements in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Convert into a regular `BTreeSet`.
    pub fn into_set(self) -> BTreeSet<E> {
        let mut set = self.tail;
        set.insert(self.head);
        set
    }
}

impl<E: Ord> sealed::Sealed for NotEmptySet<E> {}

impl<E: Ord + Clone> NotEmptyCollection for NotEmptySet<E> {
    type Item<'a>
        = &'a E
    where
        Self: 'a;

    fn head(&self) -> &E {
        &self.head
    }

    fn tail(&self) -> Option<Self> {
        Self::split(self.tail.clone())
    }

    fn size(&self) -> StrictlyPositiveUsize {
        Refined::derived(self.len())
    }
}

impl<E: Ord> From<NotEmptySet<E>> for BTreeSet<E> {
    fn from(set: NotEmptySet<E>) -> Self {
        set.into_set()
    }
}

impl<E: Ord> IntoIterator for NotEmptySet<E> {
    type Item = E;
    type IntoIter = std::iter::Chain<std::iter::Once<E>, std::collections::btree_set::IntoIter<E>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<E: Ord + fmt::Debug> fmt::Debug for NotEmptySet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<E: Ord + fmt::Debug> fmt::Display for NotEmptySet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn duplicates_collapse() {
        let set = NotEmptySet::of(2, [2, 1, 1]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        assert_eq!(NotEmptySet::of(1, [2, 3]), NotEmptySet::create(vec![3, 2, 1]));
    }

    #[test]
    fn rejects_empty_input() {
        let error = NotEmptySet::<i32>::new(HashSet::new()).unwrap_err();
        assert_eq!(error.to_string(), "Given collection shouldn't be empty.");
        assert!(NotEmptySet::<i32>::create_or_none(Vec::new()).is_none());
    }

    #[test]
    fn source_mutation_is_not_observed() {
        let mut source = HashSet::from(["x".to_string(), "y".to_string()]);
        let set = NotEmptySet::create(source.iter().cloned());
        source.clear();
        assert!(set.contains(&"x".to_string()));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn head_tail_and_last() {
        let set = NotEmptySet::of(5, [9, 7]);
        assert_eq!(set.head(), &5);
        assert_eq!(set.last(), &9);
        let tail = NotEmptyCollection::tail(&set).unwrap();
        assert_eq!(tail, NotEmptySet::of(7, [9]));
        assert!(NotEmptyCollection::tail(&NotEmptySet::of(1, [])).is_none());
    }

    #[test]
    fn into_btree_set() {
        let set: BTreeSet<_> = NotEmptySet::of('b', ['a']).into();
        assert_eq!(set, BTreeSet::from(['a', 'b']));
    }
}
