//! Lists guaranteed to contain at least one element

use std::fmt;

use super::{empty_collection, sealed, NotEmptyCollection};
use crate::error::Error;
use crate::refined::{Refined, StrictlyPositiveUsize};

/// A list guaranteed to contain at least one element.
///
/// Elements keep their insertion order, and equality is element-wise in that
/// order. The first element is stored apart from the rest, so `head`, `last`
/// and `len` never fail and never allocate.
///
/// # Example
///
/// ```
/// use narrow::NotEmptyList;
///
/// let list = NotEmptyList::of(1, [2, 3, 4]);
/// assert_eq!(list.head(), &1);
/// assert_eq!(list.last(), &4);
/// assert_eq!(list.len(), 4);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotEmptyList<E> {
    head: E,
    tail: Vec<E>,
}

impl<E> NotEmptyList<E> {
    /// Copies `elements` into a new list, failing if there are none.
    ///
    /// ```
    /// use narrow::NotEmptyList;
    ///
    /// let source = vec![1, 2, 3];
    /// let list = NotEmptyList::new(source.iter().copied()).unwrap();
    /// assert_eq!(list.len(), 3);
    ///
    /// let error = NotEmptyList::new(Vec::<i32>::new()).unwrap_err();
    /// assert_eq!(error.to_string(), "Given collection shouldn't be empty.");
    /// ```
    pub fn new<I>(elements: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = E>,
    {
        Self::split(elements).ok_or_else(|| empty_collection("NotEmptyList"))
    }

    /// Copies `elements` into a new list, panicking if there are none.
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
            Ok(list) => list,
            Err(error) => panic!("{error}"),
        }
    }

    /// Copies `elements` into a new list, or returns `None` if there are none.
    pub fn create_or_none<I>(elements: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
    {
        Self::new(elements).ok()
    }

    /// Create a list from a first element followed by any others.
    ///
    /// Always succeeds.
    pub fn of<I>(head: E, rest: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self {
            head,
            tail: rest.into_iter().collect(),
        }
    }

    /// Create a list holding exactly one element.
    ///
    /// ```
    /// use narrow::NotEmptyList;
    ///
    /// let list = NotEmptyList::singleton(42);
    /// assert_eq!(list.len(), 1);
    /// assert_eq!(list.head(), list.last());
    /// ```
    pub fn singleton(value: E) -> Self {
        Self::of(value, [])
    }

    fn split<I>(elements: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let mut elements = elements.into_iter();
        let head = elements.next()?;
        Some(Self {
            head,
            tail: elements.collect(),
        })
    }

    /// First element.
    pub fn head(&self) -> &E {
        &self.head
    }

    /// Last element.
    pub fn last(&self) -> &E {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements, always at least one.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&E> {
        match index {
            0 => Some(&self.head),
            _ => self.tail.get(index - 1),
        }
    }

    /// Iterate over all elements in order.
    ///
    /// ```
    /// use narrow::not_empty_list;
    ///
    /// let sum: i32 = not_empty_list![1, 2, 3].iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Apply `f` to every element. The result is never empty either.
    ///
    /// ```
    /// use narrow::not_empty_list;
    ///
    /// let doubled = not_empty_list![1, 2, 3].map(|x| x * 2);
    /// assert_eq!(doubled, not_empty_list![2, 4, 6]);
    /// ```
    pub fn map<U, F>(self, mut f: F) -> NotEmptyList<U>
    where
        F: FnMut(E) -> U,
    {
        let head = f(self.head);
        let tail = self.tail.into_iter().map(f).collect();
        NotEmptyList { head, tail }
    }

    /// Append every element of `other` after the elements of `self`.
    pub fn concat(mut self, other: Self) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }

    /// Convert into a regular `Vec`.
    pub fn into_vec(self) -> Vec<E> {
        let mut vec = Vec::with_capacity(self.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }
}

impl<E> sealed::Sealed for NotEmptyList<E> {}

impl<E: Clone> NotEmptyCollection for NotEmptyList<E> {
    type Item<'a>
        = &'a E
    where
        Self: 'a;

    fn head(&self) -> &E {
        &self.head
    }

    fn tail(&self) -> Option<Self> {
        Self::split(self.tail.iter().cloned())
    }

    fn size(&self) -> StrictlyPositiveUsize {
        Refined::derived(self.len())
    }
}

impl<E> TryFrom<Vec<E>> for NotEmptyList<E> {
    type Error = Error;

    fn try_from(vec: Vec<E>) -> Result<Self, Error> {
        Self::new(vec)
    }
}

impl<E> From<NotEmptyList<E>> for Vec<E> {
    fn from(list: NotEmptyList<E>) -> Self {
        list.into_vec()
    }
}

impl<E> IntoIterator for NotEmptyList<E> {
    type Item = E;
    type IntoIter = std::iter::Chain<std::iter::Once<E>, std::vec::IntoIter<E>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<'a, E> IntoIterator for &'a NotEmptyList<E> {
    type Item = &'a E;
    type IntoIter = std::iter::Chain<std::iter::Once<&'a E>, std::slice::Iter<'a, E>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

impl<E> std::ops::Index<usize> for NotEmptyList<E> {
    type Output = E;

    fn index(&self, index: usize) -> &E {
        if index == 0 {
            &self.head
        } else {
            &self.tail[index - 1]
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for NotEmptyList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E: fmt::Debug> fmt::Display for NotEmptyList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
