//! Maps guaranteed to contain at least one entry

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use super::{empty_collection, sealed, NotEmptyCollection};
use crate::error::Error;
use crate::refined::{Refined, StrictlyPositiveUsize};

/// A map guaranteed to contain at least one entry.
///
/// Entries are kept in ascending key order and the head is the entry with
/// the smallest key. When the input repeats a key, its last value wins.
/// Equality compares key/value content.
///
/// ```
/// use narrow::NotEmptyMap;
///
/// let map = NotEmptyMap::create(vec![("b", 2), ("a", 1), ("b", 3)]);
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.head(), (&"a", &1));
/// assert_eq!(map.get("b"), Some(&3));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotEmptyMap<K: Ord, V> {
    head: (K, V),
    tail: BTreeMap<K, V>,
}

impl<K: Ord, V> NotEmptyMap<K, V> {
    /// Copies `entries` into a new map, failing if there are none.
    pub fn new<I>(entries: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::split(entries.into_iter().collect()).ok_or_else(|| empty_collection("NotEmptyMap"))
    }

    /// Copies `entries` into a new map, panicking if there are none.
    ///
    /// # Panics
    ///
    /// Panics with "Given collection shouldn't be empty." on empty input.
    #[track_caller]
    pub fn create<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        match Self::new(entries) {
            Ok(map) => map,
            Err(error) => panic!("{error}"),
        }
    }

    /// Copies `entries` into a new map, or returns `None` if there are none.
    pub fn create_or_none<I>(entries: I) -> Option<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::new(entries).ok()
    }

    /// Create a map from one entry and any others.
    pub fn of<I>(first: (K, V), rest: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut tail: BTreeMap<K, V> = rest.into_iter().collect();
        let head = match tail.pop_first() {
            Some(smallest) if smallest.0 < first.0 => {
                tail.entry(first.0).or_insert(first.1);
                smallest
            }
            Some(smallest) if smallest.0 > first.0 => {
                tail.insert(smallest.0, smallest.1);
                first
            }
            // same key: the later value wins
            Some(smallest) => smallest,
            None => first,
        };
        Self { head, tail }
    }

    fn split(mut entries: BTreeMap<K, V>) -> Option<Self> {
        let head = entries.pop_first()?;
        Some(Self {
            head,
            tail: entries,
        })
    }

    /// Entry with the smallest key.
    pub fn head(&self) -> (&K, &V) {
        (&self.head.0, &self.head.1)
    }

    /// Number of entries, always at least one.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Value stored under `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if Borrow::<Q>::borrow(&self.head.0) == key {
            Some(&self.head.1)
        } else {
            self.tail.get(key)
        }
    }

    /// Returns `true` if the map has an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Iterate over the entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        std::iter::once(self.head()).chain(self.tail.iter())
    }

    /// Iterate over the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Iterate over the values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Convert into a regular `BTreeMap`.
    pub fn into_map(self) -> BTreeMap<K, V> {
        let mut map = self.tail;
        map.insert(self.head.0, self.head.1);
        map
    }
}

impl<K: Ord, V> sealed::Sealed for NotEmptyMap<K, V> {}

impl<K: Ord + Clone, V: Clone> NotEmptyCollection for NotEmptyMap<K, V> {
    type Item<'a>
        = (&'a K, &'a V)
    where
        Self: 'a;

    fn head(&self) -> (&K, &V) {
        (&self.head.0, &self.head.1)
    }

    fn tail(&self) -> Option<Self> {
        Self::split(self.tail.clone())
    }

    fn size(&self) -> StrictlyPositiveUsize {
        Refined::derived(self.len())
    }
}

impl<K: Ord, V> From<NotEmptyMap<K, V>> for BTreeMap<K, V> {
    fn from(map: NotEmptyMap<K, V>) -> Self {
        map.into_map()
    }
}

impl<K: Ord, V> IntoIterator for NotEmptyMap<K, V> {
    type Item = (K, V);
    type IntoIter =
        std::iter::Chain<std::iter::Once<(K, V)>, std::collections::btree_map::IntoIter<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for NotEmptyMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Display for NotEmptyMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn source_mutation_is_not_observed() {
        let mut source = HashMap::from([("a", 1), ("b", 2)]);
        let map = NotEmptyMap::create(source.clone());
        source.clear();
        assert_eq!(map.to_string(), r#"{"a": 1, "b": 2}"#);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn rejects_empty_input() {
        let error = NotEmptyMap::<String, u8>::new(HashMap::new()).unwrap_err();
        assert_eq!(error.to_string(), "Given collection shouldn't be empty.");
        assert!(NotEmptyMap::<u8, u8>::create_or_none(Vec::new()).is_none());
    }

    #[test]
    fn last_value_wins_for_repeated_keys() {
        let map = NotEmptyMap::of((1, "one"), [(2, "two"), (1, "uno")]);
        assert_eq!(map.get(&1), Some(&"uno"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn lookups_borrow_keys() {
        let map = NotEmptyMap::of(("alpha".to_string(), 1), [("beta".to_string(), 2)]);
        assert_eq!(map.get("beta"), Some(&2));
        assert!(map.contains_key("alpha"));
        assert!(!map.contains_key("gamma"));
    }

    #[test]
    fn keys_and_values_in_key_order() {
        let map = NotEmptyMap::of(('c', 3), [('a', 1), ('b', 2)]);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!['a', 'b', 'c']);
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(map.to_string(), "{'a': 1, 'b': 2, 'c': 3}");
    }

    #[test]
    fn structural_equality() {
        let left = NotEmptyMap::of(('a', 1), [('b', 2)]);
        let right = NotEmptyMap::create(HashMap::from([('b', 2), ('a', 1)]));
        assert_eq!(left, right);
        assert_ne!(left, NotEmptyMap::of(('a', 1), [('b', 3)]));
    }

    #[test]
    fn tail_drops_the_smallest_entry() {
        let map = NotEmptyMap::of(('a', 1), [('b', 2)]);
        let tail = NotEmptyCollection::tail(&map).unwrap();
        assert_eq!(NotEmptyCollection::head(&tail), (&'b', &2));
        assert_eq!(BTreeMap::from(tail), BTreeMap::from([('b', 2)]));
    }
}
