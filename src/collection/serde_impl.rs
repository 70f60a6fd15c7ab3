//! Serde support for the not-empty collections (feature-gated)
//!
//! Lists and sets travel as sequences and maps as maps, exactly like their
//! unconstrained counterparts. An empty sequence or map fails to decode with
//! "Given collection shouldn't be empty.".

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{NotEmptyList, NotEmptyMap, NotEmptySet};
use crate::serial::Serializable;

impl<E: Serialize> Serialize for NotEmptyList<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, E: Deserialize<'de> + Clone> Deserialize<'de> for NotEmptyList<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let elements = Vec::<E>::deserialize(deserializer)?;
        Self::decode(elements).map_err(serde::de::Error::custom)
    }
}

impl<E: Ord + Serialize> Serialize for NotEmptySet<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, E: Ord + Deserialize<'de> + Clone> Deserialize<'de> for NotEmptySet<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let elements = Vec::<E>::deserialize(deserializer)?;
        Self::decode(elements).map_err(serde::de::Error::custom)
    }
}

impl<K: Ord + Serialize, V: Serialize> Serialize for NotEmptyMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, K, V> Deserialize<'de> for NotEmptyMap<K, V>
where
    K: Ord + Deserialize<'de> + Clone,
    V: Deserialize<'de> + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<K, V>::deserialize(deserializer)?;
        Self::decode(entries).map_err(serde::de::Error::custom)
    }
}
