//! Serial contract of the not-empty collections

use std::collections::BTreeMap;

use super::{NotEmptyList, NotEmptyMap, NotEmptySet};
use crate::error::Error;
use crate::serial::{Package, SerialDescriptor, SerialKind, Serializable};

fn collection_descriptor(simple_name: &str, kind: SerialKind) -> SerialDescriptor {
    SerialDescriptor::new(format!("{}.{simple_name}", Package::Collection), kind)
}

impl<E: Clone> Serializable for NotEmptyList<E> {
    type Encoded = Vec<E>;

    fn descriptor() -> SerialDescriptor {
        collection_descriptor("NotEmptyList", SerialKind::List)
    }

    fn encode(&self) -> Vec<E> {
        self.iter().cloned().collect()
    }

    fn decode(encoded: Vec<E>) -> Result<Self, Error> {
        Self::new(encoded).map_err(Error::into_serialization)
    }
}

impl<E: Ord + Clone> Serializable for NotEmptySet<E> {
    type Encoded = Vec<E>;

    fn descriptor() -> SerialDescriptor {
        collection_descriptor("NotEmptySet", SerialKind::List)
    }

    fn encode(&self) -> Vec<E> {
        self.iter().cloned().collect()
    }

    fn decode(encoded: Vec<E>) -> Result<Self, Error> {
        Self::new(encoded).map_err(Error::into_serialization)
    }
}

impl<K: Ord + Clone, V: Clone> Serializable for NotEmptyMap<K, V> {
    type Encoded = BTreeMap<K, V>;

    fn descriptor() -> SerialDescriptor {
        collection_descriptor("NotEmptyMap", SerialKind::Map)
    }

    fn encode(&self) -> BTreeMap<K, V> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    fn decode(encoded: BTreeMap<K, V>) -> Result<Self, Error> {
        Self::new(encoded).map_err(Error::into_serialization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{not_empty_list, not_empty_map, not_empty_set};

    #[test]
    fn descriptors() {
        assert_eq!(
            NotEmptyList::<i32>::descriptor().serial_name(),
            "narrow.collection.NotEmptyList"
        );
        assert_eq!(NotEmptySet::<i32>::descriptor().kind(), SerialKind::List);
        let map = NotEmptyMap::<String, i32>::descriptor();
        assert_eq!(map.serial_name(), "narrow.collection.NotEmptyMap");
        assert_eq!(map.kind(), SerialKind::Map);
    }

    #[test]
    fn encodes_elements_in_iteration_order() {
        assert_eq!(not_empty_list![3, 1, 2].encode(), vec![3, 1, 2]);
        assert_eq!(not_empty_set![3, 1, 2].encode(), vec![1, 2, 3]);
    }

    #[test]
    fn decode_round_trip() {
        let map = not_empty_map! { 'x' => 1.5 };
        assert_eq!(NotEmptyMap::decode(map.encode()).unwrap(), map);
        let set = not_empty_set!["a", "b"];
        assert_eq!(NotEmptySet::decode(set.encode()).unwrap(), set);
    }

    #[test]
    fn empty_input_is_a_serialization_error() {
        let error = NotEmptyList::<u8>::decode(Vec::new()).unwrap_err();
        assert!(matches!(error, Error::Serialization(_)));
        assert_eq!(error.to_string(), "Given collection shouldn't be empty.");

        assert!(NotEmptyMap::<char, u8>::decode(BTreeMap::new()).is_err());
    }
}
