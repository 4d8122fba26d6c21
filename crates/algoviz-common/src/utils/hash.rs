//! Hash map and set aliases.
//!
//! Keys in this workspace are small integer ids, so the maps use `hashbrown`
//! with `ahash` instead of SipHash.

/// A `hashbrown` map keyed with `ahash`.
pub type FastHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// A `hashbrown` set keyed with `ahash`.
pub type FastHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;

/// Creates an empty [`FastHashMap`] with room for `capacity` entries.
#[must_use]
pub fn map_with_capacity<K, V>(capacity: usize) -> FastHashMap<K, V> {
    FastHashMap::with_capacity_and_hasher(capacity, ahash::RandomState::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_with_capacity() {
        let mut map: FastHashMap<u32, &str> = map_with_capacity(4);
        map.insert(1, "one");
        assert_eq!(map.get(&1), Some(&"one"));
        assert!(map.capacity() >= 4);
    }
}
