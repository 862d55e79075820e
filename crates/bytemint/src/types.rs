//! # Common Types

/// A token identifier.
///
/// Ids are dense: a token's id is its index in the
/// [`crate::vocab::TokenRegistry`].
pub type TokenId = u32;

/// A pair of tokens.
pub type Pair = (TokenId, TokenId);

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type BMHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> BMHashMap<K, V> {
            BMHashMap::with_capacity(capacity)
        }
    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type BMHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> BMHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type BMHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> BMHashMap<K, V> {
            BMHashMap::with_capacity(capacity)
        }
    }
}

/// Compile-time check that a value is [`Send`].
pub fn check_is_send<S: Send>(_: S) {}

/// Compile-time check that a value is [`Sync`].
pub fn check_is_sync<S: Sync>(_: S) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_map_with_capacity() {
        let mut map: BMHashMap<Pair, TokenId> = hash_map_with_capacity(4);
        map.insert((1, 2), 256);
        assert_eq!(map.get(&(1, 2)), Some(&256));
        assert!(map.capacity() >= 4);
    }
}
