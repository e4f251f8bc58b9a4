//! Backing map strategies for the key index
//!
//! The cache stores values in an arena; the index maps each key to its
//! arena slot. The concrete map is a compile-time choice: hash-based
//! (expected O(1), keys need `Hash + Eq`) or ordered-tree-based
//! (O(log n), keys need `Ord` only).

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use ahash::RandomState;

/// Key-to-slot mapping used as the cache index.
///
/// Implementations must keep keys unique; `insert` is only called for
/// keys confirmed absent.
pub trait KeyIndex<K> {
    /// Create an empty index sized for `capacity` entries
    fn with_capacity(capacity: usize) -> Self;

    /// Look up the arena slot for a key
    fn get(&self, key: &K) -> Option<usize>;

    /// Record the arena slot for a new key
    fn insert(&mut self, key: K, slot: usize);

    /// Remove a key, returning its slot if present
    fn remove(&mut self, key: &K) -> Option<usize>;

    /// Number of indexed keys
    fn len(&self) -> usize;

    /// Check if the index holds no keys
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Hash-based index using AHash (expected O(1) lookups)
pub struct HashedIndex<K> {
    map: HashMap<K, usize, RandomState>,
}

impl<K: Hash + Eq> KeyIndex<K> for HashedIndex<K> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    fn get(&self, key: &K) -> Option<usize> {
        self.map.get(key).copied()
    }

    fn insert(&mut self, key: K, slot: usize) {
        self.map.insert(key, slot);
    }

    fn remove(&mut self, key: &K) -> Option<usize> {
        self.map.remove(key)
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

/// Ordered-tree index for keys with a total order (O(log n) lookups)
pub struct OrderedIndex<K> {
    map: BTreeMap<K, usize>,
}

impl<K: Ord> KeyIndex<K> for OrderedIndex<K> {
    fn with_capacity(_capacity: usize) -> Self {
        // BTreeMap has no preallocation
        Self {
            map: BTreeMap::new(),
        }
    }

    fn get(&self, key: &K) -> Option<usize> {
        self.map.get(key).copied()
    }

    fn insert(&mut self, key: K, slot: usize) {
        self.map.insert(key, slot);
    }

    fn remove(&mut self, key: &K) -> Option<usize> {
        self.map.remove(key)
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}
