//! MemoCache: LRU-bounded memoization of a pure function

use std::hash::Hash;

use crate::error::{Error, Result};
use crate::index::{HashedIndex, KeyIndex, OrderedIndex};
use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Fixed-capacity LRU cache memoizing a function `f: &K -> Result<V>`.
///
/// `get` returns the cached value on a hit (refreshing its recency) or
/// invokes the function exactly once on a miss, evicting the
/// least-recently-used entry when full. The function is assumed
/// referentially transparent: the cache may answer from a previously
/// computed value instead of re-invoking it.
///
/// Single-threaded by design. `get` takes `&mut self`, so the borrow
/// checker rules out concurrent use of one instance; callers wanting
/// sharing wrap the whole cache in an external lock or shard by key.
pub struct MemoCache<K, V, F, I = HashedIndex<K>> {
    /// The function being memoized
    compute: F,

    /// Recency list and key index
    lru: LruCache<K, V, I>,

    /// Hit/miss/eviction counters
    stats: CacheStats,
}

/// `MemoCache` over the hash-based index (keys need `Hash + Eq`)
pub type HashMemoCache<K, V, F> = MemoCache<K, V, F, HashedIndex<K>>;

/// `MemoCache` over the ordered-tree index (keys need `Ord` only)
pub type OrderedMemoCache<K, V, F> = MemoCache<K, V, F, OrderedIndex<K>>;

impl<K, V, F> MemoCache<K, V, F, HashedIndex<K>>
where
    K: Hash + Eq + Clone,
    F: Fn(&K) -> Result<V>,
{
    /// Create a new cache over the default hash-based index
    ///
    /// # Arguments
    /// * `compute` - The function to memoize
    /// * `capacity` - Maximum number of cached entries, must be non-zero
    ///
    /// # Returns
    /// * `Result<MemoCache>` - `Error::ZeroCapacity` if `capacity == 0`
    pub fn new(compute: F, capacity: usize) -> Result<Self> {
        Self::with_index(compute, capacity)
    }
}

impl<K, V, F, I> MemoCache<K, V, F, I>
where
    K: Clone,
    F: Fn(&K) -> Result<V>,
    I: KeyIndex<K>,
{
    /// Create a new cache over an explicit index strategy.
    ///
    /// The strategy is fixed at the type level; see [`HashMemoCache`]
    /// and [`OrderedMemoCache`].
    pub fn with_index(compute: F, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        Ok(Self {
            compute,
            lru: LruCache::new(capacity),
            stats: CacheStats::new(),
        })
    }

    /// Get the value for `key`, computing it on a miss.
    ///
    /// A hit moves the key to most-recently-used and changes nothing
    /// else. A miss invokes the compute function synchronously exactly
    /// once; if it fails, the error is propagated and the cache is left
    /// exactly as before the call (aside from the recorded miss). On
    /// success the pair is inserted, evicting the least-recently-used
    /// entry when the cache is full.
    ///
    /// # Arguments
    /// * `key` - Lookup key; cloned into the cache on a miss
    ///
    /// # Returns
    /// * `Result<&V>` - The cached or freshly computed value
    pub fn get(&mut self, key: &K) -> Result<&V> {
        let slot = match self.lru.touch(key) {
            Some(slot) => {
                self.stats.record_hit();
                slot
            }
            None => {
                self.stats.record_miss();
                let value = (self.compute)(key)?;

                if self.lru.is_full() {
                    self.stats.record_eviction();
                }
                let slot = self.lru.insert(key.clone(), value);
                self.stats.record_insert();
                slot
            }
        };

        Ok(self.lru.value(slot))
    }

    /// Look up a key without updating recency.
    ///
    /// Introspection/testing only; unlike `get` this never computes and
    /// never reorders entries.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.lru.peek(key)
    }

    /// The entry that would be evicted next, or `None` if empty.
    ///
    /// Does not update recency.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.lru.peek_lru()
    }

    /// All cached keys, most recently used first
    pub fn keys_by_recency(&self) -> impl Iterator<Item = &K> + '_ {
        self.lru.keys_by_recency()
    }

    /// Current number of cached entries
    pub fn len(&self) -> usize {
        self.lru.len()
    }

    /// Maximum number of cached entries
    pub fn capacity(&self) -> usize {
        self.lru.capacity()
    }

    /// Check if the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.lru.is_empty()
    }

    /// Check if the cache is at capacity
    pub fn is_full(&self) -> bool {
        self.lru.is_full()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
