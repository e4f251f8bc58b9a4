//! # memocache
//!
//! Fixed-capacity LRU memoizing cache for pure functions.
//!
//! ## Architecture
//! - **Index**: pluggable key-to-slot map, AHash-backed by default (O(1))
//!   or BTree-backed for `Ord`-only keys (O(log n))
//! - **LRU list**: arena-backed doubly-linked list for O(1) relocation
//!   and eviction
//! - **MemoCache**: wraps a `f: &K -> Result<V>` function, computing on
//!   miss and evicting the least-recently-used entry when full
//!
//! ```
//! use memocache::MemoCache;
//!
//! let mut squares = MemoCache::new(|k: &u64| Ok(k * k), 3).unwrap();
//! assert_eq!(squares.get(&4).unwrap(), &16);
//! assert_eq!(squares.get(&4).unwrap(), &16); // cached, not recomputed
//! assert_eq!(squares.stats().hits(), 1);
//! ```

#![warn(missing_docs)]

mod cache;
mod error;
mod index;
mod lru;
mod stats;

pub use cache::{HashMemoCache, MemoCache, OrderedMemoCache};
pub use error::{Error, Result};
pub use index::{HashedIndex, KeyIndex, OrderedIndex};
pub use stats::CacheStats;
