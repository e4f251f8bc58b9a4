//! LRU (Least Recently Used) recency tracking
//!
//! Arena-backed intrusive linked list for O(1) hit relocation and
//! eviction. Slots are stable: entries never move in the arena, so the
//! slot indices held by the key index stay valid across every operation.

use crate::index::KeyIndex;

/// Node in the LRU doubly-linked list
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Fixed-capacity LRU store: recency list plus key index.
///
/// The list runs most-recently-used (head) to least-recently-used
/// (tail). Keys enter via `insert` on a miss and leave only through the
/// eviction performed by `insert` itself when the cache is full.
pub(crate) struct LruCache<K, V, I> {
    index: I,
    nodes: Vec<Node<K, V>>,
    head: Option<usize>,
    tail: Option<usize>,
    capacity: usize,
}

impl<K, V, I> LruCache<K, V, I>
where
    K: Clone,
    I: KeyIndex<K>,
{
    /// Create a new LRU store with the given capacity
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "Capacity must be greater than 0");

        Self {
            index: I::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            capacity,
        }
    }

    /// Mark a key as most recently used, returning its slot on a hit
    pub fn touch(&mut self, key: &K) -> Option<usize> {
        let slot = self.index.get(key)?;
        self.move_to_front(slot);
        Some(slot)
    }

    /// Insert a key-value pair, evicting the LRU entry if full.
    ///
    /// Only called on confirmed misses; the key must not be present.
    /// When full, the tail slot is recycled in place: the evicted key
    /// leaves the index and its value is dropped before the new entry
    /// takes over the slot.
    pub fn insert(&mut self, key: K, value: V) -> usize {
        debug_assert!(self.index.get(&key).is_none());

        let slot = match self.tail {
            Some(tail) if self.nodes.len() == self.capacity => {
                self.index.remove(&self.nodes[tail].key);
                self.unlink(tail);
                let node = &mut self.nodes[tail];
                node.key = key.clone();
                node.value = value;
                tail
            }
            _ => {
                let slot = self.nodes.len();
                self.nodes.push(Node {
                    key: key.clone(),
                    value,
                    prev: None,
                    next: None,
                });
                slot
            }
        };

        self.push_front(slot);
        self.index.insert(key, slot);
        slot
    }

    /// Read the value at a live slot
    pub fn value(&self, slot: usize) -> &V {
        &self.nodes[slot].value
    }

    /// Look up a value without updating recency (introspection only)
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|slot| &self.nodes[slot].value)
    }

    /// The entry that would be evicted next, without updating recency
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.tail.map(|slot| {
            let node = &self.nodes[slot];
            (&node.key, &node.value)
        })
    }

    /// All cached keys, most recently used first
    pub fn keys_by_recency(&self) -> impl Iterator<Item = &K> + '_ {
        std::iter::successors(self.head, |&slot| self.nodes[slot].next)
            .map(|slot| &self.nodes[slot].key)
    }

    /// Current number of entries
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check if the store is at capacity
    pub fn is_full(&self) -> bool {
        self.nodes.len() == self.capacity
    }

    fn move_to_front(&mut self, slot: usize) {
        if self.head == Some(slot) {
            return; // Already at front
        }

        self.unlink(slot);
        self.push_front(slot);
    }

    fn push_front(&mut self, slot: usize) {
        self.nodes[slot].prev = None;
        self.nodes[slot].next = self.head;

        if let Some(head) = self.head {
            self.nodes[head].prev = Some(slot);
        }

        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);

        match prev {
            Some(prev_slot) => self.nodes[prev_slot].next = next,
            None => self.head = next,
        }

        match next {
            Some(next_slot) => self.nodes[next_slot].prev = prev,
            None => self.tail = prev,
        }
    }
}
