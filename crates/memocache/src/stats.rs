//! Cache statistics tracking

/// Statistics for cache performance tracking.
///
/// Counters are plain integers: the cache is single-threaded by
/// contract, and every mutation happens inside `get(&mut self)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    hits: u64,
    misses: u64,
    evictions: u64,
    inserts: u64,
}

impl CacheStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cache hit
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Record a cache miss
    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Record an eviction
    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Record an insert
    pub(crate) fn record_insert(&mut self) {
        self.inserts += 1;
    }

    /// Get total hits (lookups served without invoking the function)
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Get total misses (lookups that invoked the compute function,
    /// including invocations that failed)
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Get total evictions
    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Get total inserts (successful compute invocations)
    pub fn inserts(&self) -> u64 {
        self.inserts
    }

    /// Calculate hit ratio (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Reset all statistics
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
