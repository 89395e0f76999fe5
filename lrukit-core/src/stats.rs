use std::sync::atomic::{AtomicU64, Ordering};

/// Hit, miss and eviction counters for one cache.
///
/// Counters are `AtomicU64` with `Relaxed` ordering so a snapshot can be read
/// from another thread through the [`stats_registry`](crate::stats_registry)
/// while the owning cache keeps working.
///
/// Only [`LruCache::get`](crate::LruCache::get) and
/// [`LruCache::get_mut`](crate::LruCache::get_mut) count as accesses.
/// `peek` and `contains` are invisible here.
///
/// # Examples
///
/// ```
/// use lrukit_core::CacheStats;
///
/// let stats = CacheStats::new();
/// stats.record_hit();
/// stats.record_hit();
/// stats.record_miss();
/// stats.record_eviction();
///
/// assert_eq!(stats.hits(), 2);
/// assert_eq!(stats.misses(), 1);
/// assert_eq!(stats.evictions(), 1);
/// assert_eq!(stats.total_accesses(), 3);
/// assert!((stats.hit_rate() - 0.6666).abs() < 0.001);
/// ```
#[derive(Debug)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl CacheStats {
    /// Creates a new `CacheStats` instance with zero counters.
    pub fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// Records a lookup that found its key.
    #[inline]
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a lookup that did not find its key.
    #[inline]
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a capacity-driven eviction of the least-recently-used entry.
    ///
    /// Explicit removals (`remove`, `pop_lru`, `clear`) are not evictions.
    #[inline]
    pub fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    /// Returns the total number of lookups (hits + misses).
    #[inline]
    pub fn total_accesses(&self) -> u64 {
        self.hits() + self.misses()
    }

    /// Returns the hit rate as a fraction (0.0 to 1.0).
    ///
    /// Returns 0.0 if there have been no lookups.
    ///
    /// # Examples
    ///
    /// ```
    /// use lrukit_core::CacheStats;
    ///
    /// let stats = CacheStats::new();
    /// assert_eq!(stats.hit_rate(), 0.0);
    ///
    /// stats.record_hit();
    /// stats.record_miss();
    /// assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
    /// ```
    #[inline]
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_accesses();
        if total == 0 {
            0.0
        } else {
            self.hits() as f64 / total as f64
        }
    }

    /// Returns `1.0 - hit_rate()`.
    #[inline]
    pub fn miss_rate(&self) -> f64 {
        1.0 - self.hit_rate()
    }

    /// Resets all counters to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lrukit_core::CacheStats;
    ///
    /// let stats = CacheStats::new();
    /// stats.record_hit();
    /// stats.record_eviction();
    ///
    /// stats.reset();
    /// assert_eq!(stats.total_accesses(), 0);
    /// assert_eq!(stats.evictions(), 0);
    /// ```
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
    }
}

impl Default for CacheStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning takes a point-in-time snapshot; the clone counts independently.
impl Clone for CacheStats {
    fn clone(&self) -> Self {
        Self {
            hits: AtomicU64::new(self.hits()),
            misses: AtomicU64::new(self.misses()),
            evictions: AtomicU64::new(self.evictions()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits(), 0);
        assert_eq!(stats.misses(), 0);
        assert_eq!(stats.evictions(), 0);
        assert_eq!(stats.total_accesses(), 0);
    }

    #[test]
    fn test_evictions_are_not_accesses() {
        let stats = CacheStats::new();
        stats.record_eviction();
        stats.record_eviction();
        assert_eq!(stats.evictions(), 2);
        assert_eq!(stats.total_accesses(), 0);
    }

    #[test]
    fn test_miss_rate() {
        let stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        stats.record_miss();
        assert!((stats.miss_rate() - 0.6666).abs() < 0.001);
    }

    #[test]
    fn test_hit_rate_no_accesses() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.miss_rate(), 1.0);
    }

    #[test]
    fn test_reset() {
        let stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        stats.record_eviction();

        stats.reset();
        assert_eq!(stats.hits(), 0);
        assert_eq!(stats.misses(), 0);
        assert_eq!(stats.evictions(), 0);
    }

    #[test]
    fn test_clone_is_a_snapshot() {
        let stats = CacheStats::new();
        stats.record_hit();
        stats.record_eviction();

        let cloned = stats.clone();
        assert_eq!(cloned.hits(), 1);
        assert_eq!(cloned.evictions(), 1);

        stats.record_hit();
        assert_eq!(stats.hits(), 2);
        assert_eq!(cloned.hits(), 1);
    }

    #[test]
    fn test_shared_reads_across_threads() {
        use std::sync::Arc;
        use std::thread;

        let stats = Arc::new(CacheStats::new());
        let mut handles = vec![];

        for _ in 0..4 {
            let stats_clone = Arc::clone(&stats);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    stats_clone.record_hit();
                }
                for _ in 0..25 {
                    stats_clone.record_miss();
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(stats.hits(), 400);
        assert_eq!(stats.misses(), 100);
        assert!((stats.hit_rate() - 0.8).abs() < 0.001);
    }
}
