use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

#[cfg(feature = "stats")]
use std::sync::Arc;

use crate::cache_entry::CacheEntry;
use crate::error::{CacheError, Result};
use crate::iter::{Iter, Keys};

#[cfg(feature = "stats")]
use crate::{stats_registry, CacheStats};

/// Upper bound on slots reserved up front. Larger caches grow on demand.
const MAX_PREALLOCATED: usize = 4096;

/// Bounded-capacity cache that evicts the least recently used entry.
///
/// Entries live in a dense arena (`Vec`) and are chained into a doubly-linked
/// recency list by slot handle. A hash index maps each key to its slot, so
/// lookup, promotion, insertion and eviction are all O(1).
///
/// # Type Parameters
///
/// * `K` - Key type. Must be `Hash + Eq + Clone`; one clone lives in the index
///   and one in the arena slot.
/// * `V` - Value type. No bounds; values are handed out by reference.
/// * `S` - Hasher for the index (defaults to `RandomState`).
///
/// # Recency Rules
///
/// | Operation             | Promotes to MRU | Counted in stats |
/// |-----------------------|-----------------|------------------|
/// | `get` / `get_mut` hit | yes             | hit              |
/// | `get` / `get_mut` miss| no              | miss             |
/// | `put` / `push`        | yes             | eviction if full |
/// | `peek` / `contains`   | no              | no               |
/// | `peek_lru`            | no              | no               |
///
/// # Thread Safety
///
/// The cache is a plain owned value. Every mutating operation, including
/// `get`, takes `&mut self`; share it across threads by wrapping it in a lock
/// of your choice.
///
/// # Examples
///
/// ```
/// use lrukit_core::LruCache;
///
/// let mut cache = LruCache::new(3).unwrap();
/// cache.put("A", 1);
/// cache.put("B", 2);
/// cache.put("C", 3);
///
/// // Touching A makes B the least recently used entry
/// assert_eq!(cache.get(&"A"), Some(&1));
///
/// cache.put("D", 4);
/// assert_eq!(cache.get(&"B"), None);
/// assert_eq!(cache.len(), 3);
///
/// let order: Vec<_> = cache.keys().copied().collect();
/// assert_eq!(order, vec!["D", "A", "C"]);
/// ```
pub struct LruCache<K, V, S = RandomState> {
    /// Key to arena slot
    index: HashMap<K, usize, S>,
    /// Dense arena; every slot in `0..len` is live
    entries: Vec<CacheEntry<K, V>>,
    /// Most recently used slot
    head: Option<usize>,
    /// Least recently used slot
    tail: Option<usize>,
    capacity: usize,
    #[cfg(feature = "stats")]
    stats: Arc<CacheStats>,
}

impl<K: Hash + Eq + Clone, V> LruCache<K, V> {
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidArgument`] if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lrukit_core::{CacheError, LruCache};
    ///
    /// let cache: LruCache<String, u64> = LruCache::new(100).unwrap();
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    ///
    /// assert!(matches!(
    ///     LruCache::<String, u64>::new(0),
    ///     Err(CacheError::InvalidArgument { capacity: 0 })
    /// ));
    /// ```
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_hasher(capacity, RandomState::new())
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates an empty cache that hashes keys with `hasher`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidArgument`] if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lrukit_core::LruCache;
    /// use std::collections::hash_map::DefaultHasher;
    /// use std::hash::BuildHasherDefault;
    ///
    /// let mut cache: LruCache<u32, &str, BuildHasherDefault<DefaultHasher>> =
    ///     LruCache::with_hasher(2, BuildHasherDefault::default()).unwrap();
    /// cache.put(7, "seven");
    /// assert_eq!(cache.peek(&7), Some(&"seven"));
    /// ```
    pub fn with_hasher(capacity: usize, hasher: S) -> Result<Self> {
        if capacity < 1 {
            return Err(CacheError::InvalidArgument { capacity });
        }

        log::debug!("creating LRU cache with capacity {}", capacity);

        let reserved = capacity.min(MAX_PREALLOCATED);
        Ok(Self {
            index: HashMap::with_capacity_and_hasher(reserved, hasher),
            entries: Vec::with_capacity(reserved),
            head: None,
            tail: None,
            capacity,
            #[cfg(feature = "stats")]
            stats: Arc::new(CacheStats::new()),
        })
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// A miss returns `None` and leaves the recency order untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use lrukit_core::LruCache;
    ///
    /// let mut cache = LruCache::new(2).unwrap();
    /// cache.put(1, "one");
    /// cache.put(2, "two");
    ///
    /// assert_eq!(cache.get(&1), Some(&"one"));
    /// assert_eq!(cache.get(&3), None);
    ///
    /// // 2 is now the least recently used entry
    /// assert_eq!(cache.peek_lru(), Some((&2, &"two")));
    /// ```
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.lookup(key)?;
        Some(&self.entries[idx].value)
    }

    /// Like [`get`](Self::get), but returns a mutable reference.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.lookup(key)?;
        Some(&mut self.entries[idx].value)
    }

    /// Returns the value for `key` without touching recency or statistics.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&idx| &self.entries[idx].value)
    }

    /// Reports whether `key` is cached, without touching recency.
    ///
    /// # Examples
    ///
    /// ```
    /// use lrukit_core::LruCache;
    ///
    /// let mut cache = LruCache::new(2).unwrap();
    /// cache.put("a", 1);
    /// cache.put("b", 2);
    ///
    /// assert!(cache.contains(&"a"));
    ///
    /// // contains() did not promote "a", so it is still the one evicted
    /// cache.put("c", 3);
    /// assert!(!cache.contains(&"a"));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Inserts or updates `key` and marks it most recently used.
    ///
    /// When a new key arrives at a full cache, the least recently used entry
    /// is evicted first. Use [`push`](Self::push) to get hold of what left.
    ///
    /// # Examples
    ///
    /// ```
    /// use lrukit_core::LruCache;
    ///
    /// let mut cache = LruCache::new(1).unwrap();
    /// cache.put("k", 1);
    /// cache.put("k", 2); // update in place
    /// assert_eq!(cache.len(), 1);
    /// assert_eq!(cache.get(&"k"), Some(&2));
    /// ```
    pub fn put(&mut self, key: K, value: V) {
        let _ = self.push(key, value);
    }

    /// Inserts or updates `key` and returns the entry that left the cache.
    ///
    /// # Returns
    ///
    /// * `Some((old_key, old_value))` if `key` was already present
    /// * `Some((lru_key, lru_value))` if a new key evicted the tail
    /// * `None` if the cache simply grew
    ///
    /// # Examples
    ///
    /// ```
    /// use lrukit_core::LruCache;
    ///
    /// let mut cache = LruCache::new(2).unwrap();
    /// assert_eq!(cache.push("a", 1), None);
    /// assert_eq!(cache.push("b", 2), None);
    /// assert_eq!(cache.push("a", 10), Some(("a", 1)));
    /// assert_eq!(cache.push("c", 3), Some(("b", 2)));
    /// ```
    pub fn push(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.index.get(&key) {
            let old = self.entries[idx].replace(key, value);
            self.move_to_front(idx);
            return Some(old);
        }

        if self.entries.len() >= self.capacity {
            if let Some(idx) = self.tail {
                log::trace!(
                    "evicting least recently used slot {} (size {}, capacity {})",
                    idx,
                    self.entries.len(),
                    self.capacity
                );

                self.detach(idx);
                let (old_key, old_value) = self.entries[idx].replace(key.clone(), value);
                self.index.remove(&old_key);
                self.index.insert(key, idx);
                self.attach_front(idx);

                #[cfg(feature = "stats")]
                self.stats.record_eviction();

                return Some((old_key, old_value));
            }
        }

        let idx = self.entries.len();
        self.entries.push(CacheEntry::new(key.clone(), value));
        self.index.insert(key, idx);
        self.attach_front(idx);
        None
    }

    /// Removes `key` and returns its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use lrukit_core::LruCache;
    ///
    /// let mut cache = LruCache::new(3).unwrap();
    /// cache.put(1, 'a');
    /// cache.put(2, 'b');
    ///
    /// assert_eq!(cache.remove(&1), Some('a'));
    /// assert_eq!(cache.remove(&1), None);
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.index.remove(key)?;
        let (_, value) = self.remove_slot(idx);
        Some(value)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let idx = self.tail?;
        self.index.remove(&self.entries[idx].key);
        Some(self.remove_slot(idx))
    }

    /// Publishes this cache's statistics in the global
    /// [`stats_registry`] under `name`.
    #[cfg(feature = "stats")]
    pub fn register_stats(&self, name: &str) {
        stats_registry::register(name, Arc::clone(&self.stats));
    }

    /// Resolves `key` to a slot, promoting it and recording the access.
    fn lookup<Q>(&mut self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key) {
            Some(&idx) => {
                #[cfg(feature = "stats")]
                self.stats.record_hit();
                self.move_to_front(idx);
                Some(idx)
            }
            None => {
                #[cfg(feature = "stats")]
                self.stats.record_miss();
                None
            }
        }
    }

    /// Unlinks and frees slot `idx`, whose key must already be gone from the
    /// index. The last slot is swapped into the hole and relinked.
    fn remove_slot(&mut self, idx: usize) -> (K, V) {
        self.detach(idx);
        let entry = self.entries.swap_remove(idx);

        if idx < self.entries.len() {
            let (prev, next) = (self.entries[idx].prev, self.entries[idx].next);
            match prev {
                Some(p) => self.entries[p].next = Some(idx),
                None => self.head = Some(idx),
            }
            match next {
                Some(n) => self.entries[n].prev = Some(idx),
                None => self.tail = Some(idx),
            }
            if let Some(handle) = self.index.get_mut(&self.entries[idx].key) {
                *handle = idx;
            }
        }

        (entry.key, entry.value)
    }
}

impl<K, V, S> LruCache<K, V, S> {
    /// Returns the number of cached entries, never more than `capacity()`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the fixed maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the least recently used entry without promoting it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.tail.map(|idx| {
            let entry = &self.entries[idx];
            (&entry.key, &entry.value)
        })
    }

    /// Drops every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.index.clear();
        self.entries.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterates entries from most to least recently used.
    ///
    /// Iteration does not affect recency. The iterator is double-ended, so
    /// `.rev()` walks from the eviction end.
    ///
    /// # Examples
    ///
    /// ```
    /// use lrukit_core::LruCache;
    ///
    /// let mut cache = LruCache::new(3).unwrap();
    /// cache.put("x", 1);
    /// cache.put("y", 2);
    /// cache.put("z", 3);
    ///
    /// let mru_first: Vec<_> = cache.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(mru_first, vec!["z", "y", "x"]);
    ///
    /// let lru_first: Vec<_> = cache.iter().rev().map(|(_, v)| *v).collect();
    /// assert_eq!(lru_first, vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.entries, self.head, self.tail)
    }

    /// Iterates keys from most to least recently used.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Returns the hit, miss and eviction counters of this cache.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "stats")]
    /// # {
    /// use lrukit_core::LruCache;
    ///
    /// let mut cache = LruCache::new(1).unwrap();
    /// cache.put(1, 1);
    /// cache.put(2, 2);
    /// let _ = cache.get(&2);
    /// let _ = cache.get(&1);
    ///
    /// let stats = cache.stats();
    /// assert_eq!(stats.hits(), 1);
    /// assert_eq!(stats.misses(), 1);
    /// assert_eq!(stats.evictions(), 1);
    /// # }
    /// ```
    #[cfg(feature = "stats")]
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Moves slot `idx` to the head of the recency list.
    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }
        self.detach(idx);
        self.attach_front(idx);
    }

    /// Unlinks slot `idx` from its neighbours, fixing head and tail.
    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.entries[idx].prev, self.entries[idx].next);

        match prev {
            Some(p) => self.entries[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.entries[n].prev = prev,
            None => self.tail = prev,
        }

        let entry = &mut self.entries[idx];
        entry.prev = None;
        entry.next = None;
    }

    /// Links a detached slot `idx` in as the new head.
    fn attach_front(&mut self, idx: usize) {
        let old_head = self.head;
        {
            let entry = &mut self.entries[idx];
            entry.prev = None;
            entry.next = old_head;
        }

        match old_head {
            Some(h) => self.entries[h].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }
}

impl<'a, K, V, S> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.entries.len())
            .field("entries", &self.iter())
            .finish()
    }
}
