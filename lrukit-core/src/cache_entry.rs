/// A slot in the recency arena.
///
/// Each live entry owns its key and value and links to its neighbours in the
/// recency list by arena handle instead of by pointer. `prev` points towards
/// the most-recently-used end (head), `next` towards the least-recently-used
/// end (tail). `None` marks the end of the list on that side.
///
/// # Type Parameters
///
/// * `K` - The key type, duplicated here so eviction can clear the index
/// * `V` - The cached value type
#[derive(Clone, Debug)]
pub(crate) struct CacheEntry<K, V> {
    pub key: K,
    pub value: V,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

impl<K, V> CacheEntry<K, V> {
    /// Creates a detached entry, not yet linked into the recency list.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }

    /// Replaces key and value, returning the old pair.
    ///
    /// Links are left untouched; the caller relinks the slot.
    pub fn replace(&mut self, key: K, value: V) -> (K, V) {
        let old_key = std::mem::replace(&mut self.key, key);
        let old_value = std::mem::replace(&mut self.value, value);
        (old_key, old_value)
    }
}
