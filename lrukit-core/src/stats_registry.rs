use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::CacheStats;

/// Process-wide registry of cache statistics, indexed by name.
///
/// Caches are plain owned values, so nothing can reach their counters once
/// they are buried inside some other structure. Registering a cache here
/// publishes a shared handle to its [`CacheStats`], which can then be read by
/// name from anywhere in the process.
///
/// The registry holds an `Arc`, so a registered entry keeps counting for as
/// long as its cache lives and keeps its last values after the cache is
/// dropped, until it is unregistered.
///
/// # Examples
///
/// ```
/// use lrukit_core::{stats_registry, LruCache};
///
/// let mut cache = LruCache::new(2).unwrap();
/// cache.register_stats("sessions");
///
/// cache.put("alice", 1);
/// let _ = cache.get(&"alice");
/// let _ = cache.get(&"bob");
///
/// let stats = stats_registry::get("sessions").unwrap();
/// assert_eq!(stats.hits(), 1);
/// assert_eq!(stats.misses(), 1);
/// # stats_registry::unregister("sessions");
/// ```
static STATS_REGISTRY: Lazy<RwLock<HashMap<String, Arc<CacheStats>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Registers statistics under `name`, replacing any previous registration.
pub fn register(name: &str, stats: Arc<CacheStats>) {
    let mut registry = STATS_REGISTRY.write();
    if registry.insert(name.to_string(), stats).is_some() {
        log::debug!("stats registry: replaced existing entry '{}'", name);
    }
}

/// Removes the registration for `name`.
///
/// Returns `false` if nothing was registered under that name.
pub fn unregister(name: &str) -> bool {
    let mut registry = STATS_REGISTRY.write();
    registry.remove(name).is_some()
}

/// Returns a point-in-time snapshot of the statistics registered under `name`.
///
/// # Examples
///
/// ```
/// use lrukit_core::stats_registry;
///
/// assert!(stats_registry::get("never_registered").is_none());
/// ```
pub fn get(name: &str) -> Option<CacheStats> {
    let registry = STATS_REGISTRY.read();
    registry.get(name).map(|stats| (**stats).clone())
}

/// Returns the live, shared statistics registered under `name`.
///
/// Unlike [`get`], the returned handle keeps reflecting new activity.
pub fn get_ref(name: &str) -> Option<Arc<CacheStats>> {
    let registry = STATS_REGISTRY.read();
    registry.get(name).cloned()
}

/// Lists all registered names.
pub fn list() -> Vec<String> {
    let registry = STATS_REGISTRY.read();
    registry.keys().cloned().collect()
}

/// Removes every registration.
///
/// The counters themselves are not reset; caches keep counting into their
/// own handles.
pub fn clear() {
    let mut registry = STATS_REGISTRY.write();
    registry.clear();
}

/// Resets the counters registered under `name` to zero.
///
/// Returns `false` if nothing was registered under that name.
pub fn reset(name: &str) -> bool {
    let registry = STATS_REGISTRY.read();
    if let Some(stats) = registry.get(name) {
        stats.reset();
        true
    } else {
        false
    }
}
