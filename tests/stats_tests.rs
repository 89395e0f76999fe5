#![cfg(feature = "stats")]

use lrukit::{stats_registry, LruCache};
use serial_test::serial;

/// Hits, misses and evictions are tracked per cache
#[test]
fn test_cache_counts_accesses_and_evictions() {
    let mut cache = LruCache::new(2).unwrap();
    cache.put(1, "one");
    cache.put(2, "two");
    cache.put(3, "three"); // evicts 1

    assert_eq!(cache.get(&1), None);
    assert_eq!(cache.get(&2), Some(&"two"));
    assert_eq!(cache.get(&3), Some(&"three"));

    let stats = cache.stats();
    assert_eq!(stats.hits(), 2);
    assert_eq!(stats.misses(), 1);
    assert_eq!(stats.evictions(), 1);
    assert!((stats.hit_rate() - 0.6666).abs() < 0.001);
}

/// Updates and explicit removals are not evictions
#[test]
fn test_updates_and_removals_are_not_evictions() {
    let mut cache = LruCache::new(2).unwrap();
    cache.put("a", 1);
    cache.put("a", 2);
    cache.put("b", 3);
    cache.remove(&"a");
    cache.pop_lru();
    cache.put("c", 4);
    cache.clear();

    assert_eq!(cache.stats().evictions(), 0);
}

/// Non-promoting queries leave the counters alone
#[test]
fn test_peek_and_contains_are_not_counted() {
    let mut cache = LruCache::new(2).unwrap();
    cache.put("a", 1);

    let _ = cache.peek(&"a");
    let _ = cache.peek(&"missing");
    let _ = cache.contains(&"a");
    let _ = cache.peek_lru();

    assert_eq!(cache.stats().total_accesses(), 0);
}

/// A registered cache can be inspected by name
#[test]
#[serial]
fn test_registered_stats_follow_cache() {
    let mut cache = LruCache::new(1).unwrap();
    cache.register_stats("stats_tests_follow");

    cache.put("x", 1);
    cache.put("y", 2);
    let _ = cache.get(&"y");
    let _ = cache.get(&"x");

    let snapshot = stats_registry::get("stats_tests_follow").unwrap();
    assert_eq!(snapshot.hits(), 1);
    assert_eq!(snapshot.misses(), 1);
    assert_eq!(snapshot.evictions(), 1);

    let live = stats_registry::get_ref("stats_tests_follow").unwrap();
    let _ = cache.get(&"y");
    assert_eq!(live.hits(), 2);
    assert_eq!(snapshot.hits(), 1);

    assert!(stats_registry::unregister("stats_tests_follow"));
}

/// Registry reset zeroes the cache's own counters
#[test]
#[serial]
fn test_registry_reset_reaches_cache() {
    let mut cache = LruCache::new(4).unwrap();
    cache.register_stats("stats_tests_reset");

    cache.put(1, 1);
    let _ = cache.get(&1);
    assert_eq!(cache.stats().hits(), 1);

    assert!(stats_registry::reset("stats_tests_reset"));
    assert_eq!(cache.stats().hits(), 0);

    assert!(stats_registry::list().contains(&"stats_tests_reset".to_string()));
    assert!(stats_registry::unregister("stats_tests_reset"));
    assert!(!stats_registry::reset("stats_tests_reset"));
}

/// Stats outlive the cache while registered
#[test]
#[serial]
fn test_registered_stats_survive_drop() {
    {
        let mut cache = LruCache::new(2).unwrap();
        cache.register_stats("stats_tests_dropped");
        cache.put('k', 'v');
        let _ = cache.get(&'k');
    }

    let stats = stats_registry::get("stats_tests_dropped").unwrap();
    assert_eq!(stats.hits(), 1);
    assert!(stats_registry::unregister("stats_tests_dropped"));
}
