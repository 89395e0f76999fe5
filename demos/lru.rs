use lrukit::LruCache;
use std::fmt::Debug;

fn print_order<K: Debug, V: Debug>(cache: &LruCache<K, V>) {
    let order: Vec<_> = cache.iter().collect();
    println!("  size={} order (MRU -> LRU): {:?}\n", cache.len(), order);
}

fn main() -> Result<(), lrukit::CacheError> {
    println!("\n=== LRU Cache Walkthrough (capacity 3) ===\n");

    let mut cache = LruCache::new(3)?;

    println!("put(A,1), put(B,2), put(C,3)");
    cache.put("A", 1);
    cache.put("B", 2);
    cache.put("C", 3);
    print_order(&cache);

    println!("get(A)");
    let result = cache.get(&"A");
    assert_eq!(result, Some(&1));
    println!("  -> {:?}", result);
    print_order(&cache);

    // B is least recently used and gets evicted
    println!("put(D,4)");
    if let Some((key, value)) = cache.push("D", 4) {
        println!("  evicted ({}, {})", key, value);
    }
    print_order(&cache);

    println!("get(B)");
    let result = cache.get(&"B");
    assert_eq!(result, None);
    println!("  -> {:?} (not found)", result);
    print_order(&cache);

    println!("put(C,30)");
    cache.put("C", 30);
    print_order(&cache);

    println!("contains(A) = {} (order unchanged)", cache.contains(&"A"));
    print_order(&cache);

    #[cfg(feature = "stats")]
    {
        let stats = cache.stats();
        println!("=== Statistics ===");
        println!("Hits: {}", stats.hits());
        println!("Misses: {}", stats.misses());
        println!("Evictions: {}", stats.evictions());
        println!("Hit rate: {:.2}%", stats.hit_rate() * 100.0);
    }

    match LruCache::<&str, i32>::new(0) {
        Ok(_) => unreachable!("zero capacity must be rejected"),
        Err(err) => println!("\nLruCache::new(0) -> {}", err),
    }

    println!("\n=== Walkthrough complete ===");
    Ok(())
}
