use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lrukit_core::LruCache;
use std::hint::black_box;

fn filled_cache(size: usize) -> LruCache<String, i32> {
    let mut cache = LruCache::new(size).unwrap();
    for i in 0..size {
        cache.put(format!("key{}", i), i as i32);
    }
    cache
}

fn bench_insert_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_sequential");

    for size in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("LRU", size), size, |b, &size| {
            b.iter(|| {
                let mut cache = LruCache::new(size).unwrap();
                for i in 0..size {
                    cache.put(format!("key{}", i), black_box(i as i32));
                }
                cache
            });
        });
    }

    group.finish();
}

fn bench_get_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_sequential");

    for size in [10, 100, 1000].iter() {
        let mut cache = filled_cache(*size);
        let keys: Vec<String> = (0..*size).map(|i| format!("key{}", i)).collect();

        group.bench_with_input(BenchmarkId::new("get", size), size, |b, _| {
            b.iter(|| {
                for key in &keys {
                    black_box(cache.get(key.as_str()));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("peek", size), size, |b, _| {
            b.iter(|| {
                for key in &keys {
                    black_box(cache.peek(key.as_str()));
                }
            });
        });
    }

    group.finish();
}

fn bench_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("eviction");

    for size in [50, 500, 5000].iter() {
        group.bench_with_input(BenchmarkId::new("2x_overfill", size), size, |b, &size| {
            b.iter(|| {
                let mut cache = LruCache::new(size).unwrap();
                // Second half of the inserts all evict
                for i in 0..size * 2 {
                    cache.put(i, black_box(i));
                }
                cache
            });
        });
    }

    group.finish();
}

fn bench_mixed_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_workload");

    // 90% reads over a key space twice the capacity, 10% writes
    group.bench_function("90_read_10_write", |b| {
        let mut cache = LruCache::new(100).unwrap();
        let mut rng = fastrand::Rng::with_seed(7);
        b.iter(|| {
            for _ in 0..1000 {
                let key = rng.u32(0..200);
                if rng.u8(0..10) == 0 {
                    cache.put(key, black_box(key));
                } else {
                    black_box(cache.get(&key));
                }
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_sequential,
    bench_get_sequential,
    bench_eviction,
    bench_mixed_workload
);
criterion_main!(benches);
