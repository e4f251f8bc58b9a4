use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use memocache::{MemoCache, OrderedMemoCache};

fn bench_cached_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("hit_hot_set", |b| {
        let mut cache = MemoCache::new(|k: &u64| Ok(k.wrapping_mul(0x9e3779b9)), 1000).unwrap();

        // Warm the cache
        for k in 0..100u64 {
            cache.get(&k).unwrap();
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 100)).unwrap());
            counter += 1;
        });
    });

    group.bench_function("hit_hot_set_ordered", |b| {
        let mut cache =
            OrderedMemoCache::with_index(|k: &u64| Ok(k.wrapping_mul(0x9e3779b9)), 1000).unwrap();

        for k in 0..100u64 {
            cache.get(&k).unwrap();
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 100)).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_cache_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_miss");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("miss_with_eviction", |b| {
        // Small cache cycled over a larger key space: every get evicts
        let mut cache = MemoCache::new(|k: &u64| Ok(k.wrapping_mul(0x9e3779b9)), 10).unwrap();

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 100)).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("90_hit_10_miss", |b| {
        let mut cache = MemoCache::new(|k: &u64| Ok(k.wrapping_mul(0x9e3779b9)), 128).unwrap();

        for k in 0..100u64 {
            cache.get(&k).unwrap();
        }

        let mut counter = 0u64;
        b.iter(|| {
            let key = if counter % 10 == 0 {
                // Fresh key, forces a compute
                1_000_000 + counter
            } else {
                counter % 100
            };
            black_box(cache.get(&key).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_cached_get, bench_cache_miss, bench_mixed);
criterion_main!(benches);
