use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rank_skiplist::SkipList;
use std::collections::BTreeSet;

const N: usize = 10_000;
const SEED: u64 = 0x5eed;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn skiplist_of(keys: &[i64]) -> SkipList<i64> {
    let mut list = SkipList::with_seed(SEED);
    list.extend(keys);
    list
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion, name: &str, keys: &[i64]) {
    let mut group = c.benchmark_group(name);

    group.bench_function(BenchmarkId::new("SkipList", N), |b| {
        b.iter(|| skiplist_of(keys));
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| keys.iter().copied().collect::<BTreeSet<i64>>());
    });

    group.finish();
}

fn bench_insert_ordered(c: &mut Criterion) {
    bench_insert(c, "insert_ordered", &ordered_keys(N));
}

fn bench_insert_random(c: &mut Criterion) {
    bench_insert(c, "insert_random", &random_keys(N));
}

// ─── Lookup ─────────────────────────────────────────────────────────────────

fn bench_contains_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let list = skiplist_of(&keys);
    let set: BTreeSet<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("contains_random");

    group.bench_function(BenchmarkId::new("SkipList", N), |b| {
        b.iter(|| keys.iter().filter(|&&k| list.contains(&k)).count());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| keys.iter().filter(|&&k| set.contains(&k)).count());
    });

    group.finish();
}

// ─── Remove ─────────────────────────────────────────────────────────────────

fn bench_delete_random(c: &mut Criterion) {
    let keys = random_keys(N);

    let mut group = c.benchmark_group("delete_random");

    group.bench_function(BenchmarkId::new("SkipList", N), |b| {
        b.iter_batched(
            || skiplist_of(&keys),
            |mut list| {
                for k in &keys {
                    list.delete(k);
                }
                list
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<BTreeSet<i64>>(),
            |mut set| {
                for k in &keys {
                    set.remove(k);
                }
                set
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ─── Order statistics ───────────────────────────────────────────────────────

fn bench_rank_of_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let list = skiplist_of(&keys);
    let set: BTreeSet<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("rank_of_random");

    group.bench_function(BenchmarkId::new("SkipList", N), |b| {
        b.iter(|| keys.iter().filter_map(|k| list.rank_of(k)).sum::<usize>());
    });

    // A BTreeSet has no rank index; counting the elements below is O(n).
    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| keys.iter().take(N / 100).map(|k| set.range(..*k).count()).sum::<usize>());
    });

    group.finish();
}

fn bench_get_by_rank(c: &mut Criterion) {
    let list = skiplist_of(&random_keys(N));

    let mut group = c.benchmark_group("get_by_rank");

    group.bench_function(BenchmarkId::new("SkipList", N), |b| {
        b.iter(|| (1..=N).filter_map(|rank| list.get_by_rank(rank)).fold(0i64, |acc, &v| acc.wrapping_add(v)));
    });

    group.bench_function(BenchmarkId::new("SkipList::iter", N), |b| {
        b.iter(|| list.iter().fold(0i64, |acc, &v| acc.wrapping_add(v)));
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(insert_benches, bench_insert_ordered, bench_insert_random,);

criterion_group!(lookup_benches, bench_contains_random, bench_delete_random,);

criterion_group!(rank_benches, bench_rank_of_random, bench_get_by_rank,);

criterion_main!(insert_benches, lookup_benches, rank_benches,);
