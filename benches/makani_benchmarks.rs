//! Makani Substring Index Benchmarks
//!
//! This module contains benchmarks for the substring index. The benchmarks
//! are implemented using the Criterion framework, which provides statistical
//! analysis and performance regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput,
};
use std::time::Duration;

use makani_index_lib::data_structures::LehuaTrie;

/// Generates a deterministic password-like wordlist of the given size.
fn wordlist(size: usize) -> Vec<String> {
    (0..size)
        .map(|i| format!("user{i:06}pass{:x}", i.wrapping_mul(2654435761)))
        .collect()
}

/// Benchmark indexing throughput at different wordlist sizes.
fn bench_indexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("lehua_trie_index");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [1_000, 10_000, 50_000].iter() {
        let tokens = wordlist(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("index", size), &tokens, |b, tokens| {
            b.iter(|| {
                let mut trie = LehuaTrie::new();
                for token in tokens {
                    trie.index(black_box(token));
                }
                trie
            });
        });
    }

    group.finish();
}

/// Benchmark substring queries against a pre-built index.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("lehua_trie_search");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    let mut trie = LehuaTrie::new();
    for token in wordlist(50_000) {
        trie.index(&token);
    }

    // Keys with very different seed counts: rare, mid-token, and absent.
    for key in ["user000123", "pass", "zzz-not-there"].iter() {
        group.bench_with_input(BenchmarkId::new("search", key), key, |b, key| {
            b.iter(|| black_box(trie.search(black_box(key))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_indexing, bench_search);
criterion_main!(benches);
