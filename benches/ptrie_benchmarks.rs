//! ptrie Benchmarks
//!
//! Benchmarks for the frequency trie, implemented with Criterion.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use ptrie_lib::bench::word_list;
use ptrie_lib::data_structures::FrequencyTrie;
use std::time::Duration;

fn filled_trie(words: &[String]) -> FrequencyTrie {
    let mut trie = FrequencyTrie::new();
    for word in words {
        trie.insert(word).unwrap();
    }
    trie
}

/// Benchmark insertion
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequency_trie_insert");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [1_000, 10_000, 100_000].iter() {
        let words = word_list(*size, size / 4);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("sequential", size), &words, |b, words| {
            b.iter(|| black_box(filled_trie(words)));
        });
    }

    group.finish();
}

/// Benchmark best-completion lookups
fn bench_autocomplete(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequency_trie_autocomplete");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));

    let trie = filled_trie(&word_list(50_000, 5_000));

    // Shorter prefixes cover larger subtrees
    for prefix in ["w", "wa", "wab", "zzz"].iter() {
        group.bench_with_input(BenchmarkId::new("prefix", prefix), prefix, |b, prefix| {
            b.iter(|| black_box(trie.autocomplete(prefix).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark full enumeration
fn bench_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequency_trie_words");
    let trie = filled_trie(&word_list(20_000, 20_000));

    group.throughput(Throughput::Elements(trie.len() as u64));
    group.bench_function("enumerate", |b| {
        b.iter(|| black_box(trie.words().count()));
    });

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_insert, bench_autocomplete, bench_words
}

criterion_main!(benches);
