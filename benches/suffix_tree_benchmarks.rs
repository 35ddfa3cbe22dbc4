//! Benchmarks for suffix tree construction and query performance.

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use libsuffixtree::SuffixTree;

/// Deterministic pseudo-text over a small alphabet; small alphabets maximize
/// edge splits and suffix-link traffic.
fn generate_text(len: usize, alphabet: &[u8]) -> Vec<u8> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            alphabet[(state >> 33) as usize % alphabet.len()]
        })
        .collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("suffix_tree_construction");

    for &len in &[1_000usize, 10_000, 100_000] {
        for (name, alphabet) in [("dna", &b"acgt"[..]), ("ascii", &b"abcdefghijklmnopqrstuvwxyz"[..])] {
            let text = generate_text(len, alphabet);
            group.throughput(Throughput::Bytes(len as u64));
            group.bench_with_input(
                BenchmarkId::new(name, len),
                &text,
                |b, text| {
                    b.iter(|| {
                        let tree = SuffixTree::from_bytes(black_box(text)).unwrap();
                        black_box(tree);
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("suffix_tree_search");

    let text = generate_text(100_000, b"acgt");
    let tree = SuffixTree::from_bytes(&text).unwrap();

    for &pattern_len in &[4usize, 16, 64, 256] {
        // A pattern guaranteed present: a slice of the text itself.
        let present = &text[1000..1000 + pattern_len];
        group.throughput(Throughput::Bytes(pattern_len as u64));
        group.bench_with_input(
            BenchmarkId::new("present", pattern_len),
            present,
            |b, pattern| {
                b.iter(|| black_box(tree.search_bytes(black_box(pattern))));
            },
        );

        let mut absent = present.to_vec();
        absent.push(b'z'); // outside the alphabet, can never match
        group.bench_with_input(
            BenchmarkId::new("absent", pattern_len),
            &absent,
            |b, pattern| {
                b.iter(|| black_box(tree.search_bytes(black_box(pattern))));
            },
        );
    }
    group.finish();
}

fn bench_occurrence_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("suffix_tree_occurrences");

    let text = generate_text(50_000, b"acgt");
    let tree = SuffixTree::from_bytes(&text).unwrap();

    for &pattern_len in &[4usize, 8, 12] {
        let pattern = &text[500..500 + pattern_len];
        group.bench_with_input(
            BenchmarkId::new("list", pattern_len),
            pattern,
            |b, pattern| {
                let pattern = std::str::from_utf8(pattern).unwrap();
                b.iter(|| black_box(tree.occurrences(black_box(pattern))));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("count", pattern_len),
            pattern,
            |b, pattern| {
                let pattern = std::str::from_utf8(pattern).unwrap();
                b.iter(|| black_box(tree.occurrence_count(black_box(pattern))));
            },
        );
    }
    group.finish();
}

fn bench_longest_repeated_substring(c: &mut Criterion) {
    let mut group = c.benchmark_group("suffix_tree_longest_repeat");

    for &len in &[1_000usize, 10_000, 50_000] {
        let text = generate_text(len, b"acgt");
        let tree = SuffixTree::from_bytes(&text).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(len), &tree, |b, tree| {
            b.iter(|| black_box(tree.longest_repeated_substring()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_search,
    bench_occurrence_queries,
    bench_longest_repeated_substring
);
criterion_main!(benches);
