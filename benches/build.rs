use criterion::{black_box, criterion_group, criterion_main, Criterion};
use libaho::aho::{build_automaton, Config};

/// Deterministic pseudo-random patterns over a small alphabet, so that many
/// prefixes are shared and failure chains are long.
fn patterns(count: usize, len: usize) -> Vec<Vec<u8>> {
    let mut x: u64 = 0x9e37_79b9_7f4a_7c15;
    (0..count)
        .map(|_| {
            (0..len)
                .map(|_| {
                    x ^= x << 13;
                    x ^= x >> 7;
                    x ^= x << 17;
                    b'a' + (x % 4) as u8
                })
                .collect()
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let small = patterns(100, 8);
    let large = patterns(5_000, 16);
    let config = Config::new(1 << 20);

    c.bench_function("build_100x8", |b| {
        b.iter(|| build_automaton(&config, black_box(&small)).unwrap())
    });
    c.bench_function("build_5000x16", |b| {
        b.iter(|| build_automaton(&config, black_box(&large)).unwrap())
    });
}

fn bench_scan(c: &mut Criterion) {
    let pats = patterns(1_000, 8);
    let automaton = build_automaton(&Config::new(1 << 20), &pats).unwrap();
    let haystack: Vec<u8> = patterns(1, 64 * 1024).remove(0);

    c.bench_function("scan_64k", |b| {
        b.iter(|| automaton.find_overlapping_iter(black_box(&haystack)).count())
    });
}

criterion_group!(benches, bench_build, bench_scan);
criterion_main!(benches);
