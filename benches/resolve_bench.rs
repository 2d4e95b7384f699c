//! Benchmarks for theme building and scope-chain resolution.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scopetheme::theme::Theme;

/// Generate a theme with `n` rules spread over a few scope families.
fn generate_theme(n: usize) -> String {
    let families = ["keyword", "string", "comment", "entity.name", "meta", "support"];
    let rules: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r##"{{"scope": "{}.rule{}.leaf", "settings": {{"foreground": "#{:06x}"}}}}"##,
                families[i % families.len()],
                i,
                (i * 2654435) & 0xFF_FFFF
            )
        })
        .collect();
    format!(
        r##"{{"colors": {{"foreground": "#cccccc"}}, "tokenColors": [{}]}}"##,
        rules.join(",")
    )
}

/// A scope chain of the given depth.
fn generate_chain(depth: usize) -> Vec<String> {
    (0..depth)
        .map(|i| format!("meta.rule{}.leaf.extra", i * 6 + 4))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("Theme::from_json_str");

    for size in [10, 100, 1_000] {
        let json = generate_theme(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, json| {
            b.iter(|| Theme::from_json_str(black_box(json)).unwrap());
        });
    }

    group.finish();
}

fn bench_resolve_cold(c: &mut Criterion) {
    let mut group = c.benchmark_group("Theme::resolve/cold");
    let json = generate_theme(500);

    for depth in [1, 4, 16] {
        let chain = generate_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &chain, |b, chain| {
            b.iter_batched(
                || Theme::from_json_str(&json).unwrap(),
                |theme| theme.resolve(black_box(chain)),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_resolve_cached(c: &mut Criterion) {
    let mut group = c.benchmark_group("Theme::resolve/cached");
    let theme = Theme::from_json_str(&generate_theme(500)).unwrap();

    for depth in [1, 4, 16] {
        let chain = generate_chain(depth);
        theme.resolve(&chain);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &chain, |b, chain| {
            b.iter(|| theme.resolve(black_box(chain)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_resolve_cold,
    bench_resolve_cached
);
criterion_main!(benches);
