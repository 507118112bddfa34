use std::{hint::black_box, sync::LazyLock, time::Duration};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use textnorm::{Normalizer, profile::preset};

static CORPUS: LazyLock<String> = LazyLock::new(|| {
    let paragraph = "  ¿Sabías que el número áureo, representado por la letra griega φ (phi), \
                     es aproximadamente 1,6180339887...?\n\tEste número, presente en la \
                     naturaleza y el arte, ha fascinado a matemáticos y artistas!\r\n";
    paragraph.repeat(64)
});

const CLEAN: &str = "already a clean search key with nothing to do";

/// Statically chained presets against the same chain built from a config string.
fn static_vs_dynamic(c: &mut Criterion) {
    let text = CORPUS.as_str();
    let mut group = c.benchmark_group("search_key");
    group.throughput(Throughput::Bytes(text.len() as u64));

    let profile = preset::search_key();
    group.bench_function(BenchmarkId::new("static", "corpus"), |b| {
        b.iter(|| black_box(profile.apply(black_box(text))))
    });

    let dynamic = Normalizer::from_config(
        "trim|lowercase|replace_accents|remove_special_characters|collapse_whitespace",
    )
    .unwrap_or_else(|e| panic!("bench config: {e}"));
    group.bench_function(BenchmarkId::new("dynamic", "corpus"), |b| {
        b.iter(|| black_box(dynamic.normalize(black_box(text))))
    });

    group.bench_function(BenchmarkId::new("dynamic", "clean"), |b| {
        b.iter(|| black_box(dynamic.normalize(black_box(CLEAN))))
    });
    group.finish();
}

fn presets(c: &mut Criterion) {
    let text = CORPUS.as_str();
    let mut group = c.benchmark_group("presets");
    group.throughput(Throughput::Bytes(text.len() as u64));

    let slug = preset::slug();
    group.bench_function("slug", |b| b.iter(|| black_box(slug.apply(black_box(text)))));
    let flatten = preset::flatten_lines();
    group.bench_function("flatten_lines", |b| {
        b.iter(|| black_box(flatten.apply(black_box(text))))
    });
    let spanish = preset::spanish_uppercase();
    group.bench_function("spanish_uppercase", |b| {
        b.iter(|| black_box(spanish.apply(black_box(text))))
    });
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(3))
        .warm_up_time(Duration::from_secs(1));
    targets = static_vs_dynamic, presets
);
criterion_main!(benches);
