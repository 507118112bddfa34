use std::{borrow::Cow, hint::black_box, time::Duration};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use textnorm::{
    CollapseWhitespace, Lowercase, Normalizer, RemoveDiacritics, RemovePunctuation,
    RemoveSpecialCharacters, ReplaceAccents, ReplaceNewline, ReplaceSpace, ReplaceTildes, Trim,
    Uppercase, stage::Stage,
};

const SAMPLES: &[(&str, &str)] = &[
    ("ascii", "The quick brown fox jumps over the lazy dog"),
    ("ascii_noisy", "  Hello,   World!!  @2023 #tags\t\r\n  "),
    ("spanish", "¡España mañana! ¿Cuántos niños jugarán en el jardín?"),
    ("accents", "CAFÉ résumé naïve Ångström Çà et là"),
    ("mixed", "Hello naïve World! φ (phi) ≈ 1,618 🇫🇷 \n ñandú"),
];

fn stage_benches_auto<S, C>(c: &mut Criterion, stage_name: &str, constructor: C)
where
    S: Stage + 'static,
    C: Fn() -> S,
{
    let mut group = c.benchmark_group(stage_name);
    let mut auto_unchanged = Vec::new();

    for &(label, text) in SAMPLES {
        let n = Normalizer::builder().add_stage(constructor()).build();
        auto_unchanged.push((label, n.normalize(text).into_owned()));

        let mut zero_copy_hits = 0usize;
        let mut total = 0usize;
        group.bench_function(BenchmarkId::new("changed", label), |b| {
            b.iter_batched(
                || text,
                |t| {
                    total += 1;
                    let result = n.normalize(t);
                    if matches!(result, Cow::Borrowed(s) if s.as_ptr() == t.as_ptr() && s.len() == t.len()) {
                        zero_copy_hits += 1;
                    }
                    black_box(result);
                },
                BatchSize::SmallInput,
            )
        });
        report(zero_copy_hits, total);
    }

    for (label, normalized) in &auto_unchanged {
        let n = Normalizer::builder().add_stage(constructor()).build();
        let mut zero_copy_hits = 0usize;
        let mut total = 0usize;
        group.bench_function(BenchmarkId::new("unchanged", label), |b| {
            b.iter_batched(
                || normalized.as_str(),
                |t| {
                    total += 1;
                    let result = n.normalize(t);
                    if matches!(result, Cow::Borrowed(s) if s.as_ptr() == t.as_ptr() && s.len() == t.len()) {
                        zero_copy_hits += 1;
                    }
                    black_box(result);
                },
                BatchSize::SmallInput,
            )
        });
        report(zero_copy_hits, total);
    }

    group.finish();
}

fn report(zero_copy_hits: usize, total: usize) {
    let pct = if total > 0 {
        (zero_copy_hits as f64 / total as f64) * 100.0
    } else {
        0.0
    };
    println!("   ZERO-COPY {zero_copy_hits}/{total} ({pct:.2}%)");
}

fn stage_matrix(c: &mut Criterion) {
    stage_benches_auto(c, "Lowercase", || Lowercase);
    stage_benches_auto(c, "Uppercase", || Uppercase);
    stage_benches_auto(c, "Trim", || Trim);
    stage_benches_auto(c, "CollapseWhitespace", || CollapseWhitespace);
    stage_benches_auto(c, "ReplaceAccents", || ReplaceAccents);
    stage_benches_auto(c, "ReplaceTildes", || ReplaceTildes);
    stage_benches_auto(c, "RemoveDiacritics", || RemoveDiacritics);
    stage_benches_auto(c, "RemovePunctuation", || RemovePunctuation);
    stage_benches_auto(c, "RemoveSpecialCharacters", || RemoveSpecialCharacters);
    stage_benches_auto(c, "ReplaceSpace", || ReplaceSpace::new("-"));
    stage_benches_auto(c, "ReplaceNewline", || ReplaceNewline::new(" "));
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(2))
        .warm_up_time(Duration::from_secs(1))
        .noise_threshold(0.015)
        .significance_level(0.05);
    targets = stage_matrix
);
criterion_main!(benches);
