//! Benchmarks for kicau normalization performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test the pipeline at various batch sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kicau::{SentimentPipeline, SlangDictionary};

/// Creates a synthetic batch of noisy tweets.
fn create_test_batch(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            format!(
                "Aplikasinyaaa error terus parah bgt!! antri {i} jam \
                 https://t.co/abc{i} @dirjenpajak #coretax #pajak{i}"
            )
        })
        .collect()
}

fn test_pipeline() -> SentimentPipeline {
    let slang = SlangDictionary::from_entries([
        ("bgt", "banget"),
        ("gk", "tidak"),
        ("yg", "yang"),
        ("udah", "sudah"),
        ("aja", "saja"),
    ]);
    SentimentPipeline::new(slang)
}

/// Benchmark the full pipeline at various batch sizes.
fn bench_pipeline(c: &mut Criterion) {
    let pipeline = test_pipeline();
    let mut group = c.benchmark_group("pipeline_normalize");

    for count in [10, 100, 1000].iter() {
        let batch = create_test_batch(*count);
        let bytes: usize = batch.iter().map(String::len).sum();

        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::new("tweets", count), &batch, |b, batch| {
            b.iter(|| {
                for text in batch {
                    let _ = pipeline.normalize(black_box(text));
                }
            });
        });
    }

    group.finish();
}

/// Benchmark the individual normalization stages.
fn bench_stages(c: &mut Criterion) {
    use kicau::normalize::{case_fold, collapse_elongation, strip_noise, NormalizeOptions};

    let text = "Aplikasinyaaa ERROR terus parah bgt!! antri 2 jam \
                https://t.co/abc @dirjenpajak #coretax";
    let options = NormalizeOptions::default();

    c.bench_function("case_fold", |b| {
        b.iter(|| case_fold(black_box(text)));
    });

    c.bench_function("strip_noise", |b| {
        b.iter(|| strip_noise(black_box(text), &options));
    });

    c.bench_function("collapse_elongation", |b| {
        b.iter(|| collapse_elongation(black_box("aplikasinyaaa errorrr parahhh bangetttt")));
    });
}

/// Benchmark slang substitution against a larger dictionary.
fn bench_slang_substitution(c: &mut Criterion) {
    let entries: Vec<(String, String)> = (0..2000)
        .map(|i| (format!("slang{i}"), format!("baku{i}")))
        .collect();
    let dict = SlangDictionary::from_entries(entries);

    c.bench_function("slang_apply", |b| {
        b.iter(|| dict.apply(black_box("slang42 kata biasa slang1999 lain slang0")));
    });
}

criterion_group!(benches, bench_pipeline, bench_stages, bench_slang_substitution);
criterion_main!(benches);
