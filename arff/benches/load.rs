//! Benchmarks for ARFF loading and summarizing
//!
//! Run with: cargo bench -p arff

use arff::{summarize, ArffDataset, ArffFiles, ClassSelector, LoaderConfig, ResourceLimits};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fs;

const CATEGORIES: [&str; 4] = ["red", "green", "blue", "'light grey'"];

/// Generate an ARFF text with numeric and categorical features
fn generate_text(samples: usize, numeric: usize, categorical: usize) -> String {
    let mut rng = StdRng::seed_from_u64(0xA2FF);
    let mut text = String::from("@relation bench\n");
    for i in 0..numeric {
        text.push_str(&format!("@attribute n{i} REAL\n"));
    }
    for i in 0..categorical {
        text.push_str(&format!("@attribute c{i} {{red,green,blue,'light grey'}}\n"));
    }
    text.push_str("@attribute class {1,2,3}\n@data\n");

    for _ in 0..samples {
        for _ in 0..numeric {
            text.push_str(&format!("{:.4},", rng.gen_range(-100.0f32..100.0)));
        }
        for _ in 0..categorical {
            text.push_str(CATEGORIES[rng.gen_range(0..CATEGORIES.len())]);
            text.push(',');
        }
        text.push_str(&rng.gen_range(1..=3).to_string());
        text.push('\n');
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for samples in [1_000, 10_000, 100_000] {
        let text = generate_text(samples, 8, 4);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(samples), &text, |b, text| {
            b.iter(|| {
                ArffDataset::parse(
                    black_box(text),
                    &ClassSelector::Last,
                    &ResourceLimits::unlimited(),
                )
            })
        });
    }
    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    for samples in [1_000, 10_000, 100_000] {
        let text = generate_text(samples, 8, 4);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(samples), &text, |b, text| {
            b.iter(|| summarize(black_box(text), &ClassSelector::Last))
        });
    }
    group.finish();
}

fn bench_load_file(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("bench.arff");
    let text = generate_text(50_000, 8, 4);
    fs::write(&path, &text).expect("write fixture");

    let mut group = c.benchmark_group("load_file");
    group.throughput(Throughput::Bytes(text.len() as u64));
    for use_mmap in [true, false] {
        let name = if use_mmap { "mmap" } else { "buffered" };
        let config = LoaderConfig::with_limits(ResourceLimits::unlimited()).with_mmap(use_mmap);
        group.bench_function(name, |b| {
            let mut loader = ArffFiles::with_config(config);
            b.iter(|| loader.load(black_box(&path)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_summarize, bench_load_file);
criterion_main!(benches);
