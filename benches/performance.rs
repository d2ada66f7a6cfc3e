// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for RAD
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Interval building and spelling
//! - Full chord conversion through the facade
//! - Scale chord generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rad::music::{absolute_interval_arr, interval_arr_to_notes_o, scale_to_interval_arr};
use rad::{Engine, ScaleChordOptions, ScaleSpec, SignType};

/// Benchmark spelling (core conversion operation)
fn bench_spelling(c: &mut Criterion) {
    let mut group = c.benchmark_group("spelling");

    for (name, intervals) in [
        ("triad", vec![0, 4, 7]),
        ("thirteenth", vec![0, 4, 7, 10, 14, 17, 21]),
        ("high_root", vec![11, 15, 18, 21, 25, 28, 32]),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &intervals, |b, intervals| {
            b.iter(|| interval_arr_to_notes_o(black_box(intervals), 4, SignType::Flat))
        });
    }

    group.finish();
}

/// Benchmark interval building
fn bench_interval_building(c: &mut Criterion) {
    let steps = [2, 2, 1, 2, 2, 2, 1];

    c.bench_function("scale_to_interval_arr", |b| {
        b.iter(|| scale_to_interval_arr(black_box(&steps)))
    });

    c.bench_function("absolute_interval_arr", |b| {
        b.iter(|| absolute_interval_arr(black_box(7), black_box(&[4, 7, 10, 14])))
    });
}

/// Benchmark chord conversion through the engine
fn bench_chords(c: &mut Criterion) {
    let engine = Engine::new();
    let mut group = c.benchmark_group("chord");

    for symbol in ["C", "F#m7", "Bbmaj9", "E13"] {
        group.bench_with_input(BenchmarkId::from_parameter(symbol), &symbol, |b, &symbol| {
            b.iter(|| engine.chord(black_box(symbol), 4, SignType::Default))
        });
    }

    group.finish();
}

/// Benchmark scale chord generation
fn bench_scale_chords(c: &mut Criterion) {
    let engine = Engine::new();
    let mut group = c.benchmark_group("scale_chords");

    for scale_type in ["major", "harmonic_minor", "chromatic"] {
        let spec = ScaleSpec::new("D", scale_type);
        for size in [3usize, 4] {
            let options = ScaleChordOptions {
                size,
                ..ScaleChordOptions::default()
            };
            group.bench_with_input(
                BenchmarkId::new(scale_type, size),
                &spec,
                |b, spec| b.iter(|| engine.scale_chords_with(black_box(spec), options)),
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_spelling,
    bench_interval_building,
    bench_chords,
    bench_scale_chords
);
criterion_main!(benches);
