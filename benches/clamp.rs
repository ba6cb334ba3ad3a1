//! Benchmarks for the recompute path run on every keystroke.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fluid_sizes::css::{ClampExpression, Layout};
use fluid_sizes::scale::Field;
use fluid_sizes::{derive, DisplayOptions, FluidScaleCalculator};

/// Derivation alone
fn bench_derive(c: &mut Criterion) {
    c.bench_function("derive", |b| {
        b.iter(|| {
            derive(
                black_box(1.5),
                black_box(700.0),
                black_box(3.0),
                black_box(1000.0),
            )
            .expect("valid inputs")
        })
    });
}

/// Rendering both layouts of one expression
fn bench_render(c: &mut Criterion) {
    let clamp = ClampExpression {
        min_size: 1.5,
        vw_coefficient: 8.0,
        rem_coefficient: -2.0,
        max_size: 3.0,
    };
    c.bench_function("render_single_line", |b| {
        b.iter(|| black_box(&clamp).render(Layout::SingleLine))
    });
    c.bench_function("render_line_broken", |b| {
        b.iter(|| black_box(&clamp).render(Layout::LineBroken))
    });
}

/// One keystroke: coerce, recompute, snapshot
fn bench_keystroke(c: &mut Criterion) {
    let options = DisplayOptions::default();
    let mut calc = FluidScaleCalculator::default();
    c.bench_function("keystroke_snapshot", |b| {
        b.iter(|| {
            calc.set_text(Field::MaxSize, black_box("4.5"));
            calc.snapshot(black_box(1280.0), &options)
        })
    });
}

criterion_group!(benches, bench_derive, bench_render, bench_keystroke);
criterion_main!(benches);
