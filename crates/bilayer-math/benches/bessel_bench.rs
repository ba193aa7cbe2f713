// ─────────────────────────────────────────────────────────────────────
// SCPN Bilayer Core — Bessel Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use bilayer_math::bessel::{bessel_k0_k1, AsymptoticBesselK, BesselKEvaluator};
use bilayer_math::complex::{sqrt_i, Complex64};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_precision_regions(c: &mut Criterion) {
    let mut group = c.benchmark_group("bessel_k0_k1");

    // Arguments k*r as they arise for a 10 Å inclusion.
    let series = sqrt_i() * 1.3;
    let cf2 = sqrt_i() * 12.0;
    let continuation = Complex64::new(-1.5, 0.4);

    group.bench_function("series_abs_lt_2", |b| {
        b.iter(|| bessel_k0_k1(black_box(series)))
    });
    group.bench_function("cf2_abs_12", |b| b.iter(|| bessel_k0_k1(black_box(cf2))));
    group.bench_function("left_half_plane", |b| {
        b.iter(|| bessel_k0_k1(black_box(continuation)))
    });
    group.finish();
}

fn bench_asymptotic(c: &mut Criterion) {
    let backend = AsymptoticBesselK {
        tolerance: 1e-12,
        max_iterations: 60,
    };
    let z = Complex64::new(30.0, 20.0);
    c.bench_function("asymptotic_k0_k1_abs_36", |b| {
        b.iter(|| backend.k0_k1(black_box(z)))
    });
}

criterion_group!(benches, bench_precision_regions, bench_asymptotic);
criterion_main!(benches);
