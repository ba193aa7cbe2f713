// ─────────────────────────────────────────────────────────────────────
// SCPN Bilayer Core — Smin Search Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use bilayer_core::inclusion::{BilayerInputs, InclusionComparison};
use bilayer_core::smin::{calculate_smin, SminObjective};
use bilayer_types::config::{BilayerConfig, SminSearchConfig, SolverConfig};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_smin(c: &mut Criterion) {
    let solver = SolverConfig::default();
    let search = SminSearchConfig::default();
    let objective = SminObjective {
        d0: 28.0,
        u0: 2.0,
        r0: 10.0,
        ka: 218.0,
        kc: 60.0,
        kg: 0.0,
        alpha: 0.0,
        c0: 0.0,
    };
    c.bench_function("smin_reference", |b| {
        b.iter(|| {
            let s = calculate_smin(black_box(&objective), &solver, &search)
                .expect("search should succeed");
            black_box(s)
        })
    });
}

fn bench_comparison(c: &mut Criterion) {
    let config = BilayerConfig::default();
    let inputs = BilayerInputs::from_config(&config);
    let mut group = c.benchmark_group("inclusion_comparison");
    group.sample_size(10);
    group.bench_function("relaxed_defaults", |b| {
        b.iter(|| {
            let cmp = InclusionComparison::compute(black_box(&inputs), &config)
                .expect("comparison should succeed");
            black_box(cmp.delta_g_bilayer)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_smin, bench_comparison);
criterion_main!(benches);
