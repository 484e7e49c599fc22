//! Criterion benchmarks for whole simulation steps.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use eddy_bench::{advection_profile, diffusion_profile, stress_profile};

fn bench_advection_step_10k(c: &mut Criterion) {
    let mut sim = advection_profile();
    sim.step();

    c.bench_function("advection_step_10k", |b| {
        b.iter(|| {
            let result = sim.step();
            black_box(result.snapshot);
        });
    });
}

fn bench_diffusion_step_10k(c: &mut Criterion) {
    let mut sim = diffusion_profile();
    sim.step();

    c.bench_function("diffusion_step_10k", |b| {
        b.iter(|| {
            let result = sim.step();
            black_box(result.snapshot);
        });
    });
}

fn bench_diffusion_step_1m(c: &mut Criterion) {
    let mut sim = stress_profile();
    sim.step();

    c.bench_function("diffusion_step_1m", |b| {
        b.iter(|| {
            let result = sim.step();
            black_box(result.snapshot);
        });
    });
}

fn bench_1000_ticks_10k(c: &mut Criterion) {
    c.bench_function("1000_ticks_10k", |b| {
        b.iter(|| {
            let mut sim = diffusion_profile();
            for _ in 0..1000 {
                black_box(sim.tick());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_advection_step_10k,
    bench_diffusion_step_10k,
    bench_diffusion_step_1m,
    bench_1000_ticks_10k
);
criterion_main!(benches);
