//! Criterion benchmarks for the stencil and boundary passes in isolation.

use criterion::{criterion_group, criterion_main, Criterion};
use eddy_core::TickId;
use eddy_grid::{grid_hash, Grid, PingPongGrid};
use eddy_stepper::{Coefficients, StepContext, Stepper};
use eddy_steppers::boundary::{apply_dirichlet, apply_neumann};
use eddy_steppers::{Advection, Diffusion};
use eddy_test_utils::block_grid;

const SIZES: [usize; 3] = [100, 316, 1000];

fn bench_stencil(c: &mut Criterion, stepper: &dyn Stepper) {
    for size in SIZES {
        let current = block_grid(size, size, size / 10);
        let mut next = Grid::new(size, size).unwrap();
        c.bench_function(&format!("{}_stencil_{size}", stepper.name()), |b| {
            b.iter(|| {
                let mut ctx =
                    StepContext::new(&current, &mut next, TickId(1), Coefficients::default());
                stepper.step(&mut ctx);
            });
        });
        std::hint::black_box(&next);
    }
}

fn bench_advection_stencil(c: &mut Criterion) {
    bench_stencil(c, &Advection::default());
}

fn bench_diffusion_stencil(c: &mut Criterion) {
    bench_stencil(c, &Diffusion::default());
}

fn bench_boundaries(c: &mut Criterion) {
    for size in SIZES {
        let mut grid = block_grid(size, size, size / 4);
        c.bench_function(&format!("dirichlet_{size}"), |b| {
            b.iter(|| apply_dirichlet(std::hint::black_box(&mut grid), 0.0));
        });
        c.bench_function(&format!("neumann_{size}"), |b| {
            b.iter(|| apply_neumann(std::hint::black_box(&mut grid)));
        });
    }
}

fn bench_commit_1m(c: &mut Criterion) {
    let mut pair = PingPongGrid::from_initial(block_grid(1000, 1000, 100));
    c.bench_function("pingpong_commit_1m", |b| {
        b.iter(|| pair.commit());
    });
}

fn bench_grid_hash_10k(c: &mut Criterion) {
    let grid = block_grid(100, 100, 7);
    c.bench_function("grid_hash_10k", |b| {
        b.iter(|| std::hint::black_box(grid_hash(&grid)));
    });
}

criterion_group!(
    benches,
    bench_advection_stencil,
    bench_diffusion_stencil,
    bench_boundaries,
    bench_commit_1m,
    bench_grid_hash_10k
);
criterion_main!(benches);
