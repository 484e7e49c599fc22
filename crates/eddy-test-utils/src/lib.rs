//! Test fixtures and assertion helpers for eddy development.
//!
//! Grid builders for the reference setups, boundary assertions shared by
//! the stepper and engine test suites, and a few trivial [`Stepper`]s in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use eddy_core::{GridRead, TickId};
use eddy_grid::{seed_block, Grid};
use eddy_stepper::{Coefficients, StepContext, Stepper};

/// Grid side length of both reference setups.
pub const REFERENCE_SIZE: usize = 100;

/// `rows x cols` zero grid with a centered block of 1.0.
pub fn block_grid(rows: usize, cols: usize, half_width: usize) -> Grid {
    let mut g = Grid::new(rows, cols).expect("test grid dimensions must be valid");
    seed_block(&mut g, half_width, 1.0);
    g
}

/// Grid filled from `f(row, col)`.
pub fn grid_from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> f32) -> Grid {
    let data = (0..rows * cols).map(|k| f(k / cols, k % cols)).collect();
    Grid::from_vec(rows, cols, data).expect("test grid dimensions must be valid")
}

/// Run one step of `stepper` from `current` into a fresh grid.
pub fn step_once(stepper: &dyn Stepper, current: &Grid, coefficients: Coefficients) -> Grid {
    let mut next = Grid::new(current.rows(), current.cols()).expect("shape already validated");
    stepper.step(&mut StepContext::new(
        current,
        &mut next,
        TickId(1),
        coefficients,
    ));
    next
}

/// Run `n` steps with unit coefficients, returning the final grid.
pub fn step_n(stepper: &dyn Stepper, initial: &Grid, n: usize) -> Grid {
    let mut cur = initial.clone();
    for _ in 0..n {
        cur = step_once(stepper, &cur, Coefficients::default());
    }
    cur
}

/// Panic unless every cell on the outer ring equals `value` exactly.
pub fn assert_ring_equals(grid: &dyn GridRead, value: f32) {
    let (rows, cols) = grid.shape();
    for i in 0..rows {
        for j in [0, cols - 1] {
            assert_eq!(grid.get_value(i, j), value, "edge cell ({i}, {j})");
        }
    }
    for j in 0..cols {
        for i in [0, rows - 1] {
            assert_eq!(grid.get_value(i, j), value, "edge cell ({i}, {j})");
        }
    }
}

/// Panic unless every edge cell equals its inward neighbour along the normal.
///
/// Only meaningful when both axes have at least two cells.
pub fn assert_zero_gradient(grid: &dyn GridRead) {
    let (rows, cols) = grid.shape();
    for i in 0..rows {
        assert_eq!(grid.get_value(i, 0), grid.get_value(i, 1), "left edge, row {i}");
        assert_eq!(
            grid.get_value(i, cols - 1),
            grid.get_value(i, cols - 2),
            "right edge, row {i}"
        );
    }
    for j in 0..cols {
        assert_eq!(grid.get_value(0, j), grid.get_value(1, j), "top edge, col {j}");
        assert_eq!(
            grid.get_value(rows - 1, j),
            grid.get_value(rows - 2, j),
            "bottom edge, col {j}"
        );
    }
}

/// Panic if any cell is NaN or infinite.
pub fn assert_all_finite(grid: &dyn GridRead) {
    if let Some(pos) = grid.as_slice().iter().position(|v| !v.is_finite()) {
        let cols = grid.cols();
        panic!(
            "non-finite value {} at ({}, {})",
            grid.as_slice()[pos],
            pos / cols,
            pos % cols
        );
    }
}
