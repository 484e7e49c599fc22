//! Centered-block initial condition.

use crate::grid::Grid;

/// A centered square block of constant value on a zero background.
///
/// The block covers rows `[rows/2 - h, rows/2 + h)` and columns
/// `[cols/2 - h, cols/2 + h)` where `h` is the half width, so each side is
/// `2h` cells long. A half width of 7 on a 100×100 grid seeds the
/// 14×14 block `[43, 57)²`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeedBlock {
    /// Distance from the grid center to the block edge, in cells.
    pub half_width: usize,
    /// Value written into every cell of the block.
    pub value: f32,
}

impl SeedBlock {
    /// Block used by the reference advection setup (14×14 of 1.0).
    pub const ADVECTION: Self = Self {
        half_width: 7,
        value: 1.0,
    };

    /// Block used by the reference diffusion setup (10×10 of 1.0).
    pub const DIFFUSION: Self = Self {
        half_width: 5,
        value: 1.0,
    };

    /// A block of `value` with the given half width.
    pub fn new(half_width: usize, value: f32) -> Self {
        Self { half_width, value }
    }

    /// Write this block into `grid`.
    pub fn apply(&self, grid: &mut Grid) {
        seed_block(grid, self.half_width, self.value);
    }
}

/// Set every cell in the centered square of the given half width to `value`.
///
/// Cells outside the existing grid are skipped rather than reported: a
/// half width larger than the grid simply fills the whole grid.
pub fn seed_block(grid: &mut Grid, half_width: usize, value: f32) {
    let (rows, cols) = grid.shape();
    let (r0, r1) = centered_span(rows, half_width);
    let (c0, c1) = centered_span(cols, half_width);
    for r in r0..r1 {
        grid.row_mut(r)[c0..c1].fill(value);
    }
}

/// Half-open `[len/2 - h, len/2 + h)` clipped to `[0, len)`.
fn centered_span(len: usize, half_width: usize) -> (usize, usize) {
    let mid = len / 2;
    (
        mid.saturating_sub(half_width),
        mid.saturating_add(half_width).min(len),
    )
}
