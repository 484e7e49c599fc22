//! Edge policies applied after a stencil pass.
//!
//! Both policies overwrite the outermost ring of cells of the freshly
//! computed grid. Ordering is fixed: a per-row pass writes the left and
//! right edge cells first, then a per-column pass writes the top and bottom
//! edge cells. Corners are written by both passes and keep the value from
//! the per-column pass.

use eddy_grid::Grid;

/// What happens at the domain edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Boundary {
    /// Edge cells are forced to a constant. Anything transported off the
    /// grid is destroyed.
    Dirichlet(f32),
    /// Edge cells copy their nearest interior neighbour along the normal
    /// (zero gradient). Nothing leaves through the edge.
    Neumann,
}

impl Boundary {
    /// Apply this policy to `grid` in place.
    pub fn apply(&self, grid: &mut Grid) {
        match *self {
            Self::Dirichlet(value) => apply_dirichlet(grid, value),
            Self::Neumann => apply_neumann(grid),
        }
    }
}

/// Force the outermost ring of cells to `value`.
pub fn apply_dirichlet(grid: &mut Grid, value: f32) {
    let (rows, cols) = grid.shape();
    let out = grid.as_mut_slice();

    for i in 0..rows {
        out[i * cols] = value;
        out[i * cols + cols - 1] = value;
    }
    for j in 0..cols {
        out[j] = value;
        out[(rows - 1) * cols + j] = value;
    }
}

/// Copy each edge cell from its nearest interior neighbour.
///
/// Left/right columns first (`g[i][0] = g[i][1]`,
/// `g[i][cols-1] = g[i][cols-2]`), then top/bottom rows
/// (`g[0][j] = g[1][j]`, `g[rows-1][j] = g[rows-2][j]`). An axis of
/// length 1 has no interior neighbour and is left unchanged.
pub fn apply_neumann(grid: &mut Grid) {
    let (rows, cols) = grid.shape();
    let out = grid.as_mut_slice();

    let (c_in, c_far_in) = (inner(cols), cols.saturating_sub(2));
    for i in 0..rows {
        let row = i * cols;
        out[row] = out[row + c_in];
        out[row + cols - 1] = out[row + c_far_in];
    }

    let (r_in, r_far_in) = (inner(rows), rows.saturating_sub(2));
    for j in 0..cols {
        out[j] = out[r_in * cols + j];
        out[(rows - 1) * cols + j] = out[r_far_in * cols + j];
    }
}

/// Index of the first interior cell along an axis of length `len`.
fn inner(len: usize) -> usize {
    if len >= 2 {
        1
    } else {
        0
    }
}
