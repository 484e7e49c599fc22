//! Row-major 2D scalar grid.

use std::ops::{Index, IndexMut};

use eddy_core::{GridError, GridRead};

/// A rectangular `rows × cols` array of `f32`, stored row-major.
///
/// Dimensions are fixed at construction. Cell access is bounds-checked
/// on both axes independently: `(0, cols)` is out of range even though
/// its flat index would land on row 1. Out-of-range access panics with
/// the offending index and the grid shape.
///
/// # Examples
///
/// ```
/// use eddy_grid::Grid;
///
/// let mut g = Grid::new(3, 4).unwrap();
/// g[(1, 2)] = 0.5;
/// assert_eq!(g.get(1, 2), 0.5);
/// assert_eq!(g.as_slice()[1 * 4 + 2], 0.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Grid {
    /// Maximum size of either axis.
    pub const MAX_DIM: usize = u32::MAX as usize;

    /// Create a zero-filled grid.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds [`Grid::MAX_DIM`].
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::check_shape(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        })
    }

    /// Wrap existing row-major data.
    ///
    /// `data.len()` must equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, GridError> {
        Self::check_shape(rows, cols)?;
        if data.len() != rows * cols {
            return Err(GridError::LengthMismatch {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Check that a `rows x cols` grid could be constructed, without allocating.
    pub fn check_shape(rows: usize, cols: usize) -> Result<(), GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        if rows.checked_mul(cols).is_none() {
            return Err(GridError::DimensionTooLarge {
                name: "cells",
                value: usize::MAX,
                max: usize::MAX,
            });
        }
        Ok(())
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.data.len()
    }

    /// Flat row-major index of `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    #[inline]
    #[track_caller]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Value at `(row, col)`. Panics out of range.
    #[inline]
    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[self.index_of(row, col)]
    }

    /// Value at `(row, col)`, or `None` out of range.
    pub fn try_get(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Set the value at `(row, col)`. Panics out of range.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        let i = self.index_of(row, col);
        self.data[i] = value;
    }

    /// One row as a slice.
    #[track_caller]
    pub fn row(&self, row: usize) -> &[f32] {
        let start = self.index_of(row, 0);
        &self.data[start..start + self.cols]
    }

    /// One row as a mutable slice.
    #[track_caller]
    pub fn row_mut(&mut self, row: usize) -> &mut [f32] {
        let start = self.index_of(row, 0);
        let cols = self.cols;
        &mut self.data[start..start + cols]
    }

    /// All cells, row-major.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// All cells, row-major, mutable.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Fill the centered square of the given half width with `value`.
    ///
    /// See [`seed_block`](crate::seed_block).
    pub fn seed_block(&mut self, half_width: usize, value: f32) {
        crate::seed::seed_block(self, half_width, value);
    }

    /// Largest cell value.
    pub fn max_value(&self) -> f32 {
        self.data.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Smallest cell value.
    pub fn min_value(&self) -> f32 {
        self.data.iter().copied().fold(f32::INFINITY, f32::min)
    }

    /// Sum of all cells, accumulated in `f64`.
    pub fn sum(&self) -> f64 {
        self.data.iter().map(|&v| v as f64).sum()
    }

    /// `true` if every cell is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Check that `other` has the same shape as `self`.
    pub fn ensure_same_shape(&self, other: &Grid) -> Result<(), GridError> {
        if self.shape() != other.shape() {
            return Err(GridError::DimensionMismatch {
                expected: self.shape(),
                actual: other.shape(),
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f32;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.data[self.index_of(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        let i = self.index_of(row, col);
        &mut self.data[i]
    }
}

impl GridRead for Grid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn get_value(&self, row: usize, col: usize) -> f32 {
        self.get(row, col)
    }

    fn as_slice(&self) -> &[f32] {
        &self.data
    }
}
