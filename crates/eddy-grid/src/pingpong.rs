//! Double-buffered grid pair with pointer swap.
//!
//! [`PingPongGrid`] keeps two equally-shaped grids that alternate between
//! "current" (readable) and "scratch" (writable) roles. The lifecycle per
//! step is:
//! 1. `begin()`: borrow current immutably and scratch mutably
//! 2. a stepper rewrites every cell of scratch from current
//! 3. `commit()`: swap the two buffers, bump the generation
//!
//! Between `begin()` and `commit()` the [`Staging`] guard holds both
//! borrows, so nothing else can read the pair mid-step.

use eddy_core::GridError;

use crate::grid::Grid;

/// Borrowed view of both buffers for the duration of one step.
///
/// Created by [`PingPongGrid::begin()`]. Drop it before calling
/// [`PingPongGrid::commit()`].
#[must_use]
pub struct Staging<'a> {
    /// The grid being read (state at the start of the step).
    pub current: &'a Grid,
    /// The grid being written (state at the end of the step).
    pub scratch: &'a mut Grid,
}

/// Two grids of identical shape with O(1) swap.
///
/// # Buffer layout
///
/// ```text
/// current: Grid  ←─── published; what renderers and snapshots see
/// scratch: Grid  ←─── staging; contents unspecified until rewritten
/// ```
///
/// `commit()` exchanges the two `Vec` handles, so a reader holding
/// `&PingPongGrid` sees either the whole old grid or the whole new one.
#[derive(Clone, Debug)]
pub struct PingPongGrid {
    current: Grid,
    scratch: Grid,
    generation: u64,
}

impl PingPongGrid {
    /// Create a zero-filled pair.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Ok(Self::from_initial(Grid::new(rows, cols)?))
    }

    /// Build a pair whose current buffer is `initial`.
    ///
    /// The scratch buffer is allocated zero-filled with the same shape.
    pub fn from_initial(initial: Grid) -> Self {
        let mut scratch = initial.clone();
        scratch.fill(0.0);
        Self {
            current: initial,
            scratch,
            generation: 0,
        }
    }

    /// The published grid.
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// `(rows, cols)` of both buffers.
    pub fn shape(&self) -> (usize, usize) {
        self.current.shape()
    }

    /// Number of commits since construction or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Borrow both buffers for one step.
    pub fn begin(&mut self) -> Staging<'_> {
        Staging {
            current: &self.current,
            scratch: &mut self.scratch,
        }
    }

    /// Publish the scratch buffer as the new current grid.
    ///
    /// The previous current grid becomes the next scratch buffer; its
    /// contents are stale and must be fully overwritten by the next step.
    pub fn commit(&mut self) {
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
    }

    /// Replace the current grid and reset the generation counter.
    ///
    /// Returns `Err(GridError::DimensionMismatch)` if `grid` has a
    /// different shape from the existing buffers.
    pub fn reset(&mut self, grid: Grid) -> Result<(), GridError> {
        self.current.ensure_same_shape(&grid)?;
        self.current = grid;
        self.scratch.fill(0.0);
        self.generation = 0;
        Ok(())
    }

    /// Consume the pair and return the current grid.
    pub fn into_current(self) -> Grid {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pair_is_zeroed_at_generation_zero() {
        let p = PingPongGrid::new(3, 4).unwrap();
        assert_eq!(p.shape(), (3, 4));
        assert_eq!(p.generation(), 0);
        assert!(p.current().as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn from_initial_keeps_current_and_zeroes_scratch() {
        let g = Grid::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut p = PingPongGrid::from_initial(g.clone());
        assert_eq!(p.current(), &g);
        let staging = p.begin();
        assert!(staging.scratch.as_slice().iter().all(|&v| v == 0.0));
        assert_eq!(staging.scratch.shape(), (2, 2));
    }

    #[test]
    fn writes_to_scratch_invisible_until_commit() {
        let mut p = PingPongGrid::new(2, 2).unwrap();
        {
            let staging = p.begin();
            staging.scratch.fill(7.0);
            assert_eq!(staging.current.get(0, 0), 0.0);
        }
        assert_eq!(p.current().get(1, 1), 0.0);
        p.commit();
        assert_eq!(p.current().get(1, 1), 7.0);
        assert_eq!(p.generation(), 1);
    }

    #[test]
    fn commit_swaps_rather_than_copies() {
        let mut p = PingPongGrid::from_initial(Grid::from_vec(1, 2, vec![1.0, 1.0]).unwrap());
        {
            let staging = p.begin();
            staging.scratch.fill(2.0);
        }
        p.commit();
        // The old current is now scratch.
        let staging = p.begin();
        assert_eq!(staging.current.as_slice(), &[2.0, 2.0]);
        assert_eq!(staging.scratch.as_slice(), &[1.0, 1.0]);
    }

    #[test]
    fn reset_rejects_wrong_shape() {
        let mut p = PingPongGrid::new(2, 2).unwrap();
        let err = p.reset(Grid::new(3, 2).unwrap()).unwrap_err();
        assert_eq!(
            err,
            GridError::DimensionMismatch {
                expected: (2, 2),
                actual: (3, 2),
            }
        );
    }

    #[test]
    fn reset_replaces_current_and_generation() {
        let mut p = PingPongGrid::new(2, 2).unwrap();
        p.commit();
        p.commit();
        let g = Grid::from_vec(2, 2, vec![5.0; 4]).unwrap();
        p.reset(g.clone()).unwrap();
        assert_eq!(p.generation(), 0);
        assert_eq!(p.into_current(), g);
    }
}
