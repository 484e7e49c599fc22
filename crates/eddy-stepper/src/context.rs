//! Execution context passed to steppers.
//!
//! [`StepContext`] splits the double buffer into an immutable view of the
//! current grid and a mutable view of the scratch grid, plus the tick id
//! and discretization coefficients.

use eddy_core::{StepError, TickId};
use eddy_grid::{Grid, Staging};

use crate::coefficients::Coefficients;

/// Execution context passed to each stepper's `step()` method.
///
/// Both grids are guaranteed to share a shape; construction checks it.
///
/// # Split-borrow semantics
///
/// - **`current()`** is the state at the start of the step. Steppers read
///   every neighbour from here, never from `next()`, except where a
///   boundary rule is defined in terms of freshly computed values.
/// - **`next()`** is the scratch grid. Its contents on entry are
///   unspecified (usually the grid from two steps ago); the stepper must
///   write every cell.
pub struct StepContext<'a> {
    current: &'a Grid,
    next: &'a mut Grid,
    tick_id: TickId,
    coefficients: Coefficients,
}

impl<'a> StepContext<'a> {
    /// Construct a new step context.
    ///
    /// # Panics
    ///
    /// Panics if `current` and `next` have different shapes. A mismatch is
    /// a programming error in the host, not a recoverable condition.
    #[track_caller]
    pub fn new(
        current: &'a Grid,
        next: &'a mut Grid,
        tick_id: TickId,
        coefficients: Coefficients,
    ) -> Self {
        match Self::try_new(current, next, tick_id, coefficients) {
            Ok(ctx) => ctx,
            Err(e) => panic!("StepContext: {e}"),
        }
    }

    /// Construct a new step context, returning an error on shape mismatch.
    pub fn try_new(
        current: &'a Grid,
        next: &'a mut Grid,
        tick_id: TickId,
        coefficients: Coefficients,
    ) -> Result<Self, StepError> {
        if current.shape() != next.shape() {
            return Err(StepError::DimensionMismatch {
                current: current.shape(),
                scratch: next.shape(),
            });
        }
        Ok(Self {
            current,
            next,
            tick_id,
            coefficients,
        })
    }

    /// Build a context from a [`PingPongGrid`](eddy_grid::PingPongGrid) staging guard.
    ///
    /// The pair always shares a shape, so this cannot fail.
    pub fn from_staging(
        staging: Staging<'a>,
        tick_id: TickId,
        coefficients: Coefficients,
    ) -> Self {
        Self {
            current: staging.current,
            next: staging.scratch,
            tick_id,
            coefficients,
        }
    }

    /// The grid at the start of this step.
    pub fn current(&self) -> &Grid {
        self.current
    }

    /// The grid being written.
    pub fn next(&mut self) -> &mut Grid {
        &mut *self.next
    }

    /// Both grids at once, for stencils that read one while writing the other.
    pub fn split(&mut self) -> (&Grid, &mut Grid) {
        (self.current, &mut *self.next)
    }

    /// `(rows, cols)` shared by both grids.
    pub fn shape(&self) -> (usize, usize) {
        self.current.shape()
    }

    /// The tick this step produces.
    pub fn tick_id(&self) -> TickId {
        self.tick_id
    }

    /// Discretization parameters.
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eddy_grid::PingPongGrid;

    #[test]
    fn context_provides_split_access() {
        let current = Grid::from_vec(1, 3, vec![1.0, 2.0, 3.0]).unwrap();
        let mut next = Grid::new(1, 3).unwrap();

        let mut ctx = StepContext::new(&current, &mut next, TickId(1), Coefficients::default());
        let (cur, out) = ctx.split();
        for c in 0..3 {
            out.set(0, c, cur.get(0, c) * 10.0);
        }
        assert_eq!(ctx.tick_id(), TickId(1));
        assert_eq!(ctx.shape(), (1, 3));
        assert_eq!(ctx.coefficients().dt, 1.0);
        assert_eq!(next.as_slice(), &[10.0, 20.0, 30.0]);
    }

    #[test]
    fn try_new_rejects_mismatched_shapes() {
        let current = Grid::new(3, 3).unwrap();
        let mut next = Grid::new(3, 4).unwrap();
        let err = StepContext::try_new(&current, &mut next, TickId(0), Coefficients::default())
            .err()
            .unwrap();
        assert_eq!(
            err,
            StepError::DimensionMismatch {
                current: (3, 3),
                scratch: (3, 4),
            }
        );
    }

    #[test]
    #[should_panic(expected = "current grid is 2x2 but scratch grid is 4x4")]
    fn new_panics_on_mismatched_shapes() {
        let current = Grid::new(2, 2).unwrap();
        let mut next = Grid::new(4, 4).unwrap();
        let _ = StepContext::new(&current, &mut next, TickId(0), Coefficients::default());
    }

    #[test]
    fn from_staging_reads_current_writes_scratch() {
        let mut pair = PingPongGrid::from_initial(Grid::from_vec(1, 2, vec![4.0, 5.0]).unwrap());
        {
            let mut ctx =
                StepContext::from_staging(pair.begin(), TickId(1), Coefficients::default());
            let v = ctx.current().get(0, 1);
            ctx.next().fill(v);
        }
        pair.commit();
        assert_eq!(pair.current().as_slice(), &[5.0, 5.0]);
    }
}
