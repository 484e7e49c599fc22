//! By-value simulation state and the two core operations on it.
//!
//! [`initialize`] builds a [`SimulationState`] from a [`SimConfig`];
//! [`step`] consumes one and returns the next. Hosts that prefer an
//! object with pacing and metrics use [`Simulation`](crate::Simulation),
//! which wraps the same state.

use std::time::Instant;

use eddy_core::{GridRead, TickId};
use eddy_grid::{Grid, PingPongGrid};
use eddy_stepper::{Coefficients, StepContext, Stepper};

use crate::config::{ConfigError, SimConfig};
use crate::metrics::StepMetrics;

/// A grid pair, the discretization it is stepped with, and a step counter.
#[derive(Clone, Debug)]
pub struct SimulationState {
    grid: PingPongGrid,
    coefficients: Coefficients,
    tick_id: TickId,
}

impl SimulationState {
    /// The current grid.
    pub fn grid(&self) -> &Grid {
        self.grid.current()
    }

    /// Number of steps taken since initialization.
    pub fn tick_id(&self) -> TickId {
        self.tick_id
    }

    /// Discretization used by every step.
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    /// Value of the current grid at `(row, col)`. Panics out of range.
    #[track_caller]
    pub fn get_value(&self, row: usize, col: usize) -> f32 {
        self.grid.current().get(row, col)
    }

    /// Consume the state, returning the current grid.
    pub fn into_grid(self) -> Grid {
        self.grid.into_current()
    }

    /// Run one step in place and return its timing.
    pub(crate) fn advance(&mut self, stepper: &dyn Stepper) -> StepMetrics {
        let start = Instant::now();
        let tick_id = self.tick_id.next();

        {
            let mut ctx = StepContext::from_staging(self.grid.begin(), tick_id, self.coefficients);
            stepper.step(&mut ctx);
        }
        let stencil_us = start.elapsed().as_micros() as u64;

        let commit_start = Instant::now();
        self.grid.commit();
        self.tick_id = tick_id;
        let commit_us = commit_start.elapsed().as_micros() as u64;

        StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            stencil_us,
            commit_us,
        }
    }

    /// Put the initial grid back and zero the step counter.
    pub(crate) fn restart(&mut self, initial: Grid) -> Result<(), ConfigError> {
        self.grid.reset(initial)?;
        self.tick_id = TickId::default();
        Ok(())
    }
}

impl GridRead for SimulationState {
    fn rows(&self) -> usize {
        self.grid.current().rows()
    }

    fn cols(&self) -> usize {
        self.grid.current().cols()
    }

    fn get_value(&self, row: usize, col: usize) -> f32 {
        self.grid.current().get(row, col)
    }

    fn as_slice(&self) -> &[f32] {
        self.grid.current().as_slice()
    }
}

/// Validate `config` and build the seeded initial state at tick 0.
///
/// Deterministic: equal configs produce bit-identical grids.
pub fn initialize(config: &SimConfig) -> Result<SimulationState, ConfigError> {
    let initial = config.initial_grid()?;
    Ok(SimulationState {
        grid: PingPongGrid::from_initial(initial),
        coefficients: config.coefficients,
        tick_id: TickId::default(),
    })
}

/// Advance `state` by one step of `stepper`.
///
/// Never fails: the grid pair always shares a shape, and steppers have no
/// error surface.
pub fn step(mut state: SimulationState, stepper: &dyn Stepper) -> SimulationState {
    state.advance(stepper);
    state
}
