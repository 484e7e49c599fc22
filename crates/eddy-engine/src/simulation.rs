//! Lockstep (synchronous) simulation host.
//!
//! [`Simulation`] owns a [`SimulationState`], a boxed [`Stepper`] and a
//! [`TickGate`]. [`step()`](Simulation::step) always advances;
//! [`tick()`](Simulation::tick) is the frame-driven entry that advances
//! only when the gate fires.
//!
//! # Ownership model
//!
//! `Simulation` is [`Send`] but not [`Sync`]. Every mutating method takes
//! `&mut self` and [`StepResult`] borrows from `self`, so a renderer
//! holding a snapshot cannot overlap with the next step: render-between-
//! steps is enforced by the borrow checker.

use eddy_core::TickId;
use eddy_grid::Grid;
use eddy_stepper::Stepper;
use log::{debug, trace, warn};

use crate::config::{ConfigError, SimConfig};
use crate::gate::TickGate;
use crate::metrics::StepMetrics;
use crate::state::{initialize, SimulationState};

// Compile-time assertion: Simulation is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

// ── StepResult ──────────────────────────────────────────────────

/// Result of one [`Simulation::step()`] call.
#[derive(Debug)]
pub struct StepResult<'s> {
    /// The grid after this step.
    pub snapshot: &'s Grid,
    /// The tick this step produced.
    pub tick_id: TickId,
    /// Timing for this step.
    pub metrics: StepMetrics,
}

// ── Simulation ──────────────────────────────────────────────────

/// Single-threaded simulation driven by explicit calls.
///
/// # Example
///
/// ```ignore
/// let mut sim = Simulation::new(SimConfig::diffusion_reference(), Box::new(stepper))?;
/// for _ in 0..100 {
///     if let Some(result) = sim.tick() {
///         render(result.snapshot);
///     }
/// }
/// ```
pub struct Simulation {
    config: SimConfig,
    state: SimulationState,
    stepper: Box<dyn Stepper>,
    gate: TickGate,
    last_metrics: StepMetrics,
}

impl Simulation {
    /// Validate `config`, seed the initial grid, and take ownership of
    /// `stepper`.
    ///
    /// Logs a warning if the stepper reports a stability number above its
    /// limit for these coefficients. The simulation is still built.
    pub fn new(config: SimConfig, stepper: Box<dyn Stepper>) -> Result<Self, ConfigError> {
        let state = initialize(&config)?;
        let gate = TickGate::new(config.gate_period()?);

        debug!(
            "simulation created: {}x{} grid, stepper '{}', block half width {}, step every {} tick(s)",
            config.rows,
            config.cols,
            stepper.name(),
            config.seed.half_width,
            config.steps_per_tick,
        );
        check_stability(stepper.as_ref(), &config);
        if ignores_dy(stepper.as_ref(), &config) {
            warn!(
                "stepper '{}' assumes square cells and ignores dy = {} (dx = {})",
                stepper.name(),
                config.coefficients.dy,
                config.coefficients.dx,
            );
        }

        Ok(Self {
            config,
            state,
            stepper,
            gate,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Run exactly one step, regardless of the gate.
    ///
    /// The returned snapshot borrows `self`, so `step()` cannot be called
    /// again until it is dropped.
    pub fn step(&mut self) -> StepResult<'_> {
        let metrics = self.state.advance(self.stepper.as_ref());
        let tick_id = self.state.tick_id();
        trace!(
            "{} step {tick_id}: stencil {}us, commit {}us, total {}us",
            self.stepper.name(),
            metrics.stencil_us,
            metrics.commit_us,
            metrics.total_us,
        );
        self.last_metrics = metrics.clone();
        StepResult {
            snapshot: self.state.grid(),
            tick_id,
            metrics,
        }
    }

    /// Count one frame; step only if this is a gated frame.
    ///
    /// With `steps_per_tick = K`, calls `K, 2K, 3K, ...` step and every
    /// other call returns `None` without touching the grid.
    pub fn tick(&mut self) -> Option<StepResult<'_>> {
        if self.gate.tick() {
            Some(self.step())
        } else {
            None
        }
    }

    /// Re-seed the grid from the config and zero all counters.
    pub fn reset(&mut self) -> Result<&Grid, ConfigError> {
        let initial = self.config.initial_grid()?;
        self.state.restart(initial)?;
        self.gate.reset();
        self.last_metrics = StepMetrics::default();
        debug!("simulation reset: stepper '{}'", self.stepper.name());
        Ok(self.state.grid())
    }

    /// The current grid.
    pub fn snapshot(&self) -> &Grid {
        self.state.grid()
    }

    /// Value of the current grid at `(row, col)`. Panics out of range.
    #[track_caller]
    pub fn get_value(&self, row: usize, col: usize) -> f32 {
        self.state.get_value(row, col)
    }

    /// Steps taken since construction or the last reset.
    pub fn tick_id(&self) -> TickId {
        self.state.tick_id()
    }

    /// Calls to [`tick()`](Self::tick) since construction or the last reset.
    pub fn frame_count(&self) -> u64 {
        self.gate.calls()
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The configuration this simulation was built from.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The stepper's name.
    pub fn stepper_name(&self) -> &str {
        self.stepper.name()
    }

    /// Borrow the underlying by-value state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Consume the simulation, returning its state.
    pub fn into_state(self) -> SimulationState {
        self.state
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("stepper", &self.stepper.name())
            .field("shape", &self.state.grid().shape())
            .field("tick_id", &self.state.tick_id())
            .field("frame_count", &self.gate.calls())
            .finish()
    }
}

fn ignores_dy(stepper: &dyn Stepper, config: &SimConfig) -> bool {
    let c = &config.coefficients;
    stepper.square_cells() && c.dx != c.dy
}

fn check_stability(stepper: &dyn Stepper, config: &SimConfig) {
    let number = stepper.stability_number(&config.coefficients);
    let limit = stepper.stability_limit();
    if let (Some(number), Some(limit)) = (number, limit) {
        if number > limit {
            warn!(
                "stepper '{}' has stability number {number} above its limit {limit}; \
                 the explicit scheme will diverge",
                stepper.name(),
            );
        } else {
            debug!(
                "stepper '{}' stability number {number} (limit {limit})",
                stepper.name()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eddy_test_utils::fixtures::{ConstStepper, CountingStepper, HoldStepper};
    use std::sync::atomic::Ordering;

    fn small_config(steps_per_tick: u64) -> SimConfig {
        SimConfig {
            rows: 6,
            cols: 6,
            steps_per_tick,
            ..SimConfig::default()
        }
    }

    #[test]
    fn step_always_advances() {
        let mut sim = Simulation::new(small_config(5), Box::new(ConstStepper::new(2.0))).unwrap();
        let result = sim.step();
        assert_eq!(result.tick_id, TickId(1));
        assert!(result.snapshot.as_slice().iter().all(|&v| v == 2.0));
        assert_eq!(sim.tick_id(), TickId(1));
        assert_eq!(sim.frame_count(), 0);
    }

    #[test]
    fn tick_respects_gate() {
        let stepper = CountingStepper::new();
        let calls = stepper.counter();
        let mut sim = Simulation::new(small_config(3), Box::new(stepper)).unwrap();

        let fired: Vec<bool> = (0..9).map(|_| sim.tick().is_some()).collect();
        assert_eq!(
            fired,
            [false, false, true, false, false, true, false, false, true]
        );
        assert_eq!(calls.load(Ordering::Relaxed), 3);
        assert_eq!(sim.tick_id(), TickId(3));
        assert_eq!(sim.frame_count(), 9);
    }

    #[test]
    fn reset_restores_seed_and_counters() {
        let mut sim = Simulation::new(small_config(1), Box::new(ConstStepper::new(9.0))).unwrap();
        let initial = sim.snapshot().clone();
        sim.tick();
        sim.tick();
        assert_ne!(sim.snapshot(), &initial);

        let after = sim.reset().unwrap().clone();
        assert_eq!(after, initial);
        assert_eq!(sim.tick_id(), TickId(0));
        assert_eq!(sim.frame_count(), 0);
        assert_eq!(sim.last_metrics(), &StepMetrics::default());
    }

    #[test]
    fn invalid_config_rejected() {
        let err = Simulation::new(small_config(0), Box::new(HoldStepper)).unwrap_err();
        assert_eq!(err, ConfigError::ZeroStepsPerTick);
    }

    #[test]
    fn get_value_reads_current_grid() {
        let sim = Simulation::new(
            SimConfig::advection_reference(),
            Box::new(HoldStepper),
        )
        .unwrap();
        assert_eq!(sim.get_value(43, 43), 1.0);
        assert_eq!(sim.get_value(42, 43), 0.0);
        assert_eq!(sim.stepper_name(), "hold");
    }

    #[test]
    fn unequal_spacing_flagged_only_for_square_cell_steppers() {
        struct Square;
        impl Stepper for Square {
            fn name(&self) -> &str {
                "square"
            }
            fn step(&self, _ctx: &mut eddy_stepper::StepContext<'_>) {}
            fn square_cells(&self) -> bool {
                true
            }
        }

        let mut cfg = small_config(1);
        assert!(!ignores_dy(&Square, &cfg));
        cfg.coefficients.dy = 0.5;
        assert!(ignores_dy(&Square, &cfg));
        assert!(!ignores_dy(&HoldStepper, &cfg));
        // Still builds; the mismatch is only reported.
        assert!(Simulation::new(cfg, Box::new(Square)).is_ok());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_value_panics_out_of_range() {
        let sim = Simulation::new(small_config(1), Box::new(HoldStepper)).unwrap();
        sim.get_value(6, 0);
    }
}
