//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] replaces the fixed constants of a single hard-wired
//! simulation: grid shape, initial block, discretization, and pacing.
//! [`validate()`](SimConfig::validate) checks it at startup, before any
//! grid is allocated.

use std::error::Error;
use std::fmt;
use std::num::NonZeroU64;
use std::time::Duration;

use eddy_core::GridError;
use eddy_grid::{Grid, SeedBlock};
use eddy_stepper::Coefficients;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a configuration or starting a host.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Grid shape is invalid.
    Grid(GridError),
    /// `dt`, `dx` or `dy` is NaN, infinite, zero, or negative.
    InvalidCoefficient {
        /// Which coefficient.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// `steps_per_tick` is zero.
    ZeroStepsPerTick,
    /// The initial block value is NaN or infinite.
    InvalidSeedValue {
        /// The invalid value.
        value: f32,
    },
    /// `tick_rate_hz` is NaN, infinite, zero, or negative.
    InvalidTickRate {
        /// The invalid value.
        value: f64,
    },
    /// Snapshot ring capacity is below the minimum of 2.
    RingTooSmall {
        /// The configured capacity.
        configured: usize,
    },
    /// The background stepping thread could not be spawned.
    ThreadSpawnFailed {
        /// The OS error message.
        reason: String,
    },
    /// The simulation could not be recovered from the stepping thread,
    /// either because it panicked or because it was already recovered.
    SimulationLost,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidCoefficient { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::ZeroStepsPerTick => write!(f, "steps_per_tick must be at least 1"),
            Self::InvalidSeedValue { value } => {
                write!(f, "seed value must be finite, got {value}")
            }
            Self::InvalidTickRate { value } => {
                write!(f, "tick_rate_hz must be finite and positive, got {value}")
            }
            Self::RingTooSmall { configured } => {
                write!(f, "ring capacity {configured} is below minimum of 2")
            }
            Self::ThreadSpawnFailed { reason } => write!(f, "thread spawn failed: {reason}"),
            Self::SimulationLost => {
                write!(f, "simulation could not be recovered from stepping thread")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Everything needed to build a simulation except the stepper itself.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Number of grid rows. Default: 100.
    pub rows: usize,
    /// Number of grid columns. Default: 100.
    pub cols: usize,
    /// Initial condition: a centered block on a zero background.
    pub seed: SeedBlock,
    /// Time step and cell spacing. Default: all 1.0.
    ///
    /// Diffusion assumes square cells and reads only `dx`; a `dy` that
    /// differs is accepted here and reported as a warning by
    /// [`Simulation::new`](crate::Simulation::new).
    pub coefficients: Coefficients,
    /// Step once every this many [`tick()`](crate::Simulation::tick) calls.
    /// Default: 1. Must be at least 1.
    pub steps_per_tick: u64,
}

impl SimConfig {
    /// Side length of the reference grids.
    pub const REFERENCE_SIZE: usize = 100;

    /// 100×100 grid, 14×14 block of 1.0, unit discretization, step every tick.
    pub fn advection_reference() -> Self {
        Self {
            rows: Self::REFERENCE_SIZE,
            cols: Self::REFERENCE_SIZE,
            seed: SeedBlock::ADVECTION,
            coefficients: Coefficients::default(),
            steps_per_tick: 1,
        }
    }

    /// 100×100 grid, 10×10 block of 1.0, unit discretization, step every tick.
    pub fn diffusion_reference() -> Self {
        Self {
            seed: SeedBlock::DIFFUSION,
            ..Self::advection_reference()
        }
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Shape must be constructible.
        Grid::check_shape(self.rows, self.cols)?;
        // 2. Discretization must be finite and positive.
        if let Some((name, value)) = self.coefficients.first_invalid() {
            return Err(ConfigError::InvalidCoefficient { name, value });
        }
        // 3. The gate must fire eventually.
        if self.steps_per_tick == 0 {
            return Err(ConfigError::ZeroStepsPerTick);
        }
        // 4. Seeded cells must be finite.
        if !self.seed.value.is_finite() {
            return Err(ConfigError::InvalidSeedValue {
                value: self.seed.value,
            });
        }
        Ok(())
    }

    /// `steps_per_tick` as a non-zero count.
    pub(crate) fn gate_period(&self) -> Result<NonZeroU64, ConfigError> {
        NonZeroU64::new(self.steps_per_tick).ok_or(ConfigError::ZeroStepsPerTick)
    }

    /// Validate, then build the seeded initial grid.
    pub fn initial_grid(&self) -> Result<Grid, ConfigError> {
        self.validate()?;
        let mut grid = Grid::new(self.rows, self.cols)?;
        self.seed.apply(&mut grid);
        Ok(grid)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::advection_reference()
    }
}

// ── RealtimeConfig ─────────────────────────────────────────────────

/// Pacing and buffering for [`RealtimeSimulation`](crate::RealtimeSimulation).
#[derive(Clone, Debug, PartialEq)]
pub struct RealtimeConfig {
    /// Target rate of `tick()` calls on the stepping thread. Default: 60.
    pub tick_rate_hz: f64,
    /// Number of published frames retained. Default: 8. Minimum: 2.
    pub ring_capacity: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 60.0,
            ring_capacity: 8,
        }
    }
}

impl RealtimeConfig {
    /// Wall-clock time between ticks, `1 / tick_rate_hz`.
    ///
    /// Fails for rates that are not finite and positive, and for rates so
    /// small that the period does not fit in a [`Duration`].
    pub fn tick_budget(&self) -> Result<Duration, ConfigError> {
        let hz = self.tick_rate_hz;
        if !hz.is_finite() || hz <= 0.0 {
            return Err(ConfigError::InvalidTickRate { value: hz });
        }
        Duration::try_from_secs_f64(1.0 / hz)
            .map_err(|_| ConfigError::InvalidTickRate { value: hz })
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tick_budget()?;
        if self.ring_capacity < 2 {
            return Err(ConfigError::RingTooSmall {
                configured: self.ring_capacity,
            });
        }
        Ok(())
    }
}
