//! Eddy: explicit finite-difference steppers for 2D scalar fields.
//!
//! This is the facade crate that re-exports the public API of the eddy
//! sub-crates. Depending on `eddy` alone is enough for most users.
//!
//! # Quick start
//!
//! ```rust
//! use eddy::prelude::*;
//!
//! // 100×100 grid, 10×10 block of 1.0 in the middle, D = 0.25.
//! let diffusion = Diffusion::builder().coefficient(0.25).build().unwrap();
//! let mut sim = Simulation::new(SimConfig::diffusion_reference(), Box::new(diffusion)).unwrap();
//!
//! let result = sim.step();
//! assert_eq!(result.tick_id, TickId(1));
//!
//! // One cell outside the block picks up a quarter of its neighbour.
//! assert_eq!(sim.get_value(44, 50), 0.25);
//! assert_eq!(sim.get_value(45, 50), 0.75);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `eddy-core` | `TickId`, error enums, the `GridRead` trait |
//! | [`grid`] | `eddy-grid` | `Grid`, `PingPongGrid`, block seeding, hashing |
//! | [`stepper`] | `eddy-stepper` | `Stepper` trait, `StepContext`, `Coefficients` |
//! | [`steppers`] | `eddy-steppers` | Advection, diffusion and boundary policies |
//! | [`engine`] | `eddy-engine` | Lockstep and background-thread hosts |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Step counter, error types and the [`types::GridRead`] trait (`eddy-core`).
pub use eddy_core as types;

/// Grid storage (`eddy-grid`).
///
/// [`grid::Grid`] is a row-major `f32` field; [`grid::PingPongGrid`]
/// pairs it with a scratch buffer for out-of-place stepping.
pub use eddy_grid as grid;

/// The [`stepper::Stepper`] extension point (`eddy-stepper`).
pub use eddy_stepper as stepper;

/// Reference steppers (`eddy-steppers`).
///
/// [`steppers::Advection`] and [`steppers::Diffusion`], plus the
/// [`steppers::Boundary`] policies they apply.
pub use eddy_steppers as steppers;

/// Simulation hosts (`eddy-engine`).
///
/// [`engine::Simulation`] for synchronous stepping,
/// [`engine::RealtimeSimulation`] for stepping on a background thread.
/// The free functions [`engine::initialize`] and [`engine::step`] work on
/// a by-value [`engine::SimulationState`].
pub use eddy_engine as engine;

/// Common imports for typical eddy usage.
///
/// ```rust
/// use eddy::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use eddy_core::{GridError, GridRead, StepError, TickId};

    // Grid
    pub use eddy_grid::{Grid, PingPongGrid, SeedBlock};

    // Stepper
    pub use eddy_stepper::{Coefficients, StepContext, Stepper};

    // Steppers
    pub use eddy_steppers::{Advection, Boundary, Diffusion};

    // Engine
    pub use eddy_engine::{
        ConfigError, Frame, RealtimeConfig, RealtimeSimulation, SimConfig, Simulation,
        SimulationState, StepMetrics, StepResult,
    };
}
