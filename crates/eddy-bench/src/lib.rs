//! Benchmark profiles for the eddy steppers.
//!
//! Pre-built [`Simulation`]s for benchmarks and examples:
//!
//! - [`advection_profile`] / [`diffusion_profile`]: the 100x100 reference setups
//! - [`stress_profile`]: a 1000x1000 diffusion grid (1M cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use eddy_engine::{SimConfig, Simulation};
use eddy_stepper::Stepper;
use eddy_steppers::{Advection, Diffusion};

/// Side length of [`stress_profile`].
pub const STRESS_SIZE: usize = 1000;

/// Reference advection: 100x100, 14x14 block, `u = v = 0.1`.
pub fn advection_profile() -> Simulation {
    build(SimConfig::advection_reference(), Box::new(Advection::default()))
}

/// Reference diffusion: 100x100, 10x10 block, `D = 0.25`.
pub fn diffusion_profile() -> Simulation {
    build(SimConfig::diffusion_reference(), Box::new(Diffusion::default()))
}

/// 1000x1000 diffusion with a 100x100 block.
pub fn stress_profile() -> Simulation {
    let mut config = SimConfig::diffusion_reference();
    config.rows = STRESS_SIZE;
    config.cols = STRESS_SIZE;
    config.seed.half_width = 50;
    build(config, Box::new(Diffusion::default()))
}

fn build(config: SimConfig, stepper: Box<dyn Stepper>) -> Simulation {
    Simulation::new(config, stepper).expect("benchmark profiles are valid")
}
