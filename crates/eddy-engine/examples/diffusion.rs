//! Diffusion of a square block on a background thread.
//!
//! Starts the reference setup (100×100 grid, 10×10 block of 1.0,
//! `D = 0.25`) on a [`RealtimeSimulation`] and samples the latest frame
//! from the main thread a few times a second, printing the temperature
//! profile across the centre row.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example diffusion

use std::thread;
use std::time::Duration;

use eddy_core::GridRead;
use eddy_engine::{RealtimeConfig, RealtimeSimulation, SimConfig, Simulation};
use eddy_steppers::Diffusion;

const SAMPLES: usize = 5;
const CENTRE: usize = SimConfig::REFERENCE_SIZE / 2;

/// Values along the centre row, every fifth column from 30 to 70.
fn profile(grid: &dyn GridRead) -> String {
    (30..=70)
        .step_by(5)
        .map(|j| format!("{:.3}", grid.get_value(CENTRE, j)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let diffusion = Diffusion::builder().coefficient(0.25).build()?;
    let sim = Simulation::new(SimConfig::diffusion_reference(), Box::new(diffusion))?;
    let mut rt = RealtimeSimulation::start(
        sim,
        RealtimeConfig {
            tick_rate_hz: 120.0,
            ..RealtimeConfig::default()
        },
    )?;

    for _ in 0..SAMPLES {
        if let Some(frame) = rt.latest() {
            println!(
                "tick {:>4}  max {:.3}  row {CENTRE}: {}",
                frame.tick_id.0,
                frame.grid.max_value(),
                profile(&*frame)
            );
        }
        thread::sleep(Duration::from_millis(250));
    }

    let sim = rt.shutdown()?;
    log::info!("stopped after {} steps", sim.tick_id());
    Ok(())
}
