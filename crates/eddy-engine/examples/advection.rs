//! Upwind advection of a square block, rendered as ASCII.
//!
//! Runs the reference setup (100×100 grid, 14×14 block of 1.0,
//! `u = v = 0.1`) and prints a downsampled frame every 50 steps. The
//! block drifts toward the bottom-right and smears as it goes.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example advection

use eddy_core::GridRead;
use eddy_engine::{SimConfig, Simulation};
use eddy_steppers::Advection;

const FRAMES: usize = 6;
const STEPS_PER_FRAME: usize = 50;
const DOWNSAMPLE: usize = 4;

/// Display intensity of one cell: `255 * v`, clamped to `[0, 255]`.
fn intensity(v: f32) -> u8 {
    (255.0 * v).clamp(0.0, 255.0) as u8
}

fn render(grid: &dyn GridRead) -> String {
    const SHADES: &[u8] = b" .:-=+*#%@";
    let (rows, cols) = grid.shape();
    let mut out = String::new();
    for i in (0..rows).step_by(DOWNSAMPLE) {
        for j in (0..cols).step_by(DOWNSAMPLE) {
            let level = intensity(grid.get_value(i, j)) as usize * (SHADES.len() - 1) / 255;
            out.push(SHADES[level] as char);
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let advection = Advection::builder().velocity(0.1, 0.1).build()?;
    let mut sim = Simulation::new(SimConfig::advection_reference(), Box::new(advection))?;

    println!("tick 0\n{}", render(sim.snapshot()));
    for _ in 0..FRAMES {
        for _ in 0..STEPS_PER_FRAME {
            sim.tick();
        }
        let grid = sim.snapshot();
        println!(
            "tick {}  (sum {:.3}, max {:.3}, last step {}us)\n{}",
            sim.tick_id(),
            grid.sum(),
            grid.max_value(),
            sim.last_metrics().total_us,
            render(grid)
        );
    }
    Ok(())
}
