//! Background stepping thread publishing frames into a [`SnapshotRing`].
//!
//! [`RealtimeSimulation`] moves a [`Simulation`] onto a dedicated thread
//! that calls [`Simulation::tick`] at `tick_rate_hz` and publishes each
//! completed step as an `Arc<Frame>`. Readers on any thread call
//! [`latest()`](RealtimeSimulation::latest) and get a whole grid or
//! nothing; they never see a step in progress.
//!
//! Shutdown drops the sender half of a crossbeam channel. The stepping
//! thread waits on that channel between ticks, so it wakes immediately
//! instead of sleeping out the rest of its tick budget.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use eddy_core::TickId;
use log::{debug, error};

use crate::config::{ConfigError, RealtimeConfig};
use crate::ring::{Frame, SnapshotRing};
use crate::simulation::Simulation;

/// A [`Simulation`] stepping itself on a background thread.
///
/// Dropping a running `RealtimeSimulation` shuts it down and discards the
/// simulation; call [`shutdown()`](Self::shutdown) to get it back.
pub struct RealtimeSimulation {
    ring: Arc<SnapshotRing>,
    shutdown_tx: Option<Sender<()>>,
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<Simulation>>,
    config: RealtimeConfig,
}

// Compile-time assertion: RealtimeSimulation can be shared across threads.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<RealtimeSimulation>();
};

impl RealtimeSimulation {
    /// Start stepping `simulation` on a new thread.
    ///
    /// The current grid is published as the first frame before the thread
    /// starts, so [`latest()`](Self::latest) is never `None` on a running
    /// simulation.
    pub fn start(simulation: Simulation, config: RealtimeConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let ring = Arc::new(SnapshotRing::new(config.ring_capacity));
        ring.publish(Frame {
            tick_id: simulation.tick_id(),
            grid: simulation.snapshot().clone(),
        });

        let (shutdown_tx, shutdown_rx) = crossbeam_channel::bounded(1);
        let running = Arc::new(AtomicBool::new(true));
        let budget = config.tick_budget()?;

        let thread_ring = Arc::clone(&ring);
        let thread_running = Arc::clone(&running);
        debug!(
            "starting stepping thread for '{}' at {} Hz",
            simulation.stepper_name(),
            config.tick_rate_hz
        );
        let thread = thread::Builder::new()
            .name("eddy-step".into())
            .spawn(move || {
                let sim = run(simulation, &thread_ring, &shutdown_rx, budget);
                thread_running.store(false, Ordering::Release);
                sim
            })
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: e.to_string(),
            })?;

        Ok(Self {
            ring,
            shutdown_tx: Some(shutdown_tx),
            running,
            thread: Some(thread),
            config,
        })
    }

    /// The most recently published frame.
    ///
    /// `None` only after [`shutdown()`](Self::shutdown) if the ring was
    /// never written, which cannot happen through [`start()`](Self::start).
    pub fn latest(&self) -> Option<Arc<Frame>> {
        self.ring.latest()
    }

    /// Tick id of the most recently published frame.
    pub fn latest_tick(&self) -> TickId {
        self.latest().map(|f| f.tick_id).unwrap_or_default()
    }

    /// The frame ring, for readers that track write positions.
    pub fn ring(&self) -> &SnapshotRing {
        &self.ring
    }

    /// Whether the stepping thread is still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// The pacing configuration.
    pub fn config(&self) -> &RealtimeConfig {
        &self.config
    }

    /// Stop the stepping thread and recover the simulation.
    ///
    /// Returns [`ConfigError::SimulationLost`] if the thread panicked or if
    /// the simulation was already recovered by an earlier call.
    pub fn shutdown(&mut self) -> Result<Simulation, ConfigError> {
        // Dropping the sender disconnects the channel and wakes the thread.
        self.shutdown_tx.take();
        let handle = self.thread.take().ok_or(ConfigError::SimulationLost)?;
        match handle.join() {
            Ok(sim) => {
                debug!("stepping thread stopped at tick {}", sim.tick_id());
                Ok(sim)
            }
            Err(_) => {
                error!("stepping thread panicked; simulation lost");
                Err(ConfigError::SimulationLost)
            }
        }
    }
}

impl Drop for RealtimeSimulation {
    fn drop(&mut self) {
        if self.thread.is_some() {
            let _ = self.shutdown();
        }
    }
}

impl std::fmt::Debug for RealtimeSimulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealtimeSimulation")
            .field("latest_tick", &self.latest_tick())
            .field("running", &self.is_running())
            .field("tick_rate_hz", &self.config.tick_rate_hz)
            .finish()
    }
}

/// Stepping loop. Runs until the shutdown channel disconnects or receives.
fn run(
    mut sim: Simulation,
    ring: &SnapshotRing,
    shutdown_rx: &Receiver<()>,
    budget: Duration,
) -> Simulation {
    loop {
        let start = Instant::now();

        if let Some(result) = sim.tick() {
            ring.publish(Frame {
                tick_id: result.tick_id,
                grid: result.snapshot.clone(),
            });
        }

        let remaining = budget.saturating_sub(start.elapsed());
        match shutdown_rx.recv_timeout(remaining) {
            Err(RecvTimeoutError::Timeout) => continue,
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    sim
}
