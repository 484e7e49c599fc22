//! Simulation host driving eddy steppers.
//!
//! The core surface is two operations on a by-value [`SimulationState`]:
//! [`initialize`] and [`step`]. On top of that:
//!
//! - [`Simulation`] is a lockstep host with frame-count pacing
//!   ([`TickGate`]) and per-step [`StepMetrics`].
//! - [`RealtimeSimulation`] runs a `Simulation` on a background thread
//!   and publishes each completed step into a [`SnapshotRing`].
//!
//! Library code logs through the `log` facade; binaries choose the logger.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod gate;
pub mod metrics;
pub mod realtime;
pub mod ring;
pub mod simulation;
pub mod state;

pub use config::{ConfigError, RealtimeConfig, SimConfig};
pub use gate::TickGate;
pub use metrics::StepMetrics;
pub use realtime::RealtimeSimulation;
pub use ring::{Frame, SnapshotRing};
pub use simulation::{Simulation, StepResult};
pub use state::{initialize, step, SimulationState};
