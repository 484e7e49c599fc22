//! Scalar grid storage and double buffering for eddy simulations.
//!
//! # Architecture
//!
//! ```text
//! PingPongGrid
//! ├── current: Grid   ←── published, read by renderers and steppers
//! └── scratch: Grid   ←── staging, fully rewritten by one stepper pass
//! ```
//!
//! A step borrows `current` immutably and `scratch` mutably through a
//! [`Staging`] guard, then [`PingPongGrid::commit`] swaps the two. The
//! swap is a pointer exchange, so a reader either sees the grid from
//! before the step or the one after it, never a mix.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod hash;
pub mod pingpong;
pub mod seed;

pub use grid::Grid;
pub use hash::grid_hash;
pub use pingpong::{PingPongGrid, Staging};
pub use seed::{seed_block, SeedBlock};
