//! Stepper trait and step context for eddy simulations.
//!
//! A [`Stepper`] is a stateless explicit finite-difference operator: it
//! reads the current grid through a [`StepContext`] and rewrites every
//! cell of the scratch grid, including the boundary cells its boundary
//! policy owns. The engine commits the scratch grid afterwards.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coefficients;
pub mod context;
pub mod stepper;

pub use coefficients::Coefficients;
pub use context::StepContext;
pub use stepper::Stepper;
