//! Core types and traits for the eddy finite-difference steppers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the step counter, the error enums shared by the grid, stepper and
//! engine crates, and the pull-based [`GridRead`] trait that renderers
//! and tests use to sample a grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;

pub use error::{GridError, StepError};
pub use id::TickId;
pub use traits::GridRead;
