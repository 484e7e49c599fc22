//! Explicit advection and diffusion steppers for eddy simulations.
//!
//! - [`Advection`]: first-order upwind transport by a constant velocity,
//!   with fixed-zero (Dirichlet) edges.
//! - [`Diffusion`]: 5-point Laplacian with zero-gradient (Neumann) edges.
//!
//! Both are conditionally stable explicit schemes and neither checks its
//! stability limit while stepping.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod advection;
pub mod boundary;
pub mod diffusion;

pub use advection::{Advection, AdvectionBuilder};
pub use boundary::Boundary;
pub use diffusion::{Diffusion, DiffusionBuilder};
