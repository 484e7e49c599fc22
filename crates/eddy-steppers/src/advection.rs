//! First-order upwind advection with fixed-zero edges.
//!
//! Constructed directly with [`Advection::new`] or through
//! [`Advection::builder`].

use eddy_stepper::{Coefficients, StepContext, Stepper};

use crate::boundary::Boundary;

/// Upwind advection by a constant velocity `(u, v)`.
///
/// Each step computes, for `i ∈ [1, rows)` and `j ∈ [1, cols)`:
/// ```text
/// next[i][j] = cur[i][j]
///              - (u*dt/dx) * (cur[i][j] - cur[i-1][j])
///              - (v*dt/dy) * (cur[i][j] - cur[i][j-1])
/// ```
/// then forces row 0, row `rows-1`, column 0 and column `cols-1` to zero.
/// Mass carried onto an edge is destroyed.
///
/// `u` is the velocity along the row index and `v` along the column index.
/// The backward difference is only upwind for non-negative velocities; with
/// negative velocities the scheme is unstable. The scheme is stable when
/// `u*dt/dx + v*dt/dy <= 1`. Nothing checks this while stepping.
///
/// ```
/// use eddy_steppers::Advection;
///
/// let adv = Advection::builder().velocity(0.2, 0.1).build().unwrap();
/// assert_eq!(adv.u(), 0.2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Advection {
    u: f64,
    v: f64,
}

/// Builder for [`Advection`].
///
/// Defaults to `u = v = 0.1`.
#[derive(Clone, Debug)]
pub struct AdvectionBuilder {
    u: f64,
    v: f64,
}

impl Advection {
    /// Velocity used when none is given.
    pub const DEFAULT_VELOCITY: f64 = 0.1;

    /// Stability limit on the Courant number `u*dt/dx + v*dt/dy`.
    pub const COURANT_LIMIT: f64 = 1.0;

    /// Create an advection stepper with velocity `(u, v)`.
    ///
    /// Use [`builder`](Self::builder) to have the velocity validated.
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    /// Create a new builder.
    pub fn builder() -> AdvectionBuilder {
        AdvectionBuilder {
            u: Self::DEFAULT_VELOCITY,
            v: Self::DEFAULT_VELOCITY,
        }
    }

    /// Velocity along the row index.
    pub fn u(&self) -> f64 {
        self.u
    }

    /// Velocity along the column index.
    pub fn v(&self) -> f64 {
        self.v
    }

    /// Courant factors `(u*dt/dx, v*dt/dy)` rounded to `f32`.
    pub fn courant_factors(&self, coefficients: &Coefficients) -> (f32, f32) {
        let c = coefficients;
        ((self.u * c.dt / c.dx) as f32, (self.v * c.dt / c.dy) as f32)
    }
}

impl Default for Advection {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VELOCITY, Self::DEFAULT_VELOCITY)
    }
}

impl AdvectionBuilder {
    /// Set both velocity components.
    pub fn velocity(mut self, u: f64, v: f64) -> Self {
        self.u = u;
        self.v = v;
        self
    }

    /// Set the velocity along the row index (default 0.1).
    pub fn u(mut self, u: f64) -> Self {
        self.u = u;
        self
    }

    /// Set the velocity along the column index (default 0.1).
    pub fn v(mut self, v: f64) -> Self {
        self.v = v;
        self
    }

    /// Build the stepper.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either velocity component is negative or not finite.
    pub fn build(self) -> Result<Advection, String> {
        for (name, value) in [("u", self.u), ("v", self.v)] {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(format!("{name} must be finite and >= 0, got {value}"));
            }
        }
        Ok(Advection::new(self.u, self.v))
    }
}

impl Stepper for Advection {
    fn name(&self) -> &str {
        "advection"
    }

    fn step(&self, ctx: &mut StepContext<'_>) {
        let (du, dv) = self.courant_factors(&ctx.coefficients());
        let (rows, cols) = ctx.shape();
        let (cur, next) = ctx.split();
        let src = cur.as_slice();
        let out = next.as_mut_slice();

        for i in 1..rows {
            for j in 1..cols {
                let idx = i * cols + j;
                let here = src[idx];
                out[idx] = here - du * (here - src[idx - cols]) - dv * (here - src[idx - 1]);
            }
        }

        Boundary::Dirichlet(0.0).apply(next);
    }

    fn stability_number(&self, c: &Coefficients) -> Option<f64> {
        Some(self.u.abs() * c.dt / c.dx + self.v.abs() * c.dt / c.dy)
    }

    fn stability_limit(&self) -> Option<f64> {
        Some(Self::COURANT_LIMIT)
    }
}
