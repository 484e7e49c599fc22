//! Five-point Laplacian diffusion with zero-gradient edges.

use eddy_stepper::{Coefficients, StepContext, Stepper};

use crate::boundary::Boundary;

/// Explicit diffusion with a constant coefficient `D`.
///
/// Each step computes, for strictly interior cells:
/// ```text
/// next[i][j] = cur[i][j] + (D*dt/dx²) *
///              (cur[i+1][j] + cur[i-1][j] + cur[i][j+1] + cur[i][j-1] - 4*cur[i][j])
/// ```
/// then copies each edge cell from its nearest interior neighbour
/// (see [`apply_neumann`](crate::boundary::apply_neumann)). Cell spacing is
/// assumed square and only `dx` is read.
///
/// Stable for `D*dt/dx² <= 0.25`. At exactly 0.25 the update is a pure
/// neighbour average and never creates a new maximum.
#[derive(Clone, Debug, PartialEq)]
pub struct Diffusion {
    coefficient: f64,
}

/// Builder for [`Diffusion`].
///
/// Defaults to `D = 0.25`.
#[derive(Clone, Debug)]
pub struct DiffusionBuilder {
    coefficient: f64,
}

impl Diffusion {
    /// Coefficient used when none is given.
    pub const DEFAULT_COEFFICIENT: f64 = 0.25;

    /// Stability limit on `D*dt/dx²` for the 2D five-point stencil.
    pub const STABILITY_LIMIT: f64 = 0.25;

    /// Create a diffusion stepper with coefficient `d`.
    pub fn new(d: f64) -> Self {
        Self { coefficient: d }
    }

    /// Create a new builder.
    pub fn builder() -> DiffusionBuilder {
        DiffusionBuilder {
            coefficient: Self::DEFAULT_COEFFICIENT,
        }
    }

    /// The diffusion coefficient `D`.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// `D*dt/dx²` rounded to `f32`.
    pub fn alpha(&self, coefficients: &Coefficients) -> f32 {
        let c = coefficients;
        (self.coefficient * c.dt / (c.dx * c.dx)) as f32
    }
}

impl Default for Diffusion {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COEFFICIENT)
    }
}

impl DiffusionBuilder {
    /// Set the diffusion coefficient (default 0.25). Must be >= 0.
    pub fn coefficient(mut self, d: f64) -> Self {
        self.coefficient = d;
        self
    }

    /// Build the stepper.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the coefficient is negative or not finite.
    pub fn build(self) -> Result<Diffusion, String> {
        if !(self.coefficient >= 0.0) || !self.coefficient.is_finite() {
            return Err(format!(
                "coefficient must be finite and >= 0, got {}",
                self.coefficient
            ));
        }
        Ok(Diffusion::new(self.coefficient))
    }
}

impl Stepper for Diffusion {
    fn name(&self) -> &str {
        "diffusion"
    }

    fn step(&self, ctx: &mut StepContext<'_>) {
        let alpha = self.alpha(&ctx.coefficients());
        let (rows, cols) = ctx.shape();
        let (cur, next) = ctx.split();
        let src = cur.as_slice();
        let out = next.as_mut_slice();

        // With no interior the edge copy would read whatever scratch held.
        if rows < 3 || cols < 3 {
            out.fill(0.0);
        }

        for i in 1..rows.saturating_sub(1) {
            for j in 1..cols - 1 {
                let idx = i * cols + j;
                let here = src[idx];
                out[idx] = here
                    + alpha
                        * (src[idx + cols] + src[idx - cols] + src[idx + 1] + src[idx - 1]
                            - 4.0 * here);
            }
        }

        Boundary::Neumann.apply(next);
    }

    fn stability_number(&self, c: &Coefficients) -> Option<f64> {
        Some(self.coefficient * c.dt / (c.dx * c.dx))
    }

    fn stability_limit(&self) -> Option<f64> {
        Some(Self::STABILITY_LIMIT)
    }

    fn square_cells(&self) -> bool {
        true
    }
}
