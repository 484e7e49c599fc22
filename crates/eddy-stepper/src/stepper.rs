//! The [`Stepper`] trait.

use crate::coefficients::Coefficients;
use crate::context::StepContext;

/// A stateless explicit finite-difference operator.
///
/// # Contract
///
/// - `step()` MUST be deterministic: same inputs produce bit-identical outputs.
/// - `step()` MUST write every cell of `ctx.next()`, including boundaries.
/// - `&self`: steppers hold only their physical coefficients.
/// - Stability is the caller's responsibility. `stability_number()` reports
///   the dimensionless number for diagnostics; nothing rejects or clamps a
///   step because of it.
///
/// # Examples
///
/// A stepper that copies the current grid unchanged:
///
/// ```
/// use eddy_core::TickId;
/// use eddy_grid::Grid;
/// use eddy_stepper::{Coefficients, StepContext, Stepper};
///
/// struct Hold;
///
/// impl Stepper for Hold {
///     fn name(&self) -> &str { "hold" }
///
///     fn step(&self, ctx: &mut StepContext<'_>) {
///         let (cur, next) = ctx.split();
///         next.as_mut_slice().copy_from_slice(cur.as_slice());
///     }
/// }
///
/// let cur = Grid::from_vec(1, 2, vec![1.0, 2.0]).unwrap();
/// let mut next = Grid::new(1, 2).unwrap();
/// Hold.step(&mut StepContext::new(&cur, &mut next, TickId(1), Coefficients::default()));
/// assert_eq!(next.as_slice(), &[1.0, 2.0]);
/// ```
pub trait Stepper: Send + 'static {
    /// Human-readable name for logging and metrics.
    fn name(&self) -> &str;

    /// Compute `ctx.next()` from `ctx.current()`.
    fn step(&self, ctx: &mut StepContext<'_>);

    /// Dimensionless stability number for these coefficients.
    ///
    /// For advection this is the Courant number `u·dt/dx + v·dt/dy`; for
    /// diffusion it is `D·dt/dx²`. Return `None` if not applicable.
    fn stability_number(&self, coefficients: &Coefficients) -> Option<f64> {
        let _ = coefficients;
        None
    }

    /// Largest stability number at which the scheme is still stable.
    ///
    /// Used only to log a warning at construction time.
    fn stability_limit(&self) -> Option<f64> {
        None
    }

    /// `true` if the stencil assumes `dx == dy` and reads only `dx`.
    ///
    /// Hosts log a warning when such a stepper is given unequal spacing.
    fn square_cells(&self) -> bool {
        false
    }
}

impl<S: Stepper + ?Sized> Stepper for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn step(&self, ctx: &mut StepContext<'_>) {
        (**self).step(ctx)
    }

    fn stability_number(&self, coefficients: &Coefficients) -> Option<f64> {
        (**self).stability_number(coefficients)
    }

    fn stability_limit(&self) -> Option<f64> {
        (**self).stability_limit()
    }

    fn square_cells(&self) -> bool {
        (**self).square_cells()
    }
}
