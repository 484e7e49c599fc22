//! Discretization parameters shared by all steppers.

/// Time step and cell spacing.
///
/// Defaults to `dt = dx = dy = 1.0`, the unit discretization used by both
/// reference setups.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coefficients {
    /// Time step.
    pub dt: f64,
    /// Spacing between rows, paired with the row-index velocity.
    pub dx: f64,
    /// Spacing between columns, paired with the column-index velocity.
    pub dy: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            dt: 1.0,
            dx: 1.0,
            dy: 1.0,
        }
    }
}

impl Coefficients {
    /// Coefficients with the given time step and uniform spacing `h`.
    pub fn uniform(dt: f64, h: f64) -> Self {
        Self { dt, dx: h, dy: h }
    }

    /// The first of `dt`, `dx`, `dy` that is not finite and strictly
    /// positive, as `(name, value)`.
    pub fn first_invalid(&self) -> Option<(&'static str, f64)> {
        [("dt", self.dt), ("dx", self.dx), ("dy", self.dy)]
            .into_iter()
            .find(|&(_, v)| !(v.is_finite() && v > 0.0))
    }

    /// `true` if `dt`, `dx` and `dy` are all finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.first_invalid().is_none()
    }
}
