//! Reusable stepper fixtures.
//!
//! - [`HoldStepper`]: copies the current grid unchanged.
//! - [`ConstStepper`]: writes a constant everywhere, ignoring input.
//! - [`CountingStepper`]: adds 1.0 to every cell and counts its calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use eddy_stepper::{StepContext, Stepper};

/// Copies `current` into `next`.
pub struct HoldStepper;

impl Stepper for HoldStepper {
    fn name(&self) -> &str {
        "hold"
    }

    fn step(&self, ctx: &mut StepContext<'_>) {
        let (cur, next) = ctx.split();
        next.as_mut_slice().copy_from_slice(cur.as_slice());
    }
}

/// Writes `value` to every cell.
pub struct ConstStepper {
    pub value: f32,
}

impl ConstStepper {
    pub fn new(value: f32) -> Self {
        Self { value }
    }
}

impl Stepper for ConstStepper {
    fn name(&self) -> &str {
        "const"
    }

    fn step(&self, ctx: &mut StepContext<'_>) {
        ctx.next().fill(self.value);
    }
}

/// Adds 1.0 to every cell and counts invocations.
///
/// The counter is shared, so a test can keep a handle after moving the
/// stepper into a simulation.
pub struct CountingStepper {
    calls: Arc<AtomicUsize>,
}

impl CountingStepper {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle to the shared call counter.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Default for CountingStepper {
    fn default() -> Self {
        Self::new()
    }
}

impl Stepper for CountingStepper {
    fn name(&self) -> &str {
        "counting"
    }

    fn step(&self, ctx: &mut StepContext<'_>) {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let (cur, next) = ctx.split();
        for (out, &v) in next.as_mut_slice().iter_mut().zip(cur.as_slice()) {
            *out = v + 1.0;
        }
    }
}
