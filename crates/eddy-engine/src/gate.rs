//! Frame-count pacing.

use std::num::NonZeroU64;

/// Fires on every `every`-th call to [`tick()`](TickGate::tick).
///
/// The counter is incremented before the check, so with `every = 3` the
/// third, sixth, ninth... calls fire and the first call never does unless
/// `every = 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickGate {
    every: NonZeroU64,
    calls: u64,
}

impl TickGate {
    /// A gate firing once per `every` calls.
    pub fn new(every: NonZeroU64) -> Self {
        Self { every, calls: 0 }
    }

    /// Count one call and report whether it should step.
    pub fn tick(&mut self) -> bool {
        self.calls = self.calls.wrapping_add(1);
        self.calls % self.every.get() == 0
    }

    /// Calls counted since construction or the last reset.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// The gate period.
    pub fn every(&self) -> u64 {
        self.every.get()
    }

    /// Zero the call counter.
    pub fn reset(&mut self) {
        self.calls = 0;
    }
}
