//! Per-step timing.

/// Timing collected during a single step.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire step.
    pub total_us: u64,
    /// Time spent inside the stepper's stencil pass (boundary included).
    pub stencil_us: u64,
    /// Time spent swapping the buffers and advancing the tick counter.
    pub commit_us: u64,
}
