use super::IterationTrace;

/// Indicates whether the search ran every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Ran the configured number of steps.
    Completed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a quadratic fit search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Middle point `b` of the final bracket.
    pub x: f64,

    /// Function value at `x`.
    pub objective: f64,

    /// Number of steps taken.
    pub iters: usize,

    /// Every recorded state, seed first.
    pub trace: IterationTrace,
}

impl Solution {
    pub(super) fn new(status: Status, iters: usize, trace: IterationTrace) -> Self {
        let last = *trace.last();
        Self {
            status,
            x: last.b,
            objective: last.yb,
            iters,
            trace,
        }
    }
}
