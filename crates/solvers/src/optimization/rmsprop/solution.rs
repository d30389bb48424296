/// Indicates how the descent ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The gradient norm fell to the configured tolerance.
    Converged,

    /// Reached the iteration limit.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an RMSProp descent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Final point.
    pub x: Vec<f64>,

    /// Function value at `x`.
    pub objective: f64,

    /// Number of steps taken.
    pub iters: usize,

    /// Every point visited, starting point first.
    pub path: Vec<Vec<f64>>,
}
