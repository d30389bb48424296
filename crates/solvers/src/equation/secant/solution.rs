/// Indicates how the secant method ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The residual fell below the configured tolerance.
    Converged,

    /// The last two iterates had equal function values, so no secant exists.
    Stalled,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of the secant method.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the root.
    pub x: f64,

    /// Function value at `x`.
    pub residual: f64,

    /// Number of secant steps taken.
    pub iters: usize,

    /// Both starting guesses followed by every iterate.
    pub history: Vec<f64>,
}
