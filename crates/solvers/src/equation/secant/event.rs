/// Event emitted after each new iterate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step just completed, starting at 1.
    pub iter: usize,

    /// The new iterate.
    pub x: f64,

    /// Function value at `x`.
    pub residual: f64,
}
