/// Event emitted after each descent step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step just completed, starting at 1.
    pub iter: usize,

    /// The point reached by this step.
    pub x: &'a [f64],

    /// Function value at `x`.
    pub objective: f64,

    /// Norm of the gradient that produced this step.
    pub grad_norm: f64,
}
