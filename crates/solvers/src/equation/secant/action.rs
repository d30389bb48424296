/// Actions an observer can take during the secant method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current iterate and return it.
    StopEarly,
}
