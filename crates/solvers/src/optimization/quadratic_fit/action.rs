/// Actions an observer can take during quadratic fit search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current step and return the trace recorded so far.
    StopEarly,
}
