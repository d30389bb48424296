/// Actions an observer can take during RMSProp descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current step and return the current point.
    StopEarly,
}
