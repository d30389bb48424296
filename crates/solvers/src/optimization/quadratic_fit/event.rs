use super::IterationRecord;

/// Event emitted after each refinement step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step just completed, starting at 1.
    pub iter: usize,

    /// Function value at the candidate `record.x`.
    ///
    /// NaN when the candidate was not finite and so was not evaluated.
    pub value: f64,

    /// The record appended to the trace for this step.
    pub record: &'a IterationRecord,
}

impl Event<'_> {
    /// Returns the candidate evaluated during this step.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.record.x
    }

    /// Returns `true` if every value in this step's record is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.record.is_finite()
    }
}
