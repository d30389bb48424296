use crate::EvalError;

/// Errors that can occur during quadratic fit search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The function text could not be parsed.
    #[error("failed to parse function")]
    Parse(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The function could not be evaluated at a bracket point or candidate.
    #[error("evaluation failed at x = {x}")]
    Evaluation {
        x: f64,
        #[source]
        source: EvalError,
    },
}
