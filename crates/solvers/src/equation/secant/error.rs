use crate::EvalError;

/// Errors that can occur during the secant method.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The function text could not be parsed.
    #[error("failed to parse function")]
    Parse(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The evaluator could not differentiate the function.
    #[error("failed to differentiate with respect to `{variable}`")]
    Differentiation {
        variable: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The function could not be evaluated at an iterate.
    #[error("evaluation failed at x = {x}")]
    Evaluation {
        x: f64,
        #[source]
        source: EvalError,
    },
}
