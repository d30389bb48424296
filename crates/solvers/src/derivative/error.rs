use crate::EvalError;

/// Errors that can occur while computing a derivative.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The function text could not be parsed.
    #[error("failed to parse function")]
    Parse(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The function could not be evaluated at a required point.
    #[error("evaluation failed at {variable} = {x}")]
    Evaluation {
        variable: String,
        x: f64,
        #[source]
        source: EvalError,
    },

    /// The evaluator could not differentiate the function symbolically.
    #[error("failed to differentiate with respect to `{variable}`")]
    Differentiation {
        variable: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
