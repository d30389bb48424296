use crate::EvalError;

/// Errors that can occur during RMSProp descent.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The function text could not be parsed.
    #[error("failed to parse function")]
    Parse(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The number of variable names differs from the number of coordinates.
    #[error("{variables} variables but {point} coordinates")]
    DimensionMismatch { variables: usize, point: usize },

    /// A variable name appears more than once.
    #[error("variable `{name}` is listed more than once")]
    DuplicateVariable { name: String },

    /// The function could not be evaluated at a point.
    #[error("evaluation failed at {point:?}")]
    Evaluation {
        point: Vec<f64>,
        #[source]
        source: EvalError,
    },
}
