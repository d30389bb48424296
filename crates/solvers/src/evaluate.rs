use thiserror::Error;

use stencil_core::{Bindings, Evaluator, Expression};

/// Errors that can occur when evaluating a function at a required point.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The evaluator failed (unbound variable, domain error, backend fault).
    #[error("evaluator failed")]
    Evaluator(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The evaluator produced a value that is not finite.
    #[error("function value is not finite: {value}")]
    NonFinite { value: f64 },
}

/// Evaluates `f` with `bindings`, requiring a finite result.
///
/// # Errors
///
/// Returns an error if the evaluator fails or the value is NaN or infinite.
pub(crate) fn evaluate<E: Evaluator>(
    f: &Expression<'_, E>,
    bindings: &Bindings,
) -> Result<f64, EvalError> {
    let value = f
        .evaluate(bindings)
        .map_err(|e| EvalError::Evaluator(Box::new(e)))?;
    finite(value)
}

/// Evaluates `f` as a function of the single variable `variable`.
///
/// # Errors
///
/// Returns an error if the evaluator fails or the value is NaN or infinite.
pub(crate) fn evaluate_at<E: Evaluator>(
    f: &Expression<'_, E>,
    variable: &str,
    x: f64,
) -> Result<f64, EvalError> {
    let value = f
        .evaluate_at(variable, x)
        .map_err(|e| EvalError::Evaluator(Box::new(e)))?;
    finite(value)
}

/// Pairs variable names with coordinates.
///
/// Callers must have checked that the lengths agree.
pub(crate) fn bind<S: AsRef<str>>(variables: &[S], point: &[f64]) -> Bindings {
    variables
        .iter()
        .zip(point)
        .map(|(name, value)| (name.as_ref().to_owned(), *value))
        .collect()
}

/// Returns the first name that appears more than once.
pub(crate) fn find_duplicate<S: AsRef<str>>(variables: &[S]) -> Option<&str> {
    variables.iter().enumerate().find_map(|(i, name)| {
        let name = name.as_ref();
        variables[..i]
            .iter()
            .any(|earlier| earlier.as_ref() == name)
            .then_some(name)
    })
}

fn finite(value: f64) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite { value })
    }
}
