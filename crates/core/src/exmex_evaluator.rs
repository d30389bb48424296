//! An [`Evaluator`] backed by the `exmex` expression crate.
//!
//! `exmex` parses infix expressions such as `x^2 + sin(y)`, evaluates them
//! with positional arguments ordered by variable name, and differentiates them
//! symbolically. This module adapts it to name-based [`Bindings`].

use exmex::FlatEx;
use exmex::prelude::*;
use thiserror::Error;

use crate::{Bindings, Evaluator};

/// Expression evaluator backed by [`exmex`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExmexEvaluator;

/// Errors raised by [`ExmexEvaluator`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExmexError {
    #[error("failed to parse `{text}`: {message}")]
    Parse { text: String, message: String },

    #[error("variable `{name}` is not bound")]
    UnboundVariable { name: String },

    #[error("evaluation failed: {message}")]
    Evaluation { message: String },

    #[error("cannot differentiate with respect to `{variable}`: {message}")]
    Differentiation { variable: String, message: String },
}

impl ExmexEvaluator {
    /// Creates a new evaluator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for ExmexEvaluator {
    type Expr = FlatEx<f64>;
    type Error = ExmexError;

    fn parse(&self, source: &str) -> Result<Self::Expr, Self::Error> {
        exmex::parse::<f64>(source).map_err(|e| ExmexError::Parse {
            text: source.to_owned(),
            message: e.to_string(),
        })
    }

    fn evaluate(&self, expr: &Self::Expr, bindings: &Bindings) -> Result<f64, Self::Error> {
        // exmex takes arguments positionally, in the order of `var_names`.
        let args = expr
            .var_names()
            .iter()
            .map(|name| {
                bindings
                    .get(name.as_str())
                    .copied()
                    .ok_or_else(|| ExmexError::UnboundVariable { name: name.clone() })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        expr.eval(&args).map_err(|e| ExmexError::Evaluation {
            message: e.to_string(),
        })
    }

    fn symbolic_derivative(
        &self,
        expr: &Self::Expr,
        variable: &str,
    ) -> Result<Self::Expr, Self::Error> {
        let differentiation = |message: String| ExmexError::Differentiation {
            variable: variable.to_owned(),
            message,
        };

        match expr.var_names().iter().position(|name| name == variable) {
            Some(index) => expr
                .clone()
                .partial(index)
                .map_err(|e| differentiation(e.to_string())),
            // Constant with respect to `variable`.
            None => exmex::parse::<f64>("0").map_err(|e| differentiation(e.to_string())),
        }
    }

    fn render(&self, expr: &Self::Expr) -> String {
        expr.unparse().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::Expression;

    fn bindings(pairs: &[(&str, f64)]) -> Bindings {
        pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), *value))
            .collect()
    }

    #[test]
    fn evaluates_with_named_bindings() {
        let evaluator = ExmexEvaluator::new();
        let expr = evaluator.parse("x^2 + 3*y").expect("should parse");

        let value = evaluator
            .evaluate(&expr, &bindings(&[("y", 2.0), ("x", 4.0)]))
            .expect("should evaluate");

        assert_relative_eq!(value, 22.0);
    }

    #[test]
    fn extra_bindings_are_ignored() {
        let evaluator = ExmexEvaluator::new();
        let expr = evaluator.parse("x + 1").expect("should parse");

        let value = evaluator
            .evaluate(&expr, &bindings(&[("x", 1.0), ("unused", 9.0)]))
            .expect("should evaluate");

        assert_relative_eq!(value, 2.0);
    }

    #[test]
    fn missing_binding_is_reported_by_name() {
        let evaluator = ExmexEvaluator::new();
        let expr = evaluator.parse("x * y").expect("should parse");

        let error = evaluator
            .evaluate(&expr, &bindings(&[("x", 1.0)]))
            .expect_err("y is unbound");

        assert_eq!(error, ExmexError::UnboundVariable { name: "y".into() });
    }

    #[test]
    fn malformed_source_is_a_parse_error() {
        let evaluator = ExmexEvaluator::new();

        let error = evaluator.parse("(x + 1").expect_err("should not parse");

        assert!(matches!(error, ExmexError::Parse { .. }));
    }

    #[test]
    fn derivative_of_square_evaluates_to_twice_x() {
        let evaluator = ExmexEvaluator::new();
        let expr = Expression::parse(&evaluator, "x^2").expect("should parse");

        let derivative = expr.symbolic_derivative("x").expect("should differentiate");

        assert!(derivative.source().contains('x'));
        assert_relative_eq!(derivative.evaluate_at("x", 2.0).unwrap(), 4.0);
    }

    #[test]
    fn derivative_for_absent_variable_is_zero() {
        let evaluator = ExmexEvaluator::new();
        let expr = Expression::parse(&evaluator, "x^2").expect("should parse");

        let derivative = expr.symbolic_derivative("y").expect("should differentiate");

        assert_relative_eq!(derivative.evaluate(&Bindings::new()).unwrap(), 0.0);
    }

    #[test]
    fn partial_derivative_of_two_variables() {
        let evaluator = ExmexEvaluator::new();
        let expr = Expression::parse(&evaluator, "x*y^2").expect("should parse");

        let dy = expr.symbolic_derivative("y").expect("should differentiate");

        let value = dy
            .evaluate(&bindings(&[("x", 3.0), ("y", 2.0)]))
            .expect("should evaluate");
        assert_relative_eq!(value, 12.0);
    }
}
