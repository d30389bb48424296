use std::fmt;

use crate::{Bindings, Evaluator};

/// A parsed scalar function bound to the evaluator that produced it.
///
/// An `Expression` is immutable once created. It keeps the source text next
/// to the parsed form so results can refer back to what the caller typed.
pub struct Expression<'e, E: Evaluator> {
    evaluator: &'e E,
    parsed: E::Expr,
    source: String,
}

impl<'e, E: Evaluator> Expression<'e, E> {
    /// Parses `source` with `evaluator`.
    ///
    /// # Errors
    ///
    /// Returns the evaluator's error if the text cannot be parsed.
    pub fn parse(evaluator: &'e E, source: &str) -> Result<Self, E::Error> {
        let parsed = evaluator.parse(source)?;
        Ok(Self {
            evaluator,
            parsed,
            source: source.to_owned(),
        })
    }

    /// Wraps an already-parsed expression.
    ///
    /// Useful for callers that cache parsed expressions by source text.
    pub fn from_parsed(evaluator: &'e E, parsed: E::Expr, source: impl Into<String>) -> Self {
        Self {
            evaluator,
            parsed,
            source: source.into(),
        }
    }

    /// Returns the source text this expression was created from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the backend's parsed representation.
    #[must_use]
    pub fn parsed(&self) -> &E::Expr {
        &self.parsed
    }

    /// Returns the evaluator this expression is bound to.
    #[must_use]
    pub fn evaluator(&self) -> &'e E {
        self.evaluator
    }

    /// Evaluates the expression with the given bindings.
    ///
    /// # Errors
    ///
    /// Returns the evaluator's error if evaluation fails.
    pub fn evaluate(&self, bindings: &Bindings) -> Result<f64, E::Error> {
        self.evaluator.evaluate(&self.parsed, bindings)
    }

    /// Evaluates the expression as a function of a single variable.
    ///
    /// # Errors
    ///
    /// Returns the evaluator's error if evaluation fails, including when the
    /// expression refers to variables other than `variable`.
    pub fn evaluate_at(&self, variable: &str, x: f64) -> Result<f64, E::Error> {
        let bindings = Bindings::from([(variable.to_owned(), x)]);
        self.evaluate(&bindings)
    }

    /// Returns the symbolic derivative with respect to `variable`.
    ///
    /// The derivative's source text is the evaluator's rendering of it.
    ///
    /// # Errors
    ///
    /// Returns the evaluator's error if the expression cannot be differentiated.
    pub fn symbolic_derivative(&self, variable: &str) -> Result<Expression<'e, E>, E::Error> {
        let parsed = self.evaluator.symbolic_derivative(&self.parsed, variable)?;
        let source = self.evaluator.render(&parsed);
        Ok(Expression {
            evaluator: self.evaluator,
            parsed,
            source,
        })
    }

    /// Renders the parsed expression through the evaluator.
    #[must_use]
    pub fn render(&self) -> String {
        self.evaluator.render(&self.parsed)
    }
}

impl<E> Clone for Expression<'_, E>
where
    E: Evaluator,
    E::Expr: Clone,
{
    fn clone(&self) -> Self {
        Self {
            evaluator: self.evaluator,
            parsed: self.parsed.clone(),
            source: self.source.clone(),
        }
    }
}

impl<E: Evaluator> fmt::Debug for Expression<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expression")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<E: Evaluator> fmt::Display for Expression<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
