use std::collections::BTreeMap;

/// Variable assignments used to evaluate an expression.
///
/// Keys are variable names and are unique by construction.
pub type Bindings = BTreeMap<String, f64>;

/// An expression backend that can parse, evaluate, and differentiate
/// scalar functions of named variables.
///
/// The numeric engines only ever talk to an expression through this trait, so
/// any backend (a hand-rolled parser, an off-the-shelf library, a table of
/// closures in tests) can be substituted without touching them.
///
/// Implementations should be deterministic: evaluating the same expression
/// with the same bindings must always produce the same result.
pub trait Evaluator {
    /// The backend's parsed representation of an expression.
    type Expr;

    /// The backend's failure type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Parses source text into an expression.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the text is not a well-formed expression.
    fn parse(&self, source: &str) -> Result<Self::Expr, Self::Error>;

    /// Evaluates an expression with the given variable bindings.
    ///
    /// A non-finite result is not an error at this level; callers decide how
    /// to treat it.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if a variable is unbound or the backend faults.
    fn evaluate(&self, expr: &Self::Expr, bindings: &Bindings) -> Result<f64, Self::Error>;

    /// Returns the symbolic derivative of an expression with respect to `variable`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the expression is outside the backend's
    /// supported differentiation rules.
    fn symbolic_derivative(
        &self,
        expr: &Self::Expr,
        variable: &str,
    ) -> Result<Self::Expr, Self::Error>;

    /// Renders an expression back into source text.
    fn render(&self, expr: &Self::Expr) -> String;
}
