use super::Method;

/// The exact derivative as produced by the evaluator's symbolic rules.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactDerivative {
    /// Rendered source text of the derivative.
    pub text: String,

    /// The derivative evaluated at the requested point.
    pub value: f64,
}

/// Outcome of a full derivative calculation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivativeResult {
    /// Rendered source text of the exact derivative.
    pub exact_text: String,

    /// Exact derivative value at the requested point.
    pub exact_value: f64,

    /// Finite-difference estimate at the requested point.
    pub numeric_value: f64,

    /// `|exact_value − numeric_value|`.
    pub absolute_difference: f64,
}

/// Parameters of a derivative calculation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    /// Name of the variable to differentiate with respect to.
    pub variable: String,

    /// Point at which to differentiate.
    pub x: f64,

    /// Finite-difference step.
    pub h: f64,

    /// Finite-difference stencil.
    pub method: Method,
}

impl Request {
    /// Creates a request for a function of `x`.
    #[must_use]
    pub fn new(x: f64, h: f64, method: Method) -> Self {
        Self {
            variable: "x".to_owned(),
            x,
            h,
            method,
        }
    }

    /// Differentiates with respect to `variable` instead of `x`.
    #[must_use]
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }
}
