//! Closure-backed evaluator for unit tests.

use thiserror::Error;

use stencil_core::{Bindings, Evaluator, Expression};

/// A test function; `None` means a variable it needs is unbound.
pub(crate) type TestFn = fn(&Bindings) -> Option<f64>;

/// Evaluator whose expressions are plain function pointers.
///
/// Parsing and symbolic differentiation are unsupported.
#[derive(Debug)]
pub(crate) struct FnEvaluator;

#[derive(Debug, Error)]
pub(crate) enum TestError {
    #[error("operation not supported by the test evaluator")]
    Unsupported,

    #[error("a required variable is not bound")]
    Unbound,
}

impl Evaluator for FnEvaluator {
    type Expr = TestFn;
    type Error = TestError;

    fn parse(&self, _source: &str) -> Result<TestFn, TestError> {
        Err(TestError::Unsupported)
    }

    fn evaluate(&self, expr: &TestFn, bindings: &Bindings) -> Result<f64, TestError> {
        expr(bindings).ok_or(TestError::Unbound)
    }

    fn symbolic_derivative(&self, _expr: &TestFn, _variable: &str) -> Result<TestFn, TestError> {
        Err(TestError::Unsupported)
    }

    fn render(&self, _expr: &TestFn) -> String {
        "<fn>".to_owned()
    }
}

static EVALUATOR: FnEvaluator = FnEvaluator;

/// Wraps a test function as an [`Expression`].
pub(crate) fn function(f: TestFn) -> Expression<'static, FnEvaluator> {
    Expression::from_parsed(&EVALUATOR, f, "<fn>")
}

/// Looks up a variable, returning `None` when unbound.
pub(crate) fn var(bindings: &Bindings, name: &str) -> Option<f64> {
    bindings.get(name).copied()
}
