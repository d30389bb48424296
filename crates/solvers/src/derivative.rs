//! Finite-difference estimates of a first derivative.
//!
//! # Stencils
//!
//! - [`Method::Backward`]: `(f(x) − f(x−h)) / h`, error O(h)
//! - [`Method::Forward`]: `(f(x+h) − f(x)) / h`, error O(h)
//! - [`Method::Central`]: `(f(x+h) − f(x−h)) / (2h)`, error O(h²)
//!
//! The step `h` is taken as given. There is no adaptive step selection and no
//! retry; a zero `h` produces a non-finite estimate which is returned as is.
//!
//! [`exact`] asks the evaluator for the symbolic derivative so the estimate can
//! be compared against it, and [`calculate`] runs the whole comparison from
//! source text.

mod error;
mod method;
mod result;

pub use error::Error;
pub use method::{Method, UnknownMethod};
pub use result::{DerivativeResult, ExactDerivative, Request};

use stencil_core::{Evaluator, Expression};
use tracing::debug;

use crate::evaluate::evaluate_at;

/// Estimates `df/d(variable)` at `x` using the given stencil.
///
/// # Errors
///
/// Returns [`Error::Evaluation`] if `f` cannot be evaluated to a finite value
/// at any stencil point.
pub fn estimate<E: Evaluator>(
    f: &Expression<'_, E>,
    variable: &str,
    x: f64,
    h: f64,
    method: Method,
) -> Result<f64, Error> {
    let eval = |at: f64| {
        evaluate_at(f, variable, at).map_err(|source| Error::Evaluation {
            variable: variable.to_owned(),
            x: at,
            source,
        })
    };

    let value = match method {
        Method::Backward => (eval(x)? - eval(x - h)?) / h,
        Method::Forward => (eval(x + h)? - eval(x)?) / h,
        Method::Central => (eval(x + h)? - eval(x - h)?) / (2.0 * h),
    };

    Ok(value)
}

/// Computes the exact derivative symbolically and evaluates it at `x`.
///
/// # Errors
///
/// Returns [`Error::Differentiation`] if the evaluator cannot differentiate
/// `f`, or [`Error::Evaluation`] if the derivative has no finite value at `x`.
pub fn exact<E: Evaluator>(
    f: &Expression<'_, E>,
    variable: &str,
    x: f64,
) -> Result<ExactDerivative, Error> {
    let derivative = f
        .symbolic_derivative(variable)
        .map_err(|e| Error::Differentiation {
            variable: variable.to_owned(),
            source: Box::new(e),
        })?;

    let value = evaluate_at(&derivative, variable, x).map_err(|source| Error::Evaluation {
        variable: variable.to_owned(),
        x,
        source,
    })?;

    Ok(ExactDerivative {
        text: derivative.source().to_owned(),
        value,
    })
}

/// Parses `source` and compares its exact and estimated derivatives.
///
/// # Errors
///
/// Returns [`Error::Parse`] if `source` is malformed, otherwise any error from
/// [`exact`] or [`estimate`].
pub fn calculate<E: Evaluator>(
    evaluator: &E,
    source: &str,
    request: &Request,
) -> Result<DerivativeResult, Error> {
    let f = Expression::parse(evaluator, source).map_err(|e| Error::Parse(Box::new(e)))?;

    let exact = exact(&f, &request.variable, request.x)?;
    let numeric_value = estimate(&f, &request.variable, request.x, request.h, request.method)?;

    debug!(
        function = source,
        method = %request.method,
        x = request.x,
        h = request.h,
        exact = exact.value,
        numeric = numeric_value,
        "derivative calculated"
    );

    Ok(DerivativeResult {
        absolute_difference: (exact.value - numeric_value).abs(),
        exact_text: exact.text,
        exact_value: exact.value,
        numeric_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use crate::{
        EvalError,
        test_utils::{function, var},
    };

    #[test]
    fn stencils_match_their_formulas() {
        let f = function(|b| Some(var(b, "x")?.powi(3)));
        let (x, h) = (2.0, 0.5);

        let backward = estimate(&f, "x", x, h, Method::Backward).unwrap();
        let forward = estimate(&f, "x", x, h, Method::Forward).unwrap();
        let central = estimate(&f, "x", x, h, Method::Central).unwrap();

        assert_relative_eq!(backward, (8.0 - 3.375) / 0.5);
        assert_relative_eq!(forward, (15.625 - 8.0) / 0.5);
        assert_relative_eq!(central, (15.625 - 3.375) / 1.0);
    }

    #[test]
    fn central_difference_of_square() {
        let f = function(|b| Some(var(b, "x")?.powi(2)));

        let value = estimate(&f, "x", 2.0, 0.01, Method::Central).unwrap();

        assert_relative_eq!(value, 4.0, epsilon = 1e-3);
    }

    #[test]
    fn error_decays_with_stencil_order() {
        let f = function(|b| Some(var(b, "t")?.sin()));
        let x = 1.0_f64;
        let truth = x.cos();

        for method in Method::ALL {
            let mut h = 0.1;
            while h > 1e-3 {
                let coarse = (estimate(&f, "t", x, h, method).unwrap() - truth).abs();
                let fine = (estimate(&f, "t", x, h / 2.0, method).unwrap() - truth).abs();
                let expected = 2.0_f64.powi(method.order().try_into().unwrap());

                assert_relative_eq!(coarse / fine, expected, max_relative = 0.1);
                h /= 2.0;
            }
        }
    }

    #[test]
    fn zero_step_propagates_non_finite_value() {
        let f = function(|b| Some(var(b, "x")?.powi(2)));

        let value = estimate(&f, "x", 1.0, 0.0, Method::Forward).unwrap();

        assert!(value.is_nan());
    }

    #[test]
    fn evaluation_failure_reports_the_point() {
        // ln is undefined for x <= 0.
        let f = function(|b| Some(var(b, "x")?.ln()));

        let error = estimate(&f, "x", 0.0, 0.1, Method::Central).unwrap_err();

        match error {
            Error::Evaluation { variable, x, source } => {
                assert_eq!(variable, "x");
                assert_relative_eq!(x, -0.1);
                assert!(matches!(source, EvalError::NonFinite { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn exact_reports_unsupported_differentiation() {
        let f = function(|b| var(b, "x"));

        let error = exact(&f, "x", 1.0).unwrap_err();

        assert!(matches!(error, Error::Differentiation { .. }));
    }

    #[test]
    fn calculate_reports_parse_failure() {
        let error = calculate(
            &crate::test_utils::FnEvaluator,
            "x^2",
            &Request::new(1.0, 0.1, Method::Central),
        )
        .unwrap_err();

        assert!(matches!(error, Error::Parse(_)));
    }

    proptest! {
        #[test]
        fn central_is_exact_for_quadratics(
            x in -10.0..10.0_f64,
            h in 1e-2..1.0_f64,
        ) {
            // Central differences have no truncation error on x² terms.
            let f = function(|b| Some(3.0 * var(b, "x")?.powi(2) - var(b, "x")?));
            let value = estimate(&f, "x", x, h, Method::Central).unwrap();

            prop_assert!((value - (6.0 * x - 1.0)).abs() < 1e-6 * (1.0 + x.abs()));
        }
    }
}
