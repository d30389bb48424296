//! Numeric approximation engines for Stencil.
//!
//! Every engine consumes an [`Expression`] through the [`Evaluator`]
//! capability interface and returns an immutable result value:
//!
//! - [`derivative`]: forward, backward, and central finite differences, plus
//!   the evaluator's exact symbolic derivative for comparison
//! - [`hessian`]: the n×n matrix of second partials via a four-point stencil
//! - [`optimization::quadratic_fit`]: bracketing minimizer that records a full
//!   iteration trace
//! - [`optimization::rmsprop`]: adaptive gradient descent over several variables
//! - [`equation::secant`]: secant root finder, also usable to locate
//!   stationary points
//!
//! All engines are synchronous and pure. Diagnostics are emitted through
//! [`tracing`]; no subscriber is installed here.
//!
//! [`Expression`]: stencil_core::Expression
//! [`Evaluator`]: stencil_core::Evaluator

mod evaluate;

#[cfg(test)]
mod test_utils;

pub mod derivative;
pub mod equation;
pub mod hessian;
pub mod optimization;

pub use evaluate::EvalError;
