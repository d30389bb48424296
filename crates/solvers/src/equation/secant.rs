//! Secant method for single-variable root finding.
//!
//! Starting from two guesses `x0` and `x1`, each step replaces the older guess
//! with the root of the line through both:
//!
//! ```text
//! x2 = x1 − f(x1)·(x1 − x0) / (f(x1) − f(x0))
//! ```
//!
//! The method converges when `|f(x2)|` drops below [`Config::residual_tol`].
//! It stalls, returning `x1`, when `f(x1) = f(x0)` since the secant is then
//! horizontal. Every iterate is kept in [`Solution::history`].
//!
//! [`stationary_point`] applies the method to the symbolic derivative, which
//! locates minima and maxima of `f`.

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use stencil_core::{Evaluator, Expression, Observer};
use tracing::{debug, trace};

use crate::evaluate::evaluate_at;

/// Finds a root of `f` starting from the guesses `[x0, x1]`.
///
/// The observer receives an [`Event`] for each new iterate. A converged
/// iterate ends the run even if the observer asks to stop.
///
/// # Errors
///
/// Returns [`Error::Evaluation`] if `f` has no finite value at a guess or an
/// iterate.
pub fn solve<E, Obs>(
    f: &Expression<'_, E>,
    variable: &str,
    guesses: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    E: Evaluator,
    Obs: Observer<Event, Action>,
{
    let eval = |x: f64| evaluate_at(f, variable, x).map_err(|source| Error::Evaluation { x, source });

    let [mut x0, mut x1] = guesses;
    let mut f0 = eval(x0)?;
    let mut f1 = eval(x1)?;
    let mut history = vec![x0, x1];

    for iter in 1..=config.max_iters() {
        let df = f1 - f0;
        if df == 0.0 {
            debug!(iter = iter - 1, x = x1, "secant stalled");
            return Ok(Solution {
                status: Status::Stalled,
                x: x1,
                residual: f1,
                iters: iter - 1,
                history,
            });
        }

        let x2 = x1 - f1 * (x1 - x0) / df;
        let f2 = eval(x2)?;
        history.push(x2);
        trace!(iter, x = x2, residual = f2, "secant step");

        let event = Event {
            iter,
            x: x2,
            residual: f2,
        };
        let action = observer.observe(&event);

        let status = if f2.abs() < config.residual_tol() {
            Some(Status::Converged)
        } else {
            action.map(|Action::StopEarly| Status::StoppedByObserver)
        };

        if let Some(status) = status {
            debug!(?status, iter, x = x2, "secant finished");
            return Ok(Solution {
                status,
                x: x2,
                residual: f2,
                iters: iter,
                history,
            });
        }

        (x0, f0) = (x1, f1);
        (x1, f1) = (x2, f2);
    }

    debug!(x = x1, residual = f1, "secant reached max iterations");
    Ok(Solution {
        status: Status::MaxIters,
        x: x1,
        residual: f1,
        iters: config.max_iters(),
        history,
    })
}

/// Finds a root of `f` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::Evaluation`] if `f` has no finite value at a guess or an
/// iterate.
pub fn solve_unobserved<E: Evaluator>(
    f: &Expression<'_, E>,
    variable: &str,
    guesses: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, variable, guesses, config, ())
}

/// Finds a point where the derivative of `f` vanishes.
///
/// The returned residual is the derivative's value at `x`.
///
/// # Errors
///
/// Returns [`Error::Differentiation`] if the evaluator cannot differentiate
/// `f`, otherwise any error from [`solve`].
pub fn stationary_point<E: Evaluator>(
    f: &Expression<'_, E>,
    variable: &str,
    guesses: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    let derivative = f
        .symbolic_derivative(variable)
        .map_err(|e| Error::Differentiation {
            variable: variable.to_owned(),
            source: Box::new(e),
        })?;

    debug!(derivative = derivative.source(), "searching for stationary point");
    solve_unobserved(&derivative, variable, guesses, config)
}

/// Parses `source` and finds one of its stationary points.
///
/// # Errors
///
/// Returns [`Error::Parse`] if `source` is malformed, otherwise any error from
/// [`stationary_point`].
pub fn calculate<E: Evaluator>(
    evaluator: &E,
    source: &str,
    variable: &str,
    guesses: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    let f = Expression::parse(evaluator, source).map_err(|e| Error::Parse(Box::new(e)))?;
    stationary_point(&f, variable, guesses, config)
}
