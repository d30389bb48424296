//! Quadratic fit search for single-variable minimization.
//!
//! # Algorithm
//!
//! Each step fits a parabola through the bracket `(a, b, c)`, takes its vertex
//! as the candidate `x`, evaluates `f(x)` and folds the candidate into the
//! bracket:
//!
//! | position | value      | new bracket  |
//! |----------|------------|--------------|
//! | `x > b`  | `yx > yb`  | `(a, b, x)`  |
//! | `x > b`  | `yx ≤ yb`  | `(b, x, c)`  |
//! | `x < b`  | `yx > yb`  | `(x, b, c)`  |
//! | `x < b`  | `yx ≤ yb`  | `(a, x, b)`  |
//! | `x = b`  | any        | unchanged    |
//!
//! # Trace
//!
//! The search runs exactly [`Config::iters`] steps and never checks for
//! convergence. Every state is kept in an [`IterationTrace`]: record 0 is the
//! seed bracket and record `k` the bracket after step `k`, together with the
//! candidate and the parabola fitted to that bracket.
//!
//! Coinciding or colinear points are not errors. The resulting infinities or
//! NaNs are written to the trace and the run continues; use
//! [`IterationTrace::first_non_finite`] to find where the search broke down.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per step, after the record is appended.
//! Observers can return [`Action::StopEarly`] to end the run with the trace
//! recorded so far.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod quadratic;
mod record;
mod search;
mod solution;
mod trace;


pub use action::Action;
pub use bracket::Bracket;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use quadratic::Quadratic;
pub use record::IterationRecord;
pub use solution::{Solution, Status};
pub use trace::IterationTrace;

use stencil_core::{Evaluator, Expression, Observer};

use search::search;

/// Minimizes `f` over `variable` starting from the bracket `[a, b, c]`.
///
/// If `a > c` the outer points are swapped. The observer receives an [`Event`]
/// after each step.
///
/// # Errors
///
/// Returns [`Error::Evaluation`] if `f` has no finite value at a bracket point
/// or at a finite candidate.
pub fn minimize<E, Obs>(
    f: &Expression<'_, E>,
    variable: &str,
    bracket: [f64; 3],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    E: Evaluator,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search(f, variable, bracket, config, observer)
}

/// Minimizes `f` without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
/// The returned trace always holds `config.iters() + 1` records.
///
/// # Errors
///
/// Returns [`Error::Evaluation`] if `f` has no finite value at a bracket point
/// or at a finite candidate.
pub fn minimize_unobserved<E: Evaluator>(
    f: &Expression<'_, E>,
    variable: &str,
    bracket: [f64; 3],
    config: &Config,
) -> Result<Solution, Error> {
    minimize(f, variable, bracket, config, ())
}

/// Parses `source` and minimizes it without observer support.
///
/// # Errors
///
/// Returns [`Error::Parse`] if `source` is malformed, otherwise any error from
/// [`minimize`].
pub fn calculate<E: Evaluator>(
    evaluator: &E,
    source: &str,
    variable: &str,
    bracket: [f64; 3],
    config: &Config,
) -> Result<Solution, Error> {
    let f = Expression::parse(evaluator, source).map_err(|e| Error::Parse(Box::new(e)))?;
    minimize_unobserved(&f, variable, bracket, config)
}
