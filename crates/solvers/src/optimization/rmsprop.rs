//! RMSProp descent for multi-variable minimization.
//!
//! Each step estimates the gradient `g` by central differences, updates a
//! running average of squared gradients and scales the step per coordinate:
//!
//! ```text
//! s ← ρ·s + (1 − ρ)·g²
//! x ← x − α / (√s + ε) · g
//! ```
//!
//! The descent stops when the gradient norm reaches [`Config::grad_tol`], when
//! [`Config::max_iters`] steps have been taken, or when an observer returns
//! [`Action::StopEarly`]. Every visited point is kept in [`Solution::path`].

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

use ndarray::Array1;
use stencil_core::{Evaluator, Expression, Observer};
use tracing::{debug, trace};

use crate::evaluate::{bind, evaluate, find_duplicate};

/// Minimizes `f` starting from `start`.
///
/// `variables[k]` names the coordinate `start[k]`. The observer receives an
/// [`Event`] after each step.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] or [`Error::DuplicateVariable`] for an
/// inconsistent variable list, or [`Error::Evaluation`] if `f` has no finite
/// value at a visited or gradient sample point.
pub fn minimize<E, S, Obs>(
    f: &Expression<'_, E>,
    variables: &[S],
    start: &[f64],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    E: Evaluator,
    S: AsRef<str>,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    check_inputs(variables, start)?;

    let mut x = Array1::from(start.to_vec());
    let mut s = Array1::<f64>::zeros(x.len());
    let mut objective = eval(f, variables, &x)?;
    let mut path = vec![start.to_vec()];

    debug!(n = x.len(), objective, "rmsprop started");

    for iter in 1..=config.max_iters() {
        let g = gradient(f, variables, &x, config.h())?;
        let grad_norm = g.dot(&g).sqrt();

        if grad_norm <= config.grad_tol() {
            debug!(iter = iter - 1, objective, "rmsprop converged");
            return Ok(finish(Status::Converged, iter - 1, objective, path));
        }

        let rho = config.rho();
        s = rho * &s + (1.0 - rho) * &g.mapv(|v| v * v);
        let scale = s.mapv(|v| config.alpha() / (v.sqrt() + config.epsilon()));
        x = &x - &(scale * &g);

        objective = eval(f, variables, &x)?;
        path.push(x.to_vec());
        trace!(iter, objective, grad_norm, "rmsprop step");

        let event = Event {
            iter,
            x: &path[iter],
            objective,
            grad_norm,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(Status::StoppedByObserver, iter, objective, path));
        }
    }

    debug!(objective, "rmsprop reached max iterations");
    Ok(finish(Status::MaxIters, config.max_iters(), objective, path))
}

/// Minimizes `f` without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns any error from [`minimize`].
pub fn minimize_unobserved<E, S>(
    f: &Expression<'_, E>,
    variables: &[S],
    start: &[f64],
    config: &Config,
) -> Result<Solution, Error>
where
    E: Evaluator,
    S: AsRef<str>,
{
    minimize(f, variables, start, config, ())
}

/// Parses `source` and minimizes it without observer support.
///
/// # Errors
///
/// Returns [`Error::Parse`] if `source` is malformed, otherwise any error from
/// [`minimize`]. Dimension and duplicate checks run before parsing.
pub fn calculate<E, S>(
    evaluator: &E,
    source: &str,
    variables: &[S],
    start: &[f64],
    config: &Config,
) -> Result<Solution, Error>
where
    E: Evaluator,
    S: AsRef<str>,
{
    check_inputs(variables, start)?;

    let f = Expression::parse(evaluator, source).map_err(|e| Error::Parse(Box::new(e)))?;
    minimize_unobserved(&f, variables, start, config)
}

/// Central-difference gradient, one coordinate at a time.
fn gradient<E, S>(
    f: &Expression<'_, E>,
    variables: &[S],
    x: &Array1<f64>,
    h: f64,
) -> Result<Array1<f64>, Error>
where
    E: Evaluator,
    S: AsRef<str>,
{
    let mut g = Array1::zeros(x.len());
    let mut p = x.clone();

    for k in 0..x.len() {
        p[k] = x[k] + h;
        let forward = eval(f, variables, &p)?;
        p[k] = x[k] - h;
        let backward = eval(f, variables, &p)?;
        p[k] = x[k];

        g[k] = (forward - backward) / (2.0 * h);
    }

    Ok(g)
}

fn eval<E, S>(f: &Expression<'_, E>, variables: &[S], x: &Array1<f64>) -> Result<f64, Error>
where
    E: Evaluator,
    S: AsRef<str>,
{
    let point = x.to_vec();
    evaluate(f, &bind(variables, &point)).map_err(|source| Error::Evaluation { point, source })
}

fn check_inputs<S: AsRef<str>>(variables: &[S], start: &[f64]) -> Result<(), Error> {
    if variables.len() != start.len() {
        return Err(Error::DimensionMismatch {
            variables: variables.len(),
            point: start.len(),
        });
    }

    if let Some(name) = find_duplicate(variables) {
        return Err(Error::DuplicateVariable {
            name: name.to_owned(),
        });
    }

    Ok(())
}

fn finish(status: Status, iters: usize, objective: f64, path: Vec<Vec<f64>>) -> Solution {
    let x = path.last().cloned().unwrap_or_default();
    Solution {
        status,
        x,
        objective,
        iters,
        path,
    }
}
