//! Four-point finite-difference estimate of the Hessian matrix.
//!
//! Every cell `(i, j)` of the n×n grid, diagonal included, is estimated from
//! four perturbed copies of the point:
//!
//! ```text
//! f₁ = f(xᵢ+h, xⱼ+h)    f₂ = f(xᵢ+h, xⱼ−h)
//! f₃ = f(xᵢ−h, xⱼ−h)    f₄ = f(xᵢ−h, xⱼ+h)
//!
//! H[i][j] = (f₁ − f₂ − f₄ + f₃) / (4h²)
//! ```
//!
//! On the diagonal the two perturbations act on the same coordinate, so the
//! stencil samples `xᵢ ± 2h` and the unperturbed point. Cells are independent;
//! the full matrix costs 4·n² evaluations.
//!
//! Any evaluation failure aborts the whole computation. No partial matrix is
//! returned.

mod error;
mod matrix;

pub use error::Error;
pub use matrix::Hessian;

use ndarray::Array2;
use stencil_core::{Evaluator, Expression};
use tracing::{debug, trace};

use crate::evaluate::{bind, evaluate, find_duplicate};

/// Estimates the Hessian of `f` at `point`.
///
/// `variables[k]` names the coordinate `point[k]`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the lengths of `variables` and
/// `point` differ, [`Error::DuplicateVariable`] if a name repeats, or
/// [`Error::Evaluation`] if `f` has no finite value at a perturbed point.
/// The first two are checked before any evaluation.
pub fn estimate<E, S>(
    f: &Expression<'_, E>,
    variables: &[S],
    point: &[f64],
    h: f64,
) -> Result<Hessian, Error>
where
    E: Evaluator,
    S: AsRef<str>,
{
    check_inputs(variables, point)?;

    let n = point.len();
    let denom = 4.0 * h * h;
    let mut values = Array2::zeros((n, n));

    for i in 0..n {
        for j in 0..n {
            let mut p = point.to_vec();

            p[i] += h;
            p[j] += h;
            let f1 = eval(f, variables, &p)?;

            p[j] -= 2.0 * h;
            let f2 = eval(f, variables, &p)?;

            p[i] -= 2.0 * h;
            let f3 = eval(f, variables, &p)?;

            p[j] += 2.0 * h;
            let f4 = eval(f, variables, &p)?;

            let value = (f1 - f2 - f4 + f3) / denom;
            trace!(i, j, value, "hessian cell");
            values[(i, j)] = value;
        }
    }

    Ok(Hessian::new(values))
}

/// Parses `source` and estimates its Hessian at `point`.
///
/// # Errors
///
/// Returns [`Error::Parse`] if `source` is malformed, otherwise any error from
/// [`estimate`]. Dimension and duplicate checks run before parsing.
pub fn calculate<E, S>(
    evaluator: &E,
    source: &str,
    variables: &[S],
    point: &[f64],
    h: f64,
) -> Result<Hessian, Error>
where
    E: Evaluator,
    S: AsRef<str>,
{
    check_inputs(variables, point)?;

    let f = Expression::parse(evaluator, source).map_err(|e| Error::Parse(Box::new(e)))?;
    let hessian = estimate(&f, variables, point, h)?;

    debug!(
        function = source,
        n = hessian.dim(),
        h,
        max_asymmetry = hessian.max_asymmetry(),
        "hessian calculated"
    );

    Ok(hessian)
}

fn check_inputs<S: AsRef<str>>(variables: &[S], point: &[f64]) -> Result<(), Error> {
    if variables.len() != point.len() {
        return Err(Error::DimensionMismatch {
            variables: variables.len(),
            point: point.len(),
        });
    }

    if let Some(name) = find_duplicate(variables) {
        return Err(Error::DuplicateVariable {
            name: name.to_owned(),
        });
    }

    Ok(())
}

fn eval<E, S>(f: &Expression<'_, E>, variables: &[S], point: &[f64]) -> Result<f64, Error>
where
    E: Evaluator,
    S: AsRef<str>,
{
    evaluate(f, &bind(variables, point)).map_err(|source| Error::Evaluation {
        point: point.to_vec(),
        source,
    })
}
