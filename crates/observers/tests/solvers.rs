use approx::assert_relative_eq;

use stencil_core::{ExmexEvaluator, Expression};
use stencil_observers::{EventLogger, NonFiniteGuard};
use stencil_solvers::{
    equation::secant,
    optimization::{quadratic_fit, rmsprop},
};

#[test]
fn guard_stops_degenerate_quadratic_fit() {
    let f = Expression::parse(&ExmexEvaluator, "x^2").unwrap();
    let config = quadratic_fit::Config::new(10).unwrap();
    let mut guard = NonFiniteGuard::new();

    let solution = quadratic_fit::minimize(&f, "x", [1.0, 1.0, 1.0], &config, &mut guard).unwrap();

    assert!(guard.tripped());
    assert_eq!(solution.status, quadratic_fit::Status::StoppedByObserver);
    assert_eq!(solution.trace.len(), 2);
}

#[test]
fn guard_leaves_healthy_runs_alone() {
    let f = Expression::parse(&ExmexEvaluator, "(x - 3)^2").unwrap();
    let config = quadratic_fit::Config::new(4).unwrap();
    let mut guard = NonFiniteGuard::new();

    let solution = quadratic_fit::minimize(&f, "x", [0.0, 2.0, 5.0], &config, &mut guard).unwrap();

    assert!(!guard.tripped());
    assert_eq!(solution.status, quadratic_fit::Status::Completed);
    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-9);
}

#[test]
fn logger_sees_every_secant_step() {
    let f = Expression::parse(&ExmexEvaluator, "x^2 - 2").unwrap();
    let mut logger = EventLogger::new("secant");

    let solution =
        secant::solve(&f, "x", [1.0, 2.0], &secant::Config::default(), &mut logger).unwrap();

    assert_eq!(solution.status, secant::Status::Converged);
    assert_eq!(logger.count(), solution.iters);
    assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-6);
}

#[test]
fn logger_sees_every_rmsprop_step() {
    let f = Expression::parse(&ExmexEvaluator, "x^2 + y^2").unwrap();
    let config = rmsprop::Config::new(0.1, 0.9, 1e-8, 20, 1e-5, 0.0).unwrap();
    let mut logger = EventLogger::new("rmsprop");

    let solution = rmsprop::minimize(&f, &["x", "y"], &[1.0, -1.0], &config, &mut logger).unwrap();

    assert_eq!(logger.count(), 20);
    assert_eq!(solution.path.len(), 21);
}
